use std::fmt::{Display, Formatter};

use crate::i18n::Locale;

pub type DynError = Box<dyn std::error::Error + Send + Sync + 'static>;
pub type Result<T> = std::result::Result<T, DynError>;

pub trait Context<T> {
    fn with_ctx<F: FnOnce() -> String>(self, f: F) -> Result<T>;
}

#[derive(Debug)]
pub struct WithContextError {
    pub context: String,
    pub source: DynError,
}

impl Display for WithContextError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.context, self.source)
    }
}

impl std::error::Error for WithContextError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&*self.source)
    }
}

impl<T, E> Context<T> for std::result::Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn with_ctx<F: FnOnce() -> String>(self, f: F) -> Result<T> {
        self.map_err(|e| {
            Box::new(WithContextError {
                context: f(),
                source: e.into(),
            }) as DynError
        })
    }
}

/// Why the user list could not be obtained.
///
/// Every variant ends up as the same `Error(message)` view state; they differ
/// only in how the message is produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FetchError {
    /// The request could not be completed (DNS, connect, transport timeout).
    Network(String),
    /// The server answered with a non-success status.
    HttpStatus(u16),
    /// The body was not valid JSON or not a list of users.
    Parse(String),
}

impl FetchError {
    /// Text shown after `Error: ` in the view.
    ///
    /// Status failures use the fixed localized message; the others surface the
    /// underlying failure's text verbatim.
    pub fn display_message(&self, locale: Locale) -> String {
        match self {
            FetchError::HttpStatus(_) => locale.fetch_failed().to_string(),
            FetchError::Network(msg) | FetchError::Parse(msg) => msg.clone(),
        }
    }
}

impl Display for FetchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchError::Network(msg) => write!(f, "network failure: {msg}"),
            FetchError::HttpStatus(code) => write!(f, "unexpected HTTP status {code}"),
            FetchError::Parse(msg) => write!(f, "invalid response body: {msg}"),
        }
    }
}

impl std::error::Error for FetchError {}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            return FetchError::HttpStatus(status.as_u16());
        }
        if err.is_decode() {
            return FetchError::Parse(error_chain(&err));
        }
        FetchError::Network(error_chain(&err))
    }
}

/// `err` followed by each of its sources, joined with `": "`.
///
/// A source whose text is already part of the message is skipped.
pub fn error_chain(err: &(dyn std::error::Error + 'static)) -> String {
    let mut msg = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !msg.contains(&text) {
            msg.push_str(": ");
            msg.push_str(&text);
        }
        source = cause.source();
    }
    msg
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Parse(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn status_failure_uses_fixed_message() {
        let err = FetchError::HttpStatus(500);
        assert_eq!(
            err.display_message(Locale::Es),
            "No se pudo obtener la lista de usuarios"
        );
        assert_eq!(
            err.display_message(Locale::En),
            "Could not retrieve the user list"
        );
    }

    #[test]
    fn other_failures_surface_their_text() {
        let net = FetchError::Network("connection refused".into());
        assert_eq!(net.display_message(Locale::Es), "connection refused");
        let parse = FetchError::Parse("expected value at line 1 column 1".into());
        assert_eq!(
            parse.display_message(Locale::En),
            "expected value at line 1 column 1"
        );
    }

    #[test]
    fn serde_errors_become_parse_failures() {
        let err = serde_json::from_str::<Vec<u32>>("not json").unwrap_err();
        assert!(matches!(FetchError::from(err), FetchError::Parse(_)));
    }

    #[test]
    fn error_chain_appends_sources_once() {
        let inner: std::result::Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::ConnectionRefused,
            "Connection refused",
        ));
        let outer = inner.with_ctx(|| "tcp connect error".to_string()).unwrap_err();
        let wrapped: std::result::Result<(), DynError> = Err(outer);
        let top = wrapped
            .map_err(|e| WithContextError {
                context: "error sending request".to_string(),
                source: e,
            })
            .unwrap_err();
        assert_eq!(
            error_chain(&top),
            "error sending request: tcp connect error: Connection refused"
        );
        assert_eq!(error_chain(&FetchError::HttpStatus(500)), "unexpected HTTP status 500");
    }

    #[test]
    fn context_wraps_source() {
        let res: std::result::Result<(), std::io::Error> =
            Err(std::io::Error::other("boom"));
        let err = res.with_ctx(|| "init terminal".to_string()).unwrap_err();
        assert_eq!(err.to_string(), "init terminal: boom");
        assert!(err.source().is_some());
    }
}
