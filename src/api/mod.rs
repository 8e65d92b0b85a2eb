//! Remote user source.
//!
//! [`ApiClient`] performs the single GET against the users endpoint;
//! [`PendingFetch`] carries that request while it is in flight and hands the
//! outcome back to the UI thread without blocking it.

use std::time::Duration;

use reqwest::Client;
use tokio::runtime::Handle;
use tokio::sync::oneshot::{self, error::TryRecvError};
use tokio::task::JoinHandle;
use tracing::{Instrument, debug, info_span, warn};
use url::Url;

use crate::error::FetchError;
use crate::model::{UserRecord, parse_users};

/// Endpoint used when none is configured.
pub const DEFAULT_ENDPOINT: &str = "https://jsonplaceholder.typicode.com/users";

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Result of one fetch, as delivered to the view.
pub type FetchOutcome = Result<Vec<UserRecord>, FetchError>;

#[derive(Clone, Debug)]
pub struct ApiClient {
    client: Client,
    endpoint: Url,
}

impl ApiClient {
    /// Build a client for `endpoint`. `timeout` bounds the whole request; `None`
    /// lets a hung request wait forever.
    pub fn new(endpoint: Url, timeout: Option<Duration>) -> Result<Self, FetchError> {
        let mut builder = Client::builder().user_agent(USER_AGENT);
        if let Some(t) = timeout {
            builder = builder.timeout(t);
        }
        Ok(Self {
            client: builder.build()?,
            endpoint,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// GET the endpoint and decode the body as a list of users.
    ///
    /// # Errors
    /// `HttpStatus` for a non-success status, `Parse` when the body is not a
    /// JSON array of users, `Network` for everything else.
    pub async fn fetch_users(&self) -> FetchOutcome {
        let span = info_span!(
            "users.fetch",
            http.method = "GET",
            url = %self.endpoint
        );
        async {
            let response = self.client.get(self.endpoint.clone()).send().await?;
            let status = response.status();
            if !status.is_success() {
                warn!(status = status.as_u16(), "user list request failed");
                return Err(FetchError::HttpStatus(status.as_u16()));
            }
            let body = response.bytes().await?;
            let users = parse_users(&body)?;
            debug!(count = users.len(), "user list decoded");
            Ok(users)
        }
        .instrument(span)
        .await
    }
}

/// A fetch running on the async runtime.
///
/// Dropping it aborts the task; an outcome that still races the abort finds
/// the receiver gone and is thrown away.
#[derive(Debug)]
pub struct PendingFetch {
    rx: oneshot::Receiver<FetchOutcome>,
    task: JoinHandle<()>,
}

impl PendingFetch {
    pub fn spawn(client: ApiClient, runtime: &Handle) -> Self {
        let (tx, rx) = oneshot::channel();
        let task = runtime.spawn(async move {
            let outcome = client.fetch_users().await;
            if tx.send(outcome).is_err() {
                debug!("view dropped before the fetch completed; discarding result");
            }
        });
        Self { rx, task }
    }

    /// The outcome if the fetch has finished, without waiting.
    pub fn try_take(&mut self) -> Option<FetchOutcome> {
        match self.rx.try_recv() {
            Ok(outcome) => Some(outcome),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Closed) => Some(Err(FetchError::Network(
                "fetch task ended without a result".to_string(),
            ))),
        }
    }
}

impl Drop for PendingFetch {
    fn drop(&mut self) {
        self.task.abort();
    }
}
