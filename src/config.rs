//! Command-line configuration.
//!
//! Every flag also reads from a `USER_DIRECTORY_*` environment variable. The
//! defaults reproduce the reference behavior: the public demo endpoint, no
//! timeout, Spanish messages.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use url::Url;

use crate::api::DEFAULT_ENDPOINT;
use crate::i18n::Locale;

#[derive(Debug, Parser)]
#[command(name = "user-directory", version, about)]
pub struct Cli {
    /// URL returning a JSON array of users.
    #[arg(long, env = "USER_DIRECTORY_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    pub endpoint: Url,

    /// Give up on the request after this many seconds. Unset means wait forever.
    #[arg(
        long,
        env = "USER_DIRECTORY_TIMEOUT_SECS",
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub timeout_secs: Option<u64>,

    /// Language of the fixed messages.
    #[arg(long, env = "USER_DIRECTORY_LOCALE", value_enum, default_value_t = Locale::Es)]
    pub locale: Locale,

    /// Theme file; created with defaults when missing.
    #[arg(long, env = "USER_DIRECTORY_THEME", default_value = "theme.conf")]
    pub theme: PathBuf,

    /// Keybindings file; created with defaults when missing.
    #[arg(long, env = "USER_DIRECTORY_KEYBINDS", default_value = "keybinds.conf")]
    pub keybinds: PathBuf,

    /// Append logs to this file. Logging is off without it.
    #[arg(long, env = "USER_DIRECTORY_LOG_FILE")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}
