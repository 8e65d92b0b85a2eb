//! user-directory binary entry point.
//!
//! Parses the command line, starts the async runtime used for the fetch,
//! puts the terminal in raw mode, runs the TUI event loop, and restores the
//! terminal state on exit.
//!
use clap::Parser;
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::error;

use user_directory::api::ApiClient;
use user_directory::app::keymap::Keymap;
use user_directory::app::{self, Theme, UserDirectoryView};
use user_directory::config::Cli;
use user_directory::error::{Context, Result};
use user_directory::telemetry;

/// Initialize a Crossterm-backed `ratatui` terminal in raw mode.
fn init_terminal() -> std::io::Result<Terminal<CrosstermBackend<std::io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend)
}

/// Program entry point: run the TUI and report any top-level error to stderr.
fn main() -> Result<()> {
    let cli = Cli::parse();
    telemetry::init(cli.log_file.as_deref())?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_all()
        .build()
        .with_ctx(|| "start async runtime".to_string())?;
    let client = ApiClient::new(cli.endpoint.clone(), cli.timeout())
        .with_ctx(|| "build HTTP client".to_string())?;
    let view = UserDirectoryView::new(
        Theme::load_or_init(&cli.theme),
        Keymap::load_or_init(&cli.keybinds),
        cli.locale,
    );

    let mut terminal = init_terminal().with_ctx(|| "init terminal".to_string())?;

    let res = app::run(&mut terminal, view, client, runtime.handle());

    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();
    runtime.shutdown_background();

    if let Err(err) = res {
        error!("application error: {err:#}");
        eprintln!("application error: {err:#}");
    }
    Ok(())
}
