use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod exits;
mod terminal;
mod tui;

use cli::{Cli, prompts};

const DEFAULT_LOG: &str = "passwdgen=warn";

/// Filter from `RUST_LOG`, or the default when unset or malformed.
fn log_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG))
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(log_filter(std::env::var("RUST_LOG").ok().as_deref()))
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();
}

fn main() -> ExitCode {
    exits::install_handlers();
    exits::disable_core_dumps();
    init_tracing();

    let args = Cli::parse();

    let result = match args.command {
        None => tui::run(),
        Some(command) => cli::run(command),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            prompts::error(&format!("{e:#}"));
            ExitCode::FAILURE
        }
    }
}
