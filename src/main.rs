//! PL Navigator - Entry Point
//!
//! Validates the optional start path, takes over the terminal and runs one
//! navigation session. Fatal errors are reported after the terminal has been
//! restored.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use pl_navigator::app::{self, AppOutcome};
use pl_navigator::core::error::Result;
use pl_navigator::core::NavigatorConfig;
use pl_navigator::ui::TerminalPresenter;

/// Interactive navigator for course content directories
#[derive(Parser, Debug)]
#[command(name = "pl-navigator", version)]
#[command(about = "Browse to a course directory and explore its instances, assessments, zones and questions")]
struct Args {
    /// Course directory, or a directory to start browsing from (default: working directory)
    path: Option<PathBuf>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Logs go to stderr; the UI owns stdout
    tracing_subscriber::fmt()
        .with_env_filter("pl_navigator=warn")
        .with_writer(std::io::stderr)
        .init();

    match run(args) {
        Ok(outcome) => {
            tracing::info!(?outcome, "session ended");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("[ERROR] {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<AppOutcome> {
    let config = NavigatorConfig::default();
    let start = app::resolve_start(args.path)?;

    let mut presenter = TerminalPresenter::new(config.title.clone())?;
    app::run(start, &mut presenter, &config)
}
