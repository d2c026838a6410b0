//! People Search
//!
//! A terminal search box that suggests people as you type and shows their
//! contact details.
//!
//! # Usage
//!
//! ```bash
//! # Interactive mode against the default endpoint
//! people-search
//!
//! # Interactive mode against a local file
//! people-search --file people.json
//!
//! # One-shot search
//! people-search search clem --format table
//! ```

use std::fs::OpenOptions;
use std::sync::Mutex;
use tracing::Level;
use tracing_subscriber::fmt::MakeWriter;

use people_search::cli::CliInterface;
use people_search::error::Result;
use people_search::{source, tui};

/// Application entry point
#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Main application logic
///
/// 1. Parse command-line arguments
/// 2. Load configuration
/// 3. Initialize logging
/// 4. Handle subcommands or start the interactive widget
async fn run() -> Result<()> {
    let cli = CliInterface::new()?;

    initialize_logging(&cli)?;

    if cli.handle_subcommand().await? {
        return Ok(());
    }

    run_interactive_mode(&cli).await
}

/// Run the full-screen search widget
async fn run_interactive_mode(cli: &CliInterface) -> Result<()> {
    let source = source::from_config(&cli.config().source)?;
    tui::run(cli.config(), source).await
}

/// Initialize logging system from the effective configuration
///
/// Logs go to the configured file when one is set. Otherwise they go to
/// stderr, except in interactive mode where stderr shares the screen with
/// the widget and logging is discarded.
fn initialize_logging(cli: &CliInterface) -> Result<()> {
    let logging = &cli.config().logging;
    let level = logging.level.to_tracing_level();

    match &logging.file_path {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            init_subscriber(Mutex::new(file), level, logging.timestamps, false);
        }
        None if cli.is_interactive() => {
            init_subscriber(std::io::sink, level, logging.timestamps, false);
        }
        None => {
            init_subscriber(std::io::stderr, level, logging.timestamps, true);
        }
    }

    Ok(())
}

fn init_subscriber<W>(writer: W, level: Level, timestamps: bool, ansi: bool)
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_ansi(ansi)
        .with_writer(writer);

    if timestamps {
        subscriber.init();
    } else {
        subscriber.without_time().init();
    }
}
