//! ATM simulator entry point.
//!
//! # Usage
//!
//! ```bash
//! # Default PIN 1234, balances current=1000 savings=5000
//! atm-tui
//!
//! # Custom configuration and a debug log
//! atm-tui --config atm.toml --log-file atm.log --log-level debug
//! ```

use std::{fs::File, path::PathBuf, sync::Mutex};

use atm_tui::{App, AtmConfig, Runtime, TerminalDriver, TerminalError};
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// ATM simulator terminal UI
#[derive(Parser, Debug)]
#[command(name = "atm-tui")]
#[command(about = "Simulated ATM with PIN login, two accounts, deposits and withdrawals")]
#[command(version)]
struct Args {
    /// Path to a TOML config file (secret PIN, seed balances, denominations)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write logs to this file. The terminal itself is used by the UI.
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

/// Install a file-backed subscriber. No file, no logging.
fn init_logging(args: &Args) -> Result<(), TerminalError> {
    let Some(path) = &args.log_file else {
        return Ok(());
    };

    let file = File::create(path)?;
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(Mutex::new(file)).with_ansi(false))
        .with(filter)
        .init();

    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_logging(&args)?;

    let config = AtmConfig::load(args.config.as_deref()).map_err(TerminalError::from)?;
    tracing::info!(
        denominations = config.withdrawal_denominations.len(),
        "ATM simulator starting"
    );

    let driver = TerminalDriver::new()?;
    let app = Runtime::new(driver, App::new(config)).run().await?;

    tracing::info!(screen = %app.screen(), "ATM simulator stopped");
    Ok(())
}
