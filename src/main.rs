//! ArchViz Estimator - Main entry point
//!
//! Interactive price calculator for architectural 3D visualization, plus headless
//! commands that price, validate and print receipts for selections files.

use anyhow::{Context, Result};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::stdout;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info};
use tracing_appender::non_blocking::WorkerGuard;

use archviz::app::App;
use archviz::cli::{Cli, Commands};
use archviz::config::Settings;
use archviz::error::EstimatorError;
use archviz::receipt::{breakdown_json, Receipt};
use archviz::selections_file;

/// Initialize file logging. The TUI owns the terminal, so logs go to
/// `<data dir>/archviz/archviz.log`. `RUST_LOG` overrides the default `info` level.
fn init_logging() -> Option<WorkerGuard> {
    let log_dir = dirs::data_local_dir().unwrap_or_default().join("archviz");
    // the appender cannot open its file without the directory
    std::fs::create_dir_all(&log_dir).ok()?;

    let file_appender = tracing_appender::rolling::never(&log_dir, "archviz.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(non_blocking)
        .with_ansi(false)
        .init();

    Some(guard)
}

/// Main application entry point
fn main() -> Result<()> {
    // Logging first; the guard flushes on drop
    let _log_guard = init_logging();
    info!("ArchViz Estimator starting up");

    let cli = Cli::parse_args();
    debug!("CLI arguments parsed");

    let mut settings = Settings::load_or_default(cli.config.as_deref())?;

    match cli.command {
        Some(Commands::Run { receipt_dir }) => {
            if receipt_dir.is_some() {
                settings.receipt_dir = receipt_dir;
            }
            run_calculator(settings)?;
        }
        Some(Commands::Quote { selections, json }) => {
            run_quote(&selections, json)?;
        }
        Some(Commands::Receipt { selections, output }) => {
            run_receipt(&settings, &selections, output)?;
        }
        Some(Commands::Validate { selections }) => {
            run_validate(&selections);
        }
        None => {
            info!("No command specified, launching calculator");
            run_calculator(settings)?;
        }
    }

    Ok(())
}

/// Run the interactive calculator
fn run_calculator(settings: Settings) -> Result<()> {
    debug!("Initializing terminal for TUI mode");

    // Initialize terminal
    enable_raw_mode()
        .map_err(|e| EstimatorError::terminal(format!("Failed to enable raw mode: {}", e)))?;
    crossterm::execute!(stdout(), crossterm::terminal::EnterAlternateScreen).map_err(|e| {
        EstimatorError::terminal(format!("Failed to enter alternate screen: {}", e))
    })?;

    // Create terminal backend
    let backend = CrosstermBackend::new(stdout());
    let result = Terminal::new(backend)
        .map_err(|e| EstimatorError::terminal(format!("Failed to create terminal: {}", e)))
        .and_then(|mut terminal| App::new(settings).run(&mut terminal));

    // Cleanup terminal (always attempt cleanup, even if app failed)
    let _ = disable_raw_mode();
    let _ = crossterm::execute!(stdout(), crossterm::terminal::LeaveAlternateScreen);

    if let Err(ref e) = result {
        error!(error = %e, "Calculator failed");
    }
    Ok(result?)
}

/// Print the price breakdown of a selections file
fn run_quote(path: &Path, json: bool) -> Result<()> {
    let store = selections_file::load_store(path)?;
    let breakdown = store.breakdown();
    info!(path = ?path, total = %breakdown.total(), "Quoted selections");

    if json {
        println!("{}", breakdown_json(&breakdown)?);
    } else {
        println!("{}", breakdown.summary());
    }
    Ok(())
}

/// Write the receipt of a selections file
fn run_receipt(settings: &Settings, path: &Path, output: Option<PathBuf>) -> Result<()> {
    let store = selections_file::load_store(path)?;
    let receipt = Receipt::build_today(store.snapshot(), &store.breakdown());

    let written = match output {
        Some(output) => {
            receipt
                .write_to_file(&output)
                .with_context(|| format!("Failed to write receipt to {:?}", output))?;
            output
        }
        None => receipt.write_to_dir(settings.receipt_dir())?,
    };

    println!("✓ Receipt written to {}", written.display());
    Ok(())
}

/// Validate a selections file, exiting with status 1 when it is invalid
fn run_validate(path: &Path) {
    info!("Validating selections file: {:?}", path);
    match selections_file::load_from_file(path) {
        Ok(state) => match selections_file::validate(&state) {
            Ok(()) => {
                info!("Selections validation successful");
                println!("✓ Selections file is valid: {}", path.display());
            }
            Err(e) => {
                error!("Selections validation failed: {}", e);
                eprintln!("✗ Selections validation failed: {}", e);
                std::process::exit(1);
            }
        },
        Err(e) => {
            error!("Failed to load selections file: {:#}", e);
            eprintln!("✗ Failed to load selections file: {:#}", e);
            std::process::exit(1);
        }
    }
}
