//! Carbon footprint TUI
//!
//! A terminal user interface that estimates your annual CO2 footprint from
//! a handful of lifestyle inputs.
//! Run with: huella [-c|--config <PATH>] [--summary]

mod animation;
mod app;
mod config;
mod constants;
mod event;
mod factors;
mod feedback;
mod footprint;
mod input;
mod logging;
mod present;
mod ui;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use crate::app::App;
use crate::config::Config;
use crate::constants::{FRAME_INTERVAL, POLL_TIMEOUT};
use crate::event::EventHandler;
use crate::footprint::compute_footprint;
use crate::input::UserInput;
use crate::logging::LogTarget;

/// Estimate your annual carbon footprint from the terminal.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// TOML config file with display options and initial form values
    #[arg(short, long, env = "HUELLA_CONFIG")]
    config: Option<PathBuf>,

    /// Write logs to this file (the terminal is used by the UI)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log filter, e.g. "info" or "huella=debug"
    #[arg(long)]
    log_level: Option<String>,

    /// Print the result for the configured defaults and exit
    #[arg(long)]
    summary: bool,
}

/// Entry point for the application.
///
/// Loads the config, installs logging, then either prints a one-shot
/// summary or runs the interactive UI.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;

    let level = cli
        .log_level
        .or_else(|| config.logging.level.clone())
        .unwrap_or_else(|| logging::DEFAULT_LEVEL.to_string());
    let target = match cli.log_file.or_else(|| config.logging.file.clone()) {
        Some(path) => LogTarget::File(path),
        None if cli.summary => LogTarget::Stderr,
        None => LogTarget::Off,
    };
    logging::init(&target, &level)?;
    info!(version = env!("CARGO_PKG_VERSION"), "Starting huella");

    if cli.summary {
        print_summary(&config);
        return Ok(());
    }

    // Initialize the terminal
    let terminal = ratatui::init();

    // Create the application with the configured form
    let app = App::new(&config);

    // Run the application
    let result = run_app(terminal, app);

    // Restore the terminal to its original state
    ratatui::restore();

    info!("Exiting huella");
    result
}

/// Computes the configured defaults and prints the report to stdout.
fn print_summary(config: &Config) {
    print!("{}", summary(config));
}

/// Builds the `--summary` report for the configured defaults.
fn summary(config: &Config) -> String {
    let input = UserInput::from_raw(&config.defaults);
    let result = compute_footprint(&input);
    info!(total = result.total, "Calculated footprint");
    present::summary_report(&result, config.display.thousands_separator)
}

/// Main application loop.
///
/// This function runs the TUI event loop:
/// 1. Apply any animation frames that arrived
/// 2. Draw the current UI state
/// 3. Handle user input events
/// 4. Repeat until the user quits
fn run_app(mut terminal: ratatui::DefaultTerminal, mut app: App) -> Result<()> {
    let event_handler = EventHandler::new();

    loop {
        app.drain_frames();

        terminal
            .draw(|frame| ui::draw(frame, &app))
            .context("Failed to draw UI")?;

        // Poll faster while the total is counting up so it renders smoothly
        let timeout = if app.is_animating() {
            FRAME_INTERVAL
        } else {
            POLL_TIMEOUT
        };

        let event = event_handler
            .next(timeout, app.is_text_entry())
            .context("Failed to read terminal event")?;

        if let Some(action) = event {
            if app.handle_event(action) {
                break;
            }
        }
    }

    Ok(())
}
