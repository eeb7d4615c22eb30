//! fittrack-tui: a terminal tracker for weightlifting sessions and food intake
//!
//! Lifts are browsed on a calendar and charted per exercise; foods are summed
//! into daily calorie totals. Entries live in a REST backend, a local SQLite
//! file, or in memory for the session.

mod app;
mod cli;
mod data;
mod logging;
mod ui;
mod view;

use anyhow::Result;
use cli::{AppConfig, Cli, Commands};
use tracing::info;

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse_args();

    match cli.command {
        Commands::Show {
            api_url,
            db_path,
            offline,
            log_dir,
            date,
        } => {
            let config = AppConfig::from_show_command(api_url, db_path, offline, log_dir, date)?;

            // Held until exit so the log file is flushed
            let _guard = logging::init(&config.log_dir)?;
            info!(version = env!("CARGO_PKG_VERSION"), backend = ?config.backend, "fittrack-tui launched");

            // Run the TUI application
            app::run(config)?;
        }
    }

    Ok(())
}
