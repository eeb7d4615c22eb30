//! Command-line interface argument parsing for fittrack-tui.
//!
//! - `fittrack-tui show` talks to the REST backend at `http://localhost:5000`
//! - `fittrack-tui show --api-url http://nas:5000`
//! - `fittrack-tui show --db-path ~/fitness.db` keeps entries in a local file
//! - `fittrack-tui show --offline` keeps entries for this session only

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};

use crate::data::DATE_FORMAT;

pub const DEFAULT_API_URL: &str = "http://localhost:5000";
const API_URL_ENV: &str = "FITTRACK_API_URL";
const LOG_DIR_ENV: &str = "FITTRACK_LOG_DIR";

/// A terminal tracker for weightlifting sessions and food intake.
#[derive(Parser, Debug)]
#[command(name = "fittrack-tui")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Launch the tracker
    Show {
        /// Base URL of the REST backend serving /lifts and /foods
        #[arg(long, conflicts_with_all = ["db_path", "offline"])]
        api_url: Option<String>,

        /// Store entries in a local SQLite file instead of the REST backend
        #[arg(long, conflicts_with = "offline")]
        db_path: Option<PathBuf>,

        /// Keep entries in memory for this session only
        #[arg(long)]
        offline: bool,

        /// Directory for the log file
        #[arg(long)]
        log_dir: Option<PathBuf>,

        /// Day treated as today (YYYY-MM-DD), defaults to the local date
        #[arg(long)]
        date: Option<String>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

/// Where entries are loaded from and saved to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendConfig {
    Http { base_url: String },
    Sqlite { path: PathBuf },
    Memory,
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub backend: BackendConfig,
    pub log_dir: PathBuf,
    pub today: NaiveDate,
}

impl AppConfig {
    /// Create AppConfig from CLI Commands
    pub fn from_show_command(
        api_url: Option<String>,
        db_path: Option<PathBuf>,
        offline: bool,
        log_dir: Option<PathBuf>,
        date: Option<String>,
    ) -> Result<Self> {
        let backend = if offline {
            BackendConfig::Memory
        } else if let Some(path) = db_path {
            BackendConfig::Sqlite { path }
        } else {
            let base_url = api_url
                .or_else(|| std::env::var(API_URL_ENV).ok())
                .unwrap_or_else(|| DEFAULT_API_URL.to_string());
            BackendConfig::Http { base_url }
        };

        let log_dir = log_dir
            .or_else(|| std::env::var(LOG_DIR_ENV).ok().map(PathBuf::from))
            .unwrap_or_else(|| {
                dirs::cache_dir()
                    .unwrap_or_else(|| PathBuf::from("."))
                    .join("fittrack-tui")
            });

        // Local calendar date, never a UTC-shifted one
        let today = match date {
            Some(d) => NaiveDate::parse_from_str(&d, DATE_FORMAT)
                .with_context(|| format!("Invalid --date {d:?}, expected YYYY-MM-DD"))?,
            None => Local::now().date_naive(),
        };

        Ok(AppConfig {
            backend,
            log_dir,
            today,
        })
    }
}
