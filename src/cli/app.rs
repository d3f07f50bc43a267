use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// theme-index: catalog pages for a themes repository
#[derive(Parser)]
#[command(name = "theme-index")]
#[command(version = "0.1.0")]
#[command(about = "Generates paginated catalog pages for a themes repository")]
#[command(
    long_about = "theme-index turns the themes, release archives and curated ordering lists of a themes repository into paginated category grids and an index page with recent additions and updates."
)]
pub struct Cli {
    /// Log level
    #[arg(long, value_enum, default_value = "info", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Commands,
}

/// Log levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_filter_directive(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate category pages and the index
    Generate {
        /// Catalog configuration file
        #[arg(short, long, default_value = "catalog.yaml")]
        config: PathBuf,

        /// Compute every document but write nothing
        #[arg(long)]
        dry_run: bool,
    },

    /// Validate every listed entry without generating anything
    Check {
        /// Catalog configuration file
        #[arg(short, long, default_value = "catalog.yaml")]
        config: PathBuf,
    },

    /// Print the filename of a page
    PageName {
        /// Zero-based page index
        page: usize,

        /// Total number of pages
        num_pages: usize,
    },
}
