//! CLI interface for Triage.
//!
//! Each invocation runs one fresh dashboard session seeded with the sample
//! incidents; nothing is persisted between invocations.

mod commands;
mod utils;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use commands::*;
pub use utils::*;

use crate::models::{Severity, SeverityFilter, SortOrder};
use crate::stats::StatKind;

#[derive(Parser)]
#[command(name = "triage")]
#[command(about = "Browse, filter, and report AI safety incidents")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Set log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Configuration file path
    #[arg(long, global = true, env = "TRIAGE_CONFIG_PATH")]
    pub config: Option<PathBuf>,
}

/// Query flags shared by `list`
#[derive(clap::Args, Debug, Clone)]
pub struct ListArgs {
    /// Severity filter: all, low, medium, high
    #[arg(long, short = 's', default_value = "all")]
    pub severity: SeverityFilter,

    /// Case-insensitive text matched against title and description
    #[arg(long, short = 'q')]
    pub search: Option<String>,

    /// Start of the reporting window (RFC 3339 or YYYY-MM-DD)
    #[arg(long)]
    pub from: Option<String>,

    /// End of the reporting window, inclusive (RFC 3339 or YYYY-MM-DD)
    #[arg(long)]
    pub to: Option<String>,

    /// newest or oldest
    #[arg(long, default_value = "newest")]
    pub sort: SortOrder,

    /// Page to show (1-indexed); out-of-range pages leave you on page 1
    #[arg(long, short = 'p', default_value_t = 1)]
    pub page: usize,

    /// Expand the details of this incident id
    #[arg(long)]
    pub expand: Option<String>,

    #[arg(long)]
    pub json: bool,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// List incidents matching the given filters
    List(ListArgs),

    /// Show whole-store statistics
    Stats {
        /// Chart one statistic: total, high, medium, low, recent
        #[arg(long)]
        chart: Option<StatKind>,

        #[arg(long)]
        json: bool,
    },

    /// Report a new incident into a fresh session
    Report {
        #[arg(long, short = 't')]
        title: String,

        #[arg(long, short = 'd')]
        description: String,

        #[arg(long, short = 's')]
        severity: Severity,

        #[arg(long)]
        json: bool,
    },

    /// Initialize default configuration at default location
    Init {
        #[arg(long)]
        force: bool,
    },

    /// Manage configuration
    Config {
        #[arg(long)]
        show: bool,

        #[arg(long)]
        validate: bool,

        /// Treat warnings as errors when validating
        #[arg(long)]
        strict: bool,
    },

    /// Show version information
    Version,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Run the CLI command
    pub async fn run(self) -> Result<()> {
        let config_path = self.config;
        match self.command {
            Commands::List(args) => list(config_path, args).await,
            Commands::Stats { chart, json } => stats(config_path, chart, json).await,
            Commands::Report {
                title,
                description,
                severity,
                json,
            } => report(config_path, title, description, severity, json).await,
            Commands::Init { force } => init(config_path, force).await,
            Commands::Config {
                show,
                validate,
                strict,
            } => config(config_path, show, validate, strict).await,
            Commands::Version => version().await,
        }
    }
}
