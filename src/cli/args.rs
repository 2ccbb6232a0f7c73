//! Command line argument parsing
//!
//! Subcommands:
//! - `analyze`: rank a task file and print the full analysis as JSON
//! - `suggest`: print the top-N recommendations with reasons
//! - `strategies`: list the built-in scoring strategies

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "taskrank")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Rank tasks by a multi-factor weighted priority score")]
#[command(long_about = None)]
#[command(arg_required_else_help = true)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Analyze a task file and print the full ranking as JSON
    Analyze {
        /// Path to a JSON or TOML task file
        file: PathBuf,
        /// Scoring strategy (unknown names fall back to smart_balance)
        #[arg(short, long, default_value = "smart_balance")]
        strategy: String,
        /// Reference date for urgency (YYYY-MM-DD, defaults to today)
        #[arg(long, value_name = "DATE")]
        today: Option<NaiveDate>,
        /// Print compact JSON instead of pretty-printed
        #[arg(long)]
        compact: bool,
    },
    /// Suggest the top tasks to work on today
    Suggest {
        /// Path to a JSON or TOML task file
        file: PathBuf,
        /// Number of tasks to suggest
        #[arg(short = 'n', long, default_value_t = 3)]
        count: usize,
        /// Scoring strategy (unknown names fall back to smart_balance)
        #[arg(short, long, default_value = "smart_balance")]
        strategy: String,
        /// Reference date for urgency (YYYY-MM-DD, defaults to today)
        #[arg(long, value_name = "DATE")]
        today: Option<NaiveDate>,
        /// Print the result as JSON instead of readable text
        #[arg(long)]
        json: bool,
    },
    /// List available scoring strategies and their weights
    Strategies,
}
