//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// EasyBroker listing client
#[derive(Parser, Debug)]
#[command(name = "easybroker")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (YAML)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// API base URL (overrides the config file)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Request timeout in seconds (overrides the config file)
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// Environment variable holding the API key
    #[arg(long, global = true)]
    pub api_key_env: Option<String>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List every property
    Properties {
        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,

        /// Records per page
        #[arg(long)]
        page_size: Option<u32>,
    },

    /// Show a single property by public id
    Property {
        /// Public id (e.g. EB-B1234)
        id: String,
    },
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Titles, one per line
    Text,
    /// One JSON record per line
    Json,
}
