//! CLI argument definitions using clap
//!
//! Commands:
//! - tablestore serve [--config <path>] [--host <host>] [--port <port>] [--static-dir <dir>]
//! - tablestore tables [--config <path>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::observability::LogFormat;

/// tablestore - generic in-memory tabular data server
#[derive(Parser, Debug)]
#[command(name = "tablestore")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Log line format: compact or json
    #[arg(long, global = true, default_value = "compact")]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server
    Serve {
        /// Path to configuration file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Host to bind to (overrides the config file)
        #[arg(long)]
        host: Option<String>,

        /// Port to bind to (overrides the config file)
        #[arg(short, long)]
        port: Option<u16>,

        /// Directory of static assets (overrides the config file)
        #[arg(long)]
        static_dir: Option<PathBuf>,
    },

    /// Print the seeded tables and their row counts, then exit
    Tables {
        /// Path to configuration file
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
