//! CLI module for tablestore
//!
//! Provides command-line interface for:
//! - serve: Seed the store and run the HTTP server
//! - tables: Print the seeded tables and exit

mod args;
mod commands;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{run, run_command, serve, tables, Config};
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{write_response, write_response_to};
