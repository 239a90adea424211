//! CLI command implementations
//!
//! `serve` loads the configuration, seeds the store and runs the HTTP
//! server on a single-threaded runtime. `tables` prints what would be
//! served and exits.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::info;

use crate::http_server::{HttpServer, HttpServerConfig};
use crate::observability;
use crate::store::{seed, Store};

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};
use super::io::write_response;

/// Configuration file structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// HTTP server settings
    #[serde(default)]
    pub server: HttpServerConfig,

    /// JSON seed document replacing the built-in marketplace tables
    #[serde(default)]
    pub seed_path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from file. Not validated until overrides are applied.
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

        serde_json::from_str(&content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))
    }

    /// Load from `path` if given, otherwise all defaults
    pub fn load_or_default(path: Option<&Path>) -> CliResult<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Load, apply command line overrides, then validate the result
    pub fn resolve(
        path: Option<&Path>,
        host: Option<String>,
        port: Option<u16>,
        static_dir: Option<PathBuf>,
    ) -> CliResult<Self> {
        let config = Self::load_or_default(path)?.with_overrides(host, port, static_dir);
        config.validate()?;
        Ok(config)
    }

    /// Apply command line overrides
    pub fn with_overrides(
        mut self,
        host: Option<String>,
        port: Option<u16>,
        static_dir: Option<PathBuf>,
    ) -> Self {
        if let Some(host) = host {
            self.server.host = host;
        }
        if let Some(port) = port {
            self.server.port = port;
        }
        if static_dir.is_some() {
            self.server.static_dir = static_dir;
        }
        self
    }

    /// Validate configuration
    pub fn validate(&self) -> CliResult<()> {
        if self.server.host.trim().is_empty() {
            return Err(CliError::config_error("server.host must not be empty"));
        }

        if self.server.port == 0 {
            return Err(CliError::config_error("server.port must be non-zero"));
        }

        if let Some(dir) = &self.server.static_dir {
            if !dir.is_dir() {
                return Err(CliError::config_error(format!(
                    "server.static_dir {:?} is not a directory",
                    dir
                )));
            }
        }

        if let Some(path) = &self.seed_path {
            if !path.is_file() {
                return Err(CliError::config_error(format!(
                    "seed_path {:?} does not exist",
                    path
                )));
            }
        }

        Ok(())
    }

    /// Build the initial store: the seed file if configured, else the built-in tables
    pub fn load_store(&self) -> CliResult<Store> {
        match &self.seed_path {
            Some(path) => {
                let content = fs::read_to_string(path).map_err(|e| {
                    CliError::seed_error(format!("Failed to read seed file {:?}: {}", path, e))
                })?;
                let document: Value = serde_json::from_str(&content).map_err(|e| {
                    CliError::seed_error(format!("Invalid seed JSON in {:?}: {}", path, e))
                })?;
                Ok(seed::from_json(document)?)
            }
            None => Ok(seed::marketplace()?),
        }
    }
}

/// Main CLI entry point
///
/// Parses arguments, installs logging and dispatches to the command.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    observability::init_logging(cli.verbose, cli.log_format);
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve {
            config,
            host,
            port,
            static_dir,
        } => serve(Config::resolve(config.as_deref(), host, port, static_dir)?),
        Command::Tables { config } => {
            tables(&Config::resolve(config.as_deref(), None, None, None)?)
        }
    }
}

/// Start the HTTP server and block until it shuts down
pub fn serve(config: Config) -> CliResult<()> {
    let store = config.load_store()?;
    let seed_source = config
        .seed_path
        .as_deref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "built-in".to_string());
    info!(
        tables = store.table_names().count(),
        seed = %seed_source,
        "store initialized"
    );

    let server = HttpServer::new(config.server, store);

    // One thread: requests are handled one at a time, like the store expects
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::boot_failed(format!("HTTP server failed: {}", e)))
    })
}

/// Print each table with its row count
pub fn tables(config: &Config) -> CliResult<()> {
    write_response(tables_summary(&config.load_store()?))
}

fn tables_summary(store: &Store) -> Value {
    let tables: Vec<Value> = store
        .summary()
        .into_iter()
        .map(|(name, rows)| json!({"name": name, "rows": rows}))
        .collect();
    json!({ "tables": tables })
}
