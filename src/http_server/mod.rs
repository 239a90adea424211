//! # HTTP Server Module
//!
//! Serves the table REST API over HTTP.
//!
//! # Endpoints
//!
//! - `/health` - Health check
//! - `/tables/*` - Table CRUD
//! - anything else - static assets, when a directory is configured

pub mod config;
pub mod observability_routes;
pub mod server;

pub use config::HttpServerConfig;
pub use server::HttpServer;
