//! tablestore - a generic in-memory tabular data server
//!
//! Named tables of JSON records, served over uniform CRUD HTTP routes.

pub mod cli;
pub mod http_server;
pub mod observability;
pub mod rest_api;
pub mod store;
