//! # Table REST API Module
//!
//! Uniform CRUD endpoints over every table in the store:
//!
//! - `GET    /tables/{table}`       list with `limit`/`offset`
//! - `GET    /tables/{table}/{id}`  fetch one record
//! - `POST   /tables/{table}`       insert, id generated by the store
//! - `PUT    /tables/{table}/{id}`  shallow merge, id preserved
//! - `PATCH  /tables/{table}/{id}`  same as PUT
//! - `DELETE /tables/{table}/{id}`  remove

pub mod database;
pub mod errors;
pub mod extract;
pub mod handler;
pub mod parser;
pub mod payload;
pub mod response;
pub mod server;

pub use database::StoreFacade;
pub use errors::{RestError, RestResult};
pub use handler::RestHandler;
pub use parser::ListParams;
pub use payload::Payload;
pub use response::ListResponse;
pub use server::RestServer;
