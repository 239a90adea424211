//! # REST API Handler
//!
//! The seam between HTTP routing and table storage.

use super::errors::RestResult;
use super::parser::ListParams;
use super::response::ListResponse;
use crate::store::Record;

/// Table operations behind the REST routes
pub trait RestHandler: Send + Sync {
    /// List a page of records in a table
    fn list(&self, table: &str, params: ListParams) -> RestResult<ListResponse<Record>>;

    /// Get a single record by ID
    fn get(&self, table: &str, id: &str) -> RestResult<Record>;

    /// Insert a record under a freshly generated ID
    fn insert(&self, table: &str, payload: Record) -> RestResult<Record>;

    /// Full update (PUT)
    fn replace(&self, table: &str, id: &str, payload: Record) -> RestResult<Record>;

    /// Partial update (PATCH)
    fn merge(&self, table: &str, id: &str, payload: Record) -> RestResult<Record>;

    /// Delete a record
    fn delete(&self, table: &str, id: &str) -> RestResult<()>;
}
