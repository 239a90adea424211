//! # Store Facade for REST API
//!
//! Shares one [`Store`] between request handlers. Every operation holds the
//! store lock for its whole read-modify-write sequence, so no request ever
//! observes another's partial effect and concurrent inserts cannot be
//! handed the same id.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::debug;

use super::errors::RestResult;
use super::handler::RestHandler;
use super::parser::ListParams;
use super::response::ListResponse;
use crate::store::{Record, Store};

/// Lock-protected store handle
#[derive(Debug, Clone)]
pub struct StoreFacade {
    store: Arc<RwLock<Store>>,
}

impl StoreFacade {
    /// Take ownership of a store
    pub fn new(store: Store) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
        }
    }

    /// A copy of the current store contents
    pub fn snapshot(&self) -> Store {
        self.read().clone()
    }

    // Every mutation is a single push, remove or slot merge, so a poisoned
    // lock never guards a half-written table.
    fn read(&self) -> RwLockReadGuard<'_, Store> {
        self.store.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Store> {
        self.store.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl RestHandler for StoreFacade {
    fn list(&self, table: &str, params: ListParams) -> RestResult<ListResponse<Record>> {
        let (data, total) = self.read().list(table, params.limit, params.offset)?;
        Ok(ListResponse::new(data, total, params.limit, params.offset))
    }

    fn get(&self, table: &str, id: &str) -> RestResult<Record> {
        Ok(self.read().get(table, id)?)
    }

    fn insert(&self, table: &str, payload: Record) -> RestResult<Record> {
        let record = self.write().insert(table, payload)?;
        debug!(table, id = record.id(), "record inserted");
        Ok(record)
    }

    fn replace(&self, table: &str, id: &str, payload: Record) -> RestResult<Record> {
        let record = self.write().replace(table, id, payload)?;
        debug!(table, id, "record replaced");
        Ok(record)
    }

    fn merge(&self, table: &str, id: &str, payload: Record) -> RestResult<Record> {
        let record = self.write().merge(table, id, payload)?;
        debug!(table, id, "record merged");
        Ok(record)
    }

    fn delete(&self, table: &str, id: &str) -> RestResult<()> {
        self.write().delete(table, id)?;
        debug!(table, id, "record deleted");
        Ok(())
    }
}
