//! # Table Store
//!
//! Owns every table and is the only thing that mutates them.
//!
//! The set of table names is fixed when the store is built. Looking up any
//! other name fails with [`StoreError::TableNotFound`]; tables are never
//! created on demand.
//!
//! ## Id generation
//!
//! New ids are `1 + max(integer ids in the table)`, rendered as a string.
//! The sum is computed on the decimal digits, so there is no upper bound.
//! Ids are per table, so two tables will both hand out `"1"`.
//!
//! ## Updates
//!
//! `replace` and `merge` are the same operation: a shallow merge of the
//! payload over the existing record, with `id` forced back to its original
//! value. Fields missing from the payload are kept.

mod errors;
mod record;
pub mod seed;
mod table;

pub use errors::{StoreError, StoreResult, TableError};
pub use record::{Record, CREATED_AT_FIELD, ID_FIELD};
pub use table::Table;

pub(crate) use table::leading_integer;

use std::collections::BTreeMap;

use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::Value;

/// Named in-memory tables
#[derive(Debug, Clone, Default)]
pub struct Store {
    tables: BTreeMap<String, Table>,
}

impl Store {
    /// Create a store holding the given tables.
    ///
    /// Fails if any table's rows lack a string `id` or repeat one.
    pub fn new<I, N>(tables: I) -> StoreResult<Self>
    where
        I: IntoIterator<Item = (N, Vec<Record>)>,
        N: Into<String>,
    {
        let mut store = Self::default();
        for (name, records) in tables {
            let name = name.into();
            let table = Table::from_records(records)
                .map_err(|err| StoreError::invalid_seed(&name, err.to_string()))?;
            store.tables.insert(name, table);
        }
        Ok(store)
    }

    /// Create a store holding empty tables with these names
    pub fn with_empty_tables<I, N>(names: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<String>,
    {
        Self {
            tables: names
                .into_iter()
                .map(|name| (name.into(), Table::new()))
                .collect(),
        }
    }

    pub fn contains_table(&self, name: &str) -> bool {
        self.tables.contains_key(name)
    }

    /// Table names, sorted
    pub fn table_names(&self) -> impl Iterator<Item = &str> {
        self.tables.keys().map(String::as_str)
    }

    pub fn table(&self, name: &str) -> StoreResult<&Table> {
        self.tables
            .get(name)
            .ok_or_else(|| StoreError::TableNotFound(name.to_string()))
    }

    fn table_mut(&mut self, name: &str) -> StoreResult<&mut Table> {
        self.tables
            .get_mut(name)
            .ok_or_else(|| StoreError::TableNotFound(name.to_string()))
    }

    /// Up to `limit` records starting at `offset`, plus the table's total row count
    pub fn list(&self, name: &str, limit: usize, offset: usize) -> StoreResult<(Vec<Record>, usize)> {
        let table = self.table(name)?;
        Ok((table.slice(limit, offset).to_vec(), table.len()))
    }

    /// The record with this id
    pub fn get(&self, name: &str, id: &str) -> StoreResult<Record> {
        let table = self.table(name)?;
        table
            .position(id)
            .and_then(|pos| table.get(pos))
            .cloned()
            .ok_or_else(|| StoreError::record_not_found(name, id))
    }

    /// Append a new record stamped with the current time
    pub fn insert(&mut self, name: &str, payload: Record) -> StoreResult<Record> {
        self.insert_at(name, payload, Utc::now())
    }

    /// Append a new record stamped with `now`.
    ///
    /// Any `id` or `created_at` in the payload is overwritten.
    pub fn insert_at(
        &mut self,
        name: &str,
        payload: Record,
        now: DateTime<Utc>,
    ) -> StoreResult<Record> {
        let table = self.table_mut(name)?;
        let id = table.next_id();

        let mut record = Record::new();
        record.set_id(id.clone());
        record.shallow_merge(payload);
        record.set_id(id);
        record.insert(CREATED_AT_FIELD, Value::String(iso_timestamp(now)));

        table.push(record.clone());
        Ok(record)
    }

    /// PUT semantics: shallow merge over the existing record, id preserved
    pub fn replace(&mut self, name: &str, id: &str, payload: Record) -> StoreResult<Record> {
        self.update(name, id, payload)
    }

    /// PATCH semantics: identical to [`Store::replace`]
    pub fn merge(&mut self, name: &str, id: &str, payload: Record) -> StoreResult<Record> {
        self.update(name, id, payload)
    }

    fn update(&mut self, name: &str, id: &str, payload: Record) -> StoreResult<Record> {
        let table = self.table_mut(name)?;
        let slot = table
            .position(id)
            .and_then(|pos| table.get_mut(pos))
            .ok_or_else(|| StoreError::record_not_found(name, id))?;

        slot.shallow_merge(payload);
        slot.set_id(id);
        Ok(slot.clone())
    }

    /// Remove the record with this id; later records shift down one slot
    pub fn delete(&mut self, name: &str, id: &str) -> StoreResult<()> {
        let table = self.table_mut(name)?;
        let pos = table
            .position(id)
            .ok_or_else(|| StoreError::record_not_found(name, id))?;
        table.remove(pos);
        Ok(())
    }

    /// Row count per table, in name order
    pub fn summary(&self) -> Vec<(String, usize)> {
        self.tables
            .iter()
            .map(|(name, table)| (name.clone(), table.len()))
            .collect()
    }
}

/// ISO-8601 UTC with millisecond precision, e.g. `2024-03-25T00:00:00.000Z`
pub fn iso_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}
