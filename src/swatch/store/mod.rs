//! # Storage Layer
//!
//! The [`DataStore`] trait is the contract every front end relies on. It is
//! deliberately small: list, add, find, update, delete and clear.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production storage
//!   - One flat file (see [`crate::codec`]) holding every record
//!   - Loaded once on open, rewritten in full after every mutation
//!   - Rewrites go to a temp file that is renamed over the target
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - No persistence
//!   - Same id allocation and not-found rules as `FileStore`
//!
//! ## Concurrency
//!
//! All methods take `&self`. Implementations hold their collection behind a
//! single lock, so a store can be shared between threads (wrap it in an
//! `Arc`) and mutations never interleave.
//!
//! ## Ids
//!
//! Ids are sequential integers starting at 1. A store remembers the highest
//! id it has seen or issued and never hands out anything at or below it.

use crate::codec::{Rows, SkipReason, SkippedRow};
use crate::error::{Result, SwatchError};
use crate::model::{Record, RecordId};
use std::collections::HashSet;
use std::sync::Arc;

pub mod fs;
pub mod memory;

/// Abstract interface for color storage.
pub trait DataStore {
    /// Snapshot of all records in insertion order
    fn list(&self) -> Result<Vec<Record>>;

    /// Store a new color under a fresh id
    fn add(&self, hex: &str) -> Result<Record>;

    /// Get a record by id
    fn find(&self, id: RecordId) -> Result<Record>;

    /// Replace the value of an existing record. Never creates one.
    fn update(&self, id: RecordId, hex: &str) -> Result<Record>;

    /// Remove a record, returning it
    fn delete(&self, id: RecordId) -> Result<Record>;

    /// Drop every record
    fn clear(&self) -> Result<()>;
}

impl<S: DataStore + ?Sized> DataStore for Arc<S> {
    fn list(&self) -> Result<Vec<Record>> {
        (**self).list()
    }

    fn add(&self, hex: &str) -> Result<Record> {
        (**self).add(hex)
    }

    fn find(&self, id: RecordId) -> Result<Record> {
        (**self).find(id)
    }

    fn update(&self, id: RecordId, hex: &str) -> Result<Record> {
        (**self).update(id, hex)
    }

    fn delete(&self, id: RecordId) -> Result<Record> {
        (**self).delete(id)
    }

    fn clear(&self) -> Result<()> {
        (**self).clear()
    }
}

/// The ordered record collection shared by both store implementations.
#[derive(Debug, Clone, Default)]
pub(crate) struct Collection {
    records: Vec<Record>,
    // highest id seen or issued so far
    high_water: Option<RecordId>,
}

impl Collection {
    /// Builds a collection from decoded rows, keeping file order. Rows that
    /// failed to decode or that repeat an earlier id are returned as skipped.
    pub(crate) fn from_rows(mut rows: Rows<'_>) -> (Self, Vec<SkippedRow>) {
        let mut collection = Collection::default();
        let mut seen = HashSet::new();
        let mut skipped = Vec::new();

        while let Some(row) = rows.next() {
            match row {
                Ok(record) if !seen.insert(record.id) => {
                    skipped.push(SkippedRow {
                        line: rows.row_line(),
                        reason: SkipReason::DuplicateId(record.id),
                    });
                }
                Ok(record) => {
                    collection.bump(record.id);
                    collection.records.push(record);
                }
                Err(row) => skipped.push(row),
            }
        }

        (collection, skipped)
    }

    fn bump(&mut self, id: RecordId) {
        if self.high_water.map_or(true, |hw| id > hw) {
            self.high_water = Some(id);
        }
    }

    pub(crate) fn records(&self) -> &[Record] {
        &self.records
    }

    pub(crate) fn len(&self) -> usize {
        self.records.len()
    }

    pub(crate) fn find(&self, id: RecordId) -> Result<Record> {
        self.records
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or(SwatchError::NotFound(id))
    }

    pub(crate) fn add(&mut self, hex: &str) -> Result<Record> {
        let id = match self.high_water {
            None => RecordId::FIRST,
            Some(hw) => hw
                .next()
                .ok_or_else(|| SwatchError::Store("Color id space exhausted".to_string()))?,
        };
        let record = Record::new(id, hex);
        self.bump(id);
        self.records.push(record.clone());
        Ok(record)
    }

    pub(crate) fn update(&mut self, id: RecordId, hex: &str) -> Result<Record> {
        let record = self
            .records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(SwatchError::NotFound(id))?;
        record.hex = hex.to_string();
        Ok(record.clone())
    }

    pub(crate) fn delete(&mut self, id: RecordId) -> Result<Record> {
        let pos = self
            .records
            .iter()
            .position(|r| r.id == id)
            .ok_or(SwatchError::NotFound(id))?;
        Ok(self.records.remove(pos))
    }

    pub(crate) fn clear(&mut self) {
        self.records.clear();
    }
}
