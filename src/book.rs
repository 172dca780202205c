//! The address book: a name-keyed store of contact records.

use crate::models::Record;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A mapping from contact name to record. Keys are unique; the book
/// owns all records.
///
/// Iteration order is the map's order and is not stable across
/// persistence round trips; callers that need a deterministic listing
/// sort by name at the presentation boundary.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct AddressBook {
    records: HashMap<String, Record>,
}

impl AddressBook {
    /// Create an empty book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, keyed by its name. Last write wins when the
    /// name already exists; there is no merging.
    pub fn add_record(&mut self, record: Record) {
        self.records
            .insert(record.name().as_str().to_string(), record);
    }

    /// Exact-name lookup.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    /// Exact-name lookup, mutable.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Remove the entry if present. A no-op otherwise; never fails.
    pub fn delete(&mut self, name: &str) {
        self.records.remove(name);
    }

    /// All records in map iteration order.
    pub fn all_records(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }

    /// Linear scan for the first record whose phone list contains an
    /// exact match.
    pub fn find_by_phone(&self, phone: &str) -> Option<&Record> {
        self.records.values().find(|r| r.has_phone(phone))
    }

    /// Number of records in the book.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the book holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
