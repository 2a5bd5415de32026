//! Dropdown vocabularies extracted from header + rows tables.
//!
//! Each recognized column becomes one list of distinct values. Values are
//! trimmed, blanks are skipped, and the first occurrence of a value fixes its
//! place in the list. Deduplication is case-sensitive.
//!
//! Two modes share the scan:
//! - [`extract_keyed`] reads only the headers named in a fixed vocabulary and
//!   reports them under the vocabulary's keys. Other columns are ignored.
//! - [`extract_unkeyed`] reads every column with a non-empty header and keys
//!   it by the header text itself.

use crate::cell::{CellValue, Table};
use serde::ser::{Serialize, Serializer};
use std::collections::HashSet;

/// An ordered mapping of key -> distinct values.
///
/// Keys keep the order of the columns that produced them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LookupTable {
    entries: Vec<(String, Vec<String>)>,
}

impl LookupTable {
    pub fn new() -> LookupTable {
        LookupTable::default()
    }

    /// Set the values for `key`. A key seen before keeps its place.
    pub fn insert(&mut self, key: impl Into<String>, values: Vec<String>) {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = values,
            None => self.entries.push((key, values)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_slice())
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for LookupTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.entries.iter().map(|(k, v)| (k, v)))
    }
}

/// Collect the distinct, non-blank values of one column in first-seen order.
pub fn distinct_column(rows: &[Vec<CellValue>], col: usize) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut values = Vec::new();
    for row in rows {
        let Some(cell) = row.get(col) else {
            continue;
        };
        let value = cell.to_trimmed();
        if value.is_empty() {
            continue;
        }
        if seen.insert(value.clone()) {
            values.push(value);
        }
    }
    values
}

/// Extract only the columns whose header appears in `header_to_key`.
pub fn extract_keyed(table: &Table, header_to_key: &[(&str, &str)]) -> LookupTable {
    let mut lookups = LookupTable::new();
    for (col, header) in table.header().iter().enumerate() {
        let Some(header) = header.as_text() else {
            continue;
        };
        let Some((_, key)) = header_to_key.iter().find(|(h, _)| *h == header) else {
            continue;
        };
        lookups.insert(*key, distinct_column(table.data_rows(), col));
    }
    lookups
}

/// Extract every column with a non-empty header, keyed by the header text.
pub fn extract_unkeyed(table: &Table) -> LookupTable {
    let mut lookups = LookupTable::new();
    for (col, header) in table.header().iter().enumerate() {
        let key = header.to_text();
        if key.is_empty() {
            continue;
        }
        lookups.insert(key, distinct_column(table.data_rows(), col));
    }
    lookups
}
