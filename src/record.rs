//! The record type produced by readers and consumed by writers.
//!
//! A [`Record`] maps labels to values. It is backed by [`IndexMap`] so that a
//! record read from a line is written back with its fields in the same order,
//! but order never takes part in equality: two records are equal when they hold
//! the same labels with the same values.
//!
//! ## Examples
//!
//! ```rust
//! use serde_ltsv::Record;
//!
//! let mut record = Record::new();
//! record.insert("host", "127.0.0.1");
//! record.insert("status", "200");
//!
//! assert_eq!(record.len(), 2);
//! assert_eq!(record.get("host"), Some("127.0.0.1"));
//! ```

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One LTSV line's worth of `label:value` entries.
///
/// Inserting a label that is already present replaces its value and keeps its
/// original position.
///
/// # Examples
///
/// ```rust
/// use serde_ltsv::Record;
///
/// let a: Record = [("x", "1"), ("y", "2")].into_iter().collect();
/// let b: Record = [("y", "2"), ("x", "1")].into_iter().collect();
/// assert_eq!(a, b);
///
/// let labels: Vec<_> = a.labels().collect();
/// assert_eq!(labels, vec!["x", "y"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(IndexMap<String, String>);

impl Record {
    /// Creates an empty `Record`.
    #[must_use]
    pub fn new() -> Self {
        Record(IndexMap::new())
    }

    /// Creates an empty `Record` with room for `capacity` fields.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Record(IndexMap::with_capacity(capacity))
    }

    /// Inserts a field, returning the previous value for `label` if there was one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_ltsv::Record;
    ///
    /// let mut record = Record::new();
    /// assert!(record.insert("label", "A").is_none());
    /// assert_eq!(record.insert("label", "B").as_deref(), Some("A"));
    /// assert_eq!(record.get("label"), Some("B"));
    /// ```
    pub fn insert(&mut self, label: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.0.insert(label.into(), value.into())
    }

    /// Returns the value stored under `label`.
    #[must_use]
    pub fn get(&self, label: &str) -> Option<&str> {
        self.0.get(label).map(String::as_str)
    }

    /// Returns `true` if the record has a field named `label`.
    #[must_use]
    pub fn contains_label(&self, label: &str) -> bool {
        self.0.contains_key(label)
    }

    /// Removes a field, preserving the order of the remaining ones.
    pub fn remove(&mut self, label: &str) -> Option<String> {
        self.0.shift_remove(label)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the labels, in insertion order.
    pub fn labels(&self) -> impl Iterator<Item = &str> + '_ {
        self.0.keys().map(String::as_str)
    }

    /// Returns an iterator over the values, in insertion order.
    pub fn values(&self) -> impl Iterator<Item = &str> + '_ {
        self.0.values().map(String::as_str)
    }

    /// Returns an iterator over the `(label, value)` pairs, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, String> {
        self.0.iter()
    }
}

impl From<HashMap<String, String>> for Record {
    fn from(map: HashMap<String, String>) -> Self {
        Record(map.into_iter().collect())
    }
}

impl From<Record> for HashMap<String, String> {
    fn from(record: Record) -> Self {
        record.0.into_iter().collect()
    }
}

impl IntoIterator for Record {
    type Item = (String, String);
    type IntoIter = indexmap::map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Record {
    type Item = (&'a String, &'a String);
    type IntoIter = indexmap::map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Record {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut record = Record::new();
        record.extend(iter);
        record
    }
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for Record {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (label, value) in iter {
            self.insert(label, value);
        }
    }
}
