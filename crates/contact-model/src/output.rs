//! Orchestration output types.

use std::fmt;

use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};

use crate::row::Row;

/// Failing column name to reason string, in the order columns were attempted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorMap {
    entries: Vec<(String, String)>,
}

impl ErrorMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a reason for a column.
    ///
    /// A second reason for the same column replaces the first in place.
    pub fn insert(&mut self, column: impl Into<String>, reason: impl Into<String>) {
        let column = column.into();
        let reason = reason.into();
        match self.entries.iter_mut().find(|(name, _)| *name == column) {
            Some((_, slot)) => *slot = reason,
            None => self.entries.push((column, reason)),
        }
    }

    pub fn get(&self, column: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, reason)| reason.as_str())
    }

    pub fn contains_key(&self, column: &str) -> bool {
        self.entries.iter().any(|(name, _)| name == column)
    }

    /// Failing column names in attempt order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, reason)| (name.as_str(), reason.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for ErrorMap
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut errors = ErrorMap::new();
        for (column, reason) in iter {
            errors.insert(column, reason);
        }
        errors
    }
}

impl Serialize for ErrorMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, reason) in &self.entries {
            map.serialize_entry(name, reason)?;
        }
        map.end()
    }
}

/// A row that failed normalization, kept in its original form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedRecord {
    /// The original, unmodified row.
    pub row: Row,
    /// One entry per failing column.
    pub errors: ErrorMap,
}

impl SkippedRecord {
    pub fn new(row: Row, errors: ErrorMap) -> Self {
        Self { row, errors }
    }

    /// Returns the reason recorded for a column, if it failed.
    pub fn reason_for(&self, column: &str) -> Option<&str> {
        self.errors.get(column)
    }
}

/// Renders as `Row: {...}, Reason: {...}`.
impl fmt::Display for SkippedRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Row: {}, Reason: {{", self.row)?;
        for (idx, (column, reason)) in self.errors.iter().enumerate() {
            if idx > 0 {
                write!(f, ", ")?;
            }
            write!(f, "'{column}': '{reason}'")?;
        }
        write!(f, "}}")
    }
}

/// Result of normalizing a batch of rows.
///
/// Both collections preserve input order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NormalizationOutput {
    /// Rows where every attempted field succeeded.
    pub normalized: Vec<Row>,
    /// Rows where at least one attempted field failed.
    pub skipped: Vec<SkippedRecord>,
}

impl NormalizationOutput {
    /// Total number of rows seen.
    pub fn processed(&self) -> usize {
        self.normalized.len() + self.skipped.len()
    }

    pub fn normalized_count(&self) -> usize {
        self.normalized.len()
    }

    pub fn skipped_count(&self) -> usize {
        self.skipped.len()
    }

    /// Splits into `(normalized, skipped)`.
    pub fn into_parts(self) -> (Vec<Row>, Vec<SkippedRecord>) {
        (self.normalized, self.skipped)
    }
}
