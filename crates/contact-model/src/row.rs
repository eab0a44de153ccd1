//! Ordered tabular row.

use std::fmt;

use serde::ser::{Serialize, SerializeMap, Serializer};

/// A single contact record: column name to raw value, in column order.
///
/// A value of `None` means the column is present in the row but carries no
/// value (e.g. a short CSV record). A column that was never inserted is
/// absent; [`Row::get`] returns `None` for both cases, [`Row::contains`]
/// tells them apart.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    cells: Vec<(String, Option<String>)>,
}

impl Row {
    /// Creates an empty row.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty row with room for `capacity` columns.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cells: Vec::with_capacity(capacity),
        }
    }

    /// Inserts or replaces a column value.
    ///
    /// Replacing keeps the column at its original position.
    pub fn insert(&mut self, column: impl Into<String>, value: Option<String>) {
        let column = column.into();
        match self.cells.iter_mut().find(|(name, _)| *name == column) {
            Some((_, slot)) => *slot = value,
            None => self.cells.push((column, value)),
        }
    }

    /// Builder-style insert of a present value.
    #[must_use]
    pub fn with(mut self, column: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(column, Some(value.into()));
        self
    }

    /// Builder-style insert of a present column without a value.
    #[must_use]
    pub fn with_none(mut self, column: impl Into<String>) -> Self {
        self.insert(column, None);
        self
    }

    /// Returns the value of a column, if the column is present and has one.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.cells
            .iter()
            .find(|(name, _)| name == column)
            .and_then(|(_, value)| value.as_deref())
    }

    /// Returns true if the column is present (with or without a value).
    pub fn contains(&self, column: &str) -> bool {
        self.cells.iter().any(|(name, _)| name == column)
    }

    /// Iterates over `(column, value)` pairs in column order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.cells
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_deref()))
    }

    /// Iterates over column names in order.
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.cells.iter().map(|(name, _)| name.as_str())
    }

    /// Returns the number of columns.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns true if the row has no columns.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Row
where
    K: Into<String>,
    V: Into<Option<String>>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut row = Row::new();
        for (column, value) in iter {
            row.insert(column, value.into());
        }
        row
    }
}

impl Serialize for Row {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.cells.len()))?;
        for (name, value) in &self.cells {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// Renders as `{'col': 'value', 'other': None}`.
impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (idx, (name, value)) in self.cells.iter().enumerate() {
            if idx > 0 {
                write!(f, ", ")?;
            }
            match value {
                Some(value) => write!(f, "'{name}': '{value}'")?,
                None => write!(f, "'{name}': None")?,
            }
        }
        write!(f, "}}")
    }
}
