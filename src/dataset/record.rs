//! Records and the column set they share

use std::collections::HashMap;
use std::sync::Arc;

use serde::ser::{Serialize, SerializeMap, Serializer};

use super::value::Value;

/// Ordered, unique column names with O(1) name lookup.
///
/// One instance is shared by every record of a dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Columns {
    names: Vec<String>,
    positions: HashMap<String, usize>,
}

impl Columns {
    /// Builds a column set.
    ///
    /// Returns the first repeated name as `Err` if names are not unique.
    pub fn new(names: Vec<String>) -> Result<Self, String> {
        let mut positions = HashMap::with_capacity(names.len());
        for (position, name) in names.iter().enumerate() {
            if positions.insert(name.clone(), position).is_some() {
                return Err(name.clone());
            }
        }
        Ok(Self { names, positions })
    }

    /// Column names in file order
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Ordinal position of a column
    pub fn position(&self, name: &str) -> Option<usize> {
        self.positions.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// One row of the dataset.
///
/// Serializes as a JSON object with keys in column order.
#[derive(Debug, Clone)]
pub struct Record {
    columns: Arc<Columns>,
    values: Vec<Value>,
}

impl Record {
    /// Creates a record. `values` must line up with `columns`.
    pub(crate) fn new(columns: Arc<Columns>, values: Vec<Value>) -> Self {
        debug_assert_eq!(columns.len(), values.len());
        Self { columns, values }
    }

    /// Value of the named field
    pub fn get(&self, column: &str) -> Option<&Value> {
        self.columns.position(column).map(|i| &self.values[i])
    }

    /// Value at a column position
    pub fn get_at(&self, position: usize) -> Option<&Value> {
        self.values.get(position)
    }

    /// Field values in column order
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// `(column, value)` pairs in column order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.columns
            .names()
            .iter()
            .map(String::as_str)
            .zip(self.values.iter())
    }
}

impl PartialEq for Record {
    fn eq(&self, other: &Self) -> bool {
        self.columns.names() == other.columns.names() && self.values == other.values
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.values.len()))?;
        for (name, value) in self.iter() {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}
