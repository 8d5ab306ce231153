//! Dataset subsystem for csvapi
//!
//! The dataset is loaded once at startup and never mutated afterwards. Every
//! request handler reads the same snapshot through an `Arc<Dataset>`.
//!
//! # Load Flow
//!
//! 1. Read header row (column names, must be unique)
//! 2. Read data rows (field count must match the header)
//! 3. Infer a kind per column
//! 4. Convert cells to typed values

mod errors;
mod loader;
mod record;
mod value;

use std::sync::Arc;

pub use errors::{LoadError, LoadResult};
pub use record::{Columns, Record};
pub use value::Value;

use crate::schema::Schema;

/// Immutable in-memory table
#[derive(Debug, Clone)]
pub struct Dataset {
    columns: Arc<Columns>,
    schema: Schema,
    records: Vec<Record>,
}

impl Dataset {
    pub(crate) fn new(columns: Arc<Columns>, schema: Schema, records: Vec<Record>) -> Self {
        Self {
            columns,
            schema,
            records,
        }
    }

    /// Column set shared by every record
    pub fn columns(&self) -> &Columns {
        &self.columns
    }

    /// Inferred column kinds
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Records in load order
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
