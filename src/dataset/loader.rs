//! CSV dataset loader
//!
//! Reads the whole source once. The first row is the header; every other row
//! must have exactly as many fields. Column kinds are inferred over the full
//! column before any cell is converted.

use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::sync::Arc;

use super::errors::{LoadError, LoadResult};
use super::record::{Columns, Record};
use super::Dataset;
use crate::schema::{ColumnKind, Schema};

impl Dataset {
    /// Loads a dataset from a CSV file.
    ///
    /// The file handle is dropped before this returns.
    pub fn load(path: impl AsRef<Path>) -> LoadResult<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(file)
    }

    /// Loads a dataset from any CSV byte source
    pub fn from_reader<R: Read>(source: R) -> LoadResult<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(false)
            .from_reader(source);

        let columns: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
        if columns.is_empty() {
            return Err(LoadError::Empty);
        }

        let mut rows: Vec<Vec<String>> = Vec::new();
        for row in reader.records() {
            let row = row?;
            rows.push(row.iter().map(str::to_string).collect());
        }

        Self::from_rows(columns, rows)
    }

    /// Builds a dataset from already-split text cells.
    ///
    /// Every row must have one cell per column.
    pub fn from_rows(columns: Vec<String>, rows: Vec<Vec<String>>) -> LoadResult<Self> {
        let columns = Columns::new(columns).map_err(LoadError::DuplicateColumn)?;
        let width = columns.len();

        if let Some((index, row)) = rows.iter().enumerate().find(|(_, row)| row.len() != width) {
            return Err(LoadError::RaggedRow {
                row: index + 1,
                expected: width,
                found: row.len(),
            });
        }

        let kinds: Vec<ColumnKind> = (0..width)
            .map(|i| ColumnKind::infer(rows.iter().map(|row| row[i].as_str())))
            .collect();

        let schema = Schema::new(columns.names().iter().cloned().zip(kinds.iter().copied()));
        let columns = Arc::new(columns);

        let records = rows
            .iter()
            .map(|row| {
                let values = row
                    .iter()
                    .zip(&kinds)
                    .map(|(cell, kind)| kind.convert(cell))
                    .collect();
                Record::new(Arc::clone(&columns), values)
            })
            .collect();

        Ok(Dataset::new(columns, schema, records))
    }
}
