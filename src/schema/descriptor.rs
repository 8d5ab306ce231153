//! Schema descriptor
//!
//! Derived once at load time from the CSV header and inferred column kinds.
//! Used to validate column arguments and to document the dataset shape.

use serde::Serialize;

use super::types::ColumnKind;
use crate::dataset::Dataset;

/// One column as exposed on `/schema`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldInfo {
    pub name: String,
    /// Zero-based position in the source header
    pub position: usize,
    pub kind: ColumnKind,
}

/// Column kinds of a dataset, in file order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schema {
    fields: Vec<FieldInfo>,
}

impl Schema {
    /// Builds a schema from `(name, kind)` pairs in file order
    pub fn new<I>(columns: I) -> Self
    where
        I: IntoIterator<Item = (String, ColumnKind)>,
    {
        let fields = columns
            .into_iter()
            .enumerate()
            .map(|(position, (name, kind))| FieldInfo {
                name,
                position,
                kind,
            })
            .collect();
        Self { fields }
    }

    pub fn fields(&self) -> &[FieldInfo] {
        &self.fields
    }

    /// Declared kind of a column
    pub fn kind_of(&self, column: &str) -> Option<ColumnKind> {
        self.fields
            .iter()
            .find(|f| f.name == column)
            .map(|f| f.kind)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Column names of a dataset in file order.
///
/// An empty dataset yields an empty list.
pub fn describe(dataset: &Dataset) -> Vec<String> {
    dataset.columns().names().to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positions_follow_input_order() {
        let schema = Schema::new(vec![
            ("name".to_string(), ColumnKind::String),
            ("age".to_string(), ColumnKind::Integer),
        ]);

        assert_eq!(schema.len(), 2);
        assert_eq!(schema.fields()[1].position, 1);
        assert_eq!(schema.kind_of("age"), Some(ColumnKind::Integer));
        assert_eq!(schema.kind_of("city"), None);
    }

    #[test]
    fn test_field_info_serialization() {
        let schema = Schema::new(vec![("active".to_string(), ColumnKind::Boolean)]);
        let json = serde_json::to_value(&schema.fields()[0]).unwrap();
        assert_eq!(json["kind"], "boolean");
        assert_eq!(json["position"], 0);
    }

    #[test]
    fn test_describe_empty_dataset() {
        let dataset = Dataset::from_rows(Vec::new(), Vec::new()).unwrap();
        assert!(describe(&dataset).is_empty());
    }
}
