//! Record matching for filters and search
//!
//! All matching compares lower-cased string forms. No type coercion beyond
//! rendering every value as text.

use super::spec::FilterPair;
use crate::dataset::{Columns, Record};

/// Evaluates filter pairs and search terms against records
pub struct RecordFilter;

impl RecordFilter {
    /// Retains records matching every filter pair (AND semantics).
    ///
    /// Pairs naming an unknown column are skipped.
    pub fn apply_filters(records: &mut Vec<&Record>, filters: &[FilterPair], columns: &Columns) {
        for pair in filters {
            let Some(position) = columns.position(&pair.column) else {
                continue;
            };
            let expected = pair.value.to_lowercase();
            records.retain(|record| Self::field_equals(record, position, &expected));
        }
    }

    /// Retains records where any field contains `term`, case-insensitively
    pub fn apply_search(records: &mut Vec<&Record>, term: &str) {
        let term = term.to_lowercase();
        records.retain(|record| Self::any_field_contains(record, &term));
    }

    /// Field at `position`, folded, equals an already-folded value
    pub fn field_equals(record: &Record, position: usize, folded: &str) -> bool {
        record
            .get_at(position)
            .map_or(false, |value| value.folded_text() == folded)
    }

    /// Field at `position`, folded, contains an already-folded term
    pub fn field_contains(record: &Record, position: usize, folded: &str) -> bool {
        record
            .get_at(position)
            .map_or(false, |value| value.folded_text().contains(folded))
    }

    /// Any field, folded, contains an already-folded term
    pub fn any_field_contains(record: &Record, folded: &str) -> bool {
        record
            .values()
            .iter()
            .any(|value| value.folded_text().contains(folded))
    }
}
