//! Result sorting for queries
//!
//! Sorts by the raw string form of one column: case-sensitive, code-point
//! order. Numbers therefore sort lexicographically ("10" < "9").

use std::cmp::Reverse;

use super::spec::SortOrder;
use crate::dataset::Record;

/// Sorts query results
pub struct RecordSorter;

impl RecordSorter {
    /// Stable sort by the field at `position`.
    ///
    /// Equal keys keep their relative order in both directions.
    pub fn sort(records: &mut [&Record], position: usize, order: SortOrder) {
        match order {
            SortOrder::Asc => records.sort_by_cached_key(|r| Self::sort_key(r, position)),
            SortOrder::Desc => {
                records.sort_by_cached_key(|r| Reverse(Self::sort_key(r, position)))
            }
        }
    }

    fn sort_key(record: &Record, position: usize) -> String {
        record
            .get_at(position)
            .map(|value| value.as_text().into_owned())
            .unwrap_or_default()
    }
}
