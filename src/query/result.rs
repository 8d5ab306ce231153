//! Result types for records queries

use serde::Serialize;

use crate::dataset::Record;

/// Pagination metadata returned next to every page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageMetadata {
    /// Records left after filter and search
    pub total_records: usize,
    /// `ceil(total_records / page_size)`; zero when there are no records
    pub total_pages: usize,
    /// The requested page, not clamped
    pub current_page: usize,
    pub page_size: usize,
    pub has_next: bool,
    pub has_previous: bool,
}

impl PageMetadata {
    /// Computes metadata for `page` of `total_records` records.
    ///
    /// `has_next` and `has_previous` are derived from the requested page, so a
    /// page past the end still reports `has_previous = true`.
    pub fn compute(total_records: usize, page: usize, page_size: usize) -> Self {
        let total_pages = if page_size == 0 {
            0
        } else {
            total_records.div_ceil(page_size)
        };

        Self {
            total_records,
            total_pages,
            current_page: page,
            page_size,
            has_next: page < total_pages,
            has_previous: page > 1,
        }
    }

    /// Half-open index range of this page, clipped to `total_records`
    pub fn range(&self) -> std::ops::Range<usize> {
        let start = self
            .current_page
            .saturating_sub(1)
            .saturating_mul(self.page_size)
            .min(self.total_records);
        let end = start
            .saturating_add(self.page_size)
            .min(self.total_records);
        start..end
    }
}

/// One page of a records query
#[derive(Debug, Clone, Serialize)]
pub struct PageResult<'a> {
    pub data: Vec<&'a Record>,
    pub metadata: PageMetadata,
}

impl<'a> PageResult<'a> {
    /// Slices `records` down to the requested page
    pub fn paginate(mut records: Vec<&'a Record>, page: usize, page_size: usize) -> Self {
        let metadata = PageMetadata::compute(records.len(), page, page_size);
        let range = metadata.range();

        records.truncate(range.end);
        records.drain(..range.start);

        Self {
            data: records,
            metadata,
        }
    }

    /// Returns the number of records on this page
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if this page is empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
