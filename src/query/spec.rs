//! Query parameters: paging, sorting, search and filters
//!
//! A `QuerySpec` is built by the boundary layer after it has validated the
//! numeric ranges. Everything else is permissive: unknown columns and
//! malformed filter pieces are dropped or ignored, never rejected.

use std::fmt;
use std::str::FromStr;

/// Default page size when none is given
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Largest accepted page size
pub const MAX_PAGE_SIZE: usize = 100;

/// Sort direction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            other => Err(format!(
                "sort_order must be 'asc' or 'desc', got '{}'",
                other
            )),
        }
    }
}

/// One `column:value` equality constraint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterPair {
    pub column: String,
    pub value: String,
}

impl FilterPair {
    pub fn new(column: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            value: value.into(),
        }
    }
}

/// Parses `col1:val1,col2:val2` into filter pairs.
///
/// Each comma-separated piece is split at its first `:`, so values may
/// contain colons. Pieces without a `:` are dropped. No trimming is done.
pub fn parse_filters(raw: &str) -> Vec<FilterPair> {
    raw.split(',')
        .filter_map(|piece| piece.split_once(':'))
        .map(|(column, value)| FilterPair::new(column, value))
        .collect()
}

/// Parameters of one records query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuerySpec {
    /// 1-based page number
    pub page: usize,
    /// Records per page
    pub page_size: usize,
    /// Sort column; ignored unless it names a real column
    pub sort_by: Option<String>,
    pub sort_order: SortOrder,
    /// Case-insensitive substring matched against every field
    pub search: Option<String>,
    /// Conjunctive equality constraints, applied in order
    pub filters: Vec<FilterPair>,
}

impl Default for QuerySpec {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            sort_by: None,
            sort_order: SortOrder::Asc,
            search: None,
            filters: Vec::new(),
        }
    }
}

impl QuerySpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(mut self, page: usize) -> Self {
        self.page = page;
        self
    }

    pub fn page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn sort(mut self, column: impl Into<String>, order: SortOrder) -> Self {
        self.sort_by = Some(column.into());
        self.sort_order = order;
        self
    }

    /// Sets the search term. An empty term means no search.
    pub fn search(mut self, term: impl Into<String>) -> Self {
        let term = term.into();
        self.search = (!term.is_empty()).then_some(term);
        self
    }

    pub fn filter(mut self, column: impl Into<String>, value: impl Into<String>) -> Self {
        self.filters.push(FilterPair::new(column, value));
        self
    }

    /// Appends filters parsed from the `col:val,...` syntax
    pub fn filters_str(mut self, raw: &str) -> Self {
        self.filters.extend(parse_filters(raw));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_filters() {
        let pairs = parse_filters("city:NYC,age:30");
        assert_eq!(
            pairs,
            vec![FilterPair::new("city", "NYC"), FilterPair::new("age", "30")]
        );
    }

    #[test]
    fn test_parse_filters_value_with_colon() {
        let pairs = parse_filters("time:10:30");
        assert_eq!(pairs, vec![FilterPair::new("time", "10:30")]);
    }

    #[test]
    fn test_parse_filters_drops_malformed_pieces() {
        let pairs = parse_filters("nocolon,,city:NYC,");
        assert_eq!(pairs, vec![FilterPair::new("city", "NYC")]);
        assert!(parse_filters("").is_empty());
    }

    #[test]
    fn test_parse_filters_keeps_whitespace() {
        let pairs = parse_filters(" city: NYC");
        assert_eq!(pairs, vec![FilterPair::new(" city", " NYC")]);
    }

    #[test]
    fn test_sort_order_from_str() {
        assert_eq!("asc".parse::<SortOrder>(), Ok(SortOrder::Asc));
        assert_eq!("desc".parse::<SortOrder>(), Ok(SortOrder::Desc));
        assert!("DESC".parse::<SortOrder>().is_err());
    }

    #[test]
    fn test_defaults() {
        let spec = QuerySpec::new();
        assert_eq!(spec.page, 1);
        assert_eq!(spec.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(spec.sort_order, SortOrder::Asc);
        assert!(spec.filters.is_empty());
    }

    #[test]
    fn test_empty_search_is_none() {
        assert_eq!(QuerySpec::new().search("").search, None);
        assert_eq!(QuerySpec::new().search("ny").search.as_deref(), Some("ny"));
    }
}
