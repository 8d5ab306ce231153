//! Query engine for csvapi
//!
//! Runs queries against an immutable dataset snapshot.
//!
//! Records query flow (strict order):
//! 1. Start from all records in load order
//! 2. Apply filters
//! 3. Apply search to the filtered set
//! 4. Sort (if `sort_by` names a column)
//! 5. Paginate

use super::errors::{QueryError, QueryResult};
use super::filters::RecordFilter;
use super::result::PageResult;
use super::sorter::RecordSorter;
use super::spec::QuerySpec;
use crate::dataset::{Dataset, Record};

/// Read-only query engine over a dataset
#[derive(Debug, Clone, Copy)]
pub struct QueryEngine<'a> {
    dataset: &'a Dataset,
}

impl<'a> QueryEngine<'a> {
    /// Creates an engine over `dataset`
    pub fn new(dataset: &'a Dataset) -> Self {
        Self { dataset }
    }

    /// Executes a records query.
    ///
    /// Never fails: unknown filter and sort columns are ignored.
    pub fn query(&self, spec: &QuerySpec) -> PageResult<'a> {
        let columns = self.dataset.columns();
        let mut records: Vec<&'a Record> = self.dataset.records().iter().collect();

        RecordFilter::apply_filters(&mut records, &spec.filters, columns);

        if let Some(term) = spec.search.as_deref().filter(|t| !t.is_empty()) {
            RecordFilter::apply_search(&mut records, term);
        }

        if let Some(position) = spec.sort_by.as_deref().and_then(|c| columns.position(c)) {
            RecordSorter::sort(&mut records, position, spec.sort_order);
        }

        PageResult::paginate(records, spec.page, spec.page_size)
    }

    /// Looks up a single record by id.
    ///
    /// The id is checked against `0 <= id < len` but the record returned is
    /// the one at position `id - 1`. Id 0 therefore passes the check but has
    /// no record, and the last record cannot be reached.
    pub fn get(&self, id: i64) -> QueryResult<&'a Record> {
        let records = self.dataset.records();
        let in_bounds = usize::try_from(id).map_or(false, |i| i < records.len());
        if !in_bounds {
            return Err(QueryError::NotFound(id));
        }

        usize::try_from(id - 1)
            .ok()
            .and_then(|position| records.get(position))
            .ok_or(QueryError::NotFound(id))
    }

    /// Substring search within one column, in load order.
    ///
    /// Returns at most `limit` records.
    pub fn search_column(
        &self,
        column: &str,
        term: &str,
        limit: usize,
    ) -> QueryResult<Vec<&'a Record>> {
        let position = self
            .dataset
            .columns()
            .position(column)
            .ok_or_else(|| QueryError::InvalidColumn(column.to_string()))?;

        let term = term.to_lowercase();
        Ok(self
            .dataset
            .records()
            .iter()
            .filter(|record| RecordFilter::field_contains(record, position, &term))
            .take(limit)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Value;
    use crate::query::SortOrder;

    const PEOPLE: &str = "\
name,city,age
Bob,NYC,30
alice,Boston,25
Carol,NYC,41
dave,Austin,30
Eve,nyc,22
";

    fn dataset() -> Dataset {
        Dataset::from_reader(PEOPLE.as_bytes()).unwrap()
    }

    fn names(records: &[&Record]) -> Vec<String> {
        records
            .iter()
            .map(|r| r.get("name").unwrap().to_string())
            .collect()
    }

    #[test]
    fn test_blank_cell_keeps_integer_column() {
        let data = Dataset::from_reader("name,age\nBob,30\nalice,\nx,25\n".as_bytes()).unwrap();
        let engine = QueryEngine::new(&data);
        let filtered = |raw: &str| names(&engine.query(&QuerySpec::new().filters_str(raw)).data);

        assert_eq!(filtered("age:30"), vec!["Bob"]);
        assert!(filtered("age:30.0").is_empty());
        assert_eq!(filtered("age:"), vec!["alice"]);

        let nan = engine.query(&QuerySpec::new().search("nan"));
        assert!(nan.is_empty());
        assert_eq!(data.records()[1].get("age"), Some(&Value::Null));
    }

    #[test]
    fn test_default_query_returns_first_page_in_load_order() {
        let data = dataset();
        let page = QueryEngine::new(&data).query(&QuerySpec::new());

        assert_eq!(names(&page.data), vec!["Bob", "alice", "Carol", "dave", "Eve"]);
        assert_eq!(page.metadata.total_records, 5);
        assert_eq!(page.metadata.total_pages, 1);
        assert!(!page.metadata.has_next);
        assert!(!page.metadata.has_previous);
    }

    #[test]
    fn test_filter_then_search_then_sort() {
        let data = dataset();
        let spec = QuerySpec::new()
            .filters_str("city:nyc")
            .search("O")
            .sort("name", SortOrder::Desc);
        let page = QueryEngine::new(&data).query(&spec);

        assert_eq!(names(&page.data), vec!["Carol", "Bob"]);
        assert_eq!(page.metadata.total_records, 2);
    }

    #[test]
    fn test_sort_applies_to_filtered_set() {
        let data = dataset();
        let spec = QuerySpec::new()
            .filter("city", "NYC")
            .sort("age", SortOrder::Asc);
        let page = QueryEngine::new(&data).query(&spec);

        assert_eq!(names(&page.data), vec!["Eve", "Bob", "Carol"]);
    }

    #[test]
    fn test_invalid_sort_column_keeps_load_order() {
        let data = dataset();
        let spec = QuerySpec::new().sort("salary", SortOrder::Desc);
        let page = QueryEngine::new(&data).query(&spec);

        assert_eq!(names(&page.data), vec!["Bob", "alice", "Carol", "dave", "Eve"]);
    }

    #[test]
    fn test_pagination_over_filtered_set() {
        let data = dataset();
        let spec = QuerySpec::new().filter("age", "30").page(2).page_size(1);
        let page = QueryEngine::new(&data).query(&spec);

        assert_eq!(names(&page.data), vec!["dave"]);
        assert_eq!(page.metadata.total_records, 2);
        assert!(!page.metadata.has_next);
        assert!(page.metadata.has_previous);
    }

    #[test]
    fn test_get_uses_shifted_index() {
        let data = dataset();
        let engine = QueryEngine::new(&data);

        assert_eq!(engine.get(1).unwrap().get("name"), Some(&Value::from("Bob")));
        assert_eq!(engine.get(4).unwrap().get("name"), Some(&Value::from("dave")));
    }

    #[test]
    fn test_get_bounds() {
        let data = dataset();
        let engine = QueryEngine::new(&data);

        assert_eq!(engine.get(0), Err(QueryError::NotFound(0)));
        assert_eq!(engine.get(5), Err(QueryError::NotFound(5)));
        assert_eq!(engine.get(-1), Err(QueryError::NotFound(-1)));
        assert_eq!(engine.get(i64::MIN), Err(QueryError::NotFound(i64::MIN)));
    }

    #[test]
    fn test_search_column() {
        let data = dataset();
        let engine = QueryEngine::new(&data);

        let hits = engine.search_column("city", "NY", 10).unwrap();
        assert_eq!(names(&hits), vec!["Bob", "Carol", "Eve"]);

        let hits = engine.search_column("city", "ny", 2).unwrap();
        assert_eq!(names(&hits), vec!["Bob", "Carol"]);
    }

    #[test]
    fn test_search_column_only_looks_at_that_column() {
        let data = dataset();
        let hits = QueryEngine::new(&data).search_column("name", "nyc", 10).unwrap();
        assert!(hits.is_empty());
    }

    #[test]
    fn test_search_column_unknown() {
        let data = dataset();
        let err = QueryEngine::new(&data)
            .search_column("zip", "1", 10)
            .unwrap_err();
        assert_eq!(err, QueryError::InvalidColumn("zip".to_string()));
    }
}
