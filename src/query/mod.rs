//! Query subsystem for csvapi
//!
//! Applies filter → search → sort → paginate to the dataset on every
//! records request, and serves single-record lookup and per-column search.
//!
//! # Comparison rules
//!
//! - Filter: folded string form equals folded value
//! - Search: folded string form contains folded term
//! - Sort: raw string form, code-point order, stable
//!
//! # Invariants
//!
//! - The dataset is never mutated; every query works on a fresh view
//! - Same dataset + same `QuerySpec` = same page

mod engine;
mod errors;
mod filters;
mod result;
mod sorter;
mod spec;

pub use engine::QueryEngine;
pub use errors::{QueryError, QueryResult};
pub use filters::RecordFilter;
pub use result::{PageMetadata, PageResult};
pub use sorter::RecordSorter;
pub use spec::{parse_filters, FilterPair, QuerySpec, SortOrder, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
