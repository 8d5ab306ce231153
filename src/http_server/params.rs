//! # Query Parameter Parsing
//!
//! Boundary validation for request parameters. Numeric ranges and the sort
//! order are enforced here so the query engine only sees valid specs.
//! Column names, search terms and filter syntax pass through unchecked.

use std::collections::HashMap;

use super::errors::{ApiError, ApiResult};
use crate::query::{QuerySpec, SortOrder, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};

/// Default column search result cap
pub const DEFAULT_SEARCH_LIMIT: usize = 10;

/// Largest column search result cap
pub const MAX_SEARCH_LIMIT: usize = 100;

/// Parsed `/search/{column}` parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSearchParams {
    pub query: String,
    pub limit: usize,
}

/// Parses `/records` query parameters into a `QuerySpec`
pub fn parse_records_params(params: &HashMap<String, String>) -> ApiResult<QuerySpec> {
    let mut spec = QuerySpec::new()
        .page(parse_bounded(params, "page", 1, 1, None)?)
        .page_size(parse_bounded(
            params,
            "page_size",
            DEFAULT_PAGE_SIZE,
            1,
            Some(MAX_PAGE_SIZE),
        )?);

    let sort_order = match params.get("sort_order") {
        Some(raw) => raw.parse::<SortOrder>().map_err(ApiError::Validation)?,
        None => SortOrder::Asc,
    };
    spec.sort_order = sort_order;
    spec.sort_by = params.get("sort_by").filter(|s| !s.is_empty()).cloned();

    if let Some(term) = params.get("search") {
        spec = spec.search(term.as_str());
    }
    if let Some(filters) = params.get("filters") {
        spec = spec.filters_str(filters);
    }

    Ok(spec)
}

/// Parses `/search/{column}` query parameters
pub fn parse_column_search_params(
    params: &HashMap<String, String>,
) -> ApiResult<ColumnSearchParams> {
    let query = params
        .get("query")
        .cloned()
        .ok_or_else(|| ApiError::validation("Missing required parameter: query"))?;
    let limit = parse_bounded(
        params,
        "limit",
        DEFAULT_SEARCH_LIMIT,
        1,
        Some(MAX_SEARCH_LIMIT),
    )?;

    Ok(ColumnSearchParams { query, limit })
}

/// Parses a `/records/{record_id}` path segment
pub fn parse_record_id(raw: &str) -> ApiResult<i64> {
    raw.parse::<i64>()
        .map_err(|_| ApiError::validation(format!("record_id must be an integer, got '{}'", raw)))
}

/// Integer parameter with a default and an inclusive range
fn parse_bounded(
    params: &HashMap<String, String>,
    name: &str,
    default: usize,
    min: usize,
    max: Option<usize>,
) -> ApiResult<usize> {
    let Some(raw) = params.get(name) else {
        return Ok(default);
    };

    let value: i64 = raw
        .parse()
        .map_err(|_| ApiError::validation(format!("{} must be an integer, got '{}'", name, raw)))?;

    let value = usize::try_from(value)
        .ok()
        .filter(|v| *v >= min)
        .ok_or_else(|| ApiError::validation(format!("{} must be >= {}", name, min)))?;

    match max {
        Some(max) if value > max => Err(ApiError::validation(format!(
            "{} must be <= {}",
            name, max
        ))),
        _ => Ok(value),
    }
}
