//! Records HTTP Routes
//!
//! Read-only endpoints over the loaded dataset.

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;

use super::errors::{ApiError, ApiResult};
use super::params::{parse_column_search_params, parse_record_id, parse_records_params};
use crate::dataset::Dataset;
use crate::observability::{log_event_with_fields, Event, MetricsRegistry};
use crate::query::{QueryEngine, QueryError};
use crate::schema::{describe, FieldInfo};

// ==================
// Shared State
// ==================

/// State shared by every handler. The dataset is never mutated.
pub struct AppState {
    pub dataset: Arc<Dataset>,
    pub metrics: Arc<MetricsRegistry>,
}

impl AppState {
    pub fn new(dataset: Arc<Dataset>) -> Self {
        Self {
            dataset,
            metrics: Arc::new(MetricsRegistry::new()),
        }
    }

    fn engine(&self) -> QueryEngine<'_> {
        QueryEngine::new(&self.dataset)
    }

    /// Counts and logs a failed request, then hands the error back
    fn reject(&self, err: ApiError) -> ApiError {
        let detail = err.to_string();
        match &err {
            ApiError::Validation(_) => {
                self.metrics.increment_requests_rejected();
                log_event_with_fields(Event::RequestRejected, &[("detail", detail.as_str())]);
            }
            ApiError::Query(QueryError::NotFound(_)) => {
                self.metrics.increment_lookups_not_found();
                log_event_with_fields(Event::RecordNotFound, &[("detail", detail.as_str())]);
            }
            ApiError::Query(QueryError::InvalidColumn(_)) => {
                log_event_with_fields(Event::InvalidColumn, &[("detail", detail.as_str())]);
            }
        }
        err
    }
}

// ==================
// Response Types
// ==================

#[derive(Debug, Serialize)]
pub struct SchemaResponse<'a> {
    pub columns: &'a [FieldInfo],
    pub record_count: usize,
}

// ==================
// Records Routes
// ==================

/// Create records routes
pub fn records_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/records", get(list_records_handler))
        .route("/records/:record_id", get(get_record_handler))
        .route("/columns", get(list_columns_handler))
        .route("/schema", get(get_schema_handler))
        .route("/search/:column", get(search_column_handler))
        .with_state(state)
}

// ==================
// Handlers
// ==================

async fn list_records_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<HashMap<String, String>>,
) -> ApiResult<Response> {
    let spec = parse_records_params(&params).map_err(|e| state.reject(e))?;

    let page = state.engine().query(&spec);
    state.metrics.record_query(page.len());

    let page_number = spec.page.to_string();
    let returned = page.len().to_string();
    let total = page.metadata.total_records.to_string();
    log_event_with_fields(
        Event::QueryExecuted,
        &[
            ("page", page_number.as_str()),
            ("returned", returned.as_str()),
            ("sort_order", spec.sort_order.as_str()),
            ("total_records", total.as_str()),
        ],
    );

    Ok(Json(&page).into_response())
}

async fn get_record_handler(
    State(state): State<Arc<AppState>>,
    Path(record_id): Path<String>,
) -> ApiResult<Response> {
    let id = parse_record_id(&record_id).map_err(|e| state.reject(e))?;

    state.metrics.increment_lookups();
    let record = state
        .engine()
        .get(id)
        .map_err(|e| state.reject(e.into()))?;
    log_event_with_fields(Event::RecordServed, &[("record_id", record_id.as_str())]);

    Ok(Json(record).into_response())
}

async fn list_columns_handler(State(state): State<Arc<AppState>>) -> Json<Vec<String>> {
    Json(describe(&state.dataset))
}

async fn get_schema_handler(State(state): State<Arc<AppState>>) -> Response {
    Json(SchemaResponse {
        columns: state.dataset.schema().fields(),
        record_count: state.dataset.len(),
    })
    .into_response()
}

async fn search_column_handler(
    State(state): State<Arc<AppState>>,
    Path(column): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> ApiResult<Response> {
    let search = parse_column_search_params(&params).map_err(|e| state.reject(e))?;

    state.metrics.increment_column_searches();
    let hits = state
        .engine()
        .search_column(&column, &search.query, search.limit)
        .map_err(|e| state.reject(e.into()))?;
    let returned = hits.len().to_string();
    log_event_with_fields(
        Event::ColumnSearchExecuted,
        &[("column", column.as_str()), ("returned", returned.as_str())],
    );

    Ok(Json(&hits).into_response())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reject_counts_validation_failures() {
        let dataset = Dataset::from_reader("a\n1\n".as_bytes()).unwrap();
        let state = AppState::new(Arc::new(dataset));

        let err = state.reject(ApiError::validation("page must be >= 1"));
        assert!(matches!(err, ApiError::Validation(_)));
        assert_eq!(state.metrics.snapshot().requests_rejected, 1);

        state.reject(QueryError::NotFound(9).into());
        assert_eq!(state.metrics.snapshot().lookups_not_found, 1);
    }
}
