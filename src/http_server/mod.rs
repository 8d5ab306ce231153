//! # csvapi HTTP Server Module
//!
//! Axum server exposing the dataset read-only.
//!
//! # Endpoints
//!
//! - `GET /records` - Filtered, searched, sorted, paginated records
//! - `GET /records/{record_id}` - Single record
//! - `GET /columns` - Column names in file order
//! - `GET /schema` - Column kinds
//! - `GET /search/{column}` - Substring search in one column
//! - `GET /health`, `GET /metrics`

pub mod config;
pub mod errors;
pub mod observability_routes;
pub mod params;
pub mod records_routes;
pub mod server;

pub use config::HttpServerConfig;
pub use errors::{ApiError, ApiResult, ErrorResponse};
pub use records_routes::AppState;
pub use server::HttpServer;
