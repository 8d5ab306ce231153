//! csvapi - A read-only REST API over a CSV file
//!
//! The file is loaded once at startup into an immutable [`dataset::Dataset`].
//! Requests never mutate it: every query filters, searches, sorts and
//! paginates a view of references into the loaded records.

pub mod cli;
pub mod dataset;
pub mod http_server;
pub mod observability;
pub mod query;
pub mod schema;
