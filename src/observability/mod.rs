//! Observability subsystem for csvapi
//!
//! - Structured logging (JSON lines)
//! - Request counters
//! - Typed lifecycle events
//!
//! Observability is read-only: it never changes how a request is answered.
//!
//! # Usage
//!
//! ```ignore
//! use csvapi::observability::{log_event_with_fields, Event, MetricsRegistry};
//!
//! log_event_with_fields(Event::DatasetLoaded, &[("records", "42")]);
//!
//! let metrics = MetricsRegistry::new();
//! metrics.record_query(10);
//! ```

mod events;
mod logger;
mod metrics;

pub use events::Event;
pub use logger::{Logger, Severity};
pub use metrics::{MetricsRegistry, MetricsSnapshot};

fn severity_for(event: Event) -> Severity {
    if event.is_fatal() {
        Severity::Fatal
    } else if event.is_request() {
        Severity::Trace
    } else {
        Severity::Info
    }
}

/// Log a lifecycle event
pub fn log_event(event: Event) {
    Logger::log(severity_for(event), event.as_str(), &[]);
}

/// Log an event with fields
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    Logger::log(severity_for(event), event.as_str(), fields);
}
