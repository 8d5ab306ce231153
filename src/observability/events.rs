//! Observable events for csvapi
//!
//! Events are explicit and typed.

use std::fmt;

/// Observable events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Boot & lifecycle
    /// Startup begins
    StartupBegin,
    /// Configuration resolved
    ConfigLoaded,
    /// Dataset loaded into memory
    DatasetLoaded,
    /// Dataset failed to load (FATAL)
    DatasetLoadFailed,
    /// Listener bound, ready for requests
    Serving,
    /// Server stopped
    Shutdown,

    // Requests
    /// Records query executed
    QueryExecuted,
    /// Single-record lookup served
    RecordServed,
    /// Single-record lookup out of range
    RecordNotFound,
    /// Column search executed
    ColumnSearchExecuted,
    /// Column search on an unknown column
    InvalidColumn,
    /// Request rejected by boundary validation
    RequestRejected,
}

impl Event {
    /// Returns the string representation of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::StartupBegin => "STARTUP_BEGIN",
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::DatasetLoaded => "DATASET_LOADED",
            Event::DatasetLoadFailed => "DATASET_LOAD_FAILED",
            Event::Serving => "SERVING",
            Event::Shutdown => "SHUTDOWN",
            Event::QueryExecuted => "QUERY_EXECUTED",
            Event::RecordServed => "RECORD_SERVED",
            Event::RecordNotFound => "RECORD_NOT_FOUND",
            Event::ColumnSearchExecuted => "COLUMN_SEARCH_EXECUTED",
            Event::InvalidColumn => "INVALID_COLUMN",
            Event::RequestRejected => "REQUEST_REJECTED",
        }
    }

    /// Returns true if this event means the process must stop
    pub fn is_fatal(&self) -> bool {
        matches!(self, Event::DatasetLoadFailed)
    }

    /// Per-request events are logged at TRACE
    pub fn is_request(&self) -> bool {
        matches!(
            self,
            Event::QueryExecuted
                | Event::RecordServed
                | Event::RecordNotFound
                | Event::ColumnSearchExecuted
                | Event::InvalidColumn
                | Event::RequestRejected
        )
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
