//! # HTTP Server
//!
//! Combines the records and observability routers behind one CORS layer.

use std::io;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;

use super::config::HttpServerConfig;
use super::observability_routes::observability_routes;
use super::records_routes::{records_routes, AppState};
use crate::dataset::Dataset;
use crate::observability::{log_event, log_event_with_fields, Event, MetricsRegistry};

/// HTTP server over one loaded dataset
pub struct HttpServer {
    config: HttpServerConfig,
    state: Arc<AppState>,
    router: Router,
}

impl HttpServer {
    /// Create a server with default configuration
    pub fn new(dataset: Arc<Dataset>) -> Self {
        Self::with_config(HttpServerConfig::default(), dataset)
    }

    /// Create a server with custom configuration
    pub fn with_config(config: HttpServerConfig, dataset: Arc<Dataset>) -> Self {
        let state = Arc::new(AppState::new(dataset));
        let router = Self::build_router(&config, Arc::clone(&state));
        Self {
            config,
            state,
            router,
        }
    }

    /// Build the combined router
    fn build_router(config: &HttpServerConfig, state: Arc<AppState>) -> Router {
        Router::new()
            .merge(observability_routes(Arc::clone(&state)))
            .merge(records_routes(state))
            .layer(config.cors_layer())
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Counters shared with the handlers
    pub fn metrics(&self) -> Arc<MetricsRegistry> {
        Arc::clone(&self.state.metrics)
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Opens the listener. Host names are resolved, so `localhost` works.
    pub async fn bind(&self) -> io::Result<TcpListener> {
        let addr = self.config.socket_addr();
        TcpListener::bind(addr.as_str()).await.map_err(|e| {
            io::Error::new(e.kind(), format!("Failed to bind '{}': {}", addr, e))
        })
    }

    /// Bind and serve until ctrl-c
    pub async fn start(self) -> io::Result<()> {
        let listener = self.bind().await?;
        let bound = listener.local_addr()?.to_string();
        let records = self.state.dataset.len().to_string();
        log_event_with_fields(
            Event::Serving,
            &[("addr", bound.as_str()), ("records", records.as_str())],
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        log_event(Event::Shutdown);
        Ok(())
    }
}

async fn shutdown_signal() {
    // If the handler cannot be installed, run until killed
    if tokio::signal::ctrl_c().await.is_err() {
        std::future::pending::<()>().await;
    }
}
