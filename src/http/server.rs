//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up middleware (tracing, request ID, CORS, timeout, panic capture)
//! - Serve the static frontend entry point at `/`
//! - Bind server to listener and shut down gracefully

use std::any::Any;
use std::sync::Arc;
use std::time::Duration;

use axum::{
    error_handling::HandleErrorLayer,
    middleware,
    response::{IntoResponse, Response},
    routing::get,
    BoxError, Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::{timeout::error::Elapsed, timeout::TimeoutLayer, ServiceBuilder};
use tower_http::{
    catch_panic::CatchPanicLayer, cors::CorsLayer, services::ServeFile, trace::TraceLayer,
};

use crate::catalog::Catalog;
use crate::config::DashboardConfig;
use crate::fetch::FetchProxy;
use crate::http::handlers;
use crate::http::request::{
    make_request_span, propagate_request_id_layer, set_request_id_layer, track_requests,
};
use crate::http::response::ApiError;
use crate::lifecycle::{shutdown, signals};

/// Application state injected into handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub fetcher: FetchProxy,
}

impl AppState {
    pub fn new(catalog: Catalog, fetcher: FetchProxy) -> Self {
        Self {
            catalog: Arc::new(catalog),
            fetcher,
        }
    }
}

/// HTTP server for the dashboard API.
pub struct HttpServer {
    router: Router,
    config: DashboardConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration and state.
    pub fn new(config: DashboardConfig, state: AppState) -> Self {
        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    pub fn build_router(config: &DashboardConfig, state: AppState) -> Router {
        let api = Router::new()
            .route("/api/sites", get(handlers::list_sites))
            .route("/api/sites/{id}", get(handlers::get_site))
            .route("/api/proxy", get(handlers::proxy))
            .route("/api/health", get(handlers::health))
            .method_not_allowed_fallback(handlers::method_not_allowed)
            .route_layer(middleware::from_fn(track_requests))
            .with_state(state);

        api.route_service("/", ServeFile::new(&config.frontend.index_path))
            .fallback(handlers::not_found)
            .layer(CatchPanicLayer::custom(panic_response))
            .layer(
                ServiceBuilder::new()
                    .layer(HandleErrorLayer::new(timeout_error))
                    .layer(TimeoutLayer::new(Duration::from_secs(
                        config.timeouts.request_secs,
                    ))),
            )
            .layer(CorsLayer::permissive())
            .layer(propagate_request_id_layer())
            .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
            .layer(set_request_id_layer())
    }

    /// Run the server until a signal arrives or `shutdown` fires.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            request_timeout_secs = self.config.timeouts.request_secs,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                tokio::select! {
                    _ = signals::shutdown_signal() => {}
                    _ = shutdown::wait_for(shutdown) => {}
                }
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }
}

/// Maps errors from the timeout layer onto the JSON envelope.
async fn timeout_error(error: BoxError) -> ApiError {
    if error.is::<Elapsed>() {
        tracing::warn!("Request exceeded the server deadline");
        ApiError::Timeout
    } else {
        tracing::error!(error = %error, "Unhandled middleware error");
        ApiError::Internal
    }
}

fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = panic
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| panic.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    tracing::error!(panic = %detail, "Handler panicked");
    ApiError::Internal.into_response()
}
