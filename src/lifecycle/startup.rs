//! Startup orchestration.
//!
//! # Responsibilities
//! - Turn a validated config into the shared application state
//! - Log what the process is about to serve
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - The listener is bound by the caller, after state is ready

use std::path::Path;

use thiserror::Error;

use crate::catalog::{Catalog, CatalogError};
use crate::config::{DashboardConfig, FrontendConfig};
use crate::fetch::FetchProxy;
use crate::http::AppState;

/// Failures while assembling application state.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid site catalog: {0}")]
    Catalog(#[from] CatalogError),

    #[error("failed to build outbound HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

/// Build the catalog and fetch proxy described by `config`.
pub fn build_state(config: &DashboardConfig) -> Result<AppState, StartupError> {
    let catalog = Catalog::new(config.sites.clone())?;
    let fetcher = FetchProxy::new(&config.proxy)?;

    tracing::info!(sites = catalog.len(), "Catalog loaded");
    tracing::info!(
        timeout_secs = config.proxy.timeout_secs,
        max_content_chars = config.proxy.max_content_chars,
        max_redirects = config.proxy.max_redirects,
        "Fetch proxy ready"
    );
    tracing::warn!("/api/proxy fetches any caller-supplied URL, including internal addresses");
    check_frontend(&config.frontend);

    Ok(AppState::new(catalog, fetcher))
}

/// Whether the frontend entry point exists. A missing file is not fatal;
/// `/` answers 404 until it appears.
pub fn check_frontend(config: &FrontendConfig) -> bool {
    let present = Path::new(&config.index_path).is_file();
    if present {
        tracing::info!(index_path = %config.index_path, "Frontend entry point found");
    } else {
        tracing::warn!(
            index_path = %config.index_path,
            "Frontend entry point missing; GET / will return 404"
        );
    }
    present
}
