//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, addresses parse)
//! - Check catalog integrity (ids via `Catalog::check_ids`; absolute URLs)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: DashboardConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use thiserror::Error;
use url::Url;

use crate::catalog::{Catalog, CatalogError};
use crate::config::schema::DashboardConfig;

/// A single semantic problem in a config.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("listener.bind_address '{0}' is not a socket address")]
    InvalidBindAddress(String),

    #[error("observability.metrics_address '{0}' is not a socket address")]
    InvalidMetricsAddress(String),

    #[error("{0} must be greater than zero")]
    ZeroValue(&'static str),

    #[error("proxy.timeout_secs ({fetch_secs}) must be below timeouts.request_secs ({request_secs})")]
    FetchOutlivesRequest { fetch_secs: u64, request_secs: u64 },

    #[error("sites: {0}")]
    Catalog(CatalogError),

    #[error("site {id} url '{url}' is not an absolute URL")]
    InvalidSiteUrl { id: u64, url: String },
}

/// Check a parsed config for semantic problems.
pub fn validate_config(config: &DashboardConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress(
            config.listener.bind_address.clone(),
        ));
    }
    if config.observability.metrics_enabled
        && config.observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError::InvalidMetricsAddress(
            config.observability.metrics_address.clone(),
        ));
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroValue("timeouts.request_secs"));
    }
    if config.proxy.timeout_secs == 0 {
        errors.push(ValidationError::ZeroValue("proxy.timeout_secs"));
    }
    if config.proxy.max_content_chars == 0 {
        errors.push(ValidationError::ZeroValue("proxy.max_content_chars"));
    }
    // A fetch must time out on its own before the inbound request does.
    if config.timeouts.request_secs != 0 && config.proxy.timeout_secs >= config.timeouts.request_secs {
        errors.push(ValidationError::FetchOutlivesRequest {
            fetch_secs: config.proxy.timeout_secs,
            request_secs: config.timeouts.request_secs,
        });
    }

    if let Err(e) = Catalog::check_ids(&config.sites) {
        errors.push(ValidationError::Catalog(e));
    }
    for site in &config.sites {
        if Url::parse(&site.url).is_err() {
            errors.push(ValidationError::InvalidSiteUrl {
                id: site.id,
                url: site.url.clone(),
            });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
