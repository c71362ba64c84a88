//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the dashboard.
//! All types derive Serde traits for deserialization from config files.

use std::net::{AddrParseError, SocketAddr};

use serde::{Deserialize, Serialize};

use crate::catalog::{default_sites, Site};

/// Root configuration for the dashboard API.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Server-side timeouts.
    pub timeouts: TimeoutConfig,

    /// Outbound fetch proxy settings.
    pub proxy: FetchConfig,

    /// Static frontend entry point.
    pub frontend: FrontendConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,

    /// Site catalog. Falls back to the built-in entries when omitted.
    pub sites: Vec<Site>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            listener: ListenerConfig::default(),
            timeouts: TimeoutConfig::default(),
            proxy: FetchConfig::default(),
            frontend: FrontendConfig::default(),
            observability: ObservabilityConfig::default(),
            sites: default_sites(),
        }
    }
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,
}

impl ListenerConfig {
    /// Parse the bind address.
    pub fn socket_addr(&self) -> Result<SocketAddr, AddrParseError> {
        self.bind_address.parse()
    }
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
        }
    }
}

/// Timeout configuration for inbound requests.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Request timeout (total time to produce a response) in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

/// Fetch proxy configuration (`[proxy]`).
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct FetchConfig {
    /// Overall timeout for one upstream exchange, in seconds.
    pub timeout_secs: u64,

    /// Characters of upstream body kept in the result.
    pub max_content_chars: usize,

    /// Redirect hops followed before giving up (0 = never follow).
    pub max_redirects: usize,

    /// User-Agent sent upstream.
    pub user_agent: String,

    /// Honor HTTP_PROXY / HTTPS_PROXY for outbound fetches.
    pub use_system_proxy: bool,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 10,
            max_content_chars: 1000,
            max_redirects: 10,
            user_agent: concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).to_string(),
            use_system_proxy: true,
        }
    }
}

/// Static frontend configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct FrontendConfig {
    /// HTML file served at `/`.
    pub index_path: String,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            index_path: "templates/index.html".to_string(),
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable, for development.
    Pretty,
    /// One JSON object per event, for log shipping.
    Json,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Log output format.
    pub log_format: LogFormat,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}
