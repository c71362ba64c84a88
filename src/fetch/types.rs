//! Fetch proxy result and error types.

use std::collections::BTreeMap;
use std::error::Error as _;

use serde::Serialize;
use thiserror::Error;

/// Summary of one upstream response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProxyResult {
    /// Upstream HTTP status, whatever its class.
    pub status_code: u16,

    /// Decoded body, cut to the configured character limit.
    pub content: String,

    /// Lowercased header names; repeated headers joined with ", ".
    pub headers: BTreeMap<String, String>,
}

/// Failure modes of a proxied fetch.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// No target was supplied. Raised before any network activity.
    #[error("URL parameter is required")]
    MissingUrl,

    /// Transport-level failure: DNS, connect, TLS, timeout, bad URL, body read.
    #[error("{0}")]
    Network(String),
}

impl FetchError {
    /// Build a `Network` error carrying the whole source chain of `error`.
    pub fn network(error: &reqwest::Error) -> Self {
        let mut description = error.to_string();
        let mut source = error.source();
        while let Some(cause) = source {
            description.push_str(": ");
            description.push_str(&cause.to_string());
            source = cause.source();
        }
        FetchError::Network(description)
    }
}
