//! Response envelopes and error mapping.
//!
//! # Responsibilities
//! - Wrap successful results in `{success: true, ...}`
//! - Map every failure kind to a status code and `{success: false, error}`
//!
//! # Design Decisions
//! - `ApiError::status` is a pure function so the mapping is testable
//!   without a server
//! - Error text is the `Display` output; no internals leak to clients

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::catalog::CatalogError;
use crate::fetch::{FetchError, ProxyResult};

/// Name reported by the health endpoint.
pub const SERVICE_NAME: &str = "Portfolio Dashboard API";

/// Every failure a route can report.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Missing or malformed input.
    #[error("{0}")]
    Validation(String),

    /// Catalog lookup miss.
    #[error("Site not found")]
    NotFound,

    /// Outbound fetch failure.
    #[error("{0}")]
    Network(String),

    /// No route matched the request.
    #[error("Endpoint not found")]
    RouteNotFound,

    /// The path exists but not for this method.
    #[error("Method not allowed")]
    MethodNotAllowed,

    /// The server-side request deadline passed.
    #[error("Request timed out")]
    Timeout,

    /// Anything unexpected, including handler panics.
    #[error("Internal server error")]
    Internal,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound | ApiError::RouteNotFound => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Timeout => StatusCode::REQUEST_TIMEOUT,
            ApiError::Network(_) | ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<CatalogError> for ApiError {
    fn from(error: CatalogError) -> Self {
        match error {
            CatalogError::NotFound => ApiError::NotFound,
            other => {
                tracing::error!(error = %other, "Unexpected catalog error");
                ApiError::Internal
            }
        }
    }
}

impl From<FetchError> for ApiError {
    fn from(error: FetchError) -> Self {
        match error {
            FetchError::MissingUrl => ApiError::Validation(error.to_string()),
            FetchError::Network(description) => ApiError::Network(description),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorEnvelope {
            success: false,
            error: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}

/// `{success: false, error}`.
#[derive(Debug, Serialize)]
pub struct ErrorEnvelope {
    pub success: bool,
    pub error: String,
}

/// `{success: true, data, timestamp?}`.
#[derive(Debug, Serialize)]
pub struct DataEnvelope<T> {
    pub success: bool,
    pub data: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

impl<T> DataEnvelope<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
            timestamp: None,
        }
    }

    pub fn stamped(data: T) -> Self {
        Self {
            success: true,
            data,
            timestamp: Some(timestamp()),
        }
    }
}

/// `{success: true, status_code, content, headers}`.
#[derive(Debug, Serialize)]
pub struct ProxyEnvelope {
    pub success: bool,
    #[serde(flatten)]
    pub result: ProxyResult,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: String,
    pub service: &'static str,
}

/// Local time as ISO-8601 with microseconds and no offset.
pub fn timestamp() -> String {
    chrono::Local::now()
        .format("%Y-%m-%dT%H:%M:%S%.6f")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ApiError::Validation("x".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ApiError::NotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::RouteNotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::Network("x".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(ApiError::Internal.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            ApiError::MethodNotAllowed.status(),
            StatusCode::METHOD_NOT_ALLOWED
        );
        assert_eq!(ApiError::Timeout.status(), StatusCode::REQUEST_TIMEOUT);
    }

    #[test]
    fn test_messages() {
        assert_eq!(ApiError::NotFound.to_string(), "Site not found");
        assert_eq!(ApiError::RouteNotFound.to_string(), "Endpoint not found");
        assert_eq!(ApiError::Internal.to_string(), "Internal server error");
        assert_eq!(
            ApiError::from(FetchError::MissingUrl).to_string(),
            "URL parameter is required"
        );
    }

    #[test]
    fn test_conversions() {
        assert_eq!(
            ApiError::from(FetchError::MissingUrl).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::from(FetchError::Network("connection refused".into())),
            ApiError::Network("connection refused".into())
        );
        assert_eq!(ApiError::from(CatalogError::NotFound), ApiError::NotFound);
        assert_eq!(
            ApiError::from(CatalogError::DuplicateId(3)),
            ApiError::Internal
        );
    }

    #[test]
    fn test_error_envelope_shape() {
        let body = serde_json::to_value(ErrorEnvelope {
            success: false,
            error: ApiError::NotFound.to_string(),
        })
        .unwrap();
        assert_eq!(
            body,
            serde_json::json!({"success": false, "error": "Site not found"})
        );
    }

    #[test]
    fn test_proxy_envelope_is_flat() {
        let mut headers = BTreeMap::new();
        headers.insert("content-type".to_string(), "text/plain".to_string());
        let body = serde_json::to_value(ProxyEnvelope {
            success: true,
            result: ProxyResult {
                status_code: 404,
                content: "missing".to_string(),
                headers,
            },
        })
        .unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "success": true,
                "status_code": 404,
                "content": "missing",
                "headers": {"content-type": "text/plain"}
            })
        );
    }

    #[test]
    fn test_data_envelope_timestamp_optional() {
        let plain = serde_json::to_value(DataEnvelope::new(1)).unwrap();
        assert!(plain.get("timestamp").is_none());

        let stamped = serde_json::to_value(DataEnvelope::stamped(1)).unwrap();
        let ts = stamped["timestamp"].as_str().unwrap();
        assert!(chrono::NaiveDateTime::parse_from_str(ts, "%Y-%m-%dT%H:%M:%S%.f").is_ok());
    }
}
