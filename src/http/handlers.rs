//! API route handlers.
//!
//! Each handler is a pure mapping from request to JSON; shared state is
//! read-only.

use axum::{
    extract::{rejection::PathRejection, rejection::QueryRejection, Path, Query, State},
    Json,
};
use crate::catalog::Site;
use crate::http::response::{
    timestamp, ApiError, DataEnvelope, HealthResponse, ProxyEnvelope, SERVICE_NAME,
};
use crate::http::server::AppState;

/// First value of `name` in a decoded query string, as Flask-style
/// `args.get` would return it.
pub fn first_param<'a>(pairs: &'a [(String, String)], name: &str) -> Option<&'a str> {
    pairs
        .iter()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.as_str())
}

/// `GET /api/sites`
pub async fn list_sites(State(state): State<AppState>) -> Json<DataEnvelope<Vec<Site>>> {
    Json(DataEnvelope::stamped(state.catalog.list_all().to_vec()))
}

/// `GET /api/sites/{id}`
///
/// A segment that is not an unsigned integer does not name this route at
/// all and is reported as an unknown endpoint.
pub async fn get_site(
    State(state): State<AppState>,
    id: Result<Path<u64>, PathRejection>,
) -> Result<Json<DataEnvelope<Site>>, ApiError> {
    let Path(id) = id.map_err(|_| ApiError::RouteNotFound)?;
    let site = state.catalog.get_by_id(id)?;
    Ok(Json(DataEnvelope::new(site.clone())))
}

/// `GET /api/proxy?url=`
pub async fn proxy(
    State(state): State<AppState>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<ProxyEnvelope>, ApiError> {
    let Query(pairs) = query.map_err(|rejection| ApiError::Validation(rejection.body_text()))?;
    let result = state.fetcher.fetch(first_param(&pairs, "url")).await?;
    Ok(Json(ProxyEnvelope {
        success: true,
        result,
    }))
}

/// `GET /api/health`
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        timestamp: timestamp(),
        service: SERVICE_NAME,
    })
}

/// Fallback for every unmatched path.
pub async fn not_found() -> ApiError {
    ApiError::RouteNotFound
}

/// Known path, unsupported method.
pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}
