//! Portfolio Dashboard API
//!
//! A small JSON backend exposing a fixed catalog of portfolio sites and a
//! server-side fetch proxy for pages the browser cannot read cross-origin.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request
//!     ───────────────▶ http::server (axum router + middleware)
//!                          │
//!              ┌───────────┼──────────────┐
//!              ▼           ▼              ▼
//!          catalog      fetch          health
//!       (Arc<Catalog>) (FetchProxy)   (static)
//!              │           │
//!              │           └──▶ upstream site (one GET, bounded timeout)
//!              ▼
//!     http::response (success envelope | ApiError envelope)
//!
//!     Cross-cutting: config, observability, lifecycle
//! ```

pub mod catalog;
pub mod config;
pub mod fetch;
pub mod http;
pub mod lifecycle;
pub mod observability;

pub use catalog::{Catalog, Site};
pub use config::DashboardConfig;
pub use fetch::{FetchProxy, ProxyResult};
pub use http::HttpServer;
pub use lifecycle::Shutdown;
