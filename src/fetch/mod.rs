//! Server-side fetch proxy.
//!
//! # Data Flow
//! ```text
//! ?url= query value
//!     → proxy.rs (validate, single GET with timeout)
//!     → types.rs (ProxyResult: status, truncated body, flattened headers)
//!     → handler wraps it in the success envelope
//! ```
//!
//! # Design Decisions
//! - Exactly one outbound attempt; no retries, no caching
//! - Upstream 4xx/5xx are results, not errors; only transport failures fail
//! - Body truncation counts characters, not bytes
//! - The target URL is not filtered. This is an open proxy and an SSRF vector
//!   against anything the server can reach; deployments must isolate it.

pub mod proxy;
pub mod types;

pub use proxy::FetchProxy;
pub use types::{FetchError, ProxyResult};
