//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware stack)
//!     → request.rs (request ID, metrics)
//!     → handlers.rs (catalog reads, proxy fetches, health)
//!     → response.rs (success envelope or ApiError envelope)
//!     → Send to client
//! ```

pub mod handlers;
pub mod request;
pub mod response;
pub mod server;

pub use response::ApiError;
pub use server::{AppState, HttpServer};
