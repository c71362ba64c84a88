//! Site catalog subsystem.
//!
//! # Data Flow
//! ```text
//! [[sites]] in config (or the built-in defaults)
//!     → Catalog::new (id checks)
//!     → Arc<Catalog> in AppState
//!     → handlers read via list_all / get_by_id
//! ```
//!
//! # Design Decisions
//! - The catalog is built once at startup and never mutated
//! - Insertion order is the listing order
//! - Lookups are linear; catalogs are a handful of entries

pub mod site;
pub mod store;

pub use site::{default_sites, Site};
pub use store::{Catalog, CatalogError};
