//! Workspace catalog configuration.
//!
//! Provides:
//! - Parsing and serializing the catalog portion of a package.json-shaped
//!   JSON document
//! - CRUD operations over the default and named catalogs
//! - Change tracking for write-back decisions
//! - `catalog:` protocol reference resolution

pub mod model;
pub mod reference;

pub use model::{CatalogConfig, DEFAULT_CATALOG};
pub use reference::CatalogRef;
