#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

//! In-memory model for package.json workspace dependency catalogs.
//!
//! A catalog maps package names to version specifiers. The default catalog
//! lives at `workspaces.catalog`; named catalogs live under
//! `workspaces.catalogs.<name>`. [`CatalogConfig`] parses the document,
//! exposes catalog/package operations, tracks whether the document has
//! diverged from what was parsed, and serializes back to formatted JSON.
//!
//! ```
//! use workspace_catalogs::CatalogConfig;
//!
//! let mut config = CatalogConfig::parse("{}").unwrap();
//! config.set_package("default", "react", "^18.2.0");
//! assert_eq!(config.catalog_version("default", "react"), Some("^18.2.0"));
//! assert!(config.has_changed());
//! ```

pub mod config;
pub mod error;

pub use config::{CatalogConfig, CatalogRef, DEFAULT_CATALOG};
pub use error::CatalogError;
