//! Error types for catalog configuration handling.

use thiserror::Error;

/// Error raised while constructing a catalog configuration model.
///
/// Parsing is the only fallible operation: every call on a constructed
/// model is total, with lookup misses surfacing as `None`, empty
/// collections, or no-ops rather than errors.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Invalid JSON in workspace configuration: {0}")]
    Parse(#[from] serde_json::Error),
}
