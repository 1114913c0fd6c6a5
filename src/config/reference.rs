//! `catalog:` protocol references.
//!
//! Workspace packages consume catalogs through version specifiers like:
//! - `catalog:` — the default catalog
//! - `catalog:default` — same thing, spelled out
//! - `catalog:react18` — the named catalog `react18`
//!
//! Any other specifier is simply not a catalog reference; parsing is total
//! and never errors.

use super::model::{CatalogConfig, DEFAULT_CATALOG};

const CATALOG_PROTOCOL: &str = "catalog:";

/// A parsed `catalog:` version specifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogRef {
    /// `catalog:` or `catalog:default`.
    Default,
    /// `catalog:<name>` for any other name.
    Named(String),
}

impl CatalogRef {
    /// Parse a version specifier into a catalog reference.
    ///
    /// Returns `None` for specifiers that do not use the `catalog:`
    /// protocol (plain semver ranges, tags, URLs, ...).
    #[must_use]
    pub fn parse(specifier: &str) -> Option<Self> {
        let name = specifier.strip_prefix(CATALOG_PROTOCOL)?.trim();
        if name.is_empty() || name == DEFAULT_CATALOG {
            Some(Self::Default)
        } else {
            Some(Self::Named(name.to_string()))
        }
    }

    /// The catalog name this reference addresses.
    #[must_use]
    pub fn catalog_name(&self) -> &str {
        match self {
            Self::Default => DEFAULT_CATALOG,
            Self::Named(name) => name,
        }
    }
}

impl CatalogConfig {
    /// Resolve a `catalog:` version specifier for a package.
    ///
    /// Returns `None` when the specifier is not a catalog reference, or
    /// when the referenced catalog does not record a version for
    /// `package`.
    #[must_use]
    pub fn resolve_reference(&self, specifier: &str, package: &str) -> Option<&str> {
        let reference = CatalogRef::parse(specifier)?;
        self.catalog_version(reference.catalog_name(), package)
    }
}
