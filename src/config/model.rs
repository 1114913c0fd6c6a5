//! The catalog configuration model.
//!
//! Holds a package.json-shaped document as a live `serde_json::Value` and
//! exposes typed operations over its `workspaces.catalog` (default) and
//! `workspaces.catalogs.<name>` (named) version maps. The document's deeper
//! shape is never validated up front: absent or mis-shaped fields read as
//! absent, and write paths materialize what they need on the way down.

use crate::error::CatalogError;
use indexmap::IndexMap;
use serde_json::{Map, Value};
use std::fmt;
use tracing::debug;

/// Reserved name addressing the default catalog at `workspaces.catalog`.
///
/// Every other catalog name addresses an entry of `workspaces.catalogs`.
/// The default catalog is never stored under `catalogs["default"]`.
pub const DEFAULT_CATALOG: &str = "default";

const WORKSPACES_KEY: &str = "workspaces";
const PACKAGES_KEY: &str = "packages";
const CATALOG_KEY: &str = "catalog";
const CATALOGS_KEY: &str = "catalogs";

/// In-memory workspace catalog configuration.
///
/// Parsing is the only fallible operation; after construction every call
/// is total. The model tracks divergence from the parsed document with a
/// one-way change flag: `false` at construction, set by any mutation,
/// never cleared.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    doc: Value,
    changed: bool,
}

impl CatalogConfig {
    /// Parse a configuration document from a JSON string.
    ///
    /// Any syntactically valid JSON is accepted, including `{}` and
    /// documents without a `workspaces` field; shape problems only surface
    /// as absence when the affected fields are accessed.
    ///
    /// # Errors
    /// Returns [`CatalogError::Parse`] when the input is not valid JSON.
    pub fn parse(content: &str) -> Result<Self, CatalogError> {
        let doc = serde_json::from_str(content)?;
        Ok(Self {
            doc,
            changed: false,
        })
    }

    /// The live document. No copy is made; the reference sees every
    /// subsequent mutation.
    #[must_use]
    pub fn content(&self) -> &Value {
        &self.doc
    }

    /// Mutable access to the live document.
    ///
    /// External edits through this reference are permitted and do not
    /// touch the change flag, matching the ownership contract: the model
    /// cannot tell them apart from pre-existing state.
    pub fn content_mut(&mut self) -> &mut Value {
        &mut self.doc
    }

    /// Replace the whole document.
    ///
    /// Always marks the model changed, even when `doc` is structurally
    /// identical to the current value (no equality check is performed).
    pub fn set_content(&mut self, doc: Value) {
        self.doc = doc;
        self.changed = true;
        debug!("replaced catalog configuration document");
    }

    /// Whether any mutation has been applied since construction.
    #[must_use]
    pub fn has_changed(&self) -> bool {
        self.changed
    }

    /// Serialize the current document as 2-space-indented JSON.
    ///
    /// Deterministic for a given in-memory state; keys keep the order in
    /// which they were first set. Does not affect the change flag.
    #[must_use]
    pub fn to_json_string(&self) -> String {
        serde_json::to_string_pretty(&self.doc)
            .expect("JSON document serialization should not fail")
    }

    /// Ensure the named catalog exists as a (possibly empty) map.
    ///
    /// Idempotent: when the catalog already exists, nothing is written and
    /// the change flag is untouched. Creation marks the model changed,
    /// including the lazy creation of `workspaces` or `catalogs` on the
    /// way down.
    pub fn create_catalog(&mut self, name: &str) {
        if self.catalog(name).is_some() {
            return;
        }
        self.ensure_catalog(name);
        debug!(catalog = name, "created catalog");
    }

    /// Remove the named catalog, deleting its key from the document.
    ///
    /// A no-op for catalogs that do not exist: content and change flag are
    /// both left alone. Removing the last named catalog also drops the
    /// now-empty `catalogs` container.
    pub fn remove_catalog(&mut self, name: &str) {
        let Some(ws) = self
            .doc
            .get_mut(WORKSPACES_KEY)
            .and_then(Value::as_object_mut)
        else {
            return;
        };

        let removed = if name == DEFAULT_CATALOG {
            ws.remove(CATALOG_KEY).is_some()
        } else {
            let Some(catalogs) = ws.get_mut(CATALOGS_KEY).and_then(Value::as_object_mut)
            else {
                return;
            };
            let removed = catalogs.remove(name).is_some();
            if removed && catalogs.is_empty() {
                ws.remove(CATALOGS_KEY);
            }
            removed
        };

        if removed {
            self.changed = true;
            debug!(catalog = name, "removed catalog");
        }
    }

    /// Set a package's version in the named catalog.
    ///
    /// The catalog and its parent containers are created as needed, with
    /// `create_catalog` semantics. Always marks the model changed, even
    /// when the written version equals the previous one.
    pub fn set_package(&mut self, catalog_name: &str, package: &str, version: &str) {
        let map = self.ensure_catalog(catalog_name);
        map.insert(package.to_string(), Value::String(version.to_string()));
        self.changed = true;
        debug!(
            catalog = catalog_name,
            package, version, "set catalog package version"
        );
    }

    /// Alias for [`set_package`](Self::set_package); some call sites read
    /// better as "set the version recorded in this catalog".
    pub fn set_catalog_version(&mut self, catalog_name: &str, package: &str, version: &str) {
        self.set_package(catalog_name, package, version);
    }

    /// Look up a package's version in the named catalog.
    ///
    /// Pure: returns `None` when the catalog or the package is missing
    /// (or the stored value is not a string), never panics, never mutates.
    #[must_use]
    pub fn catalog_version(&self, catalog_name: &str, package: &str) -> Option<&str> {
        self.catalog(catalog_name)?.get(package)?.as_str()
    }

    /// List catalog names: `"default"` first when the default catalog
    /// exists (even empty), then the named catalogs in document order.
    #[must_use]
    pub fn list_catalogs(&self) -> Vec<String> {
        let mut names = Vec::new();
        let Some(ws) = self.workspaces() else {
            return names;
        };

        let has_default = ws.get(CATALOG_KEY).is_some_and(Value::is_object);
        if has_default {
            names.push(DEFAULT_CATALOG.to_string());
        }
        if let Some(catalogs) = ws.get(CATALOGS_KEY).and_then(Value::as_object) {
            for name in catalogs.keys() {
                // A stray catalogs["default"] must not shadow or duplicate
                // the real default slot.
                if !(has_default && name == DEFAULT_CATALOG) {
                    names.push(name.clone());
                }
            }
        }
        names
    }

    /// The named catalog's package-to-version map in document order.
    ///
    /// A missing catalog yields an empty map, not an error; entries whose
    /// version value is not a string are skipped.
    #[must_use]
    pub fn catalog_packages(&self, catalog_name: &str) -> IndexMap<String, String> {
        let mut packages = IndexMap::new();
        let Some(map) = self.catalog(catalog_name) else {
            return packages;
        };
        for (package, version) in map {
            if let Some(version) = version.as_str() {
                packages.insert(package.clone(), version.to_string());
            }
        }
        packages
    }

    /// The catalogs containing `package`: named catalogs in document
    /// order, then `"default"` last when the default catalog has it.
    ///
    /// Default-last ordering is part of the contract, letting callers
    /// treat the default catalog as the fallback after every named one.
    #[must_use]
    pub fn package_catalogs(&self, package: &str) -> Vec<String> {
        let mut names = Vec::new();
        let Some(ws) = self.workspaces() else {
            return names;
        };

        if let Some(catalogs) = ws.get(CATALOGS_KEY).and_then(Value::as_object) {
            for (name, map) in catalogs {
                if map.as_object().is_some_and(|m| m.contains_key(package)) {
                    names.push(name.clone());
                }
            }
        }
        if catalog_map(ws, DEFAULT_CATALOG).is_some_and(|m| m.contains_key(package)) {
            names.push(DEFAULT_CATALOG.to_string());
        }
        names
    }

    /// The workspace glob patterns from `workspaces.packages`.
    ///
    /// The patterns are opaque to this model and pass through
    /// serialization untouched; non-string entries are skipped. Empty when
    /// the field is absent.
    #[must_use]
    pub fn workspace_patterns(&self) -> Vec<String> {
        let Some(ws) = self.workspaces() else {
            return Vec::new();
        };
        ws.get(PACKAGES_KEY)
            .and_then(Value::as_array)
            .map(|patterns| {
                patterns
                    .iter()
                    .filter_map(|p| p.as_str().map(String::from))
                    .collect()
            })
            .unwrap_or_default()
    }

    fn workspaces(&self) -> Option<&Map<String, Value>> {
        self.doc.get(WORKSPACES_KEY)?.as_object()
    }

    /// Read-side slot resolution for the default/named duality.
    fn catalog(&self, name: &str) -> Option<&Map<String, Value>> {
        catalog_map(self.workspaces()?, name)
    }

    /// Write-side slot resolution: materialize the catalog and every
    /// container above it, marking the model changed for each creation.
    fn ensure_catalog(&mut self, name: &str) -> &mut Map<String, Value> {
        let changed = &mut self.changed;
        let ws = ensure_workspaces(&mut self.doc, changed);
        if name == DEFAULT_CATALOG {
            ensure_object(ws, CATALOG_KEY, changed)
        } else {
            let catalogs = ensure_object(ws, CATALOGS_KEY, changed);
            ensure_object(catalogs, name, changed)
        }
    }
}

impl fmt::Display for CatalogConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_json_string())
    }
}

/// Resolve a catalog name to its backing map: `"default"` reads the fixed
/// `workspaces.catalog` slot, everything else reads `workspaces.catalogs`.
fn catalog_map<'a>(ws: &'a Map<String, Value>, name: &str) -> Option<&'a Map<String, Value>> {
    if name == DEFAULT_CATALOG {
        ws.get(CATALOG_KEY)?.as_object()
    } else {
        ws.get(CATALOGS_KEY)?.as_object()?.get(name)?.as_object()
    }
}

/// Lazily materialize `workspaces`, normalizing a non-object root first.
/// Sets `changed` exactly when something had to be created or replaced.
fn ensure_workspaces<'a>(doc: &'a mut Value, changed: &mut bool) -> &'a mut Map<String, Value> {
    if !doc.is_object() {
        *doc = Value::Object(Map::new());
        *changed = true;
    }
    let Value::Object(root) = doc else {
        unreachable!("root was just normalized to an object")
    };
    ensure_object(root, WORKSPACES_KEY, changed)
}

/// Ensure `map[key]` is an object, creating or replacing it (and setting
/// `changed`) when it is absent or holds a non-object value.
fn ensure_object<'a>(
    map: &'a mut Map<String, Value>,
    key: &str,
    changed: &mut bool,
) -> &'a mut Map<String, Value> {
    if !map.get(key).is_some_and(Value::is_object) {
        map.insert(key.to_string(), Value::Object(Map::new()));
        *changed = true;
    }
    match map.get_mut(key) {
        Some(Value::Object(obj)) => obj,
        _ => unreachable!("slot was just normalized to an object"),
    }
}
