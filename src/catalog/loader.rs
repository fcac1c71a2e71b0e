// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Reading a catalog from JSON.
//!
//! Two shapes are accepted:
//!
//! ```text
//! { "version": 1, "items": [ {...}, {...} ] }     manifest (preferred)
//! [ {...}, {...} ]                                bare item list
//! ```
//!
//! The shape is picked from the first non-whitespace byte rather than with an
//! untagged enum, so serde's line/column in error messages survives.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use super::{Catalog, CatalogError};
use crate::types::SearchItem;

/// Manifest version this build understands.
pub const CATALOG_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogManifest {
    pub version: u32,
    pub items: Vec<SearchItem>,
}

/// Parse and validate a catalog from JSON text.
pub fn parse_catalog(json: &str) -> Result<Catalog, CatalogError> {
    let items = if json.trim_start().starts_with('[') {
        serde_json::from_str::<Vec<SearchItem>>(json)?
    } else {
        let manifest: CatalogManifest = serde_json::from_str(json)?;
        if manifest.version != CATALOG_VERSION {
            return Err(CatalogError::UnsupportedVersion {
                found: manifest.version,
                expected: CATALOG_VERSION,
            });
        }
        manifest.items
    };
    Catalog::new(items)
}

/// Read, parse and validate a catalog file.
pub fn load_catalog(path: impl AsRef<Path>) -> Result<Catalog, CatalogError> {
    let path = path.as_ref();
    let json = fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let catalog = parse_catalog(&json)?;

    info!(
        path = %path.display(),
        items = catalog.len(),
        fingerprint = %format!("{:08x}", catalog.fingerprint()),
        "catalog loaded"
    );

    Ok(catalog)
}
