// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Swapping catalogs under live readers.
//!
//! The handle holds an `Arc<Catalog>` behind a `parking_lot::RwLock`. The lock
//! only guards the pointer: a reader holds it for one `Arc::clone` and then
//! searches its snapshot without any lock at all. A reload builds and
//! validates the new catalog first, then takes the write lock for a single
//! pointer store. Readers see either the old list or the new one, never a mix.

use std::path::Path;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{info, warn};

use super::{load_catalog, Catalog, CatalogError};
use crate::search::SearchService;

/// What `reload_from_path` did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReloadOutcome {
    /// File content matched the current fingerprint; nothing swapped.
    Unchanged,
    /// A new catalog is live.
    Replaced { items: usize, fingerprint: u32 },
}

#[derive(Debug)]
pub struct CatalogHandle {
    current: RwLock<Arc<Catalog>>,
}

impl CatalogHandle {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            current: RwLock::new(Arc::new(catalog)),
        }
    }

    /// The catalog that is live right now. Stays valid after later swaps.
    pub fn snapshot(&self) -> Arc<Catalog> {
        Arc::clone(&self.current.read())
    }

    /// A search service over the current snapshot.
    pub fn service(&self) -> SearchService {
        SearchService::new(self.snapshot())
    }

    /// Make `catalog` live. Returns the catalog it replaced.
    pub fn replace(&self, catalog: Catalog) -> Arc<Catalog> {
        let next = Arc::new(catalog);
        let items = next.len();
        let previous = std::mem::replace(&mut *self.current.write(), next);
        info!(
            items,
            previous_items = previous.len(),
            "catalog replaced"
        );
        previous
    }

    /// Load `path` and swap it in if its content differs from the live catalog.
    ///
    /// On any load or validation error the live catalog is left untouched.
    pub fn reload_from_path(&self, path: impl AsRef<Path>) -> Result<ReloadOutcome, CatalogError> {
        let path = path.as_ref();
        let catalog = load_catalog(path).inspect_err(|err| {
            warn!(path = %path.display(), error = %err, "catalog reload rejected");
        })?;

        if catalog.fingerprint() == self.snapshot().fingerprint() {
            return Ok(ReloadOutcome::Unchanged);
        }

        let outcome = ReloadOutcome::Replaced {
            items: catalog.len(),
            fingerprint: catalog.fingerprint(),
        };
        self.replace(catalog);
        Ok(outcome)
    }
}

impl Default for CatalogHandle {
    fn default() -> Self {
        Self::new(Catalog::empty())
    }
}
