// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The content catalog: a validated, immutable list of searchable entries.
//!
//! A `Catalog` is built once (from a file, a config blob, or a compiled-in
//! list) and never changes afterwards. Each entry keeps a lowercased copy of
//! its searchable text next to the original item, so scoring does no
//! allocation per query beyond the query itself.
//!
//! Hot reload does not mutate a catalog either. `CatalogHandle` swaps one
//! `Arc<Catalog>` for another and old snapshots stay valid until dropped.

mod error;
mod handle;
mod loader;

pub use error::CatalogError;
pub use handle::{CatalogHandle, ReloadOutcome};
pub use loader::{load_catalog, parse_catalog, CatalogManifest, CATALOG_VERSION};

use std::collections::HashMap;

use crate::types::SearchItem;

// =============================================================================
// ENTRIES
// =============================================================================

/// A catalog item plus the lowercased text the scorer matches against.
#[derive(Debug, Clone)]
pub struct CatalogEntry {
    item: SearchItem,
    title: String,
    description: String,
    keywords: Vec<String>,
}

impl CatalogEntry {
    pub fn new(item: SearchItem) -> Self {
        Self {
            title: item.title.to_lowercase(),
            description: item.description.to_lowercase(),
            keywords: item.keywords.iter().map(|k| k.to_lowercase()).collect(),
            item,
        }
    }

    /// The item exactly as authored.
    pub fn item(&self) -> &SearchItem {
        &self.item
    }

    /// Lowercased title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Lowercased description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Lowercased keywords, in authored order.
    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// Does `term` appear in the title, the description, or any keyword?
    ///
    /// `term` must already be lowercased.
    pub fn mentions(&self, term: &str) -> bool {
        self.title.contains(term)
            || self.description.contains(term)
            || self.keywords.iter().any(|k| k.contains(term))
    }
}

// =============================================================================
// CATALOG
// =============================================================================

/// The complete searchable dataset.
///
/// Fields are private: once `new` has validated the items there is no way to
/// change them.
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
    by_url: HashMap<String, usize>,
    fingerprint: u32,
}

impl Catalog {
    /// Validate the items and build the catalog.
    ///
    /// Rejects empty titles or urls, blank keywords and duplicate urls. An
    /// empty item list is fine: every query then returns nothing.
    pub fn new(items: Vec<SearchItem>) -> Result<Self, CatalogError> {
        let mut by_url: HashMap<String, usize> = HashMap::with_capacity(items.len());

        for (index, item) in items.iter().enumerate() {
            validate_item(index, item)?;
            if let Some(&first) = by_url.get(&item.url) {
                return Err(CatalogError::DuplicateUrl {
                    url: item.url.clone(),
                    first,
                    second: index,
                });
            }
            by_url.insert(item.url.clone(), index);
        }

        let fingerprint = fingerprint(&items);
        let entries = items.into_iter().map(CatalogEntry::new).collect();

        Ok(Self {
            entries,
            by_url,
            fingerprint,
        })
    }

    /// A catalog with no entries.
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
            by_url: HashMap::new(),
            fingerprint: fingerprint(&[]),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// Items in catalog order.
    pub fn items(&self) -> impl Iterator<Item = &SearchItem> + '_ {
        self.entries.iter().map(CatalogEntry::item)
    }

    /// Catalog position of the item with this url.
    pub fn position(&self, url: &str) -> Option<usize> {
        self.by_url.get(url).copied()
    }

    /// Look an item up by its url.
    pub fn get(&self, url: &str) -> Option<&SearchItem> {
        self.position(url).map(|i| self.entries[i].item())
    }

    /// Distinct categories in order of first appearance.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for category in self.items().filter_map(|item| item.category.as_deref()) {
            if !seen.contains(&category) {
                seen.push(category);
            }
        }
        seen
    }

    /// CRC32 over every field of every item, in order.
    ///
    /// Two catalogs with the same fingerprint are treated as identical by
    /// `CatalogHandle::reload_from_path`.
    pub fn fingerprint(&self) -> u32 {
        self.fingerprint
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::empty()
    }
}

fn validate_item(index: usize, item: &SearchItem) -> Result<(), CatalogError> {
    if item.title.trim().is_empty() {
        return Err(CatalogError::EmptyField {
            index,
            field: "title",
        });
    }
    if item.url.trim().is_empty() {
        return Err(CatalogError::EmptyField { index, field: "url" });
    }
    if let Some(position) = item.keywords.iter().position(|k| k.trim().is_empty()) {
        return Err(CatalogError::BlankKeyword {
            index,
            url: item.url.clone(),
            position,
        });
    }
    Ok(())
}

fn fingerprint(items: &[SearchItem]) -> u32 {
    let mut hasher = crc32fast::Hasher::new();
    for item in items {
        // Field separators keep ("ab", "c") and ("a", "bc") apart
        for field in [&item.title, &item.description, &item.url] {
            hasher.update(field.as_bytes());
            hasher.update(&[0x1f]);
        }
        for keyword in &item.keywords {
            hasher.update(keyword.as_bytes());
            hasher.update(&[0x1f]);
        }
        hasher.update(&[0x1e]);
        if let Some(category) = &item.category {
            hasher.update(category.as_bytes());
        }
        hasher.update(&[0x1d]);
    }
    hasher.finalize()
}
