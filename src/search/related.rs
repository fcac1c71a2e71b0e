// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! "You might also like": pages related to the one being viewed.
//!
//! Two sources, merged in order:
//!
//! 1. Pages in the same category, in catalog order.
//! 2. Pages sharing at least one keyword, most shared keywords first.
//!
//! **Invariant**: the reference page never appears, and no url appears twice.
//! `RelatedMerger` owns both rules so the two phases can't get them wrong.
//!
//! Keyword overlap ignores case: "First Aid" on one page and "first aid" on
//! another count as shared, the same way search matches keywords. Popularity
//! (`search::popular`) does not fold case, because it reports tags back as
//! the catalog authors wrote them.

use std::collections::HashSet;

use crate::catalog::{Catalog, CatalogEntry};
use crate::types::SearchItem;

/// Collects related items, skipping the reference and anything already taken.
struct RelatedMerger<'a> {
    seen: HashSet<&'a str>,
    items: Vec<&'a SearchItem>,
    limit: usize,
}

impl<'a> RelatedMerger<'a> {
    fn new(reference_url: &'a str, limit: usize) -> Self {
        let mut seen = HashSet::new();
        seen.insert(reference_url);
        Self {
            seen,
            items: Vec::new(),
            limit,
        }
    }

    fn is_full(&self) -> bool {
        self.items.len() >= self.limit
    }

    /// Add `item` unless it's a duplicate. Returns false once the limit is hit.
    fn push(&mut self, item: &'a SearchItem) -> bool {
        if self.is_full() {
            return false;
        }
        if self.seen.insert(item.url.as_str()) {
            self.items.push(item);
        }
        !self.is_full()
    }

    fn into_items(self) -> Vec<&'a SearchItem> {
        self.items
    }
}

/// Items related to the catalog item at `reference_url`.
///
/// Empty when the url is not in the catalog or `limit` is zero. Items without
/// a category are never "same category" as anything.
pub fn related_items<'a>(
    catalog: &'a Catalog,
    reference_url: &str,
    limit: usize,
) -> Vec<&'a SearchItem> {
    let Some(position) = catalog.position(reference_url) else {
        return Vec::new();
    };
    if limit == 0 {
        return Vec::new();
    }

    let entries = catalog.entries();
    let reference = &entries[position];
    let mut merger = RelatedMerger::new(reference.item().url.as_str(), limit);

    // Phase 1: same category
    if let Some(category) = reference.item().category.as_deref() {
        for entry in entries {
            if entry.item().category.as_deref() == Some(category) && !merger.push(entry.item()) {
                return merger.into_items();
            }
        }
    }

    // Phase 2: shared keywords, stable on ties
    for entry in by_shared_keywords(entries, reference) {
        if !merger.push(entry.item()) {
            break;
        }
    }

    merger.into_items()
}

/// Entries other than `reference` that share at least one keyword with it,
/// ordered by shared-keyword count (descending), catalog order on ties.
///
/// Keywords compare case-insensitively.
fn by_shared_keywords<'a>(
    entries: &'a [CatalogEntry],
    reference: &CatalogEntry,
) -> Vec<&'a CatalogEntry> {
    let wanted: HashSet<&str> = reference.keywords().iter().map(String::as_str).collect();
    if wanted.is_empty() {
        return Vec::new();
    }

    let mut scored: Vec<(&CatalogEntry, usize)> = entries
        .iter()
        .filter(|entry| entry.item().url != reference.item().url)
        .map(|entry| {
            let shared = entry
                .keywords()
                .iter()
                .filter(|k| wanted.contains(k.as_str()))
                .count();
            (entry, shared)
        })
        .filter(|(_, shared)| *shared > 0)
        .collect();

    scored.sort_by(|a, b| b.1.cmp(&a.1));
    scored.into_iter().map(|(entry, _)| entry).collect()
}
