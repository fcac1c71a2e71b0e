// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of a search: catalog entries, query options, results.
//!
//! Everything here is plain data. The interesting parts (scoring, ranking,
//! related content) live in `scoring` and `search` and only ever borrow these
//! types, so a `SearchItem` loaded at startup is never mutated afterwards.
//!
//! # Invariants
//!
//! - **SearchItem**: `url` is the natural key. Two items in one catalog never
//!   share a url (enforced by `Catalog::new`).
//! - **Match**: `score > 0`. Zero-score items are dropped before a `Match` is built.
//! - **SearchResult**: `results.len() <= total_matches`.

use serde::{Deserialize, Serialize};

use crate::scoring::DEFAULT_LIMIT;

// =============================================================================
// CATALOG ENTRIES
// =============================================================================

/// One searchable page (or in-page section) of the site.
///
/// `keywords` has no serde default: an entry without a keyword list fails to
/// load. An empty list is fine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchItem {
    pub title: String,
    pub description: String,
    /// Site-relative url. May carry a `#fragment` pointing at an in-page anchor.
    pub url: String,
    pub keywords: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl SearchItem {
    /// Does the url point at an in-page anchor?
    #[inline]
    pub fn has_fragment(&self) -> bool {
        self.url.contains('#')
    }

    /// The `#fragment` part of the url, without the `#`.
    pub fn fragment(&self) -> Option<&str> {
        self.url.split_once('#').map(|(_, fragment)| fragment)
    }
}

// =============================================================================
// QUERY OPTIONS
// =============================================================================

/// Restrict results to one category or to any of a set of categories.
///
/// Deserializes from either `"training"` or `["training", "events"]`, which is
/// the shape callers send over JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CategoryFilter {
    One(String),
    Any(Vec<String>),
}

impl CategoryFilter {
    /// Check if an item's category passes this filter.
    ///
    /// Items without a category never pass.
    pub fn matches(&self, category: Option<&str>) -> bool {
        let Some(category) = category else {
            return false;
        };
        match self {
            CategoryFilter::One(wanted) => wanted == category,
            CategoryFilter::Any(wanted) => wanted.iter().any(|c| c == category),
        }
    }
}

impl From<&str> for CategoryFilter {
    fn from(category: &str) -> Self {
        CategoryFilter::One(category.to_string())
    }
}

impl From<Vec<String>> for CategoryFilter {
    fn from(mut categories: Vec<String>) -> Self {
        if categories.len() == 1 {
            CategoryFilter::One(categories.remove(0))
        } else {
            CategoryFilter::Any(categories)
        }
    }
}

/// Knobs for a single `search` call. Every field has a default, so `{}` is a
/// valid JSON payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchOptions {
    pub limit: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<CategoryFilter>,
    pub fuzzy_match: bool,
    pub boost_exact_matches: bool,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            category: None,
            fuzzy_match: true,
            boost_exact_matches: true,
        }
    }
}

impl SearchOptions {
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn with_category(mut self, category: impl Into<CategoryFilter>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_fuzzy_match(mut self, enabled: bool) -> Self {
        self.fuzzy_match = enabled;
        self
    }

    pub fn with_exact_boost(mut self, enabled: bool) -> Self {
        self.boost_exact_matches = enabled;
        self
    }
}

// =============================================================================
// RESULTS
// =============================================================================

/// A catalog item that scored above zero for some query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Match<'a> {
    pub item: &'a SearchItem,
    pub score: f64,
}

/// What `search` hands back to callers.
///
/// `total_matches` is counted after the category filter but before the limit,
/// so a UI can render "N more results".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub results: Vec<SearchItem>,
    pub total_matches: usize,
}

impl SearchResult {
    /// The defined answer for empty queries and queries that match nothing.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}
