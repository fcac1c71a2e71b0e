// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search operations: where the rubber meets the road.
//!
//! `SearchService` wraps one catalog snapshot and answers three questions:
//! what matches this query, what is related to this page, and which keywords
//! come up most. All three are pure reads of the snapshot, so a service can be
//! cloned into every request handler and called from any thread.

pub mod popular;
pub mod related;

use std::sync::Arc;

use tracing::debug;

use crate::catalog::Catalog;
use crate::scoring::ranking::rank_entries;
use crate::types::{Match, SearchItem, SearchOptions, SearchResult};
use crate::utils::NormalizedQuery;

#[derive(Debug, Clone)]
pub struct SearchService {
    catalog: Arc<Catalog>,
}

impl SearchService {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Rank the catalog against `query`.
    ///
    /// Blank queries return an empty result without scoring anything.
    pub fn search(&self, query: &str, options: &SearchOptions) -> SearchResult {
        let Some(query) = NormalizedQuery::parse(query) else {
            return SearchResult::empty();
        };

        let matches = rank_entries(self.catalog.entries(), &query, options);
        let total_matches = matches.len();

        debug!(
            query = query.text(),
            terms = query.terms().len(),
            total_matches,
            limit = options.limit,
            "search"
        );

        SearchResult {
            results: matches
                .into_iter()
                .take(options.limit)
                .map(|m| m.item.clone())
                .collect(),
            total_matches,
        }
    }

    /// Same ranking as `search`, with scores attached. Truncated to the limit.
    pub fn matches(&self, query: &str, options: &SearchOptions) -> Vec<Match<'_>> {
        let Some(query) = NormalizedQuery::parse(query) else {
            return Vec::new();
        };
        let mut matches = rank_entries(self.catalog.entries(), &query, options);
        matches.truncate(options.limit);
        matches
    }

    /// Other pages worth showing next to `item`: same category first, then
    /// shared keywords. Empty if `item` is not in this catalog.
    pub fn related_content(&self, item: &SearchItem, limit: usize) -> Vec<SearchItem> {
        self.related_to_url(&item.url, limit)
    }

    /// `related_content` keyed by url. An unknown url gives an empty list.
    pub fn related_to_url(&self, url: &str, limit: usize) -> Vec<SearchItem> {
        related::related_items(&self.catalog, url, limit)
            .into_iter()
            .cloned()
            .collect()
    }

    /// The `limit` most frequent keywords across the catalog.
    pub fn popular_search_terms(&self, limit: usize) -> Vec<String> {
        popular::popular_keywords(&self.catalog, limit)
            .into_iter()
            .map(str::to_string)
            .collect()
    }
}

impl From<Catalog> for SearchService {
    fn from(catalog: Catalog) -> Self {
        Self::new(Arc::new(catalog))
    }
}
