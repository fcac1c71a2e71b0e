// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind search ranking.
//!
//! Every item gets an additive score built from independent signals. Nothing is
//! normalized or weighted against document length: the catalog is a few dozen
//! hand-written entries, and the weights were tuned by eye against it.
//!
//! # Weights
//!
//! | Signal                         | Points | Gate                  |
//! |--------------------------------|--------|-----------------------|
//! | Title contains query           | 10     |                       |
//! | Title equals query             | +15    | `boost_exact_matches` |
//! | Description contains query     | 5      |                       |
//! | Keyword equals query           | 8 each |                       |
//! | Keyword contains query         | 6 each |                       |
//! | Fraction of terms found × 4    | 0..4   | `fuzzy_match`, >1 term|
//! | Url has `#fragment`            | 2      | always                |
//!
//! The fragment bonus is applied whether or not anything else matched. An item
//! with a fragment url can therefore reach the results on fuzzy credit alone,
//! where the same item without a fragment would rank lower.

use crate::catalog::CatalogEntry;
use crate::types::SearchOptions;
use crate::utils::NormalizedQuery;

// =============================================================================
// SCORING CONSTANTS
// =============================================================================

/// Title contains the normalized query.
pub const TITLE_CONTAINS_SCORE: f64 = 10.0;

/// Title is exactly the normalized query. Stacks with `TITLE_CONTAINS_SCORE`.
pub const TITLE_EXACT_BOOST: f64 = 15.0;

/// Description contains the normalized query.
pub const DESCRIPTION_CONTAINS_SCORE: f64 = 5.0;

/// A keyword equals the normalized query.
pub const KEYWORD_EXACT_SCORE: f64 = 8.0;

/// A keyword contains the normalized query (but is not equal to it).
pub const KEYWORD_CONTAINS_SCORE: f64 = 6.0;

/// Ceiling of the multi-term bonus, reached when every term is found.
pub const MAX_FUZZY_BONUS: f64 = 4.0;

/// Url points at an in-page anchor.
pub const FRAGMENT_URL_BOOST: f64 = 2.0;

// =============================================================================
// DEFAULT LIMITS
// =============================================================================

/// Results returned by `search` when the caller does not say.
pub const DEFAULT_LIMIT: usize = 10;

/// Items returned by `related_content` when the caller does not say.
pub const DEFAULT_RELATED_LIMIT: usize = 3;

/// Keywords returned by `popular_search_terms` when the caller does not say.
pub const DEFAULT_POPULAR_LIMIT: usize = 5;

/// Total score of one catalog entry for one query.
///
/// Pure: same entry, query and options always give the same number.
pub fn score_entry(entry: &CatalogEntry, query: &NormalizedQuery, options: &SearchOptions) -> f64 {
    let mut score = title_score(entry.title(), query.text(), options.boost_exact_matches);

    if entry.description().contains(query.text()) {
        score += DESCRIPTION_CONTAINS_SCORE;
    }

    score += keyword_score(entry.keywords(), query.text());

    if options.fuzzy_match && query.is_multi_term() {
        score += fuzzy_bonus(entry, query);
    }

    if entry.item().has_fragment() {
        score += FRAGMENT_URL_BOOST;
    }

    score
}

/// Substring credit for the title, plus the exact-match boost when enabled.
///
/// `title` must already be lowercased.
pub fn title_score(title: &str, query: &str, boost_exact: bool) -> f64 {
    if !title.contains(query) {
        return 0.0;
    }
    if boost_exact && title == query {
        TITLE_CONTAINS_SCORE + TITLE_EXACT_BOOST
    } else {
        TITLE_CONTAINS_SCORE
    }
}

/// Per-keyword credit. Every matching keyword counts, so an item tagged
/// `["first aid", "first aid training"]` collects both.
pub fn keyword_score<S: AsRef<str>>(keywords: &[S], query: &str) -> f64 {
    keywords
        .iter()
        .map(|keyword| {
            let keyword = keyword.as_ref();
            if keyword == query {
                KEYWORD_EXACT_SCORE
            } else if keyword.contains(query) {
                KEYWORD_CONTAINS_SCORE
            } else {
                0.0
            }
        })
        .sum()
}

/// Partial credit for multi-word queries: the fraction of query terms that
/// show up anywhere in the entry, scaled to `MAX_FUZZY_BONUS`.
///
/// Short terms never count as found, but they still sit in the denominator,
/// so "to the AGM" can at best earn two thirds of the bonus.
pub fn fuzzy_bonus(entry: &CatalogEntry, query: &NormalizedQuery) -> f64 {
    let total = query.terms().len();
    if total == 0 {
        return 0.0;
    }
    let matched = query
        .fuzzy_terms()
        .filter(|term| entry.mentions(term))
        .count();
    (matched as f64 / total as f64) * MAX_FUZZY_BONUS
}
