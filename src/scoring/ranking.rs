// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: score every entry, drop the misses, filter, sort, cut.
//!
//! There is no secondary sort key. Two items with the same score stay in
//! catalog order, which is what the site editors expect ("put it higher in the
//! list if you want it first"). That only works because `sort_by` is stable.

use std::cmp::Ordering;

use crate::catalog::CatalogEntry;
use crate::scoring::core::score_entry;
use crate::types::{Match, SearchOptions};
use crate::utils::NormalizedQuery;

/// Compare two matches for ranking: higher score first.
///
/// Equal scores compare `Equal`, leaving the order to the stable sort.
pub fn compare_matches(a: &Match<'_>, b: &Match<'_>) -> Ordering {
    b.score.total_cmp(&a.score)
}

/// Score, drop zero scores, apply the category filter and sort.
///
/// Returns every surviving match, untruncated. Callers take `len()` as the
/// total and then cut to their limit.
pub fn rank_entries<'a>(
    entries: &'a [CatalogEntry],
    query: &NormalizedQuery,
    options: &SearchOptions,
) -> Vec<Match<'a>> {
    let mut matches: Vec<Match<'a>> = entries
        .iter()
        .filter_map(|entry| {
            let score = score_entry(entry, query, options);
            (score > 0.0).then(|| Match {
                item: entry.item(),
                score,
            })
        })
        .filter(|m| match &options.category {
            Some(filter) => filter.matches(m.item.category.as_deref()),
            None => true,
        })
        .collect();

    matches.sort_by(compare_matches);
    matches
}
