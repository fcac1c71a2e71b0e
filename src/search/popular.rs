// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Keyword popularity: which tags the catalog uses most.
//!
//! Counts every keyword occurrence across every item. Ties go to the keyword
//! that appeared first in catalog order. The first-occurrence index is stored
//! next to the count and used as the secondary sort key, so the answer does
//! not depend on `HashMap` iteration order.
//!
//! Keywords are counted exactly as authored: "First Aid" and "first aid" are
//! two different tags here.

use std::collections::HashMap;

use crate::catalog::Catalog;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct KeywordTally {
    count: usize,
    first_seen: usize,
}

/// The `limit` most frequent keywords, most frequent first.
pub fn popular_keywords(catalog: &Catalog, limit: usize) -> Vec<&str> {
    let mut tallies: HashMap<&str, KeywordTally> = HashMap::new();

    let flattened = catalog
        .items()
        .flat_map(|item| item.keywords.iter().map(String::as_str));
    for (position, keyword) in flattened.enumerate() {
        tallies
            .entry(keyword)
            .and_modify(|tally| tally.count += 1)
            .or_insert(KeywordTally {
                count: 1,
                first_seen: position,
            });
    }

    let mut ranked: Vec<(&str, KeywordTally)> = tallies.into_iter().collect();
    ranked.sort_unstable_by(|(_, a), (_, b)| {
        b.count
            .cmp(&a.count)
            .then_with(|| a.first_seen.cmp(&b.first_seen))
    });

    ranked
        .into_iter()
        .take(limit)
        .map(|(keyword, _)| keyword)
        .collect()
}
