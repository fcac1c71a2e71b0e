// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for search query handling.
//!
//! Arbitrary queries and options against the sample catalog. The service must
//! never panic and must always hand back a well-formed result.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use sitesearch::{parse_catalog, CategoryFilter, SearchOptions, SearchService};

#[derive(Debug, Arbitrary)]
struct Input {
    query: String,
    limit: u8,
    category: Option<Vec<String>>,
    fuzzy_match: bool,
    boost_exact_matches: bool,
}

fuzz_target!(|input: Input| {
    static SERVICE: std::sync::OnceLock<SearchService> = std::sync::OnceLock::new();
    let service = SERVICE.get_or_init(|| {
        let json = include_str!("../../data/catalog.json");
        SearchService::from(parse_catalog(json).expect("sample catalog is valid"))
    });

    let mut options = SearchOptions::default()
        .with_limit(input.limit as usize)
        .with_fuzzy_match(input.fuzzy_match)
        .with_exact_boost(input.boost_exact_matches);
    if let Some(categories) = input.category {
        options = options.with_category(CategoryFilter::Any(categories));
    }

    let result = service.search(&input.query, &options);
    assert!(result.results.len() <= options.limit);
    assert!(result.results.len() <= result.total_matches);
    assert!(result.total_matches <= service.catalog().len());

    let matches = service.matches(&input.query, &options);
    assert!(matches.iter().all(|m| m.score > 0.0 && m.score.is_finite()));
    assert!(matches.windows(2).all(|w| w[0].score >= w[1].score));
});
