// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for catalog parsing and validation.
//!
//! Arbitrary bytes either become a valid catalog or a `CatalogError`. Whatever
//! gets through validation must be safe to query.

#![no_main]

use libfuzzer_sys::fuzz_target;
use sitesearch::{parse_catalog, SearchOptions, SearchService};

fuzz_target!(|data: &[u8]| {
    let Ok(json) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(catalog) = parse_catalog(json) else {
        return;
    };

    for item in catalog.items() {
        assert!(!item.title.trim().is_empty());
        assert!(!item.url.trim().is_empty());
        assert!(item.keywords.iter().all(|k| !k.trim().is_empty()));
        assert!(catalog.get(&item.url).is_some());
    }

    let service = SearchService::from(catalog);
    let Some(first) = service.catalog().items().next().cloned() else {
        return;
    };
    let _ = service.search(&first.title, &SearchOptions::default());
    let related = service.related_content(&first, 5);
    assert!(related.iter().all(|item| item.url != first.url));
    let _ = service.popular_search_terms(5);
});
