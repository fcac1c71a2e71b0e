//! Shared test utilities and fixtures.

#![allow(dead_code)]

use std::sync::{Arc, LazyLock};

use sitesearch::{load_catalog, Catalog, SearchItem, SearchService};

// Re-export canonical test utilities from sitesearch::testing
pub use sitesearch::testing::{make_catalog, make_item, make_item_described, make_item_in};

/// The sample catalog shipped with the repo.
pub const SITE_CATALOG: &str = "data/catalog.json";

/// Loaded once per test binary.
static SITE: LazyLock<Arc<Catalog>> = LazyLock::new(|| {
    Arc::new(load_catalog(SITE_CATALOG).expect("Failed to load sample catalog"))
});

/// Service over the sample catalog.
pub fn site_service() -> SearchService {
    SearchService::new(Arc::clone(&SITE))
}

/// The two-item membership catalog used throughout the ranking tests.
pub fn membership_pair() -> SearchService {
    SearchService::from(make_catalog(vec![
        make_item("Membership", "/membership", &["join", "renew", "member"]),
        make_item("Membership FAQ", "/membership#faq", &["faq", "questions"]),
    ]))
}

/// Catalog where "epilepsy" is tagged five times and "training" twice.
pub fn tagged_catalog() -> SearchService {
    SearchService::from(make_catalog(vec![
        make_item("Epilepsy", "/epilepsy", &["epilepsy"]),
        make_item("Seizures", "/seizures", &["epilepsy", "training"]),
        make_item("Diagnosis", "/diagnosis", &["epilepsy"]),
        make_item("First Aid", "/first-aid", &["epilepsy", "training"]),
        make_item("Schools", "/schools", &["epilepsy"]),
    ]))
}

pub fn urls(items: &[SearchItem]) -> Vec<&str> {
    items.iter().map(|item| item.url.as_str()).collect()
}
