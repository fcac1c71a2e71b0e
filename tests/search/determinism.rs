//! Same catalog, same query, same answer.

use std::sync::Arc;

use super::common::{site_service, SITE_CATALOG};
use sitesearch::{load_catalog, SearchOptions, SearchService};

const QUERIES: &[&str] = &[
    "epilepsy",
    "first aid training",
    "membership",
    "events",
    "to the agm",
    "zzzz",
];

#[test]
fn test_repeated_searches_agree() {
    let service = site_service();
    for query in QUERIES {
        let first = service.search(query, &SearchOptions::default());
        for _ in 0..5 {
            assert_eq!(service.search(query, &SearchOptions::default()), first);
        }
    }
}

#[test]
fn test_independent_loads_agree() {
    let a = SearchService::from(load_catalog(SITE_CATALOG).unwrap());
    let b = SearchService::from(load_catalog(SITE_CATALOG).unwrap());

    assert_eq!(a.catalog().fingerprint(), b.catalog().fingerprint());
    for query in QUERIES {
        assert_eq!(
            a.search(query, &SearchOptions::default()),
            b.search(query, &SearchOptions::default())
        );
    }
    assert_eq!(a.popular_search_terms(5), b.popular_search_terms(5));
}

#[test]
fn test_concurrent_readers_agree() {
    let service = site_service();
    let expected = service.search("epilepsy", &SearchOptions::default());
    let shared = Arc::new(service);

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let service = Arc::clone(&shared);
            std::thread::spawn(move || service.search("epilepsy", &SearchOptions::default()))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
