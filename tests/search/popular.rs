//! Popular keyword tests.

use super::common::{make_catalog, make_item, site_service, tagged_catalog};
use sitesearch::{SearchService, DEFAULT_POPULAR_LIMIT};

#[test]
fn test_counts_every_occurrence() {
    let popular = tagged_catalog().popular_search_terms(DEFAULT_POPULAR_LIMIT);
    assert_eq!(popular, vec!["epilepsy", "training"]);
}

#[test]
fn test_ties_break_by_first_appearance() {
    let service = SearchService::from(make_catalog(vec![
        make_item("A", "/a", &["volunteer", "donate"]),
        make_item("B", "/b", &["events", "donate"]),
        make_item("C", "/c", &["events", "volunteer"]),
    ]));
    // all three appear twice; catalog order decides
    assert_eq!(
        service.popular_search_terms(3),
        vec!["volunteer", "donate", "events"]
    );
}

#[test]
fn test_sample_catalog_top_five() {
    assert_eq!(
        site_service().popular_search_terms(DEFAULT_POPULAR_LIMIT),
        vec!["epilepsy", "seizure", "training", "support", "association"]
    );
}

#[test]
fn test_limit_larger_than_vocabulary() {
    let popular = tagged_catalog().popular_search_terms(100);
    assert_eq!(popular.len(), 2);
}

#[test]
fn test_keywords_counted_as_authored() {
    let service = SearchService::from(make_catalog(vec![
        make_item("A", "/a", &["First Aid"]),
        make_item("B", "/b", &["first aid"]),
        make_item("C", "/c", &["first aid"]),
    ]));
    assert_eq!(service.popular_search_terms(2), vec!["first aid", "First Aid"]);
}

#[test]
fn test_empty_catalog_has_no_keywords() {
    let service = SearchService::from(make_catalog(Vec::new()));
    assert!(service.popular_search_terms(5).is_empty());
}
