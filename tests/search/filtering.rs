//! Category filter tests.

use super::common::{site_service, urls};
use sitesearch::{CategoryFilter, SearchOptions};

#[test]
fn test_single_category_filter() {
    let options = SearchOptions::default().with_category("training");
    let result = site_service().search("training", &options);

    assert_eq!(
        urls(&result.results),
        vec!["/training/first-aid", "/training/schools", "/training/midazolam"]
    );
    assert_eq!(result.total_matches, 3);
}

#[test]
fn test_category_list_filter() {
    let options = SearchOptions::default()
        .with_category(vec!["events".to_string(), "fundraising".to_string()]);
    let result = site_service().search("events", &options);

    assert_eq!(urls(&result.results), vec!["/events", "/volunteer", "/events#agm"]);
    assert_eq!(result.total_matches, 3);
}

#[test]
fn test_filter_counts_only_surviving_matches() {
    let unfiltered = site_service().search("events", &SearchOptions::default());
    let filtered = site_service().search(
        "events",
        &SearchOptions::default().with_category(CategoryFilter::One("events".into())),
    );

    // the unfiltered list also carries fragment-only matches from other categories
    assert_eq!(unfiltered.total_matches, 5);
    assert_eq!(filtered.total_matches, 2);
    assert_eq!(urls(&filtered.results), vec!["/events", "/events#agm"]);
}

#[test]
fn test_uncategorized_items_never_pass_a_filter() {
    let options = SearchOptions::default().with_category("fundraising");
    let result = site_service().search("helpline", &options);

    // "/contact" has the keyword too, but no category
    assert_eq!(urls(&result.results), vec!["/volunteer"]);
}

#[test]
fn test_unknown_category_returns_nothing() {
    let options = SearchOptions::default().with_category("recipes");
    let result = site_service().search("epilepsy", &options);
    assert!(result.is_empty());
    assert_eq!(result.total_matches, 0);
}

#[test]
fn test_filter_from_json_options() {
    let options: SearchOptions =
        serde_json::from_str(r#"{"category": ["training"], "limit": 1}"#).unwrap();
    let result = site_service().search("training", &options);

    assert_eq!(urls(&result.results), vec!["/training/first-aid"]);
    assert_eq!(result.total_matches, 3);
}
