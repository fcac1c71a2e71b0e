//! Related content tests.

use super::common::{make_catalog, make_item, make_item_in, site_service, urls};
use sitesearch::{SearchService, DEFAULT_RELATED_LIMIT};

#[test]
fn test_same_category_before_shared_keywords() {
    let service = site_service();
    let reference = service.catalog().get("/training/first-aid").unwrap().clone();
    let related = service.related_content(&reference, DEFAULT_RELATED_LIMIT);

    // two training siblings, then the strongest keyword overlap ("epilepsy" + "seizure")
    assert_eq!(
        urls(&related),
        vec!["/training/schools", "/training/midazolam", "/epilepsy"]
    );
}

#[test]
fn test_reference_never_included() {
    let service = site_service();
    for reference in service.catalog().items() {
        let related = service.related_content(reference, 50);
        assert!(
            related.iter().all(|item| item.url != reference.url),
            "{} listed as related to itself",
            reference.url
        );
    }
}

#[test]
fn test_no_duplicates_across_phases() {
    let service = SearchService::from(make_catalog(vec![
        make_item_in("Events", "/events", &["agm", "fun run"], "events"),
        make_item_in("AGM", "/events#agm", &["agm"], "events"),
        make_item_in("Fun Run", "/fun-run", &["fun run"], "fundraising"),
    ]));
    let reference = service.catalog().get("/events").unwrap().clone();
    let related = service.related_content(&reference, 10);

    assert_eq!(urls(&related), vec!["/events#agm", "/fun-run"]);
}

#[test]
fn test_keyword_ties_keep_catalog_order() {
    let service = SearchService::from(make_catalog(vec![
        make_item("Donate", "/donate", &["fundraising", "gift aid"]),
        make_item("Bake Sale", "/bake-sale", &["fundraising"]),
        make_item("Gift Aid", "/gift-aid", &["gift aid", "fundraising"]),
        make_item("Fun Run", "/fun-run", &["fundraising"]),
    ]));
    let reference = service.catalog().get("/donate").unwrap().clone();
    let related = service.related_content(&reference, 3);

    assert_eq!(urls(&related), vec!["/gift-aid", "/bake-sale", "/fun-run"]);
}

#[test]
fn test_reference_outside_catalog_has_no_relations() {
    let service = site_service();
    let stranger = make_item("Shop", "/shop", &["epilepsy"]);
    assert!(service.related_content(&stranger, 3).is_empty());
}

#[test]
fn test_unknown_url_has_no_relations() {
    let service = site_service();
    assert!(service.related_to_url("/no-such-page", DEFAULT_RELATED_LIMIT).is_empty());
    assert_eq!(
        service.related_to_url("/training/first-aid", DEFAULT_RELATED_LIMIT),
        service.related_content(
            service.catalog().get("/training/first-aid").unwrap(),
            DEFAULT_RELATED_LIMIT
        )
    );
}

#[test]
fn test_limit_respected() {
    let service = site_service();
    let reference = service.catalog().get("/epilepsy").unwrap().clone();

    assert_eq!(service.related_content(&reference, 0).len(), 0);
    assert_eq!(service.related_content(&reference, 1).len(), 1);
    assert_eq!(service.related_content(&reference, 2).len(), 2);
}

#[test]
fn test_short_list_when_few_relations_exist() {
    let service = site_service();
    let reference = service.catalog().get("/donate").unwrap().clone();
    let related = service.related_content(&reference, DEFAULT_RELATED_LIMIT);

    // same category: "/volunteer"; shared keyword "fundraising": "/events"
    assert_eq!(urls(&related), vec!["/volunteer", "/events"]);
}
