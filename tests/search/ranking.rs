//! Ranking tests: how the additive signals order results.

use super::common::{make_catalog, make_item, make_item_described, membership_pair, site_service};
use sitesearch::scoring::{FRAGMENT_URL_BOOST, MAX_FUZZY_BONUS};
use sitesearch::{SearchOptions, SearchService};

// ============================================================================
// TITLE AND FRAGMENT SIGNALS
// ============================================================================

#[test]
fn test_fragment_url_outranks_plain_url_on_equal_title_credit() {
    let service = membership_pair();
    let options = SearchOptions::default().with_exact_boost(false);
    let matches = service.matches("membership", &options);

    assert_eq!(matches.len(), 2);
    assert_eq!(matches[0].item.url, "/membership#faq");
    assert_eq!(matches[1].item.url, "/membership");
    assert_eq!(matches[0].score, matches[1].score + FRAGMENT_URL_BOOST);
}

#[test]
fn test_exact_title_boost_wins_by_default() {
    let service = membership_pair();
    let matches = service.matches("membership", &SearchOptions::default());

    assert_eq!(matches[0].item.url, "/membership");
    assert_eq!(matches[0].score, 25.0);
    assert_eq!(matches[1].score, 12.0);
}

#[test]
fn test_exact_boost_ignores_case_and_padding() {
    let service = membership_pair();
    let matches = service.matches("  MemberShip ", &SearchOptions::default());
    assert_eq!(matches[0].score, 25.0);
}

// ============================================================================
// DESCRIPTION AND KEYWORD SIGNALS
// ============================================================================

#[test]
fn test_description_only_match() {
    let service = SearchService::from(make_catalog(vec![make_item_described(
        "Contact Us",
        "Phone, email and helpline opening hours",
        "/contact",
        &[],
    )]));
    let matches = service.matches("opening hours", &SearchOptions::default());

    // description 5, plus both terms found for the full fuzzy bonus
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].score, 5.0 + MAX_FUZZY_BONUS);
}

#[test]
fn test_every_matching_keyword_counts() {
    let service = SearchService::from(make_catalog(vec![
        make_item("Courses", "/courses", &["first aid", "first aid refresher", "aid"]),
        make_item("Refresher", "/refresher", &["first aid refresher"]),
    ]));
    let matches = service.matches("first aid", &SearchOptions::default().with_fuzzy_match(false));

    // exact 8 + substring 6 ("aid" alone does not contain the query)
    assert_eq!(matches[0].item.url, "/courses");
    assert_eq!(matches[0].score, 14.0);
    assert_eq!(matches[1].score, 6.0);
}

#[test]
fn test_sample_catalog_seizure_ranking() {
    let service = site_service();
    let matches = service.matches("seizure", &SearchOptions::default());

    let ranked: Vec<(&str, f64)> = matches
        .iter()
        .map(|m| (m.item.url.as_str(), m.score))
        .collect();
    assert_eq!(
        ranked,
        vec![
            ("/epilepsy#seizure-types", 25.0),
            ("/training/first-aid", 23.0),
            ("/epilepsy", 13.0),
            // fragment boost alone, catalog order
            ("/about#annual-report", 2.0),
            ("/membership#faq", 2.0),
            ("/events#agm", 2.0),
        ]
    );
}

// ============================================================================
// MULTI-TERM PARTIAL CREDIT
// ============================================================================

#[test]
fn test_partial_term_credit_is_proportional() {
    let service = SearchService::from(make_catalog(vec![
        make_item("Seizure Diary", "/diary", &[]),
        make_item("Seizure Diary App", "/app", &["download"]),
    ]));
    let matches = service.matches("seizure diary download", &SearchOptions::default());

    // neither title contains the whole phrase; /app finds 3 of 3 terms, /diary 2 of 3
    assert_eq!(matches[0].item.url, "/app");
    assert!((matches[0].score - MAX_FUZZY_BONUS).abs() < 1e-9);
    assert!((matches[1].score - MAX_FUZZY_BONUS * 2.0 / 3.0).abs() < 1e-9);
}

#[test]
fn test_fuzzy_disabled_drops_partial_matches() {
    let service = SearchService::from(make_catalog(vec![make_item(
        "Seizure Diary",
        "/diary",
        &[],
    )]));
    let options = SearchOptions::default().with_fuzzy_match(false);
    let result = service.search("seizure download", &options);

    assert_eq!(result.total_matches, 0);
}

#[test]
fn test_short_terms_never_earn_credit() {
    let service = SearchService::from(make_catalog(vec![make_item("Go", "/go", &[])]));
    // "go" is too short to count, and the phrase is not in the title
    let result = service.search("go on", &SearchOptions::default());
    assert_eq!(result.total_matches, 0);
}

#[test]
fn test_single_term_gets_no_fuzzy_bonus() {
    let service = membership_pair();
    let matches = service.matches("questions", &SearchOptions::default());

    // keyword exact 8 + fragment 2, nothing from the fuzzy path
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].score, 10.0);
}
