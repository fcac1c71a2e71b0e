//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::catalog::Catalog;
use crate::types::SearchItem;

/// Create a test item with an empty description and no category.
///
/// This is the canonical implementation used across all tests.
pub fn make_item(title: &str, url: &str, keywords: &[&str]) -> SearchItem {
    SearchItem {
        title: title.to_string(),
        description: String::new(),
        url: url.to_string(),
        keywords: keywords.iter().map(|k| k.to_string()).collect(),
        category: None,
    }
}

/// Create a test item in a category.
pub fn make_item_in(title: &str, url: &str, keywords: &[&str], category: &str) -> SearchItem {
    SearchItem {
        category: Some(category.to_string()),
        ..make_item(title, url, keywords)
    }
}

/// Create a test item with a description.
pub fn make_item_described(
    title: &str,
    description: &str,
    url: &str,
    keywords: &[&str],
) -> SearchItem {
    SearchItem {
        description: description.to_string(),
        ..make_item(title, url, keywords)
    }
}

/// Build a catalog, panicking on invalid fixtures.
pub fn make_catalog(items: Vec<SearchItem>) -> Catalog {
    Catalog::new(items).expect("test fixture catalog must be valid")
}
