// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the batch protocol.
//!
//! Every input line must produce exactly one JSON response line.

#![no_main]

use libfuzzer_sys::fuzz_target;
use sitesearch::batch::BatchSession;
use sitesearch::{parse_catalog, CatalogHandle};

fuzz_target!(|data: &[u8]| {
    static SESSION: std::sync::OnceLock<BatchSession> = std::sync::OnceLock::new();
    let session = SESSION.get_or_init(|| {
        let json = include_str!("../../data/catalog.json");
        let catalog = parse_catalog(json).expect("sample catalog is valid");
        BatchSession::new(CatalogHandle::new(catalog), None)
    });

    let expected = data
        .split(|&b| b == b'\n')
        .filter(|line| !String::from_utf8_lossy(line).trim().is_empty())
        .count();
    // non-UTF-8 input is an I/O error for `lines()`, not a response
    if std::str::from_utf8(data).is_err() {
        return;
    }

    let mut output = Vec::new();
    session.run(data, &mut output).expect("writing to a Vec never fails");

    let text = String::from_utf8(output).expect("responses are UTF-8");
    assert_eq!(text.lines().count(), expected);
    for line in text.lines() {
        serde_json::from_str::<serde_json::Value>(line).expect("response is JSON");
    }
});
