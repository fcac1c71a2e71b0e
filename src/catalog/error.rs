// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Load-time failures. Queries never fail; a bad catalog stops startup instead.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog file could not be read.
    #[error("failed to read catalog {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Syntax error, wrong shape, or a missing required field such as `keywords`.
    #[error("invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported catalog version {found} (expected {expected})")]
    UnsupportedVersion { found: u32, expected: u32 },

    /// `title` or `url` is empty or whitespace.
    #[error("item {index}: `{field}` must not be empty")]
    EmptyField { index: usize, field: &'static str },

    #[error("item {index} ({url}): keyword {position} is blank")]
    BlankKeyword {
        index: usize,
        url: String,
        position: usize,
    },

    /// Urls are the natural key; two entries pointing at the same place is an
    /// editing mistake.
    #[error("duplicate url {url:?} at items {first} and {second}")]
    DuplicateUrl {
        url: String,
        first: usize,
        second: usize,
    },
}
