// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Line-oriented JSON protocol over one live catalog.
//!
//! One request per input line, one response per output line, in order. A bad
//! line gets an `{"error": ...}` response and the session keeps going; only
//! I/O failures on the streams themselves end it.
//!
//! ```text
//! → {"op":"search","query":"first aid","options":{"limit":3}}
//! ← {"results":[...],"totalMatches":4}
//! → {"op":"related","url":"/training/first-aid"}
//! ← {"results":[...]}
//! → {"op":"popular","limit":2}
//! ← {"keywords":["epilepsy","training"]}
//! → {"op":"reload"}
//! ← {"reloaded":false,"items":42}
//! ```

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::{CatalogHandle, ReloadOutcome};
use crate::scoring::{DEFAULT_POPULAR_LIMIT, DEFAULT_RELATED_LIMIT};
use crate::types::{SearchItem, SearchOptions, SearchResult};

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum Request {
    Search {
        query: String,
        #[serde(default)]
        options: SearchOptions,
    },
    Related {
        url: String,
        #[serde(default = "default_related_limit")]
        limit: usize,
    },
    Popular {
        #[serde(default = "default_popular_limit")]
        limit: usize,
    },
    Reload,
}

fn default_related_limit() -> usize {
    DEFAULT_RELATED_LIMIT
}

fn default_popular_limit() -> usize {
    DEFAULT_POPULAR_LIMIT
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Response {
    Search(SearchResult),
    Related { results: Vec<SearchItem> },
    Popular { keywords: Vec<String> },
    Reload { reloaded: bool, items: usize },
    Error { error: String },
}

/// A catalog handle plus the file it reloads from.
pub struct BatchSession {
    handle: CatalogHandle,
    source: Option<PathBuf>,
}

impl BatchSession {
    /// `source` is the file `reload` reads. Without one, `reload` is an error.
    pub fn new(handle: CatalogHandle, source: Option<PathBuf>) -> Self {
        Self { handle, source }
    }

    pub fn handle(&self) -> &CatalogHandle {
        &self.handle
    }

    /// Answer one request line.
    pub fn respond(&self, line: &str) -> Response {
        let request: Request = match serde_json::from_str(line) {
            Ok(request) => request,
            Err(err) => {
                return Response::Error {
                    error: format!("bad request: {}", err),
                }
            }
        };
        debug!(?request, "batch request");

        match request {
            Request::Search { query, options } => {
                Response::Search(self.handle.service().search(&query, &options))
            }
            Request::Related { url, limit } => Response::Related {
                results: self.handle.service().related_to_url(&url, limit),
            },
            Request::Popular { limit } => Response::Popular {
                keywords: self.handle.service().popular_search_terms(limit),
            },
            Request::Reload => self.reload(),
        }
    }

    fn reload(&self) -> Response {
        let Some(source) = &self.source else {
            return Response::Error {
                error: "no catalog file to reload from".to_string(),
            };
        };
        match self.handle.reload_from_path(source) {
            Ok(ReloadOutcome::Unchanged) => Response::Reload {
                reloaded: false,
                items: self.handle.snapshot().len(),
            },
            Ok(ReloadOutcome::Replaced { items, .. }) => Response::Reload {
                reloaded: true,
                items,
            },
            Err(err) => Response::Error {
                error: format!("reload failed: {}", err),
            },
        }
    }

    /// Serve until `input` is exhausted. Blank lines are skipped.
    pub fn run<R: BufRead, W: Write>(&self, input: R, mut output: W) -> io::Result<()> {
        for line in input.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let response = self.respond(&line);
            serde_json::to_writer(&mut output, &response)?;
            output.write_all(b"\n")?;
            output.flush()?;
        }
        Ok(())
    }
}
