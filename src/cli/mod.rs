// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the sitesearch command-line interface.
//!
//! Every subcommand takes the catalog file as its first argument and loads it
//! fresh, so the CLI doubles as a validator for catalog edits. `batch` keeps
//! one catalog loaded and answers newline-delimited JSON requests on stdin,
//! which is how the site's server-side renderer talks to it.

pub mod display;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "sitesearch",
    about = "Relevance-ranked search over a site content catalog",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank catalog entries against a query
    Search {
        /// Path to catalog JSON file
        catalog: String,

        /// Search query
        query: String,

        /// Maximum number of results to return
        #[arg(short, long, default_value_t = sitesearch::DEFAULT_LIMIT)]
        limit: usize,

        /// Only return items in this category (repeat for several)
        #[arg(short, long = "category")]
        categories: Vec<String>,

        /// Disable the multi-term partial-credit bonus
        #[arg(long)]
        no_fuzzy: bool,

        /// Disable the extra boost for titles that equal the query
        #[arg(long)]
        no_exact_boost: bool,

        /// Show each result's score in the table
        #[arg(long)]
        scores: bool,

        /// Print `{results, totalMatches}` JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// List items related to a catalog entry
    Related {
        /// Path to catalog JSON file
        catalog: String,

        /// Url of the reference entry, exactly as it appears in the catalog
        url: String,

        /// Maximum number of related items
        #[arg(short, long, default_value_t = sitesearch::DEFAULT_RELATED_LIMIT)]
        limit: usize,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show the most frequent keywords in the catalog
    Popular {
        /// Path to catalog JSON file
        catalog: String,

        /// Number of keywords to show
        #[arg(short, long, default_value_t = sitesearch::DEFAULT_POPULAR_LIMIT)]
        limit: usize,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Validate a catalog file and summarize its contents
    Inspect {
        /// Path to catalog JSON file
        catalog: String,
    },

    /// Answer newline-delimited JSON requests from stdin
    ///
    /// Each line is one of:
    ///   {"op": "search", "query": "...", "options": {...}}
    ///   {"op": "related", "url": "...", "limit": 3}
    ///   {"op": "popular", "limit": 5}
    ///   {"op": "reload"}
    /// and gets exactly one JSON line back.
    Batch {
        /// Path to catalog JSON file
        catalog: String,
    },
}
