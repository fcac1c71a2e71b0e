//! Relevance-ranked site search over a small, immutable content catalog.
//!
//! The catalog is a few dozen hand-written entries (pages and in-page
//! sections of the association site). It fits in memory many times over, so
//! there is no index: every query scores every entry with a handful of
//! additive signals and sorts.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌───────────────┐     ┌───────────────────┐
//! │  utils.rs   │────▶│  scoring/     │────▶│  search/          │
//! │ (normalize, │     │ (score_entry, │     │ (SearchService,   │
//! │  terms)     │     │  rank)        │     │  related, popular)│
//! └─────────────┘     └───────────────┘     └───────────────────┘
//!                             ▲                       ▲
//!                             │                       │
//! ┌───────────────────────────────────────────────────────────────┐
//! │                          catalog/                              │
//! │     (Catalog, CatalogEntry, load_catalog, CatalogHandle)       │
//! └───────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```no_run
//! use sitesearch::{load_catalog, SearchOptions, SearchService};
//!
//! let catalog = load_catalog("data/catalog.json")?;
//! let service = SearchService::from(catalog);
//!
//! let result = service.search("first aid", &SearchOptions::default().with_limit(5));
//! for item in &result.results {
//!     println!("{} -> {}", item.title, item.url);
//! }
//! # Ok::<(), sitesearch::CatalogError>(())
//! ```

// Module declarations
pub mod batch;
pub mod catalog;
pub mod scoring;
pub mod search;
pub mod testing;
mod types;
mod utils;

// Re-exports for public API
pub use catalog::{
    load_catalog, parse_catalog, Catalog, CatalogEntry, CatalogError, CatalogHandle,
    CatalogManifest, ReloadOutcome, CATALOG_VERSION,
};
pub use scoring::{score_entry, DEFAULT_LIMIT, DEFAULT_POPULAR_LIMIT, DEFAULT_RELATED_LIMIT};
pub use search::SearchService;
pub use types::{CategoryFilter, Match, SearchItem, SearchOptions, SearchResult};
pub use utils::{normalize, NormalizedQuery};
