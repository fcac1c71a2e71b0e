use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use sitesearch::batch::BatchSession;
use sitesearch::{load_catalog, Catalog, CatalogHandle, SearchOptions, SearchService};

mod cli;
use cli::{display, Cli, Commands};

/// Env var holding the log filter, e.g. `SITESEARCH_LOG=sitesearch=debug`.
const LOG_ENV: &str = "SITESEARCH_LOG";

fn main() {
    init_tracing();

    let cli = Cli::parse();
    if let Err(e) = run(cli.command) {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

/// Logs go to stderr so stdout stays clean for `--json` and `batch`.
fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn open_catalog(path: &str) -> Result<Catalog> {
    load_catalog(path).with_context(|| format!("cannot use catalog {}", path))
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Search {
            catalog,
            query,
            limit,
            categories,
            no_fuzzy,
            no_exact_boost,
            scores,
            json,
        } => {
            let service = SearchService::from(open_catalog(&catalog)?);
            let mut options = SearchOptions::default()
                .with_limit(limit)
                .with_fuzzy_match(!no_fuzzy)
                .with_exact_boost(!no_exact_boost);
            if !categories.is_empty() {
                options = options.with_category(categories);
            }

            if json {
                let result = service.search(&query, &options);
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                let total = service.search(&query, &options).total_matches;
                let matches = service.matches(&query, &options);
                display::print_matches(&query, &matches, total, scores);
            }
        }

        Commands::Related {
            catalog,
            url,
            limit,
            json,
        } => {
            let service = SearchService::from(open_catalog(&catalog)?);
            if service.catalog().get(&url).is_none() {
                warn!(url = %url, "url is not in the catalog; nothing is related to it");
            }
            let related = service.related_to_url(&url, limit);

            if json {
                println!("{}", serde_json::to_string_pretty(&related)?);
            } else {
                display::print_items(&format!("RELATED TO {}", url), &related);
            }
        }

        Commands::Popular {
            catalog,
            limit,
            json,
        } => {
            let service = SearchService::from(open_catalog(&catalog)?);
            let keywords = service.popular_search_terms(limit);

            if json {
                println!("{}", serde_json::to_string_pretty(&keywords)?);
            } else {
                display::print_keywords(&keywords);
            }
        }

        Commands::Inspect { catalog } => {
            let loaded = open_catalog(&catalog)?;
            display::print_catalog_summary(&catalog, &loaded);
        }

        Commands::Batch { catalog } => {
            let handle = CatalogHandle::new(open_catalog(&catalog)?);
            let session = BatchSession::new(handle, Some(PathBuf::from(&catalog)));
            let stdin = io::stdin();
            let stdout = io::stdout();
            session
                .run(stdin.lock(), stdout.lock())
                .context("batch session I/O failed")?;
        }
    }

    Ok(())
}
