//! # Catalog Check
//!
//! Validates a JSON catalog of product drafts against the Product rules.
//!
//! ## Usage
//! ```bash
//! # Check a catalog file
//! cargo run -p helpstock-catalog -- ./data/products.json
//!
//! # Same, configured from the environment, stopping at the first rejection
//! HELPSTOCK_CATALOG=./data/products.json HELPSTOCK_FAIL_FAST=true \
//!     cargo run -p helpstock-catalog
//! ```
//!
//! ## Catalog Format
//! ```json
//! [
//!   { "id": 1, "name": "kit 4 Cadeiras", "description": "Feita de madeira.",
//!     "price_cents": 30050, "stock": 2, "image": "https://..." }
//! ]
//! ```
//!
//! ## Exit Codes
//! - `0` every product was accepted
//! - `1` at least one product was rejected
//! - `2` the catalog could not be read or the configuration is invalid

mod config;
mod error;

use std::fmt;
use std::fs;
use std::process::ExitCode;

use helpstock_domain::{Product, ProductDraft};
use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;

use crate::config::CatalogConfig;
use crate::error::CatalogError;

/// Outcome of checking a catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct CatalogSummary {
    checked: usize,
    accepted: usize,
    rejected: usize,
}

impl fmt::Display for CatalogSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "checked {} products: {} accepted, {} rejected",
            self.checked, self.accepted, self.rejected
        )
    }
}

fn main() -> ExitCode {
    let config = match CatalogConfig::load(std::env::args().nth(1)) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("catalog_check: {}", CatalogError::from(err));
            return ExitCode::from(2);
        }
    };

    init_tracing(&config.log_filter);
    info!(
        path = %config.catalog_path.display(),
        fail_fast = config.fail_fast,
        "Configuration loaded"
    );

    match run(&config) {
        Ok(summary) => {
            println!("{summary}");
            if summary.rejected == 0 {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(1)
            }
        }
        Err(err) => {
            error!(error = %err, "Catalog check failed");
            ExitCode::from(2)
        }
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// `filter` has already been checked by [`CatalogConfig::from_lookup`].
///
/// ## Log Levels
/// - `HELPSTOCK_LOG=debug` - Show every accepted product's details
/// - `HELPSTOCK_LOG=warn` - Only rejections
/// - Default: INFO level
fn init_tracing(filter: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .init();
}

fn run(config: &CatalogConfig) -> Result<CatalogSummary, CatalogError> {
    let path = &config.catalog_path;
    let raw = fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.clone(),
        source,
    })?;
    let drafts: Vec<ProductDraft> =
        serde_json::from_str(&raw).map_err(|source| CatalogError::Json {
            path: path.clone(),
            source,
        })?;

    debug!(count = drafts.len(), "Catalog parsed");
    Ok(check_catalog(drafts, config.fail_fast))
}

/// Runs every draft through the Product constructor, in file order.
fn check_catalog(drafts: Vec<ProductDraft>, fail_fast: bool) -> CatalogSummary {
    let mut summary = CatalogSummary::default();

    for (index, draft) in drafts.into_iter().enumerate() {
        let id = draft.id;
        summary.checked += 1;

        match Product::try_from(draft) {
            Ok(product) => {
                summary.accepted += 1;
                info!(id = product.id(), name = %product.name(), "Product accepted");
                debug!(
                    id = product.id(),
                    price = %product.price(),
                    stock = product.stock(),
                    "Product details"
                );
            }
            Err(err) => {
                summary.rejected += 1;
                warn!(id, index, error = %err, "Product rejected");
                if fail_fast {
                    break;
                }
            }
        }
    }

    summary
}
