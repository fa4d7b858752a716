// Copyright (c) 2025 - Cowboy AI, Inc.
//! Launch Catalog Browser
//!
//! Pages through the SpaceX launch catalog the way a scrolling client would,
//! merging every page into the connection cache, then prints the merged
//! connection and the session fields as JSON.
//!
//! Run with: cargo run --bin catalog-browser --features spacex
//!
//! Environment:
//! - `CATALOG_UPSTREAM_URL` (default: https://api.spacexdata.com/v2/)
//! - `CATALOG_PAGE_SIZE` (default: 20)
//! - `CATALOG_TOKEN_PATH` (optional persisted credential token)
//! - `CATALOG_MAX_PAGES` (default: 5)

use anyhow::{Context, Result};
use cim_launch_catalog::{
    query::{FieldRequest, QueryResultAssembler},
    session::{SessionState, TokenFileBootstrap},
    upstream::SpaceXLaunchApi,
    CatalogConfig, Cursor,
};
use std::sync::Arc;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let config = CatalogConfig::from_env().context("Failed to load catalog configuration")?;
    let max_pages: usize = std::env::var("CATALOG_MAX_PAGES")
        .ok()
        .map(|raw| raw.parse::<usize>())
        .transpose()
        .context("CATALOG_MAX_PAGES must be a positive integer")?
        .unwrap_or(5);

    info!("Configuration loaded:");
    info!("  - Upstream: {}", config.upstream_base_url);
    info!("  - Page size: {}", config.default_page_size);
    info!("  - Max pages: {}", max_pages);

    let source = SpaceXLaunchApi::new(&config).context("Failed to create upstream client")?;
    let session =
        SessionState::bootstrap(&TokenFileBootstrap::new(config.credential_token_path.clone()));
    let assembler = QueryResultAssembler::new(Arc::new(source), session)
        .with_config(&config)
        .context("Invalid catalog configuration")?;

    let mut after: Option<Cursor> = None;
    for page_number in 1..=max_pages {
        let fetch = assembler
            .launches_page(config.default_page_size as i64, after.clone())
            .await
            .with_context(|| format!("Failed to fetch page {}", page_number))?;

        info!(
            page = page_number,
            fetched = fetch.page.len(),
            cached = fetch.merged.len(),
            has_more = fetch.page.has_more,
            "Page merged"
        );

        if !fetch.page.has_more {
            break;
        }
        match fetch.page.cursor {
            Some(cursor) => after = Some(cursor),
            None => {
                warn!("Page reported more results without a cursor");
                break;
            }
        }
    }

    let response = assembler
        .execute(&[
            FieldRequest::new("loggedIn"),
            FieldRequest::new("selectedItemIds"),
        ])
        .await;

    let merged = assembler
        .cached_list("launches", &Default::default())
        .await
        .unwrap_or_default();

    let output = serde_json::json!({
        "launches": merged,
        "session": response.data,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}
