// Copyright (c) 2025 - Cowboy AI, Inc.

//! SpaceX REST Launch Source
//!
//! Fetches launches from the public SpaceX v2 REST API and translates them into
//! [`Launch`] records:
//!
//! ```text
//! GET {base}/launches                   → every launch, oldest first
//! GET {base}/launches?flight_number=60  → one launch
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use cim_launch_catalog::config::CatalogConfig;
//! use cim_launch_catalog::upstream::{LaunchSource, SpaceXLaunchApi};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let api = SpaceXLaunchApi::new(&CatalogConfig::default())?;
//!     let launches = api.fetch_all_launches().await?;
//!     println!("{} launches", launches.len());
//!     Ok(())
//! }
//! ```

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, error, info};

use super::{launches_from_value, LaunchSource};
use crate::config::CatalogConfig;
use crate::domain::Launch;
use crate::errors::{CatalogError, CatalogResult};

/// REST client for the SpaceX launch API
#[derive(Debug, Clone)]
pub struct SpaceXLaunchApi {
    base_url: String,
    client: Client,
}

impl SpaceXLaunchApi {
    /// Build a client from configuration
    pub fn new(config: &CatalogConfig) -> CatalogResult<Self> {
        info!("Using SpaceX launch API at {}", config.upstream_base_url);

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .default_headers({
                let mut headers = reqwest::header::HeaderMap::new();
                headers.insert(
                    "Accept",
                    "application/json".parse().map_err(|e| {
                        CatalogError::Configuration(format!("Invalid header: {}", e))
                    })?,
                );
                headers
            })
            .build()
            .map_err(|e| {
                CatalogError::Configuration(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self {
            base_url: config.upstream_base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    async fn get_launches(&self, query: &[(&str, &str)]) -> CatalogResult<Vec<Launch>> {
        let url = format!("{}/launches", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(|e| {
                error!("SpaceX API request failed: {}", e);
                CatalogError::UpstreamUnavailable(format!("SpaceX API error: {}", e))
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("SpaceX API returned {}", status);
            return Err(CatalogError::UpstreamUnavailable(format!(
                "SpaceX API returned {}: {}",
                status, body
            )));
        }

        let body: serde_json::Value = response.json().await.map_err(|e| {
            CatalogError::UpstreamUnavailable(format!("Malformed SpaceX response: {}", e))
        })?;

        let launches = launches_from_value(body)?;
        debug!(count = launches.len(), "Fetched launches from SpaceX API");
        Ok(launches)
    }
}

#[async_trait]
impl LaunchSource for SpaceXLaunchApi {
    async fn fetch_all_launches(&self) -> CatalogResult<Vec<Launch>> {
        self.get_launches(&[]).await
    }

    async fn fetch_launch_by_id(&self, id: &str) -> CatalogResult<Option<Launch>> {
        Ok(self
            .get_launches(&[("flight_number", id)])
            .await?
            .into_iter()
            .next())
    }

    fn name(&self) -> &str {
        "spacex-v2"
    }
}
