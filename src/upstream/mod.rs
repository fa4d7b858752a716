// Copyright (c) 2025 - Cowboy AI, Inc.
//! Upstream Launch Sources
//!
//! The catalog never talks to the network directly. It consumes a
//! [`LaunchSource`], which returns the complete current list of launches in
//! upstream order (oldest first) with shape translation already applied.
//!
//! # Implementations
//!
//! - [`StaticLaunchSource`] - in-memory list, used offline and in tests
//! - `SpaceXLaunchApi` (feature `spacex`) - REST client for the SpaceX v2 API

pub mod memory;
#[cfg(feature = "spacex")]
pub mod spacex;

use async_trait::async_trait;
use futures::future::join_all;
use serde::{Deserialize, Serialize};

use crate::domain::{Launch, Mission, Rocket};
use crate::errors::CatalogResult;

pub use memory::StaticLaunchSource;
#[cfg(feature = "spacex")]
pub use spacex::SpaceXLaunchApi;

/// Collaborator that produces launches
///
/// Errors are reported as [`CatalogError::UpstreamUnavailable`](crate::errors::CatalogError::UpstreamUnavailable).
#[async_trait]
pub trait LaunchSource: Send + Sync {
    /// Every launch, oldest first
    async fn fetch_all_launches(&self) -> CatalogResult<Vec<Launch>>;

    /// A single launch by flight number
    async fn fetch_launch_by_id(&self, id: &str) -> CatalogResult<Option<Launch>>;

    /// Several launches, in request order; unknown ids are skipped
    async fn fetch_launches_by_ids(&self, ids: &[String]) -> CatalogResult<Vec<Launch>> {
        let lookups = join_all(ids.iter().map(|id| self.fetch_launch_by_id(id))).await;

        let mut launches = Vec::with_capacity(ids.len());
        for lookup in lookups {
            if let Some(launch) = lookup? {
                launches.push(launch);
            }
        }
        Ok(launches)
    }

    /// Name used in logs
    fn name(&self) -> &str;
}

/// Launch record as served by the SpaceX v2 REST API
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawLaunch {
    pub flight_number: Option<u64>,
    pub launch_date_unix: Option<i64>,
    pub mission_name: Option<String>,
    pub launch_site: Option<RawLaunchSite>,
    pub links: Option<RawLinks>,
    pub rocket: Option<RawRocket>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawLaunchSite {
    pub site_name: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawLinks {
    pub mission_patch_small: Option<String>,
    pub mission_patch: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawRocket {
    pub rocket_id: Option<String>,
    pub rocket_name: Option<String>,
    pub rocket_type: Option<String>,
}

impl From<RawLaunch> for Launch {
    fn from(raw: RawLaunch) -> Self {
        let links = raw.links.unwrap_or_default();
        let rocket = raw.rocket.unwrap_or_default();

        let mut launch = Launch::new(
            raw.flight_number.unwrap_or(0),
            raw.launch_date_unix.unwrap_or(0),
        )
        .with_mission(Mission {
            name: raw.mission_name,
            mission_patch_small: links.mission_patch_small,
            mission_patch_large: links.mission_patch,
        })
        .with_rocket(Rocket {
            id: rocket.rocket_id.unwrap_or_default(),
            name: rocket.rocket_name,
            rocket_type: rocket.rocket_type,
        });

        launch.site = raw.launch_site.and_then(|site| site.site_name);
        launch
    }
}

/// Translate an upstream response body; anything but an array is empty
pub fn launches_from_value(body: serde_json::Value) -> CatalogResult<Vec<Launch>> {
    match body {
        serde_json::Value::Array(records) => records
            .into_iter()
            .map(|record| -> CatalogResult<Launch> {
                Ok(Launch::from(serde_json::from_value::<RawLaunch>(record)?))
            })
            .collect(),
        _ => Ok(Vec::new()),
    }
}
