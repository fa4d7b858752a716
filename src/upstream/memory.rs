// Copyright (c) 2025 - Cowboy AI, Inc.
//! In-memory launch source

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

use super::LaunchSource;
use crate::domain::{CatalogItem, Launch};
use crate::errors::{CatalogError, CatalogResult};

/// Launch source backed by a list held in memory
///
/// The list can be replaced at runtime to model upstream mutation between
/// pages, and the source can be switched offline to model outages.
#[derive(Clone, Default)]
pub struct StaticLaunchSource {
    launches: Arc<RwLock<Vec<Launch>>>,
    offline: Arc<AtomicBool>,
    fetches: Arc<AtomicUsize>,
}

impl StaticLaunchSource {
    /// Create a source serving `launches` (oldest first)
    pub fn new(launches: Vec<Launch>) -> Self {
        Self {
            launches: Arc::new(RwLock::new(launches)),
            offline: Arc::new(AtomicBool::new(false)),
            fetches: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Swap the served list
    pub async fn replace(&self, launches: Vec<Launch>) {
        *self.launches.write().await = launches;
    }

    /// While offline every fetch fails with `UpstreamUnavailable`
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    /// Number of full-list fetches served so far
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }

    fn ensure_online(&self) -> CatalogResult<()> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(CatalogError::UpstreamUnavailable(
                "static launch source is offline".to_string(),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl LaunchSource for StaticLaunchSource {
    async fn fetch_all_launches(&self) -> CatalogResult<Vec<Launch>> {
        self.ensure_online()?;
        self.fetches.fetch_add(1, Ordering::SeqCst);

        let launches = self.launches.read().await.clone();
        debug!(count = launches.len(), "Served launches from memory");
        Ok(launches)
    }

    async fn fetch_launch_by_id(&self, id: &str) -> CatalogResult<Option<Launch>> {
        self.ensure_online()?;
        Ok(self
            .launches
            .read()
            .await
            .iter()
            .find(|launch| launch.id() == id)
            .cloned())
    }

    fn name(&self) -> &str {
        "static"
    }
}
