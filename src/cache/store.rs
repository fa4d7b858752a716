// Copyright (c) 2025 - Cowboy AI, Inc.
//! Connection Cache
//!
//! Keyed store of merged connections. Writes are a read-modify-write of a
//! single entry performed under the write lock, so concurrent pages for the
//! same key union their items and the last writer's frontier wins.

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;

use super::connection::{merge_connections, Connection};
use super::key::CacheKey;
use crate::domain::CatalogItem;

/// Shared, keyed cache of paginated connections
pub struct ConnectionCache<T> {
    entries: Arc<RwLock<HashMap<CacheKey, Connection<T>>>>,
}

impl<T> Clone for ConnectionCache<T> {
    fn clone(&self) -> Self {
        Self {
            entries: Arc::clone(&self.entries),
        }
    }
}

impl<T: CatalogItem> ConnectionCache<T> {
    /// Create an empty cache
    pub fn new() -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Merge `incoming` into the entry for `key` and return the stored result
    pub async fn merge_page(&self, key: &CacheKey, incoming: Connection<T>) -> Connection<T> {
        let mut entries = self.entries.write().await;
        let merged = merge_connections(entries.get(key), incoming);

        info!(
            query = %key,
            items = merged.len(),
            has_more = merged.has_more,
            "Connection cache entry updated"
        );

        entries.insert(key.clone(), merged.clone());
        merged
    }

    /// Snapshot of the entry for `key`
    pub async fn get(&self, key: &CacheKey) -> Option<Connection<T>> {
        self.entries.read().await.get(key).cloned()
    }

    /// Drop the entry for `key`, returning whether it existed
    pub async fn evict(&self, key: &CacheKey) -> bool {
        let removed = self.entries.write().await.remove(key).is_some();
        if removed {
            info!(query = %key, "Connection cache entry evicted");
        }
        removed
    }

    /// Drop every entry
    pub async fn clear(&self) {
        self.entries.write().await.clear();
        info!("Connection cache cleared");
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

impl<T: CatalogItem> Default for ConnectionCache<T> {
    fn default() -> Self {
        Self::new()
    }
}
