// Copyright (c) 2025 - Cowboy AI, Inc.
//! Connection Merging
//!
//! A [`Connection`] is the client-side view of an unbounded, server-paginated
//! list: the items fetched so far plus the pagination frontier. Each freshly
//! fetched page is folded in with [`merge_connections`].
//!
//! # Merge Laws
//!
//! ```text
//! merge(None, p)              = p (de-duplicated)
//! merge(merge(e, p), p)       = merge(e, p)          (idempotent)
//! merge(e, p).items           ⊇ e.items              (append-only)
//! merge(e, p).{cursor,has_more} = p.{cursor,has_more} (incoming frontier wins)
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::debug;

use crate::domain::{CatalogItem, Cursor};
use crate::pagination::Page;

/// Paginated list shape: items + cursor + has_more
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Connection<T> {
    /// Items in canonical order, unique by identifier
    pub items: Vec<T>,
    /// Cursor of the last item known to the frontier
    pub cursor: Option<Cursor>,
    /// Whether unfetched items exist after `cursor`
    pub has_more: bool,
}

impl<T> Connection<T> {
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            cursor: None,
            has_more: false,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T: CatalogItem> Connection<T> {
    /// Fold `incoming` into this connection
    pub fn merge(&self, incoming: Connection<T>) -> Connection<T> {
        merge_connections(Some(self), incoming)
    }

    /// Identifiers in list order
    pub fn ids(&self) -> Vec<&str> {
        self.items.iter().map(|item| item.id()).collect()
    }
}

impl<T> Default for Connection<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> From<Page<T>> for Connection<T> {
    fn from(page: Page<T>) -> Self {
        Self {
            items: page.items,
            cursor: page.cursor,
            has_more: page.has_more,
        }
    }
}

/// Merge a freshly fetched page into the cached connection
///
/// Items are `existing` followed by `incoming`, de-duplicated by identifier
/// keeping the first occurrence. Cursor and `has_more` come from `incoming`.
pub fn merge_connections<T: CatalogItem>(
    existing: Option<&Connection<T>>,
    incoming: Connection<T>,
) -> Connection<T> {
    let existing_items = existing.map(|c| c.items.as_slice()).unwrap_or(&[]);
    let incoming_len = incoming.items.len();

    let mut seen: HashSet<String> = HashSet::with_capacity(existing_items.len() + incoming_len);
    let mut items = Vec::with_capacity(existing_items.len() + incoming_len);

    for item in existing_items.iter().cloned().chain(incoming.items) {
        if seen.insert(item.id().to_string()) {
            items.push(item);
        }
    }

    debug!(
        existing = existing_items.len(),
        incoming = incoming_len,
        merged = items.len(),
        has_more = incoming.has_more,
        "Merged connection page"
    );

    Connection {
        items,
        cursor: incoming.cursor,
        has_more: incoming.has_more,
    }
}
