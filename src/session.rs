// Copyright (c) 2025 - Cowboy AI, Inc.
//! Session State
//!
//! The process-scoped registry of reactive cells. One `SessionState` is built
//! at startup and its handle is passed to every component that reads or
//! writes session state.

use std::path::PathBuf;
use tracing::info;

use crate::frp::{Behavior, ReactiveCell};

/// Reactive field name of the login flag
pub const LOGGED_IN_FIELD: &str = "loggedIn";

/// Reactive field name of the selected launch ids
pub const SELECTED_IDS_FIELD: &str = "selectedItemIds";

/// Source of the values cells are seeded with, read once at startup
pub trait SessionBootstrap {
    /// Whether a persisted credential token exists
    fn has_credential_token(&self) -> bool;

    /// Previously selected item ids
    fn selected_item_ids(&self) -> Vec<String> {
        Vec::new()
    }
}

/// Bootstrap that checks a token file on disk
#[derive(Debug, Clone, Default)]
pub struct TokenFileBootstrap {
    path: Option<PathBuf>,
}

impl TokenFileBootstrap {
    pub fn new(path: Option<PathBuf>) -> Self {
        Self { path }
    }
}

impl SessionBootstrap for TokenFileBootstrap {
    fn has_credential_token(&self) -> bool {
        self.path
            .as_ref()
            .and_then(|path| std::fs::read_to_string(path).ok())
            .map(|token| !token.trim().is_empty())
            .unwrap_or(false)
    }
}

/// Fixed seed values
#[derive(Debug, Clone, Default)]
pub struct StaticBootstrap {
    pub logged_in: bool,
    pub selected_item_ids: Vec<String>,
}

impl SessionBootstrap for StaticBootstrap {
    fn has_credential_token(&self) -> bool {
        self.logged_in
    }

    fn selected_item_ids(&self) -> Vec<String> {
        self.selected_item_ids.clone()
    }
}

/// Handles to the session's reactive cells
#[derive(Debug, Clone)]
pub struct SessionState {
    logged_in: ReactiveCell<bool>,
    selected_item_ids: ReactiveCell<Vec<String>>,
}

impl SessionState {
    /// Seed the cells from `bootstrap`
    pub fn bootstrap(bootstrap: &dyn SessionBootstrap) -> Self {
        let logged_in = bootstrap.has_credential_token();
        let selected = bootstrap.selected_item_ids();

        info!(
            logged_in,
            selected = selected.len(),
            "Session state initialized"
        );

        Self {
            logged_in: ReactiveCell::new(LOGGED_IN_FIELD, logged_in),
            selected_item_ids: ReactiveCell::new(SELECTED_IDS_FIELD, selected),
        }
    }

    pub fn logged_in(&self) -> &ReactiveCell<bool> {
        &self.logged_in
    }

    pub fn selected_item_ids(&self) -> &ReactiveCell<Vec<String>> {
        &self.selected_item_ids
    }

    pub fn is_logged_in(&self) -> bool {
        self.logged_in.get()
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected_item_ids.get().iter().any(|selected| selected == id)
    }

    /// Add `id` to the selection (no-op if already selected)
    pub fn select(&self, id: &str) {
        if self.is_selected(id) {
            return;
        }
        self.selected_item_ids.update(|ids| {
            let mut next = ids.clone();
            next.push(id.to_string());
            next
        });
    }

    /// Remove `id` from the selection
    pub fn deselect(&self, id: &str) {
        self.selected_item_ids
            .update(|ids| ids.iter().filter(|s| *s != id).cloned().collect());
    }

    /// Select `id` if absent, deselect it otherwise; returns the new membership
    pub fn toggle_selected(&self, id: &str) -> bool {
        if self.is_selected(id) {
            self.deselect(id);
            false
        } else {
            self.select(id);
            true
        }
    }

    pub fn clear_selection(&self) {
        self.selected_item_ids.set(Vec::new());
    }

    /// Whether a booking could be placed: logged in with something selected
    pub fn can_book(&self) -> Behavior<bool> {
        self.logged_in
            .behavior()
            .apply2(self.selected_item_ids.behavior(), |logged_in, ids| {
                logged_in && !ids.is_empty()
            })
    }

    /// Clear the login flag and the selection
    pub fn log_out(&self) {
        self.logged_in.set(false);
        self.clear_selection();
        info!("Session logged out");
    }
}
