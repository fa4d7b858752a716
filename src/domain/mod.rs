// Copyright (c) 2025 - Cowboy AI, Inc.
//! Catalog Domain Models
//!
//! - [`Cursor`] - opaque, totally ordered position key
//! - [`CatalogItem`] - identity + cursor contract shared by every paged item
//! - [`Launch`] - the launch record served by the catalog

pub mod cursor;
pub mod launch;

pub use cursor::Cursor;
pub use launch::{CatalogItem, Launch, Mission, PatchSize, Rocket};
