// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests Module
//!
//! - `pagination` - slicing never loses or repeats items, cursors advance
//! - `merge` - connection merging is idempotent and append-only

mod merge;
mod pagination;
