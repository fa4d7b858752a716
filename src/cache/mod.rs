// Copyright (c) 2025 - Cowboy AI, Inc.
//! Incremental Connection Cache
//!
//! Client-side view of server-paginated lists. Pages are merged on write into
//! a single entry per logical query:
//!
//! ```text
//! launches(pageSize:20)          ─┐
//! launches(pageSize:20,after:81) ─┼──> CacheKey("launches") ──> Connection
//! launches(pageSize:5,after:76)  ─┘
//! ```

pub mod connection;
pub mod key;
pub mod store;

pub use connection::{merge_connections, Connection};
pub use key::{is_pagination_arg, CacheKey, QueryArgs, PAGINATION_ARGS};
pub use store::ConnectionCache;
