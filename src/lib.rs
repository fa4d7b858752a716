//! Launch catalog with cursor pagination and an incremental connection cache
//!
//! This crate serves a reverse-chronological, cursor-paginated list of launches
//! backed by an upstream REST source, merges successive pages into a single
//! cached connection per logical query, and keeps session-local state (login
//! flag, selected launches) in reactive cells that bypass the cache.
//!
//! - [`pagination`] - pure page slicing
//! - [`cache`] - connection merging and keyed storage
//! - [`frp`] - reactive cells and derived behaviors
//! - [`query`] - per-field resolution policies

pub mod cache;
pub mod config;
pub mod domain;
pub mod errors;
pub mod frp;
pub mod pagination;
pub mod query;
pub mod session;
pub mod upstream;

// Re-export commonly used types
pub use cache::{CacheKey, Connection, ConnectionCache, QueryArgs};
pub use config::CatalogConfig;
pub use domain::{CatalogItem, Cursor, Launch};
pub use errors::{CatalogError, CatalogResult};
pub use frp::ReactiveCell;
pub use pagination::{Page, PageRequest, DEFAULT_PAGE_SIZE};
pub use query::{FieldRequest, QueryResponse, QueryResultAssembler};
pub use session::SessionState;
pub use upstream::{LaunchSource, StaticLaunchSource};
