// Copyright (c) 2025 - Cowboy AI, Inc.
//! Reactive Session State
//!
//! Session-local state (login flag, selected launches) lives in reactive cells
//! rather than in the connection cache. Query-layer reads of a reactive field
//! always sample the cell, whatever the remote source returned.
//!
//! ## ReactiveCell<T>
//!
//! Writable source of truth. `set` takes effect immediately and notifies
//! subscribers synchronously.
//!
//! ```text
//! set(true)
//!   │
//!   ▼
//! ReactiveCell<bool> ──sample──> isLoggedIn field
//!   │
//!   └──notify──> subscribers
//! ```
//!
//! ## Behavior<T>
//!
//! Read-only value derived from one or more cells, recomputed on every sample.

pub mod behavior;
pub mod cell;
pub mod signal;

pub use behavior::Behavior;
pub use cell::{ReactiveCell, Subscription};
pub use signal::{Samplable, Signal};
