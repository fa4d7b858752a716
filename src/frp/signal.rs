// Copyright (c) 2025 - Cowboy AI, Inc.
//! Signal Traits - time-varying values
//!
//! ```text
//! Signal<T>
//!   └── Samplable<T>
//!         ├── ReactiveCell<T>  (writable source)
//!         └── Behavior<T>      (read-only, derived)
//! ```
//!
//! # Functor Laws
//!
//! 1. **Identity**: `signal.map(|x| x) == signal`
//! 2. **Composition**: `signal.map(f).map(g) == signal.map(|x| g(f(x)))`

use std::fmt::Debug;

/// A value of type `T` that changes over time
pub trait Signal<T: Send + Sync>: Clone + Debug + Send + Sync {
    /// The signal type produced by `map`
    type Mapped<U: Clone + Debug + Send + Sync + 'static>: Signal<U>;

    /// Derive a signal by applying `f` to every value
    fn map<U, F>(self, f: F) -> Self::Mapped<U>
    where
        F: Fn(T) -> U + Clone + Send + Sync + 'static,
        U: Clone + Debug + Send + Sync + 'static;
}

/// Signals that can be read at any moment
pub trait Samplable<T: Send + Sync>: Signal<T> {
    /// Current value
    fn sample(&self) -> T;
}
