// Copyright (c) 2025 - Cowboy AI, Inc.
//! Behavior - read-only derived views
//!
//! A `Behavior<T>` is a value that exists at every moment and is recomputed
//! when sampled. Behaviors obtained from a [`ReactiveCell`](super::ReactiveCell)
//! always observe the cell's latest value.
//!
//! ```rust
//! use cim_launch_catalog::frp::{ReactiveCell, Samplable, Signal};
//!
//! let selected = ReactiveCell::new("selectedLaunchIds", vec!["1".to_string()]);
//! let count = selected.behavior().map(|ids| ids.len());
//!
//! selected.set(vec!["1".to_string(), "2".to_string()]);
//! assert_eq!(count.sample(), 2);
//! ```

use super::signal::{Samplable, Signal};
use std::fmt::Debug;
use std::sync::Arc;

/// Continuous-time signal backed by a sampling function
#[derive(Clone)]
pub struct Behavior<T> {
    sampler: Arc<dyn Fn() -> T + Send + Sync>,
}

impl<T: Debug> Debug for Behavior<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Behavior<{}>", std::any::type_name::<T>())
    }
}

impl<T: Clone + Debug + Send + Sync + 'static> Behavior<T> {
    /// A behavior computed by `f` on every sample
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn() -> T + Send + Sync + 'static,
    {
        Self {
            sampler: Arc::new(f),
        }
    }

    /// Combine two behaviors, sampling both on every read
    pub fn apply2<U, V, F>(self, other: Behavior<U>, f: F) -> Behavior<V>
    where
        U: Clone + Debug + 'static,
        V: Clone + Debug + 'static,
        F: Fn(T, U) -> V + Send + Sync + 'static,
    {
        let left = self.sampler;
        let right = other.sampler;

        Behavior {
            sampler: Arc::new(move || f(left(), right())),
        }
    }
}

impl<T: Clone + Debug + Send + Sync + 'static> Signal<T> for Behavior<T> {
    type Mapped<U: Clone + Debug + Send + Sync + 'static> = Behavior<U>;

    fn map<U, F>(self, f: F) -> Self::Mapped<U>
    where
        F: Fn(T) -> U + Clone + Send + Sync + 'static,
        U: Clone + Debug + Send + Sync + 'static,
    {
        let sampler = self.sampler;
        Behavior {
            sampler: Arc::new(move || f(sampler())),
        }
    }
}

impl<T: Clone + Debug + Send + Sync + 'static> Samplable<T> for Behavior<T> {
    fn sample(&self) -> T {
        (self.sampler)()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_composition() {
        let ids = Behavior::from_fn(|| vec!["1", "2", "3"]);

        let composed = ids.clone().map(|v| v.len()).map(|n| n > 2);
        let direct = ids.map(|v| v.len() > 2);

        assert_eq!(composed.sample(), direct.sample());
    }

    #[test]
    fn test_apply2() {
        let logged_in = Behavior::from_fn(|| true);
        let selected = Behavior::from_fn(|| 3usize);

        let can_book = logged_in.apply2(selected, |l, n| l && n > 0);
        assert!(can_book.sample());
    }

    #[test]
    fn test_from_fn_resamples() {
        use std::sync::atomic::{AtomicUsize, Ordering};

        let reads = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&reads);
        let behavior = Behavior::from_fn(move || counter.fetch_add(1, Ordering::SeqCst));

        assert_eq!(behavior.sample(), 0);
        assert_eq!(behavior.sample(), 1);
    }
}
