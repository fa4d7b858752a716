// Copyright (c) 2025 - Cowboy AI, Inc.
//! ReactiveCell - writable session-local state
//!
//! A `ReactiveCell<T>` holds one piece of UI/session state outside the
//! connection cache. Cells are created once at process start and handed out
//! as cheap clones of the same handle; every clone observes the same value.
//!
//! # Semantics
//!
//! - `get` returns the latest value set
//! - `set` replaces the value, then notifies current subscribers in
//!   registration order before returning
//! - subscribers registered during a notification are not called for it
//!
//! ```rust
//! use cim_launch_catalog::frp::ReactiveCell;
//! use std::sync::atomic::{AtomicBool, Ordering};
//! use std::sync::Arc;
//!
//! let logged_in = ReactiveCell::new("isLoggedIn", false);
//! let seen = Arc::new(AtomicBool::new(false));
//! let flag = Arc::clone(&seen);
//!
//! let subscription = logged_in.subscribe(move |value| flag.store(*value, Ordering::SeqCst));
//! logged_in.set(true);
//!
//! assert!(logged_in.get());
//! assert!(seen.load(Ordering::SeqCst));
//! subscription.unsubscribe();
//! ```

use std::fmt::{self, Debug};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError, RwLock, Weak};
use tracing::debug;

use super::behavior::Behavior;
use super::signal::{Samplable, Signal};

type Subscriber<T> = Arc<dyn Fn(&T) + Send + Sync>;

struct CellInner<T> {
    name: String,
    value: RwLock<T>,
    subscribers: Mutex<Vec<(u64, Subscriber<T>)>>,
    next_subscriber: AtomicU64,
}

/// Process-wide, identity-addressed mutable cell
pub struct ReactiveCell<T> {
    inner: Arc<CellInner<T>>,
}

impl<T> Clone for ReactiveCell<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: Debug> Debug for ReactiveCell<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.inner.value.read().unwrap_or_else(PoisonError::into_inner);
        f.debug_struct("ReactiveCell")
            .field("name", &self.inner.name)
            .field("value", &*value)
            .finish()
    }
}

impl<T: Clone + Send + Sync + 'static> ReactiveCell<T> {
    /// Create a cell holding `initial`
    pub fn new(name: impl Into<String>, initial: T) -> Self {
        Self {
            inner: Arc::new(CellInner {
                name: name.into(),
                value: RwLock::new(initial),
                subscribers: Mutex::new(Vec::new()),
                next_subscriber: AtomicU64::new(0),
            }),
        }
    }

    /// Name the cell was registered under
    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// Latest value
    pub fn get(&self) -> T {
        self.inner
            .value
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Replace the value and notify subscribers
    pub fn set(&self, value: T) {
        {
            let mut slot = self.inner.value.write().unwrap_or_else(PoisonError::into_inner);
            *slot = value.clone();
        }

        // Snapshot so callbacks may subscribe/unsubscribe without deadlocking
        let subscribers: Vec<Subscriber<T>> = self
            .inner
            .subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|(_, subscriber)| Arc::clone(subscriber))
            .collect();

        debug!(
            cell = %self.inner.name,
            subscribers = subscribers.len(),
            "Reactive cell updated"
        );

        for subscriber in subscribers {
            subscriber(&value);
        }
    }

    /// Derive the next value from the current one and `set` it
    pub fn update<F>(&self, f: F)
    where
        F: FnOnce(&T) -> T,
    {
        let next = f(&self.get());
        self.set(next);
    }

    /// Register `f` to be called with every new value
    pub fn subscribe<F>(&self, f: F) -> Subscription<T>
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        let id = self.inner.next_subscriber.fetch_add(1, Ordering::Relaxed);
        self.inner
            .subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((id, Arc::new(f)));

        Subscription {
            id,
            cell: Arc::downgrade(&self.inner),
        }
    }

    /// Number of live subscribers
    pub fn subscriber_count(&self) -> usize {
        self.inner
            .subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

impl<T: Clone + Debug + Send + Sync + 'static> ReactiveCell<T> {
    /// Read-only view that samples this cell
    pub fn behavior(&self) -> Behavior<T> {
        let cell = self.clone();
        Behavior::from_fn(move || cell.get())
    }
}

impl<T: Clone + Debug + Send + Sync + 'static> Signal<T> for ReactiveCell<T> {
    type Mapped<U: Clone + Debug + Send + Sync + 'static> = Behavior<U>;

    fn map<U, F>(self, f: F) -> Self::Mapped<U>
    where
        F: Fn(T) -> U + Clone + Send + Sync + 'static,
        U: Clone + Debug + Send + Sync + 'static,
    {
        self.behavior().map(f)
    }
}

impl<T: Clone + Debug + Send + Sync + 'static> Samplable<T> for ReactiveCell<T> {
    fn sample(&self) -> T {
        self.get()
    }
}

/// Handle returned by [`ReactiveCell::subscribe`]
///
/// Dropping the handle keeps the subscription alive; call
/// [`Subscription::unsubscribe`] to remove it.
#[must_use = "keep the handle to be able to unsubscribe"]
pub struct Subscription<T> {
    id: u64,
    cell: Weak<CellInner<T>>,
}

impl<T> Subscription<T> {
    /// Remove the subscriber; later `set` calls no longer reach it
    pub fn unsubscribe(self) {
        if let Some(cell) = self.cell.upgrade() {
            cell.subscribers
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .retain(|(id, _)| *id != self.id);
        }
    }
}

impl<T> Debug for Subscription<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}
