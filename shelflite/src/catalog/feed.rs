// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Catalog change feed
//!
//! Every successful mutation bumps a revision counter and notifies
//! registered listeners, signaling callers holding a cached listing to
//! re-fetch. This is a notification contract only: listeners run after the
//! store write and take no locks that mutations wait on.

use parking_lot::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

/// A catalog mutation, as seen by change listeners
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangeEvent {
    /// A product was created
    Created { id: String },
    /// A product's fields were replaced
    Updated { id: String },
    /// A product was removed
    Deleted { id: String },
    /// A batch of products was seeded
    Seeded { count: usize },
}

type Listener = Box<dyn Fn(&ChangeEvent) + Send + Sync>;

/// Revision counter plus listener registry
pub(crate) struct ChangeFeed {
    revision: AtomicU64,
    listeners: Mutex<Vec<Listener>>,
}

impl ChangeFeed {
    pub(crate) fn new() -> Self {
        Self {
            revision: AtomicU64::new(0),
            listeners: Mutex::new(Vec::new()),
        }
    }

    /// Current revision; increases monotonically with each mutation
    pub(crate) fn revision(&self) -> u64 {
        self.revision.load(Ordering::Acquire)
    }

    /// Register a listener invoked on every mutation
    pub(crate) fn subscribe(&self, listener: Listener) {
        self.listeners.lock().push(listener);
    }

    /// Bump the revision and notify listeners
    pub(crate) fn publish(&self, event: ChangeEvent) {
        self.revision.fetch_add(1, Ordering::AcqRel);
        let listeners = self.listeners.lock();
        for listener in listeners.iter() {
            listener(&event);
        }
    }
}
