//! Thread-safe registry handle.
//!
//! # Invariants
//! - Mutations are serialized under one write lock.
//! - A snapshot never changes after it is taken; later mutations copy.

use crate::registry::layout_registry::LayoutRegistry;
use std::sync::{Arc, PoisonError, RwLock};

/// Shared handle over one process-wide registry.
#[derive(Debug, Clone, Default)]
pub struct SharedLayoutRegistry {
    inner: Arc<RwLock<Arc<LayoutRegistry>>>,
}

impl SharedLayoutRegistry {
    pub fn new(registry: LayoutRegistry) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Arc::new(registry))),
        }
    }

    /// Returns the current immutable registry snapshot.
    pub fn snapshot(&self) -> Arc<LayoutRegistry> {
        let guard = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&guard)
    }

    /// Runs one mutation against the registry.
    ///
    /// Outstanding snapshots keep the state they were taken with.
    pub fn update<T>(&self, mutate: impl FnOnce(&mut LayoutRegistry) -> T) -> T {
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        mutate(Arc::make_mut(&mut guard))
    }
}

impl From<LayoutRegistry> for SharedLayoutRegistry {
    fn from(value: LayoutRegistry) -> Self {
        Self::new(value)
    }
}
