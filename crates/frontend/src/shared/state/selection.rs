//! App-wide selection state.
//!
//! Owns the [`Selection`] mapping behind a signal, restoring it from
//! durable storage on startup and writing it back after every mutation.
//! Provided via context from the app root.

use contracts::checkout::{Selection, SelectionEntry, SelectionError};
use leptos::prelude::*;

use crate::shared::storage::{KeyValueStore, StorageArea, SELECTION_KEY};

#[derive(Clone, Copy)]
pub struct SelectionService {
    selection: RwSignal<Selection>,
    store: StorageArea,
}

impl SelectionService {
    pub fn new() -> Self {
        Self::with_store(StorageArea::Local)
    }

    pub fn with_store(store: StorageArea) -> Self {
        // A corrupt or missing document starts an empty selection.
        let restored = store
            .get(SELECTION_KEY)
            .and_then(|json| Selection::from_json(&json).ok())
            .unwrap_or_default();
        Self {
            selection: RwSignal::new(restored),
            store,
        }
    }

    fn persist(&self) {
        self.store
            .set(SELECTION_KEY, &self.selection.get_untracked().to_json());
    }

    /// Upsert an entry; persists on success.
    pub fn add(&self, entry: SelectionEntry) -> Result<(), SelectionError> {
        let mut result = Ok(());
        self.selection.update(|s| result = s.add(entry));
        if result.is_ok() {
            self.persist();
        }
        result
    }

    pub fn clear(&self) {
        self.selection.update(|s| s.clear());
        self.persist();
    }

    /// Reactive entry count.
    pub fn count(&self) -> usize {
        self.selection.with(|s| s.len())
    }

    pub fn is_empty(&self) -> bool {
        self.selection.with(|s| s.is_empty())
    }

    /// Reactive gallery-price total for the review modal.
    pub fn total(&self) -> f64 {
        self.selection.with(|s| s.total())
    }

    /// Non-reactive copy for building the checkout handoff.
    pub fn snapshot(&self) -> Selection {
        self.selection.get_untracked()
    }

    /// Reactive read access for list renders.
    pub fn with_entries<R>(&self, f: impl FnOnce(&Selection) -> R) -> R {
        self.selection.with(f)
    }
}

impl Default for SelectionService {
    fn default() -> Self {
        Self::new()
    }
}
