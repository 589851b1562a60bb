//! Per-entity in-flight request markers.
//!
//! A handler claims its key before dispatching and releases it on every
//! completion path; a second invocation while the key is held is a no-op.
//! Controls subscribe via [`BusyService::is_busy`] to render disabled.

use leptos::prelude::*;
use std::collections::HashSet;

#[derive(Clone, Copy)]
pub struct BusyService {
    inflight: RwSignal<HashSet<String>>,
}

impl BusyService {
    pub fn new() -> Self {
        Self {
            inflight: RwSignal::new(HashSet::new()),
        }
    }

    /// Claim `key`. Returns false if it is already held; the caller must
    /// then skip the dispatch entirely.
    pub fn begin(&self, key: &str) -> bool {
        let mut claimed = false;
        self.inflight.update(|s| {
            claimed = s.insert(key.to_string());
        });
        claimed
    }

    /// Release `key`. Releasing an unclaimed key is harmless.
    pub fn end(&self, key: &str) {
        self.inflight.update(|s| {
            s.remove(key);
        });
    }

    /// Reactive: reads track the underlying signal.
    pub fn is_busy(&self, key: &str) -> bool {
        self.inflight.with(|s| s.contains(key))
    }
}

impl Default for BusyService {
    fn default() -> Self {
        Self::new()
    }
}
