//! Key-value persistence over the two browser storage areas.
//!
//! The selection survives reloads in durable local storage; the in-flight
//! checkout payload lives in session storage so it dies with the tab.

use web_sys::window;

/// Storage keys. The names predate this client and are kept so existing
/// browser profiles keep their selection.
pub const SELECTION_KEY: &str = "gallery_selection";
pub const CHECKOUT_ITEMS_KEY: &str = "checkout_items";
pub const CHECKOUT_USER_ID_KEY: &str = "checkout_user_id";

/// Minimal string key-value interface over a persistence area.
///
/// All operations are best-effort: storage can be absent (private mode,
/// quota) and callers must tolerate `None`/silent failure.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// The two browser-provided areas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageArea {
    /// `localStorage`: durable, per browser profile.
    Local,
    /// `sessionStorage`: scoped to the tab session.
    Session,
}

impl StorageArea {
    fn raw(&self) -> Option<web_sys::Storage> {
        let w = window()?;
        match self {
            StorageArea::Local => w.local_storage().ok()?,
            StorageArea::Session => w.session_storage().ok()?,
        }
    }
}

impl KeyValueStore for StorageArea {
    fn get(&self, key: &str) -> Option<String> {
        self.raw()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = self.raw() {
            let _ = storage.set_item(key, value);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = self.raw() {
            let _ = storage.remove_item(key);
        }
    }
}
