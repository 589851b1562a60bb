//! Checkout review page logic, kept free of DOM rendering.
//!
//! Data arrives either in the URL (fresh handoff from the gallery) or in
//! the session cache (reload / back navigation). URL data is mirrored into
//! the cache so a later reload without the query still renders.

use contracts::checkout::{resolve_item, CheckoutItem, PricedItem, UserId};
use futures::future::join_all;

use crate::domain::product::api as product_api;
use crate::shared::handoff::CheckoutHandoff;
use crate::shared::storage::{
    KeyValueStore, StorageArea, CHECKOUT_ITEMS_KEY, CHECKOUT_USER_ID_KEY,
};

pub const CONFIRM_BUSY_KEY: &str = "checkout:confirm";

#[derive(Clone, Debug)]
pub struct CheckoutData {
    pub user_id: UserId,
    pub items: Vec<CheckoutItem>,
}

/// Resolve the checkout payload from URL query or session cache.
///
/// `None` means the hard precondition failed: there is nothing to check
/// out, and the caller must bounce back to the gallery.
pub fn load_checkout_data() -> Option<CheckoutData> {
    let query = web_sys::window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default();

    if let Some(handoff) = CheckoutHandoff::from_query(&query) {
        mirror_to_session(&handoff);
        return Some(CheckoutData {
            user_id: handoff.user_id,
            items: handoff.items,
        });
    }

    load_from_session()
}

fn mirror_to_session(handoff: &CheckoutHandoff) {
    let session = StorageArea::Session;
    if let Ok(json) = serde_json::to_string(&handoff.items) {
        session.set(CHECKOUT_ITEMS_KEY, &json);
    }
    session.set(CHECKOUT_USER_ID_KEY, &handoff.user_id.to_string());
}

fn load_from_session() -> Option<CheckoutData> {
    let session = StorageArea::Session;
    let items: Vec<CheckoutItem> =
        serde_json::from_str(&session.get(CHECKOUT_ITEMS_KEY)?).ok()?;
    let user_id = UserId::parse(&session.get(CHECKOUT_USER_ID_KEY)?).ok()?;
    if items.is_empty() {
        return None;
    }
    Some(CheckoutData { user_id, items })
}

/// Drop the cached payload after a completed checkout.
pub fn clear_checkout_session() {
    let session = StorageArea::Session;
    session.remove(CHECKOUT_ITEMS_KEY);
    session.remove(CHECKOUT_USER_ID_KEY);
}

/// Enrich every item with live catalog data.
///
/// The per-item fetches run concurrently and complete in any order;
/// `join_all` reassembles the results in input order, so the rendered list
/// is deterministic. Each item degrades to the sentinel independently.
pub async fn enrich(items: &[CheckoutItem]) -> Vec<PricedItem> {
    let lookups = items.iter().map(|item| async move {
        match product_api::fetch_products().await {
            Ok(catalog) => resolve_item(item, &catalog),
            Err(e) => {
                log::error!("Catalog lookup failed for {}: {}", item.product_url, e);
                resolve_item(item, &[])
            }
        }
    });
    join_all(lookups).await
}
