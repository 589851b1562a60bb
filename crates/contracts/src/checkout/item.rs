use serde::{Deserialize, Serialize};

/// Reduced projection of a [`SelectionEntry`](super::selection::SelectionEntry)
/// sent across the checkout handoff boundary.
///
/// Name and price are intentionally absent: the checkout view re-resolves
/// them against the live catalog so stale gallery data never reaches the
/// confirm request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutItem {
    pub product_url: String,
    pub quantity: u32,
    pub option_value: String,
}
