//! Gallery → checkout handoff codec.
//!
//! The selection crosses the page boundary as two query parameters:
//! `user_id` and `items`, the latter a URL-encoded JSON array of
//! [`CheckoutItem`]s. The checkout page decodes the same format back.

use contracts::checkout::{CheckoutItem, UserId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutHandoff {
    pub user_id: UserId,
    pub items: Vec<CheckoutItem>,
}

/// Wire form of the query string; `items` stays a JSON string so the
/// parameter layout matches what the server and old links expect.
#[derive(Serialize, Deserialize)]
struct HandoffQuery {
    user_id: i64,
    items: String,
}

impl CheckoutHandoff {
    /// Encode as a query string (no leading `?`).
    pub fn to_query(&self) -> String {
        let query = HandoffQuery {
            user_id: self.user_id.value(),
            items: serde_json::to_string(&self.items).unwrap_or_else(|_| "[]".to_string()),
        };
        serde_qs::to_string(&query).unwrap_or_default()
    }

    /// Decode from a query string, with or without the leading `?`.
    ///
    /// Returns `None` for anything short of a fully valid handoff; the
    /// caller then falls back to the session cache.
    pub fn from_query(query: &str) -> Option<Self> {
        let query = query.strip_prefix('?').unwrap_or(query);
        let parsed: HandoffQuery = serde_qs::from_str(query).ok()?;
        let user_id = UserId::new(parsed.user_id).ok()?;
        let items: Vec<CheckoutItem> = serde_json::from_str(&parsed.items).ok()?;
        Some(Self { user_id, items })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn handoff() -> CheckoutHandoff {
        CheckoutHandoff {
            user_id: UserId::new(3).unwrap(),
            items: vec![
                CheckoutItem {
                    product_url: "https://www.dampfi.ch/e-liquids/früchte?x=1&y=2".to_string(),
                    quantity: 2,
                    option_value: "6 mg/ml".to_string(),
                },
                CheckoutItem {
                    product_url: "https://www.dampfi.ch/p2".to_string(),
                    quantity: 1,
                    option_value: "A".to_string(),
                },
            ],
        }
    }

    #[test]
    fn round_trip_is_lossless() {
        let original = handoff();
        let decoded = CheckoutHandoff::from_query(&original.to_query()).unwrap();
        assert_eq!(decoded, original);
    }

    #[test]
    fn leading_question_mark_is_accepted() {
        let query = format!("?{}", handoff().to_query());
        assert!(CheckoutHandoff::from_query(&query).is_some());
    }

    #[test]
    fn missing_or_invalid_input_yields_none() {
        assert!(CheckoutHandoff::from_query("").is_none());
        assert!(CheckoutHandoff::from_query("user_id=3").is_none());
        assert!(CheckoutHandoff::from_query("user_id=3&items=not-json").is_none());
        // out-of-range user
        let mut h = handoff();
        h.user_id = UserId::new(5).unwrap();
        let query = h.to_query().replace("user_id=5", "user_id=9");
        assert!(CheckoutHandoff::from_query(&query).is_none());
    }

    #[test]
    fn item_order_is_preserved() {
        let decoded = CheckoutHandoff::from_query(&handoff().to_query()).unwrap();
        assert_eq!(decoded.items[0].quantity, 2);
        assert_eq!(decoded.items[1].option_value, "A");
    }
}
