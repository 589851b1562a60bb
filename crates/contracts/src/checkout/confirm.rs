use serde::{Deserialize, Serialize};

use super::item::CheckoutItem;
use super::user::UserId;

/// Body for `POST /api/checkout/confirm`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfirmCheckoutRequest {
    pub user_id: UserId,
    pub items: Vec<CheckoutItem>,
}

/// Order details the automation could extract from the confirmation page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfirmationData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Result of a confirm call.
///
/// The server returns this shape for both outcomes; a 200 with
/// `success: false` is an application-level failure and is handled exactly
/// like a transport error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CheckoutOutcome {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub order_id: Option<i64>,
    #[serde(default)]
    pub total_price: Option<f64>,
    #[serde(default)]
    pub confirmation_data: Option<ConfirmationData>,
}

impl CheckoutOutcome {
    /// The user-facing failure text: the server's message, else its error
    /// field, else a generic fallback.
    pub fn failure_text(&self) -> String {
        self.message
            .clone()
            .or_else(|| self.error.clone())
            .unwrap_or_else(|| "Unknown error".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confirm_request_serializes_to_the_wire_shape() {
        let req = ConfirmCheckoutRequest {
            user_id: UserId::new(3).unwrap(),
            items: vec![CheckoutItem {
                product_url: "p1".to_string(),
                quantity: 2,
                option_value: "A".to_string(),
            }],
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "user_id": 3,
                "items": [{"product_url": "p1", "quantity": 2, "option_value": "A"}],
            })
        );
    }

    #[test]
    fn success_outcome_parses() {
        let out: CheckoutOutcome = serde_json::from_str(
            r#"{"success": true, "message": "Order placed successfully",
                "order_id": 12, "total_price": 20.0,
                "confirmation_data": {"order_number": "100042", "status": "confirmed"}}"#,
        )
        .unwrap();
        assert!(out.success);
        assert_eq!(
            out.confirmation_data.unwrap().order_number.as_deref(),
            Some("100042")
        );
    }

    #[test]
    fn failure_text_prefers_message_over_error() {
        let out: CheckoutOutcome =
            serde_json::from_str(r#"{"success": false, "error": "boom"}"#).unwrap();
        assert_eq!(out.failure_text(), "boom");
        let out: CheckoutOutcome =
            serde_json::from_str(r#"{"success": false, "message": "m", "error": "e"}"#).unwrap();
        assert_eq!(out.failure_text(), "m");
        let out = CheckoutOutcome::default();
        assert_eq!(out.failure_text(), "Unknown error");
    }
}
