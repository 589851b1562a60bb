use serde::{Deserialize, Serialize};

use crate::checkout::item::CheckoutItem;
use crate::checkout::confirm::ConfirmationData;

/// A past checkout run, as served by `GET /api/user/{id}/orders`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: i64,
    pub user_id: i64,
    #[serde(default)]
    pub total_price: Option<f64>,
    #[serde(default)]
    pub items: Option<Vec<CheckoutItem>>,
    pub status: String,
    #[serde(default)]
    pub confirmation_data: Option<ConfirmationData>,
    #[serde(default)]
    pub timestamp: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderListResponse {
    pub orders: Vec<Order>,
}
