use contracts::checkout::{CheckoutOutcome, ConfirmCheckoutRequest, UserId};
use contracts::domain::order::{Order, OrderListResponse};
use gloo_net::http::Request;

use crate::shared::api_utils::api_base;

/// Submit the confirm request.
///
/// The server answers with the same body shape on 200 and on 5xx, so the
/// body is parsed regardless of status and the `success` flag decides.
/// Only a transport/parse failure becomes an `Err`.
pub async fn confirm_checkout(request: &ConfirmCheckoutRequest) -> Result<CheckoutOutcome, String> {
    let response = Request::post(&format!("{}/api/checkout/confirm", api_base()))
        .json(request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    response
        .json::<CheckoutOutcome>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Recent orders for the review page side panel.
pub async fn fetch_orders(user_id: UserId) -> Result<Vec<Order>, String> {
    let response = Request::get(&format!("{}/api/user/{}/orders", api_base(), user_id))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch orders: {}", response.status()));
    }

    let data: OrderListResponse = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;
    Ok(data.orders)
}
