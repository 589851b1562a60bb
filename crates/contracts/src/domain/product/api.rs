//! Wire envelopes for the product endpoints.
//!
//! The server wraps payloads (`{"products": [...]}`, `{"product": {...}}`)
//! and reports application failures as `{"error": "..."}` bodies.

use serde::{Deserialize, Serialize};

use super::aggregate::Product;

/// `GET /api/products`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductListResponse {
    pub products: Vec<Product>,
}

/// `GET/POST/PUT /api/products/{id}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductResponse {
    pub product: Product,
}

/// Body for `POST /api/products` and `PUT /api/products/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveProductRequest {
    pub product_url: String,
    pub name: String,
}

/// `POST /api/products/{id}/scrape`: the updated record plus whatever the
/// scrape extracted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrapeResponse {
    pub product: Product,
    #[serde(default)]
    pub scraped: Option<serde_json::Value>,
}

/// Error body returned with non-2xx statuses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub error: String,
}
