use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================

/// Server-assigned product identifier. Serializes as a bare integer.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub struct ProductId(pub i64);

impl ProductId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

// ============================================================================
// Stock status
// ============================================================================

/// Availability as reported by the metadata scrape.
///
/// Unknown strings coming back from the server degrade to `Unknown`
/// instead of failing the whole deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum StockStatus {
    InStock,
    OutOfStock,
    Partial,
    #[default]
    #[serde(other)]
    Unknown,
}

impl StockStatus {
    /// Short label for badges and table cells.
    pub fn label(&self) -> &'static str {
        match self {
            StockStatus::InStock => "In stock",
            StockStatus::OutOfStock => "Out of stock",
            StockStatus::Partial => "Partially available",
            StockStatus::Unknown => "Unknown",
        }
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// A purchasable variant of a product (e.g. nicotine strength).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductOption {
    pub value: String,
    pub label: String,
    /// Per-option availability, present only when the scrape could tell.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub in_stock: Option<bool>,
}

/// Product record as served by `/api/products`.
///
/// The server owns these; the client holds a transient copy while editing.
/// Timestamps stay as the raw strings the server emits (the two endpoints
/// use different formats), display formatting is the frontend's job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub product_url: String,
    pub name: String,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub stock_status: StockStatus,
    #[serde(default)]
    pub options: Option<Vec<ProductOption>>,
    #[serde(default)]
    pub image_path: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl Product {
    /// File name part of `image_path`, used to build the `/uploads/{name}` URL.
    pub fn image_file_name(&self) -> Option<&str> {
        self.image_path
            .as_deref()
            .and_then(|p| p.rsplit('/').next())
            .filter(|n| !n.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_id_serializes_as_bare_integer() {
        assert_eq!(serde_json::to_string(&ProductId(42)).unwrap(), "42");
        let id: ProductId = serde_json::from_str("42").unwrap();
        assert_eq!(id, ProductId(42));
    }

    #[test]
    fn unknown_stock_status_degrades() {
        let s: StockStatus = serde_json::from_str("\"discontinued\"").unwrap();
        assert_eq!(s, StockStatus::Unknown);
        let s: StockStatus = serde_json::from_str("\"in_stock\"").unwrap();
        assert_eq!(s, StockStatus::InStock);
    }

    #[test]
    fn product_deserializes_with_missing_optionals() {
        let json = r#"{"id": 1, "product_url": "https://www.dampfi.ch/liquid", "name": "Liquid"}"#;
        let p: Product = serde_json::from_str(json).unwrap();
        assert_eq!(p.id, ProductId(1));
        assert_eq!(p.price, None);
        assert_eq!(p.stock_status, StockStatus::Unknown);
        assert!(p.options.is_none());
    }

    #[test]
    fn image_file_name_strips_directories() {
        let mut p: Product =
            serde_json::from_str(r#"{"id": 1, "product_url": "u", "name": "n"}"#).unwrap();
        p.image_path = Some("uploads/product_1_liquid.png".to_string());
        assert_eq!(p.image_file_name(), Some("product_1_liquid.png"));
        p.image_path = None;
        assert_eq!(p.image_file_name(), None);
    }
}
