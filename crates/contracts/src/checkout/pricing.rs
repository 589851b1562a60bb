use serde::{Deserialize, Serialize};

use super::item::CheckoutItem;
use crate::domain::product::Product;

/// Sentinel name for items whose `product_url` no longer resolves against
/// the catalog. The render degrades instead of failing.
pub const UNKNOWN_PRODUCT_NAME: &str = "Unknown Product";

/// A [`CheckoutItem`] enriched with live catalog data for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricedItem {
    pub product_name: String,
    pub price: f64,
    pub quantity: u32,
    pub option_value: String,
}

impl PricedItem {
    pub fn line_total(&self) -> f64 {
        self.price * self.quantity as f64
    }
}

/// Resolve one item against the catalog by `product_url`.
///
/// Best effort: an unresolved lookup yields the sentinel name and a zero
/// price rather than an error.
pub fn resolve_item(item: &CheckoutItem, catalog: &[Product]) -> PricedItem {
    let hit = catalog.iter().find(|p| p.product_url == item.product_url);
    PricedItem {
        product_name: hit
            .map(|p| p.name.clone())
            .unwrap_or_else(|| UNKNOWN_PRODUCT_NAME.to_string()),
        price: hit.and_then(|p| p.price).unwrap_or(0.0),
        quantity: item.quantity,
        option_value: item.option_value.clone(),
    }
}

/// Running total accumulated in display order (= input order).
pub fn total_in_order(items: &[PricedItem]) -> f64 {
    items.iter().map(PricedItem::line_total).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product::ProductId;

    fn product(url: &str, name: &str, price: Option<f64>) -> Product {
        serde_json::from_value(serde_json::json!({
            "id": 1,
            "product_url": url,
            "name": name,
            "price": price,
        }))
        .unwrap()
    }

    fn item(url: &str, quantity: u32) -> CheckoutItem {
        CheckoutItem {
            product_url: url.to_string(),
            quantity,
            option_value: "A".to_string(),
        }
    }

    #[test]
    fn resolves_name_and_price_from_catalog() {
        let catalog = vec![product("p1", "Liquid", Some(10.0))];
        let priced = resolve_item(&item("p1", 2), &catalog);
        assert_eq!(priced.product_name, "Liquid");
        assert!((priced.line_total() - 20.0).abs() < f64::EPSILON);
    }

    #[test]
    fn unresolved_url_degrades_to_sentinel() {
        let catalog = vec![product("p1", "Liquid", Some(10.0))];
        let priced = resolve_item(&item("gone", 3), &catalog);
        assert_eq!(priced.product_name, UNKNOWN_PRODUCT_NAME);
        assert_eq!(priced.price, 0.0);
        assert_eq!(priced.line_total(), 0.0);
    }

    #[test]
    fn priceless_catalog_hit_counts_as_zero() {
        let catalog = vec![product("p1", "Liquid", None)];
        let priced = resolve_item(&item("p1", 4), &catalog);
        assert_eq!(priced.product_name, "Liquid");
        assert_eq!(priced.price, 0.0);
    }

    #[test]
    fn total_accumulates_in_input_order() {
        let catalog = vec![
            product("p1", "A", Some(10.0)),
            product("p2", "B", Some(2.5)),
        ];
        let priced: Vec<_> = [item("p1", 2), item("p2", 4), item("missing", 9)]
            .iter()
            .map(|i| resolve_item(i, &catalog))
            .collect();
        assert_eq!(priced[0].product_name, "A");
        assert_eq!(priced[2].product_name, UNKNOWN_PRODUCT_NAME);
        assert!((total_in_order(&priced) - 30.0).abs() < f64::EPSILON);
    }

    #[test]
    fn id_is_not_used_for_matching() {
        // Matching is by product_url only; ids can collide freely.
        let mut a = product("p1", "A", Some(1.0));
        a.id = ProductId(7);
        let catalog = vec![a];
        assert_eq!(resolve_item(&item("p1", 1), &catalog).product_name, "A");
    }
}
