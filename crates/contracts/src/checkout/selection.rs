use std::collections::BTreeMap;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use super::item::CheckoutItem;
use crate::domain::product::ProductId;

/// One chosen product with the quantity and option picked in the gallery.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectionEntry {
    pub product_id: ProductId,
    pub product_url: String,
    pub product_name: String,
    pub price: f64,
    pub quantity: u32,
    pub option_value: String,
    pub option_label: String,
}

impl SelectionEntry {
    /// Quantity below 1 (including a failed parse defaulted to 0 upstream)
    /// is clamped to 1.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        product_id: ProductId,
        product_url: impl Into<String>,
        product_name: impl Into<String>,
        price: f64,
        quantity: u32,
        option_value: impl Into<String>,
        option_label: impl Into<String>,
    ) -> Self {
        Self {
            product_id,
            product_url: product_url.into(),
            product_name: product_name.into(),
            price,
            quantity: quantity.max(1),
            option_value: option_value.into(),
            option_label: option_label.into(),
        }
    }

    pub fn line_total(&self) -> f64 {
        self.price * self.quantity as f64
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionError {
    /// An option must be selected before an entry can be added.
    OptionRequired,
}

impl std::fmt::Display for SelectionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SelectionError::OptionRequired => write!(f, "Please select an option first"),
        }
    }
}

/// The client-local selection: at most one entry per product, keyed by id.
///
/// A `BTreeMap` keeps iteration in ascending-id order, which is the order
/// the checkout handoff and the review modal present items in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Selection {
    entries: BTreeMap<i64, SelectionEntry>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Upsert: re-adding a product overwrites its previous entry.
    pub fn add(&mut self, entry: SelectionEntry) -> Result<(), SelectionError> {
        if entry.option_value.trim().is_empty() {
            return Err(SelectionError::OptionRequired);
        }
        self.entries.insert(entry.product_id.value(), entry);
        Ok(())
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> impl Iterator<Item = &SelectionEntry> {
        self.entries.values()
    }

    /// Sum over the gallery-captured prices, for the review modal.
    pub fn total(&self) -> f64 {
        self.entries.values().map(SelectionEntry::line_total).sum()
    }

    /// Ordered projection sent across the checkout handoff.
    pub fn to_checkout_items(&self) -> Vec<CheckoutItem> {
        self.entries
            .values()
            .map(|e| CheckoutItem {
                product_url: e.product_url.clone(),
                quantity: e.quantity,
                option_value: e.option_value.clone(),
            })
            .collect()
    }

    /// JSON document stored under the durable-storage key.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    /// Inverse of [`Selection::to_json`]. Callers treat a corrupt document
    /// as an empty selection.
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        serde_json::from_str(json).context("stored selection is not valid JSON")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: i64, qty: u32, option: &str) -> SelectionEntry {
        SelectionEntry::new(
            ProductId(id),
            format!("https://www.dampfi.ch/p{id}"),
            format!("Product {id}"),
            10.0,
            qty,
            option,
            format!("{option} mg"),
        )
    }

    #[test]
    fn add_keeps_one_entry_per_product() {
        let mut sel = Selection::new();
        sel.add(entry(1, 1, "3")).unwrap();
        sel.add(entry(2, 2, "6")).unwrap();
        sel.add(entry(1, 5, "12")).unwrap();
        assert_eq!(sel.len(), 2);
        let first = sel.entries().next().unwrap();
        assert_eq!(first.quantity, 5);
        assert_eq!(first.option_value, "12");
    }

    #[test]
    fn add_without_option_is_rejected() {
        let mut sel = Selection::new();
        assert_eq!(sel.add(entry(1, 1, "")), Err(SelectionError::OptionRequired));
        assert_eq!(
            sel.add(entry(1, 1, "   ")),
            Err(SelectionError::OptionRequired)
        );
        assert!(sel.is_empty());
    }

    #[test]
    fn quantity_is_clamped_to_at_least_one() {
        assert_eq!(entry(1, 0, "3").quantity, 1);
        assert_eq!(entry(1, 7, "3").quantity, 7);
    }

    #[test]
    fn checkout_items_come_out_in_ascending_id_order() {
        let mut sel = Selection::new();
        sel.add(entry(9, 1, "3")).unwrap();
        sel.add(entry(2, 1, "3")).unwrap();
        sel.add(entry(5, 1, "3")).unwrap();
        let urls: Vec<_> = sel
            .to_checkout_items()
            .into_iter()
            .map(|i| i.product_url)
            .collect();
        assert_eq!(
            urls,
            vec![
                "https://www.dampfi.ch/p2",
                "https://www.dampfi.ch/p5",
                "https://www.dampfi.ch/p9"
            ]
        );
    }

    #[test]
    fn total_sums_price_times_quantity() {
        let mut sel = Selection::new();
        sel.add(entry(1, 2, "3")).unwrap();
        sel.add(entry(2, 3, "6")).unwrap();
        assert!((sel.total() - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn storage_document_round_trips() {
        let mut sel = Selection::new();
        sel.add(entry(3, 2, "6")).unwrap();
        let restored = Selection::from_json(&sel.to_json()).unwrap();
        assert_eq!(restored, sel);
    }

    #[test]
    fn corrupt_storage_document_is_an_error() {
        assert!(Selection::from_json("not json").is_err());
    }
}
