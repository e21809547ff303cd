// src/storage/inventory.rs
use thiserror::Error;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::types::{InventoryItem, LowStockAlert};

#[derive(Debug, Error)]
pub enum InventoryError {
    #[error("Item {0} not found")]
    NotFound(Uuid),
}

/// In-memory inventory of pickleball clothing and equipment.
pub struct InventoryStore {
    items: RwLock<Vec<InventoryItem>>,
}

impl InventoryStore {
    pub fn seeded() -> Self {
        Self {
            items: RwLock::new(seed_items()),
        }
    }

    pub async fn list(&self, category: Option<&str>) -> Vec<InventoryItem> {
        let guard = self.items.read().await;
        guard
            .iter()
            .filter(|item| {
                category.map_or(true, |c| item.category.eq_ignore_ascii_case(c))
            })
            .cloned()
            .collect()
    }

    /// Reduces stock for a sale, flooring at zero, and reports a low-stock
    /// alert when the new quantity is at or below the item's threshold.
    pub async fn record_sale(
        &self,
        item_id: Uuid,
        quantity_sold: u32,
    ) -> Result<(InventoryItem, Option<LowStockAlert>), InventoryError> {
        let mut guard = self.items.write().await;
        let item = guard
            .iter_mut()
            .find(|item| item.id == item_id)
            .ok_or(InventoryError::NotFound(item_id))?;

        item.quantity = item.quantity.saturating_sub(quantity_sold);

        let alert = (item.quantity <= item.low_stock_threshold).then(|| LowStockAlert {
            item_name: item.name.clone(),
            quantity: item.quantity,
        });

        Ok((item.clone(), alert))
    }
}

fn seed_items() -> Vec<InventoryItem> {
    let catalog: &[(&str, &str, &str, u32)] = &[
        ("Performance Shirt - Blue", "Shirts", "PB-SHIRT-BLUE", 25),
        ("Performance Shirt - White", "Shirts", "PB-SHIRT-WHT", 18),
        ("Performance Shirt - Black", "Shirts", "PB-SHIRT-BLK", 12),
        ("Performance Shorts - Navy", "Shorts", "PB-SHORT-NVY", 15),
        ("Performance Shorts - White", "Shorts", "PB-SHORT-WHT", 8),
        ("Pickleball Skirt - Black", "Skirts", "PB-SKIRT-BLK", 11),
        ("Pickleball Skirt - Teal", "Skirts", "PB-SKIRT-TL", 6),
        ("Paddle - Graphite Pro", "Equipment", "PB-PAD-GPRO", 14),
        ("Paddle - Beginner", "Equipment", "PB-PAD-BEG", 22),
        ("Paddle - Tournament", "Equipment", "PB-PAD-TRN", 9),
        ("Hat - Pickleball Logo", "Accessories", "PB-HAT-LOGO", 30),
        ("Visor - Performance", "Accessories", "PB-VISOR-PERF", 19),
        ("Dress - Athletic", "Dresses", "PB-DRESS-ATH", 7),
    ];

    catalog
        .iter()
        .map(|(name, category, sku, quantity)| InventoryItem {
            id: Uuid::new_v4(),
            name: (*name).to_string(),
            category: (*category).to_string(),
            sku: Some((*sku).to_string()),
            quantity: *quantity,
            low_stock_threshold: 10,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn seeded_catalog_lists_and_filters_by_category() {
        let store = InventoryStore::seeded();

        assert_eq!(store.list(None).await.len(), 13);

        let shirts = store.list(Some("shirts")).await; // case-insensitive
        assert_eq!(shirts.len(), 3);
        assert!(shirts.iter().all(|item| item.category == "Shirts"));

        assert!(store.list(Some("Racquets")).await.is_empty());
    }

    #[tokio::test]
    async fn sale_reduces_stock() {
        let store = InventoryStore::seeded();
        let hat = store.list(Some("Accessories")).await[0].clone();
        assert_eq!(hat.quantity, 30);

        let (updated, alert) = store.record_sale(hat.id, 5).await.unwrap();
        assert_eq!(updated.quantity, 25);
        assert!(alert.is_none());

        // The mutation sticks.
        let relisted = store.list(Some("Accessories")).await[0].clone();
        assert_eq!(relisted.quantity, 25);
    }

    #[tokio::test]
    async fn sale_at_or_below_threshold_raises_alert() {
        let store = InventoryStore::seeded();
        let shirt = store.list(Some("Shirts")).await[0].clone(); // qty 25, threshold 10

        let (updated, alert) = store.record_sale(shirt.id, 15).await.unwrap();
        assert_eq!(updated.quantity, 10);
        let alert = alert.unwrap();
        assert_eq!(alert.item_name, shirt.name);
        assert_eq!(alert.quantity, 10);
    }

    #[tokio::test]
    async fn oversell_floors_at_zero() {
        let store = InventoryStore::seeded();
        let dress = store.list(Some("Dresses")).await[0].clone(); // qty 7

        let (updated, alert) = store.record_sale(dress.id, 100).await.unwrap();
        assert_eq!(updated.quantity, 0);
        assert!(alert.is_some());
    }

    #[tokio::test]
    async fn unknown_item_is_not_found() {
        let store = InventoryStore::seeded();
        let missing = Uuid::new_v4();
        let err = store.record_sale(missing, 1).await.unwrap_err();
        assert!(matches!(err, InventoryError::NotFound(id) if id == missing));
    }
}
