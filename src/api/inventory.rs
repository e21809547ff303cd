// src/api/inventory.rs
use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;

use crate::api::{ApiError, AppState};
use crate::storage::inventory::InventoryError;
use crate::types::{InventoryItem, InventorySale, InventorySaleReceipt};

#[derive(Debug, Deserialize)]
pub struct InventoryQuery {
    pub category: Option<String>,
}

pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<InventoryQuery>,
) -> Json<Vec<InventoryItem>> {
    Json(state.inventory.list(query.category.as_deref()).await)
}

/// Records a sale that reduces inventory.
pub async fn record_sale(
    State(state): State<AppState>,
    Json(sale): Json<InventorySale>,
) -> Result<Json<InventorySaleReceipt>, ApiError> {
    if sale.quantity == 0 {
        return Err(ApiError::UnprocessableEntity(
            "quantity must be greater than zero".to_string(),
        ));
    }

    match state.inventory.record_sale(sale.item_id, sale.quantity).await {
        Ok((item, alert)) => Ok(Json(InventorySaleReceipt {
            item_id: item.id,
            item_name: item.name,
            quantity_sold: sale.quantity,
            new_quantity: item.quantity,
            low_stock_alert: alert,
        })),
        Err(InventoryError::NotFound(_)) => Err(ApiError::NotFound(format!(
            "Item {} not found",
            sale.item_id
        ))),
    }
}
