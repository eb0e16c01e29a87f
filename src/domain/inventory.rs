//! Inventory domain entity - spare parts and consumables.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// A stocked spare part or consumable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: Uuid,
    pub name: String,
    pub part_number: Option<String>,
    pub quantity: i32,
    pub unit: String,
    /// Reorder threshold; at or below it the item counts as low stock
    pub min_quantity: i32,
    pub location: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl InventoryItem {
    /// Whether the item is at or below its reorder threshold.
    pub fn is_low_stock(&self) -> bool {
        self.quantity <= self.min_quantity
    }
}

/// Fields for creating an inventory item.
#[derive(Debug, Clone)]
pub struct NewInventoryItem {
    pub name: String,
    pub part_number: Option<String>,
    pub quantity: i32,
    pub unit: String,
    pub min_quantity: i32,
    pub location: Option<String>,
}

/// Partial update for an inventory item; `None` leaves the field unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdateInventoryItem {
    pub name: Option<String>,
    pub part_number: Option<String>,
    pub quantity: Option<i32>,
    pub unit: Option<String>,
    pub min_quantity: Option<i32>,
    pub location: Option<String>,
}

/// Inventory response for the API.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct InventoryResponse {
    pub id: Uuid,
    #[schema(example = "Oxy-cutting nozzle")]
    pub name: String,
    #[schema(example = "NZ-300-12")]
    pub part_number: Option<String>,
    pub quantity: i32,
    #[schema(example = "pcs")]
    pub unit: String,
    pub min_quantity: i32,
    pub location: Option<String>,
    pub low_stock: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<InventoryItem> for InventoryResponse {
    fn from(item: InventoryItem) -> Self {
        let low_stock = item.is_low_stock();
        Self {
            id: item.id,
            name: item.name,
            part_number: item.part_number,
            quantity: item.quantity,
            unit: item.unit,
            min_quantity: item.min_quantity,
            location: item.location,
            low_stock,
            created_at: item.created_at,
            updated_at: item.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(quantity: i32, min_quantity: i32) -> InventoryItem {
        InventoryItem {
            id: Uuid::new_v4(),
            name: "Cutting tip".to_string(),
            part_number: None,
            quantity,
            unit: "pcs".to_string(),
            min_quantity,
            location: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_low_stock_at_or_below_threshold() {
        assert!(item(2, 5).is_low_stock());
        assert!(item(5, 5).is_low_stock());
        assert!(!item(6, 5).is_low_stock());
    }
}
