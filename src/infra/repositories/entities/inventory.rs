//! Inventory database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::InventoryItem;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "inventory_items")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,
    pub name: String,
    pub part_number: Option<String>,
    pub quantity: i32,
    pub unit: String,
    pub min_quantity: i32,
    pub location: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl From<Model> for InventoryItem {
    fn from(model: Model) -> Self {
        InventoryItem {
            id: model.id,
            name: model.name,
            part_number: model.part_number,
            quantity: model.quantity,
            unit: model.unit,
            min_quantity: model.min_quantity,
            location: model.location,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
