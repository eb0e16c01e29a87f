//! Inventory repository.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    Set,
};
use uuid::Uuid;

#[cfg(test)]
use mockall::automock;

use super::entities::inventory;
use crate::domain::{InventoryItem, NewInventoryItem, UpdateInventoryItem};
use crate::errors::{AppError, AppResult};
use crate::types::PaginationParams;

/// Repository for spare-part inventory.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait InventoryRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<InventoryItem>>;
    async fn list(
        &self,
        params: &PaginationParams,
        low_stock_only: bool,
    ) -> AppResult<(Vec<InventoryItem>, u64)>;
    async fn list_all(&self) -> AppResult<Vec<InventoryItem>>;
    async fn create(&self, data: NewInventoryItem) -> AppResult<InventoryItem>;
    async fn update(&self, id: Uuid, data: UpdateInventoryItem) -> AppResult<InventoryItem>;
    /// Apply a relative quantity change; the result may not go negative.
    async fn adjust_quantity(&self, id: Uuid, delta: i32) -> AppResult<InventoryItem>;
    async fn delete(&self, id: Uuid) -> AppResult<()>;
    async fn count_low_stock(&self) -> AppResult<u64>;
}

/// Filter expression for items at or below their reorder threshold.
fn low_stock_condition() -> sea_orm::sea_query::SimpleExpr {
    Expr::col(inventory::Column::Quantity).lte(Expr::col(inventory::Column::MinQuantity))
}

/// SeaORM-backed implementation of [`InventoryRepository`].
pub struct InventoryStore {
    db: DatabaseConnection,
}

impl InventoryStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl InventoryRepository for InventoryStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<InventoryItem>> {
        let model = inventory::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(InventoryItem::from))
    }

    async fn list(
        &self,
        params: &PaginationParams,
        low_stock_only: bool,
    ) -> AppResult<(Vec<InventoryItem>, u64)> {
        let mut select = inventory::Entity::find().order_by_asc(inventory::Column::Name);
        if low_stock_only {
            select = select.filter(low_stock_condition());
        }

        let paginator = select.paginate(&self.db, params.limit());
        let total = paginator.num_items().await?;
        let models = paginator.fetch_page(params.page.saturating_sub(1)).await?;

        Ok((models.into_iter().map(InventoryItem::from).collect(), total))
    }

    async fn list_all(&self) -> AppResult<Vec<InventoryItem>> {
        let models = inventory::Entity::find()
            .order_by_asc(inventory::Column::Name)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(InventoryItem::from).collect())
    }

    async fn create(&self, data: NewInventoryItem) -> AppResult<InventoryItem> {
        let now = Utc::now();
        let active = inventory::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(data.name),
            part_number: Set(data.part_number),
            quantity: Set(data.quantity),
            unit: Set(data.unit),
            min_quantity: Set(data.min_quantity),
            location: Set(data.location),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let model = active.insert(&self.db).await?;
        Ok(InventoryItem::from(model))
    }

    async fn update(&self, id: Uuid, data: UpdateInventoryItem) -> AppResult<InventoryItem> {
        let model = inventory::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound)?;

        let mut active: inventory::ActiveModel = model.into();
        if let Some(name) = data.name {
            active.name = Set(name);
        }
        if let Some(part_number) = data.part_number {
            active.part_number = Set(Some(part_number));
        }
        if let Some(quantity) = data.quantity {
            if quantity < 0 {
                return Err(AppError::bad_request("Quantity may not be negative"));
            }
            active.quantity = Set(quantity);
        }
        if let Some(unit) = data.unit {
            active.unit = Set(unit);
        }
        if let Some(min_quantity) = data.min_quantity {
            active.min_quantity = Set(min_quantity);
        }
        if let Some(location) = data.location {
            active.location = Set(Some(location));
        }
        active.updated_at = Set(Utc::now());

        let model = active.update(&self.db).await?;
        Ok(InventoryItem::from(model))
    }

    async fn adjust_quantity(&self, id: Uuid, delta: i32) -> AppResult<InventoryItem> {
        let model = inventory::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound)?;

        let new_quantity = model.quantity + delta;
        if new_quantity < 0 {
            return Err(AppError::bad_request(format!(
                "Adjustment would drop quantity below zero ({} on hand)",
                model.quantity
            )));
        }

        let mut active: inventory::ActiveModel = model.into();
        active.quantity = Set(new_quantity);
        active.updated_at = Set(Utc::now());

        let model = active.update(&self.db).await?;
        Ok(InventoryItem::from(model))
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = inventory::Entity::delete_by_id(id).exec(&self.db).await?;
        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }
        Ok(())
    }

    async fn count_low_stock(&self) -> AppResult<u64> {
        inventory::Entity::find()
            .filter(low_stock_condition())
            .count(&self.db)
            .await
            .map_err(Into::into)
    }
}
