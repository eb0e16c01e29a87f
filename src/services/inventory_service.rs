//! Inventory service - spare-part stock use cases.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::{InventoryItem, NewInventoryItem, UpdateInventoryItem};
use crate::errors::{AppError, AppResult};
use crate::infra::UnitOfWork;
use crate::types::PaginationParams;

/// Inventory service trait for dependency injection.
#[async_trait]
pub trait InventoryService: Send + Sync {
    async fn get_item(&self, id: Uuid) -> AppResult<InventoryItem>;
    async fn list_items(
        &self,
        params: &PaginationParams,
        low_stock_only: bool,
    ) -> AppResult<(Vec<InventoryItem>, u64)>;
    async fn create_item(&self, data: NewInventoryItem) -> AppResult<InventoryItem>;
    async fn update_item(&self, id: Uuid, data: UpdateInventoryItem) -> AppResult<InventoryItem>;
    /// Apply a relative stock adjustment (positive or negative).
    async fn adjust_quantity(&self, id: Uuid, delta: i32) -> AppResult<InventoryItem>;
    async fn delete_item(&self, id: Uuid) -> AppResult<()>;
}

/// Concrete implementation of InventoryService using Unit of Work.
pub struct InventoryManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> InventoryManager<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> InventoryService for InventoryManager<U> {
    async fn get_item(&self, id: Uuid) -> AppResult<InventoryItem> {
        self.uow
            .inventory()
            .find_by_id(id)
            .await?
            .ok_or(AppError::NotFound)
    }

    async fn list_items(
        &self,
        params: &PaginationParams,
        low_stock_only: bool,
    ) -> AppResult<(Vec<InventoryItem>, u64)> {
        self.uow.inventory().list(params, low_stock_only).await
    }

    async fn create_item(&self, data: NewInventoryItem) -> AppResult<InventoryItem> {
        if data.quantity < 0 || data.min_quantity < 0 {
            return Err(AppError::bad_request("Quantities may not be negative"));
        }
        self.uow.inventory().create(data).await
    }

    async fn update_item(&self, id: Uuid, data: UpdateInventoryItem) -> AppResult<InventoryItem> {
        self.uow.inventory().update(id, data).await
    }

    async fn adjust_quantity(&self, id: Uuid, delta: i32) -> AppResult<InventoryItem> {
        self.uow.inventory().adjust_quantity(id, delta).await
    }

    async fn delete_item(&self, id: Uuid) -> AppResult<()> {
        self.uow.inventory().delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::test_support::{SharedTestUow, TestUnitOfWork};
    use chrono::Utc;
    use mockall::predicate::eq;

    fn item(id: Uuid, quantity: i32) -> InventoryItem {
        InventoryItem {
            id,
            name: "Cutting tip".to_string(),
            part_number: None,
            quantity,
            unit: "pcs".to_string(),
            min_quantity: 5,
            location: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_create_item_rejects_negative_quantity() {
        let uow = TestUnitOfWork::default();
        let service = InventoryManager::new(Arc::new(SharedTestUow::from(uow)));

        let result = service
            .create_item(NewInventoryItem {
                name: "Cutting tip".to_string(),
                part_number: None,
                quantity: -1,
                unit: "pcs".to_string(),
                min_quantity: 0,
                location: None,
            })
            .await;

        assert!(matches!(result.unwrap_err(), AppError::BadRequest(_)));
    }

    #[tokio::test]
    async fn test_adjust_quantity_delegates() {
        let item_id = Uuid::new_v4();

        let mut uow = TestUnitOfWork::default();
        uow.inventory
            .expect_adjust_quantity()
            .with(eq(item_id), eq(-3))
            .returning(|id, _| Ok(item(id, 7)));

        let service = InventoryManager::new(Arc::new(SharedTestUow::from(uow)));
        let result = service.adjust_quantity(item_id, -3).await.unwrap();

        assert_eq!(result.quantity, 7);
    }
}
