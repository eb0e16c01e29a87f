//! Equipment service - equipment and category use cases.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::{Equipment, EquipmentCategory, NewEquipment, UpdateEquipment};
use crate::errors::{AppError, AppResult};
use crate::infra::UnitOfWork;
use crate::types::PaginationParams;

/// Equipment service trait for dependency injection.
#[async_trait]
pub trait EquipmentService: Send + Sync {
    async fn list_categories(&self) -> AppResult<Vec<EquipmentCategory>>;
    async fn get_category(&self, id: Uuid) -> AppResult<EquipmentCategory>;
    async fn create_category(&self, name: String) -> AppResult<EquipmentCategory>;
    async fn update_category(&self, id: Uuid, name: String) -> AppResult<EquipmentCategory>;
    async fn delete_category(&self, id: Uuid) -> AppResult<()>;

    async fn get_equipment(&self, id: Uuid) -> AppResult<Equipment>;
    async fn list_equipment(
        &self,
        params: &PaginationParams,
        category_id: Option<Uuid>,
    ) -> AppResult<(Vec<Equipment>, u64)>;
    async fn create_equipment(&self, data: NewEquipment) -> AppResult<Equipment>;
    async fn update_equipment(&self, id: Uuid, data: UpdateEquipment) -> AppResult<Equipment>;
    async fn delete_equipment(&self, id: Uuid) -> AppResult<()>;
}

/// Concrete implementation of EquipmentService using Unit of Work.
pub struct EquipmentManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> EquipmentManager<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }

    /// Reject writes that reference a category that does not exist.
    async fn ensure_category_exists(&self, category_id: Uuid) -> AppResult<()> {
        self.uow
            .equipment()
            .find_category(category_id)
            .await?
            .map(|_| ())
            .ok_or_else(|| AppError::bad_request("Unknown equipment category"))
    }
}

#[async_trait]
impl<U: UnitOfWork> EquipmentService for EquipmentManager<U> {
    async fn list_categories(&self) -> AppResult<Vec<EquipmentCategory>> {
        self.uow.equipment().list_categories().await
    }

    async fn get_category(&self, id: Uuid) -> AppResult<EquipmentCategory> {
        self.uow
            .equipment()
            .find_category(id)
            .await?
            .ok_or(AppError::NotFound)
    }

    async fn create_category(&self, name: String) -> AppResult<EquipmentCategory> {
        self.uow.equipment().create_category(name).await
    }

    async fn update_category(&self, id: Uuid, name: String) -> AppResult<EquipmentCategory> {
        self.uow.equipment().update_category(id, name).await
    }

    async fn delete_category(&self, id: Uuid) -> AppResult<()> {
        self.uow.equipment().delete_category(id).await
    }

    async fn get_equipment(&self, id: Uuid) -> AppResult<Equipment> {
        self.uow
            .equipment()
            .find_by_id(id)
            .await?
            .ok_or(AppError::NotFound)
    }

    async fn list_equipment(
        &self,
        params: &PaginationParams,
        category_id: Option<Uuid>,
    ) -> AppResult<(Vec<Equipment>, u64)> {
        self.uow.equipment().list(params, category_id).await
    }

    async fn create_equipment(&self, data: NewEquipment) -> AppResult<Equipment> {
        self.ensure_category_exists(data.category_id).await?;
        self.uow.equipment().create(data).await
    }

    async fn update_equipment(&self, id: Uuid, data: UpdateEquipment) -> AppResult<Equipment> {
        if let Some(category_id) = data.category_id {
            self.ensure_category_exists(category_id).await?;
        }
        self.uow.equipment().update(id, data).await
    }

    async fn delete_equipment(&self, id: Uuid) -> AppResult<()> {
        self.uow.equipment().delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::test_support::{SharedTestUow, TestUnitOfWork};
    use chrono::Utc;
    use mockall::predicate::eq;

    fn category(id: Uuid) -> EquipmentCategory {
        EquipmentCategory {
            id,
            name: "Cranes".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn new_equipment(category_id: Uuid) -> NewEquipment {
        NewEquipment {
            code: "CR-001".to_string(),
            name: "Gantry crane".to_string(),
            category_id,
            manufacturer: None,
            model: None,
            location: None,
        }
    }

    #[tokio::test]
    async fn test_get_category_not_found() {
        let mut uow = TestUnitOfWork::default();
        uow.equipment.expect_find_category().returning(|_| Ok(None));

        let service = EquipmentManager::new(Arc::new(SharedTestUow::from(uow)));
        let result = service.get_category(Uuid::new_v4()).await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound));
    }

    #[tokio::test]
    async fn test_create_equipment_rejects_unknown_category() {
        let category_id = Uuid::new_v4();

        let mut uow = TestUnitOfWork::default();
        uow.equipment
            .expect_find_category()
            .with(eq(category_id))
            .returning(|_| Ok(None));

        let service = EquipmentManager::new(Arc::new(SharedTestUow::from(uow)));
        let result = service.create_equipment(new_equipment(category_id)).await;

        assert!(matches!(result.unwrap_err(), AppError::BadRequest(_)));
    }

    #[tokio::test]
    async fn test_create_equipment_with_known_category() {
        let category_id = Uuid::new_v4();

        let mut uow = TestUnitOfWork::default();
        uow.equipment
            .expect_find_category()
            .with(eq(category_id))
            .returning(move |id| Ok(Some(category(id))));
        uow.equipment.expect_create().returning(|data| {
            Ok(Equipment {
                id: Uuid::new_v4(),
                code: data.code,
                name: data.name,
                category_id: data.category_id,
                manufacturer: data.manufacturer,
                model: data.model,
                location: data.location,
                created_at: Utc::now(),
                updated_at: Utc::now(),
            })
        });

        let service = EquipmentManager::new(Arc::new(SharedTestUow::from(uow)));
        let result = service.create_equipment(new_equipment(category_id)).await;

        assert_eq!(result.unwrap().code, "CR-001");
    }
}
