//! Equipment and category repository.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};
use uuid::Uuid;

#[cfg(test)]
use mockall::automock;

use super::entities::{category, equipment};
use crate::domain::{Equipment, EquipmentCategory, NewEquipment, UpdateEquipment};
use crate::errors::{AppError, AppResult};
use crate::types::PaginationParams;

/// Repository for equipment and its categories.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait EquipmentRepository: Send + Sync {
    // Categories
    async fn list_categories(&self) -> AppResult<Vec<EquipmentCategory>>;
    async fn find_category(&self, id: Uuid) -> AppResult<Option<EquipmentCategory>>;
    async fn create_category(&self, name: String) -> AppResult<EquipmentCategory>;
    async fn update_category(&self, id: Uuid, name: String) -> AppResult<EquipmentCategory>;
    /// Fails with a client error while equipment still references the category.
    async fn delete_category(&self, id: Uuid) -> AppResult<()>;

    // Equipment
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Equipment>>;
    async fn list(
        &self,
        params: &PaginationParams,
        category_id: Option<Uuid>,
    ) -> AppResult<(Vec<Equipment>, u64)>;
    async fn create(&self, data: NewEquipment) -> AppResult<Equipment>;
    async fn update(&self, id: Uuid, data: UpdateEquipment) -> AppResult<Equipment>;
    async fn delete(&self, id: Uuid) -> AppResult<()>;
    async fn count(&self) -> AppResult<u64>;
}

/// SeaORM-backed implementation of [`EquipmentRepository`].
pub struct EquipmentStore {
    db: DatabaseConnection,
}

impl EquipmentStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl EquipmentRepository for EquipmentStore {
    async fn list_categories(&self) -> AppResult<Vec<EquipmentCategory>> {
        let models = category::Entity::find()
            .order_by_asc(category::Column::Name)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(EquipmentCategory::from).collect())
    }

    async fn find_category(&self, id: Uuid) -> AppResult<Option<EquipmentCategory>> {
        let model = category::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(EquipmentCategory::from))
    }

    async fn create_category(&self, name: String) -> AppResult<EquipmentCategory> {
        let now = Utc::now();
        let active = category::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(name),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let model = active
            .insert(&self.db)
            .await
            .map_err(|e| AppError::unique_conflict(e, "Category"))?;

        Ok(EquipmentCategory::from(model))
    }

    async fn update_category(&self, id: Uuid, name: String) -> AppResult<EquipmentCategory> {
        let model = category::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound)?;

        let mut active: category::ActiveModel = model.into();
        active.name = Set(name);
        active.updated_at = Set(Utc::now());

        let model = active
            .update(&self.db)
            .await
            .map_err(|e| AppError::unique_conflict(e, "Category"))?;

        Ok(EquipmentCategory::from(model))
    }

    async fn delete_category(&self, id: Uuid) -> AppResult<()> {
        let result = category::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| AppError::referenced_conflict(e, "Category"))?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Equipment>> {
        let model = equipment::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(Equipment::from))
    }

    async fn list(
        &self,
        params: &PaginationParams,
        category_id: Option<Uuid>,
    ) -> AppResult<(Vec<Equipment>, u64)> {
        let mut select = equipment::Entity::find().order_by_asc(equipment::Column::Code);
        if let Some(category_id) = category_id {
            select = select.filter(equipment::Column::CategoryId.eq(category_id));
        }

        let paginator = select.paginate(&self.db, params.limit());
        let total = paginator.num_items().await?;
        let models = paginator.fetch_page(params.page.saturating_sub(1)).await?;

        Ok((models.into_iter().map(Equipment::from).collect(), total))
    }

    async fn create(&self, data: NewEquipment) -> AppResult<Equipment> {
        let now = Utc::now();
        let active = equipment::ActiveModel {
            id: Set(Uuid::new_v4()),
            code: Set(data.code),
            name: Set(data.name),
            category_id: Set(data.category_id),
            manufacturer: Set(data.manufacturer),
            model: Set(data.model),
            location: Set(data.location),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let model = active
            .insert(&self.db)
            .await
            .map_err(|e| AppError::unique_conflict(e, "Equipment code"))?;

        Ok(Equipment::from(model))
    }

    async fn update(&self, id: Uuid, data: UpdateEquipment) -> AppResult<Equipment> {
        let model = equipment::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound)?;

        let mut active: equipment::ActiveModel = model.into();
        if let Some(code) = data.code {
            active.code = Set(code);
        }
        if let Some(name) = data.name {
            active.name = Set(name);
        }
        if let Some(category_id) = data.category_id {
            active.category_id = Set(category_id);
        }
        if let Some(manufacturer) = data.manufacturer {
            active.manufacturer = Set(Some(manufacturer));
        }
        if let Some(model_name) = data.model {
            active.model = Set(Some(model_name));
        }
        if let Some(location) = data.location {
            active.location = Set(Some(location));
        }
        active.updated_at = Set(Utc::now());

        let model = active
            .update(&self.db)
            .await
            .map_err(|e| AppError::unique_conflict(e, "Equipment code"))?;

        Ok(Equipment::from(model))
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = equipment::Entity::delete_by_id(id).exec(&self.db).await?;
        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }
        Ok(())
    }

    async fn count(&self) -> AppResult<u64> {
        equipment::Entity::find()
            .count(&self.db)
            .await
            .map_err(Into::into)
    }
}
