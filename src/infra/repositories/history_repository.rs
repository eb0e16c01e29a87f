//! Maintenance history repository.

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};
use uuid::Uuid;

#[cfg(test)]
use mockall::automock;

use super::entities::history;
use crate::domain::{HistoryFilter, MaintenanceHistory, MaintenanceKind, NewHistory};
use crate::errors::{AppError, AppResult};
use crate::types::PaginationParams;

/// Repository for performed-maintenance records.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait HistoryRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<MaintenanceHistory>>;
    async fn list(
        &self,
        params: &PaginationParams,
        filter: &HistoryFilter,
    ) -> AppResult<(Vec<MaintenanceHistory>, u64)>;
    async fn list_for_equipment(&self, equipment_id: Uuid) -> AppResult<Vec<MaintenanceHistory>>;
    async fn list_between(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> AppResult<Vec<MaintenanceHistory>>;
    async fn create(&self, data: NewHistory) -> AppResult<MaintenanceHistory>;
    async fn delete(&self, id: Uuid) -> AppResult<()>;
    async fn count_by_kind(&self, kind: MaintenanceKind) -> AppResult<u64>;
}

/// SeaORM-backed implementation of [`HistoryRepository`].
pub struct HistoryStore {
    db: DatabaseConnection,
}

impl HistoryStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl HistoryRepository for HistoryStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<MaintenanceHistory>> {
        let model = history::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(MaintenanceHistory::from))
    }

    async fn list(
        &self,
        params: &PaginationParams,
        filter: &HistoryFilter,
    ) -> AppResult<(Vec<MaintenanceHistory>, u64)> {
        let mut select = history::Entity::find().order_by_desc(history::Column::DatePerformed);
        if let Some(equipment_id) = filter.equipment_id {
            select = select.filter(history::Column::EquipmentId.eq(equipment_id));
        }
        if let Some(kind) = filter.kind {
            select = select.filter(history::Column::Kind.eq(kind.to_string()));
        }

        let paginator = select.paginate(&self.db, params.limit());
        let total = paginator.num_items().await?;
        let models = paginator.fetch_page(params.page.saturating_sub(1)).await?;

        Ok((
            models.into_iter().map(MaintenanceHistory::from).collect(),
            total,
        ))
    }

    async fn list_for_equipment(&self, equipment_id: Uuid) -> AppResult<Vec<MaintenanceHistory>> {
        let models = history::Entity::find()
            .filter(history::Column::EquipmentId.eq(equipment_id))
            .order_by_desc(history::Column::DatePerformed)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(MaintenanceHistory::from).collect())
    }

    async fn list_between(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> AppResult<Vec<MaintenanceHistory>> {
        let models = history::Entity::find()
            .filter(history::Column::DatePerformed.gte(from))
            .filter(history::Column::DatePerformed.lte(to))
            .order_by_asc(history::Column::DatePerformed)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(MaintenanceHistory::from).collect())
    }

    async fn create(&self, data: NewHistory) -> AppResult<MaintenanceHistory> {
        let active = history::ActiveModel {
            id: Set(Uuid::new_v4()),
            equipment_id: Set(data.equipment_id),
            task_id: Set(data.task_id),
            kind: Set(data.kind.to_string()),
            description: Set(data.description),
            date_performed: Set(data.date_performed),
            hours_spent: Set(data.hours_spent),
            performed_by: Set(data.performed_by),
            created_at: Set(Utc::now()),
        };

        let model = active.insert(&self.db).await?;
        Ok(MaintenanceHistory::from(model))
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = history::Entity::delete_by_id(id).exec(&self.db).await?;
        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }
        Ok(())
    }

    async fn count_by_kind(&self, kind: MaintenanceKind) -> AppResult<u64> {
        history::Entity::find()
            .filter(history::Column::Kind.eq(kind.to_string()))
            .count(&self.db)
            .await
            .map_err(Into::into)
    }
}
