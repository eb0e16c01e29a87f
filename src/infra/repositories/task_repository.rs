//! Maintenance task repository.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};
use uuid::Uuid;

#[cfg(test)]
use mockall::automock;

use super::entities::task;
use crate::domain::{NewTask, Task, UpdateTask};
use crate::errors::{AppError, AppResult};
use crate::types::PaginationParams;

/// Repository for defined maintenance tasks.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait TaskRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Task>>;
    async fn list(
        &self,
        params: &PaginationParams,
        equipment_id: Option<Uuid>,
    ) -> AppResult<(Vec<Task>, u64)>;
    async fn create(&self, data: NewTask) -> AppResult<Task>;
    async fn update(&self, id: Uuid, data: UpdateTask) -> AppResult<Task>;
    async fn delete(&self, id: Uuid) -> AppResult<()>;
}

/// SeaORM-backed implementation of [`TaskRepository`].
pub struct TaskStore {
    db: DatabaseConnection,
}

impl TaskStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TaskRepository for TaskStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Task>> {
        let model = task::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(Task::from))
    }

    async fn list(
        &self,
        params: &PaginationParams,
        equipment_id: Option<Uuid>,
    ) -> AppResult<(Vec<Task>, u64)> {
        let mut select = task::Entity::find().order_by_asc(task::Column::TaskId);
        if let Some(equipment_id) = equipment_id {
            select = select.filter(task::Column::EquipmentId.eq(equipment_id));
        }

        let paginator = select.paginate(&self.db, params.limit());
        let total = paginator.num_items().await?;
        let models = paginator.fetch_page(params.page.saturating_sub(1)).await?;

        Ok((models.into_iter().map(Task::from).collect(), total))
    }

    async fn create(&self, data: NewTask) -> AppResult<Task> {
        let now = Utc::now();
        let active = task::ActiveModel {
            id: Set(Uuid::new_v4()),
            task_id: Set(data.task_id),
            equipment_id: Set(data.equipment_id),
            description: Set(data.description),
            frequency: Set(data.frequency.to_string()),
            planned_hours: Set(data.planned_hours),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let model = active
            .insert(&self.db)
            .await
            .map_err(|e| AppError::unique_conflict(e, "Task id"))?;

        Ok(Task::from(model))
    }

    async fn update(&self, id: Uuid, data: UpdateTask) -> AppResult<Task> {
        let model = task::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound)?;

        let mut active: task::ActiveModel = model.into();
        if let Some(task_id) = data.task_id {
            active.task_id = Set(task_id);
        }
        if let Some(description) = data.description {
            active.description = Set(description);
        }
        if let Some(frequency) = data.frequency {
            active.frequency = Set(frequency.to_string());
        }
        if let Some(planned_hours) = data.planned_hours {
            active.planned_hours = Set(planned_hours);
        }
        active.updated_at = Set(Utc::now());

        let model = active
            .update(&self.db)
            .await
            .map_err(|e| AppError::unique_conflict(e, "Task id"))?;

        Ok(Task::from(model))
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = task::Entity::delete_by_id(id).exec(&self.db).await?;
        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }
        Ok(())
    }
}
