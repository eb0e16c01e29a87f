//! Task service - defined maintenance task use cases.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::{NewTask, Task, UpdateTask};
use crate::errors::{AppError, AppResult};
use crate::infra::UnitOfWork;
use crate::types::PaginationParams;

/// Task service trait for dependency injection.
#[async_trait]
pub trait TaskService: Send + Sync {
    async fn get_task(&self, id: Uuid) -> AppResult<Task>;
    async fn list_tasks(
        &self,
        params: &PaginationParams,
        equipment_id: Option<Uuid>,
    ) -> AppResult<(Vec<Task>, u64)>;
    async fn create_task(&self, data: NewTask) -> AppResult<Task>;
    async fn update_task(&self, id: Uuid, data: UpdateTask) -> AppResult<Task>;
    async fn delete_task(&self, id: Uuid) -> AppResult<()>;
}

/// Concrete implementation of TaskService using Unit of Work.
pub struct TaskManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> TaskManager<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> TaskService for TaskManager<U> {
    async fn get_task(&self, id: Uuid) -> AppResult<Task> {
        self.uow.tasks().find_by_id(id).await?.ok_or(AppError::NotFound)
    }

    async fn list_tasks(
        &self,
        params: &PaginationParams,
        equipment_id: Option<Uuid>,
    ) -> AppResult<(Vec<Task>, u64)> {
        self.uow.tasks().list(params, equipment_id).await
    }

    async fn create_task(&self, data: NewTask) -> AppResult<Task> {
        self.uow
            .equipment()
            .find_by_id(data.equipment_id)
            .await?
            .ok_or_else(|| AppError::bad_request("Unknown equipment"))?;

        self.uow.tasks().create(data).await
    }

    async fn update_task(&self, id: Uuid, data: UpdateTask) -> AppResult<Task> {
        self.uow.tasks().update(id, data).await
    }

    async fn delete_task(&self, id: Uuid) -> AppResult<()> {
        self.uow.tasks().delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Frequency;
    use crate::infra::test_support::{SharedTestUow, TestUnitOfWork};
    use chrono::Utc;

    #[tokio::test]
    async fn test_get_task_not_found() {
        let mut uow = TestUnitOfWork::default();
        uow.tasks.expect_find_by_id().returning(|_| Ok(None));

        let service = TaskManager::new(Arc::new(SharedTestUow::from(uow)));
        let result = service.get_task(Uuid::new_v4()).await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound));
    }

    #[tokio::test]
    async fn test_list_tasks_passes_filter() {
        let equipment_id = Uuid::new_v4();

        let mut uow = TestUnitOfWork::default();
        uow.tasks.expect_list().returning(move |_, filter| {
            assert_eq!(filter, Some(equipment_id));
            Ok((
                vec![Task {
                    id: Uuid::new_v4(),
                    task_id: "T-0001".to_string(),
                    equipment_id: filter.unwrap(),
                    description: "Check oil level".to_string(),
                    frequency: Frequency::Weekly,
                    planned_hours: 1,
                    created_at: Utc::now(),
                    updated_at: Utc::now(),
                }],
                1,
            ))
        });

        let service = TaskManager::new(Arc::new(SharedTestUow::from(uow)));
        let (tasks, total) = service
            .list_tasks(&PaginationParams::default(), Some(equipment_id))
            .await
            .unwrap();

        assert_eq!(tasks.len(), 1);
        assert_eq!(total, 1);
    }
}
