//! History service - performed-maintenance record use cases.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::{HistoryFilter, MaintenanceHistory, NewHistory};
use crate::errors::{AppError, AppResult};
use crate::infra::UnitOfWork;
use crate::types::PaginationParams;

/// History service trait for dependency injection.
#[async_trait]
pub trait HistoryService: Send + Sync {
    async fn get_entry(&self, id: Uuid) -> AppResult<MaintenanceHistory>;
    async fn list_entries(
        &self,
        params: &PaginationParams,
        filter: HistoryFilter,
    ) -> AppResult<(Vec<MaintenanceHistory>, u64)>;
    async fn list_for_equipment(&self, equipment_id: Uuid) -> AppResult<Vec<MaintenanceHistory>>;
    /// Record an ad-hoc maintenance entry (typically corrective).
    async fn record_entry(&self, data: NewHistory) -> AppResult<MaintenanceHistory>;
    async fn delete_entry(&self, id: Uuid) -> AppResult<()>;
}

/// Concrete implementation of HistoryService using Unit of Work.
pub struct HistoryManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> HistoryManager<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> HistoryService for HistoryManager<U> {
    async fn get_entry(&self, id: Uuid) -> AppResult<MaintenanceHistory> {
        self.uow
            .history()
            .find_by_id(id)
            .await?
            .ok_or(AppError::NotFound)
    }

    async fn list_entries(
        &self,
        params: &PaginationParams,
        filter: HistoryFilter,
    ) -> AppResult<(Vec<MaintenanceHistory>, u64)> {
        self.uow.history().list(params, &filter).await
    }

    async fn list_for_equipment(&self, equipment_id: Uuid) -> AppResult<Vec<MaintenanceHistory>> {
        self.uow.history().list_for_equipment(equipment_id).await
    }

    async fn record_entry(&self, data: NewHistory) -> AppResult<MaintenanceHistory> {
        self.uow
            .equipment()
            .find_by_id(data.equipment_id)
            .await?
            .ok_or_else(|| AppError::bad_request("Unknown equipment"))?;

        if let Some(task_id) = data.task_id {
            self.uow
                .tasks()
                .find_by_id(task_id)
                .await?
                .ok_or_else(|| AppError::bad_request("Unknown task"))?;
        }

        if data.hours_spent < 0 {
            return Err(AppError::bad_request("Hours spent may not be negative"));
        }

        self.uow.history().create(data).await
    }

    async fn delete_entry(&self, id: Uuid) -> AppResult<()> {
        self.uow.history().delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Equipment, MaintenanceKind};
    use crate::infra::test_support::{SharedTestUow, TestUnitOfWork};
    use chrono::{NaiveDate, Utc};

    fn equipment(id: Uuid) -> Equipment {
        Equipment {
            id,
            code: "WN-003".to_string(),
            name: "Mooring winch".to_string(),
            category_id: Uuid::new_v4(),
            manufacturer: None,
            model: None,
            location: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn new_entry(equipment_id: Uuid, hours_spent: i32) -> NewHistory {
        NewHistory {
            equipment_id,
            task_id: None,
            kind: MaintenanceKind::Corrective,
            description: "Replaced burst hydraulic hose".to_string(),
            date_performed: NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
            hours_spent,
            performed_by: Some("Asha Rahman".to_string()),
        }
    }

    #[tokio::test]
    async fn test_record_entry_rejects_unknown_equipment() {
        let mut uow = TestUnitOfWork::default();
        uow.equipment.expect_find_by_id().returning(|_| Ok(None));

        let service = HistoryManager::new(Arc::new(SharedTestUow::from(uow)));
        let result = service.record_entry(new_entry(Uuid::new_v4(), 2)).await;

        assert!(matches!(result.unwrap_err(), AppError::BadRequest(_)));
    }

    #[tokio::test]
    async fn test_record_entry_rejects_unknown_task() {
        let mut uow = TestUnitOfWork::default();
        uow.equipment
            .expect_find_by_id()
            .returning(|id| Ok(Some(equipment(id))));
        uow.tasks.expect_find_by_id().returning(|_| Ok(None));

        let service = HistoryManager::new(Arc::new(SharedTestUow::from(uow)));

        let mut entry = new_entry(Uuid::new_v4(), 2);
        entry.task_id = Some(Uuid::new_v4());
        let result = service.record_entry(entry).await;

        assert!(matches!(result.unwrap_err(), AppError::BadRequest(_)));
    }

    #[tokio::test]
    async fn test_record_entry_rejects_negative_hours() {
        let mut uow = TestUnitOfWork::default();
        uow.equipment
            .expect_find_by_id()
            .returning(|id| Ok(Some(equipment(id))));

        let service = HistoryManager::new(Arc::new(SharedTestUow::from(uow)));
        let result = service.record_entry(new_entry(Uuid::new_v4(), -3)).await;

        assert!(matches!(result.unwrap_err(), AppError::BadRequest(_)));
    }

    #[tokio::test]
    async fn test_record_entry_success() {
        let mut uow = TestUnitOfWork::default();
        uow.equipment
            .expect_find_by_id()
            .returning(|id| Ok(Some(equipment(id))));
        uow.history.expect_create().returning(|data| {
            Ok(MaintenanceHistory {
                id: Uuid::new_v4(),
                equipment_id: data.equipment_id,
                task_id: data.task_id,
                kind: data.kind,
                description: data.description,
                date_performed: data.date_performed,
                hours_spent: data.hours_spent,
                performed_by: data.performed_by,
                created_at: Utc::now(),
            })
        });

        let service = HistoryManager::new(Arc::new(SharedTestUow::from(uow)));
        let entry = service
            .record_entry(new_entry(Uuid::new_v4(), 2))
            .await
            .unwrap();

        assert_eq!(entry.kind, MaintenanceKind::Corrective);
        assert_eq!(entry.hours_spent, 2);
    }
}
