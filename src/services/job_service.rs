//! Job service - scheduled maintenance use cases.
//!
//! All derived fields flow through `domain::schedule`; completing a job
//! records a history entry and rolls the schedule forward atomically.

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::{Job, JobFilter, MaintenanceKind, NewHistory, NewJob, UpdateJob};
use crate::errors::{AppError, AppResult};
use crate::infra::UnitOfWork;
use crate::types::PaginationParams;

/// Input for the complete-job workflow.
#[derive(Debug, Clone)]
pub struct CompleteJob {
    pub completed_on: NaiveDate,
    pub hours_spent: i32,
    pub performed_by: Option<String>,
    pub notes: Option<String>,
}

/// Job service trait for dependency injection.
#[async_trait]
pub trait JobService: Send + Sync {
    async fn get_job(&self, id: Uuid) -> AppResult<Job>;
    async fn list_jobs(
        &self,
        params: &PaginationParams,
        filter: JobFilter,
    ) -> AppResult<(Vec<Job>, u64)>;
    async fn list_for_equipment(&self, equipment_id: Uuid) -> AppResult<Vec<Job>>;
    async fn create_job(&self, data: NewJob) -> AppResult<Job>;
    async fn update_job(&self, id: Uuid, data: UpdateJob) -> AppResult<Job>;
    async fn delete_job(&self, id: Uuid) -> AppResult<()>;

    /// Record a history entry for the job and roll its schedule forward,
    /// in one transaction.
    async fn complete_job(&self, id: Uuid, completion: CompleteJob) -> AppResult<Job>;
}

/// Concrete implementation of JobService using Unit of Work.
pub struct JobManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> JobManager<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }

    async fn ensure_equipment_exists(&self, equipment_id: Uuid) -> AppResult<()> {
        self.uow
            .equipment()
            .find_by_id(equipment_id)
            .await?
            .map(|_| ())
            .ok_or_else(|| AppError::bad_request("Unknown equipment"))
    }
}

#[async_trait]
impl<U: UnitOfWork> JobService for JobManager<U> {
    async fn get_job(&self, id: Uuid) -> AppResult<Job> {
        self.uow.jobs().find_by_id(id).await?.ok_or(AppError::NotFound)
    }

    async fn list_jobs(
        &self,
        params: &PaginationParams,
        filter: JobFilter,
    ) -> AppResult<(Vec<Job>, u64)> {
        self.uow.jobs().list(params, &filter).await
    }

    async fn list_for_equipment(&self, equipment_id: Uuid) -> AppResult<Vec<Job>> {
        self.uow.jobs().list_for_equipment(equipment_id).await
    }

    async fn create_job(&self, data: NewJob) -> AppResult<Job> {
        self.ensure_equipment_exists(data.equipment_id).await?;
        let today = Utc::now().date_naive();
        self.uow.jobs().create(data, today).await
    }

    async fn update_job(&self, id: Uuid, data: UpdateJob) -> AppResult<Job> {
        let today = Utc::now().date_naive();
        self.uow.jobs().update(id, data, today).await
    }

    async fn delete_job(&self, id: Uuid) -> AppResult<()> {
        self.uow.jobs().delete(id).await
    }

    async fn complete_job(&self, id: Uuid, completion: CompleteJob) -> AppResult<Job> {
        if completion.hours_spent < 0 {
            return Err(AppError::bad_request("Hours spent may not be negative"));
        }

        self.uow
            .transaction(move |ctx| {
                Box::pin(async move {
                    let job = ctx.jobs().find_by_id(id).await?.ok_or(AppError::NotFound)?;

                    let description = match completion.notes {
                        Some(notes) => format!("{} - {}", job.title, notes),
                        None => job.title.clone(),
                    };
                    ctx.history()
                        .create(NewHistory {
                            equipment_id: job.equipment_id,
                            task_id: None,
                            kind: MaintenanceKind::Scheduled,
                            description,
                            date_performed: completion.completed_on,
                            hours_spent: completion.hours_spent,
                            performed_by: completion.performed_by,
                        })
                        .await?;

                    ctx.jobs().roll_forward(id, completion.completed_on).await
                })
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Criticality, Frequency};
    use crate::infra::test_support::{SharedTestUow, TestUnitOfWork};
    use mockall::predicate::eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample_job(id: Uuid) -> Job {
        Job {
            id,
            equipment_id: Uuid::new_v4(),
            title: "Grease wire ropes".to_string(),
            description: None,
            frequency: Frequency::Weekly,
            criticality: Criticality::High,
            date_done: date(2024, 1, 1),
            date_due: date(2024, 1, 8),
            planned_hours: 4,
            hours_worked: 0,
            remaining_hours: 4,
            overdue_days: 0,
            assigned_to: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_get_job_success() {
        let job_id = Uuid::new_v4();

        let mut uow = TestUnitOfWork::default();
        uow.jobs
            .expect_find_by_id()
            .with(eq(job_id))
            .returning(|id| Ok(Some(sample_job(id))));

        let service = JobManager::new(Arc::new(SharedTestUow::from(uow)));
        let result = service.get_job(job_id).await;

        assert_eq!(result.unwrap().id, job_id);
    }

    #[tokio::test]
    async fn test_get_job_not_found() {
        let mut uow = TestUnitOfWork::default();
        uow.jobs.expect_find_by_id().returning(|_| Ok(None));

        let service = JobManager::new(Arc::new(SharedTestUow::from(uow)));
        let result = service.get_job(Uuid::new_v4()).await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound));
    }

    #[tokio::test]
    async fn test_create_job_rejects_unknown_equipment() {
        let mut uow = TestUnitOfWork::default();
        uow.equipment.expect_find_by_id().returning(|_| Ok(None));

        let service = JobManager::new(Arc::new(SharedTestUow::from(uow)));
        let result = service
            .create_job(NewJob {
                equipment_id: Uuid::new_v4(),
                title: "Inspect slings".to_string(),
                description: None,
                frequency: Frequency::Monthly,
                criticality: Criticality::Low,
                date_done: date(2024, 1, 1),
                planned_hours: 2,
                hours_worked: 0,
                assigned_to: None,
            })
            .await;

        assert!(matches!(result.unwrap_err(), AppError::BadRequest(_)));
    }

    #[tokio::test]
    async fn test_complete_job_rejects_negative_hours() {
        let uow = TestUnitOfWork::default();
        let service = JobManager::new(Arc::new(SharedTestUow::from(uow)));

        let result = service
            .complete_job(
                Uuid::new_v4(),
                CompleteJob {
                    completed_on: date(2024, 2, 1),
                    hours_spent: -1,
                    performed_by: None,
                    notes: None,
                },
            )
            .await;

        assert!(matches!(result.unwrap_err(), AppError::BadRequest(_)));
    }
}
