//! Scheduled job repository.
//!
//! Every write path recomputes the derived fields (`date_due`,
//! `overdue_days`, `remaining_hours`) through [`schedule::derive`].

use async_trait::async_trait;
use chrono::{Duration, NaiveDate, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};
use uuid::Uuid;

#[cfg(test)]
use mockall::automock;

use super::entities::job;
use crate::domain::{schedule, Job, JobFilter, NewJob, UpdateJob};
use crate::errors::{AppError, AppResult};
use crate::types::PaginationParams;

/// Repository for scheduled maintenance jobs.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait JobRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Job>>;
    async fn list(&self, params: &PaginationParams, filter: &JobFilter)
        -> AppResult<(Vec<Job>, u64)>;
    async fn list_for_equipment(&self, equipment_id: Uuid) -> AppResult<Vec<Job>>;
    async fn list_due_between(&self, from: NaiveDate, to: NaiveDate) -> AppResult<Vec<Job>>;
    async fn create(&self, data: NewJob, today: NaiveDate) -> AppResult<Job>;
    async fn update(&self, id: Uuid, data: UpdateJob, today: NaiveDate) -> AppResult<Job>;
    async fn delete(&self, id: Uuid) -> AppResult<()>;
    async fn count(&self) -> AppResult<u64>;
    async fn count_overdue(&self, today: NaiveDate) -> AppResult<u64>;
    async fn count_due_within(&self, today: NaiveDate, days: i64) -> AppResult<u64>;
}

/// SeaORM-backed implementation of [`JobRepository`].
pub struct JobStore {
    db: DatabaseConnection,
}

impl JobStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl JobRepository for JobStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Job>> {
        let model = job::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(Job::from))
    }

    async fn list(
        &self,
        params: &PaginationParams,
        filter: &JobFilter,
    ) -> AppResult<(Vec<Job>, u64)> {
        let mut select = job::Entity::find().order_by_asc(job::Column::DateDue);
        if let Some(equipment_id) = filter.equipment_id {
            select = select.filter(job::Column::EquipmentId.eq(equipment_id));
        }
        if let Some(criticality) = filter.criticality {
            select = select.filter(job::Column::Criticality.eq(criticality.to_string()));
        }
        if let Some(today) = filter.overdue_before {
            select = select.filter(job::Column::DateDue.lt(today));
        }

        let paginator = select.paginate(&self.db, params.limit());
        let total = paginator.num_items().await?;
        let models = paginator.fetch_page(params.page.saturating_sub(1)).await?;

        Ok((models.into_iter().map(Job::from).collect(), total))
    }

    async fn list_for_equipment(&self, equipment_id: Uuid) -> AppResult<Vec<Job>> {
        let models = job::Entity::find()
            .filter(job::Column::EquipmentId.eq(equipment_id))
            .order_by_asc(job::Column::DateDue)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Job::from).collect())
    }

    async fn list_due_between(&self, from: NaiveDate, to: NaiveDate) -> AppResult<Vec<Job>> {
        let models = job::Entity::find()
            .filter(job::Column::DateDue.gte(from))
            .filter(job::Column::DateDue.lte(to))
            .order_by_asc(job::Column::DateDue)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Job::from).collect())
    }

    async fn create(&self, data: NewJob, today: NaiveDate) -> AppResult<Job> {
        let derived = schedule::derive(
            data.date_done,
            data.frequency,
            data.planned_hours,
            data.hours_worked,
            today,
        );

        let now = Utc::now();
        let active = job::ActiveModel {
            id: Set(Uuid::new_v4()),
            equipment_id: Set(data.equipment_id),
            title: Set(data.title),
            description: Set(data.description),
            frequency: Set(data.frequency.to_string()),
            criticality: Set(data.criticality.to_string()),
            date_done: Set(data.date_done),
            date_due: Set(derived.date_due),
            planned_hours: Set(data.planned_hours),
            hours_worked: Set(data.hours_worked),
            remaining_hours: Set(derived.remaining_hours),
            overdue_days: Set(derived.overdue_days),
            assigned_to: Set(data.assigned_to),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let model = active.insert(&self.db).await?;
        Ok(Job::from(model))
    }

    async fn update(&self, id: Uuid, data: UpdateJob, today: NaiveDate) -> AppResult<Job> {
        let model = job::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound)?;
        let current = Job::from(model.clone());

        // Merge the partial update, then recompute every derived field
        let frequency = data.frequency.unwrap_or(current.frequency);
        let date_done = data.date_done.unwrap_or(current.date_done);
        let planned_hours = data.planned_hours.unwrap_or(current.planned_hours);
        let hours_worked = data.hours_worked.unwrap_or(current.hours_worked);
        let derived = schedule::derive(date_done, frequency, planned_hours, hours_worked, today);

        let mut active: job::ActiveModel = model.into();
        if let Some(title) = data.title {
            active.title = Set(title);
        }
        if let Some(description) = data.description {
            active.description = Set(Some(description));
        }
        if let Some(criticality) = data.criticality {
            active.criticality = Set(criticality.to_string());
        }
        if let Some(assigned_to) = data.assigned_to {
            active.assigned_to = Set(Some(assigned_to));
        }
        active.frequency = Set(frequency.to_string());
        active.date_done = Set(date_done);
        active.date_due = Set(derived.date_due);
        active.planned_hours = Set(planned_hours);
        active.hours_worked = Set(hours_worked);
        active.remaining_hours = Set(derived.remaining_hours);
        active.overdue_days = Set(derived.overdue_days);
        active.updated_at = Set(Utc::now());

        let model = active.update(&self.db).await?;
        Ok(Job::from(model))
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = job::Entity::delete_by_id(id).exec(&self.db).await?;
        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }
        Ok(())
    }

    async fn count(&self) -> AppResult<u64> {
        job::Entity::find().count(&self.db).await.map_err(Into::into)
    }

    async fn count_overdue(&self, today: NaiveDate) -> AppResult<u64> {
        job::Entity::find()
            .filter(job::Column::DateDue.lt(today))
            .count(&self.db)
            .await
            .map_err(Into::into)
    }

    async fn count_due_within(&self, today: NaiveDate, days: i64) -> AppResult<u64> {
        let horizon = today + Duration::days(days);
        job::Entity::find()
            .filter(job::Column::DateDue.gte(today))
            .filter(job::Column::DateDue.lte(horizon))
            .count(&self.db)
            .await
            .map_err(Into::into)
    }
}
