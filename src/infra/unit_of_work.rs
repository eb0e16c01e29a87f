//! Unit of Work pattern implementation.
//!
//! Centralizes access to all repositories and manages database
//! transactions. The one multi-aggregate workflow (completing a job
//! records a history row and rolls the job forward) runs through the
//! transactional context so both writes commit or roll back together.

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use sea_orm::{
    AccessMode, ActiveModelTrait, DatabaseConnection, DatabaseTransaction, EntityTrait,
    IsolationLevel, Set, TransactionTrait,
};
use std::sync::Arc;
use uuid::Uuid;

use super::repositories::{
    EquipmentRepository, EquipmentStore, HistoryRepository, HistoryStore, InventoryRepository,
    InventoryStore, JobRepository, JobStore, TaskRepository, TaskStore, UserRepository, UserStore,
};
use crate::domain::{schedule, Job, MaintenanceHistory, NewHistory};
use crate::errors::{AppError, AppResult};

/// Unit of Work trait for dependency injection.
///
/// Note: the generic `transaction` method makes this trait non-mockable;
/// tests provide a hand-written implementation instead.
#[async_trait]
pub trait UnitOfWork: Send + Sync {
    fn equipment(&self) -> Arc<dyn EquipmentRepository>;
    fn jobs(&self) -> Arc<dyn JobRepository>;
    fn tasks(&self) -> Arc<dyn TaskRepository>;
    fn history(&self) -> Arc<dyn HistoryRepository>;
    fn inventory(&self) -> Arc<dyn InventoryRepository>;
    fn users(&self) -> Arc<dyn UserRepository>;

    /// Execute a closure within a transaction.
    ///
    /// The transaction is automatically committed on success or rolled
    /// back on error. Uses ReadCommitted isolation.
    async fn transaction<F, T>(&self, f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(TransactionContext<'a>) -> std::pin::Pin<
                Box<dyn std::future::Future<Output = AppResult<T>> + Send + 'a>,
            > + Send,
        T: Send;
}

/// Transaction context providing repository access within a transaction.
pub struct TransactionContext<'a> {
    txn: &'a DatabaseTransaction,
}

impl<'a> TransactionContext<'a> {
    fn new(txn: &'a DatabaseTransaction) -> Self {
        Self { txn }
    }

    /// Get job repository for this transaction
    pub fn jobs(&self) -> TxJobRepository<'_> {
        TxJobRepository::new(self.txn)
    }

    /// Get history repository for this transaction
    pub fn history(&self) -> TxHistoryRepository<'_> {
        TxHistoryRepository::new(self.txn)
    }
}

/// Concrete implementation of UnitOfWork
pub struct Persistence {
    db: DatabaseConnection,
    equipment_repo: Arc<EquipmentStore>,
    job_repo: Arc<JobStore>,
    task_repo: Arc<TaskStore>,
    history_repo: Arc<HistoryStore>,
    inventory_repo: Arc<InventoryStore>,
    user_repo: Arc<UserStore>,
}

impl Persistence {
    /// Create new UnitOfWork instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            equipment_repo: Arc::new(EquipmentStore::new(db.clone())),
            job_repo: Arc::new(JobStore::new(db.clone())),
            task_repo: Arc::new(TaskStore::new(db.clone())),
            history_repo: Arc::new(HistoryStore::new(db.clone())),
            inventory_repo: Arc::new(InventoryStore::new(db.clone())),
            user_repo: Arc::new(UserStore::new(db.clone())),
            db,
        }
    }
}

#[async_trait]
impl UnitOfWork for Persistence {
    fn equipment(&self) -> Arc<dyn EquipmentRepository> {
        self.equipment_repo.clone()
    }

    fn jobs(&self) -> Arc<dyn JobRepository> {
        self.job_repo.clone()
    }

    fn tasks(&self) -> Arc<dyn TaskRepository> {
        self.task_repo.clone()
    }

    fn history(&self) -> Arc<dyn HistoryRepository> {
        self.history_repo.clone()
    }

    fn inventory(&self) -> Arc<dyn InventoryRepository> {
        self.inventory_repo.clone()
    }

    fn users(&self) -> Arc<dyn UserRepository> {
        self.user_repo.clone()
    }

    async fn transaction<F, T>(&self, f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(TransactionContext<'a>) -> std::pin::Pin<
                Box<dyn std::future::Future<Output = AppResult<T>> + Send + 'a>,
            > + Send,
        T: Send,
    {
        let txn = self
            .db
            .begin_with_config(
                Some(IsolationLevel::ReadCommitted),
                Some(AccessMode::ReadWrite),
            )
            .await
            .map_err(AppError::from)?;

        let ctx = TransactionContext::new(&txn);

        match f(ctx).await {
            Ok(result) => {
                txn.commit().await.map_err(AppError::from)?;
                Ok(result)
            }
            Err(e) => {
                if let Err(rollback_err) = txn.rollback().await {
                    tracing::error!("Transaction rollback failed: {}", rollback_err);
                }
                Err(e)
            }
        }
    }
}

/// Transaction-aware job repository.
pub struct TxJobRepository<'a> {
    txn: &'a DatabaseTransaction,
}

impl<'a> TxJobRepository<'a> {
    fn new(txn: &'a DatabaseTransaction) -> Self {
        Self { txn }
    }

    /// Find a job by ID within the transaction.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Job>> {
        use super::repositories::entities::job;

        let model = job::Entity::find_by_id(id)
            .one(self.txn)
            .await
            .map_err(AppError::from)?;

        Ok(model.map(Job::from))
    }

    /// Roll a completed job forward: `date_done` becomes the completion
    /// date, worked hours reset, and the derived fields are recomputed.
    pub async fn roll_forward(&self, id: Uuid, completed_on: NaiveDate) -> AppResult<Job> {
        use super::repositories::entities::job;

        let model = job::Entity::find_by_id(id)
            .one(self.txn)
            .await
            .map_err(AppError::from)?
            .ok_or(AppError::NotFound)?;
        let current = Job::from(model.clone());

        let derived = schedule::derive(
            completed_on,
            current.frequency,
            current.planned_hours,
            0,
            completed_on,
        );

        let mut active: job::ActiveModel = model.into();
        active.date_done = Set(completed_on);
        active.date_due = Set(derived.date_due);
        active.hours_worked = Set(0);
        active.remaining_hours = Set(derived.remaining_hours);
        active.overdue_days = Set(derived.overdue_days);
        active.updated_at = Set(Utc::now());

        let model = active.update(self.txn).await.map_err(AppError::from)?;
        Ok(Job::from(model))
    }
}

/// Transaction-aware history repository.
pub struct TxHistoryRepository<'a> {
    txn: &'a DatabaseTransaction,
}

impl<'a> TxHistoryRepository<'a> {
    fn new(txn: &'a DatabaseTransaction) -> Self {
        Self { txn }
    }

    /// Record a history entry within the transaction.
    pub async fn create(&self, data: NewHistory) -> AppResult<MaintenanceHistory> {
        use super::repositories::entities::history;

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

        let model = active.insert(self.txn).await.map_err(AppError::from)?;
        Ok(MaintenanceHistory::from(model))
    }
}
