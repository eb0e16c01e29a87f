//! Infrastructure layer - External systems integration
//!
//! This module handles all external system concerns:
//! - Database connections and repositories
//! - Unit of Work for transaction management

pub mod db;
pub mod repositories;
pub mod unit_of_work;

pub use db::{Database, Migrator};
pub use repositories::{
    EquipmentRepository, EquipmentStore, HistoryRepository, HistoryStore, InventoryRepository,
    InventoryStore, JobRepository, JobStore, TaskRepository, TaskStore, UserRepository, UserStore,
};
pub use unit_of_work::{
    Persistence, TransactionContext, TxHistoryRepository, TxJobRepository, UnitOfWork,
};

#[cfg(test)]
pub(crate) mod test_support {
    //! Hand-written UnitOfWork over mock repositories for service tests.
    //!
    //! The generic `transaction` method keeps the trait out of mockall's
    //! reach; tests that need transactional workflows exercise them
    //! through the pure domain functions instead.

    use std::sync::Arc;

    use async_trait::async_trait;

    use super::repositories::{
        MockEquipmentRepository, MockHistoryRepository, MockInventoryRepository,
        MockJobRepository, MockTaskRepository, MockUserRepository,
    };
    use super::unit_of_work::{TransactionContext, UnitOfWork};
    use super::{
        EquipmentRepository, HistoryRepository, InventoryRepository, JobRepository,
        TaskRepository, UserRepository,
    };
    use crate::errors::{AppError, AppResult};

    /// UnitOfWork backed entirely by mock repositories.
    #[derive(Default)]
    pub struct TestUnitOfWork {
        pub equipment: MockEquipmentRepository,
        pub jobs: MockJobRepository,
        pub tasks: MockTaskRepository,
        pub history: MockHistoryRepository,
        pub inventory: MockInventoryRepository,
        pub users: MockUserRepository,
    }

    /// Arc-wrapped variant handed to services.
    pub struct SharedTestUow {
        pub equipment: Arc<MockEquipmentRepository>,
        pub jobs: Arc<MockJobRepository>,
        pub tasks: Arc<MockTaskRepository>,
        pub history: Arc<MockHistoryRepository>,
        pub inventory: Arc<MockInventoryRepository>,
        pub users: Arc<MockUserRepository>,
    }

    impl From<TestUnitOfWork> for SharedTestUow {
        fn from(uow: TestUnitOfWork) -> Self {
            Self {
                equipment: Arc::new(uow.equipment),
                jobs: Arc::new(uow.jobs),
                tasks: Arc::new(uow.tasks),
                history: Arc::new(uow.history),
                inventory: Arc::new(uow.inventory),
                users: Arc::new(uow.users),
            }
        }
    }

    #[async_trait]
    impl UnitOfWork for SharedTestUow {
        fn equipment(&self) -> Arc<dyn EquipmentRepository> {
            self.equipment.clone()
        }

        fn jobs(&self) -> Arc<dyn JobRepository> {
            self.jobs.clone()
        }

        fn tasks(&self) -> Arc<dyn TaskRepository> {
            self.tasks.clone()
        }

        fn history(&self) -> Arc<dyn HistoryRepository> {
            self.history.clone()
        }

        fn inventory(&self) -> Arc<dyn InventoryRepository> {
            self.inventory.clone()
        }

        fn users(&self) -> Arc<dyn UserRepository> {
            self.users.clone()
        }

        async fn transaction<F, T>(&self, _f: F) -> AppResult<T>
        where
            F: for<'a> FnOnce(TransactionContext<'a>) -> std::pin::Pin<
                    Box<dyn std::future::Future<Output = AppResult<T>> + Send + 'a>,
                > + Send,
            T: Send,
        {
            // Transactions are not supported against mocks
            Err(AppError::internal("Transactions not supported in test mock"))
        }
    }
}
