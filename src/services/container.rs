//! Service container - centralized service access.

use std::sync::Arc;

use super::{
    EquipmentService, HistoryService, InventoryService, JobService, ReportService, TaskService,
    UserService,
};
use crate::infra::Persistence;

/// Service container trait for dependency injection.
///
/// Provides centralized access to all application services.
pub trait ServiceContainer: Send + Sync {
    fn equipment(&self) -> Arc<dyn EquipmentService>;
    fn jobs(&self) -> Arc<dyn JobService>;
    fn tasks(&self) -> Arc<dyn TaskService>;
    fn history(&self) -> Arc<dyn HistoryService>;
    fn inventory(&self) -> Arc<dyn InventoryService>;
    fn users(&self) -> Arc<dyn UserService>;
    fn reports(&self) -> Arc<dyn ReportService>;
}

/// Concrete implementation of ServiceContainer
pub struct Services {
    equipment_service: Arc<dyn EquipmentService>,
    job_service: Arc<dyn JobService>,
    task_service: Arc<dyn TaskService>,
    history_service: Arc<dyn HistoryService>,
    inventory_service: Arc<dyn InventoryService>,
    user_service: Arc<dyn UserService>,
    report_service: Arc<dyn ReportService>,
}

impl Services {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        equipment_service: Arc<dyn EquipmentService>,
        job_service: Arc<dyn JobService>,
        task_service: Arc<dyn TaskService>,
        history_service: Arc<dyn HistoryService>,
        inventory_service: Arc<dyn InventoryService>,
        user_service: Arc<dyn UserService>,
        report_service: Arc<dyn ReportService>,
    ) -> Self {
        Self {
            equipment_service,
            job_service,
            task_service,
            history_service,
            inventory_service,
            user_service,
            report_service,
        }
    }

    /// Create service container from a database connection
    pub fn from_connection(db: sea_orm::DatabaseConnection) -> Self {
        use super::{
            EquipmentManager, HistoryManager, InventoryManager, JobManager, ReportManager,
            TaskManager, UserManager,
        };

        let uow = Arc::new(Persistence::new(db));

        Self {
            equipment_service: Arc::new(EquipmentManager::new(uow.clone())),
            job_service: Arc::new(JobManager::new(uow.clone())),
            task_service: Arc::new(TaskManager::new(uow.clone())),
            history_service: Arc::new(HistoryManager::new(uow.clone())),
            inventory_service: Arc::new(InventoryManager::new(uow.clone())),
            user_service: Arc::new(UserManager::new(uow.clone())),
            report_service: Arc::new(ReportManager::new(uow)),
        }
    }
}

impl ServiceContainer for Services {
    fn equipment(&self) -> Arc<dyn EquipmentService> {
        self.equipment_service.clone()
    }

    fn jobs(&self) -> Arc<dyn JobService> {
        self.job_service.clone()
    }

    fn tasks(&self) -> Arc<dyn TaskService> {
        self.task_service.clone()
    }

    fn history(&self) -> Arc<dyn HistoryService> {
        self.history_service.clone()
    }

    fn inventory(&self) -> Arc<dyn InventoryService> {
        self.inventory_service.clone()
    }

    fn users(&self) -> Arc<dyn UserService> {
        self.user_service.clone()
    }

    fn reports(&self) -> Arc<dyn ReportService> {
        self.report_service.clone()
    }
}
