//! Application state - Dependency injection container.
//!
//! Provides centralized access to all application services and infrastructure.

use std::sync::Arc;

use crate::infra::Database;
use crate::services::{
    EquipmentService, HistoryService, InventoryService, JobService, ReportService,
    ServiceContainer, Services, TaskService, UserService,
};

/// Application state containing all services (DI container).
#[derive(Clone)]
pub struct AppState {
    pub equipment_service: Arc<dyn EquipmentService>,
    pub job_service: Arc<dyn JobService>,
    pub task_service: Arc<dyn TaskService>,
    pub history_service: Arc<dyn HistoryService>,
    pub inventory_service: Arc<dyn InventoryService>,
    pub user_service: Arc<dyn UserService>,
    pub report_service: Arc<dyn ReportService>,
    /// Database connection
    pub database: Arc<Database>,
}

impl AppState {
    /// Create application state from a database connection.
    ///
    /// This is the recommended way to create AppState as it uses
    /// the ServiceContainer for centralized service management.
    pub fn from_database(database: Arc<Database>) -> Self {
        let container = Arc::new(Services::from_connection(database.get_connection()));

        Self {
            equipment_service: container.equipment(),
            job_service: container.jobs(),
            task_service: container.tasks(),
            history_service: container.history(),
            inventory_service: container.inventory(),
            user_service: container.users(),
            report_service: container.reports(),
            database,
        }
    }

    /// Create new application state with manually injected services.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        equipment_service: Arc<dyn EquipmentService>,
        job_service: Arc<dyn JobService>,
        task_service: Arc<dyn TaskService>,
        history_service: Arc<dyn HistoryService>,
        inventory_service: Arc<dyn InventoryService>,
        user_service: Arc<dyn UserService>,
        report_service: Arc<dyn ReportService>,
        database: Arc<Database>,
    ) -> Self {
        Self {
            equipment_service,
            job_service,
            task_service,
            history_service,
            inventory_service,
            user_service,
            report_service,
            database,
        }
    }
}
