//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain logic and infrastructure to fulfill
//! application use cases. They depend on abstractions (traits) for
//! dependency inversion.
//!
//! All services use Unit of Work pattern for centralized repository
//! access and transaction management.

pub mod container;
mod equipment_service;
mod history_service;
mod inventory_service;
mod job_service;
mod report_service;
mod task_service;
mod user_service;

// Service Container
pub use container::{ServiceContainer, Services};

// Service traits and implementations
pub use equipment_service::{EquipmentManager, EquipmentService};
pub use history_service::{HistoryManager, HistoryService};
pub use inventory_service::{InventoryManager, InventoryService};
pub use job_service::{CompleteJob, JobManager, JobService};
pub use report_service::{
    DashboardSummary, EquipmentActivity, InventoryReport, MaintenanceReport, ReportManager,
    ReportService,
};
pub use task_service::{TaskManager, TaskService};
pub use user_service::{UserManager, UserService};
