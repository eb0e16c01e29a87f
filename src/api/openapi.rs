//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::OpenApi;

use crate::api::handlers::{
    equipment_handler, history_handler, inventory_handler, job_handler, report_handler,
    task_handler, user_handler,
};
use crate::domain::{
    CategoryResponse, Criticality, EquipmentResponse, Frequency, HistoryResponse,
    InventoryResponse, JobResponse, MaintenanceKind, TaskResponse, UserResponse, UserRole,
};
use crate::services::{
    DashboardSummary, EquipmentActivity, InventoryReport, MaintenanceReport,
};

/// OpenAPI documentation for the Yardwise maintenance API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Yardwise",
        version = "0.1.0",
        description = "Planned maintenance system for a ship-recycling facility",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(
        // Category endpoints
        equipment_handler::list_categories,
        equipment_handler::create_category,
        equipment_handler::get_category,
        equipment_handler::update_category,
        equipment_handler::delete_category,
        // Equipment endpoints
        equipment_handler::list_equipment,
        equipment_handler::create_equipment,
        equipment_handler::get_equipment,
        equipment_handler::update_equipment,
        equipment_handler::delete_equipment,
        equipment_handler::list_equipment_jobs,
        equipment_handler::list_equipment_history,
        // Job endpoints
        job_handler::list_jobs,
        job_handler::create_job,
        job_handler::get_job,
        job_handler::update_job,
        job_handler::delete_job,
        job_handler::complete_job,
        // Task endpoints
        task_handler::list_tasks,
        task_handler::create_task,
        task_handler::get_task,
        task_handler::update_task,
        task_handler::delete_task,
        // History endpoints
        history_handler::list_history,
        history_handler::create_history,
        history_handler::get_history,
        history_handler::delete_history,
        // Inventory endpoints
        inventory_handler::list_items,
        inventory_handler::create_item,
        inventory_handler::get_item,
        inventory_handler::update_item,
        inventory_handler::adjust_quantity,
        inventory_handler::delete_item,
        // User endpoints
        user_handler::list_users,
        user_handler::create_user,
        user_handler::get_user,
        user_handler::update_user,
        user_handler::delete_user,
        // Dashboard and reports
        report_handler::dashboard,
        report_handler::maintenance_report,
        report_handler::inventory_report,
    ),
    components(
        schemas(
            // Domain types
            Frequency,
            Criticality,
            MaintenanceKind,
            UserRole,
            CategoryResponse,
            EquipmentResponse,
            JobResponse,
            TaskResponse,
            HistoryResponse,
            InventoryResponse,
            UserResponse,
            // Report types
            DashboardSummary,
            EquipmentActivity,
            MaintenanceReport,
            InventoryReport,
            // Request types
            equipment_handler::CategoryRequest,
            equipment_handler::CreateEquipmentRequest,
            equipment_handler::UpdateEquipmentRequest,
            job_handler::CreateJobRequest,
            job_handler::UpdateJobRequest,
            job_handler::CompleteJobRequest,
            task_handler::CreateTaskRequest,
            task_handler::UpdateTaskRequest,
            history_handler::CreateHistoryRequest,
            inventory_handler::CreateItemRequest,
            inventory_handler::UpdateItemRequest,
            inventory_handler::AdjustQuantityRequest,
            user_handler::CreateUserRequest,
            user_handler::UpdateUserRequest,
        )
    ),
    tags(
        (name = "Categories", description = "Equipment category management"),
        (name = "Equipment", description = "Yard equipment registry"),
        (name = "Jobs", description = "Recurring maintenance jobs and scheduling"),
        (name = "Tasks", description = "Defined maintenance tasks"),
        (name = "History", description = "Performed maintenance log"),
        (name = "Inventory", description = "Spare-part stock"),
        (name = "Users", description = "User account management"),
        (name = "Reports", description = "Dashboard and report data")
    )
)]
pub struct ApiDoc;
