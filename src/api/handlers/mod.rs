//! HTTP request handlers.

pub mod equipment_handler;
pub mod history_handler;
pub mod inventory_handler;
pub mod job_handler;
pub mod report_handler;
pub mod task_handler;
pub mod user_handler;

pub use equipment_handler::{category_routes, equipment_routes};
pub use history_handler::history_routes;
pub use inventory_handler::inventory_routes;
pub use job_handler::job_routes;
pub use report_handler::{dashboard_routes, report_routes};
pub use task_handler::task_routes;
pub use user_handler::user_routes;
