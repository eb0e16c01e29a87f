//! Domain layer - Core business entities and logic
//!
//! This module contains the core domain models that represent
//! business concepts independent of infrastructure concerns.
//! The scheduling arithmetic in [`schedule`] is the single source
//! of truth for all derived job fields.

pub mod equipment;
pub mod history;
pub mod inventory;
pub mod job;
pub mod password;
pub mod schedule;
pub mod task;
pub mod user;

pub use equipment::{
    CategoryResponse, Equipment, EquipmentCategory, EquipmentResponse, NewEquipment,
    UpdateEquipment,
};
pub use history::{
    HistoryFilter, HistoryResponse, MaintenanceHistory, MaintenanceKind, NewHistory,
};
pub use inventory::{InventoryItem, InventoryResponse, NewInventoryItem, UpdateInventoryItem};
pub use job::{Criticality, Job, JobFilter, JobResponse, NewJob, UpdateJob};
pub use password::Password;
pub use schedule::{Derived, Frequency};
pub use task::{NewTask, Task, TaskResponse, UpdateTask};
pub use user::{NewUser, UpdateUser, User, UserResponse, UserRole};
