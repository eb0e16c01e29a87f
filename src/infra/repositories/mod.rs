//! Repository layer - Data access abstraction
//!
//! Repositories provide an abstraction over data persistence,
//! following the Repository pattern for clean separation of concerns.
//! Every repository is a trait so services can be tested with mocks.

pub(crate) mod entities;
mod equipment_repository;
mod history_repository;
mod inventory_repository;
mod job_repository;
mod task_repository;
mod user_repository;

pub use equipment_repository::{EquipmentRepository, EquipmentStore};
pub use history_repository::{HistoryRepository, HistoryStore};
pub use inventory_repository::{InventoryRepository, InventoryStore};
pub use job_repository::{JobRepository, JobStore};
pub use task_repository::{TaskRepository, TaskStore};
pub use user_repository::{UserRepository, UserStore};

#[cfg(test)]
pub use equipment_repository::MockEquipmentRepository;
#[cfg(test)]
pub use history_repository::MockHistoryRepository;
#[cfg(test)]
pub use inventory_repository::MockInventoryRepository;
#[cfg(test)]
pub use job_repository::MockJobRepository;
#[cfg(test)]
pub use task_repository::MockTaskRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
