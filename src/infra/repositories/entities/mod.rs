//! SeaORM entity definitions
//!
//! These are database-specific entities separate from domain models.

pub mod category;
pub mod equipment;
pub mod history;
pub mod inventory;
pub mod job;
pub mod task;
pub mod user;
