//! Maintenance task database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::{Frequency, Task};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "tasks")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,
    /// Human-assigned task code, unique
    #[sea_orm(unique)]
    pub task_id: String,
    pub equipment_id: Uuid,
    pub description: String,
    pub frequency: String,
    pub planned_hours: i32,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl From<Model> for Task {
    fn from(model: Model) -> Self {
        Task {
            id: model.id,
            task_id: model.task_id,
            equipment_id: model.equipment_id,
            description: model.description,
            frequency: Frequency::from(model.frequency.as_str()),
            planned_hours: model.planned_hours,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
