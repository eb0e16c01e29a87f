//! Maintenance history database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::{MaintenanceHistory, MaintenanceKind};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "maintenance_history")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,
    pub equipment_id: Uuid,
    pub task_id: Option<Uuid>,
    pub kind: String,
    pub description: String,
    pub date_performed: Date,
    pub hours_spent: i32,
    pub performed_by: Option<String>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl From<Model> for MaintenanceHistory {
    fn from(model: Model) -> Self {
        MaintenanceHistory {
            id: model.id,
            equipment_id: model.equipment_id,
            task_id: model.task_id,
            kind: MaintenanceKind::from(model.kind.as_str()),
            description: model.description,
            date_performed: model.date_performed,
            hours_spent: model.hours_spent,
            performed_by: model.performed_by,
            created_at: model.created_at,
        }
    }
}
