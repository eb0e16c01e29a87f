//! Scheduled job database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::{Criticality, Frequency, Job};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "jobs")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,
    pub equipment_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub frequency: String,
    pub criticality: String,
    pub date_done: Date,
    /// Derived: date_done + frequency interval, recomputed on every write
    pub date_due: Date,
    pub planned_hours: i32,
    pub hours_worked: i32,
    /// Derived: max(0, planned_hours - hours_worked)
    pub remaining_hours: i32,
    /// Derived: days past date_due as of the last write, floor zero
    pub overdue_days: i64,
    pub assigned_to: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl From<Model> for Job {
    fn from(model: Model) -> Self {
        Job {
            id: model.id,
            equipment_id: model.equipment_id,
            title: model.title,
            description: model.description,
            frequency: Frequency::from(model.frequency.as_str()),
            criticality: Criticality::from(model.criticality.as_str()),
            date_done: model.date_done,
            date_due: model.date_due,
            planned_hours: model.planned_hours,
            hours_worked: model.hours_worked,
            remaining_hours: model.remaining_hours,
            overdue_days: model.overdue_days,
            assigned_to: model.assigned_to,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
