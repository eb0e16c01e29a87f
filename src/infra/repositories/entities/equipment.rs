//! Equipment database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::Equipment;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "equipment")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,
    /// Facility-wide asset code, unique
    #[sea_orm(unique)]
    pub code: String,
    pub name: String,
    pub category_id: Uuid,
    pub manufacturer: Option<String>,
    pub model: Option<String>,
    pub location: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl From<Model> for Equipment {
    fn from(model: Model) -> Self {
        Equipment {
            id: model.id,
            code: model.code,
            name: model.name,
            category_id: model.category_id,
            manufacturer: model.manufacturer,
            model: model.model,
            location: model.location,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
