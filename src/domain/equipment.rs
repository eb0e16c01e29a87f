//! Equipment and equipment category domain entities.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Equipment category (e.g. cranes, winches, cutting gear).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EquipmentCategory {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A piece of equipment in the facility.
///
/// `code` is the facility-wide asset code and must be unique.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Equipment {
    pub id: Uuid,
    pub code: String,
    pub name: String,
    pub category_id: Uuid,
    pub manufacturer: Option<String>,
    pub model: Option<String>,
    pub location: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields for creating equipment.
#[derive(Debug, Clone)]
pub struct NewEquipment {
    pub code: String,
    pub name: String,
    pub category_id: Uuid,
    pub manufacturer: Option<String>,
    pub model: Option<String>,
    pub location: Option<String>,
}

/// Partial update for equipment; `None` leaves the field unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdateEquipment {
    pub code: Option<String>,
    pub name: Option<String>,
    pub category_id: Option<Uuid>,
    pub manufacturer: Option<String>,
    pub model: Option<String>,
    pub location: Option<String>,
}

/// Category response for the API.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CategoryResponse {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl From<EquipmentCategory> for CategoryResponse {
    fn from(category: EquipmentCategory) -> Self {
        Self {
            id: category.id,
            name: category.name,
            created_at: category.created_at,
        }
    }
}

/// Equipment response for the API.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct EquipmentResponse {
    /// Unique equipment identifier
    pub id: Uuid,
    /// Facility-wide asset code
    #[schema(example = "CR-014")]
    pub code: String,
    #[schema(example = "Gantry crane 2")]
    pub name: String,
    pub category_id: Uuid,
    pub manufacturer: Option<String>,
    pub model: Option<String>,
    pub location: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Equipment> for EquipmentResponse {
    fn from(equipment: Equipment) -> Self {
        Self {
            id: equipment.id,
            code: equipment.code,
            name: equipment.name,
            category_id: equipment.category_id,
            manufacturer: equipment.manufacturer,
            model: equipment.model,
            location: equipment.location,
            created_at: equipment.created_at,
            updated_at: equipment.updated_at,
        }
    }
}
