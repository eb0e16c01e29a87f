//! Maintenance history domain entity.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Kind of maintenance that was performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum MaintenanceKind {
    /// Planned, recurring maintenance
    Scheduled,
    /// Unscheduled breakdown repair
    Corrective,
}

impl From<&str> for MaintenanceKind {
    fn from(s: &str) -> Self {
        match s {
            "scheduled" => MaintenanceKind::Scheduled,
            _ => MaintenanceKind::Corrective,
        }
    }
}

impl std::fmt::Display for MaintenanceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            MaintenanceKind::Scheduled => "scheduled",
            MaintenanceKind::Corrective => "corrective",
        };
        write!(f, "{}", s)
    }
}

/// One performed maintenance activity, scheduled or ad hoc.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaintenanceHistory {
    pub id: Uuid,
    pub equipment_id: Uuid,
    /// Set when the entry executed a defined task
    pub task_id: Option<Uuid>,
    pub kind: MaintenanceKind,
    pub description: String,
    pub date_performed: NaiveDate,
    pub hours_spent: i32,
    pub performed_by: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Fields for recording a history entry.
#[derive(Debug, Clone)]
pub struct NewHistory {
    pub equipment_id: Uuid,
    pub task_id: Option<Uuid>,
    pub kind: MaintenanceKind,
    pub description: String,
    pub date_performed: NaiveDate,
    pub hours_spent: i32,
    pub performed_by: Option<String>,
}

/// History list filter for query parameters.
#[derive(Debug, Clone, Default)]
pub struct HistoryFilter {
    pub equipment_id: Option<Uuid>,
    pub kind: Option<MaintenanceKind>,
}

/// History response for the API.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct HistoryResponse {
    pub id: Uuid,
    pub equipment_id: Uuid,
    pub task_id: Option<Uuid>,
    pub kind: MaintenanceKind,
    #[schema(example = "Replaced sheared shear-leg bolt")]
    pub description: String,
    pub date_performed: NaiveDate,
    pub hours_spent: i32,
    pub performed_by: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<MaintenanceHistory> for HistoryResponse {
    fn from(entry: MaintenanceHistory) -> Self {
        Self {
            id: entry.id,
            equipment_id: entry.equipment_id,
            task_id: entry.task_id,
            kind: entry.kind,
            description: entry.description,
            date_performed: entry.date_performed,
            hours_spent: entry.hours_spent,
            performed_by: entry.performed_by,
            created_at: entry.created_at,
        }
    }
}
