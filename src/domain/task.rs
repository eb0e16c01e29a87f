//! Defined maintenance task domain entity.
//!
//! A task is a reusable maintenance procedure attached to one equipment
//! unit; history entries may reference the task they executed.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::schedule::Frequency;

/// A defined maintenance task. `task_id` is the human-assigned task code
/// and must be unique across the facility.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: Uuid,
    pub task_id: String,
    pub equipment_id: Uuid,
    pub description: String,
    pub frequency: Frequency,
    pub planned_hours: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields for creating a task.
#[derive(Debug, Clone)]
pub struct NewTask {
    pub task_id: String,
    pub equipment_id: Uuid,
    pub description: String,
    pub frequency: Frequency,
    pub planned_hours: i32,
}

/// Partial update for a task; `None` leaves the field unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdateTask {
    pub task_id: Option<String>,
    pub description: Option<String>,
    pub frequency: Option<Frequency>,
    pub planned_hours: Option<i32>,
}

/// Task response for the API.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct TaskResponse {
    pub id: Uuid,
    /// Human-assigned task code
    #[schema(example = "T-0142")]
    pub task_id: String,
    pub equipment_id: Uuid,
    #[schema(example = "Replace hydraulic filter")]
    pub description: String,
    pub frequency: Frequency,
    pub planned_hours: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Task> for TaskResponse {
    fn from(task: Task) -> Self {
        Self {
            id: task.id,
            task_id: task.task_id,
            equipment_id: task.equipment_id,
            description: task.description,
            frequency: task.frequency,
            planned_hours: task.planned_hours,
            created_at: task.created_at,
            updated_at: task.updated_at,
        }
    }
}
