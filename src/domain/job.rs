//! Scheduled maintenance job domain entity.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::schedule::{self, Derived, Frequency};

/// Severity tag on a job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Criticality {
    Low,
    Medium,
    High,
}

impl From<&str> for Criticality {
    fn from(s: &str) -> Self {
        match s {
            "high" => Criticality::High,
            "medium" => Criticality::Medium,
            _ => Criticality::Low,
        }
    }
}

impl std::fmt::Display for Criticality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Criticality::Low => "low",
            Criticality::Medium => "medium",
            Criticality::High => "high",
        };
        write!(f, "{}", s)
    }
}

/// A recurring maintenance job tied to one equipment unit.
///
/// `date_due`, `overdue_days` and `remaining_hours` are derived from
/// `date_done`, `frequency`, `planned_hours` and `hours_worked` at write
/// time via [`schedule::derive`]; the database does not enforce them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Job {
    pub id: Uuid,
    pub equipment_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub frequency: Frequency,
    pub criticality: Criticality,
    pub date_done: NaiveDate,
    pub date_due: NaiveDate,
    pub planned_hours: i32,
    pub hours_worked: i32,
    pub remaining_hours: i32,
    pub overdue_days: i64,
    pub assigned_to: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Job {
    /// Whether the job is past its due date as of `today`.
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        self.date_due < today
    }

    /// Recompute the derived fields from the stored inputs.
    pub fn derived(&self, today: NaiveDate) -> Derived {
        schedule::derive(
            self.date_done,
            self.frequency,
            self.planned_hours,
            self.hours_worked,
            today,
        )
    }
}

/// Fields for creating a job; derived fields are computed by the writer.
#[derive(Debug, Clone)]
pub struct NewJob {
    pub equipment_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub frequency: Frequency,
    pub criticality: Criticality,
    pub date_done: NaiveDate,
    pub planned_hours: i32,
    pub hours_worked: i32,
    pub assigned_to: Option<String>,
}

/// Partial update for a job; `None` leaves the field unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdateJob {
    pub title: Option<String>,
    pub description: Option<String>,
    pub frequency: Option<Frequency>,
    pub criticality: Option<Criticality>,
    pub date_done: Option<NaiveDate>,
    pub planned_hours: Option<i32>,
    pub hours_worked: Option<i32>,
    pub assigned_to: Option<String>,
}

/// Job list filter for query parameters.
#[derive(Debug, Clone, Default)]
pub struct JobFilter {
    pub equipment_id: Option<Uuid>,
    pub criticality: Option<Criticality>,
    /// Only jobs whose due date is before today.
    pub overdue_before: Option<NaiveDate>,
}

/// Job response for the API, including the derived scheduling fields.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct JobResponse {
    pub id: Uuid,
    pub equipment_id: Uuid,
    #[schema(example = "Grease wire ropes")]
    pub title: String,
    pub description: Option<String>,
    pub frequency: Frequency,
    pub criticality: Criticality,
    pub date_done: NaiveDate,
    pub date_due: NaiveDate,
    pub planned_hours: i32,
    pub hours_worked: i32,
    pub remaining_hours: i32,
    pub overdue_days: i64,
    pub assigned_to: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Job> for JobResponse {
    fn from(job: Job) -> Self {
        Self {
            id: job.id,
            equipment_id: job.equipment_id,
            title: job.title,
            description: job.description,
            frequency: job.frequency,
            criticality: job.criticality,
            date_done: job.date_done,
            date_due: job.date_due,
            planned_hours: job.planned_hours,
            hours_worked: job.hours_worked,
            remaining_hours: job.remaining_hours,
            overdue_days: job.overdue_days,
            assigned_to: job.assigned_to,
            created_at: job.created_at,
            updated_at: job.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample_job() -> Job {
        Job {
            id: Uuid::new_v4(),
            equipment_id: Uuid::new_v4(),
            title: "Inspect brake pads".to_string(),
            description: None,
            frequency: Frequency::Monthly,
            criticality: Criticality::Medium,
            date_done: date(2024, 1, 1),
            date_due: date(2024, 1, 31),
            planned_hours: 8,
            hours_worked: 3,
            remaining_hours: 5,
            overdue_days: 0,
            assigned_to: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_is_overdue() {
        let job = sample_job();
        assert!(!job.is_overdue(date(2024, 1, 31)));
        assert!(job.is_overdue(date(2024, 2, 1)));
    }

    #[test]
    fn test_derived_matches_schedule() {
        let job = sample_job();
        let derived = job.derived(date(2024, 2, 10));

        assert_eq!(derived.date_due, date(2024, 1, 31));
        assert_eq!(derived.overdue_days, 10);
        assert_eq!(derived.remaining_hours, 5);
    }

    #[test]
    fn test_criticality_parses_with_low_default() {
        assert_eq!(Criticality::from("high"), Criticality::High);
        assert_eq!(Criticality::from("medium"), Criticality::Medium);
        assert_eq!(Criticality::from("unknown"), Criticality::Low);
    }
}
