//! Maintenance scheduling arithmetic.
//!
//! Single source of truth for the due-date, overdue and remaining-hours
//! derivations. Every writer of a job (create, update, complete) must go
//! through [`derive`] so the stored derived fields stay consistent.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// How often a scheduled maintenance job recurs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum Frequency {
    #[serde(rename = "weekly")]
    Weekly,
    #[serde(rename = "monthly")]
    Monthly,
    #[serde(rename = "3-monthly")]
    ThreeMonthly,
    #[serde(rename = "yearly")]
    Yearly,
    #[serde(rename = "5-yearly")]
    FiveYearly,
}

impl Frequency {
    /// Days added to the last-done date to obtain the due date.
    pub fn interval_days(&self) -> i64 {
        match self {
            Frequency::Weekly => 7,
            Frequency::Monthly => 30,
            Frequency::ThreeMonthly => 90,
            Frequency::Yearly => 365,
            Frequency::FiveYearly => 1825,
        }
    }
}

impl From<&str> for Frequency {
    fn from(s: &str) -> Self {
        match s {
            "monthly" => Frequency::Monthly,
            "3-monthly" => Frequency::ThreeMonthly,
            "yearly" => Frequency::Yearly,
            "5-yearly" => Frequency::FiveYearly,
            // Unknown values fall back to the shortest interval
            _ => Frequency::Weekly,
        }
    }
}

impl std::fmt::Display for Frequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Frequency::Weekly => "weekly",
            Frequency::Monthly => "monthly",
            Frequency::ThreeMonthly => "3-monthly",
            Frequency::Yearly => "yearly",
            Frequency::FiveYearly => "5-yearly",
        };
        write!(f, "{}", s)
    }
}

/// Derived job fields, recomputed on every write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Derived {
    pub date_due: NaiveDate,
    pub overdue_days: i64,
    pub remaining_hours: i32,
}

/// Due date: last-done date plus the frequency interval.
pub fn due_date(date_done: NaiveDate, frequency: Frequency) -> NaiveDate {
    date_done + Duration::days(frequency.interval_days())
}

/// Whole days past the due date, zero when not yet due.
pub fn overdue_days(date_due: NaiveDate, today: NaiveDate) -> i64 {
    (today - date_due).num_days().max(0)
}

/// Planned hours not yet worked, saturating at zero.
pub fn remaining_hours(planned_hours: i32, hours_worked: i32) -> i32 {
    (planned_hours - hours_worked).max(0)
}

/// Compute all derived fields for a job in one place.
pub fn derive(
    date_done: NaiveDate,
    frequency: Frequency,
    planned_hours: i32,
    hours_worked: i32,
    today: NaiveDate,
) -> Derived {
    let date_due = due_date(date_done, frequency);
    Derived {
        date_due,
        overdue_days: overdue_days(date_due, today),
        remaining_hours: remaining_hours(planned_hours, hours_worked),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_interval_days_mapping() {
        assert_eq!(Frequency::Weekly.interval_days(), 7);
        assert_eq!(Frequency::Monthly.interval_days(), 30);
        assert_eq!(Frequency::ThreeMonthly.interval_days(), 90);
        assert_eq!(Frequency::Yearly.interval_days(), 365);
        assert_eq!(Frequency::FiveYearly.interval_days(), 1825);
    }

    #[test]
    fn test_unknown_frequency_defaults_to_weekly() {
        assert_eq!(Frequency::from("fortnightly"), Frequency::Weekly);
        assert_eq!(Frequency::from(""), Frequency::Weekly);
    }

    #[test]
    fn test_frequency_round_trips_through_display() {
        for f in [
            Frequency::Weekly,
            Frequency::Monthly,
            Frequency::ThreeMonthly,
            Frequency::Yearly,
            Frequency::FiveYearly,
        ] {
            assert_eq!(Frequency::from(f.to_string().as_str()), f);
        }
    }

    #[test]
    fn test_due_date_adds_mapped_offset() {
        let done = date(2024, 1, 15);
        assert_eq!(due_date(done, Frequency::Weekly), date(2024, 1, 22));
        assert_eq!(due_date(done, Frequency::Monthly), date(2024, 2, 14));
        assert_eq!(due_date(done, Frequency::ThreeMonthly), date(2024, 4, 14));
        assert_eq!(due_date(done, Frequency::Yearly), date(2025, 1, 14));
        assert_eq!(
            due_date(done, Frequency::FiveYearly),
            done + Duration::days(1825)
        );
    }

    #[test]
    fn test_due_date_crosses_year_boundary() {
        let done = date(2024, 12, 28);
        assert_eq!(due_date(done, Frequency::Weekly), date(2025, 1, 4));
    }

    #[test]
    fn test_overdue_days_past_due() {
        let due = date(2024, 3, 1);
        assert_eq!(overdue_days(due, date(2024, 3, 11)), 10);
        assert_eq!(overdue_days(due, date(2024, 3, 2)), 1);
    }

    #[test]
    fn test_overdue_days_zero_when_not_due() {
        let due = date(2024, 3, 1);
        assert_eq!(overdue_days(due, date(2024, 3, 1)), 0);
        assert_eq!(overdue_days(due, date(2024, 2, 20)), 0);
    }

    #[test]
    fn test_remaining_hours_saturates_at_zero() {
        assert_eq!(remaining_hours(40, 10), 30);
        assert_eq!(remaining_hours(40, 40), 0);
        assert_eq!(remaining_hours(40, 55), 0);
        assert_eq!(remaining_hours(0, 0), 0);
    }

    #[test]
    fn test_derive_bundles_all_fields() {
        let today = date(2024, 6, 1);
        let derived = derive(date(2024, 5, 1), Frequency::Weekly, 16, 4, today);

        assert_eq!(derived.date_due, date(2024, 5, 8));
        assert_eq!(derived.overdue_days, 24);
        assert_eq!(derived.remaining_hours, 12);
    }

    #[test]
    fn test_derive_not_overdue() {
        let today = date(2024, 6, 1);
        let derived = derive(today, Frequency::Yearly, 8, 0, today);

        assert_eq!(derived.date_due, date(2025, 6, 1));
        assert_eq!(derived.overdue_days, 0);
        assert_eq!(derived.remaining_hours, 8);
    }
}
