//! Scheduling arithmetic tests through the public API.

use chrono::NaiveDate;

use yardwise::domain::schedule::{self, Frequency};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_due_date_crosses_month_boundary() {
    let due = schedule::due_date(date(2024, 1, 28), Frequency::Weekly);
    assert_eq!(due, date(2024, 2, 4));
}

#[test]
fn test_due_date_five_yearly_span() {
    // 1825 days, not calendar years
    let due = schedule::due_date(date(2020, 1, 1), Frequency::FiveYearly);
    assert_eq!(due, date(2024, 12, 30));
}

#[test]
fn test_overdue_days_clamped_at_zero() {
    let due = date(2024, 6, 10);
    assert_eq!(schedule::overdue_days(due, date(2024, 6, 1)), 0);
    assert_eq!(schedule::overdue_days(due, date(2024, 6, 10)), 0);
    assert_eq!(schedule::overdue_days(due, date(2024, 6, 13)), 3);
}

#[test]
fn test_remaining_hours_never_negative() {
    assert_eq!(schedule::remaining_hours(8, 3), 5);
    assert_eq!(schedule::remaining_hours(8, 12), 0);
}

#[test]
fn test_derive_is_consistent_with_parts() {
    let done = date(2024, 3, 1);
    let today = date(2024, 4, 15);
    let derived = schedule::derive(done, Frequency::Monthly, 10, 4, today);

    assert_eq!(derived.date_due, schedule::due_date(done, Frequency::Monthly));
    assert_eq!(
        derived.overdue_days,
        schedule::overdue_days(derived.date_due, today)
    );
    assert_eq!(derived.remaining_hours, schedule::remaining_hours(10, 4));
}

#[test]
fn test_completing_resets_the_cycle() {
    // A job completed today is next due one interval from today
    let today = date(2024, 7, 1);
    let derived = schedule::derive(today, Frequency::ThreeMonthly, 6, 0, today);

    assert_eq!(derived.date_due, date(2024, 9, 29));
    assert_eq!(derived.overdue_days, 0);
    assert_eq!(derived.remaining_hours, 6);
}
