// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::NaiveDate;
use jobcrawlrs::domain::models::job::{CalendarDate, Job};
use jobcrawlrs::domain::services::deadline_filter::{filter_by_target, DeadlineFilter};

fn ymd(y: i32, m: u32, d: u32) -> CalendarDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn jobs() -> Vec<Job> {
    [(10, "a"), (15, "b"), (20, "c")]
        .into_iter()
        .map(|(day, id)| Job::new(format!("Job {}", id), format!("https://acme.test/{}", id), ymd(2025, 1, day)))
        .collect()
}

fn days(jobs: &[Job]) -> Vec<u32> {
    use chrono::Datelike;
    jobs.iter().map(|j| j.last_date.day()).collect()
}

#[test]
fn test_target_date_selection() {
    assert_eq!(days(&filter_by_target(jobs(), Some(ymd(2025, 1, 15)))), vec![15]);
    assert_eq!(days(&filter_by_target(jobs(), Some(ymd(2025, 1, 17)))), vec![15]);
    assert!(filter_by_target(jobs(), Some(ymd(2025, 1, 5))).is_empty());
    assert_eq!(filter_by_target(jobs(), None).len(), 3);
}

#[test]
fn test_horizon_filter() {
    let filtered = DeadlineFilter::WithinMonths(1).apply(jobs(), ymd(2024, 12, 12));

    assert_eq!(days(&filtered), vec![10]);
}
