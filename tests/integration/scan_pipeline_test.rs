// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::{scan_use_case, start_job_site, ymd};
use jobcrawlrs::application::use_cases::scan_jobs::{LogProgress, ScanError, ScanSession};
use jobcrawlrs::domain::models::scan::ScanStatus;
use jobcrawlrs::domain::services::job_listing::sort_by_deadline;
use jobcrawlrs::engines::traits::EngineError;
use tokio::sync::mpsc;

/// 完整扫描流程
///
/// 一个候选页面返回500，一个已过期，其余三个职位被保留
#[tokio::test]
async fn test_scan_local_job_site() {
    let site = start_job_site().await;
    let use_case = scan_use_case();

    let report = use_case
        .run(&format!("{}/careers", site), &ScanSession::new(), &LogProgress)
        .await
        .unwrap();

    assert_eq!(report.candidates, 5);
    assert_eq!(report.fetched, 4);
    assert_eq!(report.failed, 1);
    assert_eq!(report.rejected, 1);

    let mut jobs = report.jobs;
    sort_by_deadline(&mut jobs);
    let summary: Vec<(&str, String)> = jobs
        .iter()
        .map(|j| (j.title.as_str(), j.link.replace(&site, "")))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("Office Assistant", "/jobs/4".to_string()),
            ("Data Analyst", "/jobs/1".to_string()),
            ("Product Designer", "/blog/we-are-hiring".to_string()),
        ]
    );
    assert_eq!(jobs[2].last_date, ymd(2025, 2, 10));
}

#[tokio::test]
async fn test_scan_reports_progress_over_channel() {
    let site = start_job_site().await;
    let use_case = scan_use_case();
    let (tx, mut rx) = mpsc::unbounded_channel();

    use_case
        .run(&format!("{}/careers", site), &ScanSession::new(), &tx)
        .await
        .unwrap();
    drop(tx);

    let mut last = None;
    while let Some(status) = rx.recv().await {
        last = Some(status);
    }
    assert_eq!(last, Some(ScanStatus::Completed { jobs: 3 }));
}

#[tokio::test]
async fn test_unreachable_seed_is_fatal() {
    let site = start_job_site().await;

    let result = scan_use_case()
        .run(&format!("{}/missing", site), &ScanSession::new(), &LogProgress)
        .await;

    assert!(matches!(
        result,
        Err(ScanError::SeedUnavailable {
            source: EngineError::HttpStatus(404),
            ..
        })
    ));
}

#[tokio::test]
async fn test_seed_without_job_links_is_fatal() {
    let site = start_job_site().await;

    let result = scan_use_case()
        .run(&format!("{}/empty", site), &ScanSession::new(), &LogProgress)
        .await;

    assert!(matches!(result, Err(ScanError::NoCandidateLinks { .. })));
}
