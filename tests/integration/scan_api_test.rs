// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::{scan_use_case, start_job_site};
use axum::http::StatusCode;
use axum_test::TestServer;
use jobcrawlrs::config::settings::ListingSettings;
use jobcrawlrs::presentation::routes;
use serde_json::{json, Value};
use std::future::IntoFuture;

fn test_server(per_page: usize) -> TestServer {
    let app = routes::app(
        scan_use_case(),
        ListingSettings {
            per_page,
            horizon_months: None,
        },
    );
    TestServer::new(app).unwrap()
}

/// 测试扫描接口返回排序后的职位
#[tokio::test]
async fn test_create_scan_returns_sorted_jobs() {
    let site = start_job_site().await;
    let server = test_server(20);

    let response = server
        .post("/v1/scans")
        .json(&json!({ "url": format!("{}/careers", site) }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["success"], true);
    assert_eq!(body["total"], 3);
    assert_eq!(body["stats"]["failed"], 1);
    assert_eq!(body["jobs"][0]["title"], "Office Assistant");
    assert_eq!(body["jobs"][0]["lastDate"], "2025-01-15");
    assert!(body["jobs"][0]["shareText"]
        .as_str()
        .unwrap()
        .contains("Last date: 15 Jan 2025"));
}

/// 测试目标日期过滤和分页
#[tokio::test]
async fn test_create_scan_with_target_date_and_paging() {
    let site = start_job_site().await;
    let server = test_server(1);

    let response = server
        .post("/v1/scans")
        .json(&json!({
            "url": format!("{}/careers", site),
            "target_date": "2025-01-31"
        }))
        .await;
    let body: Value = response.json();
    assert_eq!(body["total"], 1);
    assert_eq!(body["jobs"][0]["title"], "Data Analyst");

    let response = server
        .post("/v1/scans")
        .json(&json!({
            "url": format!("{}/careers", site),
            "page": 3
        }))
        .await;
    let body: Value = response.json();
    assert_eq!(body["page"], 3);
    assert_eq!(body["total_pages"], 3);
    assert_eq!(body["jobs"][0]["title"], "Product Designer");
}

#[tokio::test]
async fn test_create_scan_rejects_conflicting_filters() {
    let server = test_server(20);

    let response = server
        .post("/v1/scans")
        .json(&json!({
            "url": "https://acme.test/careers",
            "target_date": "2025-01-31",
            "horizon_months": 3
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn test_create_scan_maps_pipeline_errors() {
    let site = start_job_site().await;
    let server = test_server(20);

    let response = server
        .post("/v1/scans")
        .json(&json!({ "url": format!("{}/missing", site) }))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_GATEWAY);

    let response = server
        .post("/v1/scans")
        .json(&json!({ "url": format!("{}/empty", site) }))
        .await;
    assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
}

/// 测试并发的独立扫描请求互不影响
#[tokio::test]
async fn test_concurrent_scans_from_different_clients_both_succeed() {
    let site = start_job_site().await;
    let server = test_server(20);

    let slow = server
        .post("/v1/scans")
        .json(&json!({ "url": format!("{}/slow/careers", site) }))
        .into_future();
    let fast = async {
        tokio::time::sleep(std::time::Duration::from_millis(100)).await;
        server
            .post("/v1/scans")
            .json(&json!({ "url": format!("{}/careers", site) }))
            .await
    };
    let (slow, fast) = tokio::join!(slow, fast);

    assert_eq!(slow.status_code(), StatusCode::OK);
    let body: Value = slow.json();
    assert_eq!(body["total"], 1);
    assert_eq!(body["jobs"][0]["title"], "Warehouse Lead");

    assert_eq!(fast.status_code(), StatusCode::OK);
    let body: Value = fast.json();
    assert_eq!(body["total"], 3);
}
