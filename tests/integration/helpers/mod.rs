// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{extract::Path, http::StatusCode, response::Html, routing::get, Router};
use chrono::NaiveDate;
use jobcrawlrs::application::use_cases::scan_jobs::ScanJobsUseCase;
use jobcrawlrs::config::settings::FetchSettings;
use jobcrawlrs::domain::models::job::CalendarDate;
use jobcrawlrs::domain::policy::HeuristicPolicy;
use jobcrawlrs::engines::reqwest_engine::ReqwestEngine;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;

/// 测试使用的固定“今天”
pub fn today() -> CalendarDate {
    NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
}

pub fn ymd(y: i32, m: u32, d: u32) -> CalendarDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

const CAREERS: &str = r#"
<html>
  <head><title>Acme careers</title></head>
  <body>
    <nav><a href="/about">About us</a></nav>
    <div class="jobs">
      <a href="/jobs/1">Data Analyst</a>
      <a href="/jobs/1#apply">Apply for Data Analyst</a>
      <a href="/jobs/2">Staff Nurse</a>
      <a href="/jobs/3">Site Engineer</a>
      <a href="/jobs/4">Office Assistant</a>
      <a href="https://elsewhere.test/jobs/99">Partner opening</a>
    </div>
    <article><a href="/blog/we-are-hiring">We are hiring a designer</a></article>
    <article><a href="/news/annual-report">Annual report</a></article>
  </body>
</html>
"#;

fn job_page(title: &str, deadline: &str) -> String {
    format!(
        r#"<html><body>
            <main>
              <h1 class="entry-title">{}</h1>
              <p>Qualification: graduate degree.</p>
              <p>Experience: 2 years. Location: Pune.</p>
              <p>Last date: {}</p>
            </main>
        </body></html>"#,
        title, deadline
    )
}

async fn job(Path(id): Path<u32>) -> Result<Html<String>, StatusCode> {
    match id {
        1 => Ok(Html(job_page("Data Analyst", "20/01/2025"))),
        2 => Err(StatusCode::INTERNAL_SERVER_ERROR),
        3 => Ok(Html(job_page("Site Engineer", "15/12/2024"))),
        4 => Ok(Html(job_page("Office Assistant", "2025-01-15"))),
        _ => Err(StatusCode::NOT_FOUND),
    }
}

const SLOW_CAREERS: &str =
    r#"<div class="jobs"><a href="/slow/jobs/7">Warehouse Lead</a></div>"#;

async fn slow_job() -> Html<String> {
    tokio::time::sleep(Duration::from_millis(500)).await;
    Html(job_page("Warehouse Lead", "2025-03-01"))
}

/// 启动本地职位站点
///
/// # 返回值
///
/// 站点根URL，例如 `http://127.0.0.1:38211`
pub async fn start_job_site() -> String {
    let app = Router::new()
        .route("/careers", get(|| async { Html(CAREERS) }))
        .route("/empty", get(|| async { Html("<p>No openings</p>") }))
        .route("/jobs/{id}", get(job))
        .route(
            "/slow/careers",
            get(|| async { Html(SLOW_CAREERS) }),
        )
        .route("/slow/jobs/7", get(slow_job))
        .route(
            "/blog/we-are-hiring",
            get(|| async { Html(job_page("Product Designer", "10 February 2025")) }),
        );

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}", addr)
}

/// 使用真实HTTP引擎的扫描用例
pub fn scan_use_case() -> Arc<ScanJobsUseCase> {
    let engine = ReqwestEngine::new(&FetchSettings::default()).unwrap();
    Arc::new(
        ScanJobsUseCase::new(Arc::new(engine), &HeuristicPolicy::default(), 4)
            .unwrap()
            .with_today(today()),
    )
}
