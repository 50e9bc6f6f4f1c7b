// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use jobcrawlrs::application::use_cases::scan_jobs::ScanJobsUseCase;
use jobcrawlrs::config::settings::Settings;
use jobcrawlrs::engines::reqwest_engine::ReqwestEngine;
use jobcrawlrs::engines::timeout::TimeoutFetcher;
use jobcrawlrs::engines::traits::PageFetcher;
use jobcrawlrs::presentation::routes;
use jobcrawlrs::utils::telemetry;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tracing::info;

/// 主函数
///
/// 应用程序入口点，负责初始化所有组件并启动服务
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize logging
    telemetry::init_telemetry();
    info!("Starting jobcrawlrs...");

    // 2. Load configuration
    let settings = Settings::new()?;
    info!("Configuration loaded");

    // 3. Initialize fetch engine
    let engine = ReqwestEngine::new(&settings.fetch)?;
    let fetcher: Arc<dyn PageFetcher> = Arc::new(TimeoutFetcher::new(
        engine,
        Duration::from_secs(settings.fetch.timeout_secs),
    ));
    info!(
        "Fetch engine '{}' ready ({:?} mode)",
        fetcher.name(),
        settings.fetch.mode
    );

    // 4. Build scan use case
    let policy = settings.heuristic_policy();
    let use_case = Arc::new(ScanJobsUseCase::new(
        fetcher,
        &policy,
        settings.fetch.max_concurrency,
    )?);

    // 5. Start HTTP server
    let app = routes::app(use_case, settings.listing.clone());

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
