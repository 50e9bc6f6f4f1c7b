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

use crate::{
    domain::{
        models::{
            document::Document,
            job::{dedup_by_link, CalendarDate, Job},
            scan::{ScanReport, ScanStatus},
        },
        policy::{HeuristicPolicy, PolicyError},
        services::{
            deadline_extractor::{DeadlineExtractor, DeadlineVerdict},
            link_discoverer::LinkDiscoverer,
            title_extractor::TitleExtractor,
        },
    },
    engines::traits::{EngineError, PageFetcher},
};
use chrono::Utc;
use futures::stream::{self, StreamExt};
use metrics::counter;
use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};
use thiserror::Error;
use tokio::sync::mpsc::UnboundedSender;
use tracing::{debug, info, warn};
use url::Url;

/// 默认候选页面并发抓取上限
pub const DEFAULT_MAX_CONCURRENCY: usize = 16;

/// 扫描错误
///
/// 这些错误会终止整次扫描，单个候选页面的失败不会出现在这里
#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Invalid seed URL '{url}': {reason}")]
    InvalidSeedUrl { url: String, reason: String },
    #[error("Seed page {url} is unavailable: {source}")]
    SeedUnavailable {
        url: String,
        #[source]
        source: EngineError,
    },
    #[error("No job-like links found on {url}")]
    NoCandidateLinks { url: String },
    #[error("Scan was superseded by a newer scan")]
    Superseded,
}

/// 扫描进度接收方
pub trait ScanProgress: Send + Sync {
    fn report(&self, status: ScanStatus);
}

/// 将进度写入日志
pub struct LogProgress;

impl ScanProgress for LogProgress {
    fn report(&self, status: ScanStatus) {
        info!("{}", status);
    }
}

impl ScanProgress for UnboundedSender<ScanStatus> {
    fn report(&self, status: ScanStatus) {
        // Receiver may be gone; progress is informational
        let _ = self.send(status);
    }
}

/// 扫描会话
///
/// 由调用方持有。同一会话中开始新扫描时，尚未完成的旧扫描会失效；
/// 不同会话之间互不影响。
#[derive(Debug, Clone, Default)]
pub struct ScanSession {
    generation: Arc<AtomicU64>,
}

impl ScanSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// 最近一次开始的扫描代数，0 表示尚未开始
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    fn begin(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    fn is_current(&self, ticket: u64) -> bool {
        self.generation() == ticket
    }
}

/// 职位扫描用例
///
/// 抓取种子页面，发现候选链接，并发抓取候选页面，
/// 提取标题和截止日期，最后按链接去重
pub struct ScanJobsUseCase {
    fetcher: Arc<dyn PageFetcher>,
    discoverer: LinkDiscoverer,
    titles: TitleExtractor,
    deadlines: DeadlineExtractor,
    max_concurrency: usize,
    today: Option<CalendarDate>,
}

impl ScanJobsUseCase {
    /// 创建扫描用例
    ///
    /// # 参数
    ///
    /// * `fetcher` - 页面抓取引擎
    /// * `policy` - 启发式策略
    /// * `max_concurrency` - 候选页面并发抓取上限，0 按 1 处理
    ///
    /// # 返回值
    ///
    /// * `Ok(ScanJobsUseCase)` - 用例实例
    /// * `Err(PolicyError)` - 策略中的选择器或触发短语无效
    pub fn new(
        fetcher: Arc<dyn PageFetcher>,
        policy: &HeuristicPolicy,
        max_concurrency: usize,
    ) -> Result<Self, PolicyError> {
        Ok(Self {
            fetcher,
            discoverer: LinkDiscoverer::new(&policy.links)?,
            titles: TitleExtractor::new(&policy.title)?,
            deadlines: DeadlineExtractor::new(&policy.deadline, &policy.relevance)?,
            max_concurrency: max_concurrency.max(1),
            today: None,
        })
    }

    /// 固定“今天”的日期，未设置时使用UTC当天日期
    pub fn with_today(mut self, today: CalendarDate) -> Self {
        self.today = Some(today);
        self
    }

    /// 判断截止日期是否过期时使用的“今天”
    pub fn today(&self) -> CalendarDate {
        self.today.unwrap_or_else(|| Utc::now().date_naive())
    }

    /// 执行一次扫描
    ///
    /// 同一会话中新的扫描开始后，尚未完成的旧扫描会返回 `ScanError::Superseded`
    ///
    /// # 参数
    ///
    /// * `seed_url` - 职位列表页URL
    /// * `session` - 调用方的扫描会话
    /// * `progress` - 进度接收方
    ///
    /// # 返回值
    ///
    /// * `Ok(ScanReport)` - 去重后的职位及统计，职位列表可能为空
    /// * `Err(ScanError)` - 种子页面不可用、没有候选链接或扫描已过期
    pub async fn run(
        &self,
        seed_url: &str,
        session: &ScanSession,
        progress: &dyn ScanProgress,
    ) -> Result<ScanReport, ScanError> {
        let ticket = session.begin();
        counter!("job_scan_runs_total").increment(1);

        let result = self.scan(seed_url, session, ticket, progress).await;
        match &result {
            Ok(report) => progress.report(ScanStatus::Completed {
                jobs: report.jobs.len(),
            }),
            Err(e) => {
                warn!("Scan of {} failed: {}", seed_url, e);
                progress.report(ScanStatus::Failed {
                    reason: e.to_string(),
                });
            }
        }
        result
    }

    async fn scan(
        &self,
        seed_url: &str,
        session: &ScanSession,
        ticket: u64,
        progress: &dyn ScanProgress,
    ) -> Result<ScanReport, ScanError> {
        let seed = parse_seed_url(seed_url)?;
        let today = self.today();

        progress.report(ScanStatus::FetchingSeed {
            url: seed.to_string(),
        });
        let seed_html =
            self.fetcher
                .fetch_page(seed.as_str())
                .await
                .map_err(|source| ScanError::SeedUnavailable {
                    url: seed.to_string(),
                    source,
                })?;

        progress.report(ScanStatus::DiscoveringLinks);
        let candidates = self.discover_links(&seed, &seed_html);
        if candidates.is_empty() {
            return Err(ScanError::NoCandidateLinks {
                url: seed.to_string(),
            });
        }

        progress.report(ScanStatus::FetchingCandidates {
            total: candidates.len(),
        });
        let pages: Vec<(String, Result<String, EngineError>)> =
            stream::iter(candidates.iter().cloned().map(|link| async move {
                let result = self.fetcher.fetch_page(&link).await;
                (link, result)
            }))
            .buffered(self.max_concurrency)
            .collect()
            .await;

        if !session.is_current(ticket) {
            info!("Dropping results of superseded scan of {}", seed);
            return Err(ScanError::Superseded);
        }

        let mut report = ScanReport {
            candidates: candidates.len(),
            ..ScanReport::default()
        };
        let mut fetched = Vec::with_capacity(pages.len());
        for (link, result) in pages {
            match result {
                Ok(html) => fetched.push((link, html)),
                Err(e) => {
                    warn!("Failed to fetch {}: {}", link, e);
                    counter!("job_scan_links_failed_total").increment(1);
                    report.failed += 1;
                }
            }
        }
        report.fetched = fetched.len();

        progress.report(ScanStatus::Extracting {
            fetched: report.fetched,
            failed: report.failed,
        });
        let mut jobs = Vec::with_capacity(fetched.len());
        for (link, html) in fetched {
            match self.extract_job(&link, &html, today) {
                Some(job) => jobs.push(job),
                None => report.rejected += 1,
            }
        }

        report.jobs = dedup_by_link(jobs);
        counter!("job_scan_jobs_found_total").increment(report.jobs.len() as u64);
        info!(
            "Scan of {} found {} jobs ({} candidates, {} unavailable, {} rejected)",
            seed,
            report.jobs.len(),
            report.candidates,
            report.failed,
            report.rejected
        );
        Ok(report)
    }

    /// 从种子页面中发现候选链接，按字典序返回
    fn discover_links(&self, seed: &Url, seed_html: &str) -> Vec<String> {
        let doc = Document::parse(seed.clone(), seed_html);
        let mut links: Vec<String> = self
            .discoverer
            .discover(&doc, seed.as_str())
            .into_iter()
            .collect();
        links.sort();
        links
    }

    fn extract_job(&self, link: &str, html: &str, today: CalendarDate) -> Option<Job> {
        let url = match Url::parse(link) {
            Ok(url) => url,
            Err(e) => {
                debug!("Skipping {}: {}", link, e);
                return None;
            }
        };
        let doc = Document::parse(url, html);

        match self.deadlines.evaluate(&doc, today) {
            DeadlineVerdict::Accepted(date) => {
                Some(Job::new(self.titles.extract(&doc), link, date))
            }
            verdict => {
                debug!("Rejected {}: {}", link, verdict);
                None
            }
        }
    }
}

fn parse_seed_url(seed_url: &str) -> Result<Url, ScanError> {
    let invalid = |reason: String| ScanError::InvalidSeedUrl {
        url: seed_url.to_string(),
        reason,
    };

    let url = Url::parse(seed_url.trim()).map_err(|e| invalid(e.to_string()))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(invalid(format!("unsupported scheme '{}'", other))),
    }
}

#[cfg(test)]
#[path = "scan_jobs_test.rs"]
mod tests;
