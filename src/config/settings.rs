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

use crate::application::use_cases::scan_jobs::DEFAULT_MAX_CONCURRENCY;
use crate::domain::policy::{HeuristicPolicy, TitleLengthRule};
use crate::engines::reqwest_engine::FetchMode;
use crate::engines::traits::EngineError;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;

/// 应用程序配置设置
///
/// 包含服务器、抓取、提取、列表展示和启发式策略等所有配置项
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// 服务器配置
    pub server: ServerSettings,
    /// 抓取配置
    pub fetch: FetchSettings,
    /// 提取配置
    pub extraction: ExtractionSettings,
    /// 列表展示配置
    pub listing: ListingSettings,
    /// 启发式策略覆盖项
    #[serde(default)]
    pub policy: PolicySettings,
}

/// 服务器配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    /// 服务器监听主机地址
    pub host: String,
    /// 服务器监听端口
    pub port: u16,
}

/// 抓取模式配置值
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FetchModeSetting {
    #[default]
    Direct,
    Proxy,
}

/// 抓取配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct FetchSettings {
    /// 单次请求超时时间（秒）
    pub timeout_secs: u64,
    /// 候选页面并发抓取上限
    pub max_concurrency: usize,
    /// 请求使用的User-Agent
    pub user_agent: String,
    /// 抓取模式 (direct, proxy)
    pub mode: FetchModeSetting,
    /// 代理前缀 (当 mode=proxy 时使用)
    pub proxy_prefix: Option<String>,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            timeout_secs: 20,
            max_concurrency: DEFAULT_MAX_CONCURRENCY,
            user_agent: format!("jobcrawlrs/{}", env!("CARGO_PKG_VERSION")),
            mode: FetchModeSetting::Direct,
            proxy_prefix: None,
        }
    }
}

impl FetchSettings {
    /// 解析抓取模式
    ///
    /// # 返回值
    ///
    /// * `Ok(FetchMode)` - 抓取模式
    /// * `Err(EngineError)` - 代理模式缺少前缀
    pub fn fetch_mode(&self) -> Result<FetchMode, EngineError> {
        match self.mode {
            FetchModeSetting::Direct => Ok(FetchMode::Direct),
            FetchModeSetting::Proxy => match self.proxy_prefix.as_deref() {
                Some(prefix) if !prefix.trim().is_empty() => Ok(FetchMode::Proxy {
                    prefix: prefix.to_string(),
                }),
                _ => Err(EngineError::Other(
                    "fetch.proxy_prefix is required when fetch.mode = \"proxy\"".to_string(),
                )),
            },
        }
    }
}

/// 标题长度规则配置值
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TitleRuleSetting {
    #[default]
    MultiWord,
    MinChars,
}

/// 提取配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct ExtractionSettings {
    /// 信任截止日期所需的最低相关性分数
    pub min_relevance_score: usize,
    /// 标题长度规则 (multi_word, min_chars)
    pub title_rule: TitleRuleSetting,
    /// min_chars 规则下标题必须超过的字符数
    pub title_min_chars: usize,
}

impl ExtractionSettings {
    pub fn title_length_rule(&self) -> TitleLengthRule {
        match self.title_rule {
            TitleRuleSetting::MultiWord => TitleLengthRule::MultiWord,
            TitleRuleSetting::MinChars => TitleLengthRule::MinChars(self.title_min_chars),
        }
    }
}

/// 列表展示配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct ListingSettings {
    /// 默认每页条数
    pub per_page: usize,
    /// 默认截止期限窗口（月），未设置时不启用
    pub horizon_months: Option<u32>,
}

/// 启发式策略覆盖项
///
/// 未设置的列表沿用内置默认值
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PolicySettings {
    pub trigger_phrases: Option<Vec<String>>,
    pub relevance_keywords: Option<Vec<String>>,
    pub link_keywords: Option<Vec<String>>,
    pub link_containers: Option<Vec<String>>,
    pub title_selectors: Option<Vec<String>>,
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 从内置默认值、配置文件和环境变量逐层加载配置
    ///
    /// # 返回值
    ///
    /// * `Ok(Settings)` - 成功加载的配置
    /// * `Err(ConfigError)` - 配置加载失败
    pub fn new() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        Self::builder()?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::with_prefix("JOBCRAWLRS").separator("__"))
            .build()?
            .try_deserialize()
    }

    /// 仅包含内置默认值的配置构建器
    pub fn builder() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        let fetch = FetchSettings::default();
        Config::builder()
            // Start with default settings
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            .set_default("fetch.timeout_secs", fetch.timeout_secs)?
            .set_default("fetch.max_concurrency", fetch.max_concurrency as u64)?
            .set_default("fetch.user_agent", fetch.user_agent)?
            .set_default("fetch.mode", "direct")?
            .set_default("extraction.min_relevance_score", 2)?
            .set_default("extraction.title_rule", "multi_word")?
            .set_default("extraction.title_min_chars", 10)?
            .set_default("listing.per_page", 20)
    }

    /// 合并配置覆盖项后的启发式策略
    pub fn heuristic_policy(&self) -> HeuristicPolicy {
        let mut policy = HeuristicPolicy::default();
        let overrides = &self.policy;

        if let Some(phrases) = &overrides.trigger_phrases {
            policy.deadline.trigger_phrases = phrases.clone();
        }
        if let Some(keywords) = &overrides.relevance_keywords {
            policy.relevance.keywords = keywords.iter().map(|k| k.to_lowercase()).collect();
        }
        if let Some(keywords) = &overrides.link_keywords {
            policy.links.keywords = keywords.clone();
        }
        if let Some(containers) = &overrides.link_containers {
            policy.links.container_selectors = containers.clone();
        }
        if let Some(selectors) = &overrides.title_selectors {
            policy.title.selectors = selectors.clone();
        }

        policy.relevance.min_score = self.extraction.min_relevance_score;
        policy.title.length_rule = self.extraction.title_length_rule();
        policy
    }
}

#[cfg(test)]
#[path = "settings_test.rs"]
mod tests;
