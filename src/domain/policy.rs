// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! 启发式策略
//!
//! 触发短语、关键词和选择器列表都作为可替换的策略对象，
//! 调整准确率时无需改动流水线控制流程。

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 策略构建错误
#[derive(Error, Debug)]
pub enum PolicyError {
    /// 无效的CSS选择器
    #[error("Invalid selector '{selector}': {reason}")]
    InvalidSelector { selector: String, reason: String },
    /// 无效的正则表达式
    #[error("Invalid pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
    /// 空列表
    #[error("Policy list '{0}' must not be empty")]
    Empty(&'static str),
}

/// 标题长度规则
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TitleLengthRule {
    /// 至少包含两个单词
    #[default]
    MultiWord,
    /// 字符数必须超过给定值
    MinChars(usize),
}

impl TitleLengthRule {
    /// 判断文本是否满足规则
    pub fn accepts(&self, text: &str) -> bool {
        match self {
            TitleLengthRule::MultiWord => text.split_whitespace().nth(1).is_some(),
            TitleLengthRule::MinChars(min) => text.chars().count() > *min,
        }
    }
}

/// 标题提取策略
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitlePolicy {
    /// 由具体到宽泛排列的选择器
    pub selectors: Vec<String>,
    /// 长度规则
    pub length_rule: TitleLengthRule,
    /// 找不到标题时返回的占位文本
    pub sentinel: String,
}

/// 找不到标题时的默认占位文本
pub const UNTITLED_SENTINEL: &str = "Title not found";

impl Default for TitlePolicy {
    fn default() -> Self {
        Self {
            selectors: to_strings(&[
                "article h1.entry-title",
                "main h1.entry-title",
                "article h1.post-title",
                "main h1.post-title",
                ".job-title",
                "article h1",
                "main h1",
                "article h2",
                "main h2",
                "h1",
            ]),
            length_rule: TitleLengthRule::default(),
            sentinel: UNTITLED_SENTINEL.to_string(),
        }
    }
}

/// 截止日期触发短语策略
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeadlinePolicy {
    pub trigger_phrases: Vec<String>,
    /// 日期载荷最多包含的字符数
    pub max_payload_chars: usize,
}

impl Default for DeadlinePolicy {
    fn default() -> Self {
        Self {
            trigger_phrases: to_strings(&[
                "last date",
                "closing date",
                "deadline",
                "apply by",
                "applications close",
                "submit by",
            ]),
            max_payload_chars: 40,
        }
    }
}

/// 相关性评分策略
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelevancePolicy {
    /// 小写关键词，按子串匹配
    pub keywords: Vec<String>,
    /// 信任截止日期所需的最低分数
    pub min_score: usize,
}

impl Default for RelevancePolicy {
    fn default() -> Self {
        Self {
            keywords: to_strings(&[
                "qualification",
                "responsibilit",
                "experience",
                "salary",
                "location",
                "apply now",
                "job type",
            ]),
            min_score: 2,
        }
    }
}

/// 链接发现策略
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkPolicy {
    /// 锚点所在的结构容器
    pub container_selectors: Vec<String>,
    /// URL 或锚文本必须包含的关键词之一
    pub keywords: Vec<String>,
}

impl Default for LinkPolicy {
    fn default() -> Self {
        Self {
            container_selectors: to_strings(&[
                "article",
                ".post",
                ".job",
                ".jobs",
                ".job-listing",
                ".job-listings",
                ".career",
                ".careers",
                ".vacancy",
                ".vacancies",
                "h1",
                "h2",
                "h3",
                "h4",
            ]),
            keywords: to_strings(&["job", "career", "vacancy", "hiring", "position"]),
        }
    }
}

/// 全部启发式策略
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeuristicPolicy {
    pub title: TitlePolicy,
    pub deadline: DeadlinePolicy,
    pub relevance: RelevancePolicy,
    pub links: LinkPolicy,
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
