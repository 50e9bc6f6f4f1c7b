// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::document::Document;
use crate::domain::models::job::CalendarDate;
use crate::domain::policy::{DeadlinePolicy, PolicyError, RelevancePolicy};
use crate::domain::services::date_parser::DateParser;
use crate::domain::services::relevance_scorer::RelevanceScorer;
use regex::Regex;
use std::fmt;

/// 截止日期判定结果
///
/// 除 `Accepted` 外的每种结果都表示该页面被丢弃，区分原因只用于日志
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeadlineVerdict {
    /// 没有找到触发短语
    NoTrigger,
    /// 相关性分数不足
    LowRelevance { score: usize },
    /// 载荷无法解析为日期
    Unparseable { payload: String },
    /// 截止日期已过
    Expired { date: CalendarDate },
    /// 有效截止日期
    Accepted(CalendarDate),
}

impl DeadlineVerdict {
    pub fn deadline(&self) -> Option<CalendarDate> {
        match self {
            DeadlineVerdict::Accepted(date) => Some(*date),
            _ => None,
        }
    }
}

impl fmt::Display for DeadlineVerdict {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DeadlineVerdict::NoTrigger => write!(f, "no deadline phrase"),
            DeadlineVerdict::LowRelevance { score } => write!(f, "relevance score {} too low", score),
            DeadlineVerdict::Unparseable { payload } => write!(f, "unparseable date '{}'", payload),
            DeadlineVerdict::Expired { date } => write!(f, "deadline {} already passed", date),
            DeadlineVerdict::Accepted(date) => write!(f, "deadline {}", date),
        }
    }
}

/// 截止日期提取器
///
/// 两阶段判定：先用触发短语找到日期载荷，再用关键词分数确认页面是职位页，
/// 最后交给 [`DateParser`] 解析并排除已过期的日期。
pub struct DeadlineExtractor {
    trigger: Regex,
    scorer: RelevanceScorer,
}

impl DeadlineExtractor {
    /// 根据策略创建截止日期提取器
    ///
    /// # 参数
    ///
    /// * `deadline` - 触发短语策略
    /// * `relevance` - 相关性评分策略
    ///
    /// # 返回值
    ///
    /// * `Ok(DeadlineExtractor)` - 提取器实例
    /// * `Err(PolicyError)` - 触发短语为空或无法编译
    pub fn new(deadline: &DeadlinePolicy, relevance: &RelevancePolicy) -> Result<Self, PolicyError> {
        Ok(Self {
            trigger: build_trigger_regex(deadline)?,
            scorer: RelevanceScorer::new(relevance),
        })
    }

    /// 提取截止日期
    ///
    /// # 参数
    ///
    /// * `doc` - 已解析的页面
    /// * `today` - 扫描开始时的日期
    ///
    /// # 返回值
    ///
    /// 页面是有效职位页且截止日期不早于 `today` 时返回日期，否则返回 `None`
    pub fn extract_deadline(&self, doc: &Document, today: CalendarDate) -> Option<CalendarDate> {
        self.evaluate(doc, today).deadline()
    }

    /// 判定页面，并给出拒绝原因
    pub fn evaluate(&self, doc: &Document, today: CalendarDate) -> DeadlineVerdict {
        self.evaluate_text(doc.text(), today)
    }

    /// 对纯文本进行判定
    pub fn evaluate_text(&self, text: &str, today: CalendarDate) -> DeadlineVerdict {
        let payload = match self.trigger.captures(text).and_then(|caps| caps.get(1)) {
            Some(m) => m.as_str().trim_matches(|c: char| c.is_whitespace() || c == ':'),
            None => return DeadlineVerdict::NoTrigger,
        };

        let score = self.scorer.score(text);
        if score < self.scorer.min_score() {
            return DeadlineVerdict::LowRelevance { score };
        }

        match DateParser::parse(payload) {
            None => DeadlineVerdict::Unparseable {
                payload: payload.to_string(),
            },
            Some(date) if date < today => DeadlineVerdict::Expired { date },
            Some(date) => DeadlineVerdict::Accepted(date),
        }
    }
}

impl Default for DeadlineExtractor {
    fn default() -> Self {
        Self::new(&DeadlinePolicy::default(), &RelevancePolicy::default())
            .expect("default deadline phrases are valid")
    }
}

fn build_trigger_regex(policy: &DeadlinePolicy) -> Result<Regex, PolicyError> {
    let phrases: Vec<String> = policy
        .trigger_phrases
        .iter()
        .map(|phrase| {
            phrase
                .split_whitespace()
                .map(regex::escape)
                .collect::<Vec<_>>()
                .join(r"\s+")
        })
        .filter(|p| !p.is_empty())
        .collect();

    if phrases.is_empty() {
        return Err(PolicyError::Empty("trigger_phrases"));
    }

    let pattern = format!(
        r"(?i)\b(?:{})[\s:\-–]*([0-9A-Za-z_\s,/.:\-]{{0,{}}}\d{{1,4}})",
        phrases.join("|"),
        policy.max_payload_chars
    );
    Ok(Regex::new(&pattern)?)
}

#[cfg(test)]
#[path = "deadline_extractor_test.rs"]
mod tests;
