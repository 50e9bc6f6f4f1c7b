// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::policy::RelevancePolicy;

/// 相关性评分器
///
/// 统计文档正文中出现了多少个职位相关关键词，
/// 分数达到阈值才认为页面确实是一个职位招聘页。
#[derive(Debug, Clone)]
pub struct RelevanceScorer {
    keywords: Vec<String>,
    min_score: usize,
}

impl RelevanceScorer {
    pub fn new(policy: &RelevancePolicy) -> Self {
        Self {
            keywords: policy
                .keywords
                .iter()
                .map(|k| k.trim().to_lowercase())
                .filter(|k| !k.is_empty())
                .collect(),
            min_score: policy.min_score,
        }
    }

    /// 计算相关性分数
    ///
    /// 每个关键词最多计一次，与出现次数无关
    pub fn score(&self, text: &str) -> usize {
        let body = text.to_lowercase();
        self.keywords
            .iter()
            .filter(|keyword| body.contains(keyword.as_str()))
            .count()
    }

    /// 分数是否达到阈值
    pub fn is_relevant(&self, text: &str) -> bool {
        self.score(text) >= self.min_score
    }

    pub fn min_score(&self) -> usize {
        self.min_score
    }
}

impl Default for RelevanceScorer {
    fn default() -> Self {
        Self::new(&RelevancePolicy::default())
    }
}
