// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::document::Document;
use crate::domain::policy::{PolicyError, TitleLengthRule, TitlePolicy};
use scraper::Selector;

/// 标题提取器
///
/// 按策略中的选择器顺序查找第一个满足长度规则的元素，
/// 都不满足时退回到文档中第一个 `h1`，仍找不到则返回占位文本。
pub struct TitleExtractor {
    selectors: Vec<Selector>,
    fallback: Selector,
    length_rule: TitleLengthRule,
    sentinel: String,
}

impl TitleExtractor {
    /// 根据策略创建标题提取器
    ///
    /// # 返回值
    ///
    /// * `Ok(TitleExtractor)` - 提取器实例
    /// * `Err(PolicyError)` - 策略中包含无效选择器
    pub fn new(policy: &TitlePolicy) -> Result<Self, PolicyError> {
        let selectors = policy
            .selectors
            .iter()
            .map(|s| compile_selector(s))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            selectors,
            fallback: compile_selector("h1")?,
            length_rule: policy.length_rule,
            sentinel: policy.sentinel.clone(),
        })
    }

    /// 提取文档标题
    pub fn extract(&self, doc: &Document) -> String {
        for selector in &self.selectors {
            let found = doc
                .select(selector)
                .map(|el| Document::element_text(&el))
                .find(|text| self.length_rule.accepts(text));
            if let Some(title) = found {
                return title;
            }
        }

        doc.select(&self.fallback)
            .map(|el| Document::element_text(&el))
            .find(|text| !text.is_empty())
            .unwrap_or_else(|| self.sentinel.clone())
    }

    /// 找不到标题时使用的占位文本
    pub fn sentinel(&self) -> &str {
        &self.sentinel
    }
}

impl Default for TitleExtractor {
    fn default() -> Self {
        Self::new(&TitlePolicy::default()).expect("default title selectors are valid")
    }
}

pub(crate) fn compile_selector(selector: &str) -> Result<Selector, PolicyError> {
    Selector::parse(selector).map_err(|e| PolicyError::InvalidSelector {
        selector: selector.to_string(),
        reason: format!("{:?}", e),
    })
}
