// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use scraper::html::Select;
use scraper::{ElementRef, Html, Selector};
use url::Url;

/// 不参与可见文本渲染的元素
const INVISIBLE_ELEMENTS: &[&str] = &["script", "style", "noscript", "template", "head"];

/// 块级元素，相邻块之间的文本用空格分隔
const BLOCK_ELEMENTS: &[&str] = &[
    "address", "article", "aside", "blockquote", "body", "dd", "div", "dl", "dt", "fieldset",
    "figcaption", "figure", "footer", "form", "h1", "h2", "h3", "h4", "h5", "h6", "header", "hr",
    "html", "li", "main", "nav", "ol", "p", "pre", "section", "table", "tbody", "td", "tfoot",
    "th", "thead", "tr", "ul",
];

/// 已解析的页面文档
///
/// 每次抓取生成一个，提取完成后即丢弃。内部的 `Html` 不是 `Send`，
/// 因此文档不能跨越 `.await` 持有。
pub struct Document {
    html: Html,
    text: String,
    url: Url,
}

impl Document {
    /// 从原始HTML构建文档
    ///
    /// # 参数
    ///
    /// * `url` - 页面来源URL
    /// * `raw_html` - 原始HTML内容
    pub fn parse(url: Url, raw_html: &str) -> Self {
        let html = Html::parse_document(raw_html);
        let text = visible_text(&html);
        Self { html, text, url }
    }

    /// 按选择器查询元素
    pub fn select<'a, 'b>(&'a self, selector: &'b Selector) -> Select<'a, 'b> {
        self.html.select(selector)
    }

    /// 元素的可见文本（去除首尾空白，合并连续空白）
    pub fn element_text(element: &ElementRef<'_>) -> String {
        render_text(*element)
    }

    /// 整个文档的可见文本
    pub fn text(&self) -> &str {
        &self.text
    }

    /// 文档来源URL
    pub fn url(&self) -> &Url {
        &self.url
    }
}

fn visible_text(html: &Html) -> String {
    render_text(html.root_element())
}

/// 按浏览器的方式拼接文本节点
///
/// 行内元素两侧的文本直接相连，只有源文本中的空白、`<br>` 和块级元素边界
/// 会产生分隔，随后合并连续空白
fn render_text(root: ElementRef<'_>) -> String {
    let mut raw = String::new();
    let mut last_block = None;
    let mut line_break = false;

    for node in root.descendants() {
        let hidden = node.ancestors().any(|ancestor| {
            ancestor
                .value()
                .as_element()
                .is_some_and(|el| INVISIBLE_ELEMENTS.contains(&el.name()))
        });
        if hidden {
            continue;
        }
        if node.value().as_element().is_some_and(|el| el.name() == "br") {
            line_break = true;
            continue;
        }
        let Some(text) = node.value().as_text() else {
            continue;
        };

        let block = node
            .ancestors()
            .find(|ancestor| {
                ancestor
                    .value()
                    .as_element()
                    .is_some_and(|el| BLOCK_ELEMENTS.contains(&el.name()))
            })
            .map(|ancestor| ancestor.id());
        if !raw.is_empty() && (line_break || block != last_block) {
            raw.push(' ');
        }
        raw.push_str(text);
        last_block = block;
        line_break = false;
    }

    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}
