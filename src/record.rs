use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::RECORD_KEYWORD;

/// 非贪婪记录匹配：关键字、可选空白、左括号，直到第一个右括号（可跨行）
static LAZY_RECORD_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"(?s){}\s*\(.*?\)", regex::escape(RECORD_KEYWORD)))
        .expect("record pattern is valid")
});

/// 记录起始：关键字、可选空白、左括号
static RECORD_OPEN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"{}\s*\(", regex::escape(RECORD_KEYWORD)))
        .expect("record opener pattern is valid")
});

/// 记录边界的确定方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordMatching {
    /// 在第一个右括号处结束（嵌套括号会让记录提前结束）
    #[default]
    Lazy,
    /// 括号深度计数，单引号内的括号不计入
    Balanced,
}

/// 文档中的一个记录区间（字节偏移，左闭右开）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordSpan {
    /// 记录在文档中的序号（从 0 开始）
    pub index: usize,
    pub start: usize,
    pub end: usize,
}

impl RecordSpan {
    /// 取出记录对应的原文
    pub fn text<'a>(&self, document: &'a str) -> &'a str {
        &document[self.start..self.end]
    }
}

/// 查找文档中所有互不重叠的记录，按出现顺序返回
pub fn find_records(document: &str, matching: RecordMatching) -> Vec<RecordSpan> {
    match matching {
        RecordMatching::Lazy => LAZY_RECORD_RE
            .find_iter(document)
            .enumerate()
            .map(|(index, m)| RecordSpan {
                index,
                start: m.start(),
                end: m.end(),
            })
            .collect(),
        RecordMatching::Balanced => find_balanced_records(document),
    }
}

fn find_balanced_records(document: &str) -> Vec<RecordSpan> {
    let mut spans = Vec::new();
    let mut pos = 0;

    while let Some(open) = RECORD_OPEN_RE.find_at(document, pos) {
        match balanced_close(document.as_bytes(), open.end()) {
            Some(end) => {
                spans.push(RecordSpan {
                    index: spans.len(),
                    start: open.start(),
                    end,
                });
                pos = end;
            }
            // 没有配对的右括号，不算记录
            None => pos = open.end(),
        }
    }

    spans
}

/// 从左括号之后开始扫描，返回配对右括号之后的偏移
///
/// 括号和单引号都是 ASCII，按字节扫描不会切断 UTF-8 字符。
fn balanced_close(bytes: &[u8], from: usize) -> Option<usize> {
    let mut depth = 1usize;
    let mut in_quote = false;

    for (offset, &byte) in bytes[from..].iter().enumerate() {
        match byte {
            b'\'' => in_quote = !in_quote,
            b'(' if !in_quote => depth += 1,
            b')' if !in_quote => {
                depth -= 1;
                if depth == 0 {
                    return Some(from + offset + 1);
                }
            }
            _ => {}
        }
    }

    None
}
