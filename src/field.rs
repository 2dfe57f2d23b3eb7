use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

static TEXT_FIELD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"text:\s*'([^']*)'").expect("text field pattern is valid"));

static REFERENCE_FIELD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"reference:\s*'([^']*)'").expect("reference field pattern is valid"));

/// 需要清理的字段名
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldName {
    Text,
    Reference,
}

impl FieldName {
    /// 按处理顺序排列：先 text 后 reference
    pub const ALL: [FieldName; 2] = [FieldName::Text, FieldName::Reference];

    pub fn as_str(&self) -> &'static str {
        match self {
            FieldName::Text => "text",
            FieldName::Reference => "reference",
        }
    }

    fn pattern(&self) -> &'static Regex {
        match self {
            FieldName::Text => &*TEXT_FIELD_RE,
            FieldName::Reference => &*REFERENCE_FIELD_RE,
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 字段值的替换方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReplaceStrategy {
    /// 以 `name: '<去空白后的值>'` 为字面量查找并替换第一处出现。
    /// 值两端带空白、或冒号后不是恰好一个空格时找不到字面量，字段保持原样。
    #[default]
    Literal,
    /// 直接按匹配到的值区间拼接替换，保留值开头的空白
    Span,
}

/// 记录中定位到的字段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldMatch<'a> {
    pub name: FieldName,
    /// 引号内的原始值（未去空白）
    pub value: &'a str,
    /// 值在记录文本中的字节区间
    pub value_start: usize,
    pub value_end: usize,
}

/// 单个字段的改写结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRewrite {
    /// 改写后的整条记录文本
    pub record_text: String,
    pub old_value: String,
    pub new_value: String,
}

/// 在记录文本中查找字段的第一次出现
pub fn locate_field(record_text: &str, name: FieldName) -> Option<FieldMatch<'_>> {
    let captures = name.pattern().captures(record_text)?;
    let value = captures.get(1)?;

    Some(FieldMatch {
        name,
        value: value.as_str(),
        value_start: value.start(),
        value_end: value.end(),
    })
}

/// 去掉末尾由句点和空白组成的整段
fn strip_trailing_run(value: &str) -> &str {
    value.trim_end_matches(|c: char| c == '.' || c.is_whitespace())
}

/// 计算清理后的值
///
/// 去空白后的值以句点结尾时返回清理结果，否则返回 `None`。
pub fn clean_value(value: &str) -> Option<String> {
    let candidate = value.trim();
    if !candidate.ends_with('.') {
        return None;
    }
    Some(strip_trailing_run(candidate).to_string())
}

/// 改写记录中的一个字段；字段不存在、无需清理或字面量未命中时返回 `None`
pub fn rewrite_field(
    record_text: &str,
    name: FieldName,
    strategy: ReplaceStrategy,
) -> Option<FieldRewrite> {
    let field = locate_field(record_text, name)?;

    match strategy {
        ReplaceStrategy::Literal => rewrite_literal(record_text, &field),
        ReplaceStrategy::Span => rewrite_span(record_text, &field),
    }
}

fn rewrite_literal(record_text: &str, field: &FieldMatch<'_>) -> Option<FieldRewrite> {
    let candidate = field.value.trim();
    let cleaned = clean_value(field.value)?;

    let needle = format!("{}: '{}'", field.name, candidate);
    let pos = record_text.find(&needle)?;
    let replacement = format!("{}: '{}'", field.name, cleaned);

    let mut rewritten = String::with_capacity(record_text.len());
    rewritten.push_str(&record_text[..pos]);
    rewritten.push_str(&replacement);
    rewritten.push_str(&record_text[pos + needle.len()..]);

    Some(FieldRewrite {
        record_text: rewritten,
        old_value: candidate.to_string(),
        new_value: cleaned,
    })
}

fn rewrite_span(record_text: &str, field: &FieldMatch<'_>) -> Option<FieldRewrite> {
    clean_value(field.value)?;
    let new_value = strip_trailing_run(field.value);

    let mut rewritten = String::with_capacity(record_text.len());
    rewritten.push_str(&record_text[..field.value_start]);
    rewritten.push_str(new_value);
    rewritten.push_str(&record_text[field.value_end..]);

    Some(FieldRewrite {
        record_text: rewritten,
        old_value: field.value.to_string(),
        new_value: new_value.to_string(),
    })
}
