/// 变更记录模块
///
/// 记录一次改写中每个被清理的字段，用于摘要输出和 JSON 报告。

use serde::{Deserialize, Serialize};

use crate::field::FieldName;
use crate::utils::truncate_for_display;

/// 单个字段的变更
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldChange {
    /// 所在记录的序号（从 0 开始）
    pub record_index: usize,
    /// 字段名
    pub field: FieldName,
    /// 修改前的值
    pub old_value: String,
    /// 修改后的值
    pub new_value: String,
}

/// 一次改写的结果
///
/// # 字段说明
/// - `document`：改写后的完整文档（不参与序列化）
/// - `records_scanned`：匹配到的记录数量
/// - `changes`：按记录顺序、记录内先 text 后 reference 排列的变更
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditReport {
    #[serde(skip)]
    pub document: String,
    pub records_scanned: usize,
    pub changes: Vec<FieldChange>,
}

impl EditReport {
    /// 被修改的字段数量
    pub fn modified_count(&self) -> usize {
        self.changes.len()
    }

    /// 文档是否未发生任何变化
    pub fn is_unchanged(&self) -> bool {
        self.changes.is_empty()
    }

    /// 获取特定记录的所有变更
    pub fn changes_for_record(&self, record_index: usize) -> Vec<&FieldChange> {
        self.changes
            .iter()
            .filter(|change| change.record_index == record_index)
            .collect()
    }

    /// 修改过的记录数量
    pub fn modified_records(&self) -> usize {
        let mut indices: Vec<usize> = self.changes.iter().map(|c| c.record_index).collect();
        indices.dedup();
        indices.len()
    }

    /// 生成变更摘要
    pub fn summary(&self) -> String {
        format!(
            "扫描记录: {}, 修改记录: {}, 修改字段: {}",
            self.records_scanned,
            self.modified_records(),
            self.modified_count()
        )
    }

    /// 序列化为格式化的 JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl std::fmt::Display for FieldChange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[#{}] {}: \"{}\" -> \"{}\"",
            self.record_index,
            self.field,
            truncate_for_display(&self.old_value, 30),
            truncate_for_display(&self.new_value, 30)
        )
    }
}
