use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::field::ReplaceStrategy;
use crate::record::RecordMatching;
use crate::utils::CleanerError;

/// 清理配置
///
/// 可从 JSON 文件加载，缺省字段取默认值：
///
/// ```json
/// { "matching": "balanced", "replace": "span", "backup": true }
/// ```
///
/// 命令行参数会覆盖文件中的值。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CleanerConfig {
    /// 记录边界的确定方式
    pub matching: RecordMatching,
    /// 字段值的替换方式
    pub replace: ReplaceStrategy,
    /// 写入前备份原文件
    pub backup: bool,
    /// 只改写和报告，不写回文件
    pub dry_run: bool,
}

impl CleanerConfig {
    /// 从 JSON 字符串解析
    pub fn from_json(json: &str) -> Result<Self, CleanerError> {
        serde_json::from_str(json).map_err(|e| CleanerError::InvalidConfig(e.to_string()))
    }

    /// 从 JSON 文件加载
    pub fn load(path: &Path) -> Result<Self, CleanerError> {
        if !path.exists() {
            return Err(CleanerError::MissingInput(path.to_path_buf()));
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content).map_err(|e| match e {
            CleanerError::InvalidConfig(msg) => {
                CleanerError::InvalidConfig(format!("{}: {}", path.display(), msg))
            }
            other => other,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = CleanerConfig::default();
        assert_eq!(config.matching, RecordMatching::Lazy);
        assert_eq!(config.replace, ReplaceStrategy::Literal);
        assert!(!config.backup);
        assert!(!config.dry_run);
    }

    #[test]
    fn test_partial_json() {
        let config = CleanerConfig::from_json(r#"{ "matching": "balanced" }"#).unwrap();
        assert_eq!(config.matching, RecordMatching::Balanced);
        assert_eq!(config.replace, ReplaceStrategy::Literal);
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result = CleanerConfig::from_json(r#"{ "keyword": "OtherItem" }"#);
        assert!(matches!(result, Err(CleanerError::InvalidConfig(_))));
    }

    #[test]
    fn test_load_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("cleaner.json");
        std::fs::write(&path, r#"{ "replace": "span", "backup": true }"#).unwrap();

        let config = CleanerConfig::load(&path).unwrap();
        assert_eq!(config.replace, ReplaceStrategy::Span);
        assert!(config.backup);
    }

    #[test]
    fn test_load_invalid_file_mentions_path() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("broken.json");
        std::fs::write(&path, "{ not json").unwrap();

        match CleanerConfig::load(&path) {
            Err(CleanerError::InvalidConfig(msg)) => assert!(msg.contains("broken.json")),
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
