use thiserror::Error;
use std::path::{Path, PathBuf};

/// 自定义错误类型
///
/// 文本变换本身不会失败，错误只出现在 IO 边界和配置加载上。
#[derive(Error, Debug)]
pub enum CleanerError {
    #[error("Input file not found: {0}")]
    MissingInput(PathBuf),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// 截断过长文本用于显示（按字符而非字节截断）
pub fn truncate_for_display(text: &str, max_chars: usize) -> String {
    if text.chars().count() > max_chars {
        format!("{}...", text.chars().take(max_chars).collect::<String>())
    } else {
        text.to_string()
    }
}

/// 创建文件备份
///
/// 备份文件名格式：`<原文件名>.<时间戳>.bak`
pub fn create_backup(file_path: &Path) -> Result<PathBuf, CleanerError> {
    if !file_path.exists() {
        return Err(CleanerError::MissingInput(file_path.to_path_buf()));
    }

    let timestamp = chrono::Local::now().format("%Y-%m-%d-%H-%M-%S");
    let file_name = file_path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let backup_path = file_path.with_file_name(format!("{}.{}.bak", file_name, timestamp));

    std::fs::copy(file_path, &backup_path)?;

    Ok(backup_path)
}
