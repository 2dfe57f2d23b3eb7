/// 文档 IO 实现
///
/// 提供基于文件系统的默认读写实现
use std::path::Path;
use super::traits::{DocumentReader, DocumentWriter};
use crate::utils::CleanerError;

/// 默认的文档读取器（基于 std::fs）
#[derive(Debug, Clone, Default)]
pub struct DefaultDocumentReader;

impl DocumentReader for DefaultDocumentReader {
    fn read(&self, path: &Path) -> Result<String, CleanerError> {
        if !path.exists() {
            return Err(CleanerError::MissingInput(path.to_path_buf()));
        }
        Ok(std::fs::read_to_string(path)?)
    }
}

/// 默认的文档写入器（基于 std::fs）
///
/// 直接覆盖写入，不经过临时文件。
#[derive(Debug, Clone, Default)]
pub struct DefaultDocumentWriter;

impl DocumentWriter for DefaultDocumentWriter {
    fn write(&self, content: &str, path: &Path) -> Result<(), CleanerError> {
        // 确保父目录存在
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        std::fs::write(path, content)?;
        Ok(())
    }
}
