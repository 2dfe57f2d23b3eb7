/// IO 抽象层 - trait 定义
///
/// 该模块定义了文档读写的抽象接口，支持依赖注入和测试 mock。

use std::path::Path;
use crate::utils::CleanerError;

/// 文档读取 trait
///
/// # 职责
/// - 把整个文件按 UTF-8 读入内存
/// - 不负责改写，仅负责 IO
///
/// # 实现示例
/// ```rust,ignore
/// pub struct DefaultDocumentReader;
/// impl DocumentReader for DefaultDocumentReader {
///     fn read(&self, path: &Path) -> Result<String, CleanerError> {
///         Ok(std::fs::read_to_string(path)?)
///     }
/// }
/// ```
pub trait DocumentReader {
    /// 读取文档全文
    ///
    /// # 参数
    /// * `path` - 文件路径
    fn read(&self, path: &Path) -> Result<String, CleanerError>;
}

/// 文档写入 trait
///
/// # 职责
/// - 用新文本整体覆盖目标文件
pub trait DocumentWriter {
    /// 写入文档全文
    ///
    /// # 参数
    /// * `content` - 要写入的文本
    /// * `path` - 目标文件路径
    fn write(&self, content: &str, path: &Path) -> Result<(), CleanerError>;
}
