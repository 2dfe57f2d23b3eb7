/// IO 抽象层模块
///
/// 该模块提供了文档读写的抽象接口，文本变换本身不接触文件系统。
/// 支持依赖注入和测试 mock（如内存 IO）。
///
/// # 架构设计
///
/// - **traits**: 定义 DocumentReader/DocumentWriter trait 接口
/// - **document_io**: 基于文件系统的默认实现
///
/// # 使用示例
///
/// ```rust,ignore
/// use record_cleaner::io::{DefaultDocumentReader, DocumentReader};
///
/// let reader = DefaultDocumentReader;
/// let content = reader.read(Path::new("lib/azkar_page.dart"))?;
/// ```
pub mod traits;
pub mod document_io;

// === 导出 trait 定义 ===
pub use traits::{DocumentReader, DocumentWriter};

// === 导出默认实现 ===
pub use document_io::{DefaultDocumentReader, DefaultDocumentWriter};
