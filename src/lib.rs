pub mod config;
pub mod editor;
pub mod field;
pub mod io;
pub mod record;
pub mod utils;

// 重新导出主要结构
pub use config::CleanerConfig;
pub use editor::{EditReport, FieldChange, RecordEditor};
pub use field::{FieldName, ReplaceStrategy};
pub use record::{RecordMatching, RecordSpan};
pub use utils::{create_backup, CleanerError};

// 常量定义
/// 标识记录的关键字
pub const RECORD_KEYWORD: &str = "AzkarItem";
/// 未指定输入时改写的文件
pub const DEFAULT_DOCUMENT_PATH: &str = "lib/azkar_page.dart";

/// 使用默认策略改写文档
pub fn edit(document: &str) -> String {
    RecordEditor::new().edit(document)
}
