/// 编辑器层模块
///
/// 该模块把记录扫描和字段清理组合成一次完整的文档改写，
/// 并把每处字段改动记录下来，便于输出变更报告。
///
/// # 架构设计
///
/// - **record_editor**: 记录编辑器，执行一次性的纯函数改写
/// - **delta**: 变更记录与报告
///
/// # 使用示例
///
/// ```rust,ignore
/// use record_cleaner::{RecordEditor, RecordMatching};
///
/// let editor = RecordEditor::new().with_matching(RecordMatching::Balanced);
/// let report = editor.edit_with_report(&content);
/// println!("修改了 {} 处", report.modified_count());
/// ```
pub mod delta;
pub mod record_editor;

// === 导出公共接口 ===
pub use delta::{EditReport, FieldChange};
pub use record_editor::RecordEditor;
