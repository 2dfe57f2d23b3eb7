/// 记录编辑器模块
///
/// 对整份文档执行一次改写：逐个记录清理 text 与 reference 字段，
/// 记录之间以及记录之外的文本原样保留。

use std::path::Path;

use super::delta::{EditReport, FieldChange};
use crate::config::CleanerConfig;
use crate::field::{rewrite_field, FieldName, ReplaceStrategy};
use crate::io::{DocumentReader, DocumentWriter};
use crate::record::{find_records, RecordMatching};
use crate::utils::CleanerError;

/// 记录编辑器
///
/// 改写是输入字符串到输出字符串的纯函数，编辑器本身只保存匹配策略。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RecordEditor {
    matching: RecordMatching,
    strategy: ReplaceStrategy,
}

impl RecordEditor {
    /// 使用默认策略（非贪婪匹配 + 字面量替换）
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &CleanerConfig) -> Self {
        Self {
            matching: config.matching,
            strategy: config.replace,
        }
    }

    pub fn with_matching(mut self, matching: RecordMatching) -> Self {
        self.matching = matching;
        self
    }

    pub fn with_replace_strategy(mut self, strategy: ReplaceStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn matching(&self) -> RecordMatching {
        self.matching
    }

    pub fn replace_strategy(&self) -> ReplaceStrategy {
        self.strategy
    }

    /// 改写文档，只返回新文本
    pub fn edit(&self, document: &str) -> String {
        self.edit_with_report(document).document
    }

    /// 改写文档并返回变更报告
    pub fn edit_with_report(&self, document: &str) -> EditReport {
        let spans = find_records(document, self.matching);
        let mut output = String::with_capacity(document.len());
        let mut changes = Vec::new();
        let mut cursor = 0;

        for span in &spans {
            output.push_str(&document[cursor..span.start]);

            // reference 在 text 改写之后的记录文本上查找
            let mut record_text = span.text(document).to_string();
            for field in FieldName::ALL {
                if let Some(rewrite) = rewrite_field(&record_text, field, self.strategy) {
                    log::debug!(
                        "record #{} {}: {:?} -> {:?}",
                        span.index,
                        field,
                        rewrite.old_value,
                        rewrite.new_value
                    );
                    changes.push(FieldChange {
                        record_index: span.index,
                        field,
                        old_value: rewrite.old_value,
                        new_value: rewrite.new_value,
                    });
                    record_text = rewrite.record_text;
                }
            }

            output.push_str(&record_text);
            cursor = span.end;
        }
        output.push_str(&document[cursor..]);

        EditReport {
            document: output,
            records_scanned: spans.len(),
            changes,
        }
    }

    /// 读取文件并改写（不写回）
    pub fn edit_file<R: DocumentReader>(
        &self,
        reader: &R,
        input: &Path,
    ) -> Result<EditReport, CleanerError> {
        let content = reader.read(input)?;
        let report = self.edit_with_report(&content);
        log::info!("{}: {}", input.display(), report.summary());
        Ok(report)
    }

    /// 读取、改写并整体写出
    pub fn clean_file<R: DocumentReader, W: DocumentWriter>(
        &self,
        reader: &R,
        writer: &W,
        input: &Path,
        output: &Path,
    ) -> Result<EditReport, CleanerError> {
        let report = self.edit_file(reader, input)?;
        writer.write(&report.document, output)?;
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::path::PathBuf;

    /// 内存 IO，用于测试读写流程
    #[derive(Default)]
    struct MemoryStore {
        files: RefCell<HashMap<PathBuf, String>>,
    }

    impl DocumentReader for MemoryStore {
        fn read(&self, path: &Path) -> Result<String, CleanerError> {
            self.files
                .borrow()
                .get(path)
                .cloned()
                .ok_or_else(|| CleanerError::MissingInput(path.to_path_buf()))
        }
    }

    impl DocumentWriter for MemoryStore {
        fn write(&self, content: &str, path: &Path) -> Result<(), CleanerError> {
            self.files
                .borrow_mut()
                .insert(path.to_path_buf(), content.to_string());
            Ok(())
        }
    }

    #[test]
    fn test_example_trailing_period() {
        let input = "AzkarItem(text: 'Hello world.', reference: 'Quran 2:255')";
        assert_eq!(
            RecordEditor::new().edit(input),
            "AzkarItem(text: 'Hello world', reference: 'Quran 2:255')"
        );
    }

    #[test]
    fn test_example_ellipsis() {
        assert_eq!(
            RecordEditor::new().edit("AzkarItem(text: 'Say this...')"),
            "AzkarItem(text: 'Say this')"
        );
    }

    #[test]
    fn test_example_no_dot() {
        let input = "AzkarItem(text: 'No dot here')";
        let report = RecordEditor::new().edit_with_report(input);
        assert_eq!(report.document, input);
        assert!(report.is_unchanged());
        assert_eq!(report.records_scanned, 1);
    }

    #[test]
    fn test_records_are_independent() {
        let input = "AzkarItem(text: 'same.', reference: 'A.'),\nAzkarItem(text: 'same', reference: 'B')";
        let report = RecordEditor::new().edit_with_report(input);
        assert_eq!(
            report.document,
            "AzkarItem(text: 'same', reference: 'A'),\nAzkarItem(text: 'same', reference: 'B')"
        );
        assert_eq!(report.changes_for_record(0).len(), 2);
        assert!(report.changes_for_record(1).is_empty());
    }

    #[test]
    fn test_text_outside_records_untouched() {
        let input = "// Done.\nconst a = 'x.';\nAzkarItem(text: 'y.')\n// End.";
        assert_eq!(
            RecordEditor::new().edit(input),
            "// Done.\nconst a = 'x.';\nAzkarItem(text: 'y')\n// End."
        );
    }

    #[test]
    fn test_reference_searched_after_text_rewrite() {
        let input = "AzkarItem(reference: 'Bukhari.', text: 'Dua.')";
        let report = RecordEditor::new().edit_with_report(input);
        assert_eq!(report.document, "AzkarItem(reference: 'Bukhari', text: 'Dua')");
        // 记录内先 text 后 reference
        assert_eq!(report.changes[0].field, FieldName::Text);
        assert_eq!(report.changes[1].field, FieldName::Reference);
    }

    #[test]
    fn test_idempotent() {
        let input = "AzkarItem(\n  text: 'One . .',\n  reference: 'Two..',\n),\nAzkarItem(text: 'Three')";
        let editor = RecordEditor::new();
        let once = editor.edit(input);
        assert_eq!(editor.edit(&once), once);
    }

    #[test]
    fn test_padded_value_left_alone_by_default() {
        let input = "AzkarItem(text: '  Hello.  ')";
        assert_eq!(RecordEditor::new().edit(input), input);
        assert_eq!(
            RecordEditor::new()
                .with_replace_strategy(ReplaceStrategy::Span)
                .edit(input),
            "AzkarItem(text: '  Hello')"
        );
    }

    #[test]
    fn test_nested_paren_lazy_vs_balanced() {
        let input = "AzkarItem(text: 'Ayah (1) ends.', reference: 'Ref.')";

        // 非贪婪匹配在内层右括号处结束，两个字段都不在记录内完整出现
        let lazy = RecordEditor::new().edit_with_report(input);
        assert_eq!(lazy.document, input);

        let balanced = RecordEditor::new()
            .with_matching(RecordMatching::Balanced)
            .edit_with_report(input);
        assert_eq!(balanced.document, "AzkarItem(text: 'Ayah (1) ends', reference: 'Ref')");
        assert_eq!(balanced.modified_count(), 2);
    }

    #[test]
    fn test_from_config() {
        let config = CleanerConfig {
            matching: RecordMatching::Balanced,
            replace: ReplaceStrategy::Span,
            ..CleanerConfig::default()
        };
        let editor = RecordEditor::from_config(&config);
        assert_eq!(editor.matching(), RecordMatching::Balanced);
        assert_eq!(editor.replace_strategy(), ReplaceStrategy::Span);
    }

    #[test]
    fn test_clean_file_with_memory_io() {
        let store = MemoryStore::default();
        let path = PathBuf::from("lib/azkar_page.dart");
        store
            .write("AzkarItem(text: 'a.', reference: 'b.')", &path)
            .unwrap();

        let report = RecordEditor::new()
            .clean_file(&store, &store, &path, &path)
            .unwrap();

        assert_eq!(report.modified_count(), 2);
        assert_eq!(
            store.read(&path).unwrap(),
            "AzkarItem(text: 'a', reference: 'b')"
        );
    }

    #[test]
    fn test_clean_file_missing_input() {
        let store = MemoryStore::default();
        let path = PathBuf::from("missing.dart");
        let result = RecordEditor::new().clean_file(&store, &store, &path, &path);
        assert!(matches!(result, Err(CleanerError::MissingInput(_))));
    }
}
