// ============================================================================
// LangSync - 人工翻译暂存
// ============================================================================
//
// 文件: src/core/stager.rs
// 职责: 为人工翻译语言生成输出记录
// 边界:
//   - ✅ 保留仍然有效的人工译文
//   - ✅ 清空过期条目并附加翻译请求标记
//   - ✅ 原样复制非条目行
//   - ❌ 不应包含文件读写
//   - ❌ 不应包含快照更新
//
// ============================================================================

use crate::core::staleness::{classify, EntryIndex, Staleness};
use crate::models::line::{Entry, LineRecord};

/// 注释拼接分隔符
pub const COMMENT_SEPARATOR: &str = " | ";

/// 翻译请求标记
pub fn todo_marker(source_value: &str) -> String {
    format!("TODO: Translate the following \"{}\"", source_value)
}

/// 需要翻译的条目：值清空，注释追加翻译请求
pub fn request_translation(source: &Entry) -> Entry {
    let marker = todo_marker(&source.value);
    let comment = if source.comment.is_empty() {
        marker
    } else {
        format!("{}{}{}", source.comment, COMMENT_SEPARATOR, marker)
    };

    Entry {
        key: source.key.clone(),
        value: String::new(),
        comment,
        original: source.original.clone(),
    }
}

/// 暂存统计
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StageStats {
    /// 保留的译文数量
    pub kept: usize,
    /// 源文本变化而重新请求的数量
    pub changed: usize,
    /// 缺少译文而请求的数量
    pub missing: usize,
}

impl StageStats {
    pub fn requested(&self) -> usize {
        self.changed + self.missing
    }
}

/// 暂存结果
#[derive(Debug, Clone)]
pub struct StagedFile {
    pub records: Vec<LineRecord>,
    pub stats: StageStats,
}

/// 按源文件结构生成人工翻译语言的输出记录
pub fn stage(
    source: &[LineRecord],
    cache: &EntryIndex<'_>,
    existing: &EntryIndex<'_>,
) -> StagedFile {
    let mut stats = StageStats::default();
    let records = source
        .iter()
        .map(|record| match record {
            LineRecord::Entry(entry) => {
                let prior = existing.get(&entry.key);
                match (classify(entry, cache.get(&entry.key), prior), prior) {
                    (Staleness::Current, Some(prior)) => {
                        stats.kept += 1;
                        LineRecord::Entry(prior.clone())
                    }
                    (Staleness::Changed, _) => {
                        stats.changed += 1;
                        LineRecord::Entry(request_translation(entry))
                    }
                    _ => {
                        stats.missing += 1;
                        LineRecord::Entry(request_translation(entry))
                    }
                }
            }
            other => other.clone(),
        })
        .collect();

    StagedFile { records, stats }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::parser::{parse_str, serialize};

    fn run(source: &str, cache: &str, existing: &str) -> StagedFile {
        let source = parse_str(source);
        let cache = parse_str(cache);
        let existing = parse_str(existing);
        stage(&source, &EntryIndex::new(&cache), &EntryIndex::new(&existing))
    }

    #[test]
    fn untranslated_entry_is_blanked_with_marker() {
        let staged = run("GREETING=Hello %s!##greeting text\n", "", "");
        assert_eq!(
            serialize(&staged.records),
            "GREETING=##greeting text | TODO: Translate the following \"Hello %s!\"\n"
        );
        assert_eq!(staged.stats.missing, 1);
    }

    #[test]
    fn marker_alone_when_source_has_no_comment() {
        let staged = run("k=Hi\n", "", "");
        assert_eq!(
            serialize(&staged.records),
            "k=##TODO: Translate the following \"Hi\"\n"
        );
    }

    #[test]
    fn valid_translation_is_kept_verbatim() {
        let staged = run(
            "k=Hello##src note\n",
            "k=Hello\n",
            "k=Hallo ##translator note\n",
        );
        let entry = staged.records[0].as_entry().unwrap();
        assert_eq!(entry.value, "Hallo ");
        assert_eq!(entry.comment, "translator note");
        assert_eq!(entry.original, "k=Hallo ##translator note");
        assert_eq!(staged.stats, StageStats { kept: 1, changed: 0, missing: 0 });
    }

    #[test]
    fn changed_source_requests_translation_with_current_value() {
        let staged = run("k=Good morning\n", "k=Morning\n", "k=Morgen\n");
        let entry = staged.records[0].as_entry().unwrap();
        assert_eq!(entry.value, "");
        assert!(entry.comment.contains("Good morning"));
        assert_eq!(staged.stats.changed, 1);
        assert_eq!(staged.stats.requested(), 1);
    }

    #[test]
    fn layout_follows_source_not_target() {
        let staged = run(
            "## Header\n\na=One\nb=Two\n",
            "a=One\nb=Two\n",
            "b=Zwei\n## translator only\na=Eins\nstale=x\n",
        );
        assert_eq!(serialize(&staged.records), "## Header\n\na=Eins\nb=Zwei\n");
    }

    #[test]
    fn staged_placeholder_is_kept_on_next_run() {
        let first = run("k=Hi\n", "k=Hi\n", "");
        let existing = serialize(&first.records);
        let second = run("k=Hi\n", "k=Hi\n", &existing);
        assert_eq!(serialize(&second.records), existing);
        assert_eq!(second.stats.kept, 1);
    }
}
