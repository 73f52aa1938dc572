// ============================================================================
// LangSync - 语言文件解析器
// ============================================================================
//
// 文件: src/core/parser.rs
// 职责: 行式 key=value 语言文件的解析与序列化
// 边界:
//   - ✅ 文本到行记录的解析
//   - ✅ 行记录到文本的序列化
//   - ✅ 语言文件读写
//   - ❌ 不应包含差异比较逻辑
//   - ❌ 不应包含翻译逻辑
//
// ============================================================================

use std::path::Path;

use crate::models::error::{SyncError, SyncResult};
use crate::models::line::{Entry, LineRecord, COMMENT_MARKER};

/// 解析单行（已去除换行符）
pub fn parse_line(original: &str) -> LineRecord {
    if original.trim().is_empty() {
        return LineRecord::Empty(original.to_string());
    }

    if original.trim_start().starts_with(COMMENT_MARKER) {
        return LineRecord::Comment(original.to_string());
    }

    match original.split_once('=') {
        Some((key, rest)) => {
            let (value, comment) = rest.split_once(COMMENT_MARKER).unwrap_or((rest, ""));
            LineRecord::Entry(Entry {
                key: key.to_string(),
                value: value.to_string(),
                comment: comment.to_string(),
                original: original.to_string(),
            })
        }
        None => LineRecord::Other(original.to_string()),
    }
}

/// 解析整个文件内容
pub fn parse_str(content: &str) -> Vec<LineRecord> {
    split_lines(content).into_iter().map(parse_line).collect()
}

/// 按 `\n`、`\r\n` 或单独的 `\r` 切分行，末尾换行不产生空行
fn split_lines(content: &str) -> Vec<&str> {
    let bytes = content.as_bytes();
    let mut lines = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'\n' => {
                lines.push(&content[start..i]);
                i += 1;
                start = i;
            }
            b'\r' => {
                lines.push(&content[start..i]);
                i += if bytes.get(i + 1) == Some(&b'\n') { 2 } else { 1 };
                start = i;
            }
            _ => i += 1,
        }
    }
    if start < content.len() {
        lines.push(&content[start..]);
    }
    lines
}

/// 读取并解析语言文件
pub fn parse_file(path: &Path) -> SyncResult<Vec<LineRecord>> {
    let content = std::fs::read_to_string(path).map_err(|e| SyncError::io(path, e))?;
    Ok(parse_str(&content))
}

/// 序列化行记录，每行以单个换行符结尾
pub fn serialize(records: &[LineRecord]) -> String {
    let mut out = String::new();
    for record in records {
        out.push_str(&record.to_line());
        out.push('\n');
    }
    out
}

/// 写入语言文件（整体覆盖），必要时创建父目录
pub fn write_file(path: &Path, records: &[LineRecord]) -> SyncResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| SyncError::io(parent, e))?;
    }
    std::fs::write(path, serialize(records)).map_err(|e| SyncError::io(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn round_trip(line: &str) -> String {
        serialize(&parse_str(line)).trim_end_matches('\n').to_string()
    }

    #[test]
    fn classifies_each_line_kind() {
        let records = parse_str("\n   \n## header\n  ##indented\nkey=value\nplain text\n");
        assert!(matches!(records[0], LineRecord::Empty(_)));
        assert!(matches!(records[1], LineRecord::Empty(_)));
        assert!(matches!(records[2], LineRecord::Comment(_)));
        assert!(matches!(records[3], LineRecord::Comment(_)));
        assert!(matches!(records[4], LineRecord::Entry(_)));
        assert!(matches!(records[5], LineRecord::Other(_)));
        assert_eq!(records.len(), 6);
    }

    #[test]
    fn splits_on_first_equals_and_first_comment_marker() {
        let records = parse_str("a.b=x=y##first##second");
        let entry = records[0].as_entry().unwrap();
        assert_eq!(entry.key, "a.b");
        assert_eq!(entry.value, "x=y");
        assert_eq!(entry.comment, "first##second");
        assert_eq!(entry.original, "a.b=x=y##first##second");
    }

    #[test]
    fn comment_line_containing_equals_stays_a_comment() {
        let records = parse_str("## key=value");
        assert_eq!(records[0], LineRecord::Comment("## key=value".into()));
    }

    #[test]
    fn non_entry_lines_round_trip() {
        for line in ["", "    ", "## note", "\t## tabbed", "[section]", "§6 heading"] {
            assert_eq!(round_trip(line), line);
        }
    }

    #[test]
    fn entries_without_comment_marker_round_trip() {
        for line in ["k=v", "gui.ok=Ok %s", "empty=", "spaced = value ", "n=a\\nb"] {
            assert_eq!(round_trip(line), line);
        }
    }

    #[test]
    fn strips_carriage_returns() {
        let records = parse_str("k=v\r\n## c\r\n");
        assert_eq!(records[0].as_entry().unwrap().value, "v");
        assert_eq!(records[1], LineRecord::Comment("## c".into()));
        assert_eq!(serialize(&records), "k=v\n## c\n");
    }

    #[test]
    fn lone_carriage_return_ends_a_line() {
        let records = parse_str("a=One\rb=Two\r\nc=Three\r");
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].as_entry().unwrap().value, "One");
        assert_eq!(records[1].as_entry().unwrap().value, "Two");
        assert_eq!(records[2].as_entry().unwrap().value, "Three");
        assert_eq!(serialize(&records), "a=One\nb=Two\nc=Three\n");
        assert_eq!(parse_str("k=v\r\r").len(), 2);
    }

    #[test]
    fn trailing_newline_does_not_add_a_record() {
        assert_eq!(parse_str("k=v\n").len(), 1);
        assert_eq!(parse_str("k=v").len(), 1);
        assert_eq!(parse_str("k=v\n\n").len(), 2);
    }

    #[test]
    fn write_then_parse_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested/en.lang");
        let records = parse_str("## head\nk=v##note\n\nother\n");

        write_file(&path, &records).unwrap();
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "## head\nk=v##note\n\nother\n"
        );
        assert_eq!(parse_file(&path).unwrap(), records);
    }

    #[test]
    fn missing_file_reports_path() {
        let err = parse_file(Path::new("/definitely/not/here.lang")).unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.lang"));
    }
}
