// ============================================================================
// LangSync - 行记录数据模型
// ============================================================================
//
// 文件: src/models/line.rs
// 职责: 语言文件行记录、条目和分块的数据结构定义
// 边界:
//   - ✅ 行记录枚举定义
//   - ✅ 条目数据结构定义
//   - ✅ 格式分块枚举定义
//   - ✅ 单行序列化
//   - ❌ 不应包含文件读写逻辑
//   - ❌ 不应包含解析规则
//   - ❌ 不应包含翻译逻辑
//
// ============================================================================

use std::fmt;

/// 注释标记
pub const COMMENT_MARKER: &str = "##";

/// 语言文件中的单个条目
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// 键
    pub key: String,
    /// 值（可能包含格式标记）
    pub value: String,
    /// 行尾注释（不含 `##`）
    pub comment: String,
    /// 原始行文本
    pub original: String,
}

impl Entry {
    /// 创建新条目，原始行由键值注释生成
    pub fn new(key: impl Into<String>, value: impl Into<String>, comment: impl Into<String>) -> Self {
        let mut entry = Self {
            key: key.into(),
            value: value.into(),
            comment: comment.into(),
            original: String::new(),
        };
        entry.original = entry.to_line();
        entry
    }

    /// 序列化为单行文本（不含换行符）
    pub fn to_line(&self) -> String {
        let mut line = format!("{}={}", self.key, self.value);
        if !self.comment.is_empty() {
            line.push_str(COMMENT_MARKER);
            line.push_str(&self.comment);
        }
        line
    }
}

/// 语言文件的一行
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineRecord {
    /// 空行或仅包含空白
    Empty(String),
    /// `##` 开头的整行注释
    Comment(String),
    /// `key=value[##comment]` 条目
    Entry(Entry),
    /// 无法识别的行，原样保留
    Other(String),
}

impl LineRecord {
    /// 序列化为单行文本（不含换行符）
    pub fn to_line(&self) -> String {
        match self {
            LineRecord::Entry(entry) => entry.to_line(),
            LineRecord::Empty(original)
            | LineRecord::Comment(original)
            | LineRecord::Other(original) => original.clone(),
        }
    }

    pub fn as_entry(&self) -> Option<&Entry> {
        match self {
            LineRecord::Entry(entry) => Some(entry),
            _ => None,
        }
    }

    pub fn as_entry_mut(&mut self) -> Option<&mut Entry> {
        match self {
            LineRecord::Entry(entry) => Some(entry),
            _ => None,
        }
    }
}

/// 值分解后的片段
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Chunk {
    /// 需要翻译的文本
    Text(String),
    /// 原样保留的格式标记
    Format(String),
}

impl Chunk {
    pub fn as_str(&self) -> &str {
        match self {
            Chunk::Text(text) | Chunk::Format(text) => text,
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, Chunk::Text(_))
    }
}

impl fmt::Display for Chunk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
