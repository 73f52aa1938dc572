// ============================================================================
// LangSync - 格式分块器
// ============================================================================
//
// 文件: src/core/chunker.rs
// 职责: 将值拆分为文本片段与格式标记，并在翻译后重新组装
// 边界:
//   - ✅ 格式标记识别（§x、%s、\n）
//   - ✅ 文本/格式分块
//   - ✅ 按位置重新组装
//   - ❌ 不应包含翻译服务调用
//   - ❌ 不应包含批处理对齐逻辑
//
// ============================================================================

use crate::models::line::Chunk;

/// 颜色/样式格式码前缀
pub const FORMAT_MARKER: char = '§';
/// 字符串替换标记
pub const SUBSTITUTION_MARKER: &str = "%s";
/// 转义换行
pub const ESCAPED_NEWLINE: &str = "\\n";

/// 返回从 `rest` 开头匹配到的格式标记长度（字节）
fn match_token(rest: &str) -> Option<usize> {
    let mut chars = rest.chars();
    if let Some(FORMAT_MARKER) = chars.next() {
        if let Some(code) = chars.next().filter(|c| *c != '\n') {
            return Some(FORMAT_MARKER.len_utf8() + code.len_utf8());
        }
    }
    if rest.starts_with(SUBSTITUTION_MARKER) {
        return Some(SUBSTITUTION_MARKER.len());
    }
    if rest.starts_with(ESCAPED_NEWLINE) {
        return Some(ESCAPED_NEWLINE.len());
    }
    None
}

/// 将值拆分为文本与格式片段，空文本片段不输出
pub fn split(value: &str) -> Vec<Chunk> {
    let mut chunks = Vec::new();
    let mut text_start = 0;
    let mut cursor = 0;

    while cursor < value.len() {
        match match_token(&value[cursor..]) {
            Some(len) => {
                if cursor > text_start {
                    chunks.push(Chunk::Text(value[text_start..cursor].to_string()));
                }
                chunks.push(Chunk::Format(value[cursor..cursor + len].to_string()));
                cursor += len;
                text_start = cursor;
            }
            None => {
                // 按字符前进，保证切片落在字符边界上
                cursor += value[cursor..].chars().next().map_or(1, char::len_utf8);
            }
        }
    }

    if text_start < value.len() {
        chunks.push(Chunk::Text(value[text_start..].to_string()));
    }
    chunks
}

/// 文本片段数量
pub fn text_count(chunks: &[Chunk]) -> usize {
    chunks.iter().filter(|c| c.is_text()).count()
}

/// 所有文本片段的内容
pub fn texts(chunks: &[Chunk]) -> Vec<String> {
    chunks
        .iter()
        .filter_map(|c| match c {
            Chunk::Text(text) => Some(text.clone()),
            Chunk::Format(_) => None,
        })
        .collect()
}

/// 按位置用译文替换文本片段，格式片段原样保留
///
/// # Panics
///
/// `translated` 的长度必须等于文本片段数量，否则说明批处理对齐有误。
pub fn reassemble(chunks: &[Chunk], translated: &[String]) -> String {
    assert_eq!(
        translated.len(),
        text_count(chunks),
        "translated text count does not match text chunks"
    );

    let mut texts = translated.iter();
    let mut out = String::new();
    for chunk in chunks {
        match chunk {
            Chunk::Text(_) => {
                if let Some(text) = texts.next() {
                    out.push_str(text);
                }
            }
            Chunk::Format(token) => out.push_str(token),
        }
    }
    out
}
