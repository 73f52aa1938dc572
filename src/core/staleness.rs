// ============================================================================
// LangSync - 过期检测
// ============================================================================
//
// 文件: src/core/staleness.rs
// 职责: 对比源文件、快照与已有译文，判断每个键是否需要重新翻译
// 边界:
//   - ✅ 条目索引构建（首次出现优先）
//   - ✅ 单个条目的状态判断
//   - ✅ 整个文件的状态列表
//   - ✅ 识别仍在等待译者的翻译请求
//   - ❌ 不应包含文件读写
//   - ❌ 不应生成输出记录
//
// ============================================================================

use std::collections::HashMap;
use std::fmt;

use crate::core::stager::todo_marker;
use crate::models::line::{Entry, LineRecord};

/// 按键索引的条目，重复键只保留第一次出现的条目
pub struct EntryIndex<'a> {
    entries: HashMap<&'a str, &'a Entry>,
}

impl<'a> EntryIndex<'a> {
    pub fn new(records: &'a [LineRecord]) -> Self {
        let mut entries = HashMap::new();
        for entry in records.iter().filter_map(LineRecord::as_entry) {
            entries.entry(entry.key.as_str()).or_insert(entry);
        }
        Self { entries }
    }

    pub fn get(&self, key: &str) -> Option<&'a Entry> {
        self.entries.get(key).copied()
    }
}

/// 重复出现的键（按首次重复的顺序）
pub fn duplicate_keys(records: &[LineRecord]) -> Vec<String> {
    let mut seen = HashMap::new();
    let mut duplicates = Vec::new();
    for entry in records.iter().filter_map(LineRecord::as_entry) {
        let count = seen.entry(entry.key.as_str()).or_insert(0usize);
        *count += 1;
        if *count == 2 {
            duplicates.push(entry.key.clone());
        }
    }
    duplicates
}

/// 条目的翻译状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Staleness {
    /// 已有译文且源文本自上次同步后未变，保留译文
    Current,
    /// 已有译文，但源文本已变化
    Changed,
    /// 没有译文或快照中没有该键
    Missing,
    /// 已暂存翻译请求，但译者尚未填写
    Requested,
}

impl Staleness {
    pub fn needs_translation(self) -> bool {
        self != Staleness::Current
    }
}

impl fmt::Display for Staleness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Staleness::Current => write!(f, "Current"),
            Staleness::Changed => write!(f, "Changed"),
            Staleness::Missing => write!(f, "Missing"),
            Staleness::Requested => write!(f, "Requested"),
        }
    }
}

/// 判断单个源条目的状态
pub fn classify(source: &Entry, cached: Option<&Entry>, existing: Option<&Entry>) -> Staleness {
    match (existing, cached) {
        (Some(_), Some(cached)) if cached.value == source.value => Staleness::Current,
        (Some(_), Some(_)) => Staleness::Changed,
        _ => Staleness::Missing,
    }
}

/// 已有条目是否仍是针对 `source` 当前文本的空白翻译请求
pub fn is_open_request(source: &Entry, existing: &Entry) -> bool {
    existing.value.is_empty() && existing.comment.ends_with(&todo_marker(&source.value))
}

/// 源文件中每个条目的状态（保持源文件顺序）
///
/// 与 [`classify`] 不同，尚未填写的翻译请求报告为 [`Staleness::Requested`]。
pub fn detect(
    source: &[LineRecord],
    cache: &EntryIndex<'_>,
    existing: &EntryIndex<'_>,
) -> Vec<(String, Staleness)> {
    source
        .iter()
        .filter_map(LineRecord::as_entry)
        .map(|entry| {
            let prior = existing.get(&entry.key);
            let state = match (classify(entry, cache.get(&entry.key), prior), prior) {
                (Staleness::Current, Some(prior)) if is_open_request(entry, prior) => {
                    Staleness::Requested
                }
                (state, _) => state,
            };
            (entry.key.clone(), state)
        })
        .collect()
}
