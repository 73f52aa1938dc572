// ============================================================================
// LangSync - 源文件快照缓存
// ============================================================================
//
// 文件: src/core/cache.rs
// 职责: 上次同步时源文件快照的读写
// 边界:
//   - ✅ 首次运行时创建快照
//   - ✅ 人工暂存后刷新快照
//   - ✅ 读取快照作为差异基线
//   - ❌ 不应包含差异判断
//   - ❌ 不应包含路径推导规则（由配置提供）
//
// ============================================================================

use std::path::{Path, PathBuf};

use crate::core::parser::{parse_file, write_file};
use crate::models::error::SyncResult;
use crate::models::line::LineRecord;

/// 源文件快照
#[derive(Debug, Clone)]
pub struct SnapshotCache {
    path: PathBuf,
}

impl SnapshotCache {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// 快照不存在时用当前源文件创建，返回是否新建
    pub fn ensure(&self, source: &[LineRecord]) -> SyncResult<bool> {
        if self.exists() {
            return Ok(false);
        }
        tracing::debug!(path = %self.path.display(), "creating source snapshot");
        self.store(source)?;
        Ok(true)
    }

    /// 读取快照；不存在时返回空记录
    pub fn load(&self) -> SyncResult<Vec<LineRecord>> {
        if !self.exists() {
            return Ok(Vec::new());
        }
        parse_file(&self.path)
    }

    /// 用当前源文件覆盖快照
    pub fn store(&self, source: &[LineRecord]) -> SyncResult<()> {
        write_file(&self.path, source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::parser::parse_str;
    use tempfile::TempDir;

    #[test]
    fn ensure_creates_once() {
        let dir = TempDir::new().unwrap();
        let cache = SnapshotCache::new(dir.path().join("cache/en.lang"));
        assert!(cache.load().unwrap().is_empty());

        assert!(cache.ensure(&parse_str("k=v1\n")).unwrap());
        assert!(!cache.ensure(&parse_str("k=v2\n")).unwrap());
        assert_eq!(cache.load().unwrap(), parse_str("k=v1\n"));
    }

    #[test]
    fn store_overwrites() {
        let dir = TempDir::new().unwrap();
        let cache = SnapshotCache::new(dir.path().join("en.lang"));
        cache.store(&parse_str("k=v1\n")).unwrap();
        cache.store(&parse_str("k=v2\n")).unwrap();
        assert_eq!(
            std::fs::read_to_string(cache.path()).unwrap(),
            "k=v2\n"
        );
    }
}
