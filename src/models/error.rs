// ============================================================================
// LangSync - 错误类型定义
// ============================================================================
//
// 文件: src/models/error.rs
// 职责: 同步流程的错误类型
// 边界:
//   - ✅ 错误分类与错误信息
//   - ✅ 文件路径与语言归属
//   - ❌ 不应包含错误恢复逻辑
//   - ❌ 不应包含日志输出
//
// ============================================================================

use std::path::PathBuf;
use thiserror::Error;

/// 同步过程中的错误
#[derive(Debug, Error)]
pub enum SyncError {
    /// 配置文件不存在
    #[error("Config file not found: {0}")]
    ConfigNotFound(PathBuf),

    /// 配置文件解析失败
    #[error("Failed to parse config file {path}: {reason}")]
    ConfigParse { path: PathBuf, reason: String },

    /// 源语言文件不存在
    #[error("Source file not found: {0}")]
    SourceNotFound(PathBuf),

    /// 文件读写失败
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// 无法识别的语言代码
    #[error("Unknown language code '{0}'")]
    UnknownLanguage(String),

    /// 翻译服务调用失败
    #[error("Translation to '{lang}' failed: {reason}")]
    Translation { lang: String, reason: String },

    /// 翻译服务返回的条数与请求不一致
    #[error("Translation to '{lang}' returned {actual} texts, expected {expected}")]
    TranslationCountMismatch {
        lang: String,
        expected: usize,
        actual: usize,
    },
}

impl SyncError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn translation(lang: impl Into<String>, reason: impl ToString) -> Self {
        Self::Translation {
            lang: lang.into(),
            reason: reason.to_string(),
        }
    }
}

pub type SyncResult<T> = Result<T, SyncError>;
