// ============================================================================
// LangSync - 同步执行器
// ============================================================================
//
// 文件: src/core/runner.rs
// 职责: 按顺序编排人工暂存与自动翻译两个流程
// 边界:
//   - ✅ 源文件加载与重复键提示
//   - ✅ 快照创建与刷新时机
//   - ✅ 每个语言的输出文件写入
//   - ✅ 单语言失败策略
//   - ✅ 暂存状态检查
//   - ❌ 不应包含解析、分块、差异判断的具体规则
//   - ❌ 不应包含 CLI 参数处理
//
// ============================================================================

use std::path::{Path, PathBuf};

use crate::core::cache::SnapshotCache;
use crate::core::driver::translate_records;
use crate::core::parser::{parse_file, write_file};
use crate::core::staleness::{detect, duplicate_keys, EntryIndex, Staleness};
use crate::core::stager::{stage, StageStats};
use crate::core::translator::Translator;
use crate::models::config::{Config, CreditConfig};
use crate::models::error::{SyncError, SyncResult};
use crate::models::language::Language;
use crate::models::line::LineRecord;
use crate::utils::logger::Logger;
use crate::utils::spinner::Spinner;
use crate::{t, tf};

/// 运行选项
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// 只计算不写文件
    pub dry_run: bool,
    /// 仅处理这些语言（为空表示全部）
    pub languages: Vec<String>,
    /// 翻译期间显示加载动画
    pub show_spinner: bool,
}

/// 单个语言的处理结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LanguageOutcome {
    /// 人工暂存完成
    Staged(StageStats),
    /// 机器翻译完成，值为翻译的文本片段数
    Translated(usize),
    /// 处理失败
    Failed(String),
}

/// 单个语言的报告
#[derive(Debug, Clone)]
pub struct LanguageReport {
    pub lang: String,
    pub path: PathBuf,
    pub outcome: LanguageOutcome,
}

/// 一次同步的汇总
#[derive(Debug, Clone, Default)]
pub struct SyncSummary {
    pub reports: Vec<LanguageReport>,
    pub cache_created: bool,
    pub cache_updated: bool,
    pub dry_run: bool,
}

impl SyncSummary {
    pub fn failed_languages(&self) -> Vec<&str> {
        self.reports
            .iter()
            .filter(|r| matches!(r.outcome, LanguageOutcome::Failed(_)))
            .map(|r| r.lang.as_str())
            .collect()
    }

    pub fn has_failures(&self) -> bool {
        !self.failed_languages().is_empty()
    }
}

/// 人工翻译语言的状态检查结果
#[derive(Debug, Clone)]
pub struct CheckReport {
    pub lang: String,
    pub path: PathBuf,
    pub states: Vec<(String, Staleness)>,
}

impl CheckReport {
    pub fn count(&self, state: Staleness) -> usize {
        self.states.iter().filter(|(_, s)| *s == state).count()
    }

    pub fn pending_keys(&self) -> impl Iterator<Item = (&str, Staleness)> {
        self.states
            .iter()
            .filter(|(_, s)| s.needs_translation())
            .map(|(k, s)| (k.as_str(), *s))
    }
}

/// 同步执行器
pub struct SyncRunner<'a, T: Translator + ?Sized> {
    config: &'a Config,
    translator: &'a T,
    options: RunOptions,
}

impl<'a, T: Translator + ?Sized> SyncRunner<'a, T> {
    pub fn new(config: &'a Config, translator: &'a T, options: RunOptions) -> Self {
        Self {
            config,
            translator,
            options,
        }
    }

    /// 完整同步：快照 → 人工暂存 → 刷新快照 → 自动翻译
    pub async fn sync(&self) -> SyncResult<SyncSummary> {
        let source = load_source(self.config)?;
        let mut summary = self.new_summary();
        self.stage_manual(&source, &mut summary)?;
        self.translate_auto(&source, &mut summary).await?;
        Ok(summary)
    }

    /// 仅人工暂存
    pub fn stage(&self) -> SyncResult<SyncSummary> {
        let source = load_source(self.config)?;
        let mut summary = self.new_summary();
        self.stage_manual(&source, &mut summary)?;
        Ok(summary)
    }

    /// 仅自动翻译
    pub async fn translate(&self) -> SyncResult<SyncSummary> {
        let source = load_source(self.config)?;
        let mut summary = self.new_summary();
        self.translate_auto(&source, &mut summary).await?;
        Ok(summary)
    }

    fn new_summary(&self) -> SyncSummary {
        if self.options.dry_run {
            Logger::warn(t!("sync.dry_run"));
        }
        SyncSummary {
            dry_run: self.options.dry_run,
            ..SyncSummary::default()
        }
    }

    /// 人工暂存所有语言，完成后刷新一次快照
    fn stage_manual(&self, source: &[LineRecord], summary: &mut SyncSummary) -> SyncResult<()> {
        let cache = SnapshotCache::new(self.config.cache_path());

        let cache_records = if self.options.dry_run {
            if cache.exists() {
                cache.load()?
            } else {
                source.to_vec()
            }
        } else {
            if cache.ensure(source)? {
                summary.cache_created = true;
                Logger::info(tf!("sync.cache_created", cache.path().display()));
            }
            cache.load()?
        };
        let cache_index = EntryIndex::new(&cache_records);

        for lang in select_languages(&self.config.target_langs_manual, &self.options.languages) {
            let path = self.config.target_path(lang);
            let existing = read_if_exists(&path)?;
            let staged = stage(source, &cache_index, &EntryIndex::new(&existing));

            if !self.options.dry_run {
                write_file(&path, &staged.records)?;
            }
            Logger::success(tf!("stage.prepared", lang, path.display()));
            tracing::debug!(
                lang = %lang,
                kept = staged.stats.kept,
                changed = staged.stats.changed,
                missing = staged.stats.missing,
                "manual staging done"
            );

            summary.reports.push(LanguageReport {
                lang: lang.clone(),
                path,
                outcome: LanguageOutcome::Staged(staged.stats),
            });
        }

        if !self.options.dry_run {
            cache.store(source)?;
            summary.cache_updated = true;
            Logger::info(tf!("sync.cache_updated", cache.path().display()));
        }
        Ok(())
    }

    /// 逐个语言自动翻译；失败的语言不写文件
    async fn translate_auto(&self, source: &[LineRecord], summary: &mut SyncSummary) -> SyncResult<()> {
        let credit = self.config.credit();

        for lang in select_languages(&self.config.target_langs_auto, &self.options.languages) {
            let path = self.config.target_path(lang);

            match self.translate_one(source, lang, credit.as_ref(), &path).await {
                Ok(text_count) => {
                    Logger::success(tf!("translate.done", lang, path.display()));
                    summary.reports.push(LanguageReport {
                        lang: lang.clone(),
                        path,
                        outcome: LanguageOutcome::Translated(text_count),
                    });
                }
                Err(err) => {
                    Logger::error(tf!("translate.failed", lang, &err));
                    summary.reports.push(LanguageReport {
                        lang: lang.clone(),
                        path,
                        outcome: LanguageOutcome::Failed(err.to_string()),
                    });
                    if !self.config.execution.continue_on_failure {
                        return Err(err);
                    }
                }
            }
        }
        Ok(())
    }

    async fn translate_one(
        &self,
        source: &[LineRecord],
        lang: &str,
        credit: Option<&CreditConfig>,
        path: &Path,
    ) -> SyncResult<usize> {
        let language = Language::parse(lang)?;

        let mut spinner = self
            .options
            .show_spinner
            .then(|| Spinner::new(tf!("translate.start", &language)));
        if let Some(spinner) = spinner.as_mut() {
            spinner.start();
        }

        let result = translate_records(source, &language, credit, self.translator).await;

        if let Some(spinner) = spinner.as_mut() {
            spinner.stop();
        }

        let translated = result?;
        if !self.options.dry_run {
            write_file(path, &translated.records)?;
        }
        Ok(translated.text_count)
    }
}

/// 检查人工翻译语言的状态，不写任何文件
pub fn check_manual(config: &Config, languages: &[String]) -> SyncResult<Vec<CheckReport>> {
    let source = load_source(config)?;
    let cache = SnapshotCache::new(config.cache_path());
    // 尚无快照时，下次同步会以当前源文件为基线
    let cache_records = if cache.exists() {
        cache.load()?
    } else {
        source.clone()
    };
    let cache_index = EntryIndex::new(&cache_records);

    let mut reports = Vec::new();
    for lang in select_languages(&config.target_langs_manual, languages) {
        let path = config.target_path(lang);
        let existing = read_if_exists(&path)?;
        let states = detect(&source, &cache_index, &EntryIndex::new(&existing));
        reports.push(CheckReport {
            lang: lang.clone(),
            path,
            states,
        });
    }
    Ok(reports)
}

/// 读取源文件，提示重复的键
pub fn load_source(config: &Config) -> SyncResult<Vec<LineRecord>> {
    let path = config.source_path();
    if !path.exists() {
        return Err(SyncError::SourceNotFound(path));
    }
    let source = parse_file(&path)?;

    let entries = source.iter().filter(|r| r.as_entry().is_some()).count();
    tracing::debug!(path = %path.display(), records = source.len(), entries, "source loaded");
    for key in duplicate_keys(&source) {
        Logger::warn(tf!("sync.duplicate_key", key));
    }
    Ok(source)
}

/// 按 `filter` 过滤语言列表，`filter` 为空时全部保留
fn select_languages<'l>(langs: &'l [String], filter: &[String]) -> Vec<&'l String> {
    langs
        .iter()
        .filter(|lang| filter.is_empty() || filter.contains(*lang))
        .collect()
}

fn read_if_exists(path: &Path) -> SyncResult<Vec<LineRecord>> {
    if path.exists() {
        parse_file(path)
    } else {
        Ok(Vec::new())
    }
}
