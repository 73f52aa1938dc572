// ============================================================================
// LangSync - 执行结果汇总组件
// ============================================================================
//
// 文件: src/ui/summary.rs
// 职责: 同步结果与检查结果的汇总显示
// 边界:
//   - ✅ 每个语言的结果行
//   - ✅ 检查结果表格显示
//   - ✅ 国际化文本支持
//   - ❌ 不应包含同步逻辑
//   - ❌ 不应包含文件操作
//
// ============================================================================

use std::io::{self, Write};

use crate::core::runner::{CheckReport, LanguageOutcome, SyncSummary};
use crate::core::staleness::Staleness;
use crate::utils::colors::Colors;
use crate::utils::constants::icons;
use crate::utils::logger::Logger;
use crate::{t, tf};

// ============================================================================
// 同步汇总显示
// ============================================================================

/// 渲染同步汇总
pub fn render_sync_summary(summary: &SyncSummary) {
    let mut lines = vec![
        "".to_string(),
        Colors::bold(&t!("summary.title")),
        "═══════════════════════════════════════".to_string(),
    ];

    if summary.reports.is_empty() {
        lines.push(t!("summary.no_languages"));
    }

    for report in &summary.reports {
        let path = Colors::dim(&report.path.display().to_string());
        let line = match &report.outcome {
            LanguageOutcome::Staged(stats) => format!(
                "{} {}",
                icons::MANUAL,
                tf!("summary.staged", report.lang, stats.kept, stats.requested(), path)
            ),
            LanguageOutcome::Translated(texts) => format!(
                "{} {}",
                icons::AUTO,
                tf!("summary.translated", report.lang, texts, path)
            ),
            LanguageOutcome::Failed(reason) => format!(
                "{} {}",
                Colors::error(icons::ERROR),
                tf!("summary.failed", report.lang, reason)
            ),
        };
        lines.push(line);
    }

    if summary.dry_run {
        lines.push(format!("{} {}", icons::WARNING, t!("summary.dry_run")));
    }

    for line in lines {
        Logger::info(line);
    }
    let _ = io::stdout().flush();
}

// ============================================================================
// 检查结果显示
// ============================================================================

/// 打印人工翻译语言的状态表
pub fn print_check_reports(reports: &[CheckReport], detail: bool) {
    Logger::info("");
    Logger::info(Colors::bold(&t!("check.title")));
    Logger::info("───────────────────────────────────────");

    if reports.is_empty() {
        Logger::info(t!("check.no_manual_languages"));
        return;
    }

    for report in reports {
        let changed = report.count(Staleness::Changed);
        let missing = report.count(Staleness::Missing);
        let requested = report.count(Staleness::Requested);
        let icon = if changed + missing + requested == 0 {
            Colors::success(icons::SUCCESS)
        } else {
            Colors::warn(icons::WARNING)
        };

        Logger::info(tf!(
            "check.language_line",
            icon,
            Colors::info(&report.lang),
            report.count(Staleness::Current),
            changed,
            missing,
            requested,
            Colors::dim(&format!("({})", report.path.display()))
        ));

        if detail {
            for (key, state) in report.pending_keys() {
                Logger::info(format!("    {} {} ({})", icons::ARROW, key, state));
            }
        }
    }
    Logger::info("");
}
