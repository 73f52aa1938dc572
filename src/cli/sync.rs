// ============================================================================
// LangSync - CLI 同步命令
// ============================================================================
//
// 文件: src/cli/sync.rs
// 职责: sync / stage / translate 三个命令的 CLI 接口层
// 边界:
//   - ✅ 命令行参数定义和解析
//   - ✅ 构建翻译客户端与运行选项
//   - ✅ 调用同步器并输出汇总
//   - ❌ 不应包含暂存或翻译逻辑
//   - ❌ 不应包含文件读写
//
// ============================================================================

use anyhow::Result;
use clap::Args;

use crate::core::runner::{RunOptions, SyncRunner};
use crate::core::translator::GoogleTranslator;
use crate::models::config::Config;
use crate::ui::summary::render_sync_summary;
use crate::utils::logger::Logger;
use crate::{t, tf};

/// 同步类命令的公共参数
#[derive(Debug, Args)]
pub struct PassArgs {
    /// 只显示结果，不写入任何文件
    #[arg(long)]
    pub dry_run: bool,

    /// 只处理指定语言（可重复）
    #[arg(long = "lang", value_name = "LANG")]
    pub langs: Vec<String>,
}

/// 要执行的阶段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pass {
    /// 人工暂存 + 自动翻译
    Sync,
    /// 仅人工暂存
    Stage,
    /// 仅自动翻译
    Translate,
}

pub async fn handle_pass(config: Config, args: PassArgs, pass: Pass) -> Result<()> {
    let start_key = match pass {
        Pass::Sync => "cli.sync_start",
        Pass::Stage => "cli.stage_start",
        Pass::Translate => "cli.translate_start",
    };
    Logger::info(t!(start_key));

    let translator = GoogleTranslator::new(&config.translator)?;
    let options = RunOptions {
        dry_run: args.dry_run,
        languages: args.langs,
        show_spinner: !config.output.verbose && atty::is(atty::Stream::Stdout),
    };
    let runner = SyncRunner::new(&config, &translator, options);

    let summary = match pass {
        Pass::Sync => runner.sync().await?,
        Pass::Stage => runner.stage()?,
        Pass::Translate => runner.translate().await?,
    };

    render_sync_summary(&summary);

    if summary.has_failures() {
        anyhow::bail!(tf!(
            "cli.failed_languages",
            summary.failed_languages().join(", ")
        ));
    }
    Ok(())
}
