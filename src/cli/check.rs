// ============================================================================
// LangSync - CLI Check 命令
// ============================================================================
//
// 文件: src/cli/check.rs
// 职责: 人工翻译状态检查命令的 CLI 接口层
// 边界:
//   - ✅ 命令行参数定义和解析
//   - ✅ 调用检查逻辑并格式化输出
//   - ❌ 不应写入任何文件
//   - ❌ 不应包含差异判断逻辑
//
// ============================================================================

use anyhow::Result;
use clap::Args;

use crate::core::runner::check_manual;
use crate::models::config::Config;
use crate::ui::summary::print_check_reports;
use crate::utils::logger::Logger;
use crate::t;

/// 检查人工翻译语言是否需要更新
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// 只检查指定语言（可重复）
    #[arg(long = "lang", value_name = "LANG")]
    pub langs: Vec<String>,

    /// 显示每个待处理的键
    #[arg(short = 'd', long)]
    pub detail: bool,
}

pub fn handle_check(config: Config, args: CheckArgs) -> Result<()> {
    Logger::info(t!("cli.check_start"));

    let reports = check_manual(&config, &args.langs)?;
    print_check_reports(&reports, args.detail || config.output.verbose);
    Ok(())
}
