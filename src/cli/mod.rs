// ============================================================================
// LangSync - CLI 模块
// ============================================================================
//
// 文件: src/cli/mod.rs
// 职责: CLI 命令行接口模块入口和路由
// 边界:
//   - ✅ CLI 结构定义和命令枚举
//   - ✅ 命令行参数解析配置
//   - ✅ 配置加载与运行时参数合并
//   - ✅ 命令路由分发
//   - ❌ 不应包含具体命令实现逻辑
//   - ❌ 不应包含业务逻辑处理
//
// ============================================================================

pub mod check;
pub mod init;
pub mod sync;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use crate::i18n;
use crate::models::config::{Config, RuntimeArgs, DEFAULT_CONFIG_FILE};
use crate::tf;
use crate::utils::colors::Colors;
use crate::utils::logger::Logger;
use check::{handle_check, CheckArgs};
use init::{handle_init, InitArgs};
use sync::{handle_pass, Pass, PassArgs};

/// LangSync - Localization file synchronizer
#[derive(Debug, Parser)]
#[command(name = "langsync")]
#[command(about = "Sync a localization source file into manual and machine-translated languages")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    /// Config file (YAML, or TOML with a .toml extension)
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Root directory for relative paths (defaults to the config file's directory)
    #[arg(short = 'C', long, global = true)]
    pub root: Option<PathBuf>,

    /// Global verbose mode
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Interface language (zh_cn, en_us)
    #[arg(short, long, global = true)]
    pub language: Option<String>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Keep translating other languages when one fails
    #[arg(long, global = true)]
    pub continue_on_failure: bool,

    /// Commands
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Stage manual languages, then machine-translate automatic languages
    Sync(PassArgs),
    /// Stage manual languages only
    Stage(PassArgs),
    /// Machine-translate automatic languages only
    Translate(PassArgs),
    /// Report which manual translations are current, changed or missing
    Check(CheckArgs),
    /// Initialize configuration file
    Init(InitArgs),
}

pub async fn run_cli() -> Result<()> {
    let cli = Cli::parse();
    let runtime_args = build_runtime_args(&cli);

    match cli.command {
        Commands::Init(args) => {
            apply_console_settings(cli.verbose, !cli.no_color, cli.language.as_deref());
            handle_init(&cli.config, args)
        }
        Commands::Sync(args) => handle_pass(load_config(&cli.config, runtime_args)?, args, Pass::Sync).await,
        Commands::Stage(args) => handle_pass(load_config(&cli.config, runtime_args)?, args, Pass::Stage).await,
        Commands::Translate(args) => {
            handle_pass(load_config(&cli.config, runtime_args)?, args, Pass::Translate).await
        }
        Commands::Check(args) => handle_check(load_config(&cli.config, runtime_args)?, args),
    }
}

/// 加载配置文件并合并运行时参数
fn load_config(path: &Path, runtime_args: RuntimeArgs) -> Result<Config> {
    let mut config = Config::load(path).context("Failed to load configuration")?;
    config.merge_runtime_args(runtime_args);

    apply_console_settings(
        config.output.verbose,
        config.output.colored,
        Some(&config.i18n.language),
    );
    tracing::debug!(root = %config.root.display(), "configuration loaded");
    if config.output.verbose {
        Logger::info(tf!("cli.config_loaded", path.display()));
    }
    Ok(config)
}

/// 初始化日志、颜色与界面语言
fn apply_console_settings(verbose: bool, colored: bool, language: Option<&str>) {
    Logger::init_tracing(verbose);
    if !colored {
        Colors::set_enabled(false);
    }
    if let Some(language) = language {
        i18n::set_language(language);
    }
}

/// Build runtime args from CLI arguments
fn build_runtime_args(cli: &Cli) -> RuntimeArgs {
    RuntimeArgs {
        verbose: if cli.verbose { Some(true) } else { None },
        colored: if cli.no_color { Some(false) } else { None },
        continue_on_failure: if cli.continue_on_failure { Some(true) } else { None },
        root: cli.root.clone(),
        language: cli.language.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "langsync",
            "sync",
            "--dry-run",
            "--lang",
            "es_ES",
            "--lang",
            "de_DE",
            "-c",
            "cfg/langsync.toml",
            "--no-color",
        ])
        .unwrap();

        assert_eq!(cli.config, PathBuf::from("cfg/langsync.toml"));
        assert!(cli.no_color);
        match cli.command {
            Commands::Sync(args) => {
                assert!(args.dry_run);
                assert_eq!(args.langs, vec!["es_ES", "de_DE"]);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn runtime_args_only_carry_explicit_flags() {
        let cli = Cli::try_parse_from(["langsync", "check"]).unwrap();
        let args = build_runtime_args(&cli);
        assert_eq!(cli.config, PathBuf::from(DEFAULT_CONFIG_FILE));
        assert!(args.verbose.is_none());
        assert!(args.colored.is_none());
        assert!(args.continue_on_failure.is_none());
        assert!(args.root.is_none());
    }
}
