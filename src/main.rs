// ============================================================================
// LangSync - 程序入口
// ============================================================================
//
// 文件: src/main.rs
// 职责: 模块声明与异步运行时入口
// 边界:
//   - ✅ 顶层模块声明
//   - ✅ 错误输出与退出码
//   - ❌ 不应包含命令实现
//
// ============================================================================

mod cli;
mod core;
mod i18n;
mod models;
mod ui;
mod utils;

use utils::logger::Logger;

#[tokio::main]
async fn main() {
    if let Err(err) = cli::run_cli().await {
        Logger::error(format!("{:#}", err));
        std::process::exit(1);
    }
}
