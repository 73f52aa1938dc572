// ============================================================================
// LangSync - Core 核心模块
// ============================================================================
//
// 文件: src/core/mod.rs
// 职责: 核心业务逻辑模块入口和导出
// 边界:
//   - ✅ 核心子模块导出
//   - ❌ 不应包含具体业务实现
//   - ❌ 不应包含 CLI 相关逻辑
//   - ❌ 不应包含 UI 相关逻辑
//
// ============================================================================

pub mod cache;
pub mod chunker;
pub mod credit;
pub mod driver;
pub mod parser;
pub mod runner;
pub mod stager;
pub mod staleness;
pub mod translator;
