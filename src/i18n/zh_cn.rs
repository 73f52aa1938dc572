// ============================================================================
// LangSync - 中文翻译表
// ============================================================================
//
// 文件: src/i18n/zh_cn.rs
// 职责: 中文翻译内容定义
// 边界:
//   - ✅ 中文翻译字符串定义
//   - ✅ 翻译键值对维护
//   - ❌ 不应包含翻译逻辑
//   - ❌ 不应包含其他语言翻译
//
// ============================================================================

/// 中文翻译表
pub const TRANSLATIONS: &[(&str, &str)] = &[
    // 命令行
    ("cli.config_loaded", "使用配置文件: {}"),
    ("cli.sync_start", "开始同步语言文件..."),
    ("cli.stage_start", "开始准备人工翻译..."),
    ("cli.translate_start", "开始自动翻译..."),
    ("cli.check_start", "开始检查人工翻译状态..."),
    ("cli.failed_languages", "失败的语言: {}"),
    // 同步执行器
    ("sync.dry_run", "预演模式：不会写入任何文件"),
    ("sync.duplicate_key", "源文件中存在重复的键 '{}'，使用第一次出现的条目"),
    ("sync.cache_created", "已创建源文件快照: {}"),
    ("sync.cache_updated", "已更新源文件快照: {}"),
    ("stage.prepared", "已为 {} 准备人工翻译: {}"),
    ("translate.start", "正在翻译为 {}..."),
    ("translate.done", "已翻译为 {}: {}"),
    ("translate.failed", "翻译为 {} 失败: {}"),
    // 汇总
    ("summary.title", "同步汇总"),
    ("summary.no_languages", "没有处理任何语言"),
    ("summary.staged", "{}: 保留 {} 条，待翻译 {} 条 -> {}"),
    ("summary.translated", "{}: 翻译了 {} 段文本 -> {}"),
    ("summary.failed", "{}: 失败（{}）"),
    ("summary.dry_run", "预演模式，未写入任何文件"),
    // 检查
    ("check.title", "人工翻译状态"),
    ("check.no_manual_languages", "未配置人工翻译语言"),
    (
        "check.language_line",
        "{} {}: 有效 {} 条，已变化 {} 条，缺失 {} 条，待翻译 {} 条 {}",
    ),
    // 初始化
    ("init.start", "开始初始化 LangSync 配置..."),
    ("init.config_exists", "配置文件已存在: {}"),
    ("init.use_force_hint", "使用 --force 覆盖"),
    ("init.config_created", "已创建配置文件: {}"),
    ("init.next_steps", "请编辑源文件、输出目录和语言列表，然后运行 `langsync sync`"),
    ("init.create_failed", "创建配置文件失败: {}"),
];
