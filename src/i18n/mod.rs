// ============================================================================
// LangSync - 国际化模块
// ============================================================================
//
// 文件: src/i18n/mod.rs
// 职责: 命令行界面文本的翻译表管理
// 边界:
//   - ✅ 翻译表选择和查找
//   - ✅ 翻译宏定义和实现
//   - ✅ 界面语言切换
//   - ✅ 参数化翻译支持
//   - ❌ 不应包含具体翻译内容
//   - ❌ 不应包含业务逻辑
//
// ============================================================================

pub mod en_us;
pub mod zh_cn;

use std::sync::OnceLock;

/// 界面语言，启动时设置一次
static LANGUAGE: OnceLock<String> = OnceLock::new();

/// 设置界面语言（只有第一次调用生效）
pub fn set_language(language: &str) {
    let _ = LANGUAGE.set(language.to_lowercase());
}

fn table_for(language: &str) -> &'static [(&'static str, &'static str)] {
    match language {
        "zh_cn" => zh_cn::TRANSLATIONS,
        _ => en_us::TRANSLATIONS,
    }
}

/// 获取翻译文本
pub fn get_translation(key: &str) -> String {
    let language = LANGUAGE.get().map(String::as_str).unwrap_or("en_us");

    table_for(language)
        .iter()
        .chain(en_us::TRANSLATIONS.iter())
        .find(|(k, _)| *k == key)
        .map(|(_, v)| v.to_string())
        .unwrap_or_else(|| format!("Unknown translation key: {}", key))
}

/// 简单翻译宏
#[macro_export]
macro_rules! t {
    ($key:expr) => {
        $crate::i18n::get_translation($key)
    };
}

/// 带参数翻译的辅助函数：依次替换 `{}` 占位符
pub fn format_with_args(template: String, args: Vec<String>) -> String {
    let mut result = String::with_capacity(template.len());
    let mut rest = template.as_str();
    let mut args = args.into_iter();

    while let Some(pos) = rest.find("{}") {
        match args.next() {
            Some(arg) => {
                result.push_str(&rest[..pos]);
                result.push_str(&arg);
                rest = &rest[pos + 2..];
            }
            None => break,
        }
    }
    result.push_str(rest);
    result
}

/// 带参数的翻译宏
#[macro_export]
macro_rules! tf {
    ($key:expr, $($arg:expr),*) => {{
        let template = $crate::i18n::get_translation($key);
        let args = vec![$(format!("{}", $arg)),*];
        $crate::i18n::format_with_args(template, args)
    }};
}
