// ============================================================================
// LangSync - 语言数据模型
// ============================================================================
//
// 文件: src/models/language.rs
// 职责: 语言代码解析与语言名称查询
// 边界:
//   - ✅ 翻译服务语言代码表
//   - ✅ 配置语言代码到服务代码的转换
//   - ✅ 可读语言名称生成
//   - ❌ 不应包含翻译逻辑
//   - ❌ 不应包含文件操作
//
// ============================================================================

use std::fmt;

use crate::models::error::{SyncError, SyncResult};

/// 翻译服务支持的语言代码表
pub const LANGUAGES: &[(&str, &str)] = &[
    ("af", "afrikaans"),
    ("sq", "albanian"),
    ("am", "amharic"),
    ("ar", "arabic"),
    ("hy", "armenian"),
    ("az", "azerbaijani"),
    ("eu", "basque"),
    ("be", "belarusian"),
    ("bn", "bengali"),
    ("bs", "bosnian"),
    ("bg", "bulgarian"),
    ("ca", "catalan"),
    ("ceb", "cebuano"),
    ("ny", "chichewa"),
    ("zh-cn", "chinese (simplified)"),
    ("zh-tw", "chinese (traditional)"),
    ("co", "corsican"),
    ("hr", "croatian"),
    ("cs", "czech"),
    ("da", "danish"),
    ("nl", "dutch"),
    ("en", "english"),
    ("eo", "esperanto"),
    ("et", "estonian"),
    ("tl", "filipino"),
    ("fi", "finnish"),
    ("fr", "french"),
    ("fy", "frisian"),
    ("gl", "galician"),
    ("ka", "georgian"),
    ("de", "german"),
    ("el", "greek"),
    ("gu", "gujarati"),
    ("ht", "haitian creole"),
    ("ha", "hausa"),
    ("haw", "hawaiian"),
    ("iw", "hebrew"),
    ("he", "hebrew"),
    ("hi", "hindi"),
    ("hmn", "hmong"),
    ("hu", "hungarian"),
    ("is", "icelandic"),
    ("ig", "igbo"),
    ("id", "indonesian"),
    ("ga", "irish"),
    ("it", "italian"),
    ("ja", "japanese"),
    ("jw", "javanese"),
    ("kn", "kannada"),
    ("kk", "kazakh"),
    ("km", "khmer"),
    ("ko", "korean"),
    ("ku", "kurdish (kurmanji)"),
    ("ky", "kyrgyz"),
    ("lo", "lao"),
    ("la", "latin"),
    ("lv", "latvian"),
    ("lt", "lithuanian"),
    ("lb", "luxembourgish"),
    ("mk", "macedonian"),
    ("mg", "malagasy"),
    ("ms", "malay"),
    ("ml", "malayalam"),
    ("mt", "maltese"),
    ("mi", "maori"),
    ("mr", "marathi"),
    ("mn", "mongolian"),
    ("my", "myanmar (burmese)"),
    ("ne", "nepali"),
    ("no", "norwegian"),
    ("or", "odia"),
    ("ps", "pashto"),
    ("fa", "persian"),
    ("pl", "polish"),
    ("pt", "portuguese"),
    ("pa", "punjabi"),
    ("ro", "romanian"),
    ("ru", "russian"),
    ("sm", "samoan"),
    ("gd", "scots gaelic"),
    ("sr", "serbian"),
    ("st", "sesotho"),
    ("sn", "shona"),
    ("sd", "sindhi"),
    ("si", "sinhala"),
    ("sk", "slovak"),
    ("sl", "slovenian"),
    ("so", "somali"),
    ("es", "spanish"),
    ("su", "sundanese"),
    ("sw", "swahili"),
    ("sv", "swedish"),
    ("tg", "tajik"),
    ("ta", "tamil"),
    ("te", "telugu"),
    ("th", "thai"),
    ("tr", "turkish"),
    ("uk", "ukrainian"),
    ("ur", "urdu"),
    ("ug", "uyghur"),
    ("uz", "uzbek"),
    ("vi", "vietnamese"),
    ("cy", "welsh"),
    ("xh", "xhosa"),
    ("yi", "yiddish"),
    ("yo", "yoruba"),
    ("zu", "zulu"),
];

/// 自动翻译的目标语言
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Language {
    /// 配置中的语言代码，同时用作输出文件名（如 `es_ES`）
    pub code: String,
    /// 传给翻译服务的代码（如 `es`）
    pub service_code: String,
    /// 可读名称（如 `Spanish`）
    pub name: String,
}

impl Language {
    /// 解析配置中的语言代码
    ///
    /// 先取 `_` 之前的部分查表；查不到时再尝试整个代码的小写连字符形式，
    /// 这样 `zh_CN` 会落到 `zh-cn`。
    pub fn parse(code: &str) -> SyncResult<Self> {
        let base = code.split('_').next().unwrap_or(code).to_lowercase();
        let hyphenated = code.to_lowercase().replace('_', "-");

        let (service_code, raw_name) = lookup(&base)
            .or_else(|| lookup(&hyphenated))
            .ok_or_else(|| SyncError::UnknownLanguage(code.to_string()))?;

        Ok(Self {
            code: code.to_string(),
            service_code: service_code.to_string(),
            name: capitalize(raw_name),
        })
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.code, self.name)
    }
}

fn lookup(code: &str) -> Option<(&'static str, &'static str)> {
    LANGUAGES.iter().copied().find(|(c, _)| *c == code)
}

/// 首字母大写，其余小写
fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
