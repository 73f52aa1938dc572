// ============================================================================
// LangSync - 配置数据模型
// ============================================================================
//
// 文件: src/models/config.rs
// 职责: 配置文件数据结构定义和操作
// 边界:
//   - ✅ 配置文件数据结构定义
//   - ✅ 配置序列化/反序列化（YAML / TOML）
//   - ✅ 配置默认值
//   - ✅ 配置文件读写操作
//   - ✅ 相对路径解析
//   - ❌ 不应包含同步流程逻辑
//   - ❌ 不应包含 CLI 参数解析
//
// ============================================================================

use serde::{Deserialize, Deserializer, Serialize};
use std::path::{Path, PathBuf};

use crate::models::error::{SyncError, SyncResult};

/// 默认配置文件名
pub const DEFAULT_CONFIG_FILE: &str = "langsync.yaml";

/// 语言名称占位符
pub const LANG_PLACEHOLDER: &str = "{lang}";

/// LangSync 配置文件结构
///
/// 顶层字段与旧版 `auto_translate_config.yaml` 保持兼容。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// 源语言文件（相对于根目录）
    pub source: String,
    /// 输出目录（相对于根目录）
    pub destination: String,
    /// 人工翻译的语言列表
    #[serde(default, deserialize_with = "deserialize_lang_codes")]
    pub target_langs_manual: Vec<String>,
    /// 机器翻译的语言列表
    #[serde(default, deserialize_with = "deserialize_lang_codes")]
    pub target_langs_auto: Vec<String>,
    /// 译者署名条目的键
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub translator_credit_key: Option<String>,
    /// 译者署名模板，`{lang}` 会被替换为语言名称
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub translator_credit_value: Option<String>,
    /// 快照缓存目录
    #[serde(default = "Config::default_cache_dir")]
    pub cache_dir: String,
    /// 目标文件扩展名
    #[serde(default = "Config::default_extension")]
    pub extension: String,
    /// 翻译服务配置
    #[serde(default)]
    pub translator: TranslatorConfig,
    /// 执行配置
    #[serde(default)]
    pub execution: ExecutionConfig,
    /// 输出配置
    #[serde(default)]
    pub output: OutputConfig,
    /// 国际化配置
    #[serde(default)]
    pub i18n: I18nConfig,
    /// 相对路径的解析根目录（不参与序列化）
    #[serde(skip)]
    pub root: PathBuf,
}

/// 翻译服务配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslatorConfig {
    /// 翻译接口地址
    #[serde(default = "Config::default_endpoint")]
    pub endpoint: String,
    /// 单次请求超时时间（秒）
    #[serde(default = "Config::default_timeout")]
    pub timeout: u64,
    /// 单次请求失败后的重试次数
    #[serde(default = "Config::default_retry_count")]
    pub retry_count: u32,
}

/// 执行配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutionConfig {
    /// 某个语言失败时是否继续处理其余语言
    #[serde(default)]
    pub continue_on_failure: bool,
}

/// 输出配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// 是否详细输出
    #[serde(default)]
    pub verbose: bool,
    /// 是否彩色输出
    #[serde(default = "Config::default_colored")]
    pub colored: bool,
}

/// 国际化配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct I18nConfig {
    /// 界面语言
    #[serde(default = "Config::default_language")]
    pub language: String,
}

/// 译者署名配置
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreditConfig {
    pub key: String,
    pub template: String,
}

impl CreditConfig {
    /// 用语言名称替换模板中的占位符
    pub fn format(&self, language_name: &str) -> String {
        self.template.replace(LANG_PLACEHOLDER, language_name)
    }
}

/// CLI 运行时参数（用于覆盖配置文件）
#[derive(Debug, Clone, Default)]
pub struct RuntimeArgs {
    pub verbose: Option<bool>,
    pub colored: Option<bool>,
    pub continue_on_failure: Option<bool>,
    pub root: Option<PathBuf>,
    pub language: Option<String>,
}

/// YAML 中的语言代码可能被解析为数字
#[derive(Deserialize)]
#[serde(untagged)]
enum LangCode {
    Text(String),
    Integer(i64),
    Float(f64),
}

fn deserialize_lang_codes<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let codes = Option::<Vec<LangCode>>::deserialize(deserializer)?.unwrap_or_default();
    Ok(codes
        .into_iter()
        .map(|code| match code {
            LangCode::Text(s) => s,
            LangCode::Integer(n) => n.to_string(),
            LangCode::Float(n) => n.to_string(),
        })
        .collect())
}

/// 配置默认值 trait
pub trait ConfigDefaults {
    fn default_cache_dir() -> String {
        ".langsync/cache".to_string()
    }

    fn default_extension() -> String {
        "lang".to_string()
    }

    fn default_endpoint() -> String {
        "https://translate.googleapis.com/translate_a/single".to_string()
    }

    fn default_timeout() -> u64 {
        30
    }

    fn default_retry_count() -> u32 {
        1
    }

    fn default_colored() -> bool {
        true
    }

    fn default_language() -> String {
        "en_us".to_string()
    }
}

impl ConfigDefaults for Config {}

impl Config {
    /// 加载配置文件，根目录默认取配置文件所在目录
    pub fn load(config_path: &Path) -> SyncResult<Self> {
        if !config_path.exists() {
            return Err(SyncError::ConfigNotFound(config_path.to_path_buf()));
        }

        let content =
            std::fs::read_to_string(config_path).map_err(|e| SyncError::io(config_path, e))?;
        let mut config = Self::from_str_with_format(&content, is_toml(config_path)).map_err(
            |reason| SyncError::ConfigParse {
                path: config_path.to_path_buf(),
                reason,
            },
        )?;

        config.root = config_path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        Ok(config)
    }

    fn from_str_with_format(content: &str, toml_format: bool) -> Result<Self, String> {
        if toml_format {
            toml::from_str(content).map_err(|e| e.to_string())
        } else {
            serde_yaml::from_str(content).map_err(|e| e.to_string())
        }
    }

    /// 合并运行时参数
    pub fn merge_runtime_args(&mut self, args: RuntimeArgs) {
        if let Some(verbose) = args.verbose {
            self.output.verbose = verbose;
        }
        if let Some(colored) = args.colored {
            self.output.colored = colored;
        }
        if let Some(continue_on_failure) = args.continue_on_failure {
            self.execution.continue_on_failure = continue_on_failure;
        }
        if let Some(root) = args.root {
            self.root = root;
        }
        if let Some(language) = args.language {
            self.i18n.language = language;
        }
    }

    /// 保存配置到文件
    pub fn save_to_file(&self, config_path: &Path) -> anyhow::Result<()> {
        let content = if is_toml(config_path) {
            toml::to_string_pretty(self)?
        } else {
            serde_yaml::to_string(self)?
        };
        std::fs::write(config_path, content)?;
        Ok(())
    }

    /// 生成默认配置模板
    pub fn generate_default_template() -> Self {
        Self {
            source: "lang/en_US.lang".to_string(),
            destination: "lang/".to_string(),
            target_langs_manual: vec!["de_DE".to_string()],
            target_langs_auto: vec!["es_ES".to_string(), "fr_FR".to_string()],
            translator_credit_key: Some("gui.credits.translator".to_string()),
            translator_credit_value: Some("Translated to {lang} by Google Translate".to_string()),
            ..Self::default()
        }
    }

    /// 生成默认配置模板并保存到文件
    pub fn create_default_config_file(config_path: &Path) -> anyhow::Result<()> {
        Self::generate_default_template().save_to_file(config_path)
    }

    /// 源语言文件路径
    pub fn source_path(&self) -> PathBuf {
        self.root.join(&self.source)
    }

    /// 输出目录路径
    pub fn destination_dir(&self) -> PathBuf {
        self.root.join(&self.destination)
    }

    /// 快照缓存文件路径：`<cache_dir>/<源文件名>`
    pub fn cache_path(&self) -> PathBuf {
        let file_name = Path::new(&self.source)
            .file_name()
            .map(|name| name.to_os_string())
            .unwrap_or_else(|| self.source.clone().into());
        self.root.join(&self.cache_dir).join(file_name)
    }

    /// 某个语言的目标文件路径
    pub fn target_path(&self, lang: &str) -> PathBuf {
        self.destination_dir()
            .join(format!("{}.{}", lang, self.extension))
    }

    /// 译者署名配置，键和模板都存在时才生效
    pub fn credit(&self) -> Option<CreditConfig> {
        match (&self.translator_credit_key, &self.translator_credit_value) {
            (Some(key), Some(template)) if !key.is_empty() && !template.is_empty() => {
                Some(CreditConfig {
                    key: key.clone(),
                    template: template.clone(),
                })
            }
            _ => None,
        }
    }
}

fn is_toml(path: &Path) -> bool {
    path.extension().and_then(|ext| ext.to_str()) == Some("toml")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: String::new(),
            destination: String::new(),
            target_langs_manual: Vec::new(),
            target_langs_auto: Vec::new(),
            translator_credit_key: None,
            translator_credit_value: None,
            cache_dir: Self::default_cache_dir(),
            extension: Self::default_extension(),
            translator: TranslatorConfig::default(),
            execution: ExecutionConfig::default(),
            output: OutputConfig::default(),
            i18n: I18nConfig::default(),
            root: PathBuf::from("."),
        }
    }
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            endpoint: Config::default_endpoint(),
            timeout: Config::default_timeout(),
            retry_count: Config::default_retry_count(),
        }
    }
}

impl Default for ExecutionConfig {
    fn default() -> Self {
        Self {
            continue_on_failure: false,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            verbose: false,
            colored: Config::default_colored(),
        }
    }
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            language: Config::default_language(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn loads_legacy_yaml_layout() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("auto_translate_config.yaml");
        std::fs::write(
            &path,
            "source: lang/en_US.lang\n\
             destination: lang\n\
             target_langs_auto: [es_ES, 42]\n\
             target_langs_manual:\n  - de_DE\n\
             translator_credit_key: credits\n\
             translator_credit_value: \"Translated to {lang}\"\n",
        )
        .unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.target_langs_auto, vec!["es_ES", "42"]);
        assert_eq!(config.target_langs_manual, vec!["de_DE"]);
        assert_eq!(config.root, dir.path());
        assert_eq!(config.source_path(), dir.path().join("lang/en_US.lang"));
        assert_eq!(config.target_path("de_DE"), dir.path().join("lang/de_DE.lang"));
        assert_eq!(
            config.cache_path(),
            dir.path().join(".langsync/cache/en_US.lang")
        );
        assert_eq!(config.credit().unwrap().format("Spanish"), "Translated to Spanish");
        assert_eq!(config.translator.retry_count, 1);
        assert!(config.output.colored);
    }

    #[test]
    fn loads_toml_by_extension() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("langsync.toml");
        std::fs::write(
            &path,
            "source = \"en.lang\"\n\
             destination = \"out\"\n\
             target_langs_auto = [\"fr\"]\n\
             extension = \"txt\"\n\
             [execution]\n\
             continue_on_failure = true\n",
        )
        .unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.target_langs_auto, vec!["fr"]);
        assert!(config.target_langs_manual.is_empty());
        assert!(config.execution.continue_on_failure);
        assert!(config.credit().is_none());
        assert_eq!(config.target_path("fr"), dir.path().join("out/fr.txt"));
    }

    #[test]
    fn missing_file_and_missing_fields_are_reported() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope.yaml");
        assert!(matches!(
            Config::load(&missing),
            Err(SyncError::ConfigNotFound(_))
        ));

        let path = dir.path().join("bad.yaml");
        std::fs::write(&path, "destination: out\n").unwrap();
        assert!(matches!(
            Config::load(&path),
            Err(SyncError::ConfigParse { .. })
        ));
    }

    #[test]
    fn runtime_args_override_file_values() {
        let mut config = Config::default();
        config.merge_runtime_args(RuntimeArgs {
            verbose: Some(true),
            colored: Some(false),
            continue_on_failure: Some(true),
            root: Some(PathBuf::from("/work")),
            language: Some("zh_cn".to_string()),
        });
        assert!(config.output.verbose);
        assert!(!config.output.colored);
        assert!(config.execution.continue_on_failure);
        assert_eq!(config.source_path(), PathBuf::from("/work"));
        assert_eq!(config.i18n.language, "zh_cn");
    }

    #[test]
    fn default_template_round_trips_through_yaml() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(DEFAULT_CONFIG_FILE);
        Config::create_default_config_file(&path).unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.source, "lang/en_US.lang");
        assert_eq!(config.target_langs_auto, vec!["es_ES", "fr_FR"]);
        assert!(config.credit().is_some());
    }
}
