// ============================================================================
// Schema-i18n - 配置数据模型
// ============================================================================
//
// 文件: src/models/config.rs
// 职责: 配置文件数据结构定义和操作
// 边界:
//   - ✅ 配置文件数据结构定义
//   - ✅ 配置序列化/反序列化
//   - ✅ 配置默认值
//   - ✅ 配置文件读写操作
//   - ✅ CLI 运行时参数合并
//   - ❌ 不应包含本地化逻辑
//   - ❌ 不应包含 CLI 参数定义
//
// ============================================================================

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use crate::utils::constants::CONFIG_FILE;

/// 全局配置管理器
static GLOBAL_CONFIG: std::sync::OnceLock<Arc<RwLock<Config>>> = std::sync::OnceLock::new();

/// Schema-i18n 配置文件结构
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// 主题目录配置
    #[serde(default)]
    pub theme: ThemeConfig,
    /// schema 抽取配置
    #[serde(default)]
    pub extract: ExtractConfig,
    /// 输出配置
    #[serde(default)]
    pub output: OutputConfig,
    /// 国际化配置
    #[serde(default)]
    pub i18n: I18nConfig,
}

/// 主题目录配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeConfig {
    /// 主题根目录，留空时由第一个输入文件推导
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root: Option<String>,
    /// 翻译字典文件（相对主题根目录）
    #[serde(default = "Config::default_locale_file")]
    pub locale_file: String,
    /// 共享文案所在的字典路径
    #[serde(default = "Config::default_shared_root")]
    pub shared_root: String,
}

/// schema 抽取配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractConfig {
    /// schema JSON 解析失败时的处理方式
    #[serde(default)]
    pub on_parse_error: ParseErrorPolicy,
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

/// CLI 运行时参数（用于覆盖配置文件）
#[derive(Debug, Clone, Default)]
pub struct RuntimeArgs {
    pub verbose: Option<bool>,
    pub colored: Option<bool>,
    pub theme_root: Option<String>,
    pub locale_file: Option<String>,
    pub language: Option<String>,
}

/// schema JSON 解析失败时的处理策略
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ParseErrorPolicy {
    /// 静默跳过该文件
    Skip,
    /// 输出警告并跳过该文件
    #[default]
    Warn,
    /// 终止整个批次
    Abort,
}

impl ParseErrorPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParseErrorPolicy::Skip => "skip",
            ParseErrorPolicy::Warn => "warn",
            ParseErrorPolicy::Abort => "abort",
        }
    }
}

impl std::fmt::Display for ParseErrorPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// 配置默认值 trait - 不依赖全局配置初始化
pub trait ConfigDefaults {
    /// 获取默认字典文件路径
    fn default_locale_file() -> String {
        "locales/en.default.schema.json".to_string()
    }

    /// 获取默认共享文案路径
    fn default_shared_root() -> String {
        "sections.all".to_string()
    }

    /// 获取默认是否详细输出
    fn default_verbose() -> bool {
        false
    }

    /// 获取默认是否彩色输出
    fn default_colored() -> bool {
        true
    }

    /// 获取默认语言
    fn default_language() -> String {
        "en_us".to_string()
    }
}

impl ConfigDefaults for Config {}

impl Config {
    /// 初始化全局配置（程序启动时调用）
    pub fn initialize() -> anyhow::Result<()> {
        let config = Self::load_config(Path::new(CONFIG_FILE))?;
        GLOBAL_CONFIG
            .set(Arc::new(RwLock::new(config)))
            .map_err(|_| anyhow::anyhow!("Global config already initialized"))?;
        Ok(())
    }

    /// 加载配置文件，不存在时使用默认配置
    pub fn load_config(config_path: &Path) -> anyhow::Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config = toml::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// 合并运行时参数
    pub fn merge_runtime_args(args: RuntimeArgs) -> anyhow::Result<()> {
        let global_config = GLOBAL_CONFIG
            .get()
            .ok_or_else(|| anyhow::anyhow!("Global config not initialized"))?;

        let mut config = global_config
            .write()
            .map_err(|_| anyhow::anyhow!("Failed to acquire config write lock"))?;

        config.apply_runtime_args(args);
        Ok(())
    }

    /// 把运行时参数应用到当前配置
    pub fn apply_runtime_args(&mut self, args: RuntimeArgs) {
        if let Some(verbose) = args.verbose {
            self.output.verbose = verbose;
        }
        if let Some(colored) = args.colored {
            self.output.colored = colored;
        }
        if let Some(root) = args.theme_root {
            self.theme.root = Some(root);
        }
        if let Some(locale_file) = args.locale_file {
            self.theme.locale_file = locale_file;
        }
        if let Some(language) = args.language {
            self.i18n.language = language;
        }
    }

    /// 保存配置到文件
    pub fn save_to_file(&self, config_path: &Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    /// 获取当前配置快照（未初始化时返回默认配置）
    pub fn snapshot() -> Self {
        match Self::snapshot_from_global() {
            Ok(config) => config,
            _ => Self::default(),
        }
    }

    fn snapshot_from_global() -> anyhow::Result<Self> {
        let global_config = GLOBAL_CONFIG
            .get()
            .ok_or_else(|| anyhow::anyhow!("Global config not initialized"))?;

        let config = global_config
            .read()
            .map_err(|_| anyhow::anyhow!("Failed to acquire config read lock"))?;

        Ok(config.clone())
    }

    /// 获取界面语言
    pub fn get_language() -> anyhow::Result<String> {
        Ok(Self::snapshot_from_global()?.i18n.language)
    }

    /// 获取详细输出设置（带默认值）
    pub fn get_verbose() -> bool {
        match Self::snapshot_from_global() {
            Ok(config) => config.output.verbose,
            _ => Self::default_verbose(),
        }
    }

    /// 获取是否彩色输出（带默认值）
    pub fn get_colored() -> bool {
        match Self::snapshot_from_global() {
            Ok(config) => config.output.colored,
            _ => Self::default_colored(),
        }
    }

    /// 解析主题根目录：配置优先，否则取第一个输入文件所在目录的上一级
    pub fn resolve_theme_root(&self, first_input: &Path) -> PathBuf {
        if let Some(root) = &self.theme.root {
            return PathBuf::from(root);
        }

        let absolute = std::path::absolute(first_input).unwrap_or_else(|_| first_input.to_path_buf());
        absolute
            .parent()
            .and_then(|dir| dir.parent())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// 字典文件的完整路径
    pub fn locale_file_path(&self, theme_root: &Path) -> PathBuf {
        theme_root.join(&self.theme.locale_file)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: ThemeConfig::default(),
            extract: ExtractConfig::default(),
            output: OutputConfig::default(),
            i18n: I18nConfig::default(),
        }
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            root: None,
            locale_file: Config::default_locale_file(),
            shared_root: Config::default_shared_root(),
        }
    }
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            on_parse_error: ParseErrorPolicy::default(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            verbose: Config::default_verbose(),
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

    #[test]
    fn test_parse_partial_config() {
        let config: Config = toml::from_str(
            r#"
            [theme]
            root = "/themes/dawn"

            [extract]
            on_parse_error = "abort"
            "#,
        )
        .unwrap();

        assert_eq!(config.theme.root.as_deref(), Some("/themes/dawn"));
        // 未填写的字段使用默认值
        assert_eq!(config.theme.locale_file, "locales/en.default.schema.json");
        assert_eq!(config.theme.shared_root, "sections.all");
        assert_eq!(config.extract.on_parse_error, ParseErrorPolicy::Abort);
        assert!(config.output.colored);
        assert_eq!(config.i18n.language, "en_us");
    }

    #[test]
    fn test_runtime_args_override() {
        let mut config = Config::default();
        config.apply_runtime_args(RuntimeArgs {
            verbose: Some(true),
            colored: Some(false),
            theme_root: Some("theme".to_string()),
            locale_file: None,
            language: Some("zh_cn".to_string()),
        });

        assert!(config.output.verbose);
        assert!(!config.output.colored);
        assert_eq!(config.theme.root.as_deref(), Some("theme"));
        assert_eq!(config.theme.locale_file, Config::default_locale_file());
        assert_eq!(config.i18n.language, "zh_cn");
    }

    #[test]
    fn test_resolve_theme_root() {
        let config = Config::default();
        let root = config.resolve_theme_root(Path::new("/themes/dawn/sections/hero.liquid"));
        assert_eq!(root, PathBuf::from("/themes/dawn"));
        assert_eq!(
            config.locale_file_path(&root),
            PathBuf::from("/themes/dawn/locales/en.default.schema.json")
        );

        let mut config = Config::default();
        config.theme.root = Some("/other".to_string());
        assert_eq!(
            config.resolve_theme_root(Path::new("/themes/dawn/sections/hero.liquid")),
            PathBuf::from("/other")
        );
    }

    #[test]
    fn test_default_config_roundtrips_through_toml() {
        let content = toml::to_string_pretty(&Config::default()).unwrap();
        let parsed: Config = toml::from_str(&content).unwrap();
        assert_eq!(parsed.extract.on_parse_error, ParseErrorPolicy::Warn);
        assert_eq!(parsed.theme.root, None);
        assert_eq!(ParseErrorPolicy::Skip.to_string(), "skip");
    }
}
