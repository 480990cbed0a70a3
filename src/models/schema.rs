// ============================================================================
// Schema-i18n - Section Schema 数据模型
// ============================================================================
//
// 文件: src/models/schema.rs
// 职责: section schema 中与本地化相关的约定和基础判断
// 边界:
//   - ✅ 可翻译字段、引用前缀等约定常量
//   - ✅ 翻译引用（t:）的识别与构造
//   - ✅ section 名称推导
//   - ❌ 不应包含遍历和改写逻辑
//   - ❌ 不应包含文件读写逻辑
//
// ============================================================================

use serde_json::Value;
use std::fmt;
use std::path::Path;

/// 翻译引用前缀
pub const REFERENCE_PREFIX: &str = "t:";

/// setting 上可翻译的字段（顺序即处理顺序）
pub const TRANSLATABLE_FIELDS: [&str; 3] = ["label", "info", "content"];

/// 外部应用提供的 block 类型标记，这类 block 不归当前 section 管理
pub const APP_BLOCK_MARKER: &str = "@app";

/// 文件名上需要去掉的 section 前缀
pub const SECTION_FILE_PREFIX: &str = "section-";

/// 字典中 section 文案的根节点
pub const SECTIONS_KEY: &str = "sections";

/// 是否已经是翻译引用
pub fn is_reference(value: &str) -> bool {
    value.starts_with(REFERENCE_PREFIX)
}

/// 是否是纯数字文案（例如选项 "42"），这类选项标签保持原样
pub fn is_numeric_label(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|c| c.is_ascii_digit())
}

/// 取出需要本地化的字符串：非空、且尚未是翻译引用
pub fn localizable_text(value: Option<&Value>) -> Option<&str> {
    match value {
        Some(Value::String(text)) if !text.is_empty() && !is_reference(text) => Some(text),
        _ => None,
    }
}

/// 能否作为字典路径的一段：非空且不含 `.`
pub fn is_plain_segment(segment: &str) -> bool {
    !segment.is_empty() && !segment.contains('.')
}

/// 是否是外部应用 block
pub fn is_app_block(block_type: &str) -> bool {
    block_type.contains(APP_BLOCK_MARKER)
}

/// 由文件路径推导 section 名称：取文件名（不含扩展名），去掉 `section-` 前缀
pub fn section_name_from_path(path: &Path) -> String {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();
    section_name(&stem)
}

/// 去掉 `section-` 前缀
pub fn section_name(file_stem: &str) -> String {
    file_stem
        .strip_prefix(SECTION_FILE_PREFIX)
        .unwrap_or(file_stem)
        .to_string()
}

/// 点分隔的字典路径
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KeyPath(Vec<String>);

impl KeyPath {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// 由点分隔字符串构造
    pub fn parse(dotted: &str) -> Self {
        Self(
            dotted
                .split('.')
                .filter(|segment| !segment.is_empty())
                .map(str::to_string)
                .collect(),
        )
    }

    /// 追加一段，返回新路径
    pub fn child(&self, segment: impl Into<String>) -> Self {
        let mut segments = self.0.clone();
        segments.push(segment.into());
        Self(segments)
    }

    /// 由翻译引用解析路径；不是引用或路径为空时返回 None
    pub fn from_reference(reference: &str) -> Option<Self> {
        let path = Self::parse(reference.strip_prefix(REFERENCE_PREFIX)?);
        (!path.0.is_empty()).then_some(path)
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }

    /// 转换为翻译引用：`t:<path>`
    pub fn to_reference(&self) -> String {
        format!("{}{}", REFERENCE_PREFIX, self)
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join("."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_section_name() {
        assert_eq!(section_name("section-hero"), "hero");
        assert_eq!(section_name("hero"), "hero");
        // 只去掉开头的前缀
        assert_eq!(section_name("main-section-hero"), "main-section-hero");
        assert_eq!(
            section_name_from_path(Path::new("theme/sections/section-hero.liquid")),
            "hero"
        );
    }

    #[test]
    fn test_numeric_label() {
        assert!(is_numeric_label("42"));
        assert!(is_numeric_label("007"));
        assert!(!is_numeric_label(""));
        assert!(!is_numeric_label("4.2"));
        assert!(!is_numeric_label("-1"));
        assert!(!is_numeric_label("12px"));
    }

    #[test]
    fn test_localizable_text() {
        assert_eq!(localizable_text(Some(&json!("Title"))), Some("Title"));
        assert_eq!(localizable_text(Some(&json!("t:sections.all.title"))), None);
        assert_eq!(localizable_text(Some(&json!(""))), None);
        assert_eq!(localizable_text(Some(&json!(3))), None);
        assert_eq!(localizable_text(None), None);
    }

    #[test]
    fn test_key_path() {
        let path = KeyPath::parse("sections.hero").child("settings").child("title");
        assert_eq!(path.to_string(), "sections.hero.settings.title");
        assert_eq!(path.to_reference(), "t:sections.hero.settings.title");
        assert_eq!(KeyPath::parse("").segments().len(), 0);

        assert_eq!(
            KeyPath::from_reference("t:sections.hero.name"),
            Some(KeyPath::parse("sections.hero.name"))
        );
        assert_eq!(KeyPath::from_reference("t:"), None);
        assert_eq!(KeyPath::from_reference("sections.hero.name"), None);
    }

    #[test]
    fn test_plain_segment() {
        assert!(is_plain_segment("title"));
        assert!(is_plain_segment("header__1"));
        assert!(!is_plain_segment("a.b"));
        assert!(!is_plain_segment(""));
    }

    #[test]
    fn test_app_block() {
        assert!(is_app_block("@app"));
        assert!(is_app_block("my@app_block"));
        assert!(!is_app_block("slide"));
    }
}
