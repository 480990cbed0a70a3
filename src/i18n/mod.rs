// ============================================================================
// Schema-i18n - 界面国际化模块
// ============================================================================
//
// 文件: src/i18n/mod.rs
// 职责: 命令行界面文本的翻译管理
// 边界:
//   - ✅ 翻译表查找
//   - ✅ 翻译宏定义和实现
//   - ✅ 语言切换支持
//   - ✅ 参数化翻译支持
//   - ❌ 不应包含具体翻译内容
//   - ❌ 不应包含业务逻辑
//   - ❌ 不应包含 theme 翻译字典处理
//
// ============================================================================

pub mod en_us;
pub mod zh_cn;

/// 获取翻译文本
pub fn get_translation(key: &str) -> String {
    // 每次都从配置获取语言设置
    let language = get_language_from_config().unwrap_or_else(|| "en_us".to_string());
    translate(&language, key)
}

/// 按指定语言查找，缺失时回退到英文
pub fn translate(language: &str, key: &str) -> String {
    let translation_data = match language {
        "zh_cn" => zh_cn::TRANSLATIONS,
        _ => en_us::TRANSLATIONS,
    };

    lookup(translation_data, key)
        .or_else(|| lookup(en_us::TRANSLATIONS, key))
        .map(str::to_string)
        .unwrap_or_else(|| format!("Unknown translation key: {}", key))
}

fn lookup(table: &'static [(&'static str, &'static str)], key: &str) -> Option<&'static str> {
    table.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

/// 从配置获取语言设置
fn get_language_from_config() -> Option<String> {
    use crate::models::config::Config;

    // 如果配置未初始化或获取失败，返回 None
    Config::get_language().ok()
}

/// 简单翻译宏
#[macro_export]
macro_rules! t {
    ($key:expr) => {
        $crate::i18n::get_translation($key)
    };
}

/// 带参数翻译的辅助函数，按顺序替换 `{}` 占位符
pub fn format_with_args(template: String, args: Vec<String>) -> String {
    let mut result = String::with_capacity(template.len());
    let mut rest = template.as_str();
    let mut args = args.into_iter();

    while let Some(pos) = rest.find("{}") {
        let Some(arg) = args.next() else {
            break;
        };
        result.push_str(&rest[..pos]);
        result.push_str(&arg);
        rest = &rest[pos + 2..];
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_with_args() {
        assert_eq!(
            format_with_args("{} of {}".to_string(), vec!["1".into(), "2".into()]),
            "1 of 2"
        );
        // 参数中的占位符不会被再次替换
        assert_eq!(
            format_with_args("{} and {}".to_string(), vec!["{}".into(), "x".into()]),
            "{} and x"
        );
        assert_eq!(format_with_args("{} {}".to_string(), vec!["a".into()]), "a {}");
    }

    #[test]
    fn test_translate_with_fallback() {
        assert_eq!(translate("en_us", "status.localized"), "localized");
        assert_eq!(translate("zh_cn", "status.localized"), "已本地化");
        assert_eq!(translate("fr_fr", "status.localized"), "localized");
        assert_eq!(translate("en_us", "missing.key"), "Unknown translation key: missing.key");
    }

    #[test]
    fn test_tables_have_same_keys() {
        for (key, _) in en_us::TRANSLATIONS {
            assert!(
                zh_cn::TRANSLATIONS.iter().any(|(k, _)| k == key),
                "zh_cn is missing {}",
                key
            );
        }
    }
}
