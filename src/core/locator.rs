// ============================================================================
// Schema-i18n - 文案定位器
// ============================================================================
//
// 文件: src/core/locator.rs
// 职责: 在翻译字典中查找与给定文案相同的条目
// 边界:
//   - ✅ 字典树的深度优先查找
//   - ✅ 大小写不敏感比较
//   - ❌ 不应修改字典
//   - ❌ 不应包含路径改写逻辑
//
// 算法设计:
// 1. 按对象键的插入顺序做前序深度优先遍历
// 2. 在字符串叶子上比较小写形式
// 3. 命中第一个即返回其点分路径
//
// ============================================================================

use serde_json::Value;

/// 查找 `label` 在 `dictionary` 中的路径（大小写不敏感），返回第一个命中
pub fn locate(dictionary: &Value, label: &str) -> Option<String> {
    let target = label.to_lowercase();
    let mut path = Vec::new();
    search(dictionary, &target, &mut path)
}

fn search<'a>(value: &'a Value, target: &str, path: &mut Vec<&'a str>) -> Option<String> {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                path.push(key);
                let found = search(child, target, path);
                path.pop();
                if found.is_some() {
                    return found;
                }
            }
            None
        }
        // 根节点本身是字符串时没有路径可言
        Value::String(text) if !path.is_empty() && text.to_lowercase() == target => {
            Some(path.join("."))
        }
        Value::String(_) | Value::Null | Value::Bool(_) | Value::Number(_) | Value::Array(_) => {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_locate_nested_case_insensitive() {
        let dictionary = json!({
            "general": {
                "heading": "Heading",
                "colors": { "label": "Color scheme" }
            }
        });

        assert_eq!(
            locate(&dictionary, "color SCHEME").as_deref(),
            Some("general.colors.label")
        );
        assert_eq!(locate(&dictionary, "heading").as_deref(), Some("general.heading"));
        assert_eq!(locate(&dictionary, "Subheading"), None);
    }

    #[test]
    fn test_locate_returns_first_in_insertion_order() {
        // 后插入的 "a" 键不应因为字母序靠前而先被命中
        let dictionary: Value =
            serde_json::from_str(r#"{"z": {"title": "Title"}, "a": {"title": "title"}}"#).unwrap();
        assert_eq!(locate(&dictionary, "TITLE").as_deref(), Some("z.title"));
    }

    #[test]
    fn test_locate_ignores_non_string_leaves() {
        let dictionary = json!({
            "count": 42,
            "flag": true,
            "list": ["Title"],
            "nothing": null,
        });
        assert_eq!(locate(&dictionary, "42"), None);
        assert_eq!(locate(&dictionary, "true"), None);
        assert_eq!(locate(&dictionary, "Title"), None);
    }

    #[test]
    fn test_locate_empty_dictionary() {
        assert_eq!(locate(&json!({}), "Title"), None);
        assert_eq!(locate(&json!("Title"), "Title"), None);
    }
}
