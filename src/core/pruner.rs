// ============================================================================
// Schema-i18n - 空节点裁剪
// ============================================================================
//
// 文件: src/core/pruner.rs
// 职责: 去掉翻译树中的空节点
// 边界:
//   - ✅ 递归裁剪 null、空字符串、空数组、空对象
//   - ✅ 子节点裁空后级联裁剪父节点
//   - ❌ 不应原地修改输入
//
// ============================================================================

use serde_json::{Map, Value};

/// 返回裁剪后的新树；先处理子节点，再判断自身是否为空
pub fn prune(tree: &Value) -> Value {
    match tree {
        Value::Object(map) => {
            let pruned: Map<String, Value> = map
                .iter()
                .map(|(key, value)| (key.clone(), prune(value)))
                .filter(|(_, value)| !is_empty_node(value))
                .collect();
            Value::Object(pruned)
        }
        Value::Array(items) => Value::Array(
            items
                .iter()
                .map(prune)
                .filter(|value| !is_empty_node(value))
                .collect(),
        ),
        Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => tree.clone(),
    }
}

/// 是否为空节点
pub fn is_empty_node(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(text) => text.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
        Value::Bool(_) | Value::Number(_) => false,
    }
}
