// ============================================================================
// Schema-i18n - 翻译合并
// ============================================================================
//
// 文件: src/core/merger.rs
// 职责: 把新生成的翻译树并入已有字典
// 边界:
//   - ✅ 递归合并对象节点
//   - ✅ 已存在的键保持不变（先写者胜）
//   - ✅ 合并前裁剪空节点
//   - ❌ 不应包含文件读写逻辑
//
// ============================================================================

use serde_json::{Map, Value};
use tracing::trace;

use super::pruner::prune;

/// 合并结果：新字典和实际新增的叶子条目数
#[derive(Debug, Clone, PartialEq)]
pub struct MergeOutcome {
    pub merged: Value,
    pub added_leaves: usize,
}

/// 先裁剪 `translations`，再并入 `existing`
pub fn merge(existing: &Value, translations: &Value) -> MergeOutcome {
    let pruned = prune(translations);
    let mut merged = match existing {
        Value::Object(map) => map.clone(),
        _ => Map::new(),
    };

    let added_leaves = match &pruned {
        Value::Object(source) => merge_into(&mut merged, source),
        _ => 0,
    };

    MergeOutcome {
        merged: Value::Object(merged),
        added_leaves,
    }
}

/// 把 `source` 合并进 `target`，返回新增叶子数
fn merge_into(target: &mut Map<String, Value>, source: &Map<String, Value>) -> usize {
    let mut added = 0;

    for (key, value) in source {
        match (target.get_mut(key), value) {
            (Some(Value::Object(existing)), Value::Object(incoming)) => {
                added += merge_into(existing, incoming);
            }
            (Some(_), _) => {
                trace!(key = %key, "key already present, keeping existing value");
            }
            (None, _) => {
                added += count_leaves(value);
                target.insert(key.clone(), value.clone());
            }
        }
    }

    added
}

/// 统计子树中的叶子数
pub fn count_leaves(value: &Value) -> usize {
    match value {
        Value::Object(map) => map.values().map(count_leaves).sum(),
        Value::Array(items) => items.iter().map(count_leaves).sum(),
        Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => 1,
    }
}
