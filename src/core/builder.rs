// ============================================================================
// Schema-i18n - 翻译树构建
// ============================================================================
//
// 文件: src/core/builder.rs
// 职责: 根据改写计划生成本 section 的新翻译树
// 边界:
//   - ✅ 新建条目写入 sections.<name>... 路径
//   - ✅ 复用 / 继承的字段不产生条目
//   - ❌ 不应修改 schema
//   - ❌ 不应合并到字典（由 merger 执行）
//
// ============================================================================

use serde_json::{Map, Value};

use super::context::LocalizationContext;
use super::walker::{plan, EditKind, FieldEdit};
use crate::models::schema::SECTIONS_KEY;

/// 遍历 schema 并生成新翻译树
pub fn build_locale(ctx: &LocalizationContext, document: &Value, section: &str) -> Value {
    locale_from_edits(&plan(ctx, document, section), section)
}

/// 由改写计划生成翻译树：`{"sections": {<section>: {...}}}`
pub fn locale_from_edits(edits: &[FieldEdit], section: &str) -> Value {
    let mut sections = Map::new();
    sections.insert(section.to_string(), Value::Object(Map::new()));
    let mut locale = Value::Object(Map::from_iter([(
        SECTIONS_KEY.to_string(),
        Value::Object(sections),
    )]));

    for edit in edits.iter().filter(|e| e.kind == EditKind::Fresh) {
        insert_at(&mut locale, edit.locale_path.segments(), Value::String(edit.text.clone()));
    }

    locale
}

/// 按路径写入，沿途缺失或非对象的节点替换为对象
fn insert_at(tree: &mut Value, path: &[String], value: Value) {
    let Some((last, parents)) = path.split_last() else {
        return;
    };

    let mut node = tree;
    for segment in parents {
        if !node.is_object() {
            *node = Value::Object(Map::new());
        }
        let Value::Object(map) = node else {
            return;
        };
        node = map
            .entry(segment.clone())
            .or_insert_with(|| Value::Object(Map::new()));
    }

    if !node.is_object() {
        *node = Value::Object(Map::new());
    }
    if let Value::Object(map) = node {
        map.insert(last.clone(), value);
    }
}
