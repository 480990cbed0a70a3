// ============================================================================
// Schema-i18n - 翻译引用解析
// ============================================================================
//
// 文件: src/core/resolver.rs
// 职责: 收集 schema 中已有的 t: 引用，并在字典中查找对应条目
// 边界:
//   - ✅ 按 walker 相同的字段范围收集引用（含 JSON Pointer）
//   - ✅ 在字典树中解析引用
//   - ✅ 在字典文件文本中定位条目所在行
//   - ❌ 不应修改 schema 或字典
//   - ❌ 不应包含输出渲染
//
// 算法设计:
// 1. 文档 name、preset name、顶层 settings、各 block（跳过 @app）的 name 和 settings
// 2. 每个 setting 的 label / info / content 和各 option 的 label
// 3. 引用路径逐段下钻，终点必须是字符串叶子才算解析成功
// 4. 行号：在字典文本中依次查找每一段的 `"<key>":`，返回最后一段所在行
//
// ============================================================================

use serde_json::Value;

use super::walker::array_items;
use crate::models::schema::{is_app_block, KeyPath, TRANSLATABLE_FIELDS};

/// schema 中的一个翻译引用
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceSite {
    /// 字段在文档中的 JSON Pointer
    pub pointer: String,
    /// 原始引用文本，例如 `t:sections.hero.name`
    pub reference: String,
}

impl ReferenceSite {
    /// 引用指向的字典路径
    pub fn key_path(&self) -> Option<KeyPath> {
        KeyPath::from_reference(&self.reference)
    }
}

/// 收集文档中所有翻译引用
pub fn reference_sites(document: &Value) -> Vec<ReferenceSite> {
    let mut sites = Vec::new();

    collect(&mut sites, document.get("name"), "/name".to_string());
    for (index, preset) in array_items(document, "presets") {
        collect(&mut sites, preset.get("name"), format!("/presets/{}/name", index));
    }

    for (index, setting) in array_items(document, "settings") {
        collect_setting(&mut sites, setting, &format!("/settings/{}", index));
    }

    for (index, block) in array_items(document, "blocks") {
        let block_type = block.get("type").and_then(Value::as_str);
        if block_type.map_or(true, is_app_block) {
            continue;
        }

        let pointer = format!("/blocks/{}", index);
        collect(&mut sites, block.get("name"), format!("{}/name", pointer));
        for (setting_index, setting) in array_items(block, "settings") {
            collect_setting(
                &mut sites,
                setting,
                &format!("{}/settings/{}", pointer, setting_index),
            );
        }
    }

    sites
}

fn collect_setting(sites: &mut Vec<ReferenceSite>, setting: &Value, pointer: &str) {
    for field in TRANSLATABLE_FIELDS {
        collect(sites, setting.get(field), format!("{}/{}", pointer, field));
    }
    for (index, option) in array_items(setting, "options") {
        collect(
            sites,
            option.get("label"),
            format!("{}/options/{}/label", pointer, index),
        );
    }
}

fn collect(sites: &mut Vec<ReferenceSite>, value: Option<&Value>, pointer: String) {
    if let Some(Value::String(text)) = value {
        if KeyPath::from_reference(text).is_some() {
            sites.push(ReferenceSite {
                pointer,
                reference: text.clone(),
            });
        }
    }
}

/// 引用路径在字典中是否指向一个字符串条目
pub fn resolves(dictionary: &Value, path: &KeyPath) -> bool {
    let mut node = dictionary;
    for segment in path.segments() {
        match node.get(segment) {
            Some(child) => node = child,
            None => return false,
        }
    }
    node.is_string()
}

/// 条目在字典文件文本中的行号（从 1 开始）
///
/// 按顺序查找每一段的 `"<key>":`，后一段只在前一段之后查找。
pub fn dictionary_line(content: &str, path: &KeyPath) -> Option<usize> {
    let mut offset = 0;
    let mut last_match = None;

    for segment in path.segments() {
        let needle = format!("\"{}\":", segment);
        let found = offset + content[offset..].find(&needle)?;
        last_match = Some(found);
        offset = found + needle.len();
    }

    last_match.map(|position| content[..position].matches('\n').count() + 1)
}
