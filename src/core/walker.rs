// ============================================================================
// Schema-i18n - Schema 遍历器
// ============================================================================
//
// 文件: src/core/walker.rs
// 职责: 遍历 section schema，为每个可翻译字段生成改写计划
// 边界:
//   - ✅ settings / blocks / options 的遍历顺序
//   - ✅ setting 标识（id 或合成 id）的计算
//   - ✅ 新建 / 复用 / 继承 的判定
//   - ✅ 跳过无法作为字典路径的 section 名、block 类型和 setting 标识
//   - ❌ 不应修改 schema（由 rewriter 执行）
//   - ❌ 不应生成翻译树（由 builder 执行）
//
// 算法设计:
// 1. 文档 name → sections.<name>.name；preset 的 name 继承文档处理后的 name
// 2. 顶层 settings，再到各 block（跳过 @app block）的 name 和 settings
// 3. 每个 setting 依次处理 label / info / content 和各 option 的 label
// 4. 字段文案能在共享子树中找到时复用该路径，否则新建本地路径
//
// ============================================================================

use serde_json::Value;
use tracing::{debug, trace, warn};

use super::context::LocalizationContext;
use super::locator::locate;
use crate::models::schema::{
    is_app_block, is_numeric_label, is_plain_segment, is_reference, localizable_text, KeyPath,
    SECTIONS_KEY, TRANSLATABLE_FIELDS,
};

/// 字段的处理方式
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditKind {
    /// 在本 section 下新建字典条目
    Fresh,
    /// 复用共享子树中的已有条目
    Reused,
    /// preset 名称继承文档名称
    Mirrored,
}

/// 单个字段的改写计划
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldEdit {
    /// 字段在文档中的 JSON Pointer
    pub pointer: String,
    /// 原始文案
    pub text: String,
    /// 本 section 下的字典路径（仅 Fresh 会写入字典）
    pub locale_path: KeyPath,
    /// 改写后的值
    pub reference: String,
    pub kind: EditKind,
}

/// 合成 id 的计数器
///
/// 计数从 1 开始，整篇文档（顶层和 block 内的 settings）共用。只有当某个
/// setting 的 `content` 字段被改写为引用之后才加一，已有 id 的 setting 也一样。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdentityCounter(usize);

impl IdentityCounter {
    pub fn new() -> Self {
        Self(1)
    }

    pub fn current(&self) -> usize {
        self.0
    }

    /// 字段处理完成后按规则推进
    pub fn after_field(&mut self, field: &str) {
        if advances_counter(field) {
            self.0 += 1;
        }
    }
}

impl Default for IdentityCounter {
    fn default() -> Self {
        Self::new()
    }
}

/// 计数推进规则：只有 `content` 字段会推进合成 id
pub fn advances_counter(field: &str) -> bool {
    field == "content"
}

/// setting 的标识：有 id 用 id，否则 `<type>__<计数>`
pub fn identity_key(setting: &Value, counter: &IdentityCounter) -> String {
    match setting.get("id") {
        Some(Value::String(id)) => id.clone(),
        Some(Value::Number(id)) => id.to_string(),
        _ => {
            let setting_type = setting
                .get("type")
                .and_then(Value::as_str)
                .unwrap_or("setting");
            format!("{}__{}", setting_type, counter.current())
        }
    }
}

/// 遍历一份 schema，生成全部字段的改写计划
pub fn plan(ctx: &LocalizationContext, document: &Value, section: &str) -> Vec<FieldEdit> {
    let mut walker = SchemaWalker {
        ctx,
        counter: IdentityCounter::new(),
        edits: Vec::new(),
    };
    walker.walk_document(document, section);
    walker.edits
}

struct SchemaWalker<'a> {
    ctx: &'a LocalizationContext,
    counter: IdentityCounter,
    edits: Vec<FieldEdit>,
}

impl SchemaWalker<'_> {
    fn walk_document(&mut self, document: &Value, section: &str) {
        if !is_plain_segment(section) {
            warn!(section, "section name cannot be used as a locale key, skipping document");
            return;
        }
        let base = KeyPath::new().child(SECTIONS_KEY).child(section);

        // 文档 name 不参与去重；preset 只继承已是引用的文档 name
        let mut document_name = document
            .get("name")
            .and_then(Value::as_str)
            .filter(|name| is_reference(name))
            .map(str::to_string);
        if let Some(text) = localizable_text(document.get("name")) {
            let locale_path = base.child("name");
            let reference = locale_path.to_reference();
            self.push("/name".to_string(), text, locale_path, reference.clone(), EditKind::Fresh);
            document_name = Some(reference);
        }

        self.walk_presets(document, document_name.as_deref());

        for (index, setting) in array_items(document, "settings") {
            self.walk_setting(setting, &format!("/settings/{}", index), &base);
        }

        for (index, block) in array_items(document, "blocks") {
            self.walk_block(block, index, &base);
        }
    }

    fn walk_presets(&mut self, document: &Value, document_name: Option<&str>) {
        let Some(document_name) = document_name else {
            return;
        };

        for (index, preset) in array_items(document, "presets") {
            if let Some(Value::String(text)) = preset.get("name") {
                if !is_reference(text) {
                    self.push(
                        format!("/presets/{}/name", index),
                        text,
                        KeyPath::new(),
                        document_name.to_string(),
                        EditKind::Mirrored,
                    );
                }
            }
        }
    }

    fn walk_block(&mut self, block: &Value, index: usize, base: &KeyPath) {
        let Some(block_type) = block.get("type").and_then(Value::as_str) else {
            debug!(index, "block without type, skipping");
            return;
        };

        if is_app_block(block_type) {
            trace!(block_type, "app block, skipping");
            return;
        }

        if !is_plain_segment(block_type) {
            warn!(block_type, "block type cannot be used as a locale key, skipping block");
            return;
        }

        let block_base = base.child("blocks").child(block_type);
        let pointer = format!("/blocks/{}", index);

        if let Some(text) = localizable_text(block.get("name")) {
            let locale_path = block_base.child("name");
            let reference = locale_path.to_reference();
            self.push(format!("{}/name", pointer), text, locale_path, reference, EditKind::Fresh);
        }

        for (setting_index, setting) in array_items(block, "settings") {
            self.walk_setting(
                setting,
                &format!("{}/settings/{}", pointer, setting_index),
                &block_base,
            );
        }
    }

    fn walk_setting(&mut self, setting: &Value, pointer: &str, base: &KeyPath) {
        // 标识在处理字段之前确定，同一 setting 内不受计数推进影响
        let identity = identity_key(setting, &self.counter);
        if !is_plain_segment(&identity) {
            warn!(%identity, pointer, "setting id cannot be used as a locale key, skipping setting");
            return;
        }
        let setting_path = base.child("settings").child(identity);

        for field in TRANSLATABLE_FIELDS {
            if let Some(text) = localizable_text(setting.get(field)) {
                self.push_resolved(format!("{}/{}", pointer, field), text, setting_path.child(field));
                self.counter.after_field(field);
            }
        }

        for (option_index, option) in array_items(setting, "options") {
            let Some(text) = localizable_text(option.get("label")) else {
                continue;
            };
            if is_numeric_label(text) {
                continue;
            }

            let locale_path = setting_path
                .child(format!("options__{}", option_index + 1))
                .child("label");
            self.push_resolved(
                format!("{}/options/{}/label", pointer, option_index),
                text,
                locale_path,
            );
        }
    }

    /// 先查共享子树，命中则复用，否则新建
    fn push_resolved(&mut self, pointer: String, text: &str, locale_path: KeyPath) {
        match locate(self.ctx.shared_labels(), text) {
            Some(found) => {
                let reference = format!("{}.{}", self.ctx.shared_root(), found);
                let reference = KeyPath::parse(&reference).to_reference();
                self.push(pointer, text, locale_path, reference, EditKind::Reused);
            }
            None => {
                let reference = locale_path.to_reference();
                self.push(pointer, text, locale_path, reference, EditKind::Fresh);
            }
        }
    }

    fn push(
        &mut self,
        pointer: String,
        text: &str,
        locale_path: KeyPath,
        reference: String,
        kind: EditKind,
    ) {
        trace!(%pointer, %reference, ?kind, "planned edit");
        self.edits.push(FieldEdit {
            pointer,
            text: text.to_string(),
            locale_path,
            reference,
            kind,
        });
    }
}

/// 取对象中数组字段的元素（带下标），字段缺失或不是数组时为空
pub(crate) fn array_items<'v>(value: &'v Value, key: &str) -> impl Iterator<Item = (usize, &'v Value)> {
    value
        .get(key)
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
        .enumerate()
}
