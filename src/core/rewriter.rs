// ============================================================================
// Schema-i18n - Schema 改写
// ============================================================================
//
// 文件: src/core/rewriter.rs
// 职责: 按改写计划把 schema 中的文案替换为 t: 引用
// 边界:
//   - ✅ 原地修改 schema
//   - ✅ 与 builder 共用同一份遍历计划
//   - ❌ 不应生成翻译树
//   - ❌ 不应包含文件读写逻辑
//
// ============================================================================

use serde_json::Value;
use tracing::warn;

use super::context::LocalizationContext;
use super::walker::{plan, FieldEdit};

/// 遍历 schema 并原地改写，返回实际执行的改写
pub fn rewrite_document(
    ctx: &LocalizationContext,
    document: &mut Value,
    section: &str,
) -> Vec<FieldEdit> {
    let edits = plan(ctx, document, section);
    apply_edits(document, &edits);
    edits
}

/// 把计划应用到 schema 上
pub fn apply_edits(document: &mut Value, edits: &[FieldEdit]) {
    for edit in edits {
        match document.pointer_mut(&edit.pointer) {
            Some(slot) => *slot = Value::String(edit.reference.clone()),
            None => warn!(pointer = %edit.pointer, "field disappeared before rewrite"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn empty_ctx() -> LocalizationContext {
        LocalizationContext::new(json!({}), "sections.all", "en.default.schema.json")
    }

    #[test]
    fn test_rewrite_hero() {
        let mut document = json!({
            "name": "Hero",
            "settings": [{ "id": "title", "label": "Title", "type": "text" }]
        });

        let edits = rewrite_document(&empty_ctx(), &mut document, "hero");
        assert_eq!(edits.len(), 2);
        assert_eq!(
            document,
            json!({
                "name": "t:sections.hero.name",
                "settings": [{
                    "id": "title",
                    "label": "t:sections.hero.settings.title.label",
                    "type": "text"
                }]
            })
        );
    }

    #[test]
    fn test_rewrite_reuses_shared_paths() {
        let ctx = LocalizationContext::new(
            json!({ "sections": { "all": { "colors": { "label": "Color scheme" } } } }),
            "sections.all",
            "en.default.schema.json",
        );
        let mut document = json!({
            "settings": [
                { "id": "scheme", "type": "color_scheme", "label": "Color Scheme" },
                { "id": "scheme_2", "type": "color_scheme", "label": "color scheme" }
            ],
            "blocks": [{
                "type": "card",
                "settings": [{ "id": "scheme", "label": "COLOR SCHEME" }]
            }]
        });

        rewrite_document(&ctx, &mut document, "cards");
        assert_eq!(document["settings"][0]["label"], "t:sections.all.colors.label");
        assert_eq!(document["settings"][1]["label"], "t:sections.all.colors.label");
        assert_eq!(
            document["blocks"][0]["settings"][0]["label"],
            "t:sections.all.colors.label"
        );
    }

    #[test]
    fn test_rewrite_leaves_numeric_options_and_app_blocks() {
        let mut document = json!({
            "settings": [{
                "id": "per_row",
                "type": "select",
                "options": [{ "value": "42", "label": "42" }, { "value": "x", "label": "Many" }]
            }],
            "blocks": [{
                "type": "my@app_block",
                "name": "App",
                "settings": [{ "id": "x", "label": "X" }]
            }]
        });
        let app_block = document["blocks"][0].clone();

        rewrite_document(&empty_ctx(), &mut document, "grid");
        assert_eq!(document["settings"][0]["options"][0]["label"], "42");
        assert_eq!(
            document["settings"][0]["options"][1]["label"],
            "t:sections.grid.settings.per_row.options__2.label"
        );
        assert_eq!(document["blocks"][0], app_block);
    }

    #[test]
    fn test_rewrite_presets_and_block_names() {
        let mut document = json!({
            "name": "Slideshow",
            "presets": [{ "name": "Slideshow" }],
            "blocks": [{ "type": "slide", "name": "Slide" }]
        });

        rewrite_document(&empty_ctx(), &mut document, "slideshow");
        assert_eq!(document["presets"][0]["name"], "t:sections.slideshow.name");
        assert_eq!(document["blocks"][0]["name"], "t:sections.slideshow.blocks.slide.name");
    }

    #[test]
    fn test_rewrite_is_idempotent() {
        let mut document = json!({
            "name": "Hero",
            "settings": [
                { "type": "paragraph", "content": "Body" },
                { "id": "title", "label": "Title", "info": "Info" }
            ]
        });
        rewrite_document(&empty_ctx(), &mut document, "hero");
        let once = document.clone();

        let edits = rewrite_document(&empty_ctx(), &mut document, "hero");
        assert!(edits.is_empty());
        assert_eq!(document, once);
    }
}
