// ============================================================================
// Schema-i18n - Core 核心模块
// ============================================================================
//
// 文件: src/core/mod.rs
// 职责: 核心本地化逻辑模块入口和导出
// 边界:
//   - ✅ 核心子模块导出
//   - ✅ 常用类型重新导出
//   - ❌ 不应包含具体业务实现
//   - ❌ 不应包含 CLI 相关逻辑
//   - ❌ 不应包含 UI 相关逻辑
//
// ============================================================================

pub mod builder;
pub mod context;
pub mod error;
pub mod inputs;
pub mod liquid;
pub mod localizer;
pub mod locator;
pub mod merger;
pub mod pruner;
pub mod resolver;
pub mod rewriter;
pub mod walker;

// 重新导出常用类型
pub use builder::build_locale;
pub use context::LocalizationContext;
pub use error::LocalizeError;
pub use liquid::SchemaCodec;
pub use localizer::{FsWriter, Localizer, SchemaWriter};
pub use locator::locate;
pub use merger::{merge, MergeOutcome};
pub use pruner::prune;
pub use resolver::{dictionary_line, reference_sites, resolves, ReferenceSite};
pub use rewriter::rewrite_document;
pub use walker::{plan, EditKind, FieldEdit, IdentityCounter};
