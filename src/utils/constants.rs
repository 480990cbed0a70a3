// ============================================================================
// Schema-i18n - 常量定义
// ============================================================================
//
// 文件: src/utils/constants.rs
// 职责: 应用程序常量定义
// 边界:
//   - ✅ 应用程序常量定义
//   - ✅ 像素图标字符定义
//   - ❌ 不应包含动态配置
//   - ❌ 不应包含业务逻辑
//
// ============================================================================

/// 日志前缀
pub const APP_TAG: &str = "[SCHEMA-I18N]";

/// 默认配置文件名
pub const CONFIG_FILE: &str = "schema-i18n.toml";

/// 分隔线
pub const RULE: &str = "───────────────────────────────────────";

/// 粗分隔线
pub const DOUBLE_RULE: &str = "═══════════════════════════════════════";

/// 像素风格图标
pub mod icons {
    /// 成功图标
    pub const SUCCESS: &str = "✓";
    /// 错误图标
    pub const ERROR: &str = "✗";
    /// 警告图标
    pub const WARNING: &str = "!";
    /// 文件图标
    pub const FILE: &str = "●";
    /// 新增图标
    pub const ADDED: &str = "+";
    /// 复用图标
    pub const REUSED: &str = "↺";
    /// 检查图标
    pub const CHECK: &str = "◆";
    /// 箭头图标
    pub const ARROW: &str = "→";
    /// 汇总图标
    pub const SUMMARY: &str = "◈";
    /// 跳过图标
    pub const SKIP: &str = "○";
}
