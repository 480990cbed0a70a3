// ============================================================================
// Schema-i18n - 中文翻译表
// ============================================================================
//
// 文件: src/i18n/zh_cn.rs
// 职责: 中文翻译内容定义
// 边界:
//   - ✅ 中文翻译字符串定义
//   - ✅ 翻译键值对维护
//   - ❌ 不应包含翻译逻辑
//   - ❌ 不应包含业务逻辑
//   - ❌ 不应包含其他语言翻译
//
// ============================================================================

/// 中文翻译表
pub const TRANSLATIONS: &[(&str, &str)] = &[
    // CLI 相关
    ("cli.localize.start", "开始本地化 section schema..."),
    ("cli.check.start", "开始检查 section schema 中的内联文案..."),
    ("cli.resolve.start", "开始解析 t: 引用..."),
    // 本地化相关
    ("localize.found_files", "找到 {} 个 liquid 文件"),
    ("localize.no_files", "没有选择任何文件，退出。"),
    ("localize.no_schema_found", "所选 Liquid 文件中都没有 {% schema %}，退出。"),
    ("localize.theme_root", "主题根目录: {}"),
    ("localize.locale_file", "翻译字典: {}"),
    ("localize.processing", "处理 {}（section: {}）"),
    ("localize.no_schema", "{} 中没有 schema 块，跳过"),
    ("localize.parse_failed", "跳过文件: {}"),
    ("localize.parse_policy", "schema 解析失败处理方式: {}"),
    ("localize.unresolved", "{} 中有 {} 个 t: 引用在字典中不存在"),
    ("localize.dry_run_complete", "预演完成，未写入任何文件"),
    ("localize.completed", "已本地化 {} 个文件，新增 {} 条翻译"),
    // 检查相关
    ("check.all_good", "所有 schema 文案均已本地化"),
    ("check.pending_title", "未本地化的 schema 文案"),
    ("check.file_pending", "{}: 新建 {} 条，可复用 {} 条，失效引用 {} 个"),
    ("check.total_pending", "待处理字段总数: {}，失效引用: {}"),
    // 引用解析相关
    ("resolve.title", "翻译引用"),
    ("resolve.file_summary", "{}: 引用 {} 个，失效 {} 个"),
    ("resolve.total", "引用总数: {}，失效: {}"),
    ("resolve.missing", "字典中不存在"),
    ("resolve.unresolved", "{} 个引用无法解析"),
    ("resolve.all_resolved", "所有引用均可解析"),
    // 状态
    ("status.localized", "已本地化"),
    ("status.unchanged", "无需处理"),
    ("status.dry_run", "待本地化"),
    ("status.no_schema", "无 schema"),
    ("status.parse_failed", "schema 解析失败"),
    ("status.rewrite_failed", "写回失败"),
    // 输出格式相关
    ("output.result_title", "本地化结果"),
    ("output.total_files", "文件总数: {}"),
    ("output.localized_files", "已本地化文件: {}"),
    ("output.skipped_files", "跳过文件: {}"),
    ("output.failed_files", "失败文件: {}"),
    ("output.fields_localized", "新建文案: {}（新增 {} 条翻译）"),
    ("output.fields_reused", "复用文案: {}"),
    ("output.locale_file", "翻译字典: {}"),
    // 错误信息
    ("error.read_file", "读取文件失败: {}"),
    ("error.walk_directory", "遍历目录失败: {}"),
    ("error.invalid_pattern", "无效的输入模式: {}"),
    ("error.schema_missing", "改写前 schema 块已不存在"),
    // 初始化相关
    ("init.start", "初始化 schema-i18n 配置..."),
    ("init.config_exists", "配置文件已存在: {}"),
    ("init.use_force_hint", "使用 --force 覆盖已有配置文件"),
    ("init.config_created", "已创建配置文件: {}"),
    ("init.create_failed", "创建配置文件失败: {}"),
    ("init.shared_root", "共享文案路径: {}"),
    ("init.on_parse_error", "schema 解析失败处理方式: {}（skip、warn、abort）"),
    (
        "init.next_steps",
        "section 文件不在 <主题>/sections 下时设置 theme.root，字典文件不是默认位置时设置 theme.locale_file",
    ),
];
