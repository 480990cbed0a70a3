// ============================================================================
// Schema-i18n - 初始化命令处理
// ============================================================================
//
// 文件: src/cli/init.rs
// 职责: 生成 schema-i18n.toml 配置文件
// 边界:
//   - ✅ 初始化命令参数解析
//   - ✅ 按参数填充主题目录、共享文案路径和解析失败策略
//   - ✅ 配置文件存在性检查
//   - ❌ 不应包含配置文件格式定义
//   - ❌ 不应包含本地化逻辑
//
// ============================================================================

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use crate::models::config::{Config, ParseErrorPolicy};
use crate::utils::logger::Logger;
use crate::{t, tf};

/// 初始化命令参数
#[derive(Debug, Args)]
pub struct InitArgs {
    /// 配置文件路径
    #[arg(short, long, default_value = crate::utils::constants::CONFIG_FILE)]
    pub config: PathBuf,

    /// 强制覆盖已存在的配置文件
    #[arg(short, long)]
    pub force: bool,

    /// 共享文案所在的字典路径
    #[arg(long, default_value = "sections.all")]
    pub shared_root: String,

    /// schema JSON 解析失败时的处理方式
    #[arg(long, value_enum, default_value = "warn")]
    pub on_parse_error: ParseErrorPolicy,
}

/// 处理初始化命令
pub fn handle_init(args: InitArgs) -> Result<()> {
    Logger::info(t!("init.start"));

    if args.config.exists() && !args.force {
        Logger::warn(tf!("init.config_exists", args.config.display()));
        Logger::info(t!("init.use_force_hint"));
        return Ok(());
    }

    let config = initial_config(&args);
    if let Err(e) = config.save_to_file(&args.config) {
        Logger::error(tf!("init.create_failed", e));
        return Err(e);
    }

    Logger::info(tf!("init.config_created", args.config.display()));
    Logger::info(tf!("init.shared_root", config.theme.shared_root));
    Logger::info(tf!("init.on_parse_error", config.extract.on_parse_error));
    Logger::info(t!("init.next_steps"));
    Ok(())
}

/// 由命令参数生成配置
fn initial_config(args: &InitArgs) -> Config {
    let mut config = Config::default();
    config.theme.shared_root = args.shared_root.clone();
    config.extract.on_parse_error = args.on_parse_error;
    config
}
