// ============================================================================
// Schema-i18n - CLI 模块
// ============================================================================
//
// 文件: src/cli/mod.rs
// 职责: CLI 命令行接口模块入口和路由
// 边界:
//   - ✅ CLI 结构定义和命令枚举
//   - ✅ 命令行参数解析配置
//   - ✅ 命令路由分发
//   - ✅ 子模块导出
//   - ❌ 不应包含具体命令实现逻辑
//   - ❌ 不应包含本地化逻辑
//   - ❌ 不应包含数据模型定义
//
// ============================================================================

pub mod check;
pub mod init;
pub mod localize;
pub mod resolve;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::models::config::{Config, RuntimeArgs};
use crate::utils::colors::Colors;
use crate::utils::logger::Logger;
use check::{handle_check, CheckArgs};
use init::{handle_init, InitArgs};
use localize::{handle_localize, LocalizeArgs};
use resolve::{handle_resolve, ResolveArgs};

/// Schema-i18n - Liquid section schema localization tool
#[derive(Debug, Parser)]
#[command(name = "schema-i18n")]
#[command(about = "Move Liquid section schema strings into the theme locale file")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    /// Global verbose mode
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Interface language (zh_cn, en_us)
    #[arg(short, long, global = true)]
    pub language: Option<String>,

    /// Theme root directory (defaults to the parent of the first input's folder)
    #[arg(long, global = true)]
    pub theme_root: Option<String>,

    /// Locale file, relative to the theme root
    #[arg(long, global = true)]
    pub locale_file: Option<String>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Commands
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Localize section schemas and merge new strings into the locale file
    Localize(LocalizeArgs),
    /// Report schema strings that are not localized yet and dangling t: references
    Check(CheckArgs),
    /// List t: references with their line in the locale file
    Resolve(ResolveArgs),
    /// Initialize configuration file
    Init(InitArgs),
}

pub fn run_cli() -> Result<()> {
    let cli = Cli::parse();

    // Build runtime args to override config
    let runtime_args = build_runtime_args(&cli);
    // Merge runtime args to global config
    Config::merge_runtime_args(runtime_args)?;

    Colors::set_enabled(Config::get_colored());
    Logger::init_tracing(Config::get_verbose());

    match cli.command {
        Commands::Localize(args) => handle_localize(args),
        Commands::Check(args) => handle_check(args),
        Commands::Resolve(args) => handle_resolve(args),
        Commands::Init(args) => handle_init(args),
    }
}

/// Build runtime args from CLI arguments
fn build_runtime_args(cli: &Cli) -> RuntimeArgs {
    RuntimeArgs {
        verbose: if cli.verbose { Some(true) } else { None },
        colored: if cli.no_color { Some(false) } else { None },
        theme_root: cli.theme_root.clone(),
        locale_file: cli.locale_file.clone(),
        language: cli.language.clone(),
    }
}
