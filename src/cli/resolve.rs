// ============================================================================
// Schema-i18n - 引用解析命令
// ============================================================================
//
// 文件: src/cli/resolve.rs
// 职责: 列出 section schema 中的 t: 引用及其在字典文件中的位置
// 边界:
//   - ✅ 解析命令参数
//   - ✅ 存在失效引用时以非零状态退出
//   - ❌ 不应修改任何文件
//   - ❌ 不应包含引用查找逻辑
//
// ============================================================================

use anyhow::Result;
use clap::Args;

use super::localize::{informational, prepare_localizer};
use crate::ui::summary::{render_reference_report, OutputFormat};
use crate::utils::logger::Logger;
use crate::{t, tf};

/// 解析已有的翻译引用
#[derive(Debug, Args)]
pub struct ResolveArgs {
    /// Liquid files, directories or glob patterns
    #[arg(required = false)]
    pub inputs: Vec<String>,

    /// 输出格式 (table, json)
    #[arg(short = 'f', long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// 同时列出已解析的引用及其行号
    #[arg(short = 'd', long)]
    pub detail: bool,
}

pub fn handle_resolve(args: ResolveArgs) -> Result<()> {
    let json = args.format == OutputFormat::Json;
    if !json {
        Logger::info(t!("cli.resolve.start"));
    }

    let (files, localizer) = prepare_localizer(&args.inputs)?;
    let Some(report) = informational(localizer.resolve(&files))? else {
        return Ok(());
    };

    render_reference_report(&report, args.format, args.detail)?;

    let unresolved = report.unresolved_count();
    if unresolved > 0 {
        if !json {
            Logger::warn(tf!("resolve.unresolved", unresolved));
        }
        std::process::exit(1);
    }

    if !json {
        Logger::success(t!("resolve.all_resolved"));
    }
    Ok(())
}
