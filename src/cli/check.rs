// ============================================================================
// Schema-i18n - CLI Check 命令
// ============================================================================
//
// 文件: src/cli/check.rs
// 职责: 检查哪些 schema 文案尚未本地化
// 边界:
//   - ✅ 命令行参数定义和解析
//   - ✅ 以预演模式执行批处理
//   - ✅ 检查结果格式化输出和退出码
//   - ❌ 不应写入任何文件
//   - ❌ 不应包含 schema 遍历逻辑
//
// ============================================================================

use anyhow::Result;
use clap::Args;

use super::localize::run_batch;
use crate::ui::summary::{render_pending_report, OutputFormat};
use crate::utils::logger::Logger;
use crate::t;

/// 检查未本地化的文案和失效的 t: 引用
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Liquid files, directories or glob patterns
    #[arg(required = false)]
    pub inputs: Vec<String>,

    /// 输出格式 (table, json)
    #[arg(short = 'f', long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// 显示每个待处理字段
    #[arg(short = 'd', long)]
    pub detail: bool,
}

pub fn handle_check(args: CheckArgs) -> Result<()> {
    let json = args.format == OutputFormat::Json;
    if !json {
        Logger::info(t!("cli.check.start"));
    }

    let Some(report) = run_batch(&args.inputs, true)? else {
        return Ok(());
    };

    let outstanding = report.pending_fields() + report.statistics.unresolved_references;
    if outstanding == 0 && !json {
        Logger::success(t!("check.all_good"));
        return Ok(());
    }

    render_pending_report(&report, args.format, args.detail)?;
    if outstanding > 0 {
        std::process::exit(1);
    }
    Ok(())
}
