// ============================================================================
// Schema-i18n - CLI Localize 命令
// ============================================================================
//
// 文件: src/cli/localize.rs
// 职责: 本地化命令的 CLI 接口层
// 边界:
//   - ✅ 命令行参数定义和解析
//   - ✅ 输入展开和"无事可做"的提示
//   - ✅ 调用批量本地化执行器
//   - ✅ 结果格式化输出
//   - ❌ 不应包含 schema 遍历和改写逻辑
//   - ❌ 不应包含文件读写逻辑
//
// ============================================================================

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use crate::core::inputs::collect_inputs;
use crate::core::{LocalizeError, Localizer};
use crate::models::config::Config;
use crate::models::BatchReport;
use crate::ui::summary::{render_batch_report, OutputFormat};
use crate::utils::logger::Logger;
use crate::{t, tf};

/// 本地化 section schema
#[derive(Debug, Args)]
pub struct LocalizeArgs {
    /// Liquid files, directories or glob patterns
    #[arg(required = false)]
    pub inputs: Vec<String>,

    /// 只预演，不写任何文件
    #[arg(long)]
    pub dry_run: bool,

    /// 输出格式 (table, json)
    #[arg(short = 'f', long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// 显示每个字段的改写
    #[arg(short = 'd', long)]
    pub detail: bool,
}

pub fn handle_localize(args: LocalizeArgs) -> Result<()> {
    // JSON 输出时 stdout 只保留 JSON 文档
    let json = args.format == OutputFormat::Json;
    if !json {
        Logger::info(t!("cli.localize.start"));
    }

    let Some(report) = run_batch(&args.inputs, args.dry_run)? else {
        return Ok(());
    };

    render_batch_report(&report, args.format, args.detail)?;
    if json {
        return Ok(());
    }

    if args.dry_run {
        Logger::info(t!("localize.dry_run_complete"));
    } else {
        Logger::success(tf!(
            "localize.completed",
            report.statistics.localized_files,
            report.statistics.entries_added
        ));
    }

    Ok(())
}

/// 展开输入并执行批处理；无输入或无 schema 时输出提示并返回 None
pub fn run_batch(inputs: &[String], dry_run: bool) -> Result<Option<BatchReport>> {
    let (files, localizer) = prepare_localizer(inputs)?;
    informational(localizer.with_dry_run(dry_run).run(&files))
}

/// 展开输入并按当前配置创建执行器
pub fn prepare_localizer(inputs: &[String]) -> Result<(Vec<PathBuf>, Localizer)> {
    let config = Config::snapshot();
    let verbose = config.output.verbose;
    let files = collect_inputs(inputs)?;

    if verbose {
        Logger::info(tf!("localize.found_files", files.len()));
    }

    let localizer = Localizer::new(config)?.with_verbose(verbose);
    Ok((files, localizer))
}

/// 无输入或无 schema 属于提示性终止：输出提示并返回 None
pub fn informational<T>(result: Result<T>) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(err) => match err.downcast_ref::<LocalizeError>() {
            Some(kind) if kind.is_informational() => {
                let key = match kind {
                    LocalizeError::NoInputSelected => "localize.no_files",
                    _ => "localize.no_schema_found",
                };
                Logger::info(t!(key));
                Ok(None)
            }
            _ => Err(err),
        },
    }
}
