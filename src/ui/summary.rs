// ============================================================================
// Schema-i18n - 处理结果汇总组件
// ============================================================================
//
// 文件: src/ui/summary.rs
// 职责: 本地化结果汇总显示
// 边界:
//   - ✅ 批处理汇总显示
//   - ✅ 文件明细和字段明细输出
//   - ✅ 待处理字段表格（check）
//   - ✅ 国际化文本支持
//   - ❌ 不应包含具体业务逻辑
//   - ❌ 不应包含文件操作
//
// ============================================================================

use anyhow::Result;
use std::io::{self, Write};

use crate::models::{BatchReport, FileReport, FileStatus, ReferenceEntry, ReferenceReport};
use crate::utils::colors::Colors;
use crate::utils::constants::{icons, DOUBLE_RULE, RULE};
use crate::utils::logger::Logger;
use crate::{t, tf};

/// 输出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

/// 渲染批处理结果
pub fn render_batch_report(report: &BatchReport, format: OutputFormat, detail: bool) -> Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(report)?);
        }
        OutputFormat::Table => {
            print_file_table(report, detail);
            print_statistics(report);
        }
    }
    let _ = io::stdout().flush();
    Ok(())
}

/// 渲染待处理字段和失效引用（check）
pub fn render_pending_report(report: &BatchReport, format: OutputFormat, detail: bool) -> Result<()> {
    let pending_files = || {
        report
            .files
            .iter()
            .filter(|file| !file.changes.is_empty() || !file.unresolved.is_empty())
    };

    match format {
        OutputFormat::Json => {
            let pending: Vec<&FileReport> = pending_files().collect();
            let json_output = serde_json::json!({
                "pending_files": pending,
                "pending_fields": report.pending_fields(),
                "unresolved_references": report.statistics.unresolved_references,
            });
            println!("{}", serde_json::to_string_pretty(&json_output)?);
        }
        OutputFormat::Table => {
            Logger::info("");
            Logger::info(Colors::bold(&format!("{} {}", icons::CHECK, t!("check.pending_title"))));
            Logger::info(RULE);

            for file in pending_files() {
                Logger::info(tf!(
                    "check.file_pending",
                    Colors::info(&file.path.display().to_string()),
                    file.fresh_count(),
                    file.reused_count(),
                    file.unresolved.len()
                ));
                if detail {
                    print_changes(file);
                }
                for reference in &file.unresolved {
                    print_reference(reference, None);
                }
            }

            Logger::info(tf!(
                "check.total_pending",
                report.pending_fields(),
                report.statistics.unresolved_references
            ));
        }
    }
    let _ = io::stdout().flush();
    Ok(())
}

/// 渲染引用解析结果（resolve）
pub fn render_reference_report(
    report: &ReferenceReport,
    format: OutputFormat,
    detail: bool,
) -> Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(report)?);
        }
        OutputFormat::Table => {
            let locale_file = report.locale_file.display().to_string();
            Logger::info("");
            Logger::info(Colors::bold(&format!("{} {}", icons::CHECK, t!("resolve.title"))));
            Logger::info(RULE);

            for file in &report.files {
                Logger::info(tf!(
                    "resolve.file_summary",
                    Colors::info(&file.path.display().to_string()),
                    file.references.len(),
                    file.unresolved().count()
                ));
                for reference in &file.references {
                    if detail || !reference.resolved {
                        print_reference(reference, Some(&locale_file));
                    }
                }
            }

            Logger::info(RULE);
            Logger::info(tf!(
                "resolve.total",
                report.total_references(),
                report.unresolved_count()
            ));
        }
    }
    let _ = io::stdout().flush();
    Ok(())
}

fn print_reference(reference: &ReferenceEntry, locale_file: Option<&str>) {
    if !reference.resolved {
        Logger::info(format!(
            "    {} {} {} {}",
            Colors::error(icons::ERROR),
            Colors::dim(&reference.location),
            reference.reference,
            Colors::error(&t!("resolve.missing"))
        ));
        return;
    }

    let target = match (locale_file, reference.line) {
        (Some(file), Some(line)) => format!("{}:L{}", file, line),
        (Some(file), None) => file.to_string(),
        (None, _) => String::new(),
    };
    Logger::info(format!(
        "    {} {} {} {} {}",
        Colors::success(icons::SUCCESS),
        Colors::dim(&reference.location),
        reference.reference,
        icons::ARROW,
        target
    ));
}

fn print_file_table(report: &BatchReport, detail: bool) {
    Logger::info("");
    Logger::info(Colors::bold(&format!("{} {}", icons::SUMMARY, t!("output.result_title"))));
    Logger::info(DOUBLE_RULE);

    for file in &report.files {
        let (icon, status) = status_label(&file.status);
        Logger::info(format!(
            "{} {} {} {}",
            icon,
            file.path.display(),
            icons::ARROW,
            status
        ));

        if let Some(error) = &file.error {
            Logger::info(format!("    {}", Colors::error(error)));
        }

        if detail {
            print_changes(file);
        }
    }
}

fn print_changes(file: &FileReport) {
    for change in &file.changes {
        let icon = if change.reused { icons::REUSED } else { icons::ADDED };
        Logger::info(format!(
            "    {} {} {} {} {}",
            icon,
            Colors::dim(&change.location),
            change.text,
            icons::ARROW,
            change.reference
        ));
    }
}

fn status_label(status: &FileStatus) -> (&'static str, String) {
    match status {
        FileStatus::Localized => (icons::SUCCESS, Colors::success(&t!("status.localized"))),
        FileStatus::Unchanged => (icons::SKIP, Colors::dim(&t!("status.unchanged"))),
        FileStatus::DryRun => (icons::FILE, Colors::info(&t!("status.dry_run"))),
        FileStatus::NoSchema => (icons::SKIP, Colors::dim(&t!("status.no_schema"))),
        FileStatus::ParseFailed => (icons::WARNING, Colors::warn(&t!("status.parse_failed"))),
        FileStatus::RewriteFailed => (icons::ERROR, Colors::error(&t!("status.rewrite_failed"))),
    }
}

fn print_statistics(report: &BatchReport) {
    let stats = &report.statistics;
    Logger::info(RULE);
    Logger::info(format!("{} {}", icons::FILE, tf!("output.total_files", stats.total_files)));
    Logger::info(format!(
        "{} {}",
        icons::SUCCESS,
        tf!("output.localized_files", stats.localized_files)
    ));
    Logger::info(format!("{} {}", icons::SKIP, tf!("output.skipped_files", stats.skipped_files)));
    Logger::info(format!("{} {}", icons::ERROR, tf!("output.failed_files", stats.failed_files)));
    Logger::info(format!(
        "{} {}",
        icons::ADDED,
        tf!("output.fields_localized", stats.fields_localized, stats.entries_added)
    ));
    Logger::info(format!(
        "{} {}",
        icons::REUSED,
        tf!("output.fields_reused", stats.fields_reused)
    ));
    Logger::info(tf!("output.locale_file", report.locale_file.display()));
}
