// ============================================================================
// Schema-i18n - 输入文件收集
// ============================================================================
//
// 文件: src/core/inputs.rs
// 职责: 把命令行输入（文件、目录、glob）展开为 .liquid 文件列表
// 边界:
//   - ✅ 文件 / 目录 / glob 模式展开
//   - ✅ 只保留 .liquid 文件，按出现顺序去重
//   - ❌ 不应读取文件内容
//
// ============================================================================

use anyhow::{Context, Result};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

use crate::tf;

/// 模板文件扩展名
pub const LIQUID_EXTENSION: &str = "liquid";

/// 展开输入，返回按出现顺序去重后的 .liquid 文件
pub fn collect_inputs(inputs: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    let mut seen = HashSet::new();

    for input in inputs {
        for path in expand_input(input)? {
            if is_liquid_file(&path) && seen.insert(path.clone()) {
                files.push(path);
            }
        }
    }

    debug!(count = files.len(), "collected liquid files");
    Ok(files)
}

fn expand_input(input: &str) -> Result<Vec<PathBuf>> {
    let path = Path::new(input);

    if path.is_dir() {
        let mut found = Vec::new();
        for entry in WalkDir::new(path).follow_links(false).sort_by_file_name() {
            let entry = entry.with_context(|| tf!("error.walk_directory", path.display()))?;
            if entry.file_type().is_file() {
                found.push(entry.into_path());
            }
        }
        return Ok(found);
    }

    if path.is_file() {
        return Ok(vec![path.to_path_buf()]);
    }

    // 既不是文件也不是目录时按 glob 模式处理
    let mut found = Vec::new();
    let entries = glob::glob(input).with_context(|| tf!("error.invalid_pattern", input))?;
    for entry in entries {
        let entry = entry.with_context(|| tf!("error.invalid_pattern", input))?;
        if entry.is_file() {
            found.push(entry);
        }
    }
    Ok(found)
}

/// 是否是 .liquid 文件
pub fn is_liquid_file(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.eq_ignore_ascii_case(LIQUID_EXTENSION))
        .unwrap_or(false)
}
