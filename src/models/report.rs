// ============================================================================
// Schema-i18n - 处理结果数据模型
// ============================================================================
//
// 文件: src/models/report.rs
// 职责: 单文件和整批处理结果的数据结构
// 边界:
//   - ✅ 处理结果数据结构定义
//   - ✅ 结果序列化（JSON 输出）
//   - ✅ 汇总统计
//   - ❌ 不应包含处理逻辑
//   - ❌ 不应包含输出渲染
//
// ============================================================================

use serde::Serialize;
use std::path::PathBuf;

/// 单个文件的处理状态
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FileStatus {
    /// 已本地化并写回
    Localized,
    /// 已全部是引用，无需改动
    Unchanged,
    /// 预演模式，未写入
    DryRun,
    /// 没有 schema 块
    NoSchema,
    /// schema 解析失败
    ParseFailed,
    /// 写回失败
    RewriteFailed,
}

/// 单个字段的处理结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldChange {
    /// 字段在 schema 中的 JSON Pointer，例如 `/settings/0/label`
    pub location: String,
    /// 原始文案
    pub text: String,
    /// 改写后的引用
    pub reference: String,
    /// 是否复用已有字典条目
    pub reused: bool,
}

/// schema 中的一个翻译引用及其解析结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReferenceEntry {
    /// 字段在 schema 中的 JSON Pointer
    pub location: String,
    /// 引用文本
    pub reference: String,
    /// 字典中是否存在对应文案
    pub resolved: bool,
    /// 条目在字典文件中的行号
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
}

/// 单个文件的处理结果
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    /// 文件路径
    pub path: PathBuf,
    /// section 名称
    pub section: String,
    /// 处理状态
    pub status: FileStatus,
    /// 字段变更
    pub changes: Vec<FieldChange>,
    /// 新增到字典的叶子条目数
    pub entries_added: usize,
    /// 在字典中找不到的引用
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub unresolved: Vec<ReferenceEntry>,
    /// 错误信息
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl FileReport {
    pub fn new(path: PathBuf, section: String, status: FileStatus) -> Self {
        Self {
            path,
            section,
            status,
            changes: Vec::new(),
            entries_added: 0,
            unresolved: Vec::new(),
            error: None,
        }
    }

    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }

    /// 新建字典条目的字段数
    pub fn fresh_count(&self) -> usize {
        self.changes.iter().filter(|c| !c.reused).count()
    }

    /// 复用字典条目的字段数
    pub fn reused_count(&self) -> usize {
        self.changes.iter().filter(|c| c.reused).count()
    }
}

/// 整批处理结果
#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchReport {
    /// 主题根目录
    pub theme_root: PathBuf,
    /// 字典文件
    pub locale_file: PathBuf,
    /// 各文件结果
    pub files: Vec<FileReport>,
    /// 统计
    pub statistics: BatchStatistics,
}

/// 整批统计信息
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchStatistics {
    pub total_files: usize,
    pub localized_files: usize,
    pub skipped_files: usize,
    pub failed_files: usize,
    pub fields_localized: usize,
    pub fields_reused: usize,
    pub entries_added: usize,
    pub unresolved_references: usize,
}

impl BatchReport {
    /// 根据文件结果重新计算统计信息
    pub fn finalize(&mut self) {
        let mut stats = BatchStatistics {
            total_files: self.files.len(),
            ..Default::default()
        };

        for file in &self.files {
            match file.status {
                FileStatus::Localized | FileStatus::DryRun => stats.localized_files += 1,
                FileStatus::Unchanged | FileStatus::NoSchema => stats.skipped_files += 1,
                FileStatus::ParseFailed | FileStatus::RewriteFailed => stats.failed_files += 1,
            }
            stats.fields_localized += file.fresh_count();
            stats.fields_reused += file.reused_count();
            stats.entries_added += file.entries_added;
            stats.unresolved_references += file.unresolved.len();
        }

        self.statistics = stats;
    }

    /// 所有文件中仍待本地化的字段数
    pub fn pending_fields(&self) -> usize {
        self.files.iter().map(|f| f.changes.len()).sum()
    }
}

/// 单个文件中的全部翻译引用
#[derive(Debug, Clone, Serialize)]
pub struct FileReferences {
    pub path: PathBuf,
    pub section: String,
    pub references: Vec<ReferenceEntry>,
}

impl FileReferences {
    pub fn unresolved(&self) -> impl Iterator<Item = &ReferenceEntry> {
        self.references.iter().filter(|r| !r.resolved)
    }
}

/// 引用解析结果
#[derive(Debug, Clone, Default, Serialize)]
pub struct ReferenceReport {
    /// 字典文件
    pub locale_file: PathBuf,
    /// 各文件的引用
    pub files: Vec<FileReferences>,
}

impl ReferenceReport {
    pub fn total_references(&self) -> usize {
        self.files.iter().map(|f| f.references.len()).sum()
    }

    pub fn unresolved_count(&self) -> usize {
        self.files.iter().map(|f| f.unresolved().count()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn change(reused: bool) -> FieldChange {
        FieldChange {
            location: "settings.title.label".to_string(),
            text: "Title".to_string(),
            reference: "t:sections.hero.settings.title.label".to_string(),
            reused,
        }
    }

    #[test]
    fn test_finalize_statistics() {
        let mut localized = FileReport::new("a.liquid".into(), "a".into(), FileStatus::Localized);
        localized.changes = vec![change(false), change(true), change(false)];
        localized.entries_added = 2;
        localized.unresolved = vec![ReferenceEntry {
            location: "/settings/1/label".to_string(),
            reference: "t:sections.a.missing".to_string(),
            resolved: false,
            line: None,
        }];

        let mut report = BatchReport {
            files: vec![
                localized,
                FileReport::new("b.liquid".into(), "b".into(), FileStatus::NoSchema),
                FileReport::new("c.liquid".into(), "c".into(), FileStatus::RewriteFailed)
                    .with_error("permission denied"),
            ],
            ..Default::default()
        };
        report.finalize();

        assert_eq!(
            report.statistics,
            BatchStatistics {
                total_files: 3,
                localized_files: 1,
                skipped_files: 1,
                failed_files: 1,
                fields_localized: 2,
                fields_reused: 1,
                entries_added: 2,
                unresolved_references: 1,
            }
        );
        assert_eq!(report.pending_fields(), 3);
    }
}
