// ============================================================================
// Schema-i18n - 错误类型
// ============================================================================
//
// 文件: src/core/error.rs
// 职责: 本地化流程中的领域错误定义
// 边界:
//   - ✅ 错误种类定义
//   - ✅ 错误信息格式化
//   - ❌ 不应包含错误处理策略
//   - ❌ 不应包含日志输出
//
// ============================================================================

use std::path::PathBuf;
use thiserror::Error;

/// 本地化流程错误
#[derive(Debug, Error)]
pub enum LocalizeError {
    /// 没有选择任何 .liquid 文件
    #[error("no .liquid files selected")]
    NoInputSelected,

    /// 所有文件都没有 schema 块
    #[error("no {{% schema %}} block found in the selected files")]
    NoSchemaFound,

    /// schema 块内容不是合法 JSON
    #[error("failed to parse schema in {}: {source}", .path.display())]
    DocumentParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// 改写或写回 section 文件失败
    #[error("{} has error: {message}", .path.display())]
    Rewrite { path: PathBuf, message: String },

    /// 字典文件读取失败（文件不存在不算错误）
    #[error("failed to read dictionary {}: {message}", .path.display())]
    DictionaryRead { path: PathBuf, message: String },

    /// 字典文件写入失败
    #[error("failed to write dictionary {}: {source}", .path.display())]
    DictionaryWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// 字典根节点不是对象
    #[error("dictionary {} must be a JSON object at the top level", .path.display())]
    MalformedDictionary { path: PathBuf },
}

impl LocalizeError {
    /// 是否属于"无事可做"的提示性终止
    pub fn is_informational(&self) -> bool {
        matches!(
            self,
            LocalizeError::NoInputSelected | LocalizeError::NoSchemaFound
        )
    }
}
