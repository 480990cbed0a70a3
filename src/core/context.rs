// ============================================================================
// Schema-i18n - 本地化上下文
// ============================================================================
//
// 文件: src/core/context.rs
// 职责: 持有整批处理共享的翻译字典
// 边界:
//   - ✅ 字典加载（文件不存在视为空字典）与写回
//   - ✅ 共享文案子树（默认 sections.all）的访问
//   - ✅ 吸收新生成的翻译
//   - ❌ 不应包含 schema 遍历逻辑
//   - ❌ 不应包含 liquid 文件处理
//
// ============================================================================

use serde_json::{Map, Value};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::error::LocalizeError;
use super::merger::{merge, MergeOutcome};
use crate::models::schema::KeyPath;

static EMPTY: Value = Value::Null;

/// 整批处理共享的字典上下文
#[derive(Debug, Clone)]
pub struct LocalizationContext {
    /// 完整字典
    dictionary: Value,
    /// 共享文案所在路径
    shared_root: KeyPath,
    /// 字典文件位置
    path: PathBuf,
}

impl LocalizationContext {
    /// 由内存中的字典构造
    pub fn new(dictionary: Value, shared_root: &str, path: impl Into<PathBuf>) -> Self {
        Self {
            dictionary,
            shared_root: KeyPath::parse(shared_root),
            path: path.into(),
        }
    }

    /// 从文件加载字典，文件不存在时为空字典
    pub fn load(path: &Path, shared_root: &str) -> Result<Self, LocalizeError> {
        let dictionary = match fs::read_to_string(path) {
            Ok(content) => {
                let value: Value =
                    serde_json::from_str(&content).map_err(|e| LocalizeError::DictionaryRead {
                        path: path.to_path_buf(),
                        message: e.to_string(),
                    })?;
                if !value.is_object() {
                    return Err(LocalizeError::MalformedDictionary {
                        path: path.to_path_buf(),
                    });
                }
                value
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "dictionary not found, starting empty");
                Value::Object(Map::new())
            }
            Err(e) => {
                return Err(LocalizeError::DictionaryRead {
                    path: path.to_path_buf(),
                    message: e.to_string(),
                })
            }
        };

        Ok(Self::new(dictionary, shared_root, path))
    }

    /// 完整字典
    pub fn dictionary(&self) -> &Value {
        &self.dictionary
    }

    /// 共享文案路径
    pub fn shared_root(&self) -> &KeyPath {
        &self.shared_root
    }

    /// 字典文件位置
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 共享文案子树，缺失时为空
    pub fn shared_labels(&self) -> &Value {
        let mut node = &self.dictionary;
        for segment in self.shared_root.segments() {
            match node.get(segment) {
                Some(child) => node = child,
                None => return &EMPTY,
            }
        }
        node
    }

    /// 并入新生成的翻译，返回新增叶子数
    pub fn absorb(&mut self, translations: &Value) -> usize {
        let MergeOutcome {
            merged,
            added_leaves,
        } = merge(&self.dictionary, translations);
        self.dictionary = merged;
        added_leaves
    }

    /// 写回字典文件（2 空格缩进）
    pub fn save(&self) -> Result<(), LocalizeError> {
        let write_error = |source| LocalizeError::DictionaryWrite {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(write_error)?;
            }
        }

        let mut content = serde_json::to_string_pretty(&self.dictionary)
            .map_err(|e| write_error(std::io::Error::new(ErrorKind::InvalidData, e)))?;
        content.push('\n');
        fs::write(&self.path, content).map_err(write_error)
    }
}
