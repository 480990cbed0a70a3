// ============================================================================
// Schema-i18n - Liquid schema 块读写
// ============================================================================
//
// 文件: src/core/liquid.rs
// 职责: 在 liquid 文本中定位、解析和替换 {% schema %} 块
// 边界:
//   - ✅ schema 起止标签识别（允许空白和 `-` 修剪标记）
//   - ✅ schema JSON 解析
//   - ✅ 以 2 空格缩进回写 schema，标签和块外内容保持原样
//   - ❌ 不应包含本地化逻辑
//   - ❌ 不应直接读写文件
//
// ============================================================================

use regex::Regex;
use serde_json::Value;
use std::ops::Range;
use std::path::Path;

use super::error::LocalizeError;

const OPEN_TAG_PATTERN: &str = r"\{%-?\s*schema\s*-?%\}";
const CLOSE_TAG_PATTERN: &str = r"\{%-?\s*endschema\s*-?%\}";

/// schema 块在文本中的位置
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaSpan {
    /// 含起止标签的完整范围
    pub block: Range<usize>,
    /// 标签之间的内容范围
    pub inner: Range<usize>,
}

/// liquid schema 块编解码器
#[derive(Debug, Clone)]
pub struct SchemaCodec {
    open: Regex,
    close: Regex,
}

impl SchemaCodec {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            open: Regex::new(OPEN_TAG_PATTERN)?,
            close: Regex::new(CLOSE_TAG_PATTERN)?,
        })
    }

    /// 找到第一个 schema 块
    pub fn locate(&self, text: &str) -> Option<SchemaSpan> {
        let open = self.open.find(text)?;
        let close = self.close.find_at(text, open.end())?;
        Some(SchemaSpan {
            block: open.start()..close.end(),
            inner: open.end()..close.start(),
        })
    }

    /// 取出 schema 块内容（去掉首尾空白）
    pub fn extract<'t>(&self, text: &'t str) -> Option<&'t str> {
        self.locate(text).map(|span| text[span.inner].trim())
    }

    /// 解析 schema 块；没有 schema 块时返回 None
    pub fn parse(&self, path: &Path, text: &str) -> Result<Option<Value>, LocalizeError> {
        let Some(inner) = self.extract(text) else {
            return Ok(None);
        };

        serde_json::from_str(inner)
            .map(Some)
            .map_err(|source| LocalizeError::DocumentParse {
                path: path.to_path_buf(),
                source,
            })
    }

    /// 用格式化后的 schema 替换第一个 schema 块的内容，其余内容保持不变
    pub fn replace(&self, text: &str, document: &Value) -> Result<Option<String>, serde_json::Error> {
        let Some(span) = self.locate(text) else {
            return Ok(None);
        };

        let rendered = serde_json::to_string_pretty(document)?;
        let mut output = String::with_capacity(text.len() + rendered.len());
        // 起止标签原样保留（包括 `-` 修剪标记），只替换中间内容
        output.push_str(&text[..span.inner.start]);
        output.push('\n');
        output.push_str(&rendered);
        output.push('\n');
        output.push_str(&text[span.inner.end..]);
        Ok(Some(output))
    }
}
