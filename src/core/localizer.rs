// ============================================================================
// Schema-i18n - 批量本地化
// ============================================================================
//
// 文件: src/core/localizer.rs
// 职责: 逐个 section 文件执行 定位 → 构建翻译 → 合并 → 改写 → 写回
// 边界:
//   - ✅ 输入文件读取和 schema 解析
//   - ✅ 字典加载、合并与写回
//   - ✅ 单文件写回失败不影响后续文件
//   - ✅ 已有 t: 引用的解析检查
//   - ✅ 处理结果收集
//   - ❌ 不应包含 CLI 参数处理
//   - ❌ 不应包含结果渲染
//
// 算法设计:
// 1. 读取全部输入并解析 schema，全部没有 schema 时终止
// 2. 由第一个输入推导主题根目录，加载字典（只加载一次）
// 3. 每个文件：生成计划 → 翻译树并入字典并写回 → 改写 schema → 检查引用 → 写回文件
// 4. 翻译合并和字典写回的错误直接向上抛出，schema 写回错误只记录
//
// ============================================================================

use anyhow::{Context, Result};
use serde_json::Value;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::builder::locale_from_edits;
use super::context::LocalizationContext;
use super::error::LocalizeError;
use super::liquid::SchemaCodec;
use super::resolver::{dictionary_line, reference_sites, resolves, ReferenceSite};
use super::rewriter::apply_edits;
use super::walker::{plan, EditKind, FieldEdit};
use crate::models::config::{Config, ParseErrorPolicy};
use crate::models::schema::section_name_from_path;
use crate::models::{
    BatchReport, FieldChange, FileReferences, FileReport, FileStatus, ReferenceEntry,
    ReferenceReport,
};
use crate::utils::logger::Logger;
use crate::{t, tf};

/// 读取并解析后的 section 文件
#[derive(Debug, Clone)]
pub struct SectionSource {
    pub path: PathBuf,
    pub section: String,
    pub text: String,
    /// schema 内容；没有 schema 或解析失败时为 None
    pub document: Option<Value>,
    /// 解析失败信息
    pub parse_error: Option<String>,
}

/// 改写后的 liquid 文本写回目标
pub trait SchemaWriter {
    fn write(&self, path: &Path, contents: &str) -> io::Result<()>;
}

/// 直接写回文件系统
pub struct FsWriter;

impl SchemaWriter for FsWriter {
    fn write(&self, path: &Path, contents: &str) -> io::Result<()> {
        fs::write(path, contents)
    }
}

/// 批量本地化执行器
pub struct Localizer {
    config: Config,
    codec: SchemaCodec,
    writer: Box<dyn SchemaWriter>,
    dry_run: bool,
    verbose: bool,
}

impl Localizer {
    /// 创建新的执行器
    pub fn new(config: Config) -> Result<Self> {
        Ok(Self {
            config,
            codec: SchemaCodec::new()?,
            writer: Box::new(FsWriter),
            dry_run: false,
            verbose: false,
        })
    }

    /// 预演模式：不写任何文件
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// 启用详细日志
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// 替换 liquid 文件的写回方式
    pub fn with_writer(mut self, writer: impl SchemaWriter + 'static) -> Self {
        self.writer = Box::new(writer);
        self
    }

    /// 处理一批 section 文件
    pub fn run(&self, inputs: &[PathBuf]) -> Result<BatchReport> {
        let (sources, mut ctx) = self.prepare(inputs)?;

        let mut report = BatchReport {
            theme_root: self.theme_root(inputs),
            locale_file: ctx.path().to_path_buf(),
            ..Default::default()
        };

        for source in sources {
            let file_report = self.process_source(&mut ctx, source)?;
            report.files.push(file_report);
        }

        report.finalize();
        Ok(report)
    }

    /// 解析各文件中已有的 t: 引用，不做任何改写
    pub fn resolve(&self, inputs: &[PathBuf]) -> Result<ReferenceReport> {
        let (sources, ctx) = self.prepare(inputs)?;
        // 字典已成功加载，文件缺失时按空文本处理
        let content = fs::read_to_string(ctx.path()).unwrap_or_default();

        let mut report = ReferenceReport {
            locale_file: ctx.path().to_path_buf(),
            ..Default::default()
        };

        for source in sources {
            let Some(document) = &source.document else {
                continue;
            };

            let references: Vec<ReferenceEntry> = reference_sites(document)
                .into_iter()
                .map(|site| {
                    let resolved = is_resolved(&ctx, &site);
                    let line = site
                        .key_path()
                        .filter(|_| resolved)
                        .and_then(|path| dictionary_line(&content, &path));
                    reference_entry(site, resolved, line)
                })
                .collect();

            debug!(path = %source.path.display(), references = references.len(), "references resolved");
            report.files.push(FileReferences {
                path: source.path,
                section: source.section,
                references,
            });
        }

        Ok(report)
    }

    /// 读取输入并加载字典
    fn prepare(&self, inputs: &[PathBuf]) -> Result<(Vec<SectionSource>, LocalizationContext)> {
        if inputs.is_empty() {
            return Err(LocalizeError::NoInputSelected.into());
        }

        let sources = self.load_sources(inputs)?;
        if sources.iter().all(|source| source.document.is_none()) {
            return Err(LocalizeError::NoSchemaFound.into());
        }

        let theme_root = self.theme_root(inputs);
        let locale_file = self.config.locale_file_path(&theme_root);
        if self.verbose {
            Logger::info(tf!("localize.theme_root", theme_root.display()));
            Logger::info(tf!("localize.locale_file", locale_file.display()));
            Logger::info(tf!("localize.parse_policy", self.config.extract.on_parse_error));
        }

        let ctx = LocalizationContext::load(&locale_file, &self.config.theme.shared_root)?;
        Ok((sources, ctx))
    }

    fn theme_root(&self, inputs: &[PathBuf]) -> PathBuf {
        inputs
            .first()
            .map(|first| self.config.resolve_theme_root(first))
            .unwrap_or_default()
    }

    /// 读取所有输入并解析 schema
    pub fn load_sources(&self, inputs: &[PathBuf]) -> Result<Vec<SectionSource>> {
        let mut sources = Vec::with_capacity(inputs.len());

        for path in inputs {
            let text = fs::read_to_string(path)
                .with_context(|| tf!("error.read_file", path.display()))?;
            let section = section_name_from_path(path);

            let (document, parse_error) = match self.codec.parse(path, &text) {
                Ok(document) => (document, None),
                Err(err) => {
                    match self.config.extract.on_parse_error {
                        ParseErrorPolicy::Abort => return Err(err.into()),
                        ParseErrorPolicy::Warn => Logger::warn(tf!("localize.parse_failed", err)),
                        ParseErrorPolicy::Skip => debug!(error = %err, "skipping unparsable schema"),
                    }
                    (None, Some(err.to_string()))
                }
            };

            sources.push(SectionSource {
                path: path.clone(),
                section,
                text,
                document,
                parse_error,
            });
        }

        Ok(sources)
    }

    /// 处理单个文件
    fn process_source(
        &self,
        ctx: &mut LocalizationContext,
        source: SectionSource,
    ) -> Result<FileReport> {
        let SectionSource {
            path,
            section,
            text,
            document,
            parse_error,
        } = source;

        let Some(mut document) = document else {
            let report = match parse_error {
                Some(error) => FileReport::new(path, section, FileStatus::ParseFailed).with_error(error),
                None => {
                    if self.verbose {
                        Logger::info(tf!("localize.no_schema", path.display()));
                    }
                    FileReport::new(path, section, FileStatus::NoSchema)
                }
            };
            return Ok(report);
        };

        if self.verbose {
            Logger::info(tf!("localize.processing", path.display(), section));
        }

        // 翻译树：合并或字典写回失败时终止整批
        let edits = plan(ctx, &document, &section);
        let locale = locale_from_edits(&edits, &section);
        let entries_added = ctx.absorb(&locale);
        if entries_added > 0 && !self.dry_run {
            ctx.save()?;
        }
        debug!(section = %section, entries_added, edits = edits.len(), "locale merged");

        // 改写后的文档（预演模式下只在内存中）用于检查引用
        apply_edits(&mut document, &edits);
        let unresolved: Vec<ReferenceEntry> = reference_sites(&document)
            .into_iter()
            .filter(|site| !is_resolved(ctx, site))
            .map(|site| reference_entry(site, false, None))
            .collect();
        if self.verbose && !unresolved.is_empty() {
            Logger::warn(tf!("localize.unresolved", path.display(), unresolved.len()));
        }

        let mut report = FileReport::new(path.clone(), section, FileStatus::Unchanged);
        report.entries_added = entries_added;
        report.changes = edits.iter().map(field_change).collect();
        report.unresolved = unresolved;

        if edits.is_empty() {
            return Ok(report);
        }

        if self.dry_run {
            report.status = FileStatus::DryRun;
            return Ok(report);
        }

        // schema 写回：失败只记录，继续处理下一个文件
        match self.persist(&path, &text, &document) {
            Ok(()) => report.status = FileStatus::Localized,
            Err(err) => {
                Logger::error(err.to_string());
                report.status = FileStatus::RewriteFailed;
                report.error = Some(err.to_string());
            }
        }

        Ok(report)
    }

    /// 把改写后的 schema 写回 liquid 文件
    fn persist(&self, path: &Path, text: &str, document: &Value) -> Result<(), LocalizeError> {
        let rewrite_error = |message: String| LocalizeError::Rewrite {
            path: path.to_path_buf(),
            message,
        };

        let output = self
            .codec
            .replace(text, document)
            .map_err(|e| rewrite_error(e.to_string()))?
            .ok_or_else(|| rewrite_error(t!("error.schema_missing")))?;

        self.writer
            .write(path, &output)
            .map_err(|e| rewrite_error(e.to_string()))
    }
}

fn is_resolved(ctx: &LocalizationContext, site: &ReferenceSite) -> bool {
    site.key_path()
        .map_or(false, |path| resolves(ctx.dictionary(), &path))
}

fn reference_entry(site: ReferenceSite, resolved: bool, line: Option<usize>) -> ReferenceEntry {
    ReferenceEntry {
        location: site.pointer,
        reference: site.reference,
        resolved,
        line,
    }
}

fn field_change(edit: &FieldEdit) -> FieldChange {
    FieldChange {
        location: edit.pointer.clone(),
        text: edit.text.clone(),
        reference: edit.reference.clone(),
        reused: edit.kind != EditKind::Fresh,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const HERO: &str = "<h1>{{ section.settings.title }}</h1>\n{% schema %}\n{\"name\": \"Hero\", \"settings\": [{\"id\": \"title\", \"label\": \"Title\", \"type\": \"text\"}]}\n{% endschema %}\n";

    fn theme() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("sections")).unwrap();
        dir
    }

    #[test]
    fn test_run_without_inputs() {
        let localizer = Localizer::new(Config::default()).unwrap();
        let err = localizer.run(&[]).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<LocalizeError>(),
            Some(LocalizeError::NoInputSelected)
        ));
    }

    #[test]
    fn test_run_without_any_schema() {
        let dir = theme();
        let path = dir.path().join("sections/plain.liquid");
        fs::write(&path, "<div></div>").unwrap();

        let localizer = Localizer::new(Config::default()).unwrap();
        let err = localizer.run(&[path]).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<LocalizeError>(),
            Some(LocalizeError::NoSchemaFound)
        ));
    }

    #[test]
    fn test_run_end_to_end() {
        let dir = theme();
        let path = dir.path().join("sections/section-hero.liquid");
        fs::write(&path, HERO).unwrap();

        let localizer = Localizer::new(Config::default()).unwrap();
        let report = localizer.run(&[path.clone()]).unwrap();
        assert_eq!(report.files[0].status, FileStatus::Localized);
        assert_eq!(report.files[0].section, "hero");
        assert_eq!(report.statistics.entries_added, 2);

        let dictionary: Value = serde_json::from_str(
            &fs::read_to_string(dir.path().join("locales/en.default.schema.json")).unwrap(),
        )
        .unwrap();
        assert_eq!(
            dictionary,
            json!({ "sections": { "hero": { "name": "Hero", "settings": { "title": { "label": "Title" } } } } })
        );

        let codec = SchemaCodec::new().unwrap();
        let text = fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("<h1>{{ section.settings.title }}</h1>\n"));
        assert_eq!(
            codec.parse(&path, &text).unwrap().unwrap(),
            json!({
                "name": "t:sections.hero.name",
                "settings": [{ "id": "title", "label": "t:sections.hero.settings.title.label", "type": "text" }]
            })
        );
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let dir = theme();
        let path = dir.path().join("sections/hero.liquid");
        fs::write(&path, HERO).unwrap();

        let localizer = Localizer::new(Config::default()).unwrap().with_dry_run(true);
        let report = localizer.run(&[path.clone()]).unwrap();

        assert_eq!(report.files[0].status, FileStatus::DryRun);
        assert_eq!(report.pending_fields(), 2);
        assert_eq!(fs::read_to_string(&path).unwrap(), HERO);
        assert!(!dir.path().join("locales/en.default.schema.json").exists());
    }

    #[test]
    fn test_parse_error_policies() {
        let dir = theme();
        let broken = dir.path().join("sections/broken.liquid");
        let hero = dir.path().join("sections/hero.liquid");
        fs::write(&broken, "{% schema %}{ oops {% endschema %}").unwrap();
        fs::write(&hero, HERO).unwrap();

        let mut config = Config::default();
        config.extract.on_parse_error = ParseErrorPolicy::Skip;
        let report = Localizer::new(config.clone())
            .unwrap()
            .with_dry_run(true)
            .run(&[broken.clone(), hero.clone()])
            .unwrap();
        assert_eq!(report.files[0].status, FileStatus::ParseFailed);
        assert_eq!(report.statistics.failed_files, 1);

        config.extract.on_parse_error = ParseErrorPolicy::Abort;
        let err = Localizer::new(config)
            .unwrap()
            .run(&[broken, hero])
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<LocalizeError>(),
            Some(LocalizeError::DocumentParse { .. })
        ));
    }

    #[test]
    fn test_warn_policy_continues_batch() {
        let dir = theme();
        let broken = dir.path().join("sections/broken.liquid");
        let hero = dir.path().join("sections/hero.liquid");
        fs::write(&broken, "{% schema %}{ oops {% endschema %}").unwrap();
        fs::write(&hero, HERO).unwrap();

        let config = Config::default();
        assert_eq!(config.extract.on_parse_error, ParseErrorPolicy::Warn);
        let report = Localizer::new(config).unwrap().run(&[broken.clone(), hero]).unwrap();

        assert_eq!(report.files[0].status, FileStatus::ParseFailed);
        assert!(report.files[0].error.as_deref().unwrap().contains("broken.liquid"));
        assert_eq!(report.files[1].status, FileStatus::Localized);
        assert_eq!(fs::read_to_string(&broken).unwrap(), "{% schema %}{ oops {% endschema %}");
    }

    /// 对指定文件名写入失败，其余照常写入
    struct FailingWriter(&'static str);

    impl SchemaWriter for FailingWriter {
        fn write(&self, path: &Path, contents: &str) -> io::Result<()> {
            if path.file_name().and_then(|n| n.to_str()) == Some(self.0) {
                return Err(io::Error::new(io::ErrorKind::PermissionDenied, "read-only file"));
            }
            fs::write(path, contents)
        }
    }

    #[test]
    fn test_rewrite_failure_continues_batch() {
        let dir = theme();
        let hero = dir.path().join("sections/hero.liquid");
        let footer = dir.path().join("sections/footer.liquid");
        fs::write(&hero, HERO).unwrap();
        fs::write(
            &footer,
            "{% schema %}{\"name\": \"Footer\", \"settings\": [{\"id\": \"menu\", \"label\": \"Menu\"}]}{% endschema %}",
        )
        .unwrap();

        let report = Localizer::new(Config::default())
            .unwrap()
            .with_writer(FailingWriter("hero.liquid"))
            .run(&[hero.clone(), footer.clone()])
            .unwrap();

        assert_eq!(report.files[0].status, FileStatus::RewriteFailed);
        let error = report.files[0].error.as_deref().unwrap();
        assert!(error.contains("hero.liquid has error"));
        assert!(error.contains("read-only file"));
        assert_eq!(report.files[1].status, FileStatus::Localized);
        assert_eq!(report.statistics.failed_files, 1);

        // 失败的文件保持原样，字典仍包含两个文件的翻译
        assert_eq!(fs::read_to_string(&hero).unwrap(), HERO);
        assert!(fs::read_to_string(&footer).unwrap().contains("t:sections.footer.settings.menu.label"));
        let dictionary: Value = serde_json::from_str(
            &fs::read_to_string(dir.path().join("locales/en.default.schema.json")).unwrap(),
        )
        .unwrap();
        assert_eq!(
            dictionary,
            json!({
                "sections": {
                    "hero": { "name": "Hero", "settings": { "title": { "label": "Title" } } },
                    "footer": { "name": "Footer", "settings": { "menu": { "label": "Menu" } } }
                }
            })
        );
    }

    const LINKED: &str = "{% schema %}{\"name\": \"t:sections.hero.name\", \"settings\": [{\"id\": \"title\", \"label\": \"t:sections.hero.settings.title.label\"}, {\"id\": \"cta\", \"label\": \"t:sections.hero.settings.cta.label\"}]}{% endschema %}";

    fn write_dictionary(dir: &Path) {
        let path = dir.join("locales/en.default.schema.json");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        let content = serde_json::to_string_pretty(&json!({
            "sections": { "hero": { "name": "Hero", "settings": { "title": { "label": "Title" } } } }
        }))
        .unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_run_reports_unresolved_references() {
        let dir = theme();
        write_dictionary(dir.path());
        let path = dir.path().join("sections/hero.liquid");
        fs::write(&path, LINKED).unwrap();

        let report = Localizer::new(Config::default()).unwrap().run(&[path]).unwrap();
        assert_eq!(report.files[0].status, FileStatus::Unchanged);
        assert_eq!(report.statistics.unresolved_references, 1);
        assert_eq!(report.files[0].unresolved[0].location, "/settings/1/label");
        assert_eq!(
            report.files[0].unresolved[0].reference,
            "t:sections.hero.settings.cta.label"
        );
    }

    #[test]
    fn test_resolve_references_with_lines() {
        let dir = theme();
        write_dictionary(dir.path());
        let path = dir.path().join("sections/hero.liquid");
        let plain = dir.path().join("sections/plain.liquid");
        fs::write(&path, LINKED).unwrap();
        fs::write(&plain, "<div></div>").unwrap();

        let report = Localizer::new(Config::default())
            .unwrap()
            .resolve(&[path.clone(), plain])
            .unwrap();

        assert_eq!(report.files.len(), 1);
        assert_eq!(report.total_references(), 3);
        assert_eq!(report.unresolved_count(), 1);

        let lines: Vec<(bool, Option<usize>)> = report.files[0]
            .references
            .iter()
            .map(|r| (r.resolved, r.line))
            .collect();
        assert_eq!(lines, vec![(true, Some(4)), (true, Some(7)), (false, None)]);
        // 只读：文件不变
        assert_eq!(fs::read_to_string(&path).unwrap(), LINKED);
    }
}
