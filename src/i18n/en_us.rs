// ============================================================================
// Schema-i18n - English Translation Table
// ============================================================================
//
// 文件: src/i18n/en_us.rs
// 职责: English translation content definition
// 边界:
//   - ✅ English translation strings definition
//   - ✅ Translation key-value pairs maintenance
//   - ❌ Should not contain translation logic
//   - ❌ Should not contain business logic
//   - ❌ Should not contain other language translations
//
// ============================================================================

/// English translation table
pub const TRANSLATIONS: &[(&str, &str)] = &[
    // CLI related
    ("cli.localize.start", "Localizing section schemas..."),
    ("cli.check.start", "Checking section schemas for inline strings..."),
    ("cli.resolve.start", "Resolving t: references..."),
    // Localize related
    ("localize.found_files", "Found {} liquid files"),
    ("localize.no_files", "No file selected. Exiting."),
    (
        "localize.no_schema_found",
        "No {% schema %} found in the selected Liquid files. Exiting.",
    ),
    ("localize.theme_root", "Theme root: {}"),
    ("localize.locale_file", "Locale file: {}"),
    ("localize.processing", "Processing {} (section: {})"),
    ("localize.no_schema", "No schema block in {}, skipping"),
    ("localize.parse_failed", "Skipping file: {}"),
    ("localize.parse_policy", "Schema parse failures: {}"),
    (
        "localize.unresolved",
        "{} has {} t: references missing from the locale file",
    ),
    (
        "localize.dry_run_complete",
        "Dry run complete, no files were written",
    ),
    (
        "localize.completed",
        "Localized {} files, {} new locale entries",
    ),
    // Check related
    ("check.all_good", "All schema strings are localized"),
    ("check.pending_title", "Inline Schema Strings"),
    ("check.file_pending", "{}: {} new, {} reusable, {} unresolved"),
    (
        "check.total_pending",
        "Total pending fields: {}, unresolved references: {}",
    ),
    // Resolve related
    ("resolve.title", "Translation References"),
    ("resolve.file_summary", "{}: {} references, {} unresolved"),
    ("resolve.total", "Total references: {}, unresolved: {}"),
    ("resolve.missing", "missing from locale file"),
    ("resolve.unresolved", "{} references do not resolve"),
    ("resolve.all_resolved", "All references resolve"),
    // Status labels
    ("status.localized", "localized"),
    ("status.unchanged", "already localized"),
    ("status.dry_run", "would be localized"),
    ("status.no_schema", "no schema"),
    ("status.parse_failed", "schema parse failed"),
    ("status.rewrite_failed", "rewrite failed"),
    // Output format related
    ("output.result_title", "Localization Result"),
    ("output.total_files", "Total files: {}"),
    ("output.localized_files", "Localized files: {}"),
    ("output.skipped_files", "Skipped files: {}"),
    ("output.failed_files", "Failed files: {}"),
    (
        "output.fields_localized",
        "New strings: {} ({} locale entries added)",
    ),
    ("output.fields_reused", "Reused strings: {}"),
    ("output.locale_file", "Locale file: {}"),
    // Error messages
    ("error.read_file", "Failed to read file: {}"),
    ("error.walk_directory", "Failed to walk directory: {}"),
    ("error.invalid_pattern", "Invalid input pattern: {}"),
    ("error.schema_missing", "schema block disappeared before rewrite"),
    // Init related
    ("init.start", "Initializing schema-i18n configuration..."),
    ("init.config_exists", "Config file already exists: {}"),
    (
        "init.use_force_hint",
        "Use --force to overwrite existing config file",
    ),
    ("init.config_created", "Config file created: {}"),
    ("init.create_failed", "Failed to create config file: {}"),
    ("init.shared_root", "Shared strings are looked up under: {}"),
    ("init.on_parse_error", "Schema parse failures: {} (skip, warn, abort)"),
    (
        "init.next_steps",
        "Set theme.root if section files live outside <theme>/sections, and theme.locale_file for a non-default locale",
    ),
];
