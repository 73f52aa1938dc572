// ============================================================================
// LangSync - English Translation Table
// ============================================================================
//
// 文件: src/i18n/en_us.rs
// 职责: English translation content definition
// 边界:
//   - ✅ English translation strings definition
//   - ✅ Translation key-value pairs maintenance
//   - ❌ Should not contain translation logic
//   - ❌ Should not contain other language translations
//
// ============================================================================

/// English translation table
pub const TRANSLATIONS: &[(&str, &str)] = &[
    // CLI
    ("cli.config_loaded", "Using config: {}"),
    ("cli.sync_start", "Synchronizing language files..."),
    ("cli.stage_start", "Preparing manual translations..."),
    ("cli.translate_start", "Running automatic translations..."),
    ("cli.check_start", "Checking manual translations..."),
    ("cli.failed_languages", "Failed languages: {}"),
    // Sync runner
    ("sync.dry_run", "Dry run: no files will be written"),
    (
        "sync.duplicate_key",
        "Duplicate key '{}' in source, the first occurrence is used",
    ),
    ("sync.cache_created", "Created source snapshot: {}"),
    ("sync.cache_updated", "Updated source snapshot: {}"),
    ("stage.prepared", "Prepared manual translation for {}: {}"),
    ("translate.start", "Translating to {}..."),
    ("translate.done", "Translated to {}: {}"),
    ("translate.failed", "Translation to {} failed: {}"),
    // Summary
    ("summary.title", "Sync summary"),
    ("summary.no_languages", "No languages were processed"),
    (
        "summary.staged",
        "{}: {} kept, {} awaiting translation -> {}",
    ),
    ("summary.translated", "{}: {} texts translated -> {}"),
    ("summary.failed", "{}: failed ({})"),
    ("summary.dry_run", "Dry run, nothing was written"),
    // Check
    ("check.title", "Manual translation status"),
    ("check.no_manual_languages", "No manual languages configured"),
    (
        "check.language_line",
        "{} {}: {} current, {} changed, {} missing, {} awaiting translation {}",
    ),
    // Init
    ("init.start", "Initializing LangSync configuration..."),
    ("init.config_exists", "Config file already exists: {}"),
    ("init.use_force_hint", "Use --force to overwrite it"),
    ("init.config_created", "Config file created: {}"),
    (
        "init.next_steps",
        "Edit source, destination and language lists, then run `langsync sync`",
    ),
    ("init.create_failed", "Failed to create config file: {}"),
];
