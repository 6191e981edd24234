//! # API Test Report Library / API 测试报告库
//!
//! This library collects the outcomes of an end-to-end API test run, grouped
//! by suite, and renders them into self-contained HTML reports, either from
//! in-memory state or from a persisted JSON results file.
//!
//! 此库收集端到端 API 测试运行的结果（按套件分组），
//! 并将其渲染为独立的 HTML 报告，数据来源可以是内存状态，也可以是持久化的 JSON 结果文件。
//!
//! ## Modules / 模块
//!
//! - `core` - Data models, the result collector and the report configuration
//! - `infra` - Infrastructure services like file system operations and opening reports
//! - `reporting` - HTML rendering and console summaries
//! - `cli` - Command-line interface and commands
//!
//! - `core` - 数据模型、结果收集器和报告配置
//! - `infra` - 基础设施服务，如文件系统操作和打开报告
//! - `reporting` - HTML 渲染和控制台摘要
//! - `cli` - 命令行接口和命令

pub mod cli;
pub mod core;
pub mod infra;
pub mod reporting;

// Re-export commonly used items
pub use crate::core::collector;
pub use crate::core::config;
pub use crate::core::models;

/// Matches a requested locale against the bundled translations.
///
/// It attempts to match the full locale (e.g., "zh-CN"), then just the
/// language code (e.g., "en" from "en-US"). Returns `None` if neither is
/// available.
pub fn match_locale(requested: &str) -> Option<String> {
    let available_locales = rust_i18n::available_locales!();

    if available_locales.contains(&requested) {
        return Some(requested.to_string());
    }
    requested
        .split(['-', '_'])
        .next()
        .filter(|lang_code| available_locales.contains(lang_code))
        .map(str::to_string)
}

/// Picks the locale for a command invocation.
///
/// The explicit `--lang` value wins, then the config file's `language`,
/// then the system locale, and finally the default language ("en").
pub fn resolve_locale(explicit: Option<&str>, configured: Option<&str>) -> String {
    explicit
        .and_then(match_locale)
        .or_else(|| configured.and_then(match_locale))
        .or_else(|| sys_locale::get_locale().as_deref().and_then(match_locale))
        .unwrap_or_else(|| "en".to_string())
}

/// Initializes the application's internationalization (i18n) based on the system locale.
pub fn init() {
    rust_i18n::set_locale(&resolve_locale(None, None));
}

// Initialize i18n
rust_i18n::i18n!("locales", fallback = "en");
