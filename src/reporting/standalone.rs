//! # Standalone Report Module / 独立报告模块
//!
//! Produces the enhanced report from a persisted JSON results file instead
//! of in-memory state. A missing or unreadable file never blocks report
//! generation: it degrades to all-zero statistics and a console warning.
//!
//! 从持久化的 JSON 结果文件而不是内存状态生成增强报告。
//! 缺失或无法读取的文件不会阻止报告生成：它会降级为全零统计并在控制台给出警告。

use std::path::Path;

use crate::core::models::{ResultsFile, Summary};
use crate::infra::fs::read_results;
use crate::infra::t;
use crate::reporting::console::print_warning;
use crate::reporting::html::{ReportContext, render_document};

/// Loads the results file at `path`, falling back to an empty file.
///
/// # Arguments
/// * `path` - Location of the JSON results file
/// * `locale` - The language locale used for the warning message
///
/// # Returns
/// The parsed file, or `ResultsFile::default()` if it is missing or invalid
pub fn load_results(path: &Path, locale: &str) -> ResultsFile {
    if !path.exists() {
        print_warning(&t!("results_missing", locale = locale, path = path.display()));
        return ResultsFile::default();
    }

    match read_results(path) {
        Ok(results) => results,
        Err(e) => {
            print_warning(&t!(
                "results_unreadable",
                locale = locale,
                path = path.display(),
                error = format!("{:#}", e)
            ));
            ResultsFile::default()
        }
    }
}

/// Renders a results file into an HTML document.
///
/// Statistics come from `results.stats`; suite blocks are rendered for any
/// suites the file carries.
pub fn render_standalone(results: &ResultsFile, ctx: &ReportContext) -> String {
    let summary = Summary::from_stats(&results.stats);
    render_document(&summary, &results.suites, ctx).into_string()
}
