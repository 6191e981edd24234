//! # Console Reporting Module / 控制台报告模块
//!
//! This module prints colorful, formatted run summaries and warnings to the
//! console with internationalization support.
//!
//! 此模块在控制台打印彩色格式化的运行摘要和警告，支持国际化。

use colored::*;

use crate::core::models::{Summary, TestSuite, format_duration_ms};
use crate::infra::t;

/// Prints a formatted summary of a run to the console.
/// Displays one line per suite followed by the global totals,
/// using color coding to highlight failures.
///
/// 在控制台打印格式化的运行摘要。
/// 每个套件显示一行，然后是全局统计，使用颜色编码突出显示失败。
///
/// # Arguments / 参数
/// * `summary` - Global totals of the run / 运行的全局统计
/// * `suites` - Suites to list, may be empty / 要列出的套件，可以为空
/// * `environment` - Deployment target label / 部署目标标签
/// * `locale` - The language locale to use for messages / 用于消息的语言区域设置
///
/// # Output Format / 输出格式
/// ```text
/// --- Test Summary (practice) ---
///   - Auth                                     |   1 passed |   1 failed |   0 skipped |      0.20s
///
///   Total: 2 | Passed: 1 | Failed: 1 | Skipped: 0 | Duration: 0.20s | Success rate: 50.0%
/// ```
pub fn print_summary(summary: &Summary, suites: &[TestSuite], environment: &str, locale: &str) {
    println!(
        "\n{}",
        t!("test_summary_banner", locale = locale, env = environment).bold()
    );

    for suite in suites {
        let failed = format!("{:>3} {}", suite.failed(), t!("report.failed", locale = locale));
        let failed = if suite.failed() > 0 { failed.red() } else { failed.normal() };
        println!(
            "  - {:<40} | {} | {} | {} | {:>10}",
            suite.name(),
            format!("{:>3} {}", suite.passed(), t!("report.passed", locale = locale)).green(),
            failed,
            format!("{:>3} {}", suite.skipped(), t!("report.skipped", locale = locale)).dimmed(),
            format_duration_ms(suite.duration())
        );
    }

    let totals = t!(
        "report.totals",
        locale = locale,
        total = summary.total_tests,
        passed = summary.total_passed,
        failed = summary.total_failed,
        skipped = summary.total_skipped,
        duration = summary.duration_display(),
        rate = summary.success_rate_display()
    );
    if summary.all_passed() {
        println!("\n  {}", totals.green());
    } else {
        println!("\n  {}", totals.red());
    }
}

/// Prints a non-fatal warning.
pub fn print_warning(message: &str) {
    println!("{} {}", "warning:".yellow().bold(), message);
}
