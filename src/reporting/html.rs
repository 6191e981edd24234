//! # HTML Reporting Module / HTML 报告模块
//!
//! This module renders collected suites into a self-contained HTML document:
//! a header block, a grid of six statistic cards, and one collapsible block
//! per suite listing every result with its status badge and duration.
//! Failed results that carry an error get an inline error block directly
//! beneath their row.
//!
//! 此模块将收集到的套件渲染为独立的 HTML 文档：
//! 一个标题块、六张统计卡片组成的网格，以及每个套件一个可折叠的块，
//! 列出每个结果的状态徽章和持续时间。

use anyhow::Result;
use chrono::{DateTime, Utc};
use maud::{DOCTYPE, Markup, PreEscaped, html};
use std::path::Path;

use crate::core::models::{Summary, TestResult, TestStatus, TestSuite, format_duration_ms};
use crate::infra::fs::write_report;
use crate::infra::t;

/// Embedded CSS styles for HTML reports / HTML 报告的嵌入式 CSS 样式
const HTML_STYLE: &str = include_str!("assets/report.css");

/// Embedded JavaScript for HTML report interactivity / HTML 报告交互性的嵌入式 JavaScript
const HTML_SCRIPT: &str = include_str!("assets/report.js");

/// Explicit inputs of a render that do not come from the results themselves.
///
/// 渲染时不来自结果本身的显式输入。
#[derive(Debug, Clone, PartialEq)]
pub struct ReportContext {
    /// Report title shown in the page title and header / 报告标题
    pub title: String,
    /// Deployment target label, display only / 部署目标标签，仅用于显示
    pub environment: String,
    /// Locale for report labels / 报告标签的语言环境
    pub locale: String,
    /// Generation time printed in the header / 标题中显示的生成时间
    pub generated_at: DateTime<Utc>,
    /// Where the statistics were read from, if not from memory / 统计数据的来源文件（非内存时）
    pub source: Option<String>,
}

impl ReportContext {
    pub fn new(
        title: impl Into<String>,
        environment: impl Into<String>,
        locale: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            environment: environment.into(),
            locale: locale.into(),
            generated_at: Utc::now(),
            source: None,
        }
    }

    /// Pins the generation time, which makes the output fully deterministic.
    pub fn with_generated_at(mut self, generated_at: DateTime<Utc>) -> Self {
        self.generated_at = generated_at;
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}

/// Localized labels resolved once per render.
struct Labels {
    environment: String,
    generated_at: String,
    source: String,
    all_passed: String,
    some_failed: String,
    passed: String,
    failed: String,
    skipped: String,
    total: String,
    duration: String,
    success_rate: String,
    no_suites: String,
    test_name: String,
    status: String,
}

impl Labels {
    fn new(locale: &str) -> Self {
        Self {
            environment: t!("html_report.environment", locale = locale).to_string(),
            generated_at: t!("html_report.generated_at", locale = locale).to_string(),
            source: t!("html_report.source", locale = locale).to_string(),
            all_passed: t!("html_report.banner.all_passed", locale = locale).to_string(),
            some_failed: t!("html_report.banner.some_failed", locale = locale).to_string(),
            passed: t!("html_report.stats.passed", locale = locale).to_string(),
            failed: t!("html_report.stats.failed", locale = locale).to_string(),
            skipped: t!("html_report.stats.skipped", locale = locale).to_string(),
            total: t!("html_report.stats.total", locale = locale).to_string(),
            duration: t!("html_report.stats.duration", locale = locale).to_string(),
            success_rate: t!("html_report.stats.success_rate", locale = locale).to_string(),
            no_suites: t!("html_report.no_suites", locale = locale).to_string(),
            test_name: t!("html_report.table.header.name", locale = locale).to_string(),
            status: t!("html_report.table.header.status", locale = locale).to_string(),
        }
    }

    fn status(&self, status: TestStatus) -> &str {
        match status {
            TestStatus::Passed => &self.passed,
            TestStatus::Failed => &self.failed,
            TestStatus::Skipped => &self.skipped,
        }
    }
}

/// Renders the collected suites into an HTML document.
///
/// Totals are reduced from the per-suite counters. The function is pure:
/// given identical suites and an identical `ctx` it returns identical output.
///
/// 将收集到的套件渲染为 HTML 文档。
/// 统计数据由每个套件的计数器汇总而来。此函数是纯函数。
///
/// # Arguments / 参数
/// * `suites` - Suites in the order they should appear / 按显示顺序排列的套件
/// * `ctx` - Title, environment label, locale and generation time / 标题、环境标签、语言环境和生成时间
pub fn render_report(suites: &[TestSuite], ctx: &ReportContext) -> String {
    let summary = Summary::from_suites(suites);
    render_document(&summary, suites, ctx).into_string()
}

/// Renders the suites and writes the document to `output_path`.
///
/// # Errors / 错误
/// Returns an error if the file or its parent directories cannot be written.
/// 如果无法写入文件或其父目录，则返回错误。
pub fn generate_html_report(
    suites: &[TestSuite],
    output_path: &Path,
    ctx: &ReportContext,
) -> Result<()> {
    write_report(output_path, &render_report(suites, ctx))
}

/// Builds the full document for an already computed summary.
pub(crate) fn render_document(summary: &Summary, suites: &[TestSuite], ctx: &ReportContext) -> Markup {
    let labels = Labels::new(&ctx.locale);
    let banner = if summary.all_passed() {
        (&labels.all_passed, "banner banner-passed")
    } else {
        (&labels.some_failed, "banner banner-failed")
    };

    html! {
        (DOCTYPE)
        html lang=(ctx.locale) {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (ctx.title) }
                style { (PreEscaped(HTML_STYLE)) }
            }
            body {
                header.report-header {
                    h1 { (ctx.title) }
                    p.meta {
                        span.env-label { (labels.environment) ": " strong { (ctx.environment) } }
                        span.generated { (labels.generated_at) ": " (ctx.generated_at.format("%Y-%m-%d %H:%M:%S UTC").to_string()) }
                    }
                    @if let Some(source) = &ctx.source {
                        p.meta.source { (labels.source) ": " code { (source) } }
                    }
                    div class=(banner.1) { (banner.0) }
                }
                section.stats-grid {
                    (stat_card("passed", &summary.total_passed.to_string(), &labels.passed))
                    (stat_card("failed", &summary.total_failed.to_string(), &labels.failed))
                    (stat_card("skipped", &summary.total_skipped.to_string(), &labels.skipped))
                    (stat_card("total", &summary.total_tests.to_string(), &labels.total))
                    (stat_card("duration", &summary.duration_display(), &labels.duration))
                    (stat_card("success-rate", &format!("{}%", summary.success_rate_display()), &labels.success_rate))
                }
                main.suites {
                    @if suites.is_empty() {
                        p.empty { (labels.no_suites) }
                    }
                    @for (index, suite) in suites.iter().enumerate() {
                        (suite_block(index, suite, &labels))
                    }
                }
                script { (PreEscaped(HTML_SCRIPT)) }
            }
        }
    }
}

fn stat_card(kind: &str, value: &str, label: &str) -> Markup {
    html! {
        div class=(format!("stat-card {}", kind)) data-stat=(kind) {
            span.count { (value) }
            span.label { (label) }
        }
    }
}

fn suite_block(index: usize, suite: &TestSuite, labels: &Labels) -> Markup {
    let suite_id = format!("suite-{}", index);
    let state_class = if suite.all_passed() { "suite suite-passed" } else { "suite suite-failed" };

    html! {
        section class=(state_class) id=(suite_id) {
            div.suite-header onclick=(format!("toggleSuite('{}')", suite_id)) {
                h2 { (suite.name()) }
                span.suite-counts {
                    span.passed-text { (suite.passed()) " " (labels.passed) }
                    " / "
                    span.failed-text { (suite.failed()) " " (labels.failed) }
                    " / "
                    span.skipped-text { (suite.skipped()) " " (labels.skipped) }
                    " · "
                    span.duration-text { (format_duration_ms(suite.duration())) }
                }
            }
            table.suite-body {
                thead {
                    tr {
                        th { (labels.test_name) }
                        th.status-col { (labels.status) }
                        th.duration-cell { (labels.duration) }
                    }
                }
                tbody {
                    @for result in suite.results() {
                        (result_row(result, labels))
                    }
                }
            }
        }
    }
}

fn result_row(result: &TestResult, labels: &Labels) -> Markup {
    html! {
        tr.test-row {
            td.test-name { (result.name) }
            td.status-col {
                span class=(format!("badge {}", result.status.css_class())) { (labels.status(result.status)) }
            }
            td.duration-cell { (result.duration_display()) }
        }
        @if result.is_failure() {
            @if let Some(error) = &result.error {
                tr.error-row {
                    td colspan="3" {
                        pre.error-block { (error) }
                    }
                }
            }
        }
    }
}
