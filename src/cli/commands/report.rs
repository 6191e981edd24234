//! # Report Command Module / 报告命令模块
//!
//! This module implements the `report` command, which renders the
//! standalone HTML report from a persisted JSON results file.
//!
//! 此模块实现了 `report` 命令，
//! 根据持久化的 JSON 结果文件渲染独立的 HTML 报告。

use anyhow::{Context, Result};
use chrono::Local;
use colored::*;
use std::path::PathBuf;

use crate::{
    core::{config::ReportConfig, models::Summary},
    infra::{browser::open_in_browser, fs::write_report, t},
    reporting::{
        console::{print_summary, print_warning},
        html::ReportContext,
        standalone::{load_results, render_standalone},
    },
};

/// Arguments of the `report` command. Every `Option` left unset falls back
/// to the configuration file.
#[derive(Debug, Clone, Default)]
pub struct ReportArgs {
    pub config: Option<PathBuf>,
    pub results: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub environment: Option<String>,
    pub title: Option<String>,
    pub lang: Option<String>,
    pub timestamped: bool,
    pub open: bool,
}

/// Executes the report command with the provided arguments.
///
/// # Returns
/// The path of the written report
///
/// # Errors
/// Fails on an unreadable config file or when the report cannot be written.
/// A missing results file only produces a warning.
pub async fn execute(args: ReportArgs) -> Result<PathBuf> {
    let mut config = ReportConfig::resolve(args.config.as_deref())?;
    let locale = crate::resolve_locale(args.lang.as_deref(), config.language.as_deref());
    let locale = locale.as_str();
    rust_i18n::set_locale(locale);

    let environment = args
        .environment
        .unwrap_or_else(|| config.environment.clone());
    let title = args.title.unwrap_or_else(|| config.title.clone());

    let results_path = match args.results {
        Some(path) => path,
        None => config.results_path()?,
    };
    config.timestamped |= args.timestamped;
    let output_path = match args.output {
        Some(path) => path,
        None => config.report_path(Local::now())?,
    };

    println!(
        "{}",
        t!("loading_results", locale = locale, path = results_path.display())
    );
    let results = load_results(&results_path, locale);
    let summary = Summary::from_stats(&results.stats);
    print_summary(&summary, &results.suites, &environment, locale);

    let ctx = ReportContext::new(title, environment, locale)
        .with_source(results_path.display().to_string());
    let html = render_standalone(&results, &ctx);

    write_report(&output_path, &html).with_context(|| {
        t!("report_write_failed", locale = locale, path = output_path.display()).to_string()
    })?;
    println!(
        "\n{} {}",
        "✔".green(),
        t!("report_written", locale = locale, path = output_path.display()).bold()
    );

    if args.open || config.open_browser {
        if let Err(e) = open_in_browser(&output_path).await {
            print_warning(&t!("browser_open_failed", locale = locale, error = format!("{:#}", e)));
        }
    }

    Ok(output_path)
}
