//! # File System Operations Module / 文件系统操作模块
//!
//! This module provides utilities for file system operations, such as
//! reading the persisted results file, writing reports into directories
//! that may not exist yet, and resolving configured paths.
//!
//! 此模块提供文件系统操作的实用功能，
//! 如读取持久化的结果文件、将报告写入可能尚不存在的目录以及解析配置的路径。

use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::models::ResultsFile;

/// Expands `~` and environment variables in a configured path.
///
/// # Arguments
/// * `raw` - The path as written in the config or on the command line
///
/// # Returns
/// The expanded path, or an error naming the unresolvable variable
pub fn expand_path(raw: &str) -> Result<PathBuf> {
    let expanded = shellexpand::full(raw)
        .with_context(|| format!("Failed to expand path: {}", raw))?;
    Ok(PathBuf::from(expanded.as_ref()))
}

/// Builds `<dir>/test-report-YYYYMMDD-HHMMSS.html` for the given moment.
pub fn timestamped_report_path(dir: &Path, now: DateTime<Local>) -> PathBuf {
    dir.join(format!("test-report-{}.html", now.format("%Y%m%d-%H%M%S")))
}

/// Reads and parses a JSON results file.
///
/// # Errors
/// Fails if the file cannot be read or is not a valid results document.
pub fn read_results(path: &Path) -> Result<ResultsFile> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read results file: {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse results file: {}", path.display()))
}

/// Persists a results file as pretty-printed JSON, creating parent directories.
pub fn write_results(path: &Path, results: &ResultsFile) -> Result<()> {
    let json = serde_json::to_string_pretty(results).context("Failed to serialize results")?;
    write_creating_parents(path, json.as_bytes())
}

/// Writes a rendered report to `path`, creating parent directories if missing.
///
/// # Errors
/// Any file system failure is returned to the caller; nothing is retried.
pub fn write_report(path: &Path, html: &str) -> Result<()> {
    write_creating_parents(path, html.as_bytes())
}

fn write_creating_parents(path: &Path, contents: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    fs::write(path, contents).with_context(|| format!("Failed to write file: {}", path.display()))
}

/// Gets the absolute path from a potentially relative path.
///
/// Falls back to joining with the current directory when the path does not
/// exist yet, so it can be used for freshly written files too.
pub fn absolute_path(path: &Path) -> Result<PathBuf> {
    if let Ok(canonical) = fs::canonicalize(path) {
        return Ok(canonical);
    }
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    let cwd = std::env::current_dir().context("Failed to resolve current directory")?;
    Ok(cwd.join(path))
}
