//! # Browser Module / 浏览器模块
//!
//! Opens a written report with the platform's default handler.
//!
//! 使用平台默认程序打开已写入的报告。

use anyhow::{Context, Result};
use std::path::Path;
use tokio::process::Command;

use crate::infra::fs::absolute_path;

/// Gets the program and arguments that open `target` on the given OS.
///
/// # Arguments
/// * `os` - An `std::env::consts::OS` value such as "macos", "windows" or "linux"
/// * `target` - The file or URL to open
pub fn open_command(os: &str, target: &str) -> (&'static str, Vec<String>) {
    match os {
        "macos" => ("open", vec![target.to_string()]),
        // `start` treats its first quoted argument as the window title.
        "windows" => (
            "cmd",
            vec![
                "/C".to_string(),
                "start".to_string(),
                String::new(),
                target.to_string(),
            ],
        ),
        _ => ("xdg-open", vec![target.to_string()]),
    }
}

/// Opens `path` in the local browser.
///
/// # Errors
/// Fails if the open command cannot be spawned or exits unsuccessfully.
pub async fn open_in_browser(path: &Path) -> Result<()> {
    let target = absolute_path(path)?;
    let target = target.to_string_lossy();
    let (program, args) = open_command(std::env::consts::OS, &target);

    let status = Command::new(program)
        .args(&args)
        .status()
        .await
        .with_context(|| format!("Failed to execute '{}'", program))?;

    if !status.success() {
        anyhow::bail!("'{}' exited with {}", program, status);
    }
    Ok(())
}
