//! # Configuration Module / 配置模块
//!
//! Report settings loaded from a `ReportConfig.toml` file. Every key is
//! optional; command-line flags override whatever the file provides.
//!
//! 从 `ReportConfig.toml` 文件加载的报告设置。
//! 每个键都是可选的；命令行参数会覆盖文件中的值。

use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::infra::fs::{expand_path, timestamped_report_path};

/// Name of the configuration file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "ReportConfig.toml";

/// The environment label used when neither the config nor the caller names one.
pub const DEFAULT_ENVIRONMENT: &str = "practice";

/// Known deployment targets offered by the init wizard.
pub const KNOWN_ENVIRONMENTS: [&str; 3] = ["practice", "staging", "production"];

/// Represents the report configuration, loaded from a TOML file.
/// 代表从 TOML 文件加载的报告配置。
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ReportConfig {
    /// The language for console messages and report labels (e.g., "en", "zh-CN").
    /// When unset, the system locale is used.
    ///
    /// 控制台消息和报告标签的语言（例如 "en", "zh-CN"）。
    /// 未设置时使用系统语言环境。
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// The deployment target shown in the report header. Display only.
    /// 报告标题中显示的部署目标。仅用于显示。
    #[serde(default = "default_environment")]
    pub environment: String,

    /// Title of the generated report / 生成报告的标题
    #[serde(default = "default_title")]
    pub title: String,

    /// Path of the JSON results file read by the `report` command.
    /// `report` 命令读取的 JSON 结果文件路径。
    #[serde(default = "default_results")]
    pub results: String,

    /// Output path used when `timestamped` is off.
    #[serde(default = "default_output")]
    pub output: String,

    /// Directory for timestamped reports.
    #[serde(default = "default_reports_dir")]
    pub reports_dir: String,

    /// If `true`, each report is written to a new timestamped file under `reports_dir`.
    /// 如果为 `true`，每份报告都会写入 `reports_dir` 下一个新的带时间戳的文件。
    #[serde(default)]
    pub timestamped: bool,

    /// If `true`, the written report is opened in the local browser.
    #[serde(default)]
    pub open_browser: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            language: None,
            environment: default_environment(),
            title: default_title(),
            results: default_results(),
            output: default_output(),
            reports_dir: default_reports_dir(),
            timestamped: false,
            open_browser: false,
        }
    }
}

impl ReportConfig {
    /// Parses a configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse report configuration")
    }

    /// Reads and parses the configuration file at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))
    }

    /// Loads the configuration for a command invocation.
    ///
    /// An explicitly named file must exist. Without one, `ReportConfig.toml`
    /// in the working directory is used if present, otherwise the defaults.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load(path),
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                if default_path.is_file() {
                    Self::load(default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize report configuration")
    }

    /// Expanded path of the results file.
    pub fn results_path(&self) -> Result<PathBuf> {
        expand_path(&self.results)
    }

    /// Resolves where the next report is written, taking `timestamped` into account.
    /// 解析下一份报告的写入位置，考虑 `timestamped` 设置。
    pub fn report_path(&self, now: DateTime<Local>) -> Result<PathBuf> {
        if self.timestamped {
            Ok(timestamped_report_path(&expand_path(&self.reports_dir)?, now))
        } else {
            expand_path(&self.output)
        }
    }
}

fn default_environment() -> String {
    DEFAULT_ENVIRONMENT.to_string()
}

fn default_title() -> String {
    "API Test Report".to_string()
}

fn default_results() -> String {
    "test-results/results.json".to_string()
}

fn default_output() -> String {
    "custom-report.html".to_string()
}

fn default_reports_dir() -> String {
    "reports".to_string()
}
