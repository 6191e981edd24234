//! # Config Initialization Module / 配置初始化模块
//!
//! This module provides functionality for creating a `ReportConfig.toml`
//! through an interactive command-line wizard, or with defaults when run
//! non-interactively.
//!
//! 此模块通过交互式命令行向导创建 `ReportConfig.toml`，
//! 或在非交互模式下使用默认值创建。
//!
//! ## Features / 功能特性
//!
//! - **Interactive Wizard**: Step-by-step guidance for configuration setup
//! - **Environment Selection**: Pick one of the known deployment targets
//! - **Overwrite Protection**: Confirmation prompts before overwriting existing configurations
//!
//! - **交互式向导**: 配置设置的逐步指导
//! - **环境选择**: 从已知的部署目标中选择
//! - **覆盖保护**: 覆盖现有配置前的确认提示

use anyhow::{Context, Result};
use colored::*;
use dialoguer::{Confirm, Input, Select, theme::ColorfulTheme};
use std::fs;
use std::path::Path;

use crate::core::config::{DEFAULT_CONFIG_FILE, KNOWN_ENVIRONMENTS, ReportConfig};
use crate::infra::t;

/// Runs the wizard to generate a `ReportConfig.toml` file in the working directory.
///
/// # Arguments
/// * `language` - Locale for prompts and messages
/// * `non_interactive` - Write the defaults without prompting
/// * `force` - Overwrite an existing file without asking
///
/// 运行向导，在工作目录中生成 `ReportConfig.toml` 文件。
pub fn run_init_wizard(language: &str, non_interactive: bool, force: bool) -> Result<()> {
    let config_path = Path::new(DEFAULT_CONFIG_FILE);
    let theme = ColorfulTheme::default();

    if !non_interactive {
        println!("\n{}", t!("init_wizard_welcome", locale = language).cyan().bold());
        println!("{}", t!("init_wizard_description", locale = language));
    }

    if config_path.exists() && !force {
        if non_interactive {
            anyhow::bail!(t!("init_exists", locale = language, path = config_path.display()).to_string());
        }
        let confirmation = Confirm::with_theme(&theme)
            .with_prompt(t!("init_overwrite_prompt", locale = language, path = config_path.display()))
            .default(false)
            .interact()
            .context(t!("init_user_confirmation_failed", locale = language).to_string())?;
        if !confirmation {
            println!("{}", t!("init_aborted", locale = language));
            return Ok(());
        }
    }

    let mut config = ReportConfig {
        language: Some(language.to_string()),
        ..ReportConfig::default()
    };

    if non_interactive {
        return write_config(config_path, &config, language);
    }

    let environment = Select::with_theme(&theme)
        .with_prompt(t!("init_environment_prompt", locale = language))
        .items(&KNOWN_ENVIRONMENTS)
        .default(0)
        .interact()
        .context(t!("init_user_confirmation_failed", locale = language).to_string())?;
    config.environment = KNOWN_ENVIRONMENTS[environment].to_string();

    config.title = Input::<String>::with_theme(&theme)
        .with_prompt(t!("init_title_prompt", locale = language))
        .default(config.title.clone())
        .interact_text()?;

    config.timestamped = Confirm::with_theme(&theme)
        .with_prompt(t!("init_timestamped_prompt", locale = language))
        .default(false)
        .interact()
        .context(t!("init_user_confirmation_failed", locale = language).to_string())?;

    config.open_browser = Confirm::with_theme(&theme)
        .with_prompt(t!("init_open_browser_prompt", locale = language))
        .default(false)
        .interact()
        .context(t!("init_user_confirmation_failed", locale = language).to_string())?;

    write_config(config_path, &config, language)
}

fn write_config(path: &Path, config: &ReportConfig, language: &str) -> Result<()> {
    let toml_string = config
        .to_toml_string()
        .context(t!("init_serialize_failed", locale = language).to_string())?;

    fs::write(path, toml_string)
        .with_context(|| t!("init_write_failed", locale = language, path = path.display()).to_string())?;

    println!(
        "\n{} {}",
        "✔".green(),
        t!("init_success_created", locale = language, path = path.display()).bold()
    );
    println!("{}", t!("init_usage_hint", locale = language));

    Ok(())
}
