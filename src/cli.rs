// src/cli.rs
use anyhow::Result;
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::{env, path::PathBuf};

use crate::infra::t;

pub mod commands {
    pub mod init;
    pub mod report;
}

use commands::report::ReportArgs;

/// Environment variable naming the deployment target of the run.
pub const ENVIRONMENT_VAR: &str = "TEST_ENV";

/// Pre-parses the command line arguments to find the language setting.
/// This allows i18n to be initialized before the full CLI is built.
/// It looks for a `--lang <VALUE>` argument.
fn pre_parse_language() -> Option<String> {
    let args: Vec<String> = env::args().collect();
    let pos = args.iter().position(|arg| arg == "--lang")?;
    args.get(pos + 1).cloned()
}

pub fn build_cli(locale: &str) -> Command {
    Command::new("apitest-report")
        .author(env!("CARGO_PKG_AUTHORS"))
        .version(env!("CARGO_PKG_VERSION"))
        .about(t!("cli_about", locale = locale).to_string())
        .arg(
            Arg::new("lang")
                .long("lang")
                .help(t!("cli_lang", locale = locale).to_string())
                .value_name("LANGUAGE")
                .global(true)
                .action(ArgAction::Set),
        )
        .subcommand(
            Command::new("report")
                .about(t!("cmd_report_about", locale = locale).to_string())
                .arg(
                    Arg::new("config")
                        .short('c')
                        .long("config")
                        .help(t!("arg_config", locale = locale).to_string())
                        .value_name("CONFIG")
                        .value_parser(clap::value_parser!(PathBuf))
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("results")
                        .short('r')
                        .long("results")
                        .help(t!("arg_results", locale = locale).to_string())
                        .value_name("RESULTS")
                        .value_parser(clap::value_parser!(PathBuf))
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("output")
                        .short('o')
                        .long("output")
                        .help(t!("arg_output", locale = locale).to_string())
                        .value_name("OUTPUT")
                        .value_parser(clap::value_parser!(PathBuf))
                        .conflicts_with("timestamped")
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("environment")
                        .short('e')
                        .long("environment")
                        .env(ENVIRONMENT_VAR)
                        .help(t!("arg_environment", locale = locale).to_string())
                        .value_name("ENVIRONMENT")
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("title")
                        .long("title")
                        .help(t!("arg_title", locale = locale).to_string())
                        .value_name("TITLE")
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("timestamped")
                        .long("timestamped")
                        .help(t!("arg_timestamped", locale = locale).to_string())
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("open")
                        .long("open")
                        .help(t!("arg_open", locale = locale).to_string())
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("init")
                .about(t!("cmd_init_about", locale = locale).to_string())
                .arg(
                    Arg::new("non-interactive")
                        .long("non-interactive")
                        .help(t!("arg_non_interactive", locale = locale).to_string())
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("force")
                        .long("force")
                        .help(t!("arg_force", locale = locale).to_string())
                        .action(ArgAction::SetTrue),
                ),
        )
}

fn report_args(matches: &ArgMatches, lang: Option<String>) -> ReportArgs {
    ReportArgs {
        config: matches.get_one::<PathBuf>("config").cloned(),
        results: matches.get_one::<PathBuf>("results").cloned(),
        output: matches.get_one::<PathBuf>("output").cloned(),
        environment: matches.get_one::<String>("environment").cloned(),
        title: matches.get_one::<String>("title").cloned(),
        lang,
        timestamped: matches.get_flag("timestamped"),
        open: matches.get_flag("open"),
    }
}

pub async fn run() -> Result<()> {
    // Pre-parse language and initialize i18n first.
    let explicit_language = pre_parse_language();
    let language = crate::resolve_locale(explicit_language.as_deref(), None);
    rust_i18n::set_locale(&language);

    let matches = build_cli(&language).get_matches();
    let lang = matches.get_one::<String>("lang").cloned();

    match matches.subcommand() {
        Some(("report", report_matches)) => {
            commands::report::execute(report_args(report_matches, lang)).await?;
        }
        Some(("init", init_matches)) => {
            let non_interactive = init_matches.get_flag("non-interactive");
            let force = init_matches.get_flag("force");

            // Show language detection message if it was auto-detected
            if explicit_language.is_none() {
                println!(
                    "🌐 {}",
                    t!("system_language_detected", locale = &language, lang = &language)
                );
            }
            commands::init::run_init_wizard(&language, non_interactive, force)?;
        }
        _ => {
            // This case handles when no subcommand is given.
            build_cli(&language).print_help()?;
        }
    }
    Ok(())
}
