//! drivemap CLI.

use clap::{ColorChoice, Parser};
use drivemap_cli::commands::{run_match, run_patterns};
use drivemap_cli::logging::{LogConfig, LogFormat, init_logging};
use drivemap_cli::summary::summary_line;
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;

mod cli;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match &cli.command {
        Command::Match(args) => {
            let options = args.to_options();
            let mut stdout = io::stdout().lock();
            exit_code(run_match(&options, &mut stdout), |summary| {
                if args.summary {
                    eprintln!("{}", summary_line(&summary));
                }
            })
        }
        Command::Patterns(args) => {
            let mut stdout = io::stdout().lock();
            exit_code(run_patterns(&args.to_options(), &mut stdout), |()| {})
        }
    };
    std::process::exit(exit_code);
}

/// Exit status for a command result: 0 on success, 1 after printing the error chain.
fn exit_code<T>(result: anyhow::Result<T>, on_success: impl FnOnce(T)) -> i32 {
    match result {
        Ok(value) => {
            on_success(value);
            0
        }
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    }
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
