//! CLI argument definitions for drivemap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use drivemap_cli::types::{CandidateSource, MatchOptions, PatternsOptions};
use drivemap_core::{DEFAULT_FIELD_WIDTH, DEFAULT_MAPPING_FILE, InvalidPatternPolicy};

#[derive(Parser)]
#[command(
    name = "drivemap",
    version,
    about = "Check which node a user identifier maps to",
    long_about = "Check user identifiers against a regex-keyed node mapping.\n\n\
                  The mapping file is a JSON object of pattern to node label. \
                  Patterns are tried in file order and the first match wins."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the node label of every candidate that matches a pattern.
    Match(MatchArgs),

    /// Validate the mapping file and list its patterns.
    Patterns(MappingArgs),
}

#[derive(Args)]
pub struct MappingArgs {
    /// JSON mapping file (pattern -> label).
    #[arg(long = "mapping", value_name = "PATH", default_value = DEFAULT_MAPPING_FILE)]
    pub mapping: PathBuf,

    /// What to do with a pattern that does not compile.
    #[arg(long = "on-invalid-pattern", value_enum, default_value = "fail")]
    pub on_invalid_pattern: InvalidPatternArg,
}

#[derive(Args)]
pub struct MatchArgs {
    /// Candidates to check (default: the built-in list).
    #[arg(value_name = "CANDIDATE", conflicts_with = "candidates_file")]
    pub candidates: Vec<String>,

    /// Read candidates from a file, one per line.
    #[arg(long = "candidates-file", value_name = "PATH")]
    pub candidates_file: Option<PathBuf>,

    #[command(flatten)]
    pub mapping: MappingArgs,

    /// Width of the right-justified candidate column.
    #[arg(long = "width", value_name = "N", default_value_t = DEFAULT_FIELD_WIDTH)]
    pub width: usize,

    /// Print a matched/total count to stderr after the match lines.
    #[arg(long = "summary")]
    pub summary: bool,
}

/// CLI choices for invalid pattern handling.
#[derive(Clone, Copy, ValueEnum)]
pub enum InvalidPatternArg {
    Fail,
    Skip,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

impl From<InvalidPatternArg> for InvalidPatternPolicy {
    fn from(arg: InvalidPatternArg) -> Self {
        match arg {
            InvalidPatternArg::Fail => Self::Fail,
            InvalidPatternArg::Skip => Self::Skip,
        }
    }
}

impl MatchArgs {
    pub fn to_options(&self) -> MatchOptions {
        let candidates = match (&self.candidates_file, self.candidates.is_empty()) {
            (_, false) => CandidateSource::Inline(self.candidates.clone()),
            (Some(path), true) => CandidateSource::File(path.clone()),
            (None, true) => CandidateSource::Builtin,
        };
        MatchOptions {
            mapping_path: self.mapping.mapping.clone(),
            candidates,
            width: self.width,
            policy: self.mapping.on_invalid_pattern.into(),
        }
    }
}

impl MappingArgs {
    pub fn to_options(&self) -> PatternsOptions {
        PatternsOptions {
            mapping_path: self.mapping.clone(),
            policy: self.on_invalid_pattern.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("drivemap").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn match_defaults_to_builtin_candidates() {
        let cli = parse(&["match"]);
        let Command::Match(args) = cli.command else {
            panic!("expected match command");
        };
        let options = args.to_options();
        assert_eq!(options.candidates, CandidateSource::Builtin);
        assert_eq!(options.mapping_path, PathBuf::from("mappingfile.json"));
        assert_eq!(options.width, 35);
        assert_eq!(options.policy, InvalidPatternPolicy::Fail);
    }

    #[test]
    fn positional_candidates_take_priority() {
        let cli = parse(&[
            "match",
            "--mapping",
            "nodes.json",
            "--on-invalid-pattern",
            "skip",
            "name@sunet.se",
        ]);
        let Command::Match(args) = cli.command else {
            panic!("expected match command");
        };
        let options = args.to_options();
        assert_eq!(
            options.candidates,
            CandidateSource::Inline(vec!["name@sunet.se".to_string()])
        );
        assert_eq!(options.policy, InvalidPatternPolicy::Skip);
        assert_eq!(options.mapping_path, PathBuf::from("nodes.json"));
    }

    #[test]
    fn candidates_and_file_conflict() {
        let result = Cli::try_parse_from([
            "drivemap",
            "match",
            "--candidates-file",
            "users.txt",
            "name@sunet.se",
        ]);
        assert!(result.is_err());
    }
}
