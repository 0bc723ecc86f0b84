//! CLI argument definitions for the study plan extractor.

use std::io::{self, IsTerminal};
use std::path::PathBuf;

use clap::{ColorChoice, Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use tracing::level_filters::LevelFilter;

use crate::logging::{LogConfig, LogFormat};

/// Direction description used when none is given on the command line.
pub const DEFAULT_STUDY_DIRECTION: &str = "Направление 09.03.02 \"Информационные системы и технологии\" \
     Направленность (профиль): \"Распределенные информационные системы\" \
     Кафедра: Компьютерные технологии в проектировании и производстве";

#[derive(Parser)]
#[command(
    name = "curriculum",
    version,
    about = "Extract disciplines and direction metadata from a study plan spreadsheet",
    long_about = "Extract structured curriculum data from a study plan workbook.\n\n\
                  Reads the direction description and the discipline table\n\
                  (sheets 'Table 1' and 'Table 2' by default) and prints the\n\
                  parsed records as a table or as JSON."
)]
pub struct Cli {
    /// Path to the study plan workbook (.xlsx, .xlsm, .xls, .ods).
    #[arg(long = "file", value_name = "PATH")]
    pub file: PathBuf,

    /// Direction description the study plan was added for.
    #[arg(
        long = "study-direction",
        value_name = "TEXT",
        default_value = DEFAULT_STUDY_DIRECTION
    )]
    pub study_direction: String,

    /// Read the direction description from the direction sheet instead.
    #[arg(long = "direction-from-sheet", conflicts_with = "study_direction")]
    pub direction_from_sheet: bool,

    /// TOML template describing sheet names and column layout.
    #[arg(long = "template", value_name = "PATH")]
    pub template: Option<PathBuf>,

    /// Output format.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,

    /// Write output to a file instead of stdout.
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

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

impl Cli {
    /// Logging configuration with consistent precedence: `--log-level` over
    /// `-v/-q`, and `RUST_LOG` only when neither is given.
    pub fn log_config(&self) -> LogConfig {
        let level_filter = match self.log_level {
            Some(LogLevelArg::Error) => LevelFilter::ERROR,
            Some(LogLevelArg::Warn) => LevelFilter::WARN,
            Some(LogLevelArg::Info) => LevelFilter::INFO,
            Some(LogLevelArg::Debug) => LevelFilter::DEBUG,
            Some(LogLevelArg::Trace) => LevelFilter::TRACE,
            None => self.verbosity.tracing_level_filter(),
        };
        let format = match self.log_format {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Compact => LogFormat::Compact,
            LogFormatArg::Json => LogFormat::Json,
        };
        let with_ansi = match self.color.color {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => self.log_file.is_none() && io::stderr().is_terminal(),
        };
        LogConfig::default()
            .with_level_filter(level_filter)
            .with_env_filter(!(self.verbosity.is_present() || self.log_level.is_some()))
            .with_format(format)
            .with_log_file(self.log_file.clone())
            .with_ansi(with_ansi)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormatArg {
    Table,
    Json,
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
