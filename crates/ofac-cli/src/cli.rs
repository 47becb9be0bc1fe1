//! CLI argument definitions for the sanctions transpiler.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use colorchoice_clap::Color;
use ofac_transform::DEFAULT_DATA_SOURCE;

#[derive(Parser)]
#[command(
    name = "ofac-transpiler",
    version,
    about = "Transform an OFAC Advanced XML export into entity-resolution JSONL",
    long_about = "Transform an OFAC Advanced XML sanctions export into newline-delimited JSON.\n\n\
                  Every distinct party with a stable identifier becomes one record carrying\n\
                  its names, identifiers, relationships, and sanctions payload."
)]
pub struct Cli {
    /// Path to the OFAC Advanced XML file.
    #[arg(value_name = "XML_FILE")]
    pub xml_file: PathBuf,

    /// Destination JSONL file.
    #[arg(long = "output-jsonl", value_name = "PATH", default_value = "ofac_strict.jsonl")]
    pub output_jsonl: PathBuf,

    /// Value written to DATA_SOURCE and to every relationship domain.
    #[arg(long = "data-source", value_name = "NAME", default_value = DEFAULT_DATA_SOURCE)]
    pub data_source: String,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for warnings only).
    #[command(flatten)]
    pub verbosity: Verbosity<InfoLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
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

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn command_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults_match_the_documented_interface() {
        let cli = Cli::try_parse_from(["ofac-transpiler", "sdn_advanced.xml"]).unwrap();
        assert_eq!(cli.xml_file, PathBuf::from("sdn_advanced.xml"));
        assert_eq!(cli.output_jsonl, PathBuf::from("ofac_strict.jsonl"));
        assert_eq!(cli.data_source, "OFAC_ADVANCED");
        assert!(cli.log_level.is_none());
        assert!(cli.log_file.is_none());
    }

    #[test]
    fn input_path_is_required() {
        assert!(Cli::try_parse_from(["ofac-transpiler"]).is_err());
    }

    #[test]
    fn options_override_defaults() {
        let cli = Cli::try_parse_from([
            "ofac-transpiler",
            "in.xml",
            "--output-jsonl",
            "out/records.jsonl",
            "--data-source",
            "OFAC_TEST",
            "--log-level",
            "debug",
            "--log-format",
            "json",
        ])
        .unwrap();
        assert_eq!(cli.output_jsonl, PathBuf::from("out/records.jsonl"));
        assert_eq!(cli.data_source, "OFAC_TEST");
        assert!(matches!(cli.log_level, Some(LogLevelArg::Debug)));
        assert!(matches!(cli.log_format, LogFormatArg::Json));
    }
}
