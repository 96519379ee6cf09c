use std::path::PathBuf;

use clap::Parser;
use mite_config::{ConfigError, InputFormat, OutputFormat};

/// Top-level CLI parser for the `mite` binary.
#[derive(Debug, Parser)]
#[command(
    name = "mite",
    version,
    about = "Translate MITE enzyme annotation records into canonical documents or reports"
)]
pub struct Cli {
    /// Directory containing the input JSON files
    #[arg(short, long = "input-dir", value_name = "DIR")]
    pub input_dir: PathBuf,

    /// Directory receiving one artifact per input file
    #[arg(short, long = "output-dir", value_name = "DIR")]
    pub output_dir: PathBuf,

    /// Input format: raw (portal flat form) or mite (canonical document)
    #[arg(short = 'm', long = "format", value_parser = input_format)]
    pub format: Option<InputFormat>,

    /// Output format: json or html
    #[arg(short = 't', long = "to", value_parser = output_format)]
    pub to: Option<OutputFormat>,

    /// External entry schema (defaults to the built-in one)
    #[arg(long, value_name = "FILE")]
    pub schema: Option<PathBuf>,

    /// Quiet mode (errors only)
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long)]
    pub verbose: bool,
}

fn input_format(value: &str) -> Result<InputFormat, String> {
    value.parse().map_err(|error: ConfigError| error.to_string())
}

fn output_format(value: &str) -> Result<OutputFormat, String> {
    value.parse().map_err(|error: ConfigError| error.to_string())
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn clap_command_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn short_flags_parse() {
        let cli = Cli::try_parse_from([
            "mite", "-i", "in", "-o", "out", "-m", "mite", "-t", "html", "-v",
        ])
        .expect("cli should parse");

        assert_eq!(cli.input_dir, PathBuf::from("in"));
        assert_eq!(cli.output_dir, PathBuf::from("out"));
        assert_eq!(cli.format, Some(InputFormat::Mite));
        assert_eq!(cli.to, Some(OutputFormat::Html));
        assert!(cli.verbose);
    }

    #[test]
    fn formats_default_to_config() {
        let cli = Cli::try_parse_from(["mite", "--input-dir", "in", "--output-dir", "out"])
            .expect("cli should parse");

        assert_eq!(cli.format, None);
        assert_eq!(cli.to, None);
        assert_eq!(cli.schema, None);
    }

    #[test]
    fn input_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["mite", "-i", "in", "-o", "out", "-m", "xml"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn directories_are_required() {
        assert!(Cli::try_parse_from(["mite", "-i", "in"]).is_err());
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        assert!(Cli::try_parse_from(["mite", "-i", "in", "-o", "out", "-q", "-v"]).is_err());
    }
}
