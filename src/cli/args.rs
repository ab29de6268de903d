//! Command-line argument definitions.

use std::fmt;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Rendered output flavor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// The plain ranked table.
    #[default]
    Text,
    /// The same rows as a JSON array.
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// scoretab - league standings from match results
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Input file with one result per line ("-" or omitted reads stdin)
    #[arg(short = 'f', long, value_name = "PATH")]
    pub input_file: Option<String>,

    /// Rank on points alone, without goal difference
    #[arg(long)]
    pub points_only: bool,

    /// Skip lines that fail to parse instead of aborting
    #[arg(long)]
    pub lenient: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Config file path
    #[arg(long, value_name = "PATH", env = "SCORETAB_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_args_definition_is_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_flags() {
        let args = Args::try_parse_from([
            "scoretab",
            "-f",
            "scores.txt",
            "--points-only",
            "--lenient",
            "--format",
            "json",
        ])
        .unwrap();
        assert_eq!(args.input_file.as_deref(), Some("scores.txt"));
        assert!(args.points_only);
        assert!(args.lenient);
        assert_eq!(args.format, OutputFormat::Json);
    }

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["scoretab"]).unwrap();
        assert!(args.input_file.is_none());
        assert!(!args.points_only);
        assert!(!args.lenient);
        assert_eq!(args.format, OutputFormat::Text);
        assert!(!args.verbose);
    }
}
