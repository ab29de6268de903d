//! Input-source selection: a results file or standard input.

use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

use color_eyre::eyre::{Result, WrapErr};

/// Where result lines are read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Standard input (the default; also the conventional `-`).
    Stdin,
    /// A results file on disk.
    File(PathBuf),
}

/// Helper to expand paths with ~ to a standard `PathBuf`.
fn expand_home(path_str: &str) -> PathBuf {
    if let Some(stripped) = path_str.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    PathBuf::from(path_str)
}

impl InputSource {
    /// Resolve the `--input-file` argument: absent or `-` means stdin.
    #[must_use]
    pub fn resolve(arg: Option<&str>) -> Self {
        match arg {
            None => Self::Stdin,
            Some(value) => {
                let value = value.trim();
                if value == "-" {
                    Self::Stdin
                } else {
                    Self::File(expand_home(value))
                }
            }
        }
    }

    /// Open the source as a buffered line reader.
    pub fn open(&self) -> Result<Box<dyn BufRead>> {
        match self {
            Self::Stdin => Ok(Box::new(BufReader::new(io::stdin()))),
            Self::File(path) => {
                let file = File::open(path)
                    .wrap_err_with(|| format!("cannot open input file {}", path.display()))?;
                Ok(Box::new(BufReader::new(file)))
            }
        }
    }
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdin => write!(f, "standard input"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_default_is_stdin() {
        assert_eq!(InputSource::resolve(None), InputSource::Stdin);
    }

    #[test]
    fn test_resolve_dash_is_stdin() {
        assert_eq!(InputSource::resolve(Some("-")), InputSource::Stdin);
        assert_eq!(InputSource::resolve(Some("  -  ")), InputSource::Stdin);
    }

    #[test]
    fn test_resolve_plain_path() {
        let source = InputSource::resolve(Some("scores.txt"));
        assert_eq!(source, InputSource::File(PathBuf::from("scores.txt")));
    }

    #[test]
    fn test_resolve_expands_home() {
        if let Some(home) = dirs::home_dir() {
            let source = InputSource::resolve(Some("~/scores.txt"));
            assert_eq!(source, InputSource::File(home.join("scores.txt")));
        }
    }

    #[test]
    fn test_open_missing_file_is_an_error() {
        let source = InputSource::File(PathBuf::from("definitely/not/here.txt"));
        assert!(source.open().is_err());
    }

    #[test]
    fn test_display_names_the_source() {
        assert_eq!(InputSource::Stdin.to_string(), "standard input");
        assert_eq!(
            InputSource::File(PathBuf::from("scores.txt")).to_string(),
            "scores.txt"
        );
    }
}
