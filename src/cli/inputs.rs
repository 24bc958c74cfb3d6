//! Input flags for a config-io step.
//!
//! A step receives its inputs as YAML, either inline or from a file. The
//! file form exists for inputs too large for a command line.

use clap::Args;
use std::path::PathBuf;

/// Flags naming where a step's inputs come from
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct InputArgs {
    /// YAML string containing all inputs
    #[arg(long = "inputs", value_name = "YAML")]
    pub inline: Option<String>,

    /// Path to YAML file containing all inputs
    ///
    /// Takes precedence over --inputs when both are given.
    #[arg(long = "inputs-file", value_name = "FILE")]
    pub file: Option<PathBuf>,
}

/// Where inputs will be read from, after precedence is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputSource<'a> {
    File(&'a std::path::Path),
    Inline(&'a str),
    None,
}

impl InputArgs {
    pub fn from_inline(yaml: impl Into<String>) -> Self {
        Self {
            inline: Some(yaml.into()),
            file: None,
        }
    }

    pub fn from_file(path: impl Into<PathBuf>) -> Self {
        Self {
            inline: None,
            file: Some(path.into()),
        }
    }

    /// Resolve the source: a non-empty file path wins, then a non-empty
    /// inline value. Empty flags count as not given.
    pub fn source(&self) -> InputSource<'_> {
        if let Some(file) = self.file.as_deref().filter(|p| !p.as_os_str().is_empty()) {
            InputSource::File(file)
        } else if let Some(inline) = self.inline.as_deref().filter(|s| !s.is_empty()) {
            InputSource::Inline(inline)
        } else {
            InputSource::None
        }
    }
}
