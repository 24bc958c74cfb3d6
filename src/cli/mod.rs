//! CLI definitions for config-io
//!
//! This module defines the CLI structure using clap's derive macros.
//! The main entry point is the `Cli` struct; step input flags live in
//! [`inputs::InputArgs`] so library callers can build them directly.

pub mod inputs;

use clap::Parser;
pub use inputs::{InputArgs, InputSource};
use std::path::PathBuf;

/// Read step inputs and echo them back as step outputs
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub inputs: InputArgs,

    /// Path to settings file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Logging output: 0/off, 1/stdout (default), 2/stderr, or filename
    #[arg(short, long, default_value = "1")]
    pub log: String,
}
