//! config-io library
//!
//! Reads a pipeline step's mode, execution environment and inputs, and
//! writes its outputs as YAML wrapped under `outputs:`.

pub mod cli;
pub mod config;
pub mod env;
pub mod error;
pub mod format;
pub mod io;
pub mod logging;
pub mod types;

pub use io::{ConfigIo, OUTPUTS_KEY};
pub use types::{ConfigMap, ConfigValue};
