//! config-io
//!
//! Reads a step's inputs and writes them back as its outputs, which makes it
//! a pass-through step for checking how a pipeline wires values around.

use anyhow::Result;
use clap::Parser;
use config_io::ConfigIo;
use config_io::cli::Cli;
use config_io::config::Settings;
use config_io::env::ProcessEnv;
use config_io::logging::{LogTarget, init_logging};
use tracing::debug;

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(&LogTarget::parse(&cli.log), cli.verbose)?;

    if let Some(path) = &cli.config {
        debug!(path = %path.display(), "Using settings file");
    }
    let settings = Settings::load_or_default(cli.config.as_deref())?;

    let io = ConfigIo::new(ProcessEnv, settings);

    let mode = io.read_mode();
    let environment = io.read_environment();
    debug!(mode = %mode, environment_keys = environment.len(), "Execution context");

    let inputs = io.read_inputs(&cli.inputs);
    debug!(input_keys = inputs.len(), "Inputs loaded");

    io.write_outputs(&inputs);

    Ok(())
}
