//! Step input and output plumbing.
//!
//! [`ConfigIo`] reads a step's mode, execution environment and inputs, and
//! writes its outputs. Read failures never reach the caller: they are logged
//! and replaced with an empty mapping. Each fallible read also has a `try_`
//! form that returns the error instead.

use crate::cli::{InputArgs, InputSource};
use crate::config::Settings;
use crate::env::{EnvSource, ProcessEnv};
use crate::error::{ConfigIoError, Result};
use crate::format::{FormatParser, FormatSerializer, JsonFormat, YamlFormat, fallback_outputs};
use crate::types::{ConfigMap, ConfigValue};
use std::io::Write;
use tracing::{debug, error};

/// Top-level key every output document is wrapped in.
pub const OUTPUTS_KEY: &str = "outputs";

pub struct ConfigIo<E = ProcessEnv> {
    env: E,
    settings: Settings,
    serializer: Box<dyn FormatSerializer>,
}

impl<E: EnvSource> ConfigIo<E> {
    pub fn new(env: E, settings: Settings) -> Self {
        Self {
            env,
            settings,
            serializer: Box::new(YamlFormat),
        }
    }

    /// Replace the serializer used by [`write_outputs`](Self::write_outputs).
    pub fn with_output_format(mut self, serializer: impl FormatSerializer + 'static) -> Self {
        self.serializer = Box::new(serializer);
        self
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Raw value of the mode variable, or `""` when unset.
    pub fn read_mode(&self) -> String {
        self.env.var(&self.settings.variables.mode).unwrap_or_default()
    }

    /// Parse the JSON mapping in the environment variable.
    ///
    /// Unset or empty yields an empty mapping.
    pub fn try_read_environment(&self) -> Result<ConfigMap> {
        match self.env.var(&self.settings.variables.environment) {
            Some(json) if !json.is_empty() => JsonFormat.parse(&json),
            _ => Ok(ConfigMap::new()),
        }
    }

    /// Like [`try_read_environment`](Self::try_read_environment), but a
    /// parse failure is logged and yields an empty mapping.
    pub fn read_environment(&self) -> ConfigMap {
        self.try_read_environment().unwrap_or_else(|e| {
            error!(
                variable = %self.settings.variables.environment,
                error = %e,
                "Error parsing environment JSON"
            );
            ConfigMap::new()
        })
    }

    /// Parse the inputs named by `args`, file first, then inline.
    pub fn try_read_inputs(&self, args: &InputArgs) -> Result<ConfigMap> {
        match args.source() {
            InputSource::File(path) => {
                debug!(path = %path.display(), "Reading inputs file");
                let content =
                    std::fs::read_to_string(path).map_err(|e| ConfigIoError::read(path, e))?;
                YamlFormat.parse(&content)
            }
            InputSource::Inline(yaml) => {
                debug!("Reading inline inputs");
                YamlFormat.parse(yaml)
            }
            InputSource::None => Ok(ConfigMap::new()),
        }
    }

    /// Like [`try_read_inputs`](Self::try_read_inputs), but any read or
    /// parse failure is logged and yields an empty mapping.
    pub fn read_inputs(&self, args: &InputArgs) -> ConfigMap {
        self.try_read_inputs(args).unwrap_or_else(|e| {
            match args.source() {
                InputSource::File(path) => {
                    error!(path = %path.display(), error = %e, "Error loading inputs file");
                }
                _ => error!(error = %e, "Error parsing inline inputs"),
            }
            ConfigMap::new()
        })
    }

    /// The text [`write_outputs`](Self::write_outputs) would print.
    ///
    /// Falls back to a plain `key: value` listing if serialization fails.
    pub fn render_outputs(&self, outputs: &ConfigMap) -> String {
        let mut wrapper = ConfigMap::new();
        wrapper.insert(OUTPUTS_KEY.to_string(), ConfigValue::Mapping(outputs.clone()));

        match self.serializer.serialize(&wrapper) {
            Ok(text) => text,
            Err(e) => {
                error!(error = %e, "Error serializing outputs, using plain listing");
                fallback_outputs(OUTPUTS_KEY, outputs)
            }
        }
    }

    /// Write `outputs`, wrapped under `outputs:`, to `writer`.
    pub fn write_outputs_to<W: Write>(
        &self,
        writer: &mut W,
        outputs: &ConfigMap,
    ) -> std::io::Result<()> {
        writer.write_all(self.render_outputs(outputs).as_bytes())?;
        writer.flush()
    }

    /// Write `outputs`, wrapped under `outputs:`, to standard output.
    pub fn write_outputs(&self, outputs: &ConfigMap) {
        let stdout = std::io::stdout();
        let mut lock = stdout.lock();
        if let Err(e) = self.write_outputs_to(&mut lock, outputs) {
            error!(error = %e, "Error writing outputs");
        }
    }
}
