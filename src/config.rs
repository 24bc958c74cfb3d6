//! Settings for config-io.
//!
//! Settings name the environment variables `ConfigIo` reads. They are never
//! discovered: callers build them, or load one file they name explicitly
//! (the binary's `--config`).

use crate::error::{ConfigIoError, Result};
use crate::format::is_blank_yaml;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default name of the variable holding the raw execution mode.
pub const MODE_VAR: &str = "MODE";
/// Default name of the variable holding the JSON execution environment.
pub const ENVIRONMENT_VAR: &str = "ENVIRONMENT";

/// Settings for config-io.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub variables: VariablesConfig,
}

/// Names of the environment variables read by `ConfigIo`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariablesConfig {
    /// Variable holding the raw execution mode.
    #[serde(default = "default_mode_var")]
    pub mode: String,

    /// Variable holding the JSON-encoded execution environment.
    #[serde(default = "default_environment_var")]
    pub environment: String,
}

impl Default for VariablesConfig {
    fn default() -> Self {
        Self {
            mode: default_mode_var(),
            environment: default_environment_var(),
        }
    }
}

fn default_mode_var() -> String {
    MODE_VAR.to_string()
}

fn default_environment_var() -> String {
    ENVIRONMENT_VAR.to_string()
}

impl Settings {
    /// Load settings from a YAML file. Missing fields keep their defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ConfigIoError::read(path, e))?;
        if is_blank_yaml(&content) {
            return Ok(Self::default());
        }
        serde_yaml::from_str(&content).map_err(|source| ConfigIoError::Settings {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load `path` if given, otherwise use the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.variables.mode, "MODE");
        assert_eq!(settings.variables.environment, "ENVIRONMENT");
        assert_eq!(Settings::load_or_default(None).unwrap(), settings);
    }

    #[test]
    fn test_load_partial_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("settings.yaml");
        std::fs::write(&path, "variables:\n  mode: STEP_MODE\n").unwrap();

        let settings = Settings::load(&path).unwrap();

        assert_eq!(settings.variables.mode, "STEP_MODE");
        assert_eq!(settings.variables.environment, "ENVIRONMENT");
    }

    #[test]
    fn test_load_empty_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("settings.yaml");
        std::fs::write(&path, "# nothing set\n").unwrap();

        assert_eq!(Settings::load(&path).unwrap(), Settings::default());
    }

    #[test]
    fn test_load_missing_file() {
        let temp = TempDir::new().unwrap();
        let err = Settings::load(temp.path().join("nope.yaml")).unwrap_err();
        assert!(matches!(err, ConfigIoError::Read { .. }));
    }

    #[test]
    fn test_load_wrong_shape_is_settings_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("settings.yaml");
        std::fs::write(&path, "variables: [MODE, ENVIRONMENT]\n").unwrap();

        let err = Settings::load(&path).unwrap_err();

        assert!(matches!(err, ConfigIoError::Settings { .. }));
        assert!(err.to_string().starts_with("invalid settings in "));
    }

    #[test]
    fn test_load_malformed_yaml_is_settings_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("settings.yaml");
        std::fs::write(&path, "variables: {mode: [\n").unwrap();

        let err = Settings::load(&path).unwrap_err();

        assert!(matches!(err, ConfigIoError::Settings { .. }));
    }
}
