//! Environment variable lookup.
//!
//! Everything that reads the process environment goes through [`EnvSource`],
//! so callers and tests can supply their own variables.

use std::collections::HashMap;

/// Something that can look up an environment variable by name.
pub trait EnvSource {
    /// Value of `name`, or `None` if it is unset or not valid unicode.
    fn var(&self, name: &str) -> Option<String>;
}

/// The real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

impl EnvSource for HashMap<String, String> {
    fn var(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

impl<E: EnvSource + ?Sized> EnvSource for &E {
    fn var(&self, name: &str) -> Option<String> {
        (**self).var(name)
    }
}
