//! Environment lookup used when building default configuration.

use std::collections::HashMap;

/// Source of environment variables.
///
/// Empty values are treated as unset by every caller in this crate.
pub trait EnvLookup: Send + Sync {
    fn var(&self, key: &str) -> Option<String>;
}

/// Reads from the real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvLookup for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

impl EnvLookup for HashMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

/// Look up `key`, treating empty values as absent.
pub(crate) fn non_empty(env: &dyn EnvLookup, key: &str) -> Option<String> {
    env.var(key).filter(|v| !v.trim().is_empty())
}
