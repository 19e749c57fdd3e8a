//! Copying configuration onto agent types.

use crate::config::{ConfigStore, Configuration, Provider};

/// The class-level setters an agent type must expose to receive
/// configuration. The names are the integration surface with the runtime.
pub trait ConfigurableAgent {
    fn provider(&mut self, provider: Provider);
    fn model(&mut self, model: String);
    fn api_key(&mut self, api_key: String);
    fn max_iterations(&mut self, max_iterations: u32);
}

/// Anything that can hand out a configuration snapshot.
///
/// Returning `None` means no configuration is available; propagation then
/// leaves the target untouched.
pub trait ConfigSource {
    fn configuration(&self) -> Option<Configuration>;
}

impl ConfigSource for ConfigStore {
    fn configuration(&self) -> Option<Configuration> {
        Some(self.get())
    }
}

impl ConfigSource for Configuration {
    fn configuration(&self) -> Option<Configuration> {
        Some(self.clone())
    }
}

impl<T: ConfigSource> ConfigSource for Option<T> {
    fn configuration(&self) -> Option<Configuration> {
        self.as_ref().and_then(|source| source.configuration())
    }
}

/// Apply the snapshot from `source` to `target`.
///
/// Only present, non-empty values are written; unset fields keep the
/// target's own defaults. A missing source or snapshot is a no-op. Applying
/// the same snapshot twice leaves the target unchanged.
///
/// Returns whether a snapshot was applied.
pub fn apply_configuration<A>(target: &mut A, source: Option<&dyn ConfigSource>) -> bool
where
    A: ConfigurableAgent + ?Sized,
{
    let Some(config) = source.and_then(|source| source.configuration()) else {
        tracing::debug!("no configuration source, leaving agent defaults");
        return false;
    };

    if let Some(provider) = config.provider.filter(|p| !p.as_str().is_empty()) {
        target.provider(provider);
    }
    if let Some(model) = config.model.filter(|m| !m.is_empty()) {
        target.model(model);
    }
    if let Some(api_key) = config.api_key.filter(|k| !k.is_empty()) {
        target.api_key(api_key);
    }
    if let Some(max_iterations) = config.max_iterations {
        target.max_iterations(max_iterations);
    }

    true
}
