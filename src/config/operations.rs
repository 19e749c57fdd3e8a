//! File overlay, serialization, and checks used by the consuming runtime.

use super::dsl::{AiSection, PerformanceSection};
use super::env::{EnvLookup, non_empty};
use super::model::Configuration;
use super::types::{Provider, TimeoutValue};
use crate::error::ConfigurationError;
use serde::Deserialize;
use std::path::Path;

/// Contents of `config/soka.yaml`.
///
/// Mirrors the DSL sections. Every key is optional and unknown keys are
/// ignored for forward compatibility.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ConfigFile {
    pub ai: Option<AiFileSection>,
    pub performance: Option<PerformanceFileSection>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AiFileSection {
    pub provider: Option<Provider>,
    pub model: Option<String>,
    /// Literal key. Prefer `api_key_env` outside local experiments.
    pub api_key: Option<String>,
    /// Name of the environment variable holding the key.
    pub api_key_env: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PerformanceFileSection {
    pub max_iterations: Option<u32>,
    pub timeout: Option<TimeoutValue>,
}

impl ConfigFile {
    /// Load from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigurationError> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| ConfigurationError::FileLoad {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        Self::from_yaml(&content).map_err(|e| match e {
            ConfigurationError::FileLoad { reason, .. } => ConfigurationError::FileLoad {
                path: path.to_path_buf(),
                reason,
            },
            other => other,
        })
    }

    /// Parse from a YAML string. An empty document yields an empty file.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigurationError> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(yaml).map_err(|e| ConfigurationError::FileLoad {
            path: Path::new("<inline>").to_path_buf(),
            reason: e.to_string(),
        })
    }
}

impl Configuration {
    /// Overlay `file` through the DSL sections.
    ///
    /// Fields the file leaves out keep their current values. `api_key_env`
    /// naming an unset variable clears the key. On error nothing is applied.
    pub fn apply_file(
        &mut self,
        file: &ConfigFile,
        env: &dyn EnvLookup,
    ) -> Result<(), ConfigurationError> {
        let mut staged = self.clone();
        staged.overlay_file(file, env)?;
        *self = staged;
        Ok(())
    }

    fn overlay_file(
        &mut self,
        file: &ConfigFile,
        env: &dyn EnvLookup,
    ) -> Result<(), ConfigurationError> {
        if let Some(ai_file) = &file.ai {
            self.ai(Some(|ai: &mut AiSection<'_>| {
                if let Some(provider) = &ai_file.provider {
                    ai.provider(provider.clone());
                }
                if let Some(model) = &ai_file.model {
                    ai.model(model.as_str());
                }
                if let Some(var) = &ai_file.api_key_env {
                    match non_empty(env, var) {
                        Some(key) => ai.api_key(key),
                        None => ai.clear_api_key(),
                    };
                } else if let Some(key) = &ai_file.api_key {
                    ai.api_key(key.as_str());
                }
            }));
        }

        if let Some(perf_file) = &file.performance {
            self.performance(Some(
                |perf: &mut PerformanceSection<'_>| -> Result<(), ConfigurationError> {
                    if let Some(max_iterations) = perf_file.max_iterations {
                        perf.max_iterations(max_iterations)?;
                    }
                    if let Some(timeout) = &perf_file.timeout {
                        perf.timeout(timeout.clone())?;
                    }
                    Ok(())
                },
            ))?;
        }

        Ok(())
    }

    /// Serialize to YAML.
    pub fn to_yaml(&self) -> Result<String, ConfigurationError> {
        serde_yaml::to_string(self).map_err(|e| ConfigurationError::InvalidSetting {
            field: "configuration",
            value: e.to_string(),
        })
    }

    /// The provider, or [`ConfigurationError::InvalidProvider`] when it is
    /// unset or unsupported.
    pub fn require_provider(&self) -> Result<&Provider, ConfigurationError> {
        let provider = self
            .provider
            .as_ref()
            .ok_or_else(|| ConfigurationError::InvalidProvider("(none)".to_string()))?;
        provider.require_supported()?;
        Ok(provider)
    }

    /// The API key, or [`ConfigurationError::MissingApiKey`] naming the
    /// variable expected for the configured provider.
    pub fn require_api_key(&self) -> Result<&str, ConfigurationError> {
        self.api_key
            .as_deref()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| ConfigurationError::MissingApiKey {
                provider: self.provider.clone(),
            })
    }
}
