//! Scoped mutation sections over a [`Configuration`].
//!
//! ```
//! use soka_kit::config::{AiSection, Configuration, PerformanceSection, Provider};
//! use soka_kit::error::ConfigurationError;
//!
//! let mut config = Configuration::empty();
//! config.ai(Some(|ai: &mut AiSection<'_>| {
//!     ai.provider(Provider::Anthropic).model("claude-sonnet-4-0");
//! }));
//! config
//!     .performance(Some(|perf: &mut PerformanceSection<'_>| -> Result<(), ConfigurationError> {
//!         perf.max_iterations(20)?.timeout("45")?;
//!         Ok(())
//!     }))
//!     .unwrap();
//!
//! assert_eq!(config.provider, Some(Provider::Anthropic));
//! assert_eq!(config.timeout, Some(45));
//! ```

use super::model::Configuration;
use super::types::{Provider, TimeoutValue};
use crate::error::ConfigurationError;

/// Provider, model and credentials.
pub struct AiSection<'a> {
    config: &'a mut Configuration,
}

impl AiSection<'_> {
    pub fn provider(&mut self, value: impl Into<Provider>) -> &mut Self {
        self.config.provider = Some(value.into());
        self
    }

    pub fn model(&mut self, value: impl Into<String>) -> &mut Self {
        self.config.model = Some(value.into());
        self
    }

    pub fn api_key(&mut self, value: impl Into<String>) -> &mut Self {
        self.config.api_key = Some(value.into());
        self
    }

    pub fn clear_api_key(&mut self) -> &mut Self {
        self.config.api_key = None;
        self
    }
}

/// Iteration cap and execution timeout.
pub struct PerformanceSection<'a> {
    config: &'a mut Configuration,
}

impl PerformanceSection<'_> {
    pub fn max_iterations(&mut self, value: u32) -> Result<&mut Self, ConfigurationError> {
        if value == 0 {
            return Err(ConfigurationError::InvalidSetting {
                field: "max_iterations",
                value: value.to_string(),
            });
        }
        self.config.max_iterations = Some(value);
        Ok(self)
    }

    /// Numeric-looking text such as `"45"` is stored as `45`.
    pub fn timeout(
        &mut self,
        value: impl Into<TimeoutValue>,
    ) -> Result<&mut Self, ConfigurationError> {
        self.config.timeout = Some(value.into().resolve()?);
        Ok(self)
    }
}

impl Configuration {
    /// Run `block` against the AI section. `None` is a no-op.
    pub fn ai<F>(&mut self, block: Option<F>)
    where
        F: FnOnce(&mut AiSection<'_>),
    {
        if let Some(block) = block {
            block(&mut AiSection { config: self });
        }
    }

    /// Run `block` against the performance section. `None` is a no-op.
    pub fn performance<F>(&mut self, block: Option<F>) -> Result<(), ConfigurationError>
    where
        F: FnOnce(&mut PerformanceSection<'_>) -> Result<(), ConfigurationError>,
    {
        match block {
            Some(block) => block(&mut PerformanceSection { config: self }),
            None => Ok(()),
        }
    }
}
