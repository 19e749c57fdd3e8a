//! Value types used by the configuration model.

use super::env::{EnvLookup, non_empty};
use crate::error::ConfigurationError;
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// LLM backend an agent talks to.
///
/// Unknown identifiers are kept verbatim in [`Provider::Other`]; the store
/// never rejects a provider, only the consuming runtime does.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Provider {
    #[default]
    Gemini,
    Openai,
    Anthropic,
    /// Test-only backend that never leaves the process.
    Mock,
    Other(String),
}

impl Provider {
    /// Providers the runtime can actually reach.
    pub fn supported() -> [Provider; 3] {
        [Provider::Gemini, Provider::Openai, Provider::Anthropic]
    }

    /// Parse a provider identifier. Accepts a leading `:` and any casing.
    pub fn parse(value: &str) -> Self {
        let trimmed = value.trim().trim_start_matches(':');
        match trimmed.to_ascii_lowercase().as_str() {
            "gemini" => Self::Gemini,
            "openai" => Self::Openai,
            "anthropic" => Self::Anthropic,
            "mock" => Self::Mock,
            _ => Self::Other(trimmed.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Gemini => "gemini",
            Self::Openai => "openai",
            Self::Anthropic => "anthropic",
            Self::Mock => "mock",
            Self::Other(name) => name,
        }
    }

    pub fn is_supported(&self) -> bool {
        matches!(self, Self::Gemini | Self::Openai | Self::Anthropic)
    }

    /// Fail with [`ConfigurationError::InvalidProvider`] unless supported.
    pub fn require_supported(&self) -> Result<(), ConfigurationError> {
        if self.is_supported() {
            Ok(())
        } else {
            Err(ConfigurationError::InvalidProvider(self.to_string()))
        }
    }

    /// Provider-specific API key variable, e.g. `GEMINI_API_KEY`.
    pub fn api_key_env(&self) -> String {
        format!("{}_API_KEY", self.as_str().to_ascii_uppercase())
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Provider {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<&str> for Provider {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

impl From<String> for Provider {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<Provider> for String {
    fn from(value: Provider) -> Self {
        value.as_str().to_string()
    }
}

/// Execution mode of the host application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunMode {
    #[default]
    Development,
    Test,
    Production,
}

impl RunMode {
    /// Variables consulted in order; the first non-empty one wins.
    pub const ENV_KEYS: [&'static str; 3] = ["SOKA_ENV", "RAILS_ENV", "RACK_ENV"];

    /// Parse a mode name. Anything unrecognised is development.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "test" => Self::Test,
            _ => Self::Development,
        }
    }

    pub fn from_lookup(env: &dyn EnvLookup) -> Self {
        Self::ENV_KEYS
            .iter()
            .find_map(|key| non_empty(env, key))
            .map(|value| Self::parse(&value))
            .unwrap_or_default()
    }

    pub fn is_production(self) -> bool {
        self == Self::Production
    }
}

impl fmt::Display for RunMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Development => "development",
            Self::Test => "test",
            Self::Production => "production",
        };
        f.write_str(s)
    }
}

/// Timeout as supplied to the performance DSL.
///
/// Text that looks like a number is coerced to an integer.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum TimeoutValue {
    Seconds(i64),
    Text(String),
}

impl TimeoutValue {
    /// Resolve to a positive number of seconds.
    pub fn resolve(&self) -> Result<u64, ConfigurationError> {
        let seconds = match self {
            Self::Seconds(n) => Some(*n),
            Self::Text(text) => text.trim().parse::<i64>().ok(),
        };

        match seconds {
            Some(n) if n > 0 => Ok(n as u64),
            _ => Err(ConfigurationError::InvalidSetting {
                field: "timeout",
                value: self.to_string(),
            }),
        }
    }
}

impl fmt::Display for TimeoutValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Seconds(n) => write!(f, "{}", n),
            Self::Text(text) => write!(f, "{:?}", text),
        }
    }
}

impl From<i32> for TimeoutValue {
    fn from(value: i32) -> Self {
        Self::Seconds(value.into())
    }
}

impl From<i64> for TimeoutValue {
    fn from(value: i64) -> Self {
        Self::Seconds(value)
    }
}

impl From<u32> for TimeoutValue {
    fn from(value: u32) -> Self {
        Self::Seconds(value.into())
    }
}

impl From<u64> for TimeoutValue {
    fn from(value: u64) -> Self {
        Self::Seconds(i64::try_from(value).unwrap_or(i64::MAX))
    }
}

impl From<&str> for TimeoutValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for TimeoutValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn provider_parse_is_case_insensitive() {
        assert_eq!(Provider::parse("OpenAI"), Provider::Openai);
        assert_eq!(Provider::parse(":anthropic"), Provider::Anthropic);
        assert_eq!(Provider::parse(" gemini "), Provider::Gemini);
        assert_eq!(Provider::parse("mock"), Provider::Mock);
    }

    #[test]
    fn provider_keeps_unknown_values() {
        let provider = Provider::parse("cohere");
        assert_eq!(provider, Provider::Other("cohere".to_string()));
        assert_eq!(provider.to_string(), "cohere");
        assert!(!provider.is_supported());
    }

    #[test]
    fn provider_require_supported() {
        assert!(Provider::Anthropic.require_supported().is_ok());
        let err = Provider::Mock.require_supported().unwrap_err();
        assert_eq!(err, ConfigurationError::InvalidProvider("mock".to_string()));
    }

    #[test]
    fn provider_api_key_env() {
        assert_eq!(Provider::Gemini.api_key_env(), "GEMINI_API_KEY");
        assert_eq!(Provider::Openai.api_key_env(), "OPENAI_API_KEY");
        assert_eq!(Provider::Anthropic.api_key_env(), "ANTHROPIC_API_KEY");
    }

    #[test]
    fn provider_serializes_as_string() {
        let yaml = serde_yaml::to_string(&Provider::Anthropic).unwrap();
        assert_eq!(yaml.trim(), "anthropic");
        let parsed: Provider = serde_yaml::from_str("openai").unwrap();
        assert_eq!(parsed, Provider::Openai);
    }

    #[test]
    fn run_mode_prefers_soka_env() {
        let env: HashMap<String, String> = [
            ("SOKA_ENV".to_string(), "production".to_string()),
            ("RAILS_ENV".to_string(), "test".to_string()),
        ]
        .into_iter()
        .collect();
        assert_eq!(RunMode::from_lookup(&env), RunMode::Production);
    }

    #[test]
    fn run_mode_falls_back_to_rails_env() {
        let env: HashMap<String, String> = [
            ("SOKA_ENV".to_string(), "".to_string()),
            ("RAILS_ENV".to_string(), "test".to_string()),
        ]
        .into_iter()
        .collect();
        assert_eq!(RunMode::from_lookup(&env), RunMode::Test);
        assert_eq!(RunMode::from_lookup(&HashMap::<String, String>::new()), RunMode::Development);
    }

    #[test]
    fn timeout_coerces_text() {
        assert_eq!(TimeoutValue::from("45").resolve().unwrap(), 45);
        assert_eq!(TimeoutValue::from(" 60 ").resolve().unwrap(), 60);
        assert_eq!(TimeoutValue::from(90).resolve().unwrap(), 90);
    }

    #[test]
    fn timeout_rejects_non_positive_and_garbage() {
        assert!(TimeoutValue::from(0).resolve().is_err());
        assert!(TimeoutValue::from(-5).resolve().is_err());
        let err = TimeoutValue::from("soon").resolve().unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for timeout: \"soon\"");
    }
}
