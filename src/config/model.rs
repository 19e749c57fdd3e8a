//! The configuration record and its environment-derived defaults.

use super::env::{EnvLookup, ProcessEnv, non_empty};
use super::types::{Provider, RunMode};
use serde::Serialize;

/// Model used when `SOKA_MODEL` is not set.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash-lite";

/// ReAct iteration cap outside production.
pub const DEFAULT_MAX_ITERATIONS: u32 = 5;

/// ReAct iteration cap in production.
pub const PRODUCTION_MAX_ITERATIONS: u32 = 10;

/// Agent execution timeout in seconds.
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// Settings handed to every agent type defined by the application.
///
/// Every field is optional so that a partially configured record can be
/// propagated without overwriting an agent's own defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Configuration {
    pub provider: Option<Provider>,
    pub model: Option<String>,
    pub api_key: Option<String>,
    pub max_iterations: Option<u32>,
    /// Seconds; passed downstream, never enforced here.
    pub timeout: Option<u64>,
}

impl Configuration {
    /// Build defaults from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(&ProcessEnv)
    }

    /// Build defaults from an arbitrary environment.
    ///
    /// - `provider`: `SOKA_PROVIDER`, else `gemini`
    /// - `model`: `SOKA_MODEL`, else [`DEFAULT_MODEL`]
    /// - `api_key`: `SOKA_API_KEY`, else unset
    /// - `max_iterations`: 10 in production, else 5
    /// - `timeout`: 30 seconds
    pub fn from_lookup(env: &dyn EnvLookup) -> Self {
        let provider = non_empty(env, "SOKA_PROVIDER")
            .map(|value| Provider::parse(&value))
            .unwrap_or_default();

        let model = non_empty(env, "SOKA_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string());

        let max_iterations = if RunMode::from_lookup(env).is_production() {
            PRODUCTION_MAX_ITERATIONS
        } else {
            DEFAULT_MAX_ITERATIONS
        };

        Self {
            provider: Some(provider),
            model: Some(model),
            api_key: non_empty(env, "SOKA_API_KEY"),
            max_iterations: Some(max_iterations),
            timeout: Some(DEFAULT_TIMEOUT_SECONDS),
        }
    }

    /// A record with nothing set.
    pub fn empty() -> Self {
        Self {
            provider: None,
            model: None,
            api_key: None,
            max_iterations: None,
            timeout: None,
        }
    }

    /// Copy with the API key reduced to its last four characters.
    pub fn masked(&self) -> Self {
        let mut copy = self.clone();
        copy.api_key = self.api_key.as_deref().map(mask_secret);
        copy
    }
}

fn mask_secret(secret: &str) -> String {
    let chars: Vec<char> = secret.chars().collect();
    if chars.len() <= 4 {
        return "****".to_string();
    }
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("****{}", tail)
}
