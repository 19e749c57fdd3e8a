//! Error types for soka-kit.
//!
//! The configuration store, the DSL and agent propagation never raise for
//! absent collaborators. These kinds exist so the consuming runtime, the
//! generators and the test helpers share one vocabulary.

use crate::config::Provider;
use crate::exit_codes;
use std::path::PathBuf;
use thiserror::Error;

/// Misconfiguration detected when a setting is actually needed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    /// No API key could be resolved for the chosen provider.
    #[error("{}", missing_api_key_message(.provider.as_ref()))]
    MissingApiKey { provider: Option<Provider> },

    /// The provider is not one the runtime can talk to.
    #[error("Invalid AI provider: {0}. Supported providers: :gemini, :openai, :anthropic")]
    InvalidProvider(String),

    /// A DSL or file value could not be stored.
    #[error("Invalid value for {field}: {value}")]
    InvalidSetting { field: &'static str, value: String },

    /// The configuration file could not be read or parsed.
    #[error("failed to load configuration file '{}': {reason}", .path.display())]
    FileLoad { path: PathBuf, reason: String },
}

fn missing_api_key_message(provider: Option<&Provider>) -> String {
    match provider {
        Some(provider) => format!(
            "Missing API key for provider: {}. Please set SOKA_API_KEY or {} environment variable.",
            provider,
            provider.api_key_env()
        ),
        None => "Missing API key. Please set SOKA_API_KEY environment variable.".to_string(),
    }
}

/// Failures of the agent execution loop.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AgentError {
    #[error("Agent exceeded maximum iterations limit of {0}")]
    MaxIterationsExceeded(u32),
}

/// Failures of tool lookup and invocation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ToolError {
    #[error("Tool not found: {0}")]
    NotFound(String),

    #[error("Invalid parameters for tool {tool}: {}", .errors.join(", "))]
    InvalidParameters { tool: String, errors: Vec<String> },
}

/// Main error type for soka-kit operations.
#[derive(Error, Debug)]
pub enum SokaError {
    /// User provided invalid arguments or the project is in an invalid state.
    #[error("{0}")]
    UserError(String),

    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error(transparent)]
    Agent(#[from] AgentError),

    #[error(transparent)]
    Tool(#[from] ToolError),

    /// Scaffolding could not be generated.
    #[error("Generator failed: {0}")]
    GeneratorError(String),
}

impl SokaError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            SokaError::UserError(_) => exit_codes::USER_ERROR,
            SokaError::Configuration(_) => exit_codes::CONFIGURATION_FAILURE,
            SokaError::Agent(_) | SokaError::Tool(_) => exit_codes::RUNTIME_FAILURE,
            SokaError::GeneratorError(_) => exit_codes::GENERATOR_FAILURE,
        }
    }
}

/// Result type alias for soka-kit operations.
pub type Result<T> = std::result::Result<T, SokaError>;
