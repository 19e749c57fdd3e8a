//! Configuration for Soka agent applications.
//!
//! A [`Configuration`] is resolved from environment variables, optionally
//! overlaid with `config/soka.yaml`, and then adjusted through the `ai` and
//! `performance` DSL sections. [`ConfigStore`] owns the live instance and
//! guards it with a lock so parallel test runners never observe torn state.

mod dsl;
mod env;
mod model;
mod operations;
mod store;
pub mod types;


// Re-export public API
pub use dsl::{AiSection, PerformanceSection};
pub use env::{EnvLookup, ProcessEnv};
pub use model::{
    Configuration, DEFAULT_MAX_ITERATIONS, DEFAULT_MODEL, DEFAULT_TIMEOUT_SECONDS,
    PRODUCTION_MAX_ITERATIONS,
};
pub use operations::{AiFileSection, ConfigFile, PerformanceFileSection};
pub use store::{ConfigStore, ScopedConfig};
pub use types::{Provider, RunMode, TimeoutValue};
