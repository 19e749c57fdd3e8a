//! Agent types and configuration propagation.
//!
//! Agent types are values: [`AgentClass::subclass`] defines a new type from a
//! parent and copies the current configuration onto it in the same call.
//! The copy is one-shot, so later configuration changes never reach an agent
//! type that already exists.

mod class;
mod propagation;


// Re-export public API
pub use class::{AgentClass, AgentSettings, BASE_AGENT};
pub use propagation::{ConfigSource, ConfigurableAgent, apply_configuration};
