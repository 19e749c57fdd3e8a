//! Runtime descriptions of agent types.

use super::propagation::{ConfigSource, ConfigurableAgent, apply_configuration};
use crate::config::Provider;

/// Name of the framework's root agent type.
pub const BASE_AGENT: &str = "Soka::Agent";

/// Class-level settings of an agent type. Unset fields fall back to the
/// runtime's own defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AgentSettings {
    pub provider: Option<Provider>,
    pub model: Option<String>,
    pub api_key: Option<String>,
    pub max_iterations: Option<u32>,
}

/// An agent type: its name, lineage, tools, and settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentClass {
    name: String,
    parent: Option<String>,
    tools: Vec<String>,
    settings: AgentSettings,
}

impl AgentClass {
    /// A root type with no parent and no settings.
    pub fn base(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parent: None,
            tools: Vec::new(),
            settings: AgentSettings::default(),
        }
    }

    /// A root type carrying its own built-in settings.
    pub fn with_settings(mut self, settings: AgentSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Define a child type.
    ///
    /// The child inherits this type's tools and settings, then receives the
    /// configuration snapshot from `source`. Pass `None` when no
    /// configuration is available; the child then keeps the inherited values.
    pub fn subclass(&self, name: impl Into<String>, source: Option<&dyn ConfigSource>) -> Self {
        let mut child = Self {
            name: name.into(),
            parent: Some(self.name.clone()),
            tools: self.tools.clone(),
            settings: self.settings.clone(),
        };

        let applied = apply_configuration(&mut child, source);
        tracing::debug!(
            agent = %child.name,
            parent = %self.name,
            configured = applied,
            "defined agent type"
        );
        child
    }

    /// Re-apply a configuration snapshot, e.g. after the store changed in a
    /// test harness. Re-applying the same snapshot changes nothing.
    pub fn reconfigure(&mut self, source: Option<&dyn ConfigSource>) -> bool {
        apply_configuration(self, source)
    }

    /// Register a tool by name. Duplicates are ignored.
    pub fn with_tool(mut self, tool: impl Into<String>) -> Self {
        let tool = tool.into();
        if !self.tools.contains(&tool) {
            self.tools.push(tool);
        }
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parent(&self) -> Option<&str> {
        self.parent.as_deref()
    }

    pub fn tools(&self) -> &[String] {
        &self.tools
    }

    pub fn settings(&self) -> &AgentSettings {
        &self.settings
    }
}

impl ConfigurableAgent for AgentClass {
    fn provider(&mut self, provider: Provider) {
        self.settings.provider = Some(provider);
    }

    fn model(&mut self, model: String) {
        self.settings.model = Some(model);
    }

    fn api_key(&mut self, api_key: String) {
        self.settings.api_key = Some(api_key);
    }

    fn max_iterations(&mut self, max_iterations: u32) {
        self.settings.max_iterations = Some(max_iterations);
    }
}
