//! Templates rendered by the generators.
//!
//! Literal braces are doubled; see [`super::template`].

pub(super) const CONFIG_FILE: &str = r#"# Soka configuration
#
# SOKA_PROVIDER, SOKA_MODEL and SOKA_API_KEY supply defaults. Values set
# here override them.

ai:
  # Gemini AI Studio
  provider: gemini
  model: gemini-2.5-flash-lite
  api_key_env: GEMINI_API_KEY

  # OpenAI
  # provider: openai
  # model: gpt-4.1-mini
  # api_key_env: OPENAI_API_KEY

  # Anthropic
  # provider: anthropic
  # model: claude-sonnet-4-0
  # api_key_env: ANTHROPIC_API_KEY

performance:
  # Maximum iterations for the ReAct loop (10 in production, 5 otherwise)
  # max_iterations: 5

  # Timeout for agent execution, in seconds
  timeout: 30
"#;

pub(super) const SOURCE_ROOT_MOD: &str = r#"//! Agents and tools for this application.

pub mod agents;
pub mod tools;
"#;

pub(super) const AGENTS_MOD: &str = r#"//! Agent types. Generators register new modules here.
"#;

pub(super) const TOOLS_MOD: &str = r#"//! Tool types. Generators register new modules here.
"#;

pub(super) const TESTS_MOD: &str = r#"//! Generated soka tests.

#[allow(dead_code)]
#[path = "../../app/soka/mod.rs"]
mod app;
"#;

pub(super) const APPLICATION_AGENT: &str = r#"//! Base type for every agent in this application.
//!
//! Settings returned by `settings()` apply to all agents unless the
//! configuration overrides them.

use soka_kit::agent::{{AgentClass, AgentSettings, BASE_AGENT, ConfigSource}};

pub struct ApplicationAgent;

impl ApplicationAgent {{
    pub const NAME: &'static str = "ApplicationAgent";

    /// Application-wide defaults, applied before configuration.
    pub fn settings() -> AgentSettings {{
        AgentSettings::default()
    }}

    pub fn define(config: Option<&dyn ConfigSource>) -> AgentClass {{
        AgentClass::base(BASE_AGENT)
            .with_settings(Self::settings())
            .subclass(Self::NAME, config)
    }}
}}
"#;

pub(super) const APPLICATION_TOOL: &str = r#"//! Base trait for every tool in this application.

use serde_json::Value;
use soka_kit::error::ToolError;

pub trait ApplicationTool {{
    /// Name the agent uses to call this tool.
    const NAME: &'static str;
    const DESCRIPTION: &'static str;
    /// Declared parameters as (name, type) pairs.
    const PARAMS: &'static [(&'static str, &'static str)];

    /// Execute with JSON arguments.
    fn execute(&self, args: &Value) -> Result<Value, ToolError>;

    /// Check that every declared parameter is present.
    fn validate(args: &Value) -> Result<(), ToolError> {{
        let errors: Vec<String> = Self::PARAMS
            .iter()
            .filter(|(name, _)| args.get(*name).is_none())
            .map(|(name, _)| format!("{{}} is required", name))
            .collect();

        if errors.is_empty() {{
            Ok(())
        }} else {{
            Err(ToolError::InvalidParameters {{
                tool: Self::NAME.to_string(),
                errors,
            }})
        }}
    }}
}}
"#;

pub(super) const AGENT: &str = r#"//! {class_name}, generated by `soka generate agent`.

use {super_prefix}application_agent::ApplicationAgent;
use soka_kit::agent::{{AgentClass, ConfigSource}};

/// Tools this agent may call.
pub const TOOLS: &[&str] = &[{tools_list}];

pub struct {class_name};

impl {class_name} {{
    pub const NAME: &'static str = "{class_name}";

    /// Define the agent type from `ApplicationAgent`, applying the current
    /// configuration.
    pub fn define(config: Option<&dyn ConfigSource>) -> AgentClass {{
        let class = ApplicationAgent::define(config).subclass(Self::NAME, config);
        TOOLS.iter().fold(class, |class, tool| class.with_tool(*tool))
    }}
}}
"#;

pub(super) const AGENT_TEST: &str = r#"//! Tests for {class_name}.

use crate::app::agents::{module_path}::{class_name};
use soka_kit::config::{{Configuration, Provider}};
use soka_kit::testing::{{MockResponse, build_react_response}};

#[test]
fn {file_name}_receives_configuration() {{
    let mut config = Configuration::empty();
    config.provider = Some(Provider::Mock);
    config.max_iterations = Some(3);

    let class = {class_name}::define(Some(&config));

    assert_eq!(class.name(), "{class_name}");
    assert_eq!(class.settings().provider, Some(Provider::Mock));
    assert_eq!(class.settings().max_iterations, Some(3));
}}

#[test]
fn {file_name}_mock_response_has_final_answer() {{
    let response = MockResponse::default().with_final_answer("Test answer");
    let content = build_react_response(&response);

    assert!(content.ends_with("<Final_Answer>Test answer</Final_Answer>"));
}}
"#;

pub(super) const TOOL: &str = r#"//! {class_name}, generated by `soka generate tool`.

use {super_prefix}application_tool::ApplicationTool;
use serde_json::{{Value, json}};
use soka_kit::error::ToolError;

pub struct {class_name};

impl ApplicationTool for {class_name} {{
    const NAME: &'static str = "{base_name}";
    const DESCRIPTION: &'static str = "Describe what {class_name} does";
    const PARAMS: &'static [(&'static str, &'static str)] = &[{params_list}];

    fn execute(&self, args: &Value) -> Result<Value, ToolError> {{
        Self::validate(args)?;
{extract_args}        self.call({call_names})
    }}
}}

impl {class_name} {{
    /// Tool body. Replace the echo with the real implementation.
    pub fn call(&self{call_params}) -> Result<Value, ToolError> {{
        Ok(json!({{ {json_fields} }}))
    }}
}}
"#;

pub(super) const TOOL_TEST: &str = r#"//! Tests for {class_name}.

use serde_json::json;
use soka_kit::testing::MockTool;

#[test]
fn {file_name}_mocked_execution() {{
    let tool = MockTool::returning(json!({{ "tool": "{base_name}" }}));
    let result = tool.call(&json!({{ {sample_args} }}));

    assert_eq!(result["tool"], "{base_name}");
    assert_eq!(tool.calls(), 1);
}}
"#;
