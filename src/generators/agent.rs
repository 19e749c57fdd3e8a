//! `soka generate agent NAME [TOOLS...]`

use super::naming::{NameKind, NormalizedName};
use super::output::{
    GeneratedFile, GeneratorOptions, register_in_tree, register_module, write_generated,
};
use super::template::{render_template, vars};
use super::templates;
use crate::context::ProjectContext;
use crate::error::Result;

/// A normalized agent ready to render.
#[derive(Debug, Clone)]
pub struct AgentGenerator {
    name: NormalizedName,
    tools: Vec<String>,
}

impl AgentGenerator {
    /// Normalize the agent name and the tool names it references.
    ///
    /// Tools are referenced by the name they register under, so
    /// `WeatherApiTool`, `weather_api_tool` and `weather_api` all become
    /// `weather_api`. Duplicates are dropped.
    pub fn new(name: &str, tools: &[String]) -> Result<Self> {
        let name = NormalizedName::parse(name, NameKind::Agent)?;

        let mut normalized: Vec<String> = Vec::new();
        for tool in tools {
            let tool = NormalizedName::parse(tool, NameKind::Tool)?.base_name;
            if !normalized.contains(&tool) {
                normalized.push(tool);
            }
        }

        Ok(Self {
            name,
            tools: normalized,
        })
    }

    pub fn name(&self) -> &NormalizedName {
        &self.name
    }

    pub fn tools(&self) -> &[String] {
        &self.tools
    }

    /// Source of the agent file.
    pub fn render(&self) -> Result<String> {
        let tools_list = self
            .tools
            .iter()
            .map(|tool| format!("{:?}", tool))
            .collect::<Vec<_>>()
            .join(", ");

        let vars = vars([
            ("class_name", self.name.class_name.clone()),
            ("super_prefix", self.name.super_prefix()),
            ("tools_list", tools_list),
        ]);
        Ok(render_template(templates::AGENT, &vars)?)
    }

    /// Source of the agent's test file.
    pub fn render_test(&self) -> Result<String> {
        let vars = vars([
            ("class_name", self.name.class_name.clone()),
            ("file_name", self.name.file_name.clone()),
            ("module_path", self.name.module_path()),
        ]);
        Ok(render_template(templates::AGENT_TEST, &vars)?)
    }

    /// Write the agent, and its test when the project has a test harness.
    pub fn generate(
        &self,
        ctx: &ProjectContext,
        options: GeneratorOptions,
    ) -> Result<Vec<GeneratedFile>> {
        let mut generated = Vec::new();

        let path = self.name.path_in(&ctx.agents_dir, "");
        generated.push(write_generated(ctx, &path, &self.render()?, options)?);
        generated.extend(register_in_tree(
            ctx,
            &ctx.agents_dir.join("mod.rs"),
            &ctx.agents_dir,
            &self.name.class_path,
            &self.name.file_name,
            templates::AGENTS_MOD,
        )?);

        if ctx.has_test_harness() && !options.skip_tests {
            let tests_dir = ctx.agent_tests_dir();
            let test_path = self.name.path_in(&tests_dir, "_test");
            generated.push(write_generated(ctx, &test_path, &self.render_test()?, options)?);
            generated.extend(register_module(
                ctx,
                &ctx.tests_main(),
                "agents",
                templates::TESTS_MOD,
            )?);
            generated.extend(register_in_tree(
                ctx,
                &tests_dir.join("mod.rs"),
                &tests_dir,
                &self.name.class_path,
                &format!("{}_test", self.name.file_name),
                "",
            )?);
        }

        tracing::debug!(
            agent = %self.name.qualified_name(),
            tools = ?self.tools,
            "agent generated"
        );
        Ok(generated)
    }
}

/// Generate agent `name` referencing `tools`.
pub fn generate_agent(
    ctx: &ProjectContext,
    name: &str,
    tools: &[String],
    options: GeneratorOptions,
) -> Result<Vec<GeneratedFile>> {
    AgentGenerator::new(name, tools)?.generate(ctx, options)
}
