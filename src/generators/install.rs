//! `soka install`

use super::output::{
    GeneratedFile, GeneratorOptions, create_directory, register_module, write_generated,
};
use super::template::render_template;
use super::templates;
use crate::context::ProjectContext;
use crate::error::Result;
use std::collections::HashMap;

/// Printed after a successful install.
pub const POST_INSTALL_MESSAGE: &str = "\
Soka has been successfully installed!

Next steps:
  1. Set your AI provider API key:
       GEMINI_API_KEY, OPENAI_API_KEY or ANTHROPIC_API_KEY
     (or SOKA_API_KEY for any provider)
  2. Mount the generated sources in your crate:
       #[path = \"../app/soka/mod.rs\"] pub mod soka;
  3. Create your first agent:
       soka generate agent MyAgent
  4. Create your first tool:
       soka generate tool MyTool

Check the setup at any time with: soka config check";

/// Lay out `app/soka/` and write the configuration file, the base agent
/// and the base tool.
pub fn generate_install(
    ctx: &ProjectContext,
    options: GeneratorOptions,
) -> Result<Vec<GeneratedFile>> {
    let mut generated = Vec::new();
    let no_vars = HashMap::new();

    generated.push(write_generated(
        ctx,
        &ctx.config_path,
        templates::CONFIG_FILE,
        options,
    )?);

    generated.push(create_directory(ctx, &ctx.agents_dir)?);
    generated.push(create_directory(ctx, &ctx.tools_dir)?);

    generated.push(write_generated(
        ctx,
        &ctx.source_root.join("mod.rs"),
        templates::SOURCE_ROOT_MOD,
        options,
    )?);

    generated.push(write_generated(
        ctx,
        &ctx.agents_dir.join("application_agent.rs"),
        &render_template(templates::APPLICATION_AGENT, &no_vars)?,
        options,
    )?);
    generated.extend(register_module(
        ctx,
        &ctx.agents_dir.join("mod.rs"),
        "application_agent",
        templates::AGENTS_MOD,
    )?);

    generated.push(write_generated(
        ctx,
        &ctx.tools_dir.join("application_tool.rs"),
        &render_template(templates::APPLICATION_TOOL, &no_vars)?,
        options,
    )?);
    generated.extend(register_module(
        ctx,
        &ctx.tools_dir.join("mod.rs"),
        "application_tool",
        templates::TOOLS_MOD,
    )?);

    tracing::debug!(root = %ctx.root.display(), "install complete");
    Ok(generated)
}
