//! Command implementations for soka.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations.

mod config;
mod generate;
mod install;


use crate::cli::{Cli, Command, ConfigAction, GenerateTarget, GeneratorFlags};
use crate::context::ProjectContext;
use crate::error::Result;
use crate::generators::{GeneratedFile, GeneratorOptions};

/// Dispatch a command to its implementation.
///
/// The project root is resolved once here; every command works against it.
pub fn dispatch(cli: Cli) -> Result<()> {
    let ctx = ProjectContext::resolve_optional(cli.root.as_deref())?;
    tracing::debug!(root = %ctx.root.display(), "project resolved");

    match cli.command {
        Command::Install(args) => install::cmd_install(&ctx, args),
        Command::Generate(generate) => match generate.target {
            GenerateTarget::Agent(args) => generate::cmd_generate_agent(&ctx, args),
            GenerateTarget::Tool(args) => generate::cmd_generate_tool(&ctx, args),
        },
        Command::Config(config) => match config.action {
            ConfigAction::Show => config::cmd_config_show(&ctx),
            ConfigAction::Check => config::cmd_config_check(&ctx),
        },
    }
}

impl From<GeneratorFlags> for GeneratorOptions {
    fn from(flags: GeneratorFlags) -> Self {
        Self {
            force: flags.force,
            skip_tests: flags.skip_tests,
        }
    }
}

/// Print one line per generated path.
fn print_generated(generated: &[GeneratedFile]) {
    for file in generated {
        println!("{}", file);
    }
}
