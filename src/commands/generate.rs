//! Implementation of the `soka generate` commands.

use super::print_generated;
use crate::cli::{AgentArgs, ToolArgs};
use crate::context::ProjectContext;
use crate::error::Result;
use crate::generators::{generate_agent, generate_tool};

pub fn cmd_generate_agent(ctx: &ProjectContext, args: AgentArgs) -> Result<()> {
    let generated = generate_agent(ctx, &args.name, &args.tools, args.flags.into())?;
    print_generated(&generated);
    Ok(())
}

pub fn cmd_generate_tool(ctx: &ProjectContext, args: ToolArgs) -> Result<()> {
    let generated = generate_tool(ctx, &args.name, &args.params, args.flags.into())?;
    print_generated(&generated);
    Ok(())
}
