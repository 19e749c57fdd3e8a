//! Implementation of the `soka install` command.

use super::print_generated;
use crate::cli::InstallArgs;
use crate::context::ProjectContext;
use crate::error::Result;
use crate::generators::{GeneratorOptions, POST_INSTALL_MESSAGE, generate_install};

pub fn cmd_install(ctx: &ProjectContext, args: InstallArgs) -> Result<()> {
    let options = GeneratorOptions {
        force: args.force,
        ..GeneratorOptions::default()
    };

    let generated = generate_install(ctx, options)?;
    print_generated(&generated);

    println!();
    println!("{}", POST_INSTALL_MESSAGE);

    Ok(())
}
