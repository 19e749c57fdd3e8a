//! Implementation of the `soka config` commands.

use crate::config::{ConfigStore, Configuration, RunMode};
use crate::context::ProjectContext;
use crate::error::Result;

/// Resolve the configuration the application would see: environment
/// defaults overlaid with `config/soka.yaml` when present.
pub(super) fn resolve_configuration(
    ctx: &ProjectContext,
    store: &ConfigStore,
) -> Result<Configuration> {
    let applied = store.load_file(&ctx.config_path)?;
    tracing::debug!(applied, path = %ctx.config_path.display(), "configuration resolved");
    Ok(store.get())
}

/// YAML for `soka config show`, with the API key masked.
pub(super) fn render_configuration(ctx: &ProjectContext, store: &ConfigStore) -> Result<String> {
    let config = resolve_configuration(ctx, store)?;
    let mode = RunMode::from_lookup(store.env());

    let source = if ctx.config_path.exists() {
        ctx.relative(&ctx.config_path).display().to_string()
    } else {
        "environment only".to_string()
    };

    Ok(format!(
        "# mode: {}\n# source: {}\n{}",
        mode,
        source,
        config.masked().to_yaml()?
    ))
}

/// Summary line for `soka config check`, or the first problem found.
pub(super) fn check_configuration(ctx: &ProjectContext, store: &ConfigStore) -> Result<String> {
    let config = resolve_configuration(ctx, store)?;
    let provider = config.require_provider()?;
    config.require_api_key()?;

    Ok(format!(
        "Configuration OK: provider {}, model {}",
        provider,
        config.model.as_deref().unwrap_or("(default)")
    ))
}

pub fn cmd_config_show(ctx: &ProjectContext) -> Result<()> {
    print!("{}", render_configuration(ctx, ConfigStore::global())?);
    Ok(())
}

pub fn cmd_config_check(ctx: &ProjectContext) -> Result<()> {
    println!("{}", check_configuration(ctx, ConfigStore::global())?);
    Ok(())
}
