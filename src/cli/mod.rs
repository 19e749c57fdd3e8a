//! CLI argument parsing for soka.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Soka: scaffolding and configuration for ReAct agent applications.
///
/// Agents and tools live under `app/soka/`; settings come from SOKA_*
/// environment variables overlaid with `config/soka.yaml`.
#[derive(Parser, Debug)]
#[command(name = "soka")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Project root (defaults to the current directory).
    #[arg(long, global = true, value_name = "DIR")]
    pub root: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for soka.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Install soka into the project.
    ///
    /// Writes config/soka.yaml, the ApplicationAgent and ApplicationTool
    /// base types, and the app/soka directory layout.
    Install(InstallArgs),

    /// Generate an agent or a tool.
    #[command(alias = "g")]
    Generate(GenerateCommand),

    /// Inspect the resolved configuration.
    Config(ConfigCommand),
}

#[derive(Args, Debug, Clone, Copy, Default)]
pub struct GeneratorFlags {
    /// Overwrite files whose content differs.
    #[arg(short, long)]
    pub force: bool,

    /// Do not generate test files.
    #[arg(long)]
    pub skip_tests: bool,
}

#[derive(Parser, Debug)]
pub struct InstallArgs {
    /// Overwrite files whose content differs.
    #[arg(short, long)]
    pub force: bool,
}

#[derive(Parser, Debug)]
pub struct GenerateCommand {
    #[command(subcommand)]
    pub target: GenerateTarget,
}

#[derive(Subcommand, Debug)]
pub enum GenerateTarget {
    /// Generate an agent, e.g. `soka generate agent Weather weather_api`.
    Agent(AgentArgs),

    /// Generate a tool, e.g. `soka generate tool WeatherApi city:string`.
    Tool(ToolArgs),
}

#[derive(Parser, Debug)]
pub struct AgentArgs {
    /// Agent name; `admin/support` creates a namespaced agent.
    pub name: String,

    /// Tools the agent may call.
    pub tools: Vec<String>,

    #[command(flatten)]
    pub flags: GeneratorFlags,
}

#[derive(Parser, Debug)]
pub struct ToolArgs {
    /// Tool name; `billing/invoice_lookup` creates a namespaced tool.
    pub name: String,

    /// Parameters as `name:type` (type defaults to string).
    pub params: Vec<String>,

    #[command(flatten)]
    pub flags: GeneratorFlags,
}

#[derive(Parser, Debug)]
pub struct ConfigCommand {
    #[command(subcommand)]
    pub action: ConfigAction,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Print the resolved configuration as YAML, API key masked.
    Show,

    /// Verify that the provider is supported and an API key is set.
    Check,
}

impl Cli {
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
