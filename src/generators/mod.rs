//! Scaffolding generators.
//!
//! - `install`: configuration file, base agent and tool, directory layout
//! - `agent`: an agent type under `app/soka/agents/` plus an optional test
//! - `tool`: a tool type under `app/soka/tools/` plus an optional test
//!
//! Every generator reports one [`GeneratedFile`] per path it considered, so
//! reruns are visible: unchanged files report `identical`, diverging files are
//! skipped unless forced.

mod agent;
mod install;
pub mod naming;
mod output;
pub mod template;
mod templates;
mod tool;

#[cfg(test)]
mod tests;

// Re-export public API
pub use agent::{AgentGenerator, generate_agent};
pub use install::{POST_INSTALL_MESSAGE, generate_install};
pub use naming::{NameKind, NormalizedName};
pub use output::{FileAction, GeneratedFile, GeneratorOptions};
pub use tool::{ToolGenerator, ToolParam, generate_tool};
