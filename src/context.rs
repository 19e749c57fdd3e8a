//! Project layout resolution for soka applications.
//!
//! Agents and tools live under `app/soka/`, which the host registers as a
//! source root with eager loading of every subdirectory. Generators and the
//! config commands resolve all paths through [`ProjectContext`] so they agree
//! on that layout.

use crate::error::{Result, SokaError};
use std::env;
use std::path::{Path, PathBuf};

/// Source root for agents and tools, relative to the project root.
pub const SOKA_SOURCE_ROOT: &str = "app/soka";

/// Configuration file, relative to the project root.
pub const CONFIG_FILE: &str = "config/soka.yaml";

/// Directory whose presence enables test file generation.
pub const TESTS_DIR: &str = "tests";

/// Resolved paths for a project. All paths are absolute.
#[derive(Debug, Clone)]
pub struct ProjectContext {
    /// Absolute path to the project root.
    pub root: PathBuf,

    /// `{root}/app/soka`
    pub source_root: PathBuf,

    /// `{root}/app/soka/agents`
    pub agents_dir: PathBuf,

    /// `{root}/app/soka/tools`
    pub tools_dir: PathBuf,

    /// `{root}/config/soka.yaml`
    pub config_path: PathBuf,

    /// `{root}/tests`
    pub tests_dir: PathBuf,
}

impl ProjectContext {
    /// Resolve the project from the current working directory.
    pub fn resolve() -> Result<Self> {
        let cwd = env::current_dir().map_err(|e| {
            SokaError::UserError(format!("failed to get current working directory: {}", e))
        })?;

        Self::resolve_from(&cwd)
    }

    /// Resolve the project rooted at `root`.
    pub fn resolve_from<P: AsRef<Path>>(root: P) -> Result<Self> {
        let root = root.as_ref();

        if !root.is_dir() {
            return Err(SokaError::UserError(format!(
                "project root '{}' does not exist or is not a directory",
                root.display()
            )));
        }

        let root = root.canonicalize().map_err(|e| {
            SokaError::UserError(format!(
                "failed to resolve project root '{}': {}",
                root.display(),
                e
            ))
        })?;

        let source_root = root.join(SOKA_SOURCE_ROOT);
        let agents_dir = source_root.join("agents");
        let tools_dir = source_root.join("tools");
        let config_path = root.join(CONFIG_FILE);
        let tests_dir = root.join(TESTS_DIR);

        Ok(Self {
            root,
            source_root,
            agents_dir,
            tools_dir,
            config_path,
            tests_dir,
        })
    }

    /// Resolve from an explicit root, or the current directory when `None`.
    pub fn resolve_optional(root: Option<&Path>) -> Result<Self> {
        match root {
            Some(root) => Self::resolve_from(root),
            None => Self::resolve(),
        }
    }

    /// `{root}/tests/soka/agents`
    pub fn agent_tests_dir(&self) -> PathBuf {
        self.tests_dir.join("soka").join("agents")
    }

    /// `{root}/tests/soka/tools`
    pub fn tool_tests_dir(&self) -> PathBuf {
        self.tests_dir.join("soka").join("tools")
    }

    /// `{root}/tests/soka/main.rs`, the integration test target that declares
    /// every generated test module.
    pub fn tests_main(&self) -> PathBuf {
        self.tests_dir.join("soka").join("main.rs")
    }

    /// Whether the project has a test harness to generate tests into.
    pub fn has_test_harness(&self) -> bool {
        self.tests_dir.is_dir()
    }

    /// `path` relative to the project root, for display.
    pub fn relative<'a>(&self, path: &'a Path) -> &'a Path {
        path.strip_prefix(&self.root).unwrap_or(path)
    }
}
