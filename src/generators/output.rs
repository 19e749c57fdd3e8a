//! Writing generated files with collision handling.

use crate::context::ProjectContext;
use crate::error::{Result, SokaError};
use crate::fs::{atomic_write_file, ensure_dir};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// What happened to a path during generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileAction {
    /// The file or directory did not exist and was created.
    Create,
    /// The directory already existed.
    Exist,
    /// The file already had exactly the generated content.
    Identical,
    /// The file differed and was left alone.
    Skip,
    /// The file differed and was overwritten.
    Force,
    /// Lines were appended to an existing file.
    Append,
}

impl fmt::Display for FileAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FileAction::Create => "create",
            FileAction::Exist => "exist",
            FileAction::Identical => "identical",
            FileAction::Skip => "skip",
            FileAction::Force => "force",
            FileAction::Append => "append",
        };
        f.write_str(label)
    }
}

/// One line of generator output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub action: FileAction,
    /// Path relative to the project root.
    pub path: PathBuf,
}

impl fmt::Display for GeneratedFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:>12}  {}", self.action.to_string(), self.path.display())
    }
}

/// Flags shared by all generators.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GeneratorOptions {
    /// Overwrite files whose content differs.
    pub force: bool,
    /// Never generate test files.
    pub skip_tests: bool,
}

/// Write `content` to `path`, respecting existing files.
pub(super) fn write_generated(
    ctx: &ProjectContext,
    path: &Path,
    content: &str,
    options: GeneratorOptions,
) -> Result<GeneratedFile> {
    let action = if path.exists() {
        let existing = fs::read_to_string(path).map_err(|e| {
            SokaError::GeneratorError(format!("failed to read '{}': {}", path.display(), e))
        })?;

        if existing == content {
            FileAction::Identical
        } else if options.force {
            atomic_write_file(path, content)?;
            FileAction::Force
        } else {
            FileAction::Skip
        }
    } else {
        atomic_write_file(path, content)?;
        FileAction::Create
    };

    let generated = GeneratedFile {
        action,
        path: ctx.relative(path).to_path_buf(),
    };
    tracing::info!(action = %generated.action, path = %generated.path.display(), "generator");
    Ok(generated)
}

/// Ensure `path` exists as a directory.
pub(super) fn create_directory(ctx: &ProjectContext, path: &Path) -> Result<GeneratedFile> {
    let action = if ensure_dir(path)? {
        FileAction::Create
    } else {
        FileAction::Exist
    };

    Ok(GeneratedFile {
        action,
        path: ctx.relative(path).to_path_buf(),
    })
}

/// Declare `pub mod {module};` in `mod_file`, creating it from `header` when
/// missing. Returns `None` when the declaration is already present.
pub(super) fn register_module(
    ctx: &ProjectContext,
    mod_file: &Path,
    module: &str,
    header: &str,
) -> Result<Option<GeneratedFile>> {
    let declaration = format!("pub mod {};", module);

    let (action, content) = if mod_file.exists() {
        let existing = fs::read_to_string(mod_file).map_err(|e| {
            SokaError::GeneratorError(format!("failed to read '{}': {}", mod_file.display(), e))
        })?;
        if existing.lines().any(|line| line.trim() == declaration) {
            return Ok(None);
        }

        let mut content = existing;
        if !content.is_empty() && !content.ends_with('\n') {
            content.push('\n');
        }
        content.push_str(&declaration);
        content.push('\n');
        (FileAction::Append, content)
    } else {
        let mut content = header.to_string();
        if !content.is_empty() {
            content.push('\n');
        }
        content.push_str(&declaration);
        content.push('\n');
        (FileAction::Create, content)
    };

    atomic_write_file(mod_file, &content)?;

    let generated = GeneratedFile {
        action,
        path: ctx.relative(mod_file).to_path_buf(),
    };
    tracing::info!(
        action = %generated.action,
        path = %generated.path.display(),
        module,
        "generator"
    );
    Ok(Some(generated))
}

/// Declare `leaf` under `namespaces`, starting from `mod_file` whose child
/// modules live in `dir`. Intermediate `mod.rs` files are created as needed.
pub(super) fn register_in_tree(
    ctx: &ProjectContext,
    mod_file: &Path,
    dir: &Path,
    namespaces: &[String],
    leaf: &str,
    header: &str,
) -> Result<Vec<GeneratedFile>> {
    let mut generated = Vec::new();
    let mut current_mod = mod_file.to_path_buf();
    let mut current_dir = dir.to_path_buf();
    let mut current_header = header.to_string();

    for namespace in namespaces {
        generated.extend(register_module(ctx, &current_mod, namespace, &current_header)?);
        current_dir.push(namespace);
        current_mod = current_dir.join("mod.rs");
        current_header = format!("//! `{}` namespace.\n", namespace);
    }

    generated.extend(register_module(ctx, &current_mod, leaf, &current_header)?);
    Ok(generated)
}
