use crate::context::ProjectContext;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{LazyLock, Mutex, MutexGuard};
use tempfile::TempDir;

static CWD_LOCK: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));

pub(crate) struct DirGuard {
    original: PathBuf,
    _lock: MutexGuard<'static, ()>,
}

impl DirGuard {
    pub(crate) fn new(new_dir: &Path) -> Self {
        // The working directory is process-global; serialize changes to it.
        let lock = CWD_LOCK.lock().unwrap_or_else(|poison| poison.into_inner());
        let original = std::env::current_dir().unwrap();
        std::env::set_current_dir(new_dir).unwrap();
        Self {
            original,
            _lock: lock,
        }
    }
}

impl Drop for DirGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original);
    }
}

/// An injected environment from literal pairs.
pub(crate) fn env_vars<I, K, V>(pairs: I) -> HashMap<String, String>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}

/// An empty project without a test harness.
pub(crate) fn create_test_project() -> (TempDir, ProjectContext) {
    let temp_dir = TempDir::new().unwrap();
    let ctx = ProjectContext::resolve_from(temp_dir.path()).unwrap();
    (temp_dir, ctx)
}

/// An empty project with a `tests/` directory.
pub(crate) fn create_test_project_with_tests() -> (TempDir, ProjectContext) {
    let (temp_dir, ctx) = create_test_project();
    std::fs::create_dir(&ctx.tests_dir).unwrap();
    (temp_dir, ctx)
}

pub(crate) fn read(ctx: &ProjectContext, relative: &str) -> String {
    std::fs::read_to_string(ctx.root.join(relative)).unwrap()
}
