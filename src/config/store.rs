//! Lock-guarded owner of the live [`Configuration`].

use super::env::{EnvLookup, ProcessEnv};
use super::model::Configuration;
use super::operations::ConfigFile;
use crate::error::ConfigurationError;
use std::fmt;
use std::path::Path;
use std::sync::{Arc, LazyLock, Mutex, MutexGuard};
use std::thread::{self, ThreadId};

static GLOBAL: LazyLock<ConfigStore> = LazyLock::new(ConfigStore::new);

/// Holds at most one [`Configuration`], built lazily from the environment.
///
/// The instance is only ever replaced wholesale: [`reset`](Self::reset)
/// drops it, [`replace`](Self::replace) swaps it, and
/// [`configure`](Self::configure) mutates it in place under the lock.
pub struct ConfigStore {
    env: Arc<dyn EnvLookup>,
    slot: Mutex<Option<Configuration>>,
    /// Thread currently running a `configure` closure.
    configuring: Mutex<Option<ThreadId>>,
}

impl ConfigStore {
    /// Store whose defaults come from the process environment.
    pub fn new() -> Self {
        Self::with_env(ProcessEnv)
    }

    /// Store whose defaults come from `env`.
    pub fn with_env(env: impl EnvLookup + 'static) -> Self {
        Self {
            env: Arc::new(env),
            slot: Mutex::new(None),
            configuring: Mutex::new(None),
        }
    }

    /// Process-wide store.
    pub fn global() -> &'static ConfigStore {
        &GLOBAL
    }

    pub fn env(&self) -> &dyn EnvLookup {
        self.env.as_ref()
    }

    fn lock(&self) -> MutexGuard<'_, Option<Configuration>> {
        if self.configuring_thread() == Some(thread::current().id()) {
            panic!("ConfigStore used from inside its own configure closure");
        }
        // A panic inside `configure` leaves a complete record behind, so the
        // poisoned value is still usable.
        self.slot
            .lock()
            .unwrap_or_else(|poison| poison.into_inner())
    }

    fn configuring_thread(&self) -> Option<ThreadId> {
        *self
            .configuring
            .lock()
            .unwrap_or_else(|poison| poison.into_inner())
    }

    fn current<'a>(
        env: &dyn EnvLookup,
        slot: &'a mut Option<Configuration>,
    ) -> &'a mut Configuration {
        slot.get_or_insert_with(|| {
            tracing::debug!("building default configuration from environment");
            Configuration::from_lookup(env)
        })
    }

    /// Current configuration, building defaults first if absent.
    pub fn get(&self) -> Configuration {
        let mut slot = self.lock();
        Self::current(self.env.as_ref(), &mut slot).clone()
    }

    /// Mutate the current configuration.
    ///
    /// Sequential calls are cumulative: each only overwrites the fields it sets.
    ///
    /// The store stays locked while `f` runs. `f` must not call back into the
    /// same store (`get`, `configure`, or `AgentClass::subclass` with this
    /// store as the source); that re-entry panics.
    pub fn configure<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Configuration) -> R,
    {
        let mut slot = self.lock();
        let _configuring = ConfiguringMark::set(&self.configuring);
        let result = f(Self::current(self.env.as_ref(), &mut slot));
        tracing::debug!(
            config = ?slot.as_ref().map(Configuration::masked),
            "configuration updated"
        );
        result
    }

    /// Drop the current configuration; the next access rebuilds defaults.
    pub fn reset(&self) {
        *self.lock() = None;
        tracing::debug!("configuration reset");
    }

    /// Install `config` wholesale, returning the previous instance if any.
    pub fn replace(&self, config: Configuration) -> Option<Configuration> {
        self.lock().replace(config)
    }

    /// Overlay the YAML file at `path` when it exists.
    ///
    /// The file applies as a whole: if any setting is rejected the store is
    /// left as it was. Returns whether a file was applied.
    pub fn load_file<P: AsRef<Path>>(&self, path: P) -> Result<bool, ConfigurationError> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no configuration file");
            return Ok(false);
        }

        let file = ConfigFile::load(path)?;
        self.configure(|config| config.apply_file(&file, self.env()))?;
        tracing::debug!(path = %path.display(), "configuration file applied");
        Ok(true)
    }

    /// Snapshot the current slot; it is restored when the guard drops.
    pub fn scoped(&self) -> ScopedConfig<'_> {
        let previous = self.lock().clone();
        ScopedConfig {
            store: self,
            previous: Some(previous),
        }
    }
}

impl Default for ConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ConfigStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigStore")
            .field("configuration", &*self.lock())
            .finish_non_exhaustive()
    }
}

/// Marks the current thread as inside `configure` until dropped.
struct ConfiguringMark<'a>(&'a Mutex<Option<ThreadId>>);

impl<'a> ConfiguringMark<'a> {
    fn set(cell: &'a Mutex<Option<ThreadId>>) -> Self {
        *cell.lock().unwrap_or_else(|poison| poison.into_inner()) = Some(thread::current().id());
        Self(cell)
    }
}

impl Drop for ConfiguringMark<'_> {
    fn drop(&mut self) {
        *self.0.lock().unwrap_or_else(|poison| poison.into_inner()) = None;
    }
}

/// Restores a [`ConfigStore`] to an earlier snapshot on drop, including
/// during unwinding.
pub struct ScopedConfig<'a> {
    store: &'a ConfigStore,
    previous: Option<Option<Configuration>>,
}

impl Drop for ScopedConfig<'_> {
    fn drop(&mut self) {
        if let Some(previous) = self.previous.take() {
            *self.store.lock() = previous;
        }
    }
}
