//! Auth config store
//!
//! The store is the source of truth the editor reads from and writes to. It
//! holds the last fetched config plus a loaded flag and publishes every change
//! through a `watch` channel, so views subscribe to load transitions instead
//! of polling.

use std::collections::BTreeMap;

use tokio::sync::watch;

use crate::error::{Error, Result};

/// Config keys to values. Ordered so comparisons and payloads are stable.
pub type ConfigMap = BTreeMap<String, String>;

/// Point-in-time view of the store
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigSnapshot {
    /// Whether the config has been fetched at least once
    pub is_loaded: bool,
    /// Last known committed config
    pub config: ConfigMap,
}

impl ConfigSnapshot {
    /// A loaded snapshot holding `config`
    pub const fn loaded(config: ConfigMap) -> Self {
        Self {
            is_loaded: true,
            config,
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.config.get(key).map(String::as_str)
    }
}

/// Where the store fetches from and persists to
#[allow(async_fn_in_trait)]
pub trait ConfigBackend {
    /// Fetch the full config
    async fn fetch(&self) -> Result<ConfigMap>;

    /// Persist a partial update. Either every key is written or none is.
    async fn persist(&self, patch: &ConfigMap) -> Result<()>;
}

/// Interface the editor depends on
#[allow(async_fn_in_trait)]
pub trait ConfigStore {
    /// Current snapshot
    fn snapshot(&self) -> ConfigSnapshot;

    /// Receive every subsequent snapshot change
    fn subscribe(&self) -> watch::Receiver<ConfigSnapshot>;

    /// Apply a partial update
    async fn update(&self, payload: &ConfigMap) -> Result<()>;

    fn is_loaded(&self) -> bool {
        self.snapshot().is_loaded
    }

    fn config(&self) -> ConfigMap {
        self.snapshot().config
    }
}

/// `ConfigStore` backed by a `ConfigBackend`
pub struct AuthConfigStore<B> {
    backend: B,
    state: watch::Sender<ConfigSnapshot>,
}

impl<B: ConfigBackend> AuthConfigStore<B> {
    /// Create an unloaded store; call [`Self::load`] to fetch
    pub fn new(backend: B) -> Self {
        let (state, _) = watch::channel(ConfigSnapshot::default());
        Self { backend, state }
    }

    /// Fetch the config and mark the store loaded.
    ///
    /// Calling it again reloads and notifies subscribers again.
    pub async fn load(&self) -> Result<()> {
        let config = self.backend.fetch().await?;
        tracing::debug!("Loaded auth config with {} keys", config.len());
        self.state.send_replace(ConfigSnapshot::loaded(config));
        Ok(())
    }

    pub const fn backend(&self) -> &B {
        &self.backend
    }
}

impl<B: ConfigBackend> ConfigStore for AuthConfigStore<B> {
    fn snapshot(&self) -> ConfigSnapshot {
        self.state.borrow().clone()
    }

    fn subscribe(&self) -> watch::Receiver<ConfigSnapshot> {
        self.state.subscribe()
    }

    async fn update(&self, payload: &ConfigMap) -> Result<()> {
        if !self.state.borrow().is_loaded {
            return Err(Error::NotLoaded);
        }

        self.backend.persist(payload).await?;
        self.state.send_modify(|snapshot| {
            snapshot
                .config
                .extend(payload.iter().map(|(key, value)| (key.clone(), value.clone())));
        });
        tracing::info!("Updated {} auth config keys", payload.len());
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! In-memory backends shared by store and form tests.

    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::sync::Mutex;

    use super::{ConfigBackend, ConfigMap};
    use crate::error::{Error, Result};

    #[derive(Default)]
    pub struct MemoryBackend {
        pub config: Mutex<ConfigMap>,
        pub fail_updates: AtomicBool,
        pub persist_calls: AtomicUsize,
        pub last_patch: Mutex<Option<ConfigMap>>,
    }

    impl MemoryBackend {
        pub fn with(entries: &[(&str, &str)]) -> Self {
            let backend = Self::default();
            *backend.config.lock().unwrap() = entries
                .iter()
                .map(|(key, value)| ((*key).to_string(), (*value).to_string()))
                .collect();
            backend
        }

        pub fn failing(self) -> Self {
            self.fail_updates.store(true, Ordering::SeqCst);
            self
        }
    }

    impl ConfigBackend for MemoryBackend {
        async fn fetch(&self) -> Result<ConfigMap> {
            Ok(self.config.lock().unwrap().clone())
        }

        async fn persist(&self, patch: &ConfigMap) -> Result<()> {
            self.persist_calls.fetch_add(1, Ordering::SeqCst);
            *self.last_patch.lock().unwrap() = Some(patch.clone());
            if self.fail_updates.load(Ordering::SeqCst) {
                return Err(Error::Database("simulated update failure".to_string()));
            }
            self.config
                .lock()
                .unwrap()
                .extend(patch.iter().map(|(k, v)| (k.clone(), v.clone())));
            Ok(())
        }
    }
}
