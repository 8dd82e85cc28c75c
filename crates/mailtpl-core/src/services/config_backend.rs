//! libSQL-backed `ConfigBackend` shared by the desktop app and the CLI.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::sync::Mutex;

use crate::db::{AuthConfigRepository, Database, LibSqlAuthConfigRepository, StoredConfigEntry};
use crate::store::{ConfigBackend, ConfigMap};
use crate::Result;

/// Thread-safe service for auth config persistence.
#[derive(Clone)]
pub struct LibSqlConfigBackend {
    db: Arc<Mutex<Database>>,
    db_path: Option<PathBuf>,
}

impl LibSqlConfigBackend {
    /// Open the backend at the given filesystem path, creating parent directories.
    pub async fn open_path(db_path: impl Into<PathBuf>) -> Result<Self> {
        let db_path = db_path.into();
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let db = Database::open(&db_path).await?;
        Ok(Self {
            db: Arc::new(Mutex::new(db)),
            db_path: Some(db_path),
        })
    }

    /// Open an in-memory backend (primarily for tests).
    pub async fn open_in_memory() -> Result<Self> {
        let db = Database::open_in_memory().await?;
        Ok(Self {
            db: Arc::new(Mutex::new(db)),
            db_path: None,
        })
    }

    /// Path of the database file, `None` when in memory
    pub fn db_path(&self) -> Option<&Path> {
        self.db_path.as_deref()
    }

    /// Stored entries with their update timestamps
    pub async fn list_entries(&self) -> Result<Vec<StoredConfigEntry>> {
        let db = self.db.lock().await;
        let repo = LibSqlAuthConfigRepository::new(db.connection());
        repo.list_entries().await
    }
}

impl ConfigBackend for LibSqlConfigBackend {
    async fn fetch(&self) -> Result<ConfigMap> {
        let db = self.db.lock().await;
        let repo = LibSqlAuthConfigRepository::new(db.connection());
        repo.load_all().await
    }

    async fn persist(&self, patch: &ConfigMap) -> Result<()> {
        let db = self.db.lock().await;
        let repo = LibSqlAuthConfigRepository::new(db.connection());
        repo.upsert(patch).await
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    use super::*;
    use crate::store::{AuthConfigStore, ConfigStore};

    #[tokio::test(flavor = "multi_thread")]
    async fn store_round_trips_through_libsql() {
        let backend = LibSqlConfigBackend::open_in_memory().await.unwrap();
        let store = AuthConfigStore::new(backend);
        store.load().await.unwrap();

        let payload: ConfigMap = [("MAILER_SUBJECTS_INVITE".to_string(), "Join us".to_string())]
            .into_iter()
            .collect();
        store.update(&payload).await.unwrap();

        assert_eq!(store.backend().fetch().await.unwrap(), payload);
        assert_eq!(store.backend().list_entries().await.unwrap().len(), 1);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn file_backend_persists_across_reopen() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("nested").join("mailtpl.db");

        {
            let backend = LibSqlConfigBackend::open_path(&path).await.unwrap();
            assert_eq!(backend.db_path(), Some(path.as_path()));
            let patch: ConfigMap = [("SITE_URL".to_string(), "https://example.com".to_string())]
                .into_iter()
                .collect();
            backend.persist(&patch).await.unwrap();
        }

        let reopened = LibSqlConfigBackend::open_path(&path).await.unwrap();
        let config = reopened.fetch().await.unwrap();
        assert_eq!(config.get("SITE_URL").map(String::as_str), Some("https://example.com"));
    }
}
