//! Auth config repository implementation

use std::sync::LazyLock;

use libsql::Connection;
use regex::Regex;
use serde::Serialize;

use crate::error::{Error, Result};
use crate::store::ConfigMap;
use crate::util::unix_timestamp_millis;

static CONFIG_KEY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_]+$").expect("Invalid regex"));

/// A stored config value with its last write time
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoredConfigEntry {
    pub key: String,
    pub value: String,
    /// Last update timestamp (Unix ms)
    pub updated_at: i64,
}

/// Reject keys that are not `[A-Za-z0-9_]+`
pub fn validate_config_key(key: &str) -> Result<()> {
    if CONFIG_KEY_RE.is_match(key) {
        Ok(())
    } else {
        Err(Error::InvalidInput(format!("invalid config key `{key}`")))
    }
}

/// Trait for auth config storage operations (async)
#[allow(async_fn_in_trait)]
pub trait AuthConfigRepository {
    /// Load every stored key
    async fn load_all(&self) -> Result<ConfigMap>;

    /// Stored entries with timestamps, ordered by key
    async fn list_entries(&self) -> Result<Vec<StoredConfigEntry>>;

    /// Write every key of `patch` in one transaction
    async fn upsert(&self, patch: &ConfigMap) -> Result<()>;
}

/// libSQL implementation of `AuthConfigRepository`
pub struct LibSqlAuthConfigRepository<'a> {
    conn: &'a Connection,
}

impl<'a> LibSqlAuthConfigRepository<'a> {
    /// Create a new repository with the given connection
    pub const fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }
}

impl AuthConfigRepository for LibSqlAuthConfigRepository<'_> {
    async fn load_all(&self) -> Result<ConfigMap> {
        let mut rows = self
            .conn
            .query("SELECT key, value FROM auth_config", ())
            .await?;

        let mut config = ConfigMap::new();
        while let Some(row) = rows.next().await? {
            let key: String = row.get(0)?;
            let value: String = row.get(1)?;
            config.insert(key, value);
        }
        Ok(config)
    }

    async fn list_entries(&self) -> Result<Vec<StoredConfigEntry>> {
        let mut rows = self
            .conn
            .query(
                "SELECT key, value, updated_at FROM auth_config ORDER BY key",
                (),
            )
            .await?;

        let mut entries = Vec::new();
        while let Some(row) = rows.next().await? {
            entries.push(StoredConfigEntry {
                key: row.get(0)?,
                value: row.get(1)?,
                updated_at: row.get(2)?,
            });
        }
        Ok(entries)
    }

    async fn upsert(&self, patch: &ConfigMap) -> Result<()> {
        for key in patch.keys() {
            validate_config_key(key)?;
        }
        if patch.is_empty() {
            return Ok(());
        }

        let now = unix_timestamp_millis();
        self.conn.execute("BEGIN TRANSACTION", ()).await?;

        for (key, value) in patch {
            if let Err(e) = self
                .conn
                .execute(
                    "INSERT INTO auth_config (key, value, updated_at) VALUES (?1, ?2, ?3)
                     ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
                    libsql::params![key.as_str(), value.as_str(), now],
                )
                .await
            {
                self.conn.execute("ROLLBACK", ()).await.ok();
                return Err(e.into());
            }
        }

        if let Err(e) = self.conn.execute("COMMIT", ()).await {
            self.conn.execute("ROLLBACK", ()).await.ok();
            return Err(e.into());
        }

        tracing::debug!("Persisted {} auth config keys", patch.len());
        Ok(())
    }
}
