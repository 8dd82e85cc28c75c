//! Auth config store backed by the local libSQL database

use std::sync::Arc;

use mailtpl_core::config::EditorConfig;
use mailtpl_core::services::LibSqlConfigBackend;
use mailtpl_core::{AuthConfigStore, Result};

/// Store type used by the desktop app
pub type DesktopStore = AuthConfigStore<LibSqlConfigBackend>;

/// Open the configured database and wrap it in a store.
///
/// The store is returned unloaded so callers can subscribe before the first
/// snapshot arrives.
pub async fn open_config_store(config: &EditorConfig) -> Result<Arc<DesktopStore>> {
    let db_path = config.database_path();
    tracing::info!("Opening auth config database at {}", db_path.display());

    let backend = LibSqlConfigBackend::open_path(db_path).await?;
    Ok(Arc::new(AuthConfigStore::new(backend)))
}
