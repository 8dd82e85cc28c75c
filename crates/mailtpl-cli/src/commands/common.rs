use std::env;
use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};

use mailtpl_core::catalog::TemplateCatalog;
use mailtpl_core::config::EditorConfig;
use mailtpl_core::services::LibSqlConfigBackend;
use mailtpl_core::{AuthConfigStore, Template};

use crate::error::CliError;

pub type CliStore = AuthConfigStore<LibSqlConfigBackend>;

/// Open the configured database and load the store
pub async fn open_store(config: &EditorConfig) -> Result<CliStore, CliError> {
    let db_path = config.database_path();
    tracing::debug!("Opening auth config database at {}", db_path.display());

    let backend = LibSqlConfigBackend::open_path(db_path).await?;
    let store = AuthConfigStore::new(backend);
    store.load().await?;
    Ok(store)
}

pub fn find_template(catalog: &TemplateCatalog, id: &str) -> Result<Template, CliError> {
    catalog
        .get(id)
        .cloned()
        .ok_or_else(|| CliError::TemplateNotFound(id.trim().to_string()))
}

/// Split `KEY=VALUE`. The value is kept verbatim and may be empty.
pub fn parse_assignment(raw: &str) -> Result<(String, String), CliError> {
    let Some((key, value)) = raw.split_once('=') else {
        return Err(CliError::InvalidAssignment(raw.to_string()));
    };

    let key = key.trim();
    if key.is_empty() {
        return Err(CliError::InvalidAssignment(raw.to_string()));
    }

    Ok((key.to_string(), value.to_string()))
}

pub fn format_timestamp(timestamp_ms: i64) -> String {
    chrono::DateTime::from_timestamp_millis(timestamp_ms).map_or_else(
        || timestamp_ms.to_string(),
        |date_time| date_time.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
    )
}

/// Open `initial_content` in the user's editor and return the saved text.
///
/// Trailing whitespace added by editors is dropped.
pub fn capture_editor_input_with_initial(initial_content: &str) -> Result<String, CliError> {
    let editor = preferred_editor();
    let temp_file = create_temp_body_file_path();
    std::fs::write(&temp_file, initial_content)?;

    let launch_result = launch_editor(&editor, &temp_file);
    let edited = std::fs::read_to_string(&temp_file)?;
    let _ = std::fs::remove_file(&temp_file);

    launch_result?;
    Ok(edited.trim_end().to_string())
}

pub fn launch_editor(editor: &str, file_path: &Path) -> Result<(), CliError> {
    match Command::new(editor).arg(file_path).status() {
        Ok(status) => {
            if status.success() {
                Ok(())
            } else {
                Err(CliError::EditorFailed(format!(
                    "`{editor}` exited with status {status}"
                )))
            }
        }
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            // Editor commands with args, e.g. "code --wait"
            let mut parts = editor.split_whitespace();
            let Some(program) = parts.next() else {
                return Err(CliError::EditorFailed("empty EDITOR command".into()));
            };

            let mut command = Command::new(program);
            command.args(parts).arg(file_path);

            let status = command.status()?;
            if status.success() {
                Ok(())
            } else {
                Err(CliError::EditorFailed(format!(
                    "`{editor}` exited with status {status}"
                )))
            }
        }
        Err(err) => Err(CliError::Io(err)),
    }
}

pub fn preferred_editor() -> String {
    env::var("VISUAL")
        .or_else(|_| env::var("EDITOR"))
        .unwrap_or_else(|_| default_editor().to_string())
}

pub const fn default_editor() -> &'static str {
    if cfg!(windows) {
        "notepad"
    } else {
        "vi"
    }
}

pub fn create_temp_body_file_path() -> PathBuf {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |duration| duration.as_nanos());
    env::temp_dir().join(format!("mailtpl-body-{}-{now}.html", std::process::id()))
}
