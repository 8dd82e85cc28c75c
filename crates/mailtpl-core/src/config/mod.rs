//! Runtime configuration for the desktop app and the CLI.
//!
//! Everything is read from environment variables (a `.env` file is loaded by
//! the binaries first). Values are trimmed and empty values are ignored.

use std::path::{Path, PathBuf};

use crate::catalog::TemplateCatalog;
use crate::error::Result;
use crate::permissions::StaticPermissions;
use crate::util::{is_truthy, normalize_text_option};

/// Database file override
pub const DB_PATH_ENV: &str = "MAILTPL_DB_PATH";
/// Template catalog JSON override
pub const TEMPLATES_ENV: &str = "MAILTPL_TEMPLATES";
/// Deny updates when truthy
pub const READ_ONLY_ENV: &str = "MAILTPL_READ_ONLY";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditorConfig {
    pub db_path: Option<PathBuf>,
    pub templates_path: Option<PathBuf>,
    pub read_only: bool,
}

impl EditorConfig {
    /// Resolve from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Resolve through an arbitrary variable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            db_path: normalize_text_option(lookup(DB_PATH_ENV)).map(PathBuf::from),
            templates_path: normalize_text_option(lookup(TEMPLATES_ENV)).map(PathBuf::from),
            read_only: lookup(READ_ONLY_ENV).is_some_and(|value| is_truthy(&value)),
        }
    }

    /// Apply explicit overrides (command-line flags win over the environment)
    #[must_use]
    pub fn with_overrides(
        mut self,
        db_path: Option<PathBuf>,
        templates_path: Option<PathBuf>,
    ) -> Self {
        if db_path.is_some() {
            self.db_path = db_path;
        }
        if templates_path.is_some() {
            self.templates_path = templates_path;
        }
        self
    }

    /// Database file to open
    pub fn database_path(&self) -> PathBuf {
        self.db_path.clone().unwrap_or_else(default_db_path)
    }

    pub const fn permissions(&self) -> StaticPermissions {
        StaticPermissions::new(self.read_only)
    }

    /// Load the configured catalog, or the built-in one
    pub fn catalog(&self) -> Result<TemplateCatalog> {
        TemplateCatalog::resolve(self.templates_path.as_deref())
    }
}

/// `<data dir>/mailtpl/mailtpl.db`, falling back to the working directory
pub fn default_db_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| Path::new(".").to_path_buf())
        .join("mailtpl")
        .join("mailtpl.db")
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::permissions::can_update_auth_config;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(key, value)| ((*key).to_string(), (*value).to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn empty_environment_uses_defaults() {
        let config = EditorConfig::from_lookup(lookup(&[]));
        assert_eq!(config, EditorConfig::default());
        assert!(config.database_path().ends_with("mailtpl/mailtpl.db"));
        assert!(can_update_auth_config(&config.permissions()));
    }

    #[test]
    fn environment_values_are_trimmed_and_parsed() {
        let config = EditorConfig::from_lookup(lookup(&[
            (DB_PATH_ENV, " /tmp/auth.db "),
            (TEMPLATES_ENV, "   "),
            (READ_ONLY_ENV, "yes"),
        ]));
        assert_eq!(config.db_path, Some(PathBuf::from("/tmp/auth.db")));
        assert_eq!(config.templates_path, None);
        assert!(config.read_only);
        assert!(!can_update_auth_config(&config.permissions()));
    }

    #[test]
    fn overrides_win_over_environment() {
        let config = EditorConfig::from_lookup(lookup(&[(DB_PATH_ENV, "/tmp/env.db")]))
            .with_overrides(Some(PathBuf::from("/tmp/flag.db")), None);
        assert_eq!(config.database_path(), PathBuf::from("/tmp/flag.db"));
    }
}
