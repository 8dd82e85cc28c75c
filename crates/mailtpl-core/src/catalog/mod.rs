//! Template catalog
//!
//! The set of email templates the editor offers. A built-in catalog covering
//! the auth mailer ships with the crate; a JSON file with the same shape can
//! replace it.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::models::Template;

const BUILTIN_CATALOG: &str = include_str!("templates.json");

#[derive(Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
struct CatalogFile {
    templates: Vec<Template>,
}

/// Ordered, id-unique collection of templates
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateCatalog {
    templates: Vec<Template>,
}

impl TemplateCatalog {
    /// The catalog embedded in the crate
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_CATALOG)
    }

    /// Parse a catalog from a `{ "templates": [...] }` payload
    pub fn from_json(payload: &str) -> Result<Self> {
        let file: CatalogFile = serde_json::from_str(payload)?;
        Self::new(file.templates)
    }

    /// Load a catalog file from disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let payload = std::fs::read_to_string(path)?;
        tracing::debug!("Loading template catalog from {}", path.display());
        Self::from_json(&payload)
    }

    /// Load `path` when given, otherwise the built-in catalog
    pub fn resolve(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Self::builtin(),
        }
    }

    /// Build a catalog, rejecting empty lists and duplicate ids
    pub fn new(templates: Vec<Template>) -> Result<Self> {
        if templates.is_empty() {
            return Err(Error::InvalidInput(
                "template catalog must not be empty".to_string(),
            ));
        }
        for (index, template) in templates.iter().enumerate() {
            if template.id.trim().is_empty() {
                return Err(Error::InvalidInput(format!(
                    "template #{index} has an empty id"
                )));
            }
            if templates[..index].iter().any(|other| other.id == template.id) {
                return Err(Error::InvalidInput(format!(
                    "duplicate template id `{}`",
                    template.id
                )));
            }
        }
        Ok(Self { templates })
    }

    pub fn templates(&self) -> &[Template] {
        &self.templates
    }

    /// Find a template by id, ignoring ASCII case
    pub fn get(&self, id: &str) -> Option<&Template> {
        let id = id.trim();
        self.templates
            .iter()
            .find(|template| template.id.eq_ignore_ascii_case(id))
    }

    /// First template, used as the default selection
    pub fn first(&self) -> &Template {
        &self.templates[0]
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn builtin_catalog_covers_auth_mailer_templates() {
        let catalog = TemplateCatalog::builtin().unwrap();
        let ids: Vec<&str> = catalog.templates().iter().map(|t| t.id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["CONFIRMATION", "INVITE", "MAGIC_LINK", "RECOVERY", "EMAIL_CHANGE"]
        );

        for template in catalog.templates() {
            assert!(
                template.body_property().is_some(),
                "{} should declare a body",
                template.id
            );
        }
    }

    #[test]
    fn lookup_ignores_case() {
        let catalog = TemplateCatalog::builtin().unwrap();
        assert_eq!(catalog.get("magic_link").map(|t| t.id.as_str()), Some("MAGIC_LINK"));
        assert!(catalog.get("unknown").is_none());
        assert_eq!(catalog.first().id, "CONFIRMATION");
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let payload = r#"{ "templates": [
            { "id": "A", "properties": {} },
            { "id": "A", "properties": {} }
        ] }"#;
        let error = TemplateCatalog::from_json(payload).unwrap_err();
        assert!(error.to_string().contains("duplicate template id"));
    }

    #[test]
    fn empty_catalog_is_rejected() {
        assert!(TemplateCatalog::from_json(r#"{ "templates": [] }"#).is_err());
    }

    #[test]
    fn catalog_file_replaces_builtin() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{ "templates": [{{ "id": "welcome", "title": "Welcome", "properties": {{
                "MAILER_TEMPLATES_welcome_CONTENT": {{ "type": "string", "title": "Body" }}
            }} }}] }}"#
        )
        .unwrap();

        let catalog = TemplateCatalog::resolve(Some(file.path())).unwrap();
        assert_eq!(catalog.templates().len(), 1);
        assert_eq!(catalog.first().display_title(), "Welcome");
    }
}
