use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] mailtpl_core::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
    #[error("Template not found: {0}")]
    TemplateNotFound(String),
    #[error("Template {template} has no field {key}")]
    UnknownField { template: String, key: String },
    #[error("Invalid assignment `{0}`, expected KEY=VALUE")]
    InvalidAssignment(String),
    #[error("Editor command failed: {0}")]
    EditorFailed(String),
    #[error("Nothing to update: values match the stored config")]
    NothingToUpdate,
    #[error("Update failed: {0}")]
    UpdateFailed(String),
}
