//! mailtpl-core - Core library for mailtpl
//!
//! This crate contains the template schema model, the template form state,
//! the auth config store and its libSQL persistence, shared by the desktop
//! editor and the CLI.

pub mod catalog;
pub mod config;
pub mod db;
pub mod error;
pub mod form;
pub mod markdown;
pub mod models;
pub mod notify;
pub mod permissions;
pub mod services;
pub mod store;
pub mod template_vars;
pub mod util;

pub use error::{Error, Result};
pub use form::{submit, SubmitOutcome, TemplateForm};
pub use models::{PropertySchema, PropertyType, Template};
pub use notify::{Notification, NotificationCategory, NotificationSink};
pub use store::{AuthConfigStore, ConfigMap, ConfigSnapshot, ConfigStore};
