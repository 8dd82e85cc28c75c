//! Application state management
//!
//! Global state accessible via Dioxus context providers.

use std::sync::Arc;

use dioxus::prelude::*;
use mailtpl_core::catalog::TemplateCatalog;
use mailtpl_core::{ConfigSnapshot, Template};

use crate::services::{DesktopStore, ToastNotifier};
use crate::theme::ResolvedTheme;

/// Global application state
#[derive(Clone, Copy)]
pub struct AppState {
    /// Templates available for editing
    pub catalog: Signal<Option<TemplateCatalog>>,
    /// Id of the template picked in the sidebar
    pub selected_template: Signal<Option<String>>,
    /// Auth config store, once the database is open
    pub store: Signal<Option<Arc<DesktopStore>>>,
    /// Latest snapshot published by the store
    pub snapshot: Signal<ConfigSnapshot>,
    /// Whether the current user may update the auth config
    pub can_update: Signal<bool>,
    /// Fatal startup error shown instead of the editor
    pub startup_error: Signal<Option<String>>,
    /// Resolved theme (light/dark based on system preference)
    pub theme: Signal<ResolvedTheme>,
    /// Toast delivery
    pub notifier: ToastNotifier,
}

impl AppState {
    /// The template being edited: the sidebar selection, or the first one
    #[must_use]
    pub fn current_template(&self) -> Option<Template> {
        let catalog = self.catalog.read();
        let catalog = catalog.as_ref()?;
        let selected = self.selected_template.read();

        let template = selected
            .as_deref()
            .and_then(|id| catalog.get(id))
            .unwrap_or_else(|| catalog.first());
        Some(template.clone())
    }
}
