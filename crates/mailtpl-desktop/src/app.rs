//! Main application component

use std::sync::Arc;

use dioxus::prelude::*;
use mailtpl_core::catalog::TemplateCatalog;
use mailtpl_core::config::EditorConfig;
use mailtpl_core::permissions::can_update_auth_config;
use mailtpl_core::{ConfigSnapshot, ConfigStore};

use crate::components::{NotificationToast, TemplateEditor, TemplateSidebar};
use crate::services::{open_config_store, ActiveToast, DesktopStore, ToastNotifier};
use crate::state::AppState;
use crate::theme::ResolvedTheme;

/// Root application component
#[component]
pub fn App() -> Element {
    let mut catalog = use_signal(|| None::<TemplateCatalog>);
    let selected_template = use_signal(|| None::<String>);
    let mut store: Signal<Option<Arc<DesktopStore>>> = use_signal(|| None);
    let mut snapshot = use_signal(ConfigSnapshot::default);
    let mut can_update = use_signal(|| false);
    let mut startup_error = use_signal(|| None::<String>);
    let theme = use_signal(ResolvedTheme::system);
    let toast = use_signal(|| None::<ActiveToast>);
    let next_toast_id = use_signal(|| 0_u64);
    let mut initialized = use_signal(|| false);

    // Open the database and load the store (only once)
    use_effect(move || {
        if initialized() {
            return;
        }
        initialized.set(true); // Mark immediately to prevent double init

        spawn(async move {
            let config = EditorConfig::from_env();
            can_update.set(can_update_auth_config(&config.permissions()));

            match config.catalog() {
                Ok(loaded) => {
                    tracing::info!("Loaded {} email templates", loaded.templates().len());
                    catalog.set(Some(loaded));
                }
                Err(e) => {
                    tracing::error!("Failed to load template catalog: {}", e);
                    startup_error.set(Some(format!("Failed to load template catalog: {e}")));
                    return;
                }
            }

            let opened = match open_config_store(&config).await {
                Ok(opened) => opened,
                Err(e) => {
                    tracing::error!("Failed to open auth config database: {}", e);
                    startup_error.set(Some(format!("Failed to open database: {e}")));
                    return;
                }
            };

            // Forward every published snapshot into the UI
            let mut receiver = opened.subscribe();
            spawn(async move {
                while receiver.changed().await.is_ok() {
                    let next = receiver.borrow_and_update().clone();
                    tracing::debug!(loaded = next.is_loaded, keys = next.config.len(), "Store snapshot");
                    snapshot.set(next);
                }
            });

            store.set(Some(Arc::clone(&opened)));

            if let Err(e) = opened.load().await {
                tracing::error!("Failed to load auth config: {}", e);
                startup_error.set(Some(format!("Failed to load auth config: {e}")));
            }
        });
    });

    let state = use_context_provider(|| AppState {
        catalog,
        selected_template,
        store,
        snapshot,
        can_update,
        startup_error,
        theme,
        notifier: ToastNotifier::new(toast, next_toast_id),
    });

    let current_theme = theme();
    let colors = current_theme.palette();
    let current_template = state.current_template();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("/assets/mailtpl.css") }

        div {
            class: "app-container",
            "data-theme": "{current_theme.as_attr()}",
            style: "
                display: flex;
                height: 100vh;
                font-family: system-ui, -apple-system, sans-serif;
                font-size: 14px;
                background: {colors.bg_primary};
                color: {colors.text_primary};
            ",

            TemplateSidebar {}

            main {
                style: "flex: 1; overflow-y: auto; padding: 24px 32px;",

                if let Some(message) = startup_error() {
                    div {
                        class: "startup-error",
                        style: "
                            padding: 16px;
                            border: 1px solid {colors.error};
                            border-radius: 6px;
                            color: {colors.error};
                        ",
                        "{message}"
                    }
                } else if let Some(template) = current_template {
                    TemplateEditor { key: "{template.id}", template }
                }
            }

            NotificationToast {}
        }
    }
}
