//! Template picker

use dioxus::prelude::*;

use crate::state::AppState;

/// Sidebar listing the catalog's templates
#[component]
pub fn TemplateSidebar() -> Element {
    let mut state = use_context::<AppState>();
    let colors = (state.theme)().palette();
    let current_id = state.current_template().map(|template| template.id);
    let entries: Vec<(String, String)> = state
        .catalog
        .read()
        .as_ref()
        .map(|catalog| {
            catalog
                .templates()
                .iter()
                .map(|template| (template.id.clone(), template.display_title().to_string()))
                .collect()
        })
        .unwrap_or_default();

    rsx! {
        nav {
            class: "template-sidebar",
            style: "
                width: 220px;
                flex-shrink: 0;
                border-right: 1px solid {colors.border};
                overflow-y: auto;
                background: {colors.bg_secondary};
            ",

            div {
                style: "
                    padding: 16px;
                    font-size: 12px;
                    font-weight: 600;
                    text-transform: uppercase;
                    letter-spacing: 0.04em;
                    color: {colors.text_muted};
                ",
                "Email Templates"
            }

            for (id, title) in entries {
                {
                    let is_selected = current_id.as_deref() == Some(id.as_str());
                    let background = if is_selected { colors.bg_tertiary } else { "transparent" };
                    let color = if is_selected { colors.text_primary } else { colors.text_secondary };
                    let select_id = id.clone();

                    rsx! {
                        div {
                            key: "{id}",
                            class: "template-sidebar-item",
                            style: "
                                padding: 8px 16px;
                                cursor: pointer;
                                background: {background};
                                color: {color};
                            ",
                            onclick: move |_| {
                                tracing::debug!("Selected template {}", select_id);
                                state.selected_template.set(Some(select_id.clone()));
                            },
                            "{title}"
                        }
                    }
                }
            }
        }
    }
}
