//! Collapsible callout

use dioxus::prelude::*;
use mailtpl_core::template_vars::TemplateVariable;

use super::{Button, ButtonVariant};
use crate::state::AppState;

/// Callout with a markdown body and the variables used by the current body
#[component]
pub fn InformationBox(
    title: String,
    /// Rendered HTML
    description_html: Option<String>,
    #[props(default)] variables: Vec<TemplateVariable>,
    #[props(default = true)] default_visible: bool,
) -> Element {
    let state = use_context::<AppState>();
    let colors = (state.theme)().palette();
    let mut visible = use_signal(|| default_visible);
    let toggle_label = if visible() { "Hide" } else { "Show" };

    rsx! {
        div {
            class: "information-box",
            style: "
                border: 1px solid {colors.border};
                border-radius: 6px;
                padding: 12px 16px;
                background: {colors.bg_secondary};
            ",
            div {
                style: "display: flex; align-items: center; justify-content: space-between;",
                span { style: "font-weight: 500;", "{title}" }
                Button {
                    variant: ButtonVariant::Ghost,
                    onclick: move |_| visible.set(!visible()),
                    "{toggle_label}"
                }
            }

            if visible() {
                if let Some(html) = description_html {
                    div {
                        class: "information-box-body markdown",
                        style: "color: {colors.text_secondary}; font-size: 13px;",
                        dangerous_inner_html: "{html}",
                    }
                }

                if !variables.is_empty() {
                    div {
                        class: "information-box-variables",
                        style: "margin-top: 8px; font-size: 13px; color: {colors.text_secondary};",
                        span { "Used in this template: " }
                        for variable in variables {
                            {
                                let color = if variable.known { colors.text_primary } else { colors.warning };
                                let hint = if variable.known { "" } else { " (unknown)" };
                                rsx! {
                                    code {
                                        key: "{variable.name}",
                                        style: "margin-right: 8px; color: {color};",
                                        "{{{{ .{variable.name} }}}}{hint}"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
