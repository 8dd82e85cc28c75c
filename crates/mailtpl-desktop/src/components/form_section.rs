//! Form layout building blocks

use dioxus::prelude::*;

use super::{Button, ButtonVariant};
use crate::state::AppState;

#[component]
pub fn FormSection(children: Element) -> Element {
    rsx! {
        section {
            class: "form-section",
            style: "display: flex; flex-direction: column; gap: 16px; margin-bottom: 24px;",
            {children}
        }
    }
}

#[component]
pub fn FormSectionLabel(children: Element) -> Element {
    rsx! {
        label {
            class: "form-section-label",
            style: "font-size: 14px; font-weight: 500;",
            {children}
        }
    }
}

/// Section body; shows a placeholder instead of the children while loading
#[component]
pub fn FormSectionContent(#[props(default)] loading: bool, children: Element) -> Element {
    let state = use_context::<AppState>();
    let colors = (state.theme)().palette();

    if loading {
        return rsx! {
            div {
                class: "form-section-loading",
                style: "display: flex; flex-direction: column; gap: 12px;",
                for index in 0..3 {
                    div {
                        key: "{index}",
                        style: "
                            height: 36px;
                            border-radius: 6px;
                            background: {colors.bg_tertiary};
                        ",
                    }
                }
            }
        };
    }

    rsx! {
        div {
            class: "form-section-content",
            style: "display: flex; flex-direction: column; gap: 16px;",
            {children}
        }
    }
}

/// Cancel/Save row.
///
/// Both actions need unsaved changes and no submission in flight; Save is
/// also blocked when `disabled`. `helper` is shown next to the buttons.
#[component]
pub fn FormActions(
    is_submitting: bool,
    has_changes: bool,
    #[props(default)] disabled: bool,
    helper: Option<String>,
    on_reset: EventHandler<()>,
    on_submit: EventHandler<()>,
) -> Element {
    let state = use_context::<AppState>();
    let colors = (state.theme)().palette();

    rsx! {
        div {
            class: "form-actions",
            style: "
                display: flex;
                align-items: center;
                justify-content: flex-end;
                gap: 8px;
                width: 100%;
                padding-top: 16px;
                border-top: 1px solid {colors.border};
            ",
            if let Some(text) = helper {
                span {
                    class: "form-actions-helper",
                    style: "margin-right: auto; font-size: 13px; color: {colors.text_muted};",
                    "{text}"
                }
            }
            Button {
                variant: ButtonVariant::Secondary,
                disabled: !has_changes || is_submitting,
                onclick: move |_| on_reset.call(()),
                "Cancel"
            }
            Button {
                variant: ButtonVariant::Primary,
                disabled: disabled || !has_changes,
                loading: is_submitting,
                onclick: move |_| on_submit.call(()),
                "Save"
            }
        }
    }
}
