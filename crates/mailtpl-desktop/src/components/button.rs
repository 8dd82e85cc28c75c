//! Button component

use dioxus::prelude::*;

use crate::state::AppState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Ghost,
}

#[component]
pub fn Button(
    #[props(default)] variant: ButtonVariant,
    #[props(default)] disabled: bool,
    /// Shows a busy indicator and blocks clicks
    #[props(default)]
    loading: bool,
    onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    let state = use_context::<AppState>();
    let colors = (state.theme)().palette();

    let (background, color, border) = match variant {
        ButtonVariant::Primary => (colors.accent, colors.accent_text, colors.accent),
        ButtonVariant::Secondary => (colors.bg_primary, colors.text_primary, colors.border),
        ButtonVariant::Ghost => ("transparent", colors.text_secondary, "transparent"),
    };
    let inactive = disabled || loading;
    let opacity = if inactive { "0.5" } else { "1" };
    let cursor = if inactive { "not-allowed" } else { "pointer" };

    rsx! {
        button {
            class: "button",
            r#type: "button",
            disabled: inactive,
            "aria-busy": loading,
            style: "
                display: inline-flex;
                align-items: center;
                gap: 6px;
                padding: 6px 12px;
                border: 1px solid {border};
                border-radius: 6px;
                background: {background};
                color: {color};
                font-size: 13px;
                opacity: {opacity};
                cursor: {cursor};
            ",
            onclick: move |evt| {
                if let Some(handler) = &onclick {
                    handler.call(evt);
                }
            },
            if loading {
                span { class: "spinner" }
            }
            {children}
        }
    }
}
