//! Single-line text input

use dioxus::prelude::*;

use crate::state::AppState;

#[component]
pub fn Input(
    id: String,
    value: String,
    #[props(default)] disabled: bool,
    on_input: EventHandler<String>,
) -> Element {
    let state = use_context::<AppState>();
    let colors = (state.theme)().palette();
    let background = if disabled {
        colors.bg_tertiary
    } else {
        colors.bg_primary
    };

    rsx! {
        input {
            id: "{id}",
            name: "{id}",
            class: "input",
            r#type: "text",
            value: "{value}",
            disabled,
            oninput: move |evt| on_input.call(evt.value()),
            style: "
                width: 100%;
                box-sizing: border-box;
                padding: 8px 12px;
                border: 1px solid {colors.border};
                border-radius: 6px;
                font-size: 14px;
                background: {background};
                color: {colors.text_primary};
                outline: none;
            ",
        }
    }
}
