//! Code editor for template bodies
//!
//! A controlled, monospaced textarea: word wrap off, spellcheck off, no
//! context menu. The parent owns the value.

use dioxus::prelude::*;

use crate::state::AppState;

#[component]
pub fn CodeEditor(
    id: String,
    /// Language label shown in the status line
    #[props(into)]
    language: String,
    value: String,
    #[props(default)] read_only: bool,
    #[props(default)] loading: bool,
    on_change: EventHandler<String>,
) -> Element {
    let state = use_context::<AppState>();
    let colors = (state.theme)().palette();
    let line_count = value.lines().count().max(1);

    if loading {
        return rsx! {
            div {
                class: "code-editor code-editor-loading",
                style: "
                    height: 384px;
                    border: 1px solid {colors.border};
                    border-radius: 6px;
                    background: {colors.bg_tertiary};
                ",
            }
        };
    }

    rsx! {
        div {
            class: "code-editor",
            style: "
                display: flex;
                flex-direction: column;
                height: 384px;
                border: 1px solid {colors.border};
                border-radius: 6px;
                overflow: hidden;
                background: {colors.code_bg};
            ",
            textarea {
                id: "{id}",
                class: "code-editor-input",
                value: "{value}",
                readonly: read_only,
                spellcheck: false,
                wrap: "off",
                "data-language": "{language}",
                oncontextmenu: move |evt| evt.prevent_default(),
                oninput: move |evt| on_change.call(evt.value()),
                style: "
                    flex: 1;
                    resize: none;
                    border: none;
                    padding: 12px;
                    font-family: ui-monospace, SFMono-Regular, Menlo, monospace;
                    font-size: 13px;
                    line-height: 1.5;
                    white-space: pre;
                    overflow: auto;
                    background: transparent;
                    color: {colors.text_primary};
                    outline: none;
                ",
            }
            div {
                class: "code-editor-status",
                style: "
                    display: flex;
                    justify-content: space-between;
                    padding: 4px 12px;
                    border-top: 1px solid {colors.border};
                    font-size: 11px;
                    color: {colors.text_muted};
                    background: {colors.bg_secondary};
                ",
                span { "{language.to_uppercase()}" }
                span {
                    if read_only {
                        "Read only · "
                    }
                    "{line_count} lines"
                }
            }
        }
    }
}
