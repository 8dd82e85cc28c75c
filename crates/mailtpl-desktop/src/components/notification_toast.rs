//! Toast area

use dioxus::prelude::*;
use mailtpl_core::NotificationCategory;

use crate::state::AppState;

#[component]
pub fn NotificationToast() -> Element {
    let state = use_context::<AppState>();
    let colors = (state.theme)().palette();
    let Some(active) = (state.notifier.toast())() else {
        return rsx! {};
    };

    let accent = match active.notification.category {
        NotificationCategory::Success => colors.success,
        NotificationCategory::Error => colors.error,
    };
    let id = active.id;

    rsx! {
        div {
            class: "toast",
            role: "status",
            style: "
                position: fixed;
                right: 24px;
                bottom: 24px;
                display: flex;
                align-items: center;
                gap: 12px;
                padding: 12px 16px;
                border: 1px solid {colors.border};
                border-left: 4px solid {accent};
                border-radius: 6px;
                background: {colors.bg_primary};
                color: {colors.text_primary};
                box-shadow: 0 4px 12px rgba(0, 0, 0, 0.15);
            ",
            span { "{active.notification.message}" }
            span {
                style: "cursor: pointer; color: {colors.text_muted};",
                onclick: move |_| state.notifier.dismiss(id),
                "×"
            }
        }
    }
}
