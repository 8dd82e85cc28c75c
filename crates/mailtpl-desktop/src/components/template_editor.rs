//! Email template editor panel
//!
//! One form per template: plain text inputs for the string properties, and a
//! code editor for the designated body field. The form state lives in a
//! [`TemplateForm`]; this component only renders it and wires the events.

use dioxus::prelude::*;
use mailtpl_core::form::{FieldView, SubmitTicket};
use mailtpl_core::permissions::UPDATE_DENIED_HELPER;
use mailtpl_core::template_vars::extract_variables;
use mailtpl_core::{
    ConfigSnapshot, ConfigStore, Notification, NotificationSink, SubmitOutcome, Template,
    TemplateForm,
};

use super::{
    CodeEditor, FormActions, FormSection, FormSectionContent, FormSectionLabel, InformationBox,
    Input,
};
use crate::state::AppState;

#[component]
pub fn TemplateEditor(template: Template) -> Element {
    let state = use_context::<AppState>();
    let colors = (state.theme)().palette();
    let snapshot = state.snapshot;
    let can_update = (state.can_update)();

    let mut form = use_signal(|| TemplateForm::from_snapshot(template.clone(), &snapshot.peek()));

    // Re-derive the form whenever the store's loaded flag changes
    let is_loaded = use_memo(move || snapshot.read().is_loaded);
    use_effect(move || {
        let loaded = is_loaded();
        tracing::debug!(loaded, "Store loaded flag changed");
        form.write().initialize(&snapshot.peek());
    });

    let on_submit = move |()| {
        if !*state.can_update.peek() {
            tracing::warn!("Submit ignored: update not permitted");
            return;
        }
        let Some(store) = state.store.peek().clone() else {
            tracing::warn!("Submit ignored: store not ready");
            return;
        };
        let ticket = match form.write().begin_submit() {
            Ok(ticket) => ticket,
            Err(e) => {
                tracing::warn!("Submit rejected: {}", e);
                return;
            }
        };

        spawn(async move {
            let result = store.update(&ticket.payload).await;
            let (outcome, notification, committed) =
                settle_submit(&mut form.write(), ticket, result, store.snapshot());
            // Publish now so the dirty flag is not computed against a stale snapshot
            let mut published = state.snapshot;
            published.set(committed);
            tracing::debug!(?outcome, "Template submit finished");
            state.notifier.notify(notification);
        });
    };

    let on_reset = move |()| {
        tracing::debug!("Discarding template edits");
        form.write().reset(&snapshot.read());
    };

    let loaded = is_loaded();
    let current = form.read();
    let has_changes = current.has_changes(&snapshot.read());
    let is_submitting = current.is_submitting();
    let body_field = current.body_field();
    let body = current.body().to_string();
    let variables = extract_variables(&body);

    let field_nodes = current.plain_fields().into_iter().map(|field| {
        let value = current.value(&field.key).to_string();
        let node_key = field.key.clone();
        let key = field.key.clone();
        rsx! {
            PlainField {
                key: "{node_key}",
                field,
                value,
                disabled: !can_update,
                on_input: move |value: String| form.write().set_value(key.clone(), value),
            }
        }
    });
    let field_nodes: Vec<Element> = field_nodes.collect();
    drop(current);

    rsx! {
        div {
            class: "template-editor",
            style: "max-width: 860px;",

            h2 {
                style: "margin: 0 0 20px; font-size: 18px; font-weight: 600;",
                "{template.display_title()}"
            }

            FormSection {
                FormSectionContent { loading: !loaded, {field_nodes.into_iter()} }
            }

            FormSection {
                FormSectionContent {
                    loading: !loaded,
                    if let Some(body_field) = body_field {
                        div {
                            style: "display: flex; flex-direction: column; gap: 12px;",
                            FormSectionLabel { "{body_field.title}" }
                            InformationBox {
                                title: "Message variables",
                                description_html: body_field.description_html.clone(),
                                variables,
                            }
                        }
                        CodeEditor {
                            id: "code-id",
                            language: "html",
                            value: body,
                            read_only: !can_update,
                            loading: !loaded,
                            on_change: move |value: String| form.write().set_body(value),
                        }
                    }
                    FormActions {
                        is_submitting,
                        has_changes,
                        disabled: !can_update,
                        helper: (!can_update).then(|| UPDATE_DENIED_HELPER.to_string()),
                        on_reset,
                        on_submit,
                    }
                }
            }

            if !loaded {
                p {
                    style: "font-size: 13px; color: {colors.text_muted};",
                    "Loading auth configuration..."
                }
            }
        }
    }
}

/// Completes a submission against the store's committed snapshot and hands
/// that snapshot back so the panel renders from the same state.
fn settle_submit(
    form: &mut TemplateForm,
    ticket: SubmitTicket,
    result: mailtpl_core::Result<()>,
    committed: ConfigSnapshot,
) -> (SubmitOutcome, Notification, ConfigSnapshot) {
    let (outcome, notification) = form.complete_submit(ticket, result, &committed);
    (outcome, notification, committed)
}

/// Labelled text input for one string property
#[component]
fn PlainField(
    field: FieldView,
    value: String,
    disabled: bool,
    on_input: EventHandler<String>,
) -> Element {
    let state = use_context::<AppState>();
    let colors = (state.theme)().palette();

    rsx! {
        div {
            class: "form-field",
            style: "display: flex; flex-direction: column; gap: 6px;",
            div {
                style: "display: flex; justify-content: space-between; align-items: baseline;",
                label {
                    r#for: "{field.key}",
                    style: "font-size: 14px; font-weight: 500;",
                    "{field.title}"
                }
                if let Some(hint) = field.label_optional_html.clone() {
                    span {
                        class: "form-label-optional markdown",
                        style: "font-size: 12px; color: {colors.text_muted};",
                        dangerous_inner_html: "{hint}",
                    }
                }
            }
            Input {
                id: field.key.clone(),
                value,
                disabled,
                on_input,
            }
            if let Some(description) = field.description_html.clone() {
                p {
                    class: "form-description markdown",
                    style: "margin: 0; font-size: 13px; color: {colors.text_secondary};",
                    dangerous_inner_html: "{description}",
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use mailtpl_core::models::Properties;
    use mailtpl_core::{ConfigMap, Error, NotificationCategory, PropertySchema};

    use super::*;

    const BODY_KEY: &str = "MAILER_TEMPLATES_confirmation_CONTENT";

    fn snapshot(body: &str) -> ConfigSnapshot {
        ConfigSnapshot {
            is_loaded: true,
            config: ConfigMap::from([
                ("SUBJECT".to_string(), "Confirm".to_string()),
                (BODY_KEY.to_string(), body.to_string()),
            ]),
        }
    }

    fn editing_form(stored_body: &str) -> TemplateForm {
        let properties: Properties = [
            ("SUBJECT", PropertySchema::string("Subject")),
            (BODY_KEY, PropertySchema::string("Body")),
        ]
        .into_iter()
        .collect();
        let template = Template::new("confirmation", properties);
        TemplateForm::from_snapshot(template, &snapshot(stored_body))
    }

    #[test]
    fn saved_body_is_clean_against_published_snapshot() {
        let stale = snapshot("<p>old</p>");
        let mut form = editing_form("<p>old</p>");
        form.set_body("<p>new</p>");
        let ticket = form.begin_submit().unwrap();

        let (outcome, notification, published) =
            settle_submit(&mut form, ticket, Ok(()), snapshot("<p>new</p>"));

        assert_eq!(outcome, SubmitOutcome::Saved);
        assert_eq!(notification.category, NotificationCategory::Success);
        assert!(!form.has_changes(&published));
        assert!(form.has_changes(&stale));
    }

    #[test]
    fn failed_save_keeps_edits_dirty() {
        let mut form = editing_form("<p>old</p>");
        form.set_body("<p>new</p>");
        let ticket = form.begin_submit().unwrap();

        let (outcome, notification, published) =
            settle_submit(&mut form, ticket, Err(Error::NotLoaded), snapshot("<p>old</p>"));

        assert!(matches!(outcome, SubmitOutcome::Failed(_)));
        assert_eq!(notification.category, NotificationCategory::Error);
        assert!(!form.is_submitting());
        assert!(form.has_changes(&published));
    }
}
