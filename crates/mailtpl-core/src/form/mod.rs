//! Template form state
//!
//! `TemplateForm` is the single value object behind one template editor. All
//! plain fields and the designated body field live in the same value map; the
//! code editor is a view over the body slot. A baseline copy of the values
//! drives the dirty flag.

use crate::error::{Error, Result};
use crate::markdown::{render_inline_markdown, render_markdown};
use crate::models::Template;
use crate::notify::{
    Notification, NotificationSink, UPDATE_FAILURE_MESSAGE, UPDATE_SUCCESS_MESSAGE,
};
use crate::store::{ConfigMap, ConfigSnapshot, ConfigStore};

/// A plain text input to render
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldView {
    pub key: String,
    pub title: String,
    /// Rendered helper text (inline HTML)
    pub description_html: Option<String>,
    /// Rendered label hint (inline HTML)
    pub label_optional_html: Option<String>,
}

/// The code editor block for the designated body field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BodyFieldView {
    pub key: String,
    pub title: String,
    /// Rendered "Message variables" callout body (block HTML)
    pub description_html: Option<String>,
}

/// Values captured by [`TemplateForm::begin_submit`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitTicket {
    /// What is sent to the store
    pub payload: ConfigMap,
    /// Form values at submit time; they become the baseline on success
    values: ConfigMap,
}

/// Result of a completed submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Saved,
    Failed(String),
}

/// Editable state of one template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateForm {
    template: Template,
    body_key: String,
    values: ConfigMap,
    baseline: ConfigMap,
    submitting: bool,
}

impl TemplateForm {
    /// Create a form with empty values for every declared key
    pub fn new(template: Template) -> Self {
        let body_key = template.body_key();
        let mut form = Self {
            template,
            body_key,
            values: ConfigMap::new(),
            baseline: ConfigMap::new(),
            submitting: false,
        };
        form.initialize(&ConfigSnapshot::default());
        form
    }

    /// Create a form initialized from the store's current snapshot
    pub fn from_snapshot(template: Template, snapshot: &ConfigSnapshot) -> Self {
        let mut form = Self::new(template);
        form.initialize(snapshot);
        form
    }

    /// Derive values from the schema's keys matched against the store.
    ///
    /// Missing keys, and every plain key while the store is not loaded,
    /// default to the empty string. Values and baseline are both replaced.
    pub fn initialize(&mut self, snapshot: &ConfigSnapshot) {
        let lookup = |key: &str| -> String {
            if snapshot.is_loaded {
                snapshot.get(key).unwrap_or_default().to_string()
            } else {
                String::new()
            }
        };

        let mut values: ConfigMap = self
            .template
            .properties
            .keys()
            .map(|key| (key.to_string(), lookup(key)))
            .collect();
        // The body slot follows the store even before it reports loaded
        values.insert(
            self.body_key.clone(),
            snapshot.get(&self.body_key).unwrap_or_default().to_string(),
        );

        tracing::debug!(
            template = %self.template.id,
            loaded = snapshot.is_loaded,
            "Initialized template form"
        );
        self.baseline.clone_from(&values);
        self.values = values;
    }

    /// Discard all edits and adopt the store's full live config.
    ///
    /// Unlike [`Self::initialize`] this is not limited to the schema's keys.
    pub fn reset(&mut self, snapshot: &ConfigSnapshot) {
        let mut values = snapshot.config.clone();
        values.entry(self.body_key.clone()).or_default();
        self.baseline.clone_from(&values);
        self.values = values;
    }

    pub const fn template(&self) -> &Template {
        &self.template
    }

    pub fn body_key(&self) -> &str {
        &self.body_key
    }

    /// Whether the schema declares the designated body field
    pub fn has_body_field(&self) -> bool {
        self.template.properties.contains_key(&self.body_key)
    }

    /// All current values, body slot included
    pub const fn values(&self) -> &ConfigMap {
        &self.values
    }

    pub fn value(&self, key: &str) -> &str {
        self.values.get(key).map_or("", String::as_str)
    }

    pub fn set_value(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    /// Current body text
    pub fn body(&self) -> &str {
        self.value(&self.body_key)
    }

    pub fn set_body(&mut self, body: impl Into<String>) {
        self.values.insert(self.body_key.clone(), body.into());
    }

    pub const fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Whether there are unsaved edits.
    ///
    /// Plain fields are compared against the baseline; the body is compared
    /// against the store's committed body.
    pub fn has_changes(&self, snapshot: &ConfigSnapshot) -> bool {
        let plain_changed = self.plain_values(&self.values) != self.plain_values(&self.baseline);
        let body_changed = self.body() != snapshot.get(&self.body_key).unwrap_or_default();
        plain_changed || body_changed
    }

    fn plain_values<'a>(&self, values: &'a ConfigMap) -> Vec<(&'a String, &'a String)> {
        values
            .iter()
            .filter(|(key, _)| **key != self.body_key)
            .collect()
    }

    /// Plain text inputs in schema order.
    ///
    /// Only `string` properties are rendered; the body field is excluded.
    pub fn plain_fields(&self) -> Vec<FieldView> {
        self.template
            .properties
            .iter()
            .filter(|(key, schema)| schema.kind.is_string() && *key != self.body_key)
            .map(|(key, schema)| FieldView {
                key: key.to_string(),
                title: schema.title.clone(),
                description_html: schema.description.as_deref().map(render_inline_markdown),
                label_optional_html: schema
                    .description_optional
                    .as_deref()
                    .map(render_inline_markdown),
            })
            .collect()
    }

    /// The code editor block, if the schema declares the body field
    pub fn body_field(&self) -> Option<BodyFieldView> {
        self.template.body_property().map(|schema| BodyFieldView {
            key: self.body_key.clone(),
            title: schema.title.clone(),
            description_html: schema.description.as_deref().map(render_markdown),
        })
    }

    /// Assemble the update payload.
    ///
    /// The body key is always removed from the plain values and only put back
    /// from the body slot when the schema declares it.
    pub fn payload(&self) -> ConfigMap {
        let mut payload = self.values.clone();
        let body = payload.remove(&self.body_key);
        if self.has_body_field() {
            payload.insert(self.body_key.clone(), body.unwrap_or_default());
        }
        payload
    }

    /// Start a submission. Rejected while another one is in flight.
    pub fn begin_submit(&mut self) -> Result<SubmitTicket> {
        if self.submitting {
            tracing::warn!(template = %self.template.id, "Submit ignored: update in flight");
            return Err(Error::SubmitInProgress);
        }

        self.submitting = true;
        Ok(SubmitTicket {
            payload: self.payload(),
            values: self.values.clone(),
        })
    }

    /// Finish a submission with the store's result and post-update snapshot.
    ///
    /// On success the submitted values become the baseline and the body slot
    /// takes the store's committed body. On failure nothing but the
    /// submitting flag changes.
    pub fn complete_submit(
        &mut self,
        ticket: SubmitTicket,
        result: Result<()>,
        snapshot: &ConfigSnapshot,
    ) -> (SubmitOutcome, Notification) {
        self.submitting = false;

        match result {
            Ok(()) => {
                let mut values = ticket.values;
                values.insert(
                    self.body_key.clone(),
                    snapshot.get(&self.body_key).unwrap_or_default().to_string(),
                );
                self.baseline.clone_from(&values);
                self.values = values;
                (
                    SubmitOutcome::Saved,
                    Notification::success(UPDATE_SUCCESS_MESSAGE),
                )
            }
            Err(error) => {
                tracing::error!(template = %self.template.id, "Failed to update auth config: {}", error);
                (
                    SubmitOutcome::Failed(error.to_string()),
                    Notification::error(UPDATE_FAILURE_MESSAGE),
                )
            }
        }
    }
}

/// Run one full submission: payload, store update, notification, state sync.
///
/// Errors only when a submission is already in flight; store failures are
/// reported through the notifier and the returned outcome.
pub async fn submit<S, N>(form: &mut TemplateForm, store: &S, notifier: &N) -> Result<SubmitOutcome>
where
    S: ConfigStore + ?Sized,
    N: NotificationSink + ?Sized,
{
    let ticket = form.begin_submit()?;
    tracing::debug!(
        template = %form.template().id,
        keys = ticket.payload.len(),
        "Submitting template form"
    );
    let result = store.update(&ticket.payload).await;
    let (outcome, notification) = form.complete_submit(ticket, result, &store.snapshot());
    notifier.notify(notification);
    Ok(outcome)
}
