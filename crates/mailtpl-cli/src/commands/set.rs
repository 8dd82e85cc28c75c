use std::path::PathBuf;

use mailtpl_core::config::EditorConfig;
use mailtpl_core::permissions::{can_update_auth_config, UPDATE_DENIED_HELPER};
use mailtpl_core::template_vars::unknown_variables;
use mailtpl_core::util::compact_text;
use mailtpl_core::{submit, ConfigStore, Notification, SubmitOutcome, TemplateForm};

use crate::commands::common::{
    capture_editor_input_with_initial, find_template, open_store, parse_assignment,
};
use crate::error::CliError;

/// Edits requested on the command line
#[derive(Debug, Default)]
pub struct SetRequest {
    pub assignments: Vec<String>,
    pub body_file: Option<PathBuf>,
    pub edit_body: bool,
}

pub async fn run_set(config: &EditorConfig, id: &str, request: SetRequest) -> Result<(), CliError> {
    let catalog = config.catalog()?;
    let template = find_template(&catalog, id)?;

    if !can_update_auth_config(&config.permissions()) {
        return Err(mailtpl_core::Error::PermissionDenied(UPDATE_DENIED_HELPER.to_string()).into());
    }

    let assignments = request
        .assignments
        .iter()
        .map(|raw| parse_assignment(raw))
        .collect::<Result<Vec<_>, _>>()?;

    let store = open_store(config).await?;
    let mut form = TemplateForm::from_snapshot(template, &store.snapshot());
    apply_assignments(&mut form, assignments)?;

    if let Some(path) = &request.body_file {
        require_body_field(&form)?;
        form.set_body(std::fs::read_to_string(path)?);
    } else if request.edit_body {
        require_body_field(&form)?;
        let edited = capture_editor_input_with_initial(form.body())?;
        form.set_body(edited);
    }

    let unknown = unknown_variables(form.body());
    if !unknown.is_empty() {
        eprintln!(
            "Warning: the mailer does not substitute {}",
            unknown.join(", ")
        );
    }

    if !form.has_changes(&store.snapshot()) {
        return Err(CliError::NothingToUpdate);
    }

    let notifier = |notification: Notification| {
        if notification.is_error() {
            eprintln!("{}", notification.message);
        } else {
            println!("{}", notification.message);
        }
    };

    match submit(&mut form, &store, &notifier).await? {
        SubmitOutcome::Saved => Ok(()),
        SubmitOutcome::Failed(reason) => Err(CliError::UpdateFailed(compact_text(&reason))),
    }
}

/// Apply `KEY=VALUE` pairs; keys must be text fields declared by the template
pub fn apply_assignments(
    form: &mut TemplateForm,
    assignments: Vec<(String, String)>,
) -> Result<(), CliError> {
    for (key, value) in assignments {
        if key == form.body_key() {
            return Err(CliError::InvalidAssignment(format!(
                "{key}=... (set the message body with --body-file or --edit-body)"
            )));
        }
        let Some(schema) = form.template().properties.get(&key) else {
            return Err(CliError::UnknownField {
                template: form.template().id.clone(),
                key,
            });
        };
        if !schema.kind.is_string() {
            return Err(CliError::InvalidAssignment(format!(
                "{key}={value} ({key} is a {} field)",
                schema.kind.as_str()
            )));
        }
        form.set_value(key, value);
    }
    Ok(())
}

fn require_body_field(form: &TemplateForm) -> Result<(), CliError> {
    if form.has_body_field() {
        Ok(())
    } else {
        Err(CliError::UnknownField {
            template: form.template().id.clone(),
            key: form.body_key().to_string(),
        })
    }
}
