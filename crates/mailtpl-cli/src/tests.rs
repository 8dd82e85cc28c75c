use std::path::PathBuf;

use mailtpl_core::config::EditorConfig;
use mailtpl_core::db::StoredConfigEntry;
use mailtpl_core::models::PropertySchema;
use mailtpl_core::{ConfigMap, ConfigSnapshot, ConfigStore, PropertyType, Template, TemplateForm};
use pretty_assertions::assert_eq;
use tempfile::{tempdir, TempDir};

use crate::cli::CompletionShell;
use crate::commands::common::{default_editor, format_timestamp, open_store, parse_assignment};
use crate::commands::completions::render_completions;
use crate::commands::set::{apply_assignments, run_set, SetRequest};
use crate::commands::show::{build_show_output, format_show_lines};
use crate::commands::templates::{format_template_lines, template_to_item};
use crate::error::CliError;

const BODY_KEY: &str = "MAILER_TEMPLATES_CONFIRMATION_CONTENT";
const SUBJECT_KEY: &str = "MAILER_SUBJECTS_CONFIRMATION";

fn temp_config(dir: &TempDir) -> EditorConfig {
    EditorConfig {
        db_path: Some(dir.path().join("auth.db")),
        ..EditorConfig::default()
    }
}

fn confirmation_form(entries: &[(&str, &str)]) -> TemplateForm {
    let template = Template::new(
        "CONFIRMATION",
        [
            (SUBJECT_KEY, PropertySchema::string("Subject heading")),
            (
                "MAILER_OTP_LENGTH",
                PropertySchema {
                    kind: PropertyType::from("number".to_string()),
                    title: "OTP length".to_string(),
                    description: None,
                    description_optional: None,
                },
            ),
            (BODY_KEY, PropertySchema::string("Message body")),
        ]
        .into_iter()
        .collect(),
    );
    let config: ConfigMap = entries
        .iter()
        .map(|(key, value)| ((*key).to_string(), (*value).to_string()))
        .collect();
    TemplateForm::from_snapshot(template, &ConfigSnapshot::loaded(config))
}

#[test]
fn parse_assignment_splits_on_first_equals() {
    assert_eq!(
        parse_assignment("SUBJECT=a=b").unwrap(),
        ("SUBJECT".to_string(), "a=b".to_string())
    );
    assert_eq!(
        parse_assignment(" SUBJECT =").unwrap(),
        ("SUBJECT".to_string(), String::new())
    );
}

#[test]
fn parse_assignment_rejects_missing_key_or_separator() {
    assert!(matches!(
        parse_assignment("SUBJECT"),
        Err(CliError::InvalidAssignment(_))
    ));
    assert!(matches!(
        parse_assignment("=value"),
        Err(CliError::InvalidAssignment(_))
    ));
}

#[test]
fn apply_assignments_rejects_keys_outside_schema() {
    let mut form = confirmation_form(&[]);
    let result = apply_assignments(&mut form, vec![("SITE_URL".into(), "x".into())]);

    match result {
        Err(CliError::UnknownField { template, key }) => {
            assert_eq!(template, "CONFIRMATION");
            assert_eq!(key, "SITE_URL");
        }
        other => panic!("expected UnknownField, got {other:?}"),
    }
}

#[test]
fn apply_assignments_rejects_non_text_fields() {
    let mut form = confirmation_form(&[]);
    let result = apply_assignments(&mut form, vec![("MAILER_OTP_LENGTH".into(), "6".into())]);
    assert!(matches!(result, Err(CliError::InvalidAssignment(_))));
}

#[test]
fn apply_assignments_points_body_key_to_body_flags() {
    let mut form = confirmation_form(&[(BODY_KEY, "<p>stored</p>")]);
    let result = apply_assignments(&mut form, vec![(BODY_KEY.into(), "<p>inline</p>".into())]);

    match result {
        Err(CliError::InvalidAssignment(message)) => assert!(message.contains("--body-file")),
        other => panic!("expected InvalidAssignment, got {other:?}"),
    }
    assert_eq!(form.body(), "<p>stored</p>");
}

#[test]
fn apply_assignments_sets_text_fields() {
    let mut form = confirmation_form(&[(SUBJECT_KEY, "Old")]);
    apply_assignments(&mut form, vec![(SUBJECT_KEY.into(), "New".into())]).unwrap();
    assert_eq!(form.value(SUBJECT_KEY), "New");
}

#[test]
fn format_timestamp_returns_utc_label() {
    assert_eq!(format_timestamp(0), "1970-01-01 00:00:00 UTC");
}

#[test]
fn default_editor_is_defined() {
    assert!(!default_editor().is_empty());
}

#[test]
fn template_lines_list_every_builtin_template() {
    let catalog = EditorConfig::default().catalog().unwrap();
    let items: Vec<_> = catalog.templates().iter().map(template_to_item).collect();
    let lines = format_template_lines(&items);

    assert_eq!(lines.len(), 5);
    assert!(lines[0].starts_with("CONFIRMATION"));
    assert!(lines[0].ends_with("(2 fields, body)"));
    assert_eq!(items[0].body_key.as_deref(), Some(BODY_KEY));
}

#[test]
fn show_output_separates_body_and_lists_variables() {
    let form = confirmation_form(&[
        (SUBJECT_KEY, "Confirm your signup"),
        (BODY_KEY, "<a href=\"{{ .ConfirmationURL }}\">{{ .Nope }}</a>"),
    ]);
    let entries = vec![StoredConfigEntry {
        key: SUBJECT_KEY.to_string(),
        value: "Confirm your signup".to_string(),
        updated_at: 0,
    }];

    let output = build_show_output(&form, &entries);
    let keys: Vec<&str> = output.fields.iter().map(|field| field.key.as_str()).collect();
    assert_eq!(keys, vec![SUBJECT_KEY, "MAILER_OTP_LENGTH"]);
    assert_eq!(output.fields[1].kind, "number");

    let lines = format_show_lines(&output);
    assert!(lines.contains(&"  Confirm your signup".to_string()));
    assert!(lines.contains(&"  updated 1970-01-01 00:00:00 UTC".to_string()));
    assert!(lines.contains(&"  variables: ConfirmationURL, Nope (unknown)".to_string()));
}

#[test]
fn completions_mention_binary_name() {
    let script = String::from_utf8(render_completions(CompletionShell::Bash)).unwrap();
    assert!(script.contains("mailtpl"));
}

#[tokio::test(flavor = "multi_thread")]
async fn set_persists_assignments_and_body_file() {
    let dir = tempdir().unwrap();
    let config = temp_config(&dir);
    let body_path: PathBuf = dir.path().join("body.html");
    std::fs::write(&body_path, "<p>{{ .ConfirmationURL }}</p>").unwrap();

    run_set(
        &config,
        "confirmation",
        SetRequest {
            assignments: vec![format!("{SUBJECT_KEY}=Confirm your email")],
            body_file: Some(body_path),
            edit_body: false,
        },
    )
    .await
    .unwrap();

    let store = open_store(&config).await.unwrap();
    assert_eq!(store.snapshot().get(SUBJECT_KEY), Some("Confirm your email"));
    assert_eq!(
        store.snapshot().get(BODY_KEY),
        Some("<p>{{ .ConfirmationURL }}</p>")
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn set_without_changes_reports_nothing_to_update() {
    let dir = tempdir().unwrap();
    let config = temp_config(&dir);

    let result = run_set(&config, "CONFIRMATION", SetRequest::default()).await;
    assert!(matches!(result, Err(CliError::NothingToUpdate)));
}

#[tokio::test(flavor = "multi_thread")]
async fn set_is_denied_when_read_only() {
    let dir = tempdir().unwrap();
    let config = EditorConfig {
        read_only: true,
        ..temp_config(&dir)
    };

    let result = run_set(
        &config,
        "CONFIRMATION",
        SetRequest {
            assignments: vec![format!("{SUBJECT_KEY}=Hi")],
            ..SetRequest::default()
        },
    )
    .await;

    assert!(matches!(
        result,
        Err(CliError::Core(mailtpl_core::Error::PermissionDenied(_)))
    ));
    assert!(!dir.path().join("auth.db").exists());
}

#[tokio::test(flavor = "multi_thread")]
async fn set_rejects_unknown_template() {
    let dir = tempdir().unwrap();
    let result = run_set(&temp_config(&dir), "WELCOME", SetRequest::default()).await;
    assert!(matches!(result, Err(CliError::TemplateNotFound(id)) if id == "WELCOME"));
}
