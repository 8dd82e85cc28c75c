use mailtpl_core::config::EditorConfig;
use mailtpl_core::db::StoredConfigEntry;
use mailtpl_core::template_vars::{extract_variables, TemplateVariable};
use mailtpl_core::{ConfigStore, TemplateForm};
use serde::Serialize;

use crate::commands::common::{find_template, format_timestamp, open_store};
use crate::error::CliError;

#[derive(Debug, Serialize)]
pub struct FieldItem {
    pub key: String,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct BodyItem {
    pub key: String,
    pub title: String,
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    pub variables: Vec<TemplateVariable>,
}

#[derive(Debug, Serialize)]
pub struct ShowOutput {
    pub id: String,
    pub title: String,
    pub fields: Vec<FieldItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<BodyItem>,
}

pub async fn run_show(config: &EditorConfig, id: &str, as_json: bool) -> Result<(), CliError> {
    let catalog = config.catalog()?;
    let template = find_template(&catalog, id)?;
    let store = open_store(config).await?;
    let entries = store.backend().list_entries().await?;

    let form = TemplateForm::from_snapshot(template, &store.snapshot());
    let output = build_show_output(&form, &entries);

    if as_json {
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        for line in format_show_lines(&output) {
            println!("{line}");
        }
    }

    Ok(())
}

pub fn build_show_output(form: &TemplateForm, entries: &[StoredConfigEntry]) -> ShowOutput {
    let updated_at = |key: &str| {
        entries
            .iter()
            .find(|entry| entry.key == key)
            .map(|entry| format_timestamp(entry.updated_at))
    };
    let template = form.template();

    let fields = template
        .properties
        .iter()
        .filter(|(key, _)| *key != form.body_key())
        .map(|(key, schema)| FieldItem {
            key: key.to_string(),
            title: schema.title.clone(),
            kind: schema.kind.as_str().to_string(),
            value: form.value(key).to_string(),
            updated_at: updated_at(key),
        })
        .collect();

    let body = form.body_field().map(|field| BodyItem {
        updated_at: updated_at(&field.key),
        key: field.key,
        title: field.title,
        value: form.body().to_string(),
        variables: extract_variables(form.body()),
    });

    ShowOutput {
        id: template.id.clone(),
        title: template.display_title().to_string(),
        fields,
        body,
    }
}

pub fn format_show_lines(output: &ShowOutput) -> Vec<String> {
    let mut lines = vec![format!("{} ({})", output.title, output.id)];

    for field in &output.fields {
        lines.push(String::new());
        lines.push(format!("{} [{}]", field.title, field.key));
        lines.push(format!("  {}", display_value(&field.value)));
        if let Some(updated_at) = &field.updated_at {
            lines.push(format!("  updated {updated_at}"));
        }
    }

    if let Some(body) = &output.body {
        lines.push(String::new());
        lines.push(format!("{} [{}]", body.title, body.key));
        if body.value.is_empty() {
            lines.push(format!("  {}", display_value(&body.value)));
        } else {
            lines.extend(body.value.lines().map(|line| format!("  {line}")));
        }
        if let Some(updated_at) = &body.updated_at {
            lines.push(format!("  updated {updated_at}"));
        }
        if !body.variables.is_empty() {
            let names: Vec<String> = body
                .variables
                .iter()
                .map(|variable| {
                    if variable.known {
                        variable.name.clone()
                    } else {
                        format!("{} (unknown)", variable.name)
                    }
                })
                .collect();
            lines.push(format!("  variables: {}", names.join(", ")));
        }
    }

    lines
}

fn display_value(value: &str) -> &str {
    if value.is_empty() {
        "(empty)"
    } else {
        value
    }
}
