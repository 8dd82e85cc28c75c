use mailtpl_core::config::EditorConfig;
use mailtpl_core::Template;
use serde::Serialize;

use crate::error::CliError;

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct TemplateListItem {
    pub id: String,
    pub title: String,
    pub fields: Vec<String>,
    /// Present when the template declares a message body
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_key: Option<String>,
}

pub fn run_templates(config: &EditorConfig, as_json: bool) -> Result<(), CliError> {
    let catalog = config.catalog()?;
    let items: Vec<TemplateListItem> = catalog.templates().iter().map(template_to_item).collect();

    if as_json {
        println!("{}", serde_json::to_string_pretty(&items)?);
    } else {
        for line in format_template_lines(&items) {
            println!("{line}");
        }
    }

    Ok(())
}

pub fn template_to_item(template: &Template) -> TemplateListItem {
    TemplateListItem {
        id: template.id.clone(),
        title: template.display_title().to_string(),
        fields: template.properties.keys().map(str::to_string).collect(),
        body_key: template.body_property().map(|_| template.body_key()),
    }
}

pub fn format_template_lines(items: &[TemplateListItem]) -> Vec<String> {
    let width = items.iter().map(|item| item.id.len()).max().unwrap_or(0);
    items
        .iter()
        .map(|item| {
            let body = if item.body_key.is_some() { ", body" } else { "" };
            format!(
                "{:<width$}  {} ({} fields{body})",
                item.id,
                item.title,
                item.fields.len()
            )
        })
        .collect()
}
