//! Message variables used inside email template bodies

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

/// Variables the auth mailer substitutes when rendering a template
pub const KNOWN_VARIABLES: &[&str] = &[
    "ConfirmationURL",
    "Token",
    "TokenHash",
    "SiteURL",
    "Email",
    "NewEmail",
    "RedirectTo",
    "Data",
];

static VARIABLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{\s*\.([A-Za-z][A-Za-z0-9_]*)").expect("Invalid regex"));

/// A `{{ .Name }}` reference found in a template body
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateVariable {
    pub name: String,
    /// Whether the mailer knows how to fill this variable
    pub known: bool,
}

/// Extract the variables used by a body, in first-use order, without repeats.
pub fn extract_variables(body: &str) -> Vec<TemplateVariable> {
    let mut variables: Vec<TemplateVariable> = Vec::new();
    for capture in VARIABLE_RE.captures_iter(body) {
        let name = &capture[1];
        if variables.iter().any(|variable| variable.name == name) {
            continue;
        }
        variables.push(TemplateVariable {
            name: name.to_string(),
            known: KNOWN_VARIABLES.contains(&name),
        });
    }
    variables
}

/// Names of variables the mailer will not substitute
pub fn unknown_variables(body: &str) -> Vec<String> {
    extract_variables(body)
        .into_iter()
        .filter(|variable| !variable.known)
        .map(|variable| variable.name)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_variables_in_first_use_order() {
        let body = r#"<a href="{{ .ConfirmationURL }}">Confirm</a> {{.Token}} {{ .ConfirmationURL }}"#;
        let names: Vec<String> = extract_variables(body)
            .into_iter()
            .map(|variable| variable.name)
            .collect();
        assert_eq!(names, vec!["ConfirmationURL", "Token"]);
    }

    #[test]
    fn flags_unknown_variables() {
        let body = "Hi {{ .Email }}, visit {{ .SiteUrl }} or {{ .Data.name }}";
        assert_eq!(unknown_variables(body), vec!["SiteUrl".to_string()]);
    }

    #[test]
    fn plain_text_has_no_variables() {
        assert!(extract_variables("<p>hi</p> {{ not a var }}").is_empty());
    }
}
