//! Template schema model

use std::fmt;

use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Prefix of the designated body key.
const BODY_KEY_PREFIX: &str = "MAILER_TEMPLATES_";
/// Suffix of the designated body key.
const BODY_KEY_SUFFIX: &str = "_CONTENT";

/// Build the designated body key for a template id.
///
/// `confirmation` maps to `MAILER_TEMPLATES_confirmation_CONTENT`; the id is
/// used verbatim.
pub fn body_key_for(id: &str) -> String {
    format!("{BODY_KEY_PREFIX}{id}{BODY_KEY_SUFFIX}")
}

/// Declared type of a schema property.
///
/// Only `string` properties have an input renderer. Other declared types are
/// kept as-is so they survive a round trip and can be skipped when rendering.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PropertyType {
    /// Plain text value
    String,
    /// Any other declared type (`boolean`, `number`, ...)
    Other(String),
}

impl PropertyType {
    /// Whether a plain text input can render this property
    pub const fn is_string(&self) -> bool {
        matches!(self, Self::String)
    }

    /// The declared type name
    pub fn as_str(&self) -> &str {
        match self {
            Self::String => "string",
            Self::Other(name) => name,
        }
    }
}

impl From<String> for PropertyType {
    fn from(value: String) -> Self {
        if value == "string" {
            Self::String
        } else {
            Self::Other(value)
        }
    }
}

impl From<PropertyType> for String {
    fn from(value: PropertyType) -> Self {
        match value {
            PropertyType::String => "string".to_string(),
            PropertyType::Other(name) => name,
        }
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Description of one editable configuration field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertySchema {
    /// Declared value type
    #[serde(rename = "type")]
    pub kind: PropertyType,
    /// Field label
    pub title: String,
    /// Markdown helper text shown under the input
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Markdown text shown next to the label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description_optional: Option<String>,
}

impl PropertySchema {
    /// A `string` property with the given title
    pub fn string(title: impl Into<String>) -> Self {
        Self {
            kind: PropertyType::String,
            title: title.into(),
            description: None,
            description_optional: None,
        }
    }

    /// Attach a markdown description
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Schema properties in declaration order.
///
/// Serialized as a JSON object; the object's key order is the render order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Properties(Vec<(String, PropertySchema)>);

impl Properties {
    pub fn get(&self, key: &str) -> Option<&PropertySchema> {
        self.0
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, schema)| schema)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropertySchema)> {
        self.0.iter().map(|(name, schema)| (name.as_str(), schema))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Insert or replace a property. Replacing keeps the original position.
    pub fn insert(&mut self, key: impl Into<String>, schema: PropertySchema) {
        let key = key.into();
        if let Some(slot) = self.0.iter_mut().find(|(name, _)| *name == key) {
            slot.1 = schema;
        } else {
            self.0.push((key, schema));
        }
    }
}

impl<K: Into<String>> FromIterator<(K, PropertySchema)> for Properties {
    fn from_iter<I: IntoIterator<Item = (K, PropertySchema)>>(iter: I) -> Self {
        let mut properties = Self::default();
        for (key, schema) in iter {
            properties.insert(key, schema);
        }
        properties
    }
}

impl Serialize for Properties {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

impl<'de> Deserialize<'de> for Properties {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct PropertiesVisitor;

        impl<'de> Visitor<'de> for PropertiesVisitor {
            type Value = Properties;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("a map of property names to property schemas")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut entries: Vec<(String, PropertySchema)> =
                    Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((key, schema)) = map.next_entry::<String, PropertySchema>()? {
                    if entries.iter().any(|(name, _)| *name == key) {
                        return Err(de::Error::custom(format!("duplicate property `{key}`")));
                    }
                    entries.push((key, schema));
                }
                Ok(Properties(entries))
            }
        }

        deserializer.deserialize_map(PropertiesVisitor)
    }
}

/// An email template form schema
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    /// Template id, spliced verbatim into the body key
    pub id: String,
    /// Human readable name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Editable fields
    pub properties: Properties,
}

impl Template {
    pub fn new(id: impl Into<String>, properties: Properties) -> Self {
        Self {
            id: id.into(),
            title: None,
            properties,
        }
    }

    /// Key of the designated body field, whether or not it is declared
    pub fn body_key(&self) -> String {
        body_key_for(&self.id)
    }

    /// Schema of the designated body field, if declared
    pub fn body_property(&self) -> Option<&PropertySchema> {
        self.properties.get(&self.body_key())
    }

    /// Title for pickers and headings; falls back to the id
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or(&self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_key_uses_id_verbatim() {
        assert_eq!(
            body_key_for("confirmation"),
            "MAILER_TEMPLATES_confirmation_CONTENT"
        );
        assert_eq!(body_key_for("INVITE"), "MAILER_TEMPLATES_INVITE_CONTENT");
    }

    #[test]
    fn properties_keep_declaration_order() {
        let json = r#"{
            "id": "recovery",
            "properties": {
                "Z_LAST": { "type": "string", "title": "Z" },
                "A_FIRST": { "type": "string", "title": "A" },
                "M_MIDDLE": { "type": "boolean", "title": "M" }
            }
        }"#;
        let template: Template = serde_json::from_str(json).unwrap();
        let keys: Vec<&str> = template.properties.keys().collect();
        assert_eq!(keys, vec!["Z_LAST", "A_FIRST", "M_MIDDLE"]);
    }

    #[test]
    fn unknown_property_types_are_preserved() {
        let json = r#"{ "type": "number", "title": "Rate", "descriptionOptional": "per hour" }"#;
        let schema: PropertySchema = serde_json::from_str(json).unwrap();
        assert_eq!(schema.kind, PropertyType::Other("number".to_string()));
        assert!(!schema.kind.is_string());
        assert_eq!(schema.description_optional.as_deref(), Some("per hour"));

        let rendered = serde_json::to_value(&schema).unwrap();
        assert_eq!(rendered["type"], "number");
        assert_eq!(rendered["descriptionOptional"], "per hour");
    }

    #[test]
    fn duplicate_property_keys_are_rejected() {
        let json = r#"{
            "SUBJECT": { "type": "string", "title": "Subject" },
            "SUBJECT": { "type": "string", "title": "Subject again" }
        }"#;
        let error = serde_json::from_str::<Properties>(json).unwrap_err();
        assert!(error.to_string().contains("duplicate property"));
    }

    #[test]
    fn body_property_is_found_by_naming_convention() {
        let template = Template::new(
            "confirmation",
            [
                ("SUBJECT", PropertySchema::string("Subject")),
                (
                    "MAILER_TEMPLATES_confirmation_CONTENT",
                    PropertySchema::string("Body"),
                ),
            ]
            .into_iter()
            .collect(),
        );
        assert_eq!(template.body_property().map(|p| p.title.as_str()), Some("Body"));
        assert_eq!(template.display_title(), "confirmation");
    }

    #[test]
    fn insert_replaces_in_place() {
        let mut properties: Properties = [
            ("A", PropertySchema::string("a")),
            ("B", PropertySchema::string("b")),
        ]
        .into_iter()
        .collect();
        properties.insert("A", PropertySchema::string("a2"));
        let titles: Vec<&str> = properties.iter().map(|(_, p)| p.title.as_str()).collect();
        assert_eq!(titles, vec!["a2", "b"]);
        assert_eq!(properties.len(), 2);
    }
}
