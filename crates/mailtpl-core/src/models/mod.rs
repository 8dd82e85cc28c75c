//! Data models for mailtpl

mod template;

pub use template::{body_key_for, Properties, PropertySchema, PropertyType, Template};
