pub mod common;
pub mod completions;
pub mod set;
pub mod show;
pub mod templates;
