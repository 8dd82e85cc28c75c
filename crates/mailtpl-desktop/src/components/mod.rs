//! UI components

mod button;
mod code_editor;
mod form_section;
mod information_box;
mod input;
mod notification_toast;
mod template_editor;
mod template_sidebar;

pub use button::{Button, ButtonVariant};
pub use code_editor::CodeEditor;
pub use form_section::{FormActions, FormSection, FormSectionContent, FormSectionLabel};
pub use information_box::InformationBox;
pub use input::Input;
pub use notification_toast::NotificationToast;
pub use template_editor::TemplateEditor;
pub use template_sidebar::TemplateSidebar;
