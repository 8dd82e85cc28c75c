//! Application services
//!
//! Store access and toast delivery shared by the components.

mod config_store;
mod notifications;

pub use config_store::{open_config_store, DesktopStore};
pub use notifications::{ActiveToast, ToastNotifier};
