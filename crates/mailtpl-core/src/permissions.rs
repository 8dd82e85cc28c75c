//! Capability checks gating edits to the auth config

/// Resource name guarding the auth (GoTrue) config
pub const AUTH_CONFIG_RESOURCE: &str = "custom_config_gotrue";

/// Helper text shown when updates are not permitted
pub const UPDATE_DENIED_HELPER: &str =
    "You need additional permissions to update authentication settings";

/// Actions a caller may attempt on a resource
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PermissionAction {
    Read,
    Update,
}

/// Pure `(action, resource) -> allowed` capability check
pub trait PermissionChecker {
    fn can(&self, action: PermissionAction, resource: &str) -> bool;
}

impl<F: Fn(PermissionAction, &str) -> bool> PermissionChecker for F {
    fn can(&self, action: PermissionAction, resource: &str) -> bool {
        self(action, resource)
    }
}

/// Fixed permissions resolved from configuration.
///
/// Reads are always allowed; updates are allowed unless `read_only` is set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StaticPermissions {
    read_only: bool,
}

impl StaticPermissions {
    pub const fn new(read_only: bool) -> Self {
        Self { read_only }
    }

    pub const fn read_only() -> Self {
        Self { read_only: true }
    }
}

impl PermissionChecker for StaticPermissions {
    fn can(&self, action: PermissionAction, _resource: &str) -> bool {
        match action {
            PermissionAction::Read => true,
            PermissionAction::Update => !self.read_only,
        }
    }
}

/// Whether the auth config (inputs, code editor, save action) is editable
pub fn can_update_auth_config<P: PermissionChecker + ?Sized>(checker: &P) -> bool {
    checker.can(PermissionAction::Update, AUTH_CONFIG_RESOURCE)
}
