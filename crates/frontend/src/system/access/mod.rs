pub mod menu_permissions;
pub mod permissions;
pub mod roles;

use std::sync::Arc;

use leptos::prelude::*;

pub use menu_permissions::{AccessPolicy, PermissionMap};
pub use permissions::{Permissions, RoleSet};
pub use roles::Role;

/// Route table built from the configured policy, provided once by `App`.
pub fn use_permission_map() -> Arc<PermissionMap> {
    use_context::<Arc<PermissionMap>>().expect("PermissionMap not found in component tree")
}
