pub mod create_permission;
pub mod delete_permissions;
pub mod get_permissions;
