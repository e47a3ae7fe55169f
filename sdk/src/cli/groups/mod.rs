pub mod create_group;
pub mod delete_groups;
pub mod get_groups;
