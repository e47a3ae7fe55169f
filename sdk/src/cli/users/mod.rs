pub mod activate_user;
pub mod create_user;
pub mod deactivate_user;
pub mod delete_users;
pub mod get_users;
pub mod update_user;
