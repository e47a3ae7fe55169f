pub mod activate_user;
pub mod create_user;
pub mod deactivate_user;
pub mod defaults;
pub mod delete_users;
pub mod get_me;
pub mod get_users;
pub mod login_user;
pub mod logout_user;
pub mod update_user;
