pub mod group;
pub mod page;
pub mod permission;
pub mod response;
pub mod user;
pub mod user_status;
