use crate::error::GatehouseError;
use crate::groups::create_group::CreateGroup;
use crate::groups::delete_groups::DeleteGroups;
use crate::groups::get_groups::GetGroups;
use crate::models::group::Group;
use crate::models::page::Page;
use crate::models::permission::Permission;
use crate::models::user::User;
use crate::permissions::create_permission::CreatePermission;
use crate::permissions::delete_permissions::DeletePermissions;
use crate::permissions::get_permissions::GetPermissions;
use crate::users::activate_user::ActivateUser;
use crate::users::create_user::CreateUser;
use crate::users::deactivate_user::DeactivateUser;
use crate::users::delete_users::DeleteUsers;
use crate::users::get_me::GetMe;
use crate::users::get_users::GetUsers;
use crate::users::login_user::LoginUser;
use crate::users::logout_user::LogoutUser;
use crate::users::update_user::UpdateUser;
use async_trait::async_trait;

/// The client trait which is the main interface to the Gatehouse backend.
/// It consists of multiple modules, each of which is responsible for a specific set of commands.
/// Every type implementing all the modules is a `Client`.
pub trait Client: SystemClient + UserClient + PermissionClient + GroupClient + Sync + Send {}

impl<T> Client for T where T: SystemClient + UserClient + PermissionClient + GroupClient + Sync + Send
{}

/// This trait defines the methods to manage the session.
#[async_trait]
pub trait SystemClient {
    /// Login the user with the provided credentials and return the session token.
    /// The client keeps the token and sends it with every following request.
    async fn login_user(&self, command: &LoginUser) -> Result<String, GatehouseError>;
    /// Logout the currently authenticated user and forget the session token.
    async fn logout_user(&self, command: &LogoutUser) -> Result<(), GatehouseError>;
}

/// This trait defines the methods to interact with the user module.
#[async_trait]
pub trait UserClient {
    /// Get a single page of users, optionally expanded with their groups and permissions.
    ///
    /// Authentication is required.
    async fn get_users(&self, command: &GetUsers) -> Result<Page<User>, GatehouseError>;
    /// Create a new user and return it with its assigned ID.
    ///
    /// Authentication is required.
    async fn create_user(&self, command: &CreateUser) -> Result<User, GatehouseError>;
    /// Update the mutable fields (password, nickname, avatar URI) of the user.
    ///
    /// Authentication is required.
    async fn update_user(&self, command: &UpdateUser) -> Result<User, GatehouseError>;
    /// Delete a batch of users in a single request.
    ///
    /// Authentication is required.
    async fn delete_users(&self, command: &DeleteUsers) -> Result<(), GatehouseError>;
    /// Mark the user as active.
    ///
    /// Authentication is required.
    async fn activate_user(&self, command: &ActivateUser) -> Result<(), GatehouseError>;
    /// Mark the user as inactive.
    ///
    /// Authentication is required.
    async fn deactivate_user(&self, command: &DeactivateUser) -> Result<(), GatehouseError>;
    /// Get the user owning the current session.
    ///
    /// Authentication is required.
    async fn get_me(&self, command: &GetMe) -> Result<User, GatehouseError>;
}

/// This trait defines the methods to interact with the permission module.
#[async_trait]
pub trait PermissionClient {
    /// Get a single page of permissions.
    ///
    /// Authentication is required.
    async fn get_permissions(
        &self,
        command: &GetPermissions,
    ) -> Result<Page<Permission>, GatehouseError>;
    /// Create a new permission and return it with its assigned ID.
    ///
    /// Authentication is required.
    async fn create_permission(
        &self,
        command: &CreatePermission,
    ) -> Result<Permission, GatehouseError>;
    /// Delete a batch of permissions in a single request.
    ///
    /// Authentication is required.
    async fn delete_permissions(&self, command: &DeletePermissions)
        -> Result<(), GatehouseError>;
}

/// This trait defines the methods to interact with the group module.
#[async_trait]
pub trait GroupClient {
    /// Get a single page of groups.
    ///
    /// Authentication is required.
    async fn get_groups(&self, command: &GetGroups) -> Result<Page<Group>, GatehouseError>;
    /// Create a new group and return it with its assigned ID.
    ///
    /// Authentication is required.
    async fn create_group(&self, command: &CreateGroup) -> Result<Group, GatehouseError>;
    /// Delete a batch of groups in a single request.
    ///
    /// Authentication is required.
    async fn delete_groups(&self, command: &DeleteGroups) -> Result<(), GatehouseError>;
}
