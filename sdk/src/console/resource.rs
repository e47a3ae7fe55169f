use crate::client::{GroupClient, PermissionClient, UserClient};
use crate::console::columns::{group_columns, permission_columns, user_columns, Column};
use crate::error::GatehouseError;
use crate::forms::group::CreateGroupForm;
use crate::forms::permission::CreatePermissionForm;
use crate::forms::user::{CreateUserForm, UpdateUserForm};
use crate::forms::Form;
use crate::groups::create_group::CreateGroup;
use crate::groups::delete_groups::DeleteGroups;
use crate::groups::get_groups::GetGroups;
use crate::models::group::Group;
use crate::models::page::{Page, PageRequest};
use crate::models::permission::Permission;
use crate::models::user::User;
use crate::permissions::create_permission::CreatePermission;
use crate::permissions::delete_permissions::DeletePermissions;
use crate::permissions::get_permissions::GetPermissions;
use crate::users::activate_user::ActivateUser;
use crate::users::create_user::CreateUser;
use crate::users::deactivate_user::DeactivateUser;
use crate::users::delete_users::DeleteUsers;
use crate::users::get_users::GetUsers;
use crate::users::update_user::UpdateUser;
use async_trait::async_trait;

/// A backend collection a screen can list, create in and delete from.
#[async_trait]
pub trait Resource: Send + Sync {
    type Row: Clone + Send + Sync;
    type Create: Send + Sync;
    type CreateForm: Form<Command = Self::Create> + Default + Send + Sync;

    /// Singular name used in titles.
    const NAME: &'static str;

    fn id(row: &Self::Row) -> u32;
    fn columns() -> Vec<Column<Self::Row>>;

    async fn list(&self, page: &PageRequest) -> Result<Page<Self::Row>, GatehouseError>;
    async fn create(&self, command: &Self::Create) -> Result<(), GatehouseError>;
    async fn delete(&self, ids: Vec<u32>) -> Result<(), GatehouseError>;
}

/// A resource whose rows can be edited after creation.
#[async_trait]
pub trait Editable: Resource {
    type Update: Send + Sync;
    type UpdateForm: Form<Command = Self::Update> + Send + Sync;

    fn prefill(row: &Self::Row) -> Self::UpdateForm;

    async fn update(&self, command: &Self::Update) -> Result<(), GatehouseError>;
}

/// A resource whose rows carry an active flag.
#[async_trait]
pub trait Activatable: Resource {
    fn is_active(row: &Self::Row) -> bool;

    async fn activate(&self, id: u32) -> Result<(), GatehouseError>;
    async fn deactivate(&self, id: u32) -> Result<(), GatehouseError>;
}

/// Users, optionally expanded with their groups and permissions.
pub struct Users<'a, C: ?Sized> {
    client: &'a C,
    pub with_groups: Option<bool>,
    pub with_permissions: Option<bool>,
}

impl<'a, C: ?Sized> Users<'a, C> {
    pub fn new(client: &'a C) -> Self {
        Self {
            client,
            with_groups: None,
            with_permissions: None,
        }
    }
}

#[async_trait]
impl<C: UserClient + Sync + ?Sized> Resource for Users<'_, C> {
    type Row = User;
    type Create = CreateUser;
    type CreateForm = CreateUserForm;

    const NAME: &'static str = "user";

    fn id(row: &User) -> u32 {
        row.id
    }

    fn columns() -> Vec<Column<User>> {
        user_columns()
    }

    async fn list(&self, page: &PageRequest) -> Result<Page<User>, GatehouseError> {
        self.client
            .get_users(&GetUsers {
                page: *page,
                with_groups: self.with_groups,
                with_permissions: self.with_permissions,
            })
            .await
    }

    async fn create(&self, command: &CreateUser) -> Result<(), GatehouseError> {
        self.client.create_user(command).await?;
        Ok(())
    }

    async fn delete(&self, ids: Vec<u32>) -> Result<(), GatehouseError> {
        self.client.delete_users(&DeleteUsers { ids }).await
    }
}

#[async_trait]
impl<C: UserClient + Sync + ?Sized> Editable for Users<'_, C> {
    type Update = UpdateUser;
    type UpdateForm = UpdateUserForm;

    fn prefill(row: &User) -> UpdateUserForm {
        UpdateUserForm::from_user(row)
    }

    async fn update(&self, command: &UpdateUser) -> Result<(), GatehouseError> {
        self.client.update_user(command).await?;
        Ok(())
    }
}

#[async_trait]
impl<C: UserClient + Sync + ?Sized> Activatable for Users<'_, C> {
    fn is_active(row: &User) -> bool {
        row.is_active
    }

    async fn activate(&self, id: u32) -> Result<(), GatehouseError> {
        self.client.activate_user(&ActivateUser { user_id: id }).await
    }

    async fn deactivate(&self, id: u32) -> Result<(), GatehouseError> {
        self.client
            .deactivate_user(&DeactivateUser { user_id: id })
            .await
    }
}

pub struct Permissions<'a, C: ?Sized> {
    client: &'a C,
}

impl<'a, C: ?Sized> Permissions<'a, C> {
    pub fn new(client: &'a C) -> Self {
        Self { client }
    }
}

#[async_trait]
impl<C: PermissionClient + Sync + ?Sized> Resource for Permissions<'_, C> {
    type Row = Permission;
    type Create = CreatePermission;
    type CreateForm = CreatePermissionForm;

    const NAME: &'static str = "permission";

    fn id(row: &Permission) -> u32 {
        row.id
    }

    fn columns() -> Vec<Column<Permission>> {
        permission_columns()
    }

    async fn list(&self, page: &PageRequest) -> Result<Page<Permission>, GatehouseError> {
        self.client
            .get_permissions(&GetPermissions::new(*page))
            .await
    }

    async fn create(&self, command: &CreatePermission) -> Result<(), GatehouseError> {
        self.client.create_permission(command).await?;
        Ok(())
    }

    async fn delete(&self, ids: Vec<u32>) -> Result<(), GatehouseError> {
        self.client
            .delete_permissions(&DeletePermissions { ids })
            .await
    }
}

pub struct Groups<'a, C: ?Sized> {
    client: &'a C,
}

impl<'a, C: ?Sized> Groups<'a, C> {
    pub fn new(client: &'a C) -> Self {
        Self { client }
    }
}

#[async_trait]
impl<C: GroupClient + Sync + ?Sized> Resource for Groups<'_, C> {
    type Row = Group;
    type Create = CreateGroup;
    type CreateForm = CreateGroupForm;

    const NAME: &'static str = "group";

    fn id(row: &Group) -> u32 {
        row.id
    }

    fn columns() -> Vec<Column<Group>> {
        group_columns()
    }

    async fn list(&self, page: &PageRequest) -> Result<Page<Group>, GatehouseError> {
        self.client.get_groups(&GetGroups::new(*page)).await
    }

    async fn create(&self, command: &CreateGroup) -> Result<(), GatehouseError> {
        self.client.create_group(command).await?;
        Ok(())
    }

    async fn delete(&self, ids: Vec<u32>) -> Result<(), GatehouseError> {
        self.client.delete_groups(&DeleteGroups { ids }).await
    }
}
