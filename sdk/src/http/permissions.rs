use crate::client::PermissionClient;
use crate::error::GatehouseError;
use crate::permissions::create_permission::CreatePermission;
use crate::permissions::delete_permissions::DeletePermissions;
use crate::permissions::get_permissions::GetPermissions;
use crate::http::client::HttpClient;
use crate::http::{read_data, read_empty, read_page, HttpTransport};
use crate::models::permission::Permission;
use crate::models::page::Page;
use crate::validatable::Validatable;
use async_trait::async_trait;

const PATH: &str = "/v1/permissions";

#[async_trait]
impl PermissionClient for HttpClient {
    async fn get_permissions(&self, command: &GetPermissions) -> Result<Page<Permission>, GatehouseError> {
        get_permissions(self, command).await
    }

    async fn create_permission(&self, command: &CreatePermission) -> Result<Permission, GatehouseError> {
        create_permission(self, command).await
    }

    async fn delete_permissions(&self, command: &DeletePermissions) -> Result<(), GatehouseError> {
        delete_permissions(self, command).await
    }
}

async fn get_permissions<T: HttpTransport>(
    transport: &T,
    command: &GetPermissions,
) -> Result<Page<Permission>, GatehouseError> {
    command.validate()?;
    let response = transport
        .get_with_query(PATH, &command.to_query())
        .await?;
    read_page(response).await
}

async fn create_permission<T: HttpTransport>(
    transport: &T,
    command: &CreatePermission,
) -> Result<Permission, GatehouseError> {
    command.validate()?;
    let response = transport.post(PATH, &command).await?;
    read_data(response).await
}

async fn delete_permissions<T: HttpTransport>(
    transport: &T,
    command: &DeletePermissions,
) -> Result<(), GatehouseError> {
    command.validate()?;
    let response = transport.delete_with_body(PATH, &command).await?;
    read_empty(response).await
}
