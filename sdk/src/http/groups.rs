use crate::client::GroupClient;
use crate::error::GatehouseError;
use crate::groups::create_group::CreateGroup;
use crate::groups::delete_groups::DeleteGroups;
use crate::groups::get_groups::GetGroups;
use crate::http::client::HttpClient;
use crate::http::{read_data, read_empty, read_page, HttpTransport};
use crate::models::group::Group;
use crate::models::page::Page;
use crate::validatable::Validatable;
use async_trait::async_trait;

const PATH: &str = "/v1/groups";

#[async_trait]
impl GroupClient for HttpClient {
    async fn get_groups(&self, command: &GetGroups) -> Result<Page<Group>, GatehouseError> {
        get_groups(self, command).await
    }

    async fn create_group(&self, command: &CreateGroup) -> Result<Group, GatehouseError> {
        create_group(self, command).await
    }

    async fn delete_groups(&self, command: &DeleteGroups) -> Result<(), GatehouseError> {
        delete_groups(self, command).await
    }
}

async fn get_groups<T: HttpTransport>(
    transport: &T,
    command: &GetGroups,
) -> Result<Page<Group>, GatehouseError> {
    command.validate()?;
    let response = transport
        .get_with_query(PATH, &command.to_query())
        .await?;
    read_page(response).await
}

async fn create_group<T: HttpTransport>(
    transport: &T,
    command: &CreateGroup,
) -> Result<Group, GatehouseError> {
    command.validate()?;
    let response = transport.post(PATH, &command).await?;
    read_data(response).await
}

async fn delete_groups<T: HttpTransport>(
    transport: &T,
    command: &DeleteGroups,
) -> Result<(), GatehouseError> {
    command.validate()?;
    let response = transport.delete_with_body(PATH, &command).await?;
    read_empty(response).await
}
