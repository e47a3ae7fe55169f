use crate::client::UserClient;
use crate::error::GatehouseError;
use crate::http::client::HttpClient;
use crate::http::{read_data, read_empty, read_page, HttpTransport};
use crate::models::page::Page;
use crate::models::user::User;
use crate::users::activate_user::ActivateUser;
use crate::users::create_user::CreateUser;
use crate::users::deactivate_user::DeactivateUser;
use crate::users::delete_users::DeleteUsers;
use crate::users::get_me::GetMe;
use crate::users::get_users::GetUsers;
use crate::users::update_user::UpdateUser;
use crate::validatable::Validatable;
use async_trait::async_trait;

const PATH: &str = "/v1/users";

#[async_trait]
impl UserClient for HttpClient {
    async fn get_users(&self, command: &GetUsers) -> Result<Page<User>, GatehouseError> {
        get_users(self, command).await
    }

    async fn create_user(&self, command: &CreateUser) -> Result<User, GatehouseError> {
        create_user(self, command).await
    }

    async fn update_user(&self, command: &UpdateUser) -> Result<User, GatehouseError> {
        update_user(self, command).await
    }

    async fn delete_users(&self, command: &DeleteUsers) -> Result<(), GatehouseError> {
        delete_users(self, command).await
    }

    async fn activate_user(&self, command: &ActivateUser) -> Result<(), GatehouseError> {
        activate_user(self, command).await
    }

    async fn deactivate_user(&self, command: &DeactivateUser) -> Result<(), GatehouseError> {
        deactivate_user(self, command).await
    }

    async fn get_me(&self, command: &GetMe) -> Result<User, GatehouseError> {
        get_me(self, command).await
    }
}

async fn get_users<T: HttpTransport>(
    transport: &T,
    command: &GetUsers,
) -> Result<Page<User>, GatehouseError> {
    command.validate()?;
    let response = transport
        .get_with_query(PATH, &command.to_query())
        .await?;
    read_page(response).await
}

async fn create_user<T: HttpTransport>(
    transport: &T,
    command: &CreateUser,
) -> Result<User, GatehouseError> {
    command.validate()?;
    let response = transport.post(PATH, &command).await?;
    read_data(response).await
}

async fn update_user<T: HttpTransport>(
    transport: &T,
    command: &UpdateUser,
) -> Result<User, GatehouseError> {
    command.validate()?;
    let response = transport
        .put(&format!("{PATH}/{}", command.user_id), &command)
        .await?;
    read_data(response).await
}

async fn delete_users<T: HttpTransport>(
    transport: &T,
    command: &DeleteUsers,
) -> Result<(), GatehouseError> {
    command.validate()?;
    let response = transport.delete_with_body(PATH, &command).await?;
    read_empty(response).await
}

async fn activate_user<T: HttpTransport>(
    transport: &T,
    command: &ActivateUser,
) -> Result<(), GatehouseError> {
    command.validate()?;
    let response = transport
        .get(&format!("{PATH}/{}/activate", command.user_id))
        .await?;
    read_empty(response).await
}

async fn deactivate_user<T: HttpTransport>(
    transport: &T,
    command: &DeactivateUser,
) -> Result<(), GatehouseError> {
    command.validate()?;
    let response = transport
        .get(&format!("{PATH}/{}/deactivate", command.user_id))
        .await?;
    read_empty(response).await
}

async fn get_me<T: HttpTransport>(transport: &T, _command: &GetMe) -> Result<User, GatehouseError> {
    let response = transport.get(&format!("{PATH}/me")).await?;
    read_data(response).await
}
