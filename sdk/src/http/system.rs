use crate::client::SystemClient;
use crate::error::GatehouseError;
use crate::http::client::HttpClient;
use crate::http::{read_data, read_empty, HttpTransport};
use crate::users::login_user::LoginUser;
use crate::users::logout_user::LogoutUser;
use crate::validatable::Validatable;
use async_trait::async_trait;
use tracing::debug;

const LOGIN_PATH: &str = "/login";
const LOGOUT_PATH: &str = "/logout";

#[async_trait]
impl SystemClient for HttpClient {
    async fn login_user(&self, command: &LoginUser) -> Result<String, GatehouseError> {
        login_user(self, command).await
    }

    async fn logout_user(&self, command: &LogoutUser) -> Result<(), GatehouseError> {
        logout_user(self, command).await
    }
}

async fn login_user<T: HttpTransport>(
    transport: &T,
    command: &LoginUser,
) -> Result<String, GatehouseError> {
    command.validate()?;
    let response = transport.post(LOGIN_PATH, &command).await?;
    let token: String = read_data(response).await?;
    if token.is_empty() {
        return Err(GatehouseError::InvalidCredentials);
    }

    transport.set_access_token(Some(token.clone())).await;
    debug!("Logged in as user: {}", command.username);
    Ok(token)
}

async fn logout_user<T: HttpTransport>(
    transport: &T,
    _command: &LogoutUser,
) -> Result<(), GatehouseError> {
    let response = transport.get(LOGOUT_PATH).await?;
    read_empty(response).await?;
    transport.set_access_token(None).await;
    Ok(())
}
