use crate::error::GatehouseError;
use crate::models::page::Page;
use crate::models::response::ApiResponse;
use async_trait::async_trait;
use reqwest::{Response, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;

pub mod client;
pub mod config;
pub mod groups;
pub mod permissions;
pub mod system;
pub mod users;

#[async_trait]
pub trait HttpTransport {
    /// Get full URL for the provided path.
    fn get_url(&self, path: &str) -> Result<Url, GatehouseError>;

    /// Invoke HTTP GET request to the Gatehouse API.
    async fn get(&self, path: &str) -> Result<Response, GatehouseError>;

    /// Invoke HTTP GET request to the Gatehouse API with query parameters.
    async fn get_with_query<T: Serialize + Sync + ?Sized>(
        &self,
        path: &str,
        query: &T,
    ) -> Result<Response, GatehouseError>;

    /// Invoke HTTP POST request to the Gatehouse API.
    async fn post<T: Serialize + Sync + ?Sized>(
        &self,
        path: &str,
        payload: &T,
    ) -> Result<Response, GatehouseError>;

    /// Invoke HTTP PUT request to the Gatehouse API.
    async fn put<T: Serialize + Sync + ?Sized>(
        &self,
        path: &str,
        payload: &T,
    ) -> Result<Response, GatehouseError>;

    /// Invoke HTTP DELETE request to the Gatehouse API with a JSON body.
    async fn delete_with_body<T: Serialize + Sync + ?Sized>(
        &self,
        path: &str,
        payload: &T,
    ) -> Result<Response, GatehouseError>;

    /// Returns true if the client is authenticated.
    async fn is_authenticated(&self) -> bool;

    /// Set the access token.
    async fn set_access_token(&self, token: Option<String>);
}

/// Decodes the envelope and returns its payload.
pub(crate) async fn read_data<T: DeserializeOwned>(
    response: Response,
) -> Result<T, GatehouseError> {
    let envelope: ApiResponse<T> = response.json().await?;
    envelope.into_data()
}

/// Decodes the envelope of a list endpoint. A missing payload is an empty page.
pub(crate) async fn read_page<T: DeserializeOwned>(
    response: Response,
) -> Result<Page<T>, GatehouseError> {
    let envelope: ApiResponse<Vec<T>> = response.json().await?;
    let total = envelope.total;
    let data = envelope.into_result()?.unwrap_or_default();
    Ok(Page::new(data, total))
}

/// Decodes the envelope of an endpoint whose payload is not used.
pub(crate) async fn read_empty(response: Response) -> Result<(), GatehouseError> {
    let envelope: ApiResponse<serde_json::Value> = response.json().await?;
    envelope.into_result()?;
    Ok(())
}
