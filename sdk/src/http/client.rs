use crate::error::GatehouseError;
use crate::http::config::HttpClientConfig;
use crate::http::HttpTransport;
use async_trait::async_trait;
use reqwest::{Response, Url};
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::trace;

const UNAUTHORIZED_PATHS: &[&str] = &["/login"];

/// HTTP client for interacting with the Gatehouse API.
/// It requires a valid API URL.
#[derive(Debug)]
pub struct HttpClient {
    /// The URL of the Gatehouse API.
    pub api_url: Url,
    client: reqwest::Client,
    access_token: RwLock<String>,
}

impl HttpClient {
    /// Create a new HTTP client for interacting with the Gatehouse API using the provided API URL.
    pub fn new(api_url: &str) -> Result<Self, GatehouseError> {
        Self::create(Arc::new(HttpClientConfig {
            api_url: api_url.to_string(),
            ..Default::default()
        }))
    }

    /// Create a new HTTP client for interacting with the Gatehouse API using the provided configuration.
    pub fn create(config: Arc<HttpClientConfig>) -> Result<Self, GatehouseError> {
        let api_url = Url::parse(&config.api_url).map_err(|_| GatehouseError::CannotParseUrl)?;
        let client = reqwest::Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            api_url,
            client,
            access_token: RwLock::new("".to_string()),
        })
    }

    async fn handle_response(response: Response) -> Result<Response, GatehouseError> {
        match response.status().is_success() {
            true => Ok(response),
            false => Err(GatehouseError::HttpResponseError(
                response.status().as_u16(),
                response.text().await.unwrap_or("error".to_string()),
            )),
        }
    }

    async fn fail_if_not_authenticated(&self, path: &str) -> Result<(), GatehouseError> {
        if UNAUTHORIZED_PATHS.contains(&path) {
            return Ok(());
        }
        if !self.is_authenticated().await {
            return Err(GatehouseError::Unauthenticated);
        }
        Ok(())
    }
}

#[async_trait]
impl HttpTransport for HttpClient {
    fn get_url(&self, path: &str) -> Result<Url, GatehouseError> {
        self.api_url
            .join(path)
            .map_err(|_| GatehouseError::CannotParseUrl)
    }

    async fn get(&self, path: &str) -> Result<Response, GatehouseError> {
        let url = self.get_url(path)?;
        self.fail_if_not_authenticated(path).await?;
        trace!("GET {url}");
        let token = self.access_token.read().await;
        let response = self
            .client
            .get(url)
            .bearer_auth(token.as_str())
            .send()
            .await?;
        Self::handle_response(response).await
    }

    async fn get_with_query<T: Serialize + Sync + ?Sized>(
        &self,
        path: &str,
        query: &T,
    ) -> Result<Response, GatehouseError> {
        let url = self.get_url(path)?;
        self.fail_if_not_authenticated(path).await?;
        trace!("GET {url} with query");
        let token = self.access_token.read().await;
        let response = self
            .client
            .get(url)
            .bearer_auth(token.as_str())
            .query(query)
            .send()
            .await?;
        Self::handle_response(response).await
    }

    async fn post<T: Serialize + Sync + ?Sized>(
        &self,
        path: &str,
        payload: &T,
    ) -> Result<Response, GatehouseError> {
        let url = self.get_url(path)?;
        self.fail_if_not_authenticated(path).await?;
        trace!("POST {url}");
        let token = self.access_token.read().await;
        let response = self
            .client
            .post(url)
            .bearer_auth(token.as_str())
            .json(payload)
            .send()
            .await?;
        Self::handle_response(response).await
    }

    async fn put<T: Serialize + Sync + ?Sized>(
        &self,
        path: &str,
        payload: &T,
    ) -> Result<Response, GatehouseError> {
        let url = self.get_url(path)?;
        self.fail_if_not_authenticated(path).await?;
        trace!("PUT {url}");
        let token = self.access_token.read().await;
        let response = self
            .client
            .put(url)
            .bearer_auth(token.as_str())
            .json(payload)
            .send()
            .await?;
        Self::handle_response(response).await
    }

    async fn delete_with_body<T: Serialize + Sync + ?Sized>(
        &self,
        path: &str,
        payload: &T,
    ) -> Result<Response, GatehouseError> {
        let url = self.get_url(path)?;
        self.fail_if_not_authenticated(path).await?;
        trace!("DELETE {url}");
        let token = self.access_token.read().await;
        let response = self
            .client
            .delete(url)
            .bearer_auth(token.as_str())
            .json(payload)
            .send()
            .await?;
        Self::handle_response(response).await
    }

    async fn is_authenticated(&self) -> bool {
        let token = self.access_token.read().await;
        !token.is_empty()
    }

    async fn set_access_token(&self, token: Option<String>) {
        let mut current_token = self.access_token.write().await;
        if let Some(token) = token {
            *current_token = token;
        } else {
            *current_token = "".to_string();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_api_url_should_be_rejected() {
        let client = HttpClient::new("not a url");
        assert!(matches!(client, Err(GatehouseError::CannotParseUrl)));
    }

    #[test]
    fn paths_should_be_resolved_against_api_url() {
        let client = HttpClient::new("http://localhost:3000").unwrap();
        let url = client.get_url("/v1/users/7/activate").unwrap();
        assert_eq!(url.as_str(), "http://localhost:3000/v1/users/7/activate");
    }

    #[tokio::test]
    async fn requests_without_token_should_fail_before_sending() {
        let client = HttpClient::new("http://localhost:1").unwrap();
        assert!(!client.is_authenticated().await);
        let result = client.get("/v1/users/me").await;
        assert!(matches!(result, Err(GatehouseError::Unauthenticated)));
    }

    #[tokio::test]
    async fn access_token_should_be_set_and_cleared() {
        let client = HttpClient::new("http://localhost:3000").unwrap();
        client.set_access_token(Some("token".to_string())).await;
        assert!(client.is_authenticated().await);
        client.set_access_token(None).await;
        assert!(!client.is_authenticated().await);
    }
}
