use std::time::Duration;

/// Configuration for the HTTP client.
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// The URL of the Gatehouse API.
    pub api_url: String,
    /// Timeout of a single request, there are no retries.
    pub timeout: Duration,
}

impl Default for HttpClientConfig {
    fn default() -> HttpClientConfig {
        HttpClientConfig {
            api_url: "http://127.0.0.1:3000".to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}
