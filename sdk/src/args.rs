use crate::http::config::HttpClientConfig;
use crate::models::page::DEFAULT_PAGE_SIZE;
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// The arguments used to create a client.
/// We are not using default values here because we want to be able to
/// distinguish between the default value and the value that was not
/// provided by the user. This allows us to fallback to values provided
/// in config.toml.
#[derive(Parser, Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[command(author, version, about, long_about = None)]
pub struct ArgsOptional {
    /// The optional URL of the Gatehouse API
    ///
    /// [default: http://127.0.0.1:3000]
    #[arg(long, env = "GATEHOUSE_API_URL")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,

    /// The optional timeout of a single request in seconds
    ///
    /// [default: 30]
    #[arg(long)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<u64>,

    /// The optional default number of rows of a single page
    ///
    /// [default: 20]
    #[arg(long)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,

    /// The optional default username, only read from config.toml
    #[arg(skip)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Args {
    pub api_url: String,

    pub timeout: u64,

    pub page_size: u32,

    pub username: Option<String>,
}

impl Args {
    /// Returns the host and port of the API URL, used to tell sessions of different servers apart.
    pub fn get_server_address(&self) -> String {
        let address = self
            .api_url
            .trim_start_matches("http://")
            .trim_start_matches("https://")
            .replace("localhost", "127.0.0.1");
        address.trim_end_matches('/').to_string()
    }

    pub fn http_client_config(&self) -> HttpClientConfig {
        HttpClientConfig {
            api_url: self.api_url.clone(),
            timeout: Duration::from_secs(self.timeout),
        }
    }
}

impl Default for Args {
    fn default() -> Self {
        let http = HttpClientConfig::default();
        Self {
            api_url: http.api_url,
            timeout: http.timeout.as_secs(),
            page_size: DEFAULT_PAGE_SIZE,
            username: None,
        }
    }
}

/// Later entries take precedence over earlier ones.
impl From<Vec<ArgsOptional>> for Args {
    fn from(args_set: Vec<ArgsOptional>) -> Self {
        let mut args = Args::default();

        for optional_args in args_set {
            if let Some(api_url) = optional_args.api_url {
                args.api_url = api_url;
            }
            if let Some(timeout) = optional_args.timeout {
                args.timeout = timeout;
            }
            if let Some(page_size) = optional_args.page_size {
                args.page_size = page_size;
            }
            if let Some(username) = optional_args.username {
                args.username = Some(username);
            }
        }

        args
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_line_should_override_config_file() {
        let from_file = ArgsOptional {
            api_url: Some("http://admin.internal:8000".to_string()),
            page_size: Some(50),
            username: Some("admin".to_string()),
            ..Default::default()
        };
        let from_command_line = ArgsOptional {
            api_url: Some("http://localhost:9000".to_string()),
            ..Default::default()
        };

        let args = Args::from(vec![from_file, from_command_line]);
        assert_eq!(args.api_url, "http://localhost:9000");
        assert_eq!(args.page_size, 50);
        assert_eq!(args.timeout, 30);
        assert_eq!(args.username.as_deref(), Some("admin"));
    }

    #[test]
    fn server_address_should_strip_scheme() {
        let args = Args {
            api_url: "http://localhost:3000/".to_string(),
            ..Default::default()
        };
        assert_eq!(args.get_server_address(), "127.0.0.1:3000");
    }
}
