use thiserror::Error;

#[derive(Debug, Error)]
pub enum GatehouseError {
    #[error("Invalid format")]
    InvalidFormat,
    #[error("Cannot load resource with key: {0}")]
    CannotLoadResource(String),
    #[error("Cannot save resource with key: {0}")]
    CannotSaveResource(String),
    #[error("Unauthenticated")]
    Unauthenticated,
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("Invalid username")]
    InvalidUsername,
    #[error("Invalid password")]
    InvalidPassword,
    #[error("Invalid nickname")]
    InvalidNickname,
    #[error("Invalid avatar URI")]
    InvalidAvatarUri,
    #[error("Invalid resource name")]
    InvalidResourceName,
    #[error("Invalid identifier")]
    InvalidIdentifier,
    #[error("Identifiers cannot be empty")]
    EmptyIdentifiers,
    #[error("Invalid page size: {0}")]
    InvalidPageSize(u32),
    #[error("Request error")]
    RequestError(#[from] reqwest::Error),
    #[error("HTTP response error, status: {0}, body: {1}")]
    HttpResponseError(u16, String),
    #[error("Cannot parse URL")]
    CannotParseUrl,
    #[error("Invalid response, code: {0}, message: {1}")]
    InvalidResponse(i32, String),
    #[error("Empty response")]
    EmptyResponse,
    #[error("IO error")]
    IoError(#[from] std::io::Error),
}

impl GatehouseError {
    pub fn as_code(&self) -> u32 {
        match self {
            GatehouseError::InvalidFormat => 4,
            GatehouseError::CannotLoadResource(_) => 21,
            GatehouseError::CannotSaveResource(_) => 22,
            GatehouseError::Unauthenticated => 40,
            GatehouseError::InvalidCredentials => 42,
            GatehouseError::InvalidUsername => 43,
            GatehouseError::InvalidPassword => 44,
            GatehouseError::InvalidNickname => 45,
            GatehouseError::InvalidAvatarUri => 46,
            GatehouseError::InvalidResourceName => 47,
            GatehouseError::InvalidIdentifier => 48,
            GatehouseError::EmptyIdentifiers => 49,
            GatehouseError::InvalidPageSize(_) => 50,
            GatehouseError::RequestError(_) => 52,
            GatehouseError::IoError(_) => 200,
            GatehouseError::HttpResponseError(_, _) => 300,
            GatehouseError::CannotParseUrl => 303,
            GatehouseError::InvalidResponse(_, _) => 304,
            GatehouseError::EmptyResponse => 305,
        }
    }

    pub fn as_str(&self) -> &'static str {
        Self::from_code_as_str(self.as_code())
    }

    pub fn from_code_as_str(code: u32) -> &'static str {
        match code {
            4 => "invalid_format",
            21 => "cannot_load_resource",
            22 => "cannot_save_resource",
            40 => "unauthenticated",
            42 => "invalid_credentials",
            43 => "invalid_username",
            44 => "invalid_password",
            45 => "invalid_nickname",
            46 => "invalid_avatar_uri",
            47 => "invalid_resource_name",
            48 => "invalid_identifier",
            49 => "empty_identifiers",
            50 => "invalid_page_size",
            52 => "request_error",
            200 => "io_error",
            300 => "http_response_error",
            303 => "cannot_parse_url",
            304 => "invalid_response",
            305 => "empty_response",
            _ => "error",
        }
    }

    /// Returns the HTTP status when the backend rejected the request.
    pub fn http_status(&self) -> Option<u16> {
        match self {
            GatehouseError::HttpResponseError(status, _) => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_should_map_back_to_names() {
        assert_eq!(GatehouseError::InvalidUsername.as_str(), "invalid_username");
        assert_eq!(
            GatehouseError::HttpResponseError(404, String::new()).as_str(),
            "http_response_error"
        );
        assert_eq!(GatehouseError::from_code_as_str(999), "error");
    }

    #[test]
    fn http_status_should_be_exposed_only_for_response_errors() {
        assert_eq!(
            GatehouseError::HttpResponseError(401, "unauthorized".to_string()).http_status(),
            Some(401)
        );
        assert_eq!(GatehouseError::Unauthenticated.http_status(), None);
    }
}
