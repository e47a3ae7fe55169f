use crate::error::GatehouseError;
use serde::{Deserialize, Serialize};

pub const SUCCESS_CODE: i32 = 0;

/// `ApiResponse` is the envelope wrapping every backend reply:
/// `{ "code": 0, "data": ..., "msg": null }`.
///
/// A non-zero `code` means the operation failed even if the HTTP status was a success.
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub code: i32,
    pub data: Option<T>,
    pub msg: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<u64>,
}

impl<T> ApiResponse<T> {
    pub fn is_success(&self) -> bool {
        self.code == SUCCESS_CODE
    }

    /// Returns the payload, failing on a non-zero code.
    pub fn into_result(self) -> Result<Option<T>, GatehouseError> {
        if !self.is_success() {
            return Err(GatehouseError::InvalidResponse(
                self.code,
                self.msg.unwrap_or_default(),
            ));
        }

        Ok(self.data)
    }

    /// Returns the payload, failing on a non-zero code or a missing payload.
    pub fn into_data(self) -> Result<T, GatehouseError> {
        self.into_result()?.ok_or(GatehouseError::EmptyResponse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::user::User;

    #[test]
    fn successful_response_should_yield_data() {
        let response: ApiResponse<String> =
            serde_json::from_str(r#"{"code": 0, "data": "token", "msg": null}"#).unwrap();
        assert_eq!(response.into_data().unwrap(), "token");
    }

    #[test]
    fn non_zero_code_should_fail() {
        let response: ApiResponse<String> =
            serde_json::from_str(r#"{"code": 20002, "msg": "Username already exists."}"#)
                .unwrap();
        let error = response.into_data().unwrap_err();
        assert!(matches!(error, GatehouseError::InvalidResponse(20002, message) if message == "Username already exists."));
    }

    #[test]
    fn missing_data_should_fail_as_empty_response() {
        let response: ApiResponse<String> = serde_json::from_str(r#"{"code": 0}"#).unwrap();
        assert!(matches!(
            response.into_data(),
            Err(GatehouseError::EmptyResponse)
        ));
    }

    #[test]
    fn failed_reply_without_data_should_parse_for_any_payload() {
        let response: ApiResponse<User> =
            serde_json::from_str(r#"{"code": 40001, "msg": "Token expired"}"#).unwrap();
        assert!(response.data.is_none());
        assert!(matches!(
            response.into_result(),
            Err(GatehouseError::InvalidResponse(40001, _))
        ));
    }
}
