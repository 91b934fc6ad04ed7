use serde::{Deserialize, Serialize};

use crate::error::{Result, VkError};

/// Request parameters for `utils.resolveScreenName`.
#[derive(Debug, Clone, Serialize)]
pub struct ResolveScreenNameParams<'a> {
    pub screen_name: &'a str,
}

/// Wrapper for VK API responses.
///
/// Every method answers with exactly one of `response` or `error`.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiEnvelope<T> {
    pub response: Option<T>,
    pub error: Option<ApiErrorBody>,
}

/// Error object of a failed API call.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    pub error_code: i64,
    pub error_msg: String,
}

impl<T> ApiEnvelope<T> {
    pub fn into_result(self) -> Result<T> {
        match (self.response, self.error) {
            (_, Some(error)) => Err(VkError::Api {
                code: error.error_code,
                message: error.error_msg,
            }),
            (Some(response), None) => Ok(response),
            (None, None) => Err(VkError::Parse(
                "response contains neither `response` nor `error`".into(),
            )),
        }
    }
}
