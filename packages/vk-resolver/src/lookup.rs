//! Screen-name lookup collaborator.
//!
//! The resolver never talks to the network itself. Anything that can answer
//! `utils.resolveScreenName` implements [`ScreenNameLookup`]; transport,
//! auth, retries and timeouts are its concern.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::BoxError;

/// Object returned for an unambiguous screen name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreenNameObject {
    #[serde(rename = "type")]
    pub kind: String,
    pub object_id: u64,
}

impl ScreenNameObject {
    pub fn new(kind: impl Into<String>, object_id: u64) -> Self {
        Self {
            kind: kind.into(),
            object_id,
        }
    }
}

/// Payload of `utils.resolveScreenName`.
///
/// The API answers with an object on success and with a list (usually empty)
/// when the name is unknown or ambiguous.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScreenNameResponse {
    Found(ScreenNameObject),
    Ambiguous(Vec<serde_json::Value>),
}

impl ScreenNameResponse {
    pub fn found(kind: impl Into<String>, object_id: u64) -> Self {
        Self::Found(ScreenNameObject::new(kind, object_id))
    }

    pub fn not_found() -> Self {
        Self::Ambiguous(Vec::new())
    }
}

#[async_trait]
pub trait ScreenNameLookup: Send + Sync {
    async fn resolve_screen_name(
        &self,
        screen_name: &str,
    ) -> std::result::Result<ScreenNameResponse, BoxError>;
}

/// Lookup that refuses every request.
///
/// Lets the local grammars run without credentials; any input that would
/// need the network fails with [`crate::ResourceError::Lookup`].
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineLookup;

#[async_trait]
impl ScreenNameLookup for OfflineLookup {
    async fn resolve_screen_name(
        &self,
        screen_name: &str,
    ) -> std::result::Result<ScreenNameResponse, BoxError> {
        Err(format!("remote lookup is disabled, cannot resolve '{}'", screen_name).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_found_object() {
        let response: ScreenNameResponse =
            serde_json::from_str(r#"{"type": "page", "object_id": 42}"#).unwrap();
        assert_eq!(response, ScreenNameResponse::found("page", 42));
    }

    #[test]
    fn test_parses_empty_list_as_ambiguous() {
        let response: ScreenNameResponse = serde_json::from_str("[]").unwrap();
        assert_eq!(response, ScreenNameResponse::not_found());
    }

    #[tokio::test]
    async fn test_offline_lookup_fails() {
        let err = OfflineLookup.resolve_screen_name("durov").await.unwrap_err();
        assert!(err.to_string().contains("durov"));
    }
}
