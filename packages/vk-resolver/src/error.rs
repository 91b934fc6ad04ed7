//! Typed errors for resource resolution.
//!
//! Uses `thiserror` for library errors (not `anyhow`) so callers can match on
//! the failure and read its [`ResourceErrorCode`].

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Boxed error returned by screen-name lookup collaborators.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Result type alias for resolver operations.
pub type Result<T> = std::result::Result<T, ResourceError>;

/// Stable error codes exposed to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResourceErrorCode {
    InvalidResource,
    InvalidUrl,
    ResourceNotFound,
}

impl ResourceErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidResource => "INVALID_RESOURCE",
            Self::InvalidUrl => "INVALID_URL",
            Self::ResourceNotFound => "RESOURCE_NOT_FOUND",
        }
    }
}

impl std::fmt::Display for ResourceErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors that can occur while resolving a resource.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// Input was empty or could not be represented as a resource
    #[error("{message}")]
    InvalidResource { message: String },

    /// A platform URL that does not address anything
    #[error("{message}")]
    InvalidUrl { message: String },

    /// The screen-name lookup reported no unambiguous match
    #[error("Resource not found")]
    NotFound { screen_name: String },

    /// The screen-name lookup itself failed (transport, auth, API error)
    #[error("screen name lookup failed: {0}")]
    Lookup(#[source] BoxError),
}

impl ResourceError {
    pub fn invalid_resource(message: impl Into<String>) -> Self {
        Self::InvalidResource {
            message: message.into(),
        }
    }

    pub fn invalid_url(message: impl Into<String>) -> Self {
        Self::InvalidUrl {
            message: message.into(),
        }
    }

    pub fn not_found(screen_name: impl Into<String>) -> Self {
        Self::NotFound {
            screen_name: screen_name.into(),
        }
    }

    /// Code of this error. `None` for collaborator failures, which are not
    /// part of the resolver's own taxonomy.
    pub fn code(&self) -> Option<ResourceErrorCode> {
        match self {
            Self::InvalidResource { .. } => Some(ResourceErrorCode::InvalidResource),
            Self::InvalidUrl { .. } => Some(ResourceErrorCode::InvalidUrl),
            Self::NotFound { .. } => Some(ResourceErrorCode::ResourceNotFound),
            Self::Lookup(_) => None,
        }
    }
}
