//! Error types for the VK client.

use thiserror::Error;

/// Result type for VK client operations.
pub type Result<T> = std::result::Result<T, VkError>;

/// VK client errors.
#[derive(Debug, Error)]
pub enum VkError {
    /// Configuration error (missing token, invalid settings)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Network error (connection failed, timeout)
    #[error("Network error: {0}")]
    Network(String),

    /// HTTP error (non-2xx status)
    #[error("HTTP error {status}: {body}")]
    Http { status: u16, body: String },

    /// Error object returned by the API (`{"error": {...}}`)
    #[error("VK API error {code}: {message}")]
    Api { code: i64, message: String },

    /// Parse error (invalid JSON, unexpected response format)
    #[error("Parse error: {0}")]
    Parse(String),
}
