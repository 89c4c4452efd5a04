//! API Error Types
//!
//! Every failure the client can surface to a page. The client never recovers
//! errors itself; callers decide what to show.

use thiserror::Error;

/// Client error types
#[derive(Error, Debug)]
pub enum ClientError {
    /// Base URL unset; no request was attempted
    #[error("API URL not configured. Set window.SARO_CONFIG.apiUrl, SARO_API_URL or --api-url")]
    ConfigurationMissing,

    /// The body was an HTML document, usually a frontend host answering instead of the API
    #[error("Got HTML instead of JSON from {url}. Check that the API URL points at the backend")]
    UnexpectedHtmlResponse { url: String },

    /// Non-success status; message is the `detail` field or `HTTP <status>`
    #[error("{message}")]
    Api { status: u16, message: String },

    /// Transport-level failure (DNS, refused connection, timeout)
    #[error("Network error: {0}")]
    Network(String),

    /// A success status with a body that is neither HTML nor JSON
    #[error("Invalid JSON from {url}: {message}")]
    InvalidJson { url: String, message: String },

    /// Request body could not be encoded
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ClientError {
    /// HTTP status for `Api` errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Short machine-readable kind, printed by the CLI next to the message.
    pub fn kind(&self) -> &'static str {
        match self {
            ClientError::ConfigurationMissing => "CONFIGURATION_MISSING",
            ClientError::UnexpectedHtmlResponse { .. } => "UNEXPECTED_HTML_RESPONSE",
            ClientError::Api { .. } => "API_ERROR",
            ClientError::Network(_) => "NETWORK_FAILURE",
            ClientError::InvalidJson { .. } => "INVALID_JSON",
            ClientError::Serialization(_) => "SERIALIZATION_ERROR",
        }
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_displays_message_only() {
        let err = ClientError::Api {
            status: 422,
            message: "model_name is required".to_string(),
        };
        assert_eq!(err.to_string(), "model_name is required");
        assert_eq!(err.status(), Some(422));
    }

    #[test]
    fn test_html_error_names_url() {
        let err = ClientError::UnexpectedHtmlResponse {
            url: "https://app.example.com/api/v1/health".to_string(),
        };
        assert!(err.to_string().contains("https://app.example.com/api/v1/health"));
        assert_eq!(err.kind(), "UNEXPECTED_HTML_RESPONSE");
    }
}
