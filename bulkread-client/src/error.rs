//! Error types for the CRM client

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur when talking to the CRM
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed before a response arrived, or its body could not be read
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// API returned an unexpected status code
    #[error("API error (status {status}): {message}")]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Raw response body
        message: String,
    },

    /// Failed to parse response
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// Failed to serialize a request or export body
    #[error("Failed to serialize body: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The field validator could not load the module schema
    #[error("Failed to initialize field validator for {module}: {source}")]
    ValidatorInit {
        module: String,
        #[source]
        source: Box<ClientError>,
    },

    /// Validation was attempted before the schema was loaded
    #[error("Field validator for {module} used before initialization")]
    ValidatorNotInitialized { module: String },

    /// The field validator rejected the candidate list outright
    #[error("Field validation failed for {module}: {source}")]
    FieldValidation {
        module: String,
        #[source]
        source: Box<ClientError>,
    },

    /// Every candidate field was skipped
    #[error("No valid fields found for module {module}")]
    NoValidFields { module: String },

    /// The vendor accepted the request but returned no job handle
    #[error("No job ID in response")]
    MissingJobId,

    /// Direct users export failed while fetching
    #[error("Failed to fetch users: {0}")]
    UsersFetch(#[source] Box<ClientError>),

    /// Writing an export to disk failed
    #[error("Failed to write {}: {source}", path.display())]
    Store {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Invalid request
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl ClientError {
    /// Create an API error from status code and message
    pub fn api_error(status: u16, message: impl Into<String>) -> Self {
        Self::ApiError {
            status,
            message: message.into(),
        }
    }

    /// HTTP status carried by this error, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::ApiError { status, .. } => Some(*status),
            Self::RequestFailed(e) => e.status().map(|s| s.as_u16()),
            Self::ValidatorInit { source, .. }
            | Self::FieldValidation { source, .. }
            | Self::UsersFetch(source) => source.status(),
            _ => None,
        }
    }

    /// Check if this error is a client error (4xx status)
    pub fn is_client_error(&self) -> bool {
        matches!(self.status(), Some(status) if (400..500).contains(&status))
    }

    /// Check if this error is a server error (5xx status)
    pub fn is_server_error(&self) -> bool {
        matches!(self.status(), Some(status) if status >= 500)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display_includes_status_and_body() {
        let err = ClientError::api_error(400, r#"{"code":"INVALID_DATA"}"#);
        let msg = err.to_string();
        assert!(msg.contains("400"));
        assert!(msg.contains(r#"{"code":"INVALID_DATA"}"#));
        assert!(err.is_client_error());
        assert!(!err.is_server_error());
    }

    #[test]
    fn test_status_through_wrappers() {
        let err = ClientError::ValidatorInit {
            module: "Leads".into(),
            source: Box::new(ClientError::api_error(503, "down")),
        };
        assert_eq!(err.status(), Some(503));
        assert!(err.is_server_error());
        assert!(err.to_string().contains("Leads"));
    }

    #[test]
    fn test_no_status() {
        assert_eq!(ClientError::MissingJobId.status(), None);
        assert!(!ClientError::NoValidFields { module: "Leads".into() }.is_client_error());
    }
}
