use thiserror::Error;

/// Errors that can occur while talking to the identity provider.
#[derive(Debug, Error)]
pub enum ConnectorError {
    /// HTTP request/response error
    #[error("HTTP error: {0}")]
    HttpError(String),
    /// Provider unreachable or timed out
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),
    /// Response body did not match the expected shape
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
    /// Credential rejected by the provider (401/403)
    #[error("Unauthorized: {0}")]
    Unauthorized(String),
    /// Entity does not exist at the provider (404)
    #[error("Not found: {0}")]
    NotFound(String),
    /// Internal error in the connector itself
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<reqwest::Error> for ConnectorError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::ServiceUnavailable(format!("Request timeout: {}", err))
        } else if err.is_connect() {
            Self::ServiceUnavailable(format!("Connection failed: {}", err))
        } else {
            Self::HttpError(err.to_string())
        }
    }
}
