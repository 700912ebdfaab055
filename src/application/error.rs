// Failure variants of backend calls
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClientError {
    /// The request never produced a response
    #[error("request to {path} failed: {reason}")]
    Transport { path: String, reason: String },

    /// Non-2xx response; `message` is the backend's `error` text when it sent one
    #[error("{message}")]
    Status { status: u16, message: String },

    #[error("invalid response from {path}: {reason}")]
    Decode { path: String, reason: String },

    #[error("User ID not found")]
    MissingUserId,
}

impl ClientError {
    pub fn status(status: u16, message: Option<String>) -> Self {
        let message = message
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| format!("Request failed with status {}", status));
        ClientError::Status { status, message }
    }
}

pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_message_prefers_backend_text() {
        let err = ClientError::status(403, Some("Unauthorized".to_string()));
        assert_eq!(err.to_string(), "Unauthorized");

        let err = ClientError::status(500, Some("  ".to_string()));
        assert_eq!(err.to_string(), "Request failed with status 500");
    }
}
