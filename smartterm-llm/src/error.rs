use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LLMError {
    #[error("Authentication failed: {message}")]
    Authentication { message: String },

    #[error("Rate limit exceeded")]
    RateLimit,

    #[error("Invalid request: {message}")]
    InvalidRequest { message: String },

    #[error("Network error: {message}")]
    Network { message: String },

    #[error("Failed to parse response: {message}")]
    Parse { message: String },

    #[error("{message}")]
    Provider { message: String },
}
