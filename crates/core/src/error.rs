//! Common error types for the gate and its provider bootstrap

/// Standard result type for core operations
pub type CoreResult<T> = std::result::Result<T, CoreError>;

/// Core error types that can be shared across crates
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    #[error("Missing required setting: {name}")]
    MissingSetting { name: &'static str },

    #[error("Identity provider request failed: {message}")]
    Provider { message: String },

    #[error("Rejected by identity provider: {message}")]
    Rejected { message: String },

    #[error("Invalid provider response: {message}")]
    InvalidResponse { message: String },
}

impl CoreError {
    /// Create a missing setting error
    pub const fn missing_setting(name: &'static str) -> Self {
        Self::MissingSetting { name }
    }

    /// Create a provider transport error
    pub fn provider(message: impl Into<String>) -> Self {
        Self::Provider {
            message: message.into(),
        }
    }

    /// Create a rejection error for requests the provider refused
    pub fn rejected(message: impl Into<String>) -> Self {
        Self::Rejected {
            message: message.into(),
        }
    }

    /// Create an invalid response error
    pub fn invalid_response(message: impl Into<String>) -> Self {
        Self::InvalidResponse {
            message: message.into(),
        }
    }
}

impl From<reqwest::Error> for CoreError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::invalid_response(err.to_string())
        } else {
            Self::provider(err.to_string())
        }
    }
}
