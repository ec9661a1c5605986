//! Error types for the ScriptBlox client.

/// Client errors.
#[derive(Debug, thiserror::Error)]
pub enum ScriptbloxError {
    /// A fetch parameter was rejected before any request was made.
    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },

    /// The service answered with a non-success status.
    #[error("request failed with status {status}: {body}")]
    RequestFailed { status: u16, body: String },

    /// The request never got a response.
    #[error("network error: {message}")]
    Network { message: String },

    /// The response body was not the expected JSON document.
    #[error("invalid response: {message}")]
    Decode { message: String },

    /// Configuration error.
    #[error("configuration error: {message}")]
    Config { message: String },
}

impl ScriptbloxError {
    /// Exit code for CLI.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidArgument { .. } | Self::Config { .. } => 2,
            Self::RequestFailed { .. } | Self::Network { .. } | Self::Decode { .. } => 1,
        }
    }

    pub(crate) fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    pub(crate) fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }
}

impl From<reqwest::Error> for ScriptbloxError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode {
                message: err.to_string(),
            }
        } else {
            Self::Network {
                message: err.to_string(),
            }
        }
    }
}

/// Result alias used across the library.
pub type Result<T> = std::result::Result<T, ScriptbloxError>;
