use thiserror::Error;

pub type Result<T> = std::result::Result<T, RateSwitchError>;

#[derive(Debug, Error)]
pub enum RateSwitchError {
    #[error("transport error calling `{endpoint}`: {message}")]
    Transport { endpoint: String, message: String },
    #[error("call to `{endpoint}` timed out after {elapsed_ms}ms")]
    Timeout { endpoint: String, elapsed_ms: u64 },
    #[error("transport panicked while calling `{0}`")]
    Panicked(String),
    #[error("unknown endpoint `{0}`")]
    UnknownEndpoint(String),
    #[error("config error: {0}")]
    Config(String),
    #[error("serialization error: {0}")]
    Serialization(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl RateSwitchError {
    pub fn transport(endpoint: impl Into<String>, message: impl Into<String>) -> Self {
        RateSwitchError::Transport {
            endpoint: endpoint.into(),
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for RateSwitchError {
    fn from(err: serde_json::Error) -> Self {
        RateSwitchError::Serialization(err.to_string())
    }
}
