//! Guide Errors
//!
//! Error type shared by the remote clients and the local stores.

use thiserror::Error;

/// Common result type for guide operations
pub type GuideResult<T> = Result<T, GuideError>;

/// Everything that can go wrong while serving a user action
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GuideError {
    /// Request never produced a response (offline, CORS, DNS)
    #[error("network error: {0}")]
    Network(String),
    /// Response arrived with a non-2xx status
    #[error("unexpected status {0}")]
    Status(u16),
    /// Response or stored blob was not the JSON we expected
    #[error("malformed data: {0}")]
    Decode(String),
    /// Stored blob exists but cannot be decoded; left untouched
    #[error("stored '{0}' is unreadable")]
    CorruptRecord(String),
    /// localStorage missing or refusing writes
    #[error("storage error: {0}")]
    Storage(String),
    #[error("email already exists")]
    EmailTaken,
    #[error("wrong email or password")]
    InvalidCredentials,
    /// A browser API the action depends on is absent
    #[error("{0} is not supported")]
    Unsupported(&'static str),
}

impl GuideError {
    /// Text shown in the message modal
    pub fn user_message(&self) -> String {
        match self {
            GuideError::EmailTaken => "Email already exists!".to_string(),
            GuideError::InvalidCredentials => "Wrong email or password!".to_string(),
            GuideError::Storage(_) => "Your browser storage is unavailable.".to_string(),
            GuideError::CorruptRecord(_) => {
                "Saved data in this browser is unreadable, so nothing was changed.".to_string()
            }
            GuideError::Unsupported(what) => format!("{} is not supported in this browser.", what),
            GuideError::Network(_) | GuideError::Status(_) | GuideError::Decode(_) => {
                "Could not fetch data right now.".to_string()
            }
        }
    }
}

impl From<gloo_net::Error> for GuideError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => GuideError::Decode(e.to_string()),
            other => GuideError::Network(other.to_string()),
        }
    }
}

impl From<serde_json::Error> for GuideError {
    fn from(err: serde_json::Error) -> Self {
        GuideError::Decode(err.to_string())
    }
}
