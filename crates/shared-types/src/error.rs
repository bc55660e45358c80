use serde::{Deserialize, Serialize};
use std::fmt;

/// What went wrong while loading the directory.
///
/// The dashboard treats every kind the same way (empty, not loading); the
/// distinction only feeds logging.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum FetchErrorKind {
    /// The request never produced a response.
    Network,
    /// The endpoint answered with a non-success status.
    Status,
    /// The body was not a JSON array of user records.
    MalformedBody,
}

impl fmt::Display for FetchErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchErrorKind::Network => write!(f, "Network"),
            FetchErrorKind::Status => write!(f, "Status"),
            FetchErrorKind::MalformedBody => write!(f, "MalformedBody"),
        }
    }
}

/// Failure to retrieve or decode the employee list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FetchError {
    pub kind: FetchErrorKind,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
}

impl FetchError {
    pub fn network(message: impl Into<String>) -> Self {
        Self {
            kind: FetchErrorKind::Network,
            message: message.into(),
            status: None,
        }
    }

    pub fn status(status: u16, message: impl Into<String>) -> Self {
        Self {
            kind: FetchErrorKind::Status,
            message: message.into(),
            status: Some(status),
        }
    }

    pub fn malformed_body(message: impl Into<String>) -> Self {
        Self {
            kind: FetchErrorKind::MalformedBody,
            message: message.into(),
            status: None,
        }
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status {
            Some(code) => write!(f, "{} ({}): {}", self.kind, code, self.message),
            None => write!(f, "{}: {}", self.kind, self.message),
        }
    }
}

impl std::error::Error for FetchError {}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::malformed_body(err.to_string())
    }
}

#[cfg(feature = "http")]
impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            return FetchError::malformed_body(err.to_string());
        }
        match err.status() {
            Some(code) => FetchError::status(code.as_u16(), err.to_string()),
            None => FetchError::network(err.to_string()),
        }
    }
}
