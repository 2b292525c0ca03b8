use thiserror::Error;

/// Failure reported by a collection store adapter.
///
/// Mirrors what the remote document store hands back: an optional
/// machine-readable code plus a human-readable message. Connectivity
/// loss is detected by matching `code == "unavailable"` or a message
/// containing "offline"; callers degrade those to a non-fatal offline
/// state instead of propagating them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct StoreError {
    code: Option<String>,
    message: String,
}

impl StoreError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            code: None,
            message: message.into(),
        }
    }

    pub fn with_code(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: Some(code.into()),
            message: message.into(),
        }
    }

    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Whether this failure is connectivity-class (store unreachable)
    /// rather than an operation being rejected.
    pub fn is_connectivity(&self) -> bool {
        self.code.as_deref() == Some("unavailable")
            || self.message.to_ascii_lowercase().contains("offline")
    }
}
