//! Outcome — the tagged result type returned by every async boundary.

use std::sync::Arc;

/// Result of an operation that can fail or still be in flight.
///
/// Every port method returns an `Outcome`; consumers match exhaustively on
/// the three variants. `Pending` marks an in-flight operation and is not
/// normally returned by one that has completed.
#[derive(Debug, Clone)]
pub enum Outcome<T> {
    /// The operation succeeded.
    Ok(T),
    /// The operation failed with a human-readable message and an optional
    /// underlying cause kept for diagnostics.
    Err {
        message: String,
        cause: Option<Arc<dyn std::error::Error + Send + Sync>>,
    },
    /// The operation has not completed yet.
    Pending,
}

impl<T> Outcome<T> {
    /// Build a success outcome.
    pub fn ok(value: T) -> Self {
        Self::Ok(value)
    }

    /// Build an error outcome. The message must not be empty; a blank
    /// message is replaced with a generic one so `Err` always carries text.
    pub fn err(message: impl Into<String>) -> Self {
        let message = message.into();
        let message = if message.trim().is_empty() {
            "operation failed".to_string()
        } else {
            message
        };
        Self::Err {
            message,
            cause: None,
        }
    }

    /// Build an error outcome that keeps the underlying cause.
    pub fn err_with(
        message: impl Into<String>,
        cause: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        match Self::err(message) {
            Self::Err { message, .. } => Self::Err {
                message,
                cause: Some(Arc::new(cause)),
            },
            other => other,
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    pub fn is_err(&self) -> bool {
        matches!(self, Self::Err { .. })
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    /// The error message, if this is an `Err`.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Err { message, .. } => Some(message),
            _ => None,
        }
    }

    /// Map the success payload, leaving the other variants untouched.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        match self {
            Self::Ok(value) => Outcome::Ok(f(value)),
            Self::Err { message, cause } => Outcome::Err { message, cause },
            Self::Pending => Outcome::Pending,
        }
    }

    /// Collapse into a `Result`, treating a stray `Pending` as an error.
    pub fn into_result(self) -> Result<T, String> {
        match self {
            Self::Ok(value) => Ok(value),
            Self::Err { message, .. } => Err(message),
            Self::Pending => Err("operation still pending".to_string()),
        }
    }
}
