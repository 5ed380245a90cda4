//! Client error model.

use thiserror::Error;

/// Result type used across the client layers.
pub type ClientResult<T> = Result<T, ClientError>;

/// Failure of a fetch or mutation operation.
///
/// Every failure is caught at the operation boundary and converted into a
/// user-visible notification; nothing propagates to a global handler and
/// nothing is retried automatically.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// A required endpoint binding is absent. Fatal for the flow that
    /// needed it; surfaced once, not retried.
    #[error("endpoint not configured: {0}")]
    NotConfigured(String),

    /// Network unreachable or the server answered outside the 2xx range.
    #[error("transport failure: {0}")]
    Transport(String),

    /// The response body was not parseable as the expected shape.
    /// Recovered exactly like a transport failure.
    #[error("decode failure: {0}")]
    Decode(String),

    /// The server answered `success: false`. The message is shown to the
    /// user verbatim.
    #[error("{0}")]
    Application(String),
}

impl ClientError {
    pub fn not_configured(msg: impl Into<String>) -> Self {
        Self::NotConfigured(msg.into())
    }

    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    pub fn application(msg: impl Into<String>) -> Self {
        Self::Application(msg.into())
    }

    /// Whether the view stays interactive after this failure.
    ///
    /// Everything except a missing configuration binding leaves the prior
    /// rendered state intact and lets the user retry manually.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Self::NotConfigured(_))
    }

    /// Message suitable for a transient notification.
    pub fn user_message(&self) -> String {
        match self {
            Self::NotConfigured(which) => {
                format!("This view is missing its configuration ({which}).")
            }
            Self::Transport(_) | Self::Decode(_) => {
                "Could not reach the server. Please try again.".to_string()
            }
            Self::Application(msg) => msg.clone(),
        }
    }
}
