//! Failure taxonomy for catalog fetches

use thiserror::Error;

/// Coarse classification of a [`FetchError`], for callers that only need to
/// branch on the category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    Network,
    Protocol,
    Shape,
}

/// Why a fetch ended in the `Failed` state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The request could not be sent or no response was received.
    #[error("network failure: {reason}")]
    Network { reason: String },

    /// The service answered with a non-success status.
    #[error("catalog service returned {status} for {url}")]
    Protocol { status: u16, url: String },

    /// A body arrived but does not match the expected record shape.
    #[error("unexpected response shape: {reason}")]
    Shape { reason: String },
}

impl FetchError {
    pub fn network(reason: impl Into<String>) -> Self {
        Self::Network {
            reason: reason.into(),
        }
    }

    pub fn protocol(status: u16, url: impl Into<String>) -> Self {
        Self::Protocol {
            status,
            url: url.into(),
        }
    }

    pub fn shape(reason: impl Into<String>) -> Self {
        Self::Shape {
            reason: reason.into(),
        }
    }

    pub fn kind(&self) -> FailureKind {
        match self {
            Self::Network { .. } => FailureKind::Network,
            Self::Protocol { .. } => FailureKind::Protocol,
            Self::Shape { .. } => FailureKind::Shape,
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        Self::shape(err.to_string())
    }
}
