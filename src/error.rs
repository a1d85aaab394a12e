//! Error taxonomy shared by every tool screen.
//!
//! Upstream errors fall into two tiers (see [`ErrorKind`]), each with its
//! own user-visible notice. Blank input never reaches this type: it is
//! caught before any request as [`crate::tools::Rejected::EmptyInput`].

use thiserror::Error;

/// Failure of a single tool request.
#[derive(Error, Debug)]
pub enum ToolError {
    /// The upstream answered, but without the fields needed to render a result.
    #[error("upstream response lacks {0}")]
    Missing(&'static str),

    /// The request could not be sent or the body could not be read.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The upstream answered with a non-success status.
    #[error("upstream returned status {status}")]
    Status {
        /// HTTP status code.
        status: u16,
    },

    /// The upstream body was not the JSON shape we expected.
    #[error("malformed payload: {0}")]
    Payload(#[from] serde_json::Error),

    /// The endpoint URL could not be built.
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

/// How an upstream failure is surfaced to users.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Structurally valid response lacking the expected data.
    SemanticMiss,
    /// Network failure, non-success status or unparseable payload.
    Transport,
}

impl ToolError {
    /// Classify this error into its user-facing tier.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Missing(_) => ErrorKind::SemanticMiss,
            Self::Http(_) | Self::Status { .. } | Self::Payload(_) | Self::InvalidUrl(_) => {
                ErrorKind::Transport
            }
        }
    }
}

/// Result alias for upstream calls.
pub type Result<T> = std::result::Result<T, ToolError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_tiers() {
        assert_eq!(ToolError::Missing("gender").kind(), ErrorKind::SemanticMiss);
        assert_eq!(
            ToolError::Status { status: 404 }.kind(),
            ErrorKind::Transport
        );

        let parse = serde_json::from_str::<u32>("not json").unwrap_err();
        assert_eq!(ToolError::from(parse).kind(), ErrorKind::Transport);
    }

    #[test]
    fn test_error_display() {
        let err = ToolError::Status { status: 503 };
        assert_eq!(err.to_string(), "upstream returned status 503");
        assert_eq!(
            ToolError::Missing("age").to_string(),
            "upstream response lacks age"
        );
    }
}
