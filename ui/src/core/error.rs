//! Terminal failures of a submission attempt.

use thiserror::Error;

use super::normalize::NormalizeError;
use super::upload::UploadError;

/// Broad classification used for display and retry decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Normalization,
    Rejected,
    Parse,
    Io,
    Timeout,
    Network,
    Service,
    Unexpected,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Normalize(#[from] NormalizeError),

    #[error(transparent)]
    Upload(#[from] UploadError),

    #[error("Request timed out. The server might be slow or unreachable.")]
    Timeout,

    #[error("Network error. Please try again or check your connection.")]
    Network,

    /// Non-success status. `body` is the response text, or a placeholder when
    /// the body itself could not be read.
    #[error("API error ({status}): {body}")]
    Service { status: u16, body: String },

    /// Success status, but the body is not a verdict.
    #[error("API error ({status}): malformed verdict ({detail})")]
    InvalidVerdict { status: u16, detail: String },

    #[error("An unexpected error occurred: {0}")]
    Unexpected(String),
}

impl SubmitError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SubmitError::Normalize(_) => ErrorKind::Normalization,
            SubmitError::Upload(UploadError::NotJson) => ErrorKind::Rejected,
            SubmitError::Upload(UploadError::Unreadable) => ErrorKind::Io,
            SubmitError::Upload(UploadError::InvalidJson(_) | UploadError::NotAnObject) => {
                ErrorKind::Parse
            }
            SubmitError::Timeout => ErrorKind::Timeout,
            SubmitError::Network => ErrorKind::Network,
            SubmitError::Service { .. } | SubmitError::InvalidVerdict { .. } => ErrorKind::Service,
            SubmitError::Unexpected(_) => ErrorKind::Unexpected,
        }
    }

    /// Whether the error screen offers to replay the last record.
    /// Upload-stage failures never do.
    pub fn is_retryable(&self) -> bool {
        !matches!(
            self.kind(),
            ErrorKind::Rejected | ErrorKind::Parse | ErrorKind::Io
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upload_failures_are_not_retryable() {
        for err in [
            UploadError::NotJson,
            UploadError::Unreadable,
            UploadError::InvalidJson("eof".into()),
            UploadError::NotAnObject,
        ] {
            assert!(!SubmitError::from(err).is_retryable());
        }
    }

    #[test]
    fn transport_failures_are_retryable() {
        assert!(SubmitError::Timeout.is_retryable());
        assert!(SubmitError::Network.is_retryable());
        assert!(SubmitError::Service {
            status: 502,
            body: "bad gateway".into()
        }
        .is_retryable());
    }

    #[test]
    fn service_message_carries_status_and_body() {
        let err = SubmitError::Service {
            status: 422,
            body: "missing V3".into(),
        };
        assert_eq!(err.to_string(), "API error (422): missing V3");
        assert_eq!(err.kind(), ErrorKind::Service);
    }

    #[test]
    fn malformed_verdict_is_a_service_error() {
        let err = SubmitError::InvalidVerdict {
            status: 200,
            detail: "missing field `is_fraud`".into(),
        };
        assert_eq!(err.kind(), ErrorKind::Service);
    }
}
