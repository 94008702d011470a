//! Error types module
//!
//! Failure taxonomy of the ticket workflow. Everything here is recoverable
//! from the user's point of view: validation and attachment failures are
//! field-scoped and surfaced inline, autosave failures are logged without
//! interrupting editing, and submission failures return the workflow to an
//! editable state with the draft preserved.

use crate::validation::ValidationErrors;

/// Log level for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Debug level - for expected errors like validation failures
    Debug,
    /// Warning level - for recoverable issues like autosave failures
    Warn,
    /// Error level - for unexpected failures
    Error,
}

/// How an error should be presented: a machine-readable code, whether the
/// triggering action can be retried, and the message shown to the user.
pub trait ErrorMetadata {
    fn error_code(&self) -> &'static str;

    /// Whether the triggering action can be retried as-is.
    fn is_recoverable(&self) -> bool;

    fn log_level(&self) -> LogLevel;

    /// Client-facing message (may differ from the internal error message)
    fn client_message(&self) -> String;
}

/// A rejected attachment add. The draft is unaffected in every case.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum AttachmentError {
    #[error("Please enter a URL")]
    EmptyUrl,

    #[error("Please enter a valid URL")]
    InvalidUrl(String),

    #[error("Maximum {0} attachments allowed")]
    LimitReached(usize),

    #[error("This URL has already been added")]
    Duplicate(String),
}

#[derive(Debug, thiserror::Error)]
pub enum HelpdeskError {
    #[error("Draft validation failed")]
    Validation(ValidationErrors),

    #[error(transparent)]
    Attachment(#[from] AttachmentError),

    #[error("Draft save failed: {0}")]
    Autosave(String),

    #[error("Ticket submission failed: {0}")]
    Submission(String),

    #[error("Ticket submission timed out after {0} seconds")]
    SubmissionTimeout(u64),
}

impl ErrorMetadata for HelpdeskError {
    fn error_code(&self) -> &'static str {
        match self {
            HelpdeskError::Validation(_) => "VALIDATION_FAILED",
            HelpdeskError::Attachment(AttachmentError::EmptyUrl) => "ATTACHMENT_URL_EMPTY",
            HelpdeskError::Attachment(AttachmentError::InvalidUrl(_)) => "ATTACHMENT_URL_INVALID",
            HelpdeskError::Attachment(AttachmentError::LimitReached(_)) => "ATTACHMENT_LIMIT",
            HelpdeskError::Attachment(AttachmentError::Duplicate(_)) => "ATTACHMENT_DUPLICATE",
            HelpdeskError::Autosave(_) => "AUTOSAVE_FAILED",
            HelpdeskError::Submission(_) => "SUBMISSION_FAILED",
            HelpdeskError::SubmissionTimeout(_) => "SUBMISSION_TIMEOUT",
        }
    }

    fn is_recoverable(&self) -> bool {
        // The whole taxonomy is recoverable; nothing here loses the draft.
        true
    }

    fn log_level(&self) -> LogLevel {
        match self {
            HelpdeskError::Validation(_) | HelpdeskError::Attachment(_) => LogLevel::Debug,
            HelpdeskError::Autosave(_) => LogLevel::Warn,
            HelpdeskError::Submission(_) | HelpdeskError::SubmissionTimeout(_) => LogLevel::Error,
        }
    }

    fn client_message(&self) -> String {
        match self {
            HelpdeskError::Validation(errors) => {
                format!("Please fix {} field(s) before submitting", errors.len())
            }
            HelpdeskError::Attachment(err) => err.to_string(),
            HelpdeskError::Autosave(_) => "Draft could not be saved automatically".to_string(),
            HelpdeskError::Submission(_) | HelpdeskError::SubmissionTimeout(_) => {
                "Failed to submit ticket. Please try again.".to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::{Field, ValidationErrors};

    #[test]
    fn test_validation_error_metadata() {
        let mut errors = ValidationErrors::new();
        errors.insert(Field::Title, "Ticket title is required");
        let err = HelpdeskError::Validation(errors);
        assert_eq!(err.error_code(), "VALIDATION_FAILED");
        assert!(err.is_recoverable());
        assert_eq!(err.log_level(), LogLevel::Debug);
        assert!(err.client_message().contains("1 field"));
    }

    #[test]
    fn test_attachment_error_messages_are_user_facing() {
        assert_eq!(
            AttachmentError::Duplicate("https://a".into()).to_string(),
            "This URL has already been added"
        );
        assert_eq!(
            AttachmentError::LimitReached(5).to_string(),
            "Maximum 5 attachments allowed"
        );
    }

    #[test]
    fn test_submission_failures_share_client_message() {
        let a = HelpdeskError::Submission("boom".into());
        let b = HelpdeskError::SubmissionTimeout(30);
        assert_eq!(a.client_message(), b.client_message());
        assert_eq!(a.log_level(), LogLevel::Error);
    }
}
