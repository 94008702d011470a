//! Helpdesk Core Library
//!
//! This crate provides the core domain models, error types, configuration and
//! validation rules shared by the helpdesk ticket-submission workflow, plus
//! the collaborator traits (draft persistence, ticket creation, link preview)
//! that the workflow engine is wired against.

pub mod config;
pub mod error;
pub mod hooks;
pub mod models;
pub mod session;
pub mod validation;

// Re-export commonly used types
pub use config::WorkflowConfig;
pub use error::{AttachmentError, ErrorMetadata, HelpdeskError, LogLevel};
pub use hooks::{DraftStore, NoOpDraftStore, PreviewFetcher, TicketSubmitter};
pub use session::{AuthorRole, SessionContext};
pub use validation::{validate_draft, Field, ValidationErrors};
