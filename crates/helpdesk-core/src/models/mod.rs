//! Domain models for the ticket-submission workflow

pub mod attachment;
pub mod draft;
pub mod submission;

pub use attachment::Attachment;
pub use draft::{Category, Priority, TicketDraft, MAX_DESCRIPTION_LEN, MIN_DESCRIPTION_LEN, MIN_TITLE_LEN};
pub use submission::{SubmissionResult, TicketId};
