//! Helpdesk ticket-submission workflow
//!
//! This crate sequences one authoring session: the form state manager owns
//! the draft and its field errors, the autosave scheduler debounces draft
//! saves behind the user's back, the attachment registry manages URL
//! attachments, and the submission state machine drives
//! validate -> submit -> success with a bounded backend call.
//!
//! The engine is wired against the collaborator traits in `helpdesk-core`
//! (`DraftStore`, `TicketSubmitter`, `PreviewFetcher`); reference
//! implementations that reproduce the simulated backend live in
//! [`providers`].

pub mod attachments;
pub mod autosave;
pub mod form;
pub mod providers;
pub mod submission;

pub use attachments::AttachmentRegistry;
pub use autosave::AutosaveScheduler;
pub use form::{FieldChange, FormState};
pub use providers::{DomainPreviewFetcher, SimulatedDraftStore, SimulatedTicketApi};
pub use submission::{SubmitOutcome, SubmitState, TicketWorkflow};
