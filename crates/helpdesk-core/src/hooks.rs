//! Collaborator traits for the workflow boundary
//!
//! The workflow engine talks to the outside world through these ports:
//! draft persistence, ticket creation and link previewing. Implementations
//! live behind the boundary (a backend client in production, simulated
//! collaborators in the reference behavior, doubles in tests); no error
//! from any of them may propagate unhandled into the editing flow.

use async_trait::async_trait;

use crate::models::{SubmissionResult, TicketDraft};

/// Persistence side channel for draft snapshots. Fire-and-forget from the
/// workflow's perspective; a failed save is reported, never rethrown.
#[async_trait]
pub trait DraftStore: Send + Sync {
    async fn save_draft(&self, draft: &TicketDraft) -> Result<(), anyhow::Error>;
}

/// The create-ticket backend call, performed against a read-only snapshot of
/// a validated draft.
#[async_trait]
pub trait TicketSubmitter: Send + Sync {
    async fn create_ticket(&self, draft: &TicketDraft) -> Result<SubmissionResult, anyhow::Error>;
}

/// Best-effort content summarizer for attachment URLs. A failure yields an
/// absent preview, never an error surfaced to the user.
#[async_trait]
pub trait PreviewFetcher: Send + Sync {
    async fn fetch_preview(&self, url: &str) -> Result<String, anyhow::Error>;
}

/// No-op store for callers that do not persist drafts.
pub struct NoOpDraftStore;

#[async_trait]
impl DraftStore for NoOpDraftStore {
    async fn save_draft(&self, _draft: &TicketDraft) -> Result<(), anyhow::Error> {
        Ok(())
    }
}
