//! Submission state machine
//!
//! Sequences validate -> submit -> success for one draft. Validation
//! failures fall straight back to editing with the error map surfaced as
//! field messages; a passing draft is snapshotted and sent through the
//! create-ticket collaborator under a timeout. Success is terminal for the
//! draft until an explicit reset ("create another").
//!
//! The workflow handle is cheap to clone and shares its internals, so
//! concurrent callers see one machine: a re-entrant submit request while one
//! is in flight finds the machine out of `Idle` and is a no-op, and the
//! backend is never called twice for one draft.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;

use helpdesk_core::models::{Attachment, SubmissionResult, TicketDraft};
use helpdesk_core::validation::ValidationErrors;
use helpdesk_core::{
    AttachmentError, DraftStore, ErrorMetadata, HelpdeskError, PreviewFetcher, SessionContext,
    TicketSubmitter, WorkflowConfig,
};

use crate::attachments::AttachmentRegistry;
use crate::autosave::AutosaveScheduler;
use crate::form::{FieldChange, FormState};

/// Machine states. `Rejected` is transient: it is carried in the submit
/// outcome while the machine itself falls back to `Idle` for continued
/// editing.
#[derive(Debug, Clone)]
pub enum SubmitState {
    Idle,
    Validating,
    Submitting,
    Succeeded(SubmissionResult),
}

impl SubmitState {
    pub fn is_idle(&self) -> bool {
        matches!(self, SubmitState::Idle)
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmitState::Submitting)
    }

    pub fn is_succeeded(&self) -> bool {
        matches!(self, SubmitState::Succeeded(_))
    }
}

/// What a submit request produced.
#[derive(Debug)]
pub enum SubmitOutcome {
    /// Validation passed and the backend accepted the ticket.
    Created(SubmissionResult),
    /// Validation failed; the machine is back in `Idle` with these errors
    /// surfaced on the form.
    Rejected(ValidationErrors),
    /// The backend call failed or timed out; the draft is preserved and the
    /// machine is back in `Idle` with the message under the `submit` key.
    Failed(String),
    /// The machine was not in `Idle` (submit already in flight, or already
    /// succeeded); nothing happened.
    Ignored,
}

struct WorkflowInner {
    form: Mutex<FormState>,
    attachments: Mutex<AttachmentRegistry>,
    state: Mutex<SubmitState>,
    autosave: AutosaveScheduler,
    submitter: Arc<dyn TicketSubmitter>,
    submit_timeout: Duration,
}

/// One authoring session: form state, attachments, autosave and the
/// submission machine, wired against the injected collaborators.
#[derive(Clone)]
pub struct TicketWorkflow {
    inner: Arc<WorkflowInner>,
}

impl TicketWorkflow {
    pub fn new(
        session: SessionContext,
        config: &WorkflowConfig,
        store: Arc<dyn DraftStore>,
        submitter: Arc<dyn TicketSubmitter>,
        preview_fetcher: Arc<dyn PreviewFetcher>,
    ) -> Self {
        let autosave = AutosaveScheduler::new(store, config.autosave_debounce);
        Self {
            inner: Arc::new(WorkflowInner {
                form: Mutex::new(FormState::new(session)),
                attachments: Mutex::new(AttachmentRegistry::new(
                    config.max_attachments,
                    preview_fetcher,
                )),
                state: Mutex::new(SubmitState::Idle),
                autosave,
                submitter,
                submit_timeout: config.submit_timeout,
            }),
        }
    }

    /// Applies a field change and restarts the autosave timer with a fresh
    /// snapshot. Edits are never blocked, whatever the machine state.
    pub async fn apply(&self, change: FieldChange) {
        let snapshot = {
            let mut form = self.inner.form.lock().await;
            form.apply(change);
            form.draft().clone()
        };
        self.inner.autosave.touched(snapshot);
    }

    /// Explicit "save draft" action.
    pub async fn save_now(&self) {
        let snapshot = self.inner.form.lock().await.draft().clone();
        self.inner.autosave.save_now(snapshot);
    }

    pub async fn add_attachment(&self, url: &str) -> Result<Attachment, AttachmentError> {
        self.inner.attachments.lock().await.add(url).await
    }

    pub async fn remove_attachment(&self, id: uuid::Uuid) {
        self.inner.attachments.lock().await.remove(id);
    }

    pub async fn attachments(&self) -> Vec<Attachment> {
        self.inner.attachments.lock().await.as_slice().to_vec()
    }

    pub async fn draft(&self) -> TicketDraft {
        self.inner.form.lock().await.draft().clone()
    }

    pub async fn errors(&self) -> ValidationErrors {
        self.inner.form.lock().await.errors().clone()
    }

    pub async fn state(&self) -> SubmitState {
        self.inner.state.lock().await.clone()
    }

    pub fn last_saved_at(&self) -> Option<chrono::DateTime<chrono::Utc>> {
        self.inner.autosave.last_saved_at()
    }

    /// Drives one submit request through the machine. Re-entrant requests
    /// while a submission is validating, in flight, or already succeeded are
    /// no-ops.
    #[tracing::instrument(skip(self))]
    pub async fn submit(&self) -> SubmitOutcome {
        {
            let mut state = self.inner.state.lock().await;
            if !state.is_idle() {
                tracing::debug!(state = ?*state, "Ignoring re-entrant submit request");
                return SubmitOutcome::Ignored;
            }
            *state = SubmitState::Validating;
        }

        let snapshot = {
            let attachments = self.inner.attachments.lock().await.as_slice().to_vec();
            let mut form = self.inner.form.lock().await;
            form.set_attachments(attachments);
            if !form.validate() {
                let errors = form.errors().clone();
                drop(form);
                *self.inner.state.lock().await = SubmitState::Idle;
                tracing::debug!(error_count = errors.len(), "Submission rejected by validation");
                return SubmitOutcome::Rejected(errors);
            }
            form.draft().clone()
        };

        *self.inner.state.lock().await = SubmitState::Submitting;
        // A save racing the backend call could persist a draft that is about
        // to stop existing; keep autosave quiet until the outcome is known.
        self.inner.autosave.suspend();

        let call = self.inner.submitter.create_ticket(&snapshot);
        match tokio::time::timeout(self.inner.submit_timeout, call).await {
            Ok(Ok(result)) => {
                *self.inner.state.lock().await = SubmitState::Succeeded(result.clone());
                self.inner.autosave.cancel_pending();
                tracing::info!(
                    ticket_id = %result.ticket_id,
                    priority = %result.priority,
                    queue_position = result.queue_position,
                    "Ticket created"
                );
                SubmitOutcome::Created(result)
            }
            Ok(Err(e)) => {
                let err = HelpdeskError::Submission(e.to_string());
                tracing::error!(error = %e, "Ticket submission failed");
                self.fail_submit(err.client_message()).await
            }
            Err(_) => {
                let err = HelpdeskError::SubmissionTimeout(self.inner.submit_timeout.as_secs());
                tracing::error!(timeout_secs = self.inner.submit_timeout.as_secs(), "Ticket submission timed out");
                self.fail_submit(err.client_message()).await
            }
        }
    }

    /// Shared failure path: back to `Idle`, message under the `submit` key,
    /// draft preserved, autosave re-armed.
    async fn fail_submit(&self, message: String) -> SubmitOutcome {
        self.inner
            .form
            .lock()
            .await
            .record_submit_error(message.clone());
        *self.inner.state.lock().await = SubmitState::Idle;
        self.inner.autosave.resume();
        SubmitOutcome::Failed(message)
    }

    /// "Create another": clears the draft, errors and attachments, cancels
    /// any pending autosave and returns the machine to `Idle`.
    pub async fn reset(&self) {
        self.inner.form.lock().await.reset();
        self.inner.attachments.lock().await.clear();
        *self.inner.state.lock().await = SubmitState::Idle;
        self.inner.autosave.cancel_pending();
        self.inner.autosave.resume();
        tracing::debug!("Workflow reset for a new draft");
    }

    /// Stops the autosave worker. The workflow is unusable for saving after
    /// this; intended for session teardown.
    pub fn shutdown(&self) {
        self.inner.autosave.shutdown();
    }
}
