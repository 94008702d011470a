//! Autosave scheduler
//!
//! Decouples "save the draft" from explicit user action without saving on
//! every keystroke. A single spawned worker owns the debounce deadline and
//! the latest draft snapshot; the handle feeds it commands over a channel,
//! so field edits stay synchronous and never wait on a save.
//!
//! Saves run inline in the worker loop, which makes "at most one save in
//! flight" structural: a command that arrives during a save is processed
//! right after it, so an edit re-arms the idle timer for a follow-up save
//! and a manual request coalesces into exactly one more save. Save failures
//! are logged and never propagate into the editing flow.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::sync::{mpsc, watch};
use tokio::time::Instant;

use helpdesk_core::models::TicketDraft;
use helpdesk_core::DraftStore;

enum Command {
    /// A field was edited; restart the idle timer with this snapshot.
    Touched(TicketDraft),
    /// Explicit "save draft": bypass the timer and save immediately.
    SaveNow(TicketDraft),
    /// Stop arming the timer (a submission is in flight).
    Suspend,
    Resume,
    /// Drop the pending deadline and snapshot (the draft was reset).
    CancelPending,
    Shutdown,
}

/// Handle to the autosave worker. Cheap to clone; all clones feed the same
/// worker.
#[derive(Clone)]
pub struct AutosaveScheduler {
    tx: mpsc::UnboundedSender<Command>,
    saved_rx: watch::Receiver<Option<DateTime<Utc>>>,
}

impl AutosaveScheduler {
    /// Spawns the worker. `debounce` is the idle period after the last edit
    /// before a save fires.
    pub fn new(store: Arc<dyn DraftStore>, debounce: Duration) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let (saved_tx, saved_rx) = watch::channel(None);
        tokio::spawn(run_worker(rx, store, debounce, saved_tx));
        Self { tx, saved_rx }
    }

    /// Called on every field mutation with a fresh snapshot. Restarts the
    /// single debounce timer; never blocks.
    pub fn touched(&self, snapshot: TicketDraft) {
        let _ = self.tx.send(Command::Touched(snapshot));
    }

    /// Explicit manual save. Runs as soon as the worker picks it up,
    /// cancelling any pending timer; if a save is already executing, exactly
    /// one follow-up save happens after it finishes.
    pub fn save_now(&self, snapshot: TicketDraft) {
        let _ = self.tx.send(Command::SaveNow(snapshot));
    }

    /// Suppresses timer arming until [`resume`](Self::resume). Edits that
    /// arrive while suspended still update the snapshot.
    pub fn suspend(&self) {
        let _ = self.tx.send(Command::Suspend);
    }

    pub fn resume(&self) {
        let _ = self.tx.send(Command::Resume);
    }

    /// Cancels any pending timer and drops the held snapshot, so a cleared
    /// draft can never be saved.
    pub fn cancel_pending(&self) {
        let _ = self.tx.send(Command::CancelPending);
    }

    pub fn shutdown(&self) {
        let _ = self.tx.send(Command::Shutdown);
    }

    /// Completion timestamp of the most recent successful save.
    pub fn last_saved_at(&self) -> Option<DateTime<Utc>> {
        *self.saved_rx.borrow()
    }
}

async fn run_worker(
    mut rx: mpsc::UnboundedReceiver<Command>,
    store: Arc<dyn DraftStore>,
    debounce: Duration,
    saved_tx: watch::Sender<Option<DateTime<Utc>>>,
) {
    let mut deadline: Option<Instant> = None;
    let mut latest: Option<TicketDraft> = None;
    let mut suspended = false;

    tracing::debug!(debounce_secs = debounce.as_secs(), "Autosave scheduler started");

    loop {
        let idle = async {
            match deadline {
                Some(at) => tokio::time::sleep_until(at).await,
                None => std::future::pending::<()>().await,
            }
        };

        tokio::select! {
            maybe = rx.recv() => {
                match maybe {
                    None | Some(Command::Shutdown) => break,
                    Some(Command::Touched(snapshot)) => {
                        latest = Some(snapshot);
                        if !suspended {
                            deadline = Some(Instant::now() + debounce);
                        }
                    }
                    Some(Command::SaveNow(snapshot)) => {
                        latest = Some(snapshot);
                        deadline = None;
                        save_latest(store.as_ref(), &mut latest, &saved_tx).await;
                    }
                    Some(Command::Suspend) => {
                        suspended = true;
                        deadline = None;
                    }
                    Some(Command::Resume) => {
                        suspended = false;
                    }
                    Some(Command::CancelPending) => {
                        deadline = None;
                        latest = None;
                    }
                }
            }
            _ = idle => {
                deadline = None;
                save_latest(store.as_ref(), &mut latest, &saved_tx).await;
            }
        }
    }

    tracing::debug!("Autosave scheduler stopped");
}

/// Saves the held snapshot, if there is one worth saving. Consumes the
/// snapshot so a lone timer cannot save the same state twice.
async fn save_latest(
    store: &dyn DraftStore,
    latest: &mut Option<TicketDraft>,
    saved_tx: &watch::Sender<Option<DateTime<Utc>>>,
) {
    let Some(draft) = latest.take() else {
        return;
    };
    if !draft.has_content() {
        tracing::trace!("Skipping autosave of empty draft");
        return;
    }

    match store.save_draft(&draft).await {
        Ok(()) => {
            let _ = saved_tx.send(Some(Utc::now()));
            tracing::debug!(title = %draft.title, "Draft autosaved");
        }
        Err(e) => {
            // Surfaced to the operator only; editing continues regardless.
            tracing::warn!(error = %e, "Draft autosave failed");
        }
    }
}
