//! Reference collaborators
//!
//! Stand-ins for the backend, useful for demos and tests: a create-ticket
//! call that waits a fixed delay and always succeeds, a draft store that
//! does the same, and a preview fetcher backed by a small domain table.

use std::time::Duration;

use async_trait::async_trait;
use url::Url;

use helpdesk_core::models::{SubmissionResult, TicketDraft};
use helpdesk_core::{DraftStore, PreviewFetcher, TicketSubmitter};

/// Simulated backend for ticket creation: fixed round-trip delay, then a
/// freshly generated [`SubmissionResult`] for the snapshot.
pub struct SimulatedTicketApi {
    delay: Duration,
}

impl SimulatedTicketApi {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl TicketSubmitter for SimulatedTicketApi {
    async fn create_ticket(&self, draft: &TicketDraft) -> Result<SubmissionResult, anyhow::Error> {
        tokio::time::sleep(self.delay).await;
        Ok(SubmissionResult::from_draft(draft))
    }
}

/// Simulated draft persistence: fixed delay, then success.
pub struct SimulatedDraftStore {
    delay: Duration,
}

impl SimulatedDraftStore {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl DraftStore for SimulatedDraftStore {
    async fn save_draft(&self, draft: &TicketDraft) -> Result<(), anyhow::Error> {
        tokio::time::sleep(self.delay).await;
        tracing::info!(title = %draft.title, "Draft saved");
        Ok(())
    }
}

/// Canned previews for well-known hosts, with a generic fallback for
/// everything else.
const DOMAIN_PREVIEWS: &[(&str, &str)] = &[
    (
        "github.com",
        "GitHub repository containing source code and documentation...",
    ),
    (
        "stackoverflow.com",
        "Stack Overflow question with detailed error description and code samples...",
    ),
    (
        "docs.google.com",
        "Google Docs document with project specifications and requirements...",
    ),
    (
        "drive.google.com",
        "Google Drive file containing screenshots and error logs...",
    ),
    (
        "dropbox.com",
        "Dropbox shared folder with multiple diagnostic files...",
    ),
    (
        "notion.so",
        "Notion page with detailed bug report and reproduction steps...",
    ),
];

const FALLBACK_PREVIEW: &str = "External link - content preview not available";

/// Preview fetcher backed by the domain table above. Never fails; unknown
/// hosts get the generic fallback text.
pub struct DomainPreviewFetcher;

#[async_trait]
impl PreviewFetcher for DomainPreviewFetcher {
    async fn fetch_preview(&self, url: &str) -> Result<String, anyhow::Error> {
        let host = Url::parse(url)
            .ok()
            .and_then(|u| u.host_str().map(str::to_string))
            .unwrap_or_default();
        let host = host.strip_prefix("www.").unwrap_or(&host);

        let preview = DOMAIN_PREVIEWS
            .iter()
            .find(|(domain, _)| host.contains(domain))
            .map(|(_, text)| *text)
            .unwrap_or(FALLBACK_PREVIEW);

        Ok(preview.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use helpdesk_core::models::{Category, Priority};

    #[tokio::test]
    async fn test_domain_preview_known_host() {
        let fetcher = DomainPreviewFetcher;
        let preview = fetcher
            .fetch_preview("https://github.com/acme/helpdesk")
            .await
            .unwrap();
        assert!(preview.starts_with("GitHub repository"));
    }

    #[tokio::test]
    async fn test_domain_preview_strips_www() {
        let fetcher = DomainPreviewFetcher;
        let preview = fetcher
            .fetch_preview("https://www.dropbox.com/s/abc")
            .await
            .unwrap();
        assert!(preview.starts_with("Dropbox"));
    }

    #[tokio::test]
    async fn test_domain_preview_fallback() {
        let fetcher = DomainPreviewFetcher;
        let preview = fetcher
            .fetch_preview("https://intranet.example.com/wiki")
            .await
            .unwrap();
        assert_eq!(preview, FALLBACK_PREVIEW);
    }

    #[tokio::test(start_paused = true)]
    async fn test_simulated_api_echoes_draft_after_delay() {
        let api = SimulatedTicketApi::new(Duration::from_secs(2));
        let mut draft = TicketDraft::new();
        draft.title = "Login page throws 500".to_string();
        draft.priority = Priority::High;
        draft.category = Some(Category::Technical);

        let result = api.create_ticket(&draft).await.unwrap();
        assert_eq!(result.title, draft.title);
        assert_eq!(result.estimated_response_time, "4 hours");
    }
}
