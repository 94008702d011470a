//! Attachment registry
//!
//! Small collection manager for URL attachments on a draft: add with
//! validation and dedupe, remove by id, insertion order preserved. The
//! content preview comes from a pluggable fetcher and is best-effort; a
//! fetch failure leaves the preview absent and never fails the add.

use std::sync::Arc;

use url::Url;
use uuid::Uuid;

use helpdesk_core::models::Attachment;
use helpdesk_core::{AttachmentError, PreviewFetcher};

pub struct AttachmentRegistry {
    items: Vec<Attachment>,
    max_attachments: usize,
    preview_fetcher: Arc<dyn PreviewFetcher>,
}

impl AttachmentRegistry {
    pub fn new(max_attachments: usize, preview_fetcher: Arc<dyn PreviewFetcher>) -> Self {
        Self {
            items: Vec::new(),
            max_attachments,
            preview_fetcher,
        }
    }

    /// Validates and adds a URL attachment. Checks run in the same order the
    /// form surfaces them: empty input, URL grammar, capacity, then
    /// exact-string duplicate.
    pub async fn add(&mut self, raw_url: &str) -> Result<Attachment, AttachmentError> {
        let trimmed = raw_url.trim();
        if trimmed.is_empty() {
            return Err(AttachmentError::EmptyUrl);
        }

        let parsed =
            Url::parse(trimmed).map_err(|_| AttachmentError::InvalidUrl(trimmed.to_string()))?;

        if self.items.len() >= self.max_attachments {
            return Err(AttachmentError::LimitReached(self.max_attachments));
        }

        if self.items.iter().any(|a| a.url == trimmed) {
            return Err(AttachmentError::Duplicate(trimmed.to_string()));
        }

        let title = parsed
            .host_str()
            .map(str::to_string)
            .unwrap_or_else(|| trimmed.to_string());

        let preview = match self.preview_fetcher.fetch_preview(trimmed).await {
            Ok(text) => Some(text),
            Err(e) => {
                tracing::debug!(url = trimmed, error = %e, "Preview fetch failed, attaching without preview");
                None
            }
        };

        let attachment = Attachment::new(trimmed, title, preview);
        self.items.push(attachment.clone());
        tracing::debug!(url = trimmed, count = self.items.len(), "Attachment added");
        Ok(attachment)
    }

    /// Removes the attachment if present; absent ids are a no-op.
    pub fn remove(&mut self, id: Uuid) {
        self.items.retain(|a| a.id != id);
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Attachments in insertion order, which is also display order.
    pub fn as_slice(&self) -> &[Attachment] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= self.max_attachments
    }
}
