use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single external reference attached to a draft. Never mutated after
/// creation; removed only by explicit user action or when the owning draft
/// is discarded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Attachment {
    pub id: Uuid,
    pub url: String,
    /// Display title, derived from the URL host at add time.
    pub title: String,
    /// Best-effort content summary. Absent when the preview fetch failed.
    pub preview: Option<String>,
    pub added_at: DateTime<Utc>,
}

impl Attachment {
    pub fn new(url: impl Into<String>, title: impl Into<String>, preview: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            url: url.into(),
            title: title.into(),
            preview,
            added_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attachments_get_distinct_ids() {
        let a = Attachment::new("https://example.com/a", "example.com", None);
        let b = Attachment::new("https://example.com/b", "example.com", None);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_attachment_serializes_preview_as_optional() {
        let att = Attachment::new("https://example.com", "example.com", None);
        let json = serde_json::to_value(&att).unwrap();
        assert!(json["preview"].is_null());
    }
}
