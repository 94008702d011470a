use std::collections::BTreeSet;
use std::fmt::{Display, Formatter, Result as FmtResult};

use chrono::{DateTime, Datelike, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::models::attachment::Attachment;
use crate::models::draft::{Category, Priority, TicketDraft};

/// Public ticket identifier, `HD-<year>-<zero-padded 3-digit sequence>`.
///
/// The 3-digit sequence is random, so the scheme is not collision-free. It is
/// kept as-is for compatibility with already-issued ticket ids; a
/// server-assigned sequence would change observable output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct TicketId(String);

impl TicketId {
    pub fn generate() -> Self {
        let mut rng = rand::rng();
        let sequence: u32 = rng.random_range(0..1000);
        Self(format!("HD-{}-{:03}", Utc::now().year(), sequence))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for TicketId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.0)
    }
}

/// Outcome of a successful submission. Constructed only from a draft that
/// already passed validation, and immutable afterwards; exactly one exists
/// per successful submission cycle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionResult {
    pub ticket_id: TicketId,
    pub title: String,
    pub priority: Priority,
    pub category: Option<Category>,
    pub tags: BTreeSet<String>,
    pub attachments: Vec<Attachment>,
    pub estimated_response_time: String,
    pub queue_position: u32,
    pub created_at: DateTime<Utc>,
}

impl SubmissionResult {
    /// Builds the confirmation record for a validated draft: generated ticket
    /// id, echoes of the submitted fields, the priority-based response-time
    /// window and a queue position between 1 and 10.
    pub fn from_draft(draft: &TicketDraft) -> Self {
        let mut rng = rand::rng();
        Self {
            ticket_id: TicketId::generate(),
            title: draft.title.clone(),
            priority: draft.priority,
            category: draft.category,
            tags: draft.tags.clone(),
            attachments: draft.attachments.clone(),
            estimated_response_time: draft.priority.estimated_response_time().to_string(),
            queue_position: rng.random_range(1..=10),
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;

    #[test]
    fn test_ticket_id_format() {
        let re = Regex::new(r"^HD-\d{4}-\d{3}$").unwrap();
        for _ in 0..50 {
            let id = TicketId::generate();
            assert!(re.is_match(id.as_str()), "unexpected id: {}", id);
        }
    }

    #[test]
    fn test_ticket_id_embeds_current_year() {
        let id = TicketId::generate();
        let year = Utc::now().year().to_string();
        assert!(id.as_str().starts_with(&format!("HD-{}-", year)));
    }

    #[test]
    fn test_submission_result_echoes_draft() {
        let mut draft = TicketDraft::new();
        draft.title = "Login page throws 500".to_string();
        draft.priority = Priority::Urgent;
        draft.category = Some(Category::Technical);
        draft.tags.insert("bug".to_string());

        let result = SubmissionResult::from_draft(&draft);
        assert_eq!(result.title, draft.title);
        assert_eq!(result.priority, Priority::Urgent);
        assert_eq!(result.category, Some(Category::Technical));
        assert_eq!(result.estimated_response_time, "1 hour");
        assert!((1..=10).contains(&result.queue_position));
    }
}
