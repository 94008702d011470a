use std::collections::BTreeSet;
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::models::attachment::Attachment;

/// Minimum length for a ticket title once submitted.
pub const MIN_TITLE_LEN: usize = 10;
/// Minimum length for a ticket description once submitted.
pub const MIN_DESCRIPTION_LEN: usize = 20;
/// Maximum length for a ticket description. The boundary value is allowed.
pub const MAX_DESCRIPTION_LEN: usize = 2000;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Technical,
    Account,
    Billing,
    Feature,
    General,
    Other,
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Category::Technical => write!(f, "technical"),
            Category::Account => write!(f, "account"),
            Category::Billing => write!(f, "billing"),
            Category::Feature => write!(f, "feature"),
            Category::General => write!(f, "general"),
            Category::Other => write!(f, "other"),
        }
    }
}

impl FromStr for Category {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "technical" => Ok(Category::Technical),
            "account" => Ok(Category::Account),
            "billing" => Ok(Category::Billing),
            "feature" => Ok(Category::Feature),
            "general" => Ok(Category::General),
            "other" => Ok(Category::Other),
            _ => Err(anyhow::anyhow!("Invalid category: {}", s)),
        }
    }
}

#[derive(Debug, Default, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
    Urgent,
}

impl Priority {
    /// Expected first-response window shown to the user. Anything that is not
    /// an explicitly faster tier falls back to the 48 hour window.
    pub fn estimated_response_time(&self) -> &'static str {
        match self {
            Priority::Urgent => "1 hour",
            Priority::High => "4 hours",
            Priority::Medium => "24 hours",
            Priority::Low => "48 hours",
        }
    }
}

impl Display for Priority {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Priority::Low => write!(f, "low"),
            Priority::Medium => write!(f, "medium"),
            Priority::High => write!(f, "high"),
            Priority::Urgent => write!(f, "urgent"),
        }
    }
}

impl FromStr for Priority {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            "urgent" => Ok(Priority::Urgent),
            _ => Err(anyhow::anyhow!("Invalid priority: {}", s)),
        }
    }
}

/// The working ticket being authored. Created empty at workflow start and
/// mutated field by field; either snapshotted into a draft save or consumed
/// once by submission.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TicketDraft {
    pub title: String,
    pub description: String,
    pub category: Option<Category>,
    pub priority: Priority,
    pub customer_name: String,
    pub customer_email: String,
    pub internal_notes: String,
    pub tags: BTreeSet<String>,
    pub attachments: Vec<Attachment>,
}

impl TicketDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether there is anything worth persisting. Drafts with neither a
    /// title nor a description are skipped by autosave.
    pub fn has_content(&self) -> bool {
        !self.title.trim().is_empty() || !self.description.trim().is_empty()
    }

    /// Character count of the description, as surfaced next to the field.
    pub fn description_len(&self) -> usize {
        self.description.chars().count()
    }
}
