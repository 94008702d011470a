//! Draft validation
//!
//! Field rules for a ticket draft. Rules are evaluated independently and
//! accumulated, never short-circuited, so every failing field surfaces its
//! message in a single pass. Validation failures never block editing; they
//! only block submission.

use std::collections::BTreeMap;
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::models::draft::{TicketDraft, MAX_DESCRIPTION_LEN, MIN_DESCRIPTION_LEN, MIN_TITLE_LEN};
use crate::session::AuthorRole;

/// Shape check for customer email addresses: `local@domain.tld` with no
/// whitespace, no nested `@`.
pub const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(EMAIL_PATTERN).expect("email pattern is a valid regex")
});

/// Keys the presentation layer uses to place error messages next to fields.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Title,
    Description,
    Category,
    CustomerName,
    CustomerEmail,
    /// Whole-form submission failure, not tied to a single input.
    Submit,
}

impl Display for Field {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Field::Title => write!(f, "title"),
            Field::Description => write!(f, "description"),
            Field::Category => write!(f, "category"),
            Field::CustomerName => write!(f, "customer_name"),
            Field::CustomerEmail => write!(f, "customer_email"),
            Field::Submit => write!(f, "submit"),
        }
    }
}

/// Ordered map of field-scoped error messages.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<Field, String>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn remove(&mut self, field: Field) {
        self.0.remove(&field);
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(f, m)| (*f, m.as_str()))
    }
}

/// Runs every field rule against the draft and returns the accumulated error
/// map. An empty map means the draft is submittable.
pub fn validate_draft(draft: &TicketDraft, role: AuthorRole) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    if draft.title.trim().is_empty() {
        errors.insert(Field::Title, "Ticket title is required");
    } else if draft.title.chars().count() < MIN_TITLE_LEN {
        errors.insert(
            Field::Title,
            format!("Title must be at least {} characters long", MIN_TITLE_LEN),
        );
    }

    let description_len = draft.description_len();
    if draft.description.trim().is_empty() {
        errors.insert(Field::Description, "Ticket description is required");
    } else if description_len < MIN_DESCRIPTION_LEN {
        errors.insert(
            Field::Description,
            format!(
                "Description must be at least {} characters long",
                MIN_DESCRIPTION_LEN
            ),
        );
    } else if description_len > MAX_DESCRIPTION_LEN {
        errors.insert(
            Field::Description,
            format!(
                "Description must be at most {} characters long",
                MAX_DESCRIPTION_LEN
            ),
        );
    }

    if draft.category.is_none() {
        errors.insert(Field::Category, "Please select a category");
    }

    if role.requires_customer_fields() {
        if draft.customer_name.trim().is_empty() {
            errors.insert(Field::CustomerName, "Customer name is required");
        }

        if draft.customer_email.trim().is_empty() {
            errors.insert(Field::CustomerEmail, "Customer email is required");
        } else if !EMAIL_RE.is_match(&draft.customer_email) {
            errors.insert(Field::CustomerEmail, "Please enter a valid email address");
        }
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::draft::Category;

    fn valid_draft() -> TicketDraft {
        let mut draft = TicketDraft::new();
        draft.title = "Login page throws 500".to_string();
        draft.description = "The login page returns an internal server error".to_string();
        draft.category = Some(Category::Technical);
        draft
    }

    #[test]
    fn test_valid_draft_has_no_errors() {
        let errors = validate_draft(&valid_draft(), AuthorRole::EndUser);
        assert!(errors.is_empty());
    }

    #[test]
    fn test_empty_title_is_required() {
        let mut draft = valid_draft();
        draft.title = "  ".to_string();
        let errors = validate_draft(&draft, AuthorRole::EndUser);
        assert_eq!(errors.get(Field::Title), Some("Ticket title is required"));
    }

    #[test]
    fn test_title_length_boundary() {
        let mut draft = valid_draft();
        draft.title = "a".repeat(MIN_TITLE_LEN - 1);
        assert!(validate_draft(&draft, AuthorRole::EndUser).contains(Field::Title));

        draft.title = "a".repeat(MIN_TITLE_LEN);
        assert!(!validate_draft(&draft, AuthorRole::EndUser).contains(Field::Title));
    }

    #[test]
    fn test_description_length_boundaries() {
        let mut draft = valid_draft();

        draft.description = "a".repeat(MIN_DESCRIPTION_LEN - 1);
        assert!(validate_draft(&draft, AuthorRole::EndUser).contains(Field::Description));

        draft.description = "a".repeat(MIN_DESCRIPTION_LEN);
        assert!(!validate_draft(&draft, AuthorRole::EndUser).contains(Field::Description));

        draft.description = "a".repeat(MAX_DESCRIPTION_LEN);
        assert!(!validate_draft(&draft, AuthorRole::EndUser).contains(Field::Description));

        draft.description = "a".repeat(MAX_DESCRIPTION_LEN + 1);
        assert!(validate_draft(&draft, AuthorRole::EndUser).contains(Field::Description));
    }

    #[test]
    fn test_missing_category() {
        let mut draft = valid_draft();
        draft.category = None;
        let errors = validate_draft(&draft, AuthorRole::EndUser);
        assert_eq!(errors.get(Field::Category), Some("Please select a category"));
    }

    #[test]
    fn test_errors_accumulate_in_one_pass() {
        let draft = TicketDraft::new();
        let errors = validate_draft(&draft, AuthorRole::SupportAgent);
        assert!(errors.contains(Field::Title));
        assert!(errors.contains(Field::Description));
        assert!(errors.contains(Field::Category));
        assert!(errors.contains(Field::CustomerName));
        assert!(errors.contains(Field::CustomerEmail));
        assert_eq!(errors.len(), 5);
    }

    #[test]
    fn test_customer_fields_skipped_for_end_users() {
        let draft = valid_draft();
        let errors = validate_draft(&draft, AuthorRole::EndUser);
        assert!(!errors.contains(Field::CustomerName));
        assert!(!errors.contains(Field::CustomerEmail));
    }

    #[test]
    fn test_customer_email_shape() {
        let mut draft = valid_draft();
        draft.customer_name = "Ada Lovelace".to_string();

        for bad in ["not-an-email", "a@b", "a b@c.com", "a@b@c.com", "@c.com"] {
            draft.customer_email = bad.to_string();
            let errors = validate_draft(&draft, AuthorRole::SupportAgent);
            assert_eq!(
                errors.get(Field::CustomerEmail),
                Some("Please enter a valid email address"),
                "expected rejection for {:?}",
                bad
            );
        }

        draft.customer_email = "customer@example.com".to_string();
        let errors = validate_draft(&draft, AuthorRole::SupportAgent);
        assert!(errors.is_empty());
    }
}
