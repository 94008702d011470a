//! Form state manager
//!
//! Single source of truth for the draft being authored and its field-level
//! errors. Every field change clears any stale error on that field and marks
//! the draft dirty; validation accumulates errors without ever blocking
//! further edits.

use std::collections::BTreeSet;

use helpdesk_core::models::{Category, Priority, TicketDraft};
use helpdesk_core::validation::{validate_draft, Field, ValidationErrors};
use helpdesk_core::SessionContext;

/// A typed field-change event, as emitted by the presentation layer.
#[derive(Debug, Clone)]
pub enum FieldChange {
    Title(String),
    Description(String),
    Category(Option<Category>),
    Priority(Priority),
    CustomerName(String),
    CustomerEmail(String),
    InternalNotes(String),
    Tags(BTreeSet<String>),
}

impl FieldChange {
    /// The error key cleared by this change, if the field carries one.
    fn error_field(&self) -> Option<Field> {
        match self {
            FieldChange::Title(_) => Some(Field::Title),
            FieldChange::Description(_) => Some(Field::Description),
            FieldChange::Category(_) => Some(Field::Category),
            FieldChange::CustomerName(_) => Some(Field::CustomerName),
            FieldChange::CustomerEmail(_) => Some(Field::CustomerEmail),
            FieldChange::Priority(_) | FieldChange::InternalNotes(_) | FieldChange::Tags(_) => None,
        }
    }
}

#[derive(Debug)]
pub struct FormState {
    draft: TicketDraft,
    errors: ValidationErrors,
    session: SessionContext,
    dirty: bool,
}

impl FormState {
    pub fn new(session: SessionContext) -> Self {
        Self {
            draft: TicketDraft::new(),
            errors: ValidationErrors::new(),
            session,
            dirty: false,
        }
    }

    pub fn draft(&self) -> &TicketDraft {
        &self.draft
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn session(&self) -> &SessionContext {
        &self.session
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Applies a field change: updates the field, clears any existing error
    /// for it and marks the draft dirty.
    pub fn apply(&mut self, change: FieldChange) {
        if let Some(field) = change.error_field() {
            self.errors.remove(field);
        }
        match change {
            FieldChange::Title(value) => self.draft.title = value,
            FieldChange::Description(value) => self.draft.description = value,
            FieldChange::Category(value) => self.draft.category = value,
            FieldChange::Priority(value) => self.draft.priority = value,
            FieldChange::CustomerName(value) => self.draft.customer_name = value,
            FieldChange::CustomerEmail(value) => self.draft.customer_email = value,
            FieldChange::InternalNotes(value) => self.draft.internal_notes = value,
            FieldChange::Tags(value) => self.draft.tags = value,
        }
        self.dirty = true;
    }

    /// Runs the field rules, stores the resulting error map and returns
    /// whether the draft is submittable.
    pub fn validate(&mut self) -> bool {
        self.errors = validate_draft(&self.draft, self.session.role);
        self.errors.is_empty()
    }

    /// Surfaces a submission failure under the whole-form `submit` key. The
    /// draft itself is untouched so the user can retry without re-entering
    /// anything.
    pub fn record_submit_error(&mut self, message: impl Into<String>) {
        self.errors.insert(Field::Submit, message);
    }

    /// Replaces the draft's attachment sequence with the registry's current
    /// contents before a snapshot is taken.
    pub fn set_attachments(&mut self, attachments: Vec<helpdesk_core::models::Attachment>) {
        self.draft.attachments = attachments;
    }

    /// Clears all fields back to defaults and drops all errors. Used after a
    /// successful submission or an explicit "create another".
    pub fn reset(&mut self) {
        self.draft = TicketDraft::new();
        self.errors.clear();
        self.dirty = false;
    }
}
