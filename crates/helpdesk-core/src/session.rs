//! Authoring session context
//!
//! The current user and role are passed explicitly into the workflow instead
//! of being read from ambient state, so the validation rules that depend on
//! the authoring role stay injectable and testable.

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AuthorRole {
    EndUser,
    SupportAgent,
    Administrator,
}

impl AuthorRole {
    /// Agents file tickets on behalf of a customer, so the customer contact
    /// fields become required for them.
    pub fn requires_customer_fields(&self) -> bool {
        matches!(self, AuthorRole::SupportAgent)
    }
}

impl Display for AuthorRole {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            AuthorRole::EndUser => write!(f, "end_user"),
            AuthorRole::SupportAgent => write!(f, "support_agent"),
            AuthorRole::Administrator => write!(f, "administrator"),
        }
    }
}

impl FromStr for AuthorRole {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "end_user" => Ok(AuthorRole::EndUser),
            "support_agent" => Ok(AuthorRole::SupportAgent),
            "administrator" => Ok(AuthorRole::Administrator),
            _ => Err(anyhow::anyhow!("Invalid author role: {}", s)),
        }
    }
}

/// Identity of the user authoring the draft, injected at workflow start.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionContext {
    pub user_name: String,
    pub role: AuthorRole,
}

impl SessionContext {
    pub fn new(user_name: impl Into<String>, role: AuthorRole) -> Self {
        Self {
            user_name: user_name.into(),
            role,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_round_trip() {
        for role in [
            AuthorRole::EndUser,
            AuthorRole::SupportAgent,
            AuthorRole::Administrator,
        ] {
            assert_eq!(role.to_string().parse::<AuthorRole>().unwrap(), role);
        }
        assert!("guest".parse::<AuthorRole>().is_err());
    }

    #[test]
    fn test_only_agents_require_customer_fields() {
        assert!(!AuthorRole::EndUser.requires_customer_fields());
        assert!(AuthorRole::SupportAgent.requires_customer_fields());
        assert!(!AuthorRole::Administrator.requires_customer_fields());
    }
}
