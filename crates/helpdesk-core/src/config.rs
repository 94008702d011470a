//! Configuration module
//!
//! Tunables for the ticket workflow: autosave debounce, attachment capacity
//! and the submission timeout. Values come from the environment with sane
//! defaults, so the workflow can be constructed with `WorkflowConfig::default()`
//! in tests and `from_env()` in a running application.

use std::env;
use std::time::Duration;

const AUTOSAVE_DEBOUNCE_SECS: u64 = 30;
const MAX_ATTACHMENTS: usize = 5;
const SUBMIT_TIMEOUT_SECS: u64 = 30;
const SIMULATED_SUBMIT_DELAY_MS: u64 = 2000;
const SIMULATED_SAVE_DELAY_MS: u64 = 1000;

#[derive(Debug, Clone)]
pub struct WorkflowConfig {
    /// Idle period after the last edit before a draft save fires.
    pub autosave_debounce: Duration,
    /// Upper bound on attachments per draft.
    pub max_attachments: usize,
    /// Bound on the create-ticket call; expiry is surfaced as a submission
    /// failure with the draft preserved.
    pub submit_timeout: Duration,
    /// Round-trip delay of the simulated create-ticket collaborator.
    pub simulated_submit_delay: Duration,
    /// Round-trip delay of the simulated draft store.
    pub simulated_save_delay: Duration,
}

impl Default for WorkflowConfig {
    fn default() -> Self {
        Self {
            autosave_debounce: Duration::from_secs(AUTOSAVE_DEBOUNCE_SECS),
            max_attachments: MAX_ATTACHMENTS,
            submit_timeout: Duration::from_secs(SUBMIT_TIMEOUT_SECS),
            simulated_submit_delay: Duration::from_millis(SIMULATED_SUBMIT_DELAY_MS),
            simulated_save_delay: Duration::from_millis(SIMULATED_SAVE_DELAY_MS),
        }
    }
}

impl WorkflowConfig {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();

        let autosave_debounce_secs = env::var("HELPDESK_AUTOSAVE_DEBOUNCE_SECS")
            .unwrap_or_else(|_| AUTOSAVE_DEBOUNCE_SECS.to_string())
            .parse::<u64>()
            .unwrap_or(AUTOSAVE_DEBOUNCE_SECS);

        let max_attachments = env::var("HELPDESK_MAX_ATTACHMENTS")
            .unwrap_or_else(|_| MAX_ATTACHMENTS.to_string())
            .parse::<usize>()
            .unwrap_or(MAX_ATTACHMENTS);

        let submit_timeout_secs = env::var("HELPDESK_SUBMIT_TIMEOUT_SECS")
            .unwrap_or_else(|_| SUBMIT_TIMEOUT_SECS.to_string())
            .parse::<u64>()
            .unwrap_or(SUBMIT_TIMEOUT_SECS);

        let simulated_submit_delay_ms = env::var("HELPDESK_SIMULATED_SUBMIT_DELAY_MS")
            .unwrap_or_else(|_| SIMULATED_SUBMIT_DELAY_MS.to_string())
            .parse::<u64>()
            .unwrap_or(SIMULATED_SUBMIT_DELAY_MS);

        let simulated_save_delay_ms = env::var("HELPDESK_SIMULATED_SAVE_DELAY_MS")
            .unwrap_or_else(|_| SIMULATED_SAVE_DELAY_MS.to_string())
            .parse::<u64>()
            .unwrap_or(SIMULATED_SAVE_DELAY_MS);

        let config = Self {
            autosave_debounce: Duration::from_secs(autosave_debounce_secs),
            max_attachments,
            submit_timeout: Duration::from_secs(submit_timeout_secs),
            simulated_submit_delay: Duration::from_millis(simulated_submit_delay_ms),
            simulated_save_delay: Duration::from_millis(simulated_save_delay_ms),
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if self.autosave_debounce.is_zero() {
            return Err(anyhow::anyhow!(
                "HELPDESK_AUTOSAVE_DEBOUNCE_SECS must be greater than zero"
            ));
        }
        if self.max_attachments == 0 {
            return Err(anyhow::anyhow!(
                "HELPDESK_MAX_ATTACHMENTS must be greater than zero"
            ));
        }
        if self.submit_timeout.is_zero() {
            return Err(anyhow::anyhow!(
                "HELPDESK_SUBMIT_TIMEOUT_SECS must be greater than zero"
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = WorkflowConfig::default();
        assert_eq!(config.autosave_debounce, Duration::from_secs(30));
        assert_eq!(config.max_attachments, 5);
        assert_eq!(config.submit_timeout, Duration::from_secs(30));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_debounce() {
        let config = WorkflowConfig {
            autosave_debounce: Duration::ZERO,
            ..WorkflowConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_attachment_limit() {
        let config = WorkflowConfig {
            max_attachments: 0,
            ..WorkflowConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
