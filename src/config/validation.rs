//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Reject duplicate or redundant channel entries
//! - Check the tracing filter directive parses
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: DebugConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::collections::HashSet;
use thiserror::Error;
use tracing_subscriber::EnvFilter;
use crate::channel::Channel;
use crate::config::schema::DebugConfig;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("channel {0} is listed more than once")]
    DuplicateChannel(Channel),

    #[error("channels.all is set, channels.enabled must be empty")]
    RedundantAll,

    #[error("invalid logging filter '{filter}': {reason}")]
    InvalidFilter { filter: String, reason: String },
}

/// Validate a configuration, collecting every problem found.
pub fn validate_config(config: &DebugConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    for channel in &config.channels.enabled {
        if !seen.insert(*channel) && reported.insert(*channel) {
            errors.push(ValidationError::DuplicateChannel(*channel));
        }
    }

    if config.channels.all && !config.channels.enabled.is_empty() {
        errors.push(ValidationError::RedundantAll);
    }

    if let Err(e) = EnvFilter::try_new(&config.logging.filter) {
        errors.push(ValidationError::InvalidFilter {
            filter: config.logging.filter.clone(),
            reason: e.to_string(),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(validate_config(&DebugConfig::default()).is_ok());
    }

    #[test]
    fn test_collects_all_errors() {
        let mut config = DebugConfig::default();
        config.channels.enabled = vec![Channel::Hud, Channel::Hud, Channel::Hud, Channel::Sound];
        config.channels.all = true;
        config.logging.filter = "chanlog=notalevel".to_string();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert_eq!(errors[0], ValidationError::DuplicateChannel(Channel::Hud));
        assert_eq!(errors[1], ValidationError::RedundantAll);
        assert!(matches!(errors[2], ValidationError::InvalidFilter { .. }));
    }

    #[test]
    fn test_all_alone_is_valid() {
        let mut config = DebugConfig::default();
        config.channels.all = true;
        assert!(validate_config(&config).is_ok());
    }
}
