//! # Envmap Error Types
//!
//! File: cli/src/core/error.rs
//!
//! ## Overview
//!
//! This module defines the error types used throughout envmap. There are two
//! layers, mirroring the two layers of the crate:
//!
//! - `PatternError`: structural failures raised by the pattern engine
//!   (`crate::pattern`). These are typed so library callers can match on the
//!   kind of failure.
//! - `EnvmapError`: application-level failures raised by the rule layer,
//!   configuration loading and the command handlers. It wraps `PatternError`
//!   via `#[from]`.
//! - `Result<T>`: a type alias for `anyhow::Result<T>` used by command
//!   handlers and config loading, where context strings are attached.
//!
//! A candidate that simply does not match a pattern is *not* an error at the
//! engine level (it is `None` / `false`). Out-of-range template indices are
//! not errors either; they expand to empty text.
//!
//! ## Examples
//!
//! ```rust
//! use envmap::core::error::PatternError;
//! use envmap::pattern;
//!
//! match pattern::normalize("{a") {
//!     Err(PatternError::MalformedPattern { pattern }) => assert_eq!(pattern, "{a"),
//!     other => panic!("unexpected: {:?}", other),
//! }
//! ```
//!
use thiserror::Error;

/// Structural errors raised by the pattern engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    /// Unbalanced or nested `{`/`}` in an annotated key pattern.
    #[error("Malformed pattern: '{pattern}' has unbalanced or nested braces")]
    MalformedPattern { pattern: String },

    /// Unbalanced braces or a non-numeric `{...}` token in a template.
    #[error("Malformed template '{template}': {reason}")]
    MalformedTemplate { template: String, reason: String },

    /// A wildcard referenced a capture the caller did not supply.
    #[error("Group references capture #{index} but only {len} captures are available")]
    GroupIndexOutOfRange { index: usize, len: usize },
}

impl PatternError {
    pub(crate) fn malformed_pattern(pattern: &str) -> Self {
        PatternError::MalformedPattern {
            pattern: pattern.to_string(),
        }
    }

    pub(crate) fn malformed_template(template: &str, reason: impl Into<String>) -> Self {
        PatternError::MalformedTemplate {
            template: template.to_string(),
            reason: reason.into(),
        }
    }
}

/// Result type used by the pattern engine.
pub type PatternResult<T> = std::result::Result<T, PatternError>;

/// Custom error type for the envmap application.
#[derive(Error, Debug)]
pub enum EnvmapError {
    #[error(transparent)]
    Pattern(#[from] PatternError),

    #[error("Malformed mapping rule: {0}")]
    MalformedRule(String),

    #[error("No mapping in rule '{rule}' matches environment '{env}'")]
    NoMatchingMapping { env: String, rule: String },

    #[error("Rule '{name}' is not defined in the configuration.")]
    UnknownRule { name: String },

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Type alias for Result using anyhow::Error for command handlers and config loading.
pub type Result<T> = anyhow::Result<T>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PatternError::malformed_pattern("{a");
        assert_eq!(
            err.to_string(),
            "Malformed pattern: '{a' has unbalanced or nested braces"
        );

        let err = PatternError::malformed_template("{x}", "'x' is not an index");
        assert_eq!(
            err.to_string(),
            "Malformed template '{x}': 'x' is not an index"
        );

        let err = EnvmapError::NoMatchingMapping {
            env: "qa".into(),
            rule: "dev->dev".into(),
        };
        assert_eq!(
            err.to_string(),
            "No mapping in rule 'dev->dev' matches environment 'qa'"
        );
    }

    #[test]
    fn test_pattern_error_is_transparent() {
        let err: EnvmapError = PatternError::GroupIndexOutOfRange { index: 2, len: 1 }.into();
        assert_eq!(
            err.to_string(),
            "Group references capture #2 but only 1 captures are available"
        );
        assert!(matches!(
            err,
            EnvmapError::Pattern(PatternError::GroupIndexOutOfRange { .. })
        ));
    }
}
