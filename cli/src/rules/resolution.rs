//! # Rule Resolution Results
//!
//! File: cli/src/rules/resolution.rs
//!
use serde::Serialize;
use std::fmt;

/// Where an environment name was mapped to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "path")]
pub enum Target {
    /// The base location itself (the value expanded to empty text).
    Base,
    /// A sub-location of the base, as a `/`-separated relative path.
    Named(String),
}

impl Target {
    fn from_value(value: &str) -> Self {
        if value.is_empty() {
            Target::Base
        } else {
            Target::Named(value.to_string())
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Base => write!(f, "<base>"),
            Target::Named(path) => write!(f, "{}", path),
        }
    }
}

/// Outcome of `Rule::resolve`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    /// The environment name, trimmed.
    pub env: String,
    /// The key pattern that matched.
    pub key: String,
    /// The expanded value template.
    pub value: String,
    pub target: Target,
}

impl Resolution {
    pub(crate) fn new(env: &str, key: &str, value: String) -> Self {
        Resolution {
            env: env.to_string(),
            key: key.to_string(),
            target: Target::from_value(&value),
            value,
        }
    }
}
