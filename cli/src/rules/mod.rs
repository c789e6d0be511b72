//! # Envmap Mapping Rules
//!
//! File: cli/src/rules/mod.rs
//!
//! ## Overview
//!
//! A mapping rule decides which configuration location an environment name
//! maps to. The textual form is a `;`-separated list of mappings, each one a
//! `,`-separated list of key patterns, `->`, and a value template:
//!
//! ```text
//! {*}->{0}
//! dev*,test*->cn; prod-{*}->{0}; *->
//! ```
//!
//! ## Architecture
//!
//! - `Rule::parse` splits the text and validates every key pattern and value
//!   template up front, so a bad rule fails before any environment is seen.
//! - `Rule::resolve` tries mappings in order, and within a mapping its keys
//!   in order. The first key that matches the environment name wins and its
//!   value template is expanded with the key's groups
//!   (`pattern::match_and_expand_all`).
//! - `Rule::matches` is the existence check (`pattern::match_any`) used when
//!   only a yes/no is needed.
//!
//! An empty expanded value maps to `Target::Base`, the base location itself;
//! anything else is a `Target::Named` sub-location.
//!
//! ## Examples
//!
//! ```rust
//! use envmap::rules::{Rule, Target};
//!
//! let rule: Rule = "dev*,test*->cn; prod-{*}->{0}; *->".parse().unwrap();
//! assert_eq!(rule.resolve("devqa").unwrap().target, Target::Named("cn".into()));
//! assert_eq!(rule.resolve("prod-eu").unwrap().target, Target::Named("eu".into()));
//! assert_eq!(rule.resolve("other").unwrap().target, Target::Base);
//! ```
//!
use crate::core::error::{EnvmapError, PatternError};
use crate::pattern;
use std::fmt;
use std::str::FromStr;
use tracing::{debug, info, trace};

mod resolution;

pub use resolution::{Resolution, Target};

/// Separates mappings within a rule.
pub const MAPPING_SEPARATOR: char = ';';
/// Separates key patterns within a mapping.
pub const KEY_SEPARATOR: char = ',';
/// Separates the keys of a mapping from its value template.
pub const ARROW: &str = "->";
/// The rule used when nothing else is configured: every name maps to itself.
pub const DEFAULT_RULE: &str = "{*}->{0}";

/// One `keys->value` entry of a rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mapping {
    keys: Vec<String>,
    value: String,
}

impl Mapping {
    /// Key patterns, tried in order.
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    /// Value template expanded with the matching key's groups.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Parses one `keys->value` segment. Returns `None` when the key list
    /// consists only of separators, since such a mapping can never match.
    fn parse(segment: &str) -> Result<Option<Self>, EnvmapError> {
        let mut sides = segment.split(ARROW);
        let key = sides.next().unwrap_or_default().trim();
        let value = sides.next().unwrap_or_default().trim();
        if sides.next().is_some() {
            return Err(EnvmapError::MalformedRule(format!(
                "'{}' contains more than one '{}'",
                segment, ARROW
            )));
        }

        let keys = split_keys(key);
        if keys.is_empty() {
            return Ok(None);
        }

        for key in &keys {
            pattern::normalize(key)?;
        }
        // Expanding against no groups checks the template structure only.
        pattern::expand(value, &[])?;

        Ok(Some(Mapping {
            keys,
            value: value.to_string(),
        }))
    }
}

/// Splits a key list on `,` and trims each key. Empty keys are kept, and
/// match only the empty environment name, except that trailing empty keys
/// are dropped: `,dev*` is `["", "dev*"]` while `dev*,` is `["dev*"]`. An
/// entirely empty list is the single empty key.
fn split_keys(key: &str) -> Vec<String> {
    if key.is_empty() {
        return vec![String::new()];
    }
    let mut keys: Vec<String> = key
        .split(KEY_SEPARATOR)
        .map(|k| k.trim().to_string())
        .collect();
    while keys.last().is_some_and(String::is_empty) {
        keys.pop();
    }
    keys
}

impl fmt::Display for Mapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.keys.join(","), ARROW, self.value)
    }
}

/// A parsed mapping rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    mappings: Vec<Mapping>,
}

impl Rule {
    /// Parses the textual rule form.
    ///
    /// Segments are trimmed and empty segments skipped. Within a mapping the
    /// keys and value are trimmed, trailing empty keys are dropped, and a
    /// missing value is the empty template. A mapping whose keys are all
    /// separators (`,->x`) is skipped.
    ///
    /// ## Errors
    ///
    /// - `EnvmapError::MalformedRule` if a segment has more than one `->`, or
    ///   the rule has no mappings at all.
    /// - `EnvmapError::Pattern` if a key or value has malformed braces.
    pub fn parse(text: &str) -> Result<Self, EnvmapError> {
        let mut mappings = Vec::new();
        for segment in text.split(MAPPING_SEPARATOR) {
            let segment = segment.trim();
            if segment.is_empty() {
                trace!("Skipping empty segment in rule '{}'", text);
                continue;
            }
            let Some(mapping) = Mapping::parse(segment)? else {
                trace!("Skipping mapping without keys: '{}'", segment);
                continue;
            };
            debug!("Parsed mapping: {}", mapping);
            mappings.push(mapping);
        }
        if mappings.is_empty() {
            return Err(EnvmapError::MalformedRule(format!(
                "'{}' contains no mappings",
                text
            )));
        }
        Ok(Rule { mappings })
    }

    pub fn mappings(&self) -> &[Mapping] {
        &self.mappings
    }

    /// Maps `env` through the first matching key.
    ///
    /// Leading and trailing whitespace of `env` is ignored.
    ///
    /// ## Errors
    ///
    /// `EnvmapError::NoMatchingMapping` if no key matches.
    pub fn resolve(&self, env: &str) -> Result<Resolution, EnvmapError> {
        let env = env.trim();
        for mapping in &self.mappings {
            for key in &mapping.keys {
                debug!("Trying key '{}' against environment '{}'", key, env);
                let expanded = pattern::match_and_expand_all(key, env, &[&mapping.value])?;
                let Some(value) = expanded.and_then(|mut v| v.pop()) else {
                    continue;
                };
                info!(
                    "Environment '{}' mapped by [{}->{}] to '{}'",
                    env, key, mapping.value, value
                );
                return Ok(Resolution::new(env, key, value));
            }
        }
        Err(EnvmapError::NoMatchingMapping {
            env: env.to_string(),
            rule: self.to_string(),
        })
    }

    /// Returns whether any key of any mapping matches `env`.
    pub fn matches(&self, env: &str) -> Result<bool, PatternError> {
        let env = env.trim();
        for mapping in &self.mappings {
            if pattern::match_any(&mapping.keys, env)? {
                return Ok(true);
            }
        }
        Ok(false)
    }
}

impl Default for Rule {
    /// `{*}->{0}`: every environment maps to the location of the same name.
    fn default() -> Self {
        Rule {
            mappings: vec![Mapping {
                keys: vec!["{*}".to_string()],
                value: "{0}".to_string(),
            }],
        }
    }
}

impl FromStr for Rule {
    type Err = EnvmapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rule::parse(s)
    }
}

impl fmt::Display for Rule {
    /// Canonical form: `k1,k2->v; k3->v3`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, mapping) in self.mappings.iter().enumerate() {
            if i > 0 {
                write!(f, "{} ", MAPPING_SEPARATOR)?;
            }
            write!(f, "{}", mapping)?;
        }
        Ok(())
    }
}
