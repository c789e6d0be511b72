//! # Envmap Pattern Engine
//!
//! File: cli/src/pattern/mod.rs
//!
//! ## Overview
//!
//! A small glob-and-template engine. A *key pattern* is literal text with `*`
//! wildcards, optionally annotated with non-nested `{...}` groups. Matching
//! a candidate against a key pattern yields one value per group, and those
//! values can be substituted into *templates* through `{N}` tokens.
//!
//! ## Architecture
//!
//! Each call runs the stages below in order, each consuming the previous
//! stage's output. Nothing is shared between calls and nothing does I/O, so
//! every function here is reentrant and safe to call from any thread.
//!
//! 1. `normalize` - check brace structure, strip braces to get the bare pattern
//! 2. `matcher` - match the bare pattern, capture text per wildcard run
//! 3. `groups` - rebuild each `{...}` group from its literals and captures
//! 4. `template` - expand `{N}` tokens against the group values
//!
//! ## Examples
//!
//! ```rust
//! use envmap::pattern;
//!
//! // `{*}` captures the whole candidate as group 0.
//! let out = pattern::match_and_expand_all("{*}", "staging", &["conf/{0}"]).unwrap();
//! assert_eq!(out, Some(vec!["conf/staging".to_string()]));
//!
//! // Groups keep their literal text.
//! let groups = pattern::match_and_capture("{dev*}", "devqa").unwrap();
//! assert_eq!(groups, Some(vec!["devqa".to_string()]));
//!
//! // Existence checks skip all capture work.
//! assert!(pattern::match_any(&["dev*", "*"], "anything").unwrap());
//! ```
//!
use crate::core::error::PatternResult;

pub mod groups;
pub mod matcher;
pub mod normalize;
pub mod template;

pub use groups::extract_groups;
pub use normalize::normalize;
pub use template::expand;

/// Matches any run of characters, including none.
pub const WILDCARD: char = '*';
/// Opens a group in a key pattern, or a token in a template.
pub const GROUP_OPEN: char = '{';
/// Closes a group in a key pattern, or a token in a template.
pub const GROUP_CLOSE: char = '}';

/// Matches `candidate` against the annotated key `pattern` and returns the
/// value of each `{...}` group, or `None` if the candidate does not match.
///
/// A pattern with no groups at all is treated as if each wildcard run were
/// its own group, so `*` against `staging` yields `["staging"]`.
///
/// ## Errors
///
/// `PatternError::MalformedPattern` if the braces in `pattern` are
/// unbalanced or nested. This is reported even when nothing would match.
pub fn match_and_capture(pattern: &str, candidate: &str) -> PatternResult<Option<Vec<String>>> {
    let bare = normalize(pattern)?;
    let Some(captures) = matcher::captures(&bare, candidate) else {
        return Ok(None);
    };
    if !pattern.contains(GROUP_OPEN) {
        return Ok(Some(captures));
    }
    extract_groups(pattern, &captures).map(Some)
}

/// Like `match_and_capture`, then expands every template against the group
/// values. Output has the same length and order as `templates`.
///
/// Templates are only parsed when the candidate matches.
///
/// ## Errors
///
/// `MalformedPattern` for a bad key pattern, `MalformedTemplate` for the
/// first bad template.
pub fn match_and_expand_all<T: AsRef<str>>(
    pattern: &str,
    candidate: &str,
    templates: &[T],
) -> PatternResult<Option<Vec<String>>> {
    let Some(groups) = match_and_capture(pattern, candidate)? else {
        return Ok(None);
    };
    templates
        .iter()
        .map(|t| expand(t.as_ref(), &groups).map(|s| s.into_owned()))
        .collect::<PatternResult<Vec<_>>>()
        .map(Some)
}

/// Returns whether `candidate` matches `pattern`, without computing any
/// captures or groups.
pub fn match_only(pattern: &str, candidate: &str) -> PatternResult<bool> {
    let bare = normalize(pattern)?;
    Ok(matcher::is_match(&bare, candidate))
}

/// Returns whether `candidate` matches at least one of `patterns`, trying
/// them in order and stopping at the first match.
///
/// Patterns after the first match are not validated. An empty list matches
/// nothing.
pub fn match_any<P: AsRef<str>>(patterns: &[P], candidate: &str) -> PatternResult<bool> {
    for pattern in patterns {
        if match_only(pattern.as_ref(), candidate)? {
            return Ok(true);
        }
    }
    Ok(false)
}
