//! # Key Pattern Normalization
//!
//! File: cli/src/pattern/normalize.rs
//!
//! Strips the `{`/`}` group annotations from a key pattern, yielding the
//! bare pattern the wildcard matcher works on. Braces must balance and may
//! not nest.
//!
use super::{GROUP_CLOSE, GROUP_OPEN};
use crate::core::error::{PatternError, PatternResult};
use std::borrow::Cow;

/// Validates the brace structure of `annotated` and returns it with every
/// `{` and `}` removed.
///
/// Patterns without braces are returned borrowed.
///
/// ## Errors
///
/// `PatternError::MalformedPattern` if a `{` opens inside an open group, a
/// `}` appears with no open group, or the input ends inside a group.
pub fn normalize(annotated: &str) -> PatternResult<Cow<'_, str>> {
    if !annotated.contains([GROUP_OPEN, GROUP_CLOSE]) {
        return Ok(Cow::Borrowed(annotated));
    }

    let mut bare = String::with_capacity(annotated.len());
    let mut in_group = false;
    for ch in annotated.chars() {
        match ch {
            GROUP_OPEN if in_group => return Err(PatternError::malformed_pattern(annotated)),
            GROUP_OPEN => in_group = true,
            GROUP_CLOSE if !in_group => return Err(PatternError::malformed_pattern(annotated)),
            GROUP_CLOSE => in_group = false,
            _ => bare.push(ch),
        }
    }
    if in_group {
        return Err(PatternError::malformed_pattern(annotated));
    }
    Ok(Cow::Owned(bare))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_braces() {
        assert_eq!(normalize("{*}").unwrap(), "*");
        assert_eq!(normalize("{dev*}").unwrap(), "dev*");
        assert_eq!(normalize("a{b}c{*}d").unwrap(), "abc*d");
        assert_eq!(normalize("{}").unwrap(), "");
    }

    #[test]
    fn test_plain_pattern_is_borrowed() {
        let bare = normalize("dev*").unwrap();
        assert!(matches!(bare, Cow::Borrowed("dev*")));
        assert!(matches!(normalize("").unwrap(), Cow::Borrowed("")));
    }

    #[test]
    fn test_rejects_malformed_braces() {
        for pattern in ["{a", "a}", "{a{b}}", "}{", "{*}}", "{{}}", "x{"] {
            assert_eq!(
                normalize(pattern),
                Err(PatternError::MalformedPattern {
                    pattern: pattern.to_string()
                }),
                "pattern {:?} should be rejected",
                pattern
            );
        }
    }

    #[test]
    fn test_non_ascii_literals_survive() {
        assert_eq!(normalize("{é*}ß").unwrap(), "é*ß");
    }
}
