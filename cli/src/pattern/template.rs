//! # Template Expansion
//!
//! File: cli/src/pattern/template.rs
//!
//! ## Overview
//!
//! Expands `{N}` tokens in a template with the N-th group value from a
//! match. Text outside tokens is copied verbatim.
//!
//! The policy is strict on structure and lenient on range:
//! - unbalanced or nested braces, and tokens that are not a base-10
//!   non-negative integer, are `PatternError::MalformedTemplate`;
//! - an index past the end of the group list expands to empty text.
//!
//! Note that templates share the brace delimiter with annotated key patterns
//! but mean something different: `{0}` here is a reference, not a group.
//!
use super::{GROUP_CLOSE, GROUP_OPEN};
use crate::core::error::{PatternError, PatternResult};
use std::borrow::Cow;

/// Expands every `{N}` token in `template` using `groups`.
///
/// A template without braces is returned borrowed.
///
/// ## Examples
///
/// ```rust
/// use envmap::pattern::expand;
///
/// let groups = vec!["eu".to_string(), "prod".to_string()];
/// assert_eq!(expand("{1}-{0}", &groups).unwrap(), "prod-eu");
/// assert_eq!(expand("cfg-{7}", &groups).unwrap(), "cfg-");
/// assert!(expand("{name}", &groups).is_err());
/// ```
pub fn expand<'t>(template: &'t str, groups: &[String]) -> PatternResult<Cow<'t, str>> {
    if !template.contains([GROUP_OPEN, GROUP_CLOSE]) {
        return Ok(Cow::Borrowed(template));
    }

    let mut out = String::with_capacity(template.len());
    // Byte offset of the open brace of the token being read.
    let mut token_start: Option<usize> = None;
    let mut copied_to = 0;

    for (i, ch) in template.char_indices() {
        match ch {
            GROUP_OPEN => {
                if token_start.is_some() {
                    return Err(PatternError::malformed_template(
                        template,
                        format!("nested '{}' at byte {}", GROUP_OPEN, i),
                    ));
                }
                out.push_str(&template[copied_to..i]);
                token_start = Some(i);
            }
            GROUP_CLOSE => {
                let start = token_start.take().ok_or_else(|| {
                    PatternError::malformed_template(
                        template,
                        format!("unmatched '{}' at byte {}", GROUP_CLOSE, i),
                    )
                })?;
                let token = &template[start + GROUP_OPEN.len_utf8()..i];
                if let Some(value) = lookup(template, token, groups)? {
                    out.push_str(value);
                }
                copied_to = i + GROUP_CLOSE.len_utf8();
            }
            _ => {}
        }
    }

    if let Some(start) = token_start {
        return Err(PatternError::malformed_template(
            template,
            format!("unclosed '{}' at byte {}", GROUP_OPEN, start),
        ));
    }
    out.push_str(&template[copied_to..]);
    Ok(Cow::Owned(out))
}

/// Resolves one token body to its group value, `None` when out of range.
fn lookup<'g>(template: &str, token: &str, groups: &'g [String]) -> PatternResult<Option<&'g str>> {
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(PatternError::malformed_template(
            template,
            format!("'{}' is not a group index", token),
        ));
    }
    // All digits; a parse failure can only be overflow, which is out of range anyway.
    let value = token
        .parse::<usize>()
        .ok()
        .and_then(|index| groups.get(index))
        .map(String::as_str);
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn groups(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_plain_template_unchanged() {
        let out = expand("no-braces-here", &groups(&["x"])).unwrap();
        assert!(matches!(out, Cow::Borrowed("no-braces-here")));
        assert_eq!(expand("", &[]).unwrap(), "");
    }

    #[test]
    fn test_substitutes_by_position() {
        let g = groups(&["staging", "eu"]);
        assert_eq!(expand("{0}", &g).unwrap(), "staging");
        assert_eq!(
            expand("prefix-{0}-suffix", &g).unwrap(),
            "prefix-staging-suffix"
        );
        assert_eq!(expand("{1}/{0}/{1}", &g).unwrap(), "eu/staging/eu");
        assert_eq!(expand("{0}{1}", &g).unwrap(), "stagingeu");
        assert_eq!(expand("{00}", &g).unwrap(), "staging");
    }

    #[test]
    fn test_out_of_range_is_empty() {
        assert_eq!(expand("{5}", &[]).unwrap(), "");
        assert_eq!(expand("a{2}b", &groups(&["x", "y"])).unwrap(), "ab");
        assert_eq!(
            expand("{99999999999999999999999}", &groups(&["x"])).unwrap(),
            ""
        );
    }

    #[test]
    fn test_non_numeric_token_is_rejected() {
        for template in ["{}", "{x}", "{-1}", "{ 0}", "{+1}", "{1.0}"] {
            assert!(
                matches!(
                    expand(template, &groups(&["a", "b"])),
                    Err(PatternError::MalformedTemplate { .. })
                ),
                "template {:?} should be rejected",
                template
            );
        }
    }

    #[test]
    fn test_unbalanced_braces_are_rejected() {
        for template in ["{0", "0}", "a}b", "{{0}}", "{0}{", "x{1{"] {
            assert!(
                matches!(
                    expand(template, &groups(&["a"])),
                    Err(PatternError::MalformedTemplate { .. })
                ),
                "template {:?} should be rejected",
                template
            );
        }
    }

    #[test]
    fn test_error_names_the_template() {
        let err = expand("cfg-{env}", &[]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Malformed template 'cfg-{env}': 'env' is not a group index"
        );
    }

    #[test]
    fn test_group_values_are_not_reexpanded() {
        assert_eq!(expand("{0}", &groups(&["{1}"])).unwrap(), "{1}");
    }
}
