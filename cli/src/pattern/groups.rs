//! # Group Extraction
//!
//! File: cli/src/pattern/groups.rs
//!
//! ## Overview
//!
//! After a successful match, each `{...}` group of the annotated pattern is
//! resolved to a value: its literal text with every wildcard run replaced by
//! the capture that run produced.
//!
//! Wildcards are numbered across the whole annotated pattern, not per group,
//! and a run of consecutive `*` counts once (braces in between do not break a
//! run). This is the same numbering the matcher uses on the bare pattern, so
//! captures from `matcher::captures` line up with it.
//!
//! ## Examples
//!
//! | pattern        | candidate | captures       | groups            |
//! |----------------|-----------|----------------|-------------------|
//! | `{*}`          | `prod`    | `prod`         | `prod`            |
//! | `{dev*}`       | `devqa`   | `qa`           | `devqa`           |
//! | `*-{*}`        | `cn-bj`   | `cn`, `bj`     | `bj`              |
//! | `{eu}-*`       | `eu-x`    | `x`            | `eu`              |
//!
use super::{GROUP_CLOSE, GROUP_OPEN, WILDCARD};
use crate::core::error::{PatternError, PatternResult};

/// A group that has been opened but not yet closed.
struct OpenGroup {
    value: String,
    /// Byte offset of the first literal not yet copied into `value`.
    copied_to: usize,
    /// Capture most recently appended to this group.
    last_capture: Option<usize>,
}

/// Resolves every `{...}` group in `annotated` against `captures`.
///
/// Groups are returned in the order their opening braces appear.
///
/// ## Errors
///
/// - `PatternError::MalformedPattern` for nested or unbalanced braces.
/// - `PatternError::GroupIndexOutOfRange` if a wildcard inside a group needs
///   a capture beyond the end of `captures`. Captures produced by matching
///   the same pattern never trigger this.
pub fn extract_groups(annotated: &str, captures: &[String]) -> PatternResult<Vec<String>> {
    let mut groups = Vec::new();
    let mut open: Option<OpenGroup> = None;
    // Number of wildcard runs seen so far.
    let mut runs = 0usize;
    let mut in_run = false;

    for (i, ch) in annotated.char_indices() {
        match ch {
            WILDCARD => {
                if !in_run {
                    runs += 1;
                    in_run = true;
                }
                let Some(group) = open.as_mut() else {
                    continue;
                };
                let index = runs - 1;
                if group.last_capture != Some(index) {
                    let capture =
                        captures
                            .get(index)
                            .ok_or(PatternError::GroupIndexOutOfRange {
                                index,
                                len: captures.len(),
                            })?;
                    group.value.push_str(&annotated[group.copied_to..i]);
                    group.value.push_str(capture);
                    group.last_capture = Some(index);
                }
                group.copied_to = i + WILDCARD.len_utf8();
            }
            GROUP_OPEN => {
                if open.is_some() {
                    return Err(PatternError::malformed_pattern(annotated));
                }
                open = Some(OpenGroup {
                    value: String::new(),
                    copied_to: i + GROUP_OPEN.len_utf8(),
                    last_capture: None,
                });
            }
            GROUP_CLOSE => {
                let mut group = open
                    .take()
                    .ok_or_else(|| PatternError::malformed_pattern(annotated))?;
                group.value.push_str(&annotated[group.copied_to..i]);
                groups.push(group.value);
            }
            _ => in_run = false,
        }
    }

    if open.is_some() {
        return Err(PatternError::malformed_pattern(annotated));
    }
    Ok(groups)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn caps(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_single_wildcard_group() {
        assert_eq!(extract_groups("{*}", &caps(&["prod"])).unwrap(), ["prod"]);
    }

    #[test]
    fn test_group_keeps_surrounding_literals() {
        assert_eq!(extract_groups("{dev*}", &caps(&["qa"])).unwrap(), ["devqa"]);
        assert_eq!(
            extract_groups("{a*b*c}", &caps(&["1", "2"])).unwrap(),
            ["a1b2c"]
        );
    }

    #[test]
    fn test_literal_only_group() {
        assert_eq!(extract_groups("{eu}-*", &caps(&["x"])).unwrap(), ["eu"]);
        assert_eq!(extract_groups("{}", &[]).unwrap(), [""]);
    }

    #[test]
    fn test_wildcards_numbered_across_pattern() {
        assert_eq!(
            extract_groups("*-{*}", &caps(&["cn", "bj"])).unwrap(),
            ["bj"]
        );
        assert_eq!(
            extract_groups("{*}.*.{*}", &caps(&["a", "b", "c"])).unwrap(),
            ["a", "c"]
        );
    }

    #[test]
    fn test_consecutive_wildcards_use_one_capture() {
        assert_eq!(extract_groups("{x**y}", &caps(&["-"])).unwrap(), ["x-y"]);
        // A run split by a brace is still one run.
        assert_eq!(extract_groups("*{*}", &caps(&["all"])).unwrap(), ["all"]);
        assert_eq!(
            extract_groups("{a*}{*b}", &caps(&["z"])).unwrap(),
            ["az", "zb"]
        );
    }

    #[test]
    fn test_no_groups() {
        assert!(extract_groups("dev*", &caps(&["qa"])).unwrap().is_empty());
        assert!(extract_groups("", &[]).unwrap().is_empty());
    }

    #[test]
    fn test_missing_capture_is_reported() {
        assert_eq!(
            extract_groups("*-{*}", &caps(&["only"])),
            Err(PatternError::GroupIndexOutOfRange { index: 1, len: 1 })
        );
        assert_eq!(
            extract_groups("{*}", &[]),
            Err(PatternError::GroupIndexOutOfRange { index: 0, len: 0 })
        );
    }

    #[test]
    fn test_wildcards_outside_groups_need_no_capture() {
        assert_eq!(extract_groups("{lit}*", &[]).unwrap(), ["lit"]);
    }

    #[test]
    fn test_rejects_malformed_braces() {
        for pattern in ["{a", "a}", "{a{b}}"] {
            assert!(matches!(
                extract_groups(pattern, &[]),
                Err(PatternError::MalformedPattern { .. })
            ));
        }
    }
}
