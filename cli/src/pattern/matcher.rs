//! # Wildcard Matcher
//!
//! File: cli/src/pattern/matcher.rs
//!
//! ## Overview
//!
//! Matches a bare pattern (literal text interleaved with `*`) against a
//! candidate string. A `*` consumes any run of characters, including none.
//! Matching is exact, case-sensitive and anchored at both ends.
//!
//! Two entry points share one recursive walk:
//! - `captures`: returns the text consumed by each wildcard, left to right.
//! - `is_match`: boolean only, no allocation.
//!
//! ## Architecture
//!
//! The walk is generic over a `CaptureSink`. The capturing entry point uses
//! a `Vec<String>`; the boolean entry point uses `Discard`, whose methods are
//! no-ops. Captures are recorded in final left-to-right order as the walk
//! goes; a branch that fails rolls the sink back to where it started.
//!
//! Consecutive wildcards (`**`) collapse into a single capture.
//!
//! When a wildcard is followed by a literal `part` and then another wildcard,
//! every occurrence of `part` in the candidate is tried left to right
//! (overlapping occurrences included) and the first split that lets the rest
//! of the pattern match wins. This is not memoized, so the worst case is
//! exponential in the number of wildcards; callers keep patterns small.
//!
use super::WILDCARD;

/// Receives the text consumed by each wildcard during a match.
trait CaptureSink {
    fn record(&mut self, capture: &str);
    /// Position to roll back to if the current branch fails.
    fn mark(&self) -> usize;
    fn rollback(&mut self, mark: usize);
}

impl CaptureSink for Vec<String> {
    fn record(&mut self, capture: &str) {
        self.push(capture.to_string());
    }

    fn mark(&self) -> usize {
        self.len()
    }

    fn rollback(&mut self, mark: usize) {
        self.truncate(mark);
    }
}

/// Sink for the boolean-only matcher.
struct Discard;

impl CaptureSink for Discard {
    fn record(&mut self, _capture: &str) {}

    fn mark(&self) -> usize {
        0
    }

    fn rollback(&mut self, _mark: usize) {}
}

/// Matches `pattern` against `candidate`, returning one capture per maximal
/// run of `*` in the pattern, or `None` if the candidate does not match.
pub fn captures(pattern: &str, candidate: &str) -> Option<Vec<String>> {
    let mut sink = Vec::new();
    walk(pattern, candidate, &mut sink).then_some(sink)
}

/// Same matching rules as `captures`, without recording anything.
pub fn is_match(pattern: &str, candidate: &str) -> bool {
    walk(pattern, candidate, &mut Discard)
}

fn walk<S: CaptureSink>(pattern: &str, candidate: &str, sink: &mut S) -> bool {
    let Some(first) = pattern.find(WILDCARD) else {
        return pattern == candidate;
    };

    // Leading literal run must match the candidate prefix exactly.
    if first > 0 {
        return match candidate.strip_prefix(&pattern[..first]) {
            Some(rest) => walk(&pattern[first..], rest, sink),
            None => false,
        };
    }

    let after = &pattern[WILDCARD.len_utf8()..];
    if after.is_empty() {
        sink.record(candidate);
        return true;
    }

    match after.find(WILDCARD) {
        // Trailing literal: the wildcard takes everything before it.
        None => match candidate.strip_suffix(after) {
            Some(head) => {
                sink.record(head);
                true
            }
            None => false,
        },
        Some(0) => walk(after, candidate, sink),
        Some(next) => {
            let part = &after[..next];
            let remaining = &after[next..];
            let mark = sink.mark();
            for start in occurrences(candidate, part) {
                sink.record(&candidate[..start]);
                if walk(remaining, &candidate[start + part.len()..], sink) {
                    return true;
                }
                sink.rollback(mark);
            }
            false
        }
    }
}

/// Byte offsets of every occurrence of `needle` in `haystack`, overlapping
/// occurrences included, in increasing order.
fn occurrences<'a>(haystack: &'a str, needle: &'a str) -> impl Iterator<Item = usize> + 'a {
    let mut from = 0;
    std::iter::from_fn(move || {
        let start = from + haystack.get(from..)?.find(needle)?;
        // Resume one character past this start so overlapping hits are seen.
        from = start + haystack[start..].chars().next().map_or(1, char::len_utf8);
        Some(start)
    })
}
