//! # Envmap Pattern Capture Command
//!
//! File: cli/src/commands/pattern/capture.rs
//!
//! ## Overview
//!
//! Implements `envmap pattern capture <PATTERN> <CANDIDATE>`. On a match it
//! prints each group value as `{i}=value`, one per line, where `i` is the
//! index a template would use to refer to it. A match with no groups prints
//! nothing. A non-match prints `no match`.
//!
use super::NO_MATCH;
use clap::Parser;
use envmap::core::error::Result;
use envmap::pattern;

#[derive(Parser, Debug)]
pub struct CaptureArgs {
    /// Annotated key pattern, e.g. '{*}-{eu*}'.
    #[arg(allow_hyphen_values = true)]
    pub pattern: String,
    /// String to match against the pattern.
    #[arg(allow_hyphen_values = true)]
    pub candidate: String,
}

pub fn handle_capture(args: CaptureArgs) -> Result<()> {
    for line in capture_lines(&args.pattern, &args.candidate)? {
        println!("{}", line);
    }
    Ok(())
}

fn capture_lines(key: &str, candidate: &str) -> Result<Vec<String>> {
    let lines = match pattern::match_and_capture(key, candidate)? {
        Some(groups) => groups
            .iter()
            .enumerate()
            .map(|(i, value)| format!("{{{}}}={}", i, value))
            .collect(),
        None => vec![NO_MATCH.to_string()],
    };
    Ok(lines)
}
