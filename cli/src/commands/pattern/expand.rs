//! # Envmap Pattern Expand Command
//!
//! File: cli/src/commands/pattern/expand.rs
//!
//! ## Overview
//!
//! Implements `envmap pattern expand <PATTERN> <CANDIDATE> <TEMPLATE>...`.
//! Matches the candidate once, then expands every template against the same
//! group values and prints the results in argument order, one per line.
//! Prints `no match` if the candidate does not match; templates are not
//! checked in that case.
//!
use super::NO_MATCH;
use clap::Parser;
use envmap::core::error::Result;
use envmap::pattern;

#[derive(Parser, Debug)]
pub struct ExpandArgs {
    /// Annotated key pattern, e.g. '{dev*}'.
    #[arg(allow_hyphen_values = true)]
    pub pattern: String,
    /// String to match against the pattern.
    #[arg(allow_hyphen_values = true)]
    pub candidate: String,
    /// Templates with '{N}' tokens referring to group N.
    #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
    pub templates: Vec<String>,
}

pub fn handle_expand(args: ExpandArgs) -> Result<()> {
    for line in expand_lines(&args.pattern, &args.candidate, &args.templates)? {
        println!("{}", line);
    }
    Ok(())
}

fn expand_lines(key: &str, candidate: &str, templates: &[String]) -> Result<Vec<String>> {
    Ok(pattern::match_and_expand_all(key, candidate, templates)?
        .unwrap_or_else(|| vec![NO_MATCH.to_string()]))
}
