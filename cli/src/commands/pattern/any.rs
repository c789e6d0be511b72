//! # Envmap Pattern Any Command
//!
//! File: cli/src/commands/pattern/any.rs
//!
//! Implements `envmap pattern any <CANDIDATE> <PATTERN>...`: prints `true` if
//! the candidate matches at least one pattern. Patterns are tried in order and
//! the first match stops the search.
//!
use clap::Parser;
use envmap::core::error::Result;
use envmap::pattern;

#[derive(Parser, Debug)]
pub struct AnyArgs {
    /// String to match.
    #[arg(allow_hyphen_values = true)]
    pub candidate: String,
    /// Key patterns, tried in order.
    #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
    pub patterns: Vec<String>,
}

pub fn handle_any(args: AnyArgs) -> Result<()> {
    println!("{}", pattern::match_any(&args.patterns, &args.candidate)?);
    Ok(())
}
