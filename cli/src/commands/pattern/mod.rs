//! # Envmap Pattern Command Group
//!
//! File: cli/src/commands/pattern/mod.rs
//!
//! ## Overview
//!
//! This module is the router for the `envmap pattern` command group, which
//! exposes the pattern engine directly. Each subcommand maps onto one engine
//! entry point:
//!
//! | subcommand | engine call                      | output                     |
//! |------------|----------------------------------|----------------------------|
//! | `test`     | `pattern::match_only`            | `true` / `false`           |
//! | `any`      | `pattern::match_any`             | `true` / `false`           |
//! | `capture`  | `pattern::match_and_capture`     | `{i}=value` per group      |
//! | `expand`   | `pattern::match_and_expand_all`  | one expanded template/line |
//!
//! A candidate that does not match is a normal outcome (`false` or
//! `no match`), not an error. Malformed patterns and templates are errors.
//!
//! ## Examples
//!
//! ```bash
//! envmap pattern test 'a*b' axyzb          # true
//! envmap pattern any prod 'dev*' 'qa'      # false
//! envmap pattern capture '{*}-{*}' cn-bj   # {0}=cn, {1}=bj
//! envmap pattern expand '{dev*}' devqa 'conf/{0}'
//! ```
//!
use clap::{Parser, Subcommand};
use envmap::core::error::Result;

mod any;
mod capture;
mod expand;

/// Printed by `capture` and `expand` when the candidate does not match.
const NO_MATCH: &str = "no match";

/// # Pattern Command Group Arguments (`PatternArgs`)
#[derive(Parser, Debug)]
pub struct PatternArgs {
    #[command(subcommand)]
    command: PatternCommand,
}

/// # Pattern Subcommands (`PatternCommand`)
#[derive(Subcommand, Debug)]
enum PatternCommand {
    /// Check whether a candidate matches a key pattern.
    Test(test::TestArgs),
    /// Check whether a candidate matches any of several key patterns.
    Any(any::AnyArgs),
    /// Print the group values produced by matching a candidate.
    Capture(capture::CaptureArgs),
    /// Expand templates with the groups produced by matching a candidate.
    Expand(expand::ExpandArgs),
}

/// Dispatches `envmap pattern <subcommand>` to its handler.
pub fn handle_pattern(args: PatternArgs) -> Result<()> {
    match args.command {
        PatternCommand::Test(args) => test::handle_test(args),
        PatternCommand::Any(args) => any::handle_any(args),
        PatternCommand::Capture(args) => capture::handle_capture(args),
        PatternCommand::Expand(args) => expand::handle_expand(args),
    }
}
