//! # Envmap Rule Command Group
//!
//! File: cli/src/commands/rule/mod.rs
//!
//! ## Overview
//!
//! This module is the router for the `envmap rule` command group, which works
//! with `keys->value; ...` mapping rules.
//!
//! ## Architecture
//!
//! - `RuleArgs`: Top-level arguments for the command group.
//! - `RuleCommand`: Enum defining all rule subcommands.
//! - `handle_rule`: Routes execution to the relevant subcommand handler.
//!
//! `resolve` and `list` read rules from configuration (see
//! `envmap::core::config`); `check` only parses its argument.
//!
//! ## Examples
//!
//! ```bash
//! # Resolve with an inline rule
//! envmap rule resolve devqa --rule 'dev*->cn; *->us'
//!
//! # Resolve with a rule from .envmap.toml
//! envmap rule resolve prod-eu --name region
//!
//! # Validate a rule and print its canonical form
//! envmap rule check ' dev* , qa -> x ;; '
//!
//! # List configured rules
//! envmap rule list
//! ```
//!
use clap::{Parser, Subcommand};
use envmap::core::error::Result;

mod check;
mod list;
mod resolve;

/// # Rule Command Group Arguments (`RuleArgs`)
#[derive(Parser, Debug)]
pub struct RuleArgs {
    #[command(subcommand)]
    command: RuleCommand,
}

/// # Rule Subcommands (`RuleCommand`)
#[derive(Subcommand, Debug)]
enum RuleCommand {
    /// Map an environment name through a rule and print the target.
    Resolve(resolve::ResolveArgs),
    /// Parse a rule and print its canonical form.
    Check(check::CheckArgs),
    /// List the rules available from configuration.
    List(list::ListArgs),
}

/// Dispatches `envmap rule <subcommand>` to its handler.
pub fn handle_rule(args: RuleArgs) -> Result<()> {
    match args.command {
        RuleCommand::Resolve(args) => resolve::handle_resolve(args),
        RuleCommand::Check(args) => check::handle_check(args),
        RuleCommand::List(args) => list::handle_list(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_rule_resolve() {
        let result = RuleArgs::try_parse_from(["rule", "resolve", "prod", "--rule", "*->x"]);
        assert!(matches!(result.unwrap().command, RuleCommand::Resolve(_)));
    }

    #[test]
    fn test_resolve_rule_and_name_conflict() {
        let result = RuleArgs::try_parse_from([
            "rule", "resolve", "prod", "--rule", "*->x", "--name", "region",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parses_rule_check() {
        let result = RuleArgs::try_parse_from(["rule", "check", "dev*->cn"]);
        assert!(matches!(result.unwrap().command, RuleCommand::Check(_)));
    }

    #[test]
    fn test_parses_rule_list() {
        let result = RuleArgs::try_parse_from(["rule", "list", "--config", "x.toml"]);
        assert!(matches!(result.unwrap().command, RuleCommand::List(_)));
    }
}
