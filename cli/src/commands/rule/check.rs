//! # Envmap Rule Check Command
//!
//! File: cli/src/commands/rule/check.rs
//!
//! Implements `envmap rule check <RULE>`: parses the rule, failing on any
//! malformed mapping, key pattern or value template, and prints its
//! canonical form.
//!
use anyhow::Context;
use clap::Parser;
use envmap::core::error::Result;
use envmap::rules::Rule;
use tracing::info;

#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Rule text, e.g. 'dev*,test*->cn; *->us'.
    #[arg(allow_hyphen_values = true)]
    pub rule: String,
}

pub fn handle_check(args: CheckArgs) -> Result<()> {
    let rule = Rule::parse(&args.rule)
        .with_context(|| format!("Invalid rule '{}'", args.rule))?;
    info!("Rule has {} mapping(s).", rule.mappings().len());
    println!("{}", rule);
    Ok(())
}
