//! # Envmap Rule Resolve Command
//!
//! File: cli/src/commands/rule/resolve.rs
//!
//! ## Overview
//!
//! Implements `envmap rule resolve <ENV>`, mapping an environment name
//! through a rule and printing the target location: the expanded value, or
//! `<base>` when the value is empty.
//!
//! ## Architecture
//!
//! The rule comes from, in order:
//! 1. `--rule <TEXT>`: an inline rule; configuration is not read
//! 2. `--name <NAME>`: a named rule from configuration
//! 3. the configuration's default rule (`env = "{*}->{0}"` unless configured)
//!
//! `--toml` prints the full resolution (environment, matching key, value and
//! target) as a TOML document instead of just the target.
//!
use anyhow::Context;
use clap::Parser;
use envmap::core::config;
use envmap::core::error::Result;
use envmap::rules::{Resolution, Rule};
use std::path::PathBuf;
use tracing::debug;

#[derive(Parser, Debug)]
pub struct ResolveArgs {
    /// Environment name to resolve, e.g. 'prod-eu'.
    #[arg(allow_hyphen_values = true)]
    pub env: String,
    /// Inline rule text, e.g. 'dev*->cn; *->us'.
    #[arg(long, conflicts_with = "name", allow_hyphen_values = true)]
    pub rule: Option<String>,
    /// Name of a configured rule.
    #[arg(long, short = 'n')]
    pub name: Option<String>,
    /// Read rules from this file only, instead of the user and project config.
    #[arg(long, value_name = "PATH", conflicts_with = "rule")]
    pub config: Option<PathBuf>,
    /// Print the whole resolution as TOML.
    #[arg(long)]
    pub toml: bool,
}

pub fn handle_resolve(args: ResolveArgs) -> Result<()> {
    let rule = select_rule(&args)?;
    debug!("Resolving '{}' with rule '{}'", args.env, rule);
    let resolution = rule.resolve(&args.env)?;
    println!("{}", render(&resolution, args.toml)?);
    Ok(())
}

fn select_rule(args: &ResolveArgs) -> Result<Rule> {
    if let Some(text) = &args.rule {
        return Rule::parse(text).with_context(|| format!("Invalid rule '{}'", text));
    }
    let cfg = config::load_config(args.config.as_deref())?;
    match &args.name {
        Some(name) => cfg.rule(name),
        None => cfg.default_rule(),
    }
}

fn render(resolution: &Resolution, as_toml: bool) -> Result<String> {
    if as_toml {
        let text = toml::to_string(resolution).context("Failed to serialize resolution")?;
        Ok(text.trim_end().to_string())
    } else {
        Ok(resolution.target.to_string())
    }
}
