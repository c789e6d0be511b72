//! # Envmap Rule List Command
//!
//! File: cli/src/commands/rule/list.rs
//!
//! ## Overview
//!
//! Implements `envmap rule list`, printing every configured rule as
//! `name = rule`, sorted by name. The default rule is marked with `*`.
//!
//! ## Examples
//!
//! ```text
//! $ envmap rule list
//! * env = {*}->{0}
//!   region = dev*,test*->cn; *->us
//! ```
//!
use clap::Parser;
use envmap::core::config::{self, Config};
use envmap::core::error::Result;
use std::path::PathBuf;

#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Read rules from this file only, instead of the user and project config.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

pub fn handle_list(args: ListArgs) -> Result<()> {
    let cfg = config::load_config(args.config.as_deref())?;
    for line in list_lines(&cfg) {
        println!("{}", line);
    }
    Ok(())
}

fn list_lines(cfg: &Config) -> Vec<String> {
    let default_name = cfg.default_rule_name();
    cfg.rules
        .iter()
        .map(|(name, text)| {
            let marker = if name == default_name { '*' } else { ' ' };
            format!("{} {} = {}", marker, name, text)
        })
        .collect()
}
