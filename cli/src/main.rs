//! # Envmap Main Entry Point
//!
//! File: cli/src/main.rs
//!
//! ## Overview
//!
//! This file serves as the main entry point for the envmap CLI application.
//! It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Routing execution to appropriate command handlers
//!
//! ## Architecture
//!
//! - Each top-level command group (`pattern`, `rule`) is a variant in the
//!   `Commands` enum
//! - Groups are mapped to handler functions in their respective modules
//! - All errors are propagated to this level for consistent handling
//!
//! ## Examples
//!
//! ```bash
//! # Does a pattern match?
//! envmap pattern test 'dev*' devqa
//!
//! # Resolve an environment with debug logging
//! envmap -vv rule resolve prod-eu --rule 'prod-{*}->{0}; *->'
//! ```
//!
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;

/// Defines the top-level command-line arguments structure using Clap's derive macros.
#[derive(Parser, Debug)]
#[command(
    name = "envmap",
    about = "Map environment names to configuration locations with glob patterns",
    long_about = "Match environment names against key patterns such as 'dev*' or 'prod-{*}',\n\
                  expand '{N}' templates with the captured groups, and resolve\n\
                  'keys->value; ...' mapping rules.",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

/// Enum defining all available top-level commands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Match key patterns, capture groups and expand templates.
    #[command(alias = "p")]
    Pattern(commands::pattern::PatternArgs),
    /// Check and resolve `keys->value; ...` mapping rules.
    #[command(alias = "r")]
    Rule(commands::rule::RuleArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    let command_result = match cli.command {
        Commands::Pattern(args) => commands::pattern::handle_pattern(args),
        Commands::Rule(args) => commands::rule::handle_rule(args),
    };

    if let Err(e) = command_result {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parses_group_aliases() {
        let cli = Cli::try_parse_from(["envmap", "p", "test", "*", "x"]).unwrap();
        assert!(matches!(cli.command, Commands::Pattern(_)));
        let cli = Cli::try_parse_from(["envmap", "-vv", "r", "check", "*->x"]).unwrap();
        assert!(matches!(cli.command, Commands::Rule(_)));
        assert_eq!(cli.verbose, 2);
    }
}
