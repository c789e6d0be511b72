//! # Envmap Command Modules
//!
//! File: cli/src/commands/mod.rs
//!
//! ## Overview
//!
//! This module aggregates the top-level command groups of the envmap CLI.
//!
//! ## Command Groups
//!
//! - `pattern`: Run the pattern engine directly (`test`, `any`, `capture`, `expand`)
//! - `rule`: Parse and resolve mapping rules (`resolve`, `check`, `list`)
//!
//! Each command group defines its own arguments structure and handler function.
//! Subcommands are declared within their group's `mod.rs`, not here.
//!

/// Command group exercising the pattern engine on the command line.
pub mod pattern;
/// Command group for mapping rules, inline or loaded from configuration.
pub mod rule;
