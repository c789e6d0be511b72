//! # Envmap
//!
//! File: cli/src/lib.rs
//!
//! ## Overview
//!
//! Envmap maps environment names (`dev`, `prod-eu`, `qa3`, ...) to
//! configuration locations using glob-like key patterns and positional
//! templates. The library half of the crate holds everything that does not
//! depend on the command line:
//!
//! - `pattern`: the matching and template engine (pure, no I/O)
//! - `rules`: the `keys->value; ...` mapping-rule format built on `pattern`
//! - `core`: configuration loading and error types
//!
//! The `envmap` binary (`main.rs`) adds the CLI on top.
//!
//! ## Examples
//!
//! ```rust
//! use envmap::pattern;
//! use envmap::rules::Rule;
//!
//! assert!(pattern::match_only("dev*", "devqa").unwrap());
//!
//! let rule = Rule::parse("prod-{*}->{0}; *->").unwrap();
//! assert_eq!(rule.resolve("prod-eu").unwrap().value, "eu");
//! ```
//!
pub mod core;
pub mod pattern;
pub mod rules;
