//! # Envmap CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//!
//! ## Overview
//!
//! Shared helpers for the integration tests in `cli/tests/`. Each `.rs` file
//! in this directory (other than this module) is compiled as its own test
//! crate and runs the compiled `envmap` binary.
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::path::Path;

/// # Get Envmap Command (`envmap_cmd`)
///
/// Creates an `assert_cmd::Command` for the compiled `envmap` binary.
///
/// `RUST_LOG` is cleared so a developer's environment cannot change what the
/// binary writes to stderr.
///
/// ## Panics
/// Panics if the `envmap` binary cannot be found via `Command::cargo_bin`.
pub fn envmap_cmd() -> Command {
    let mut cmd = Command::cargo_bin("envmap").expect("Failed to find envmap binary for testing");
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Writes `content` to `name` inside `dir` and returns the full path as a string.
pub fn write_config(dir: &Path, name: &str, content: &str) -> String {
    let path = dir.join(name);
    std::fs::write(&path, content).expect("Failed to write test config");
    path.to_str().expect("Temp path is not UTF-8").to_string()
}
