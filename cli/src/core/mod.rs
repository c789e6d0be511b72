//! # Envmap Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//!
//! ## Overview
//!
//! This module aggregates the infrastructure shared by the library and the
//! command handlers:
//! - `config`: Loading, merging and validating named mapping rules
//! - `error`: Engine and application error types
//!
//! ## Usage
//!
//! ```rust
//! use envmap::core::config; // For loading configuration
//! use envmap::core::error::{EnvmapError, Result}; // For error handling
//! ```
//!
pub mod config;
pub mod error;
