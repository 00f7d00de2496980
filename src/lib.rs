//! Recast - CLI tool for applying ordered identifier rewrite rules to a source file.
//!
//! This library provides the core functionality for recast, including:
//! - Ruleset file parsing and discovery
//! - Rule compilation with whole-word boundary handling
//! - The ordered rewrite pipeline (read whole file, apply rules, write back)
//!
//! Rules are applied strictly in sequence, each rule's output feeding the
//! next, so more specific patterns must be listed before general ones.
//!
//! # Example
//!
//! ```no_run
//! use recast_cli::config::RuleSet;
//! use recast_cli::rules::compile_rules;
//! use recast_cli::rewrite::rewrite_file;
//! use std::path::Path;
//!
//! let rules = compile_rules(&RuleSet::builtin()).unwrap();
//! let outcome = rewrite_file(Path::new("App.tsx"), &rules).unwrap();
//! println!("{} replacements", outcome.total());
//! ```

pub mod config;
pub mod error;
pub mod rewrite;
pub mod rules;

pub use error::{RecastError, Result};
