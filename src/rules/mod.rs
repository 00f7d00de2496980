//! Rule compilation and application for recast.
//!
//! This module handles:
//! - Compiling rules to regexes (word-boundary anchoring, literal escaping)
//! - Running the ordered rewrite pipeline over a text buffer

pub mod compiler;
pub mod engine;

pub use compiler::{CompiledRule, compile_rules};
pub use engine::{RewriteOutcome, apply_rules};
