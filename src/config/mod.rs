//! Ruleset loading and parsing for recast.
//!
//! This module handles:
//! - TOML ruleset file parsing
//! - Ruleset discovery (explicit path, local file, user file, built-in)
//! - The built-in default ruleset and the `--init` template

pub mod discover;
pub mod parser;
pub mod types;

pub use discover::{NO_USER_RULES_ENV_VAR, resolve_rules, user_rules_disabled, user_rules_path};
pub use parser::{parse_rules_file, parse_rules_str};
pub use types::{LoadedRules, MatchKind, Rule, RuleSet, RulesSource, init_template};
