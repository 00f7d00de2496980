use crate::config::types::RuleSet;
use crate::error::{RecastError, Result};
use std::path::Path;

/// Parse a ruleset file from the given path.
pub fn parse_rules_file(path: &Path) -> Result<RuleSet> {
	let content = std::fs::read_to_string(path).map_err(|source| RecastError::RulesReadError {
		path: path.to_path_buf(),
		source,
	})?;

	parse_rules_str(&content, path)
}

/// Parse a ruleset from a string (useful for testing).
pub fn parse_rules_str(content: &str, path: &Path) -> Result<RuleSet> {
	let rules: RuleSet = toml::from_str(content).map_err(|source| RecastError::RulesParseError {
		path: path.to_path_buf(),
		source,
	})?;

	// Validate the parsed ruleset
	rules.validate()?;

	Ok(rules)
}
