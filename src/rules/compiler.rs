use crate::config::types::{MatchKind, Rule, RuleSet};
use crate::error::{RecastError, Result};
use regex::Regex;

/// A rewrite rule compiled to a regex, ready to apply.
#[derive(Debug)]
pub struct CompiledRule {
	/// Compiled search pattern.
	pub pattern: Regex,

	/// Replacement string, with `$` pre-escaped for literal kinds.
	pub replacement: String,

	/// The original rule (for display).
	pub rule: Rule,
}

impl CompiledRule {
	/// Compile a single rule according to its match kind.
	pub fn from_rule(rule: &Rule) -> Result<Self> {
		let pattern_str = match rule.kind {
			MatchKind::Word => bounded_literal(&rule.pattern),
			MatchKind::Text => regex::escape(&rule.pattern),
			MatchKind::Regex => rule.pattern.clone(),
		};

		let pattern = Regex::new(&pattern_str).map_err(|source| RecastError::InvalidPattern {
			pattern: rule.pattern.clone(),
			source,
		})?;

		// For literal kinds the replacement is verbatim text; `$` in it must
		// not be treated as a capture reference.
		let replacement = match rule.kind {
			MatchKind::Regex => rule.replacement.clone(),
			MatchKind::Word | MatchKind::Text => rule.replacement.replace('$', "$$"),
		};

		Ok(CompiledRule {
			pattern,
			replacement,
			rule: rule.clone(),
		})
	}
}

/// Escape a literal pattern and anchor it with word boundaries.
///
/// A boundary assertion is only added on an edge whose character is an
/// identifier character; `\b` next to punctuation would never match.
/// So "gameState.inventory" compiles to `\bgameState\.inventory\b`.
fn bounded_literal(pattern: &str) -> String {
	let escaped = regex::escape(pattern);
	let leading = pattern.chars().next().is_some_and(is_identifier_char);
	let trailing = pattern.chars().last().is_some_and(is_identifier_char);

	let mut out = String::with_capacity(escaped.len() + 4);
	if leading {
		out.push_str(r"\b");
	}
	out.push_str(&escaped);
	if trailing {
		out.push_str(r"\b");
	}
	out
}

fn is_identifier_char(c: char) -> bool {
	c.is_alphanumeric() || c == '_'
}

/// Compile all rules in a ruleset, preserving order.
pub fn compile_rules(rules: &RuleSet) -> Result<Vec<CompiledRule>> {
	rules.rules.iter().map(CompiledRule::from_rule).collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	fn rule(pattern: &str, replacement: &str, kind: MatchKind) -> Rule {
		Rule {
			pattern: pattern.to_string(),
			replacement: replacement.to_string(),
			kind,
		}
	}

	#[test]
	fn test_word_rule_matches_whole_word_only() {
		let compiled =
			CompiledRule::from_rule(&rule("gameState", "ChronosCausalityField", MatchKind::Word))
				.unwrap();

		assert!(compiled.pattern.is_match("let x = gameState;"));
		assert!(!compiled.pattern.is_match("gameStateManager"));
		assert!(!compiled.pattern.is_match("my_gameState"));
	}

	#[test]
	fn test_word_rule_escapes_metacharacters() {
		let compiled =
			CompiledRule::from_rule(&rule("gameState.inventory", "a.b", MatchKind::Word)).unwrap();

		assert!(compiled.pattern.is_match("gameState.inventory"));
		// The dot must be literal, not a wildcard.
		assert!(!compiled.pattern.is_match("gameStateXinventory"));
	}

	#[test]
	fn test_text_rule_matches_inside_identifiers() {
		let compiled = CompiledRule::from_rule(&rule("State", "Phase", MatchKind::Text)).unwrap();
		assert!(compiled.pattern.is_match("gameStateManager"));
	}

	#[test]
	fn test_regex_rule_uses_raw_pattern() {
		let compiled =
			CompiledRule::from_rule(&rule(r"get(\w+)State", "fetch${1}State", MatchKind::Regex))
				.unwrap();
		assert!(compiled.pattern.is_match("getGameState"));
	}

	#[test]
	fn test_invalid_regex_rule_errors() {
		let result = CompiledRule::from_rule(&rule("[invalid", "x", MatchKind::Regex));
		match result.unwrap_err() {
			RecastError::InvalidPattern { pattern, .. } => assert_eq!(pattern, "[invalid"),
			_ => panic!("Expected InvalidPattern error"),
		}
	}

	#[test]
	fn test_literal_replacement_dollar_is_escaped() {
		let compiled = CompiledRule::from_rule(&rule("price", "$1 off", MatchKind::Word)).unwrap();
		assert_eq!(compiled.replacement, "$$1 off");
	}

	#[test]
	fn test_boundary_skipped_on_punctuation_edge() {
		// A pattern ending in punctuation gets no trailing \b.
		assert_eq!(bounded_literal("foo()"), r"\bfoo\(\)");
		assert_eq!(bounded_literal("gameState"), r"\bgameState\b");
	}

	#[test]
	fn test_compile_rules_preserves_order() {
		let rules = RuleSet::builtin();
		let compiled = compile_rules(&rules).unwrap();
		assert_eq!(compiled.len(), 4);
		assert_eq!(compiled[0].rule.pattern, r"gameState\.inventory\b");
		assert_eq!(compiled[1].rule.pattern, "gameState");
	}
}
