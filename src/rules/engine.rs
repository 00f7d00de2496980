use crate::rules::compiler::CompiledRule;

/// Result of running a rule pipeline over a text buffer.
#[derive(Debug)]
pub struct RewriteOutcome {
	/// The transformed text.
	pub text: String,

	/// Match count per rule, in rule order.
	pub counts: Vec<usize>,
}

impl RewriteOutcome {
	/// Total replacements across all rules.
	pub fn total(&self) -> usize {
		self.counts.iter().sum()
	}

	/// True if any rule matched.
	pub fn changed(&self) -> bool {
		self.total() > 0
	}
}

/// Apply the rules to `input` strictly in sequence, each rule rewriting the
/// output of the previous one.
pub fn apply_rules(input: &str, rules: &[CompiledRule]) -> RewriteOutcome {
	let mut text = input.to_string();
	let mut counts = Vec::with_capacity(rules.len());

	for rule in rules {
		let count = rule.pattern.find_iter(&text).count();
		if count > 0 {
			text = rule
				.pattern
				.replace_all(&text, rule.replacement.as_str())
				.into_owned();
		}
		counts.push(count);
	}

	RewriteOutcome { text, counts }
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::config::types::RuleSet;
	use crate::rules::compiler::compile_rules;

	fn builtin_rules() -> Vec<CompiledRule> {
		compile_rules(&RuleSet::builtin()).unwrap()
	}

	#[test]
	fn test_text_without_targets_is_unchanged() {
		let rules = builtin_rules();
		let input = "const score = tallyPoints(board);\n";
		let outcome = apply_rules(input, &rules);

		assert_eq!(outcome.text, input);
		assert!(!outcome.changed());
	}

	#[test]
	fn test_compound_access_is_rewritten() {
		let rules = builtin_rules();
		let outcome = apply_rules("render(gameState.inventory);", &rules);

		assert!(
			outcome
				.text
				.contains("ChronosCausalityField.artifactRetentionMatrix")
		);
		assert!(!outcome.text.contains("gameState.inventory"));
	}

	#[test]
	fn test_compound_access_rewritten_inside_larger_identifier() {
		// The compound rule has no leading boundary: every occurrence of
		// the access is renamed, even mid-identifier.
		let rules = builtin_rules();
		let outcome = apply_rules("prefixedgameState.inventory", &rules);

		assert_eq!(
			outcome.text,
			"prefixedChronosCausalityField.artifactRetentionMatrix"
		);
		assert_eq!(outcome.counts[0], 1);
	}

	#[test]
	fn test_partial_identifier_is_untouched() {
		let rules = builtin_rules();
		let outcome = apply_rules("gameStateX", &rules);

		assert_eq!(outcome.text, "gameStateX");
		assert!(!outcome.changed());
	}

	#[test]
	fn test_rule_order_compound_before_bare() {
		let rules = builtin_rules();
		let input = "update(gameState.inventory, gameState, setGameState, generateStoryTurn)";
		let outcome = apply_rules(input, &rules);

		assert_eq!(
			outcome.text,
			"update(ChronosCausalityField.artifactRetentionMatrix, ChronosCausalityField, setChronosCausalityField, SynthesizeNarrativeVector)"
		);
	}

	#[test]
	fn test_pipeline_is_idempotent() {
		let rules = builtin_rules();
		let input = "const [gameState, setGameState] = useState(initial);\ngenerateStoryTurn(gameState.inventory);\n";
		let once = apply_rules(input, &rules);
		let twice = apply_rules(&once.text, &rules);

		assert_eq!(once.text, twice.text);
		assert!(!twice.changed());
	}

	#[test]
	fn test_counts_are_per_rule() {
		let rules = builtin_rules();
		let outcome = apply_rules("gameState.inventory gameState gameState", &rules);

		assert_eq!(outcome.counts, vec![1, 2, 0, 0]);
		assert_eq!(outcome.total(), 3);
	}

	#[test]
	fn test_empty_input() {
		let rules = builtin_rules();
		let outcome = apply_rules("", &rules);

		assert_eq!(outcome.text, "");
		assert!(!outcome.changed());
	}
}
