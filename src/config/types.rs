use serde::Deserialize;
use std::path::PathBuf;

/// A ruleset loaded from a `.recast.toml` file (or built in).
///
/// Rules are applied strictly in the order they appear: each rule rewrites
/// the output of the previous one. Order is load-bearing — a compound
/// pattern like `gameState.inventory` must appear before the bare
/// `gameState` rule or the general substitution corrupts the specific one.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RuleSet {
	/// Ordered rewrite rules.
	#[serde(default)]
	pub rules: Vec<Rule>,
}

/// A single rewrite rule: replace every match of `pattern` with `replacement`.
#[derive(Debug, Clone, Deserialize)]
pub struct Rule {
	/// The text to search for. Interpreted per `kind`.
	pub pattern: String,

	/// The literal replacement (for `kind = "regex"`, `$1` capture syntax works).
	pub replacement: String,

	/// How the pattern matches. Defaults to whole-word.
	#[serde(default)]
	pub kind: MatchKind,
}

/// How a rule's pattern is interpreted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchKind {
	/// Literal pattern that must not be adjacent to an identifier character
	/// (letter, digit, underscore). Prevents matching inside e.g. "gameStateManager".
	#[default]
	Word,

	/// Plain literal substring, no boundary checks.
	Text,

	/// Raw regex pattern.
	Regex,
}

impl std::fmt::Display for MatchKind {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let name = match self {
			MatchKind::Word => "word",
			MatchKind::Text => "text",
			MatchKind::Regex => "regex",
		};
		write!(f, "{name}")
	}
}

/// A ruleset together with where it came from, for display and debugging.
#[derive(Debug, Clone)]
pub struct LoadedRules {
	/// The parsed ruleset.
	pub rules: RuleSet,

	/// Where the ruleset was found.
	pub source: RulesSource,
}

/// Origin of the effective ruleset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RulesSource {
	/// Loaded from a ruleset file at this path.
	File(PathBuf),

	/// The built-in default ruleset.
	Builtin,
}

impl std::fmt::Display for RulesSource {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			RulesSource::File(path) => write!(f, "{}", path.display()),
			RulesSource::Builtin => write!(f, "(built-in)"),
		}
	}
}

impl RuleSet {
	/// The built-in ruleset: the Chronos identifier renames this tool was
	/// written to apply. Used when no ruleset file is found.
	pub fn builtin() -> Self {
		let rule = |pattern: &str, replacement: &str| Rule {
			pattern: pattern.to_string(),
			replacement: replacement.to_string(),
			kind: MatchKind::Word,
		};

		RuleSet {
			// The compound-access rule runs first so the bare-identifier
			// rule below cannot corrupt it. It rewrites every occurrence of
			// the compound access, so only its trailing edge is bounded;
			// the remaining renames are whole-word.
			rules: vec![
				Rule {
					pattern: r"gameState\.inventory\b".to_string(),
					replacement: "ChronosCausalityField.artifactRetentionMatrix".to_string(),
					kind: MatchKind::Regex,
				},
				rule("gameState", "ChronosCausalityField"),
				rule("setGameState", "setChronosCausalityField"),
				rule("generateStoryTurn", "SynthesizeNarrativeVector"),
			],
		}
	}

	/// Validate all rules in this ruleset.
	pub fn validate(&self) -> Result<(), crate::error::RecastError> {
		for (index, rule) in self.rules.iter().enumerate() {
			if rule.pattern.is_empty() {
				return Err(crate::error::RecastError::EmptyPattern { index });
			}
		}
		Ok(())
	}
}

/// Template `.recast.toml` written by `--init`.
pub fn init_template() -> String {
	r#"# recast ruleset. Rules are applied in order, top to bottom.
# Put more specific patterns (compound accesses) before general ones.
#
# kind = "word"  - literal, whole-word match (default)
# kind = "text"  - literal substring match
# kind = "regex" - raw regex pattern, $1 capture syntax in replacement

[[rules]]
pattern = 'gameState\.inventory\b'
replacement = "ChronosCausalityField.artifactRetentionMatrix"
kind = "regex"

[[rules]]
pattern = "gameState"
replacement = "ChronosCausalityField"

[[rules]]
pattern = "setGameState"
replacement = "setChronosCausalityField"

[[rules]]
pattern = "generateStoryTurn"
replacement = "SynthesizeNarrativeVector"
"#
	.to_string()
}
