use std::path::PathBuf;

/// Library-level structured errors for recast.
///
/// Use `thiserror` for structured errors that library consumers can match on.
/// The CLI binary wraps these with `anyhow` for rich context chains.
#[derive(Debug, thiserror::Error)]
pub enum RecastError {
	#[error("Source file not found: {path}")]
	SourceNotFound { path: PathBuf },

	#[error("Failed to read source file: {path}")]
	SourceReadError {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to write source file: {path}")]
	SourceWriteError {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Ruleset file not found: {path}")]
	RulesNotFound { path: PathBuf },

	#[error("Failed to read ruleset file: {path}")]
	RulesReadError {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to parse ruleset file: {path}")]
	RulesParseError {
		path: PathBuf,
		#[source]
		source: toml::de::Error,
	},

	#[error("Rule {index} has an empty pattern")]
	EmptyPattern { index: usize },

	#[error("Invalid regex pattern in rule: {pattern}")]
	InvalidPattern {
		pattern: String,
		#[source]
		source: regex::Error,
	},

	#[error("Failed to resolve home directory")]
	HomeDirectoryNotFound,
}

/// Result type alias using RecastError.
pub type Result<T> = std::result::Result<T, RecastError>;
