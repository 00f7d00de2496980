//! The file rewrite pipeline: read whole file, apply rules, write back.

use crate::error::{RecastError, Result};
use crate::rules::{CompiledRule, RewriteOutcome, apply_rules};
use std::path::Path;

/// Rewrite `path` in place with the given compiled rules.
///
/// The file is fully read before any transformation begins, then overwritten
/// with the result. A missing or unreadable file aborts before anything is
/// written. There is no backup and no atomic rename; a failure during the
/// write can leave the file truncated.
pub fn rewrite_file(path: &Path, rules: &[CompiledRule]) -> Result<RewriteOutcome> {
	let content = read_source(path)?;
	let outcome = apply_rules(&content, rules);

	std::fs::write(path, &outcome.text).map_err(|source| RecastError::SourceWriteError {
		path: path.to_path_buf(),
		source,
	})?;

	Ok(outcome)
}

/// Apply the rules to `path` without writing, returning the outcome.
pub fn preview_file(path: &Path, rules: &[CompiledRule]) -> Result<RewriteOutcome> {
	let content = read_source(path)?;
	Ok(apply_rules(&content, rules))
}

fn read_source(path: &Path) -> Result<String> {
	std::fs::read_to_string(path).map_err(|source| {
		if source.kind() == std::io::ErrorKind::NotFound {
			RecastError::SourceNotFound {
				path: path.to_path_buf(),
			}
		} else {
			RecastError::SourceReadError {
				path: path.to_path_buf(),
				source,
			}
		}
	})
}
