use crate::config::parser::parse_rules_file;
use crate::config::types::{LoadedRules, RuleSet, RulesSource};
use crate::error::{RecastError, Result};
use std::path::Path;

/// Environment variable that, if truthy, skips the `~/.recast.toml` lookup.
/// Useful for CI environments and tests.
pub const NO_USER_RULES_ENV_VAR: &str = "RECAST_NO_USER_RULES";

/// Resolve the effective ruleset for an invocation.
///
/// The lookup order is first-hit-wins:
/// 1. An explicit `--rules` path (an error if it does not exist)
/// 2. `.recast.toml` in `cwd`
/// 3. `~/.recast.toml` (unless disabled via `RECAST_NO_USER_RULES`)
/// 4. The built-in ruleset
pub fn resolve_rules(explicit: Option<&Path>, cwd: &Path) -> Result<LoadedRules> {
	if let Some(path) = explicit {
		if !path.exists() {
			return Err(RecastError::RulesNotFound {
				path: path.to_path_buf(),
			});
		}
		let rules = parse_rules_file(path)?;
		return Ok(LoadedRules {
			rules,
			source: RulesSource::File(path.to_path_buf()),
		});
	}

	let local_path = cwd.join(".recast.toml");
	if local_path.exists() {
		let rules = parse_rules_file(&local_path)?;
		return Ok(LoadedRules {
			rules,
			source: RulesSource::File(local_path),
		});
	}

	if !is_env_truthy(NO_USER_RULES_ENV_VAR) {
		let user_path = user_rules_path()?;
		if user_path.exists() {
			let rules = parse_rules_file(&user_path)?;
			return Ok(LoadedRules {
				rules,
				source: RulesSource::File(user_path),
			});
		}
	}

	Ok(LoadedRules {
		rules: RuleSet::builtin(),
		source: RulesSource::Builtin,
	})
}

/// True when `RECAST_NO_USER_RULES` disables the `~/.recast.toml` lookup.
pub fn user_rules_disabled() -> bool {
	is_env_truthy(NO_USER_RULES_ENV_VAR)
}

/// Path to the user-level ruleset file, `~/.recast.toml`.
pub fn user_rules_path() -> Result<std::path::PathBuf> {
	let home_dir = dirs::home_dir().ok_or(RecastError::HomeDirectoryNotFound)?;
	Ok(home_dir.join(".recast.toml"))
}

/// Check if an environment variable is set to a truthy value.
fn is_env_truthy(var_name: &str) -> bool {
	match std::env::var(var_name) {
		Ok(value) => {
			let lower = value.to_lowercase();
			!value.is_empty() && lower != "0" && lower != "false" && lower != "no"
		}
		Err(_) => false,
	}
}
