use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use recast_cli::config::{
	LoadedRules, NO_USER_RULES_ENV_VAR, init_template, resolve_rules, user_rules_disabled,
	user_rules_path,
};
use recast_cli::rewrite::{preview_file, rewrite_file};
use recast_cli::rules::compile_rules;

#[derive(Parser)]
#[command(name = "recast")]
#[command(
	author,
	version,
	about = "CLI tool for applying ordered identifier rewrite rules to a source file"
)]
#[command(arg_required_else_help = true)]
struct Cli {
	#[command(subcommand)]
	command: Option<Commands>,

	/// File to rewrite in place
	file: Option<PathBuf>,

	/// Use this ruleset file instead of discovery
	#[arg(long, value_name = "PATH")]
	rules: Option<PathBuf>,

	/// Print the transformed text to stdout instead of writing the file
	#[arg(long)]
	dry_run: bool,

	/// Create a template .recast.toml in the current directory
	#[arg(long)]
	init: bool,

	/// Overwrite existing .recast.toml when using --init
	#[arg(long, requires = "init")]
	force: bool,
}

#[derive(Subcommand)]
enum Commands {
	/// Ruleset management commands
	Rules {
		#[command(subcommand)]
		action: RulesAction,
	},
}

#[derive(Subcommand)]
enum RulesAction {
	/// Display the effective ruleset and where it came from
	Show,
	/// Check the effective ruleset for errors without touching any file
	Validate,
}

fn main() -> ExitCode {
	match run() {
		Ok(code) => code,
		Err(e) => {
			eprintln!("error: {e:?}");
			ExitCode::FAILURE
		}
	}
}

fn run() -> Result<ExitCode> {
	let cli = Cli::parse();

	// Handle --init
	if cli.init {
		return handle_init(cli.force);
	}

	// Handle subcommands
	if let Some(command) = cli.command {
		return match command {
			Commands::Rules { action } => match action {
				RulesAction::Show => handle_rules_show(cli.rules.as_deref()),
				RulesAction::Validate => handle_rules_validate(cli.rules.as_deref()),
			},
		};
	}

	// Handle file rewrite
	if let Some(ref file) = cli.file {
		return handle_rewrite(file, cli.rules.as_deref(), cli.dry_run);
	}

	// No file specified - this shouldn't happen due to arg_required_else_help
	Ok(ExitCode::SUCCESS)
}

fn handle_init(force: bool) -> Result<ExitCode> {
	let rules_path = PathBuf::from(".recast.toml");

	if rules_path.exists() && !force {
		anyhow::bail!(".recast.toml already exists. Use --force to overwrite.");
	}

	let template = init_template();
	std::fs::write(&rules_path, template)
		.with_context(|| format!("Failed to write {}", rules_path.display()))?;

	println!("Created .recast.toml");
	Ok(ExitCode::SUCCESS)
}

fn handle_rules_show(explicit_rules: Option<&Path>) -> Result<ExitCode> {
	let loaded = load_rules(explicit_rules)?;

	println!("# Source: {}", loaded.source);
	println!("# rules: {}", loaded.rules.rules.len());
	println!();

	for (i, rule) in loaded.rules.rules.iter().enumerate() {
		println!("  Rule {}:", i + 1);
		println!("    kind: {}", rule.kind);
		println!("    pattern: {}", rule.pattern);
		println!("    replacement: {}", rule.replacement);
		println!();
	}

	// Show user ruleset path
	if let Ok(user_path) = user_rules_path() {
		println!("User ruleset path: {}", user_path.display());
		if user_rules_disabled() {
			println!("  (disabled via {})", NO_USER_RULES_ENV_VAR);
		} else if user_path.exists() {
			println!("  (exists)");
		} else {
			println!("  (not found)");
		}
	}

	Ok(ExitCode::SUCCESS)
}

fn handle_rules_validate(explicit_rules: Option<&Path>) -> Result<ExitCode> {
	let cwd = std::env::current_dir().context("Failed to get current directory")?;

	match resolve_rules(explicit_rules, &cwd).and_then(|loaded| {
		compile_rules(&loaded.rules)?;
		Ok(loaded)
	}) {
		Ok(loaded) => {
			println!(
				"Ruleset is valid: {} ({} rules)",
				loaded.source,
				loaded.rules.rules.len()
			);
			Ok(ExitCode::SUCCESS)
		}
		Err(e) => {
			eprintln!("Ruleset error: {}", e);
			Ok(ExitCode::FAILURE)
		}
	}
}

fn handle_rewrite(file: &Path, explicit_rules: Option<&Path>, dry_run: bool) -> Result<ExitCode> {
	let loaded = load_rules(explicit_rules)?;
	let rules = compile_rules(&loaded.rules).context("Failed to compile rules")?;

	if dry_run {
		let outcome = preview_file(file, &rules)
			.with_context(|| format!("Failed to preview {}", file.display()))?;
		print!("{}", outcome.text);
		return Ok(ExitCode::SUCCESS);
	}

	let outcome = rewrite_file(file, &rules)
		.with_context(|| format!("Failed to rewrite {}", file.display()))?;

	if outcome.changed() {
		let total = outcome.total();
		let noun = if total == 1 { "replacement" } else { "replacements" };
		println!("Rewrote {}: {} {}", file.display(), total, noun);
	} else {
		println!("No matches in {}", file.display());
	}

	Ok(ExitCode::SUCCESS)
}

fn load_rules(explicit_rules: Option<&Path>) -> Result<LoadedRules> {
	let cwd = std::env::current_dir().context("Failed to get current directory")?;
	resolve_rules(explicit_rules, &cwd).context("Failed to load ruleset")
}
