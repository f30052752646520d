//! `storefront`: check values and JSON forms against typed regex rules.

use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use storefront_validator::prelude::*;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(
    name = "storefront",
    version,
    about = "Validate storefront input against typed regex rules"
)]
struct Cli {
    /// Match values exactly as given, skipping Unicode cleaning
    #[arg(long, global = true)]
    raw: bool,

    /// Log validation details (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Check one or more values against a single type
    Check {
        /// Type identifier, e.g. `post_code`
        #[arg(short = 't', long = "type")]
        kind: RegexType,

        /// Values to check
        #[arg(required = true)]
        values: Vec<String>,
    },

    /// Validate a JSON object against a rules file
    Form {
        /// Rules document: `{"field": {"type": "...", "message": "..."}}`
        #[arg(long, env = "STOREFRONT_RULES")]
        rules: PathBuf,

        /// JSON object to validate; read from stdin when omitted
        #[arg(long)]
        input: Option<PathBuf>,
    },

    /// List every type identifier with its pattern
    Types,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(err) => {
            tracing::error!(error = %err, "storefront failed");
            eprintln!("error: {err:#}");
            ExitCode::from(2)
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

/// Returns `Ok(false)` when at least one value failed validation.
fn run(cli: Cli) -> Result<bool> {
    match cli.command {
        Command::Check { kind, values } => Ok(if cli.raw {
            check_values(kind, &values, IdentityCleaner)
        } else {
            check_values(kind, &values, UnicodeCleaner)
        }),
        Command::Form { rules, input } => {
            let rules = load_rules(&rules)?;
            let form = read_form(input.as_deref())?;
            if cli.raw {
                report_form(&rules.using(IdentityCleaner), &form)
            } else {
                report_form(&rules, &form)
            }
        }
        Command::Types => {
            for kind in RegexType::ALL {
                println!("{:<18} {}", kind.as_str(), kind.source());
            }
            Ok(true)
        }
    }
}

fn check_values<C: CharacterCleaner>(kind: RegexType, values: &[String], cleaner: C) -> bool {
    let validator = TypedRegexValidator::with_cleaner(TypedRegex::new(kind), cleaner);
    let mut all_valid = true;

    for value in values {
        match validator.validate(value) {
            Ok(()) => println!("ok: \"{value}\""),
            Err(error) => {
                all_valid = false;
                println!("invalid: {}", error.message);
            }
        }
    }
    all_valid
}

fn load_rules(path: &Path) -> Result<FormRules> {
    let file = File::open(path)
        .with_context(|| format!("failed to open rules file {}", path.display()))?;
    let rules = FormRules::from_json_reader(BufReader::new(file))
        .with_context(|| format!("failed to load rules from {}", path.display()))?;
    tracing::debug!(path = %path.display(), fields = rules.len(), "rules loaded");
    Ok(rules)
}

fn read_form(path: Option<&Path>) -> Result<serde_json::Value> {
    let mut text = String::new();
    match path {
        Some(path) => {
            File::open(path)
                .and_then(|mut file| file.read_to_string(&mut text))
                .with_context(|| format!("failed to read form {}", path.display()))?;
        }
        None => {
            io::stdin()
                .read_to_string(&mut text)
                .context("failed to read form from stdin")?;
        }
    }
    serde_json::from_str(&text).context("form is not valid JSON")
}

fn report_form<C: CharacterCleaner + Clone>(
    rules: &FormRules<C>,
    form: &serde_json::Value,
) -> Result<bool> {
    let errors = rules.validate_json(form).err().unwrap_or_default();
    println!("{}", serde_json::to_string_pretty(&errors.to_json_value())?);
    Ok(errors.is_empty())
}
