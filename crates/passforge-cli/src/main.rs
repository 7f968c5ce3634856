mod interactive;
mod output;
mod prompt;

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use thiserror::Error;
use tracing::info;
use tracing_subscriber::EnvFilter;

use passforge_analyze::{analyze, render_report, NOMINAL_MAX_SCORE};
use passforge_core::Error as CoreError;
use passforge_generate::{
    build_components, generate_complex, generate_memorable, generate_password, level_description,
    level_params, ClassRule, ComplexOptions, Component, GenerationError, GenerationRequest,
    MemorableOptions,
};

#[derive(Debug, Error)]
pub(crate) enum CliError {
    #[error("core error: {0}")]
    Core(#[from] CoreError),
    #[error("generation error: {0}")]
    Generation(#[from] GenerationError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid arguments: {0}")]
    InvalidArgs(String),
}

#[derive(Parser, Debug)]
#[command(name = "passforge", version, about = "Password generation and strength analysis")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate constrained random passwords.
    Password(PasswordArgs),
    /// Generate a memorable word-based passphrase.
    Memorable(MemorableArgs),
    /// Generate complex memorable passphrases.
    Complex(ComplexArgs),
    /// Generate passwords for a complexity level from 1 to 10.
    Level(LevelArgs),
    /// Build passwords from a component sequence.
    Build(BuildArgs),
    /// Analyze the strength of a password.
    Check(CheckArgs),
    /// Run the interactive menu.
    Interactive,
}

#[derive(Args, Debug)]
struct PasswordArgs {
    /// Password length.
    #[arg(long, default_value_t = 12)]
    length: usize,
    /// Disable lowercase letters.
    #[arg(long, default_value_t = false)]
    no_lowercase: bool,
    /// Disable uppercase letters.
    #[arg(long, default_value_t = false)]
    no_uppercase: bool,
    /// Disable digits.
    #[arg(long, default_value_t = false)]
    no_digits: bool,
    /// Disable special characters.
    #[arg(long, default_value_t = false)]
    no_special: bool,
    /// Exclude ambiguous characters (i, l, 1, L, o, 0, O).
    #[arg(long, default_value_t = false)]
    exclude_ambiguous: bool,
    /// Minimum lowercase letters.
    #[arg(long, default_value_t = 1)]
    min_lowercase: usize,
    /// Minimum uppercase letters.
    #[arg(long, default_value_t = 1)]
    min_uppercase: usize,
    /// Minimum digits.
    #[arg(long, default_value_t = 1)]
    min_digits: usize,
    /// Minimum special characters.
    #[arg(long, default_value_t = 1)]
    min_special: usize,
    /// Number of passwords to generate.
    #[arg(long, default_value_t = 1)]
    count: usize,
    /// Save the result to a flat text file.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct MemorableArgs {
    /// Number of words.
    #[arg(long, default_value_t = 4)]
    words: usize,
    /// Separator between words.
    #[arg(long, default_value = "-")]
    separator: String,
    /// Skip the 3-digit numeric suffix.
    #[arg(long, default_value_t = false)]
    no_numbers: bool,
    /// Do not capitalize words.
    #[arg(long, default_value_t = false)]
    no_capitalize: bool,
    /// Minimum word length.
    #[arg(long, default_value_t = 3)]
    min_word_length: usize,
    /// Maximum word length.
    #[arg(long, default_value_t = 8)]
    max_word_length: usize,
    /// Number of passphrases to generate.
    #[arg(long, default_value_t = 1)]
    count: usize,
    /// Save the result to a flat text file.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct ComplexArgs {
    /// Number of words.
    #[arg(long, default_value_t = 3)]
    words: usize,
    /// Disable special-character separators and padding.
    #[arg(long, default_value_t = false)]
    no_special: bool,
    /// Skip the random numeric token.
    #[arg(long, default_value_t = false)]
    no_numbers: bool,
    /// Skip word transformations and leet substitution.
    #[arg(long, default_value_t = false)]
    no_transform: bool,
    /// Minimum total length (only enforced with special characters on).
    #[arg(long, default_value_t = 16)]
    min_length: usize,
    /// Number of candidates to generate.
    #[arg(long, default_value_t = 3)]
    count: usize,
    /// Save the result to a flat text file.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct LevelArgs {
    /// Complexity level from 1 to 10.
    #[arg(long, default_value_t = 5)]
    level: u8,
    /// Number of passwords to generate.
    #[arg(long, default_value_t = 3)]
    count: usize,
    /// List the ten level descriptions and exit.
    #[arg(long, default_value_t = false)]
    list: bool,
    /// Save the result to a flat text file.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct BuildArgs {
    /// JSON file holding the component sequence.
    #[arg(long)]
    spec: Option<PathBuf>,
    /// Number of passwords to generate.
    #[arg(long, default_value_t = 3)]
    count: usize,
    /// Save the result to a flat text file.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct CheckArgs {
    /// Password to analyze.
    password: String,
    /// Emit the report as JSON.
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_target(false)
        .init();

    passforge_core::validate_tables()?;

    let cli = Cli::parse();
    match cli.command {
        Command::Password(args) => run_password(args),
        Command::Memorable(args) => run_memorable(args),
        Command::Complex(args) => run_complex(args),
        Command::Level(args) => run_level(args),
        Command::Build(args) => run_build(args),
        Command::Check(args) => run_check(args),
        Command::Interactive => interactive::run(),
    }
}

fn run_password(args: PasswordArgs) -> Result<(), CliError> {
    let request = GenerationRequest {
        length: args.length,
        lowercase: class_rule(!args.no_lowercase, args.min_lowercase),
        uppercase: class_rule(!args.no_uppercase, args.min_uppercase),
        digits: class_rule(!args.no_digits, args.min_digits),
        special: class_rule(!args.no_special, args.min_special),
        exclude_ambiguous: args.exclude_ambiguous,
    };

    let mut rng = rand::rng();
    let mut passwords = Vec::with_capacity(args.count);
    for _ in 0..args.count {
        passwords.push(generate_password(&request, &mut rng)?);
    }

    print_passwords(&passwords);
    persist(args.out.as_deref(), &passwords)
}

fn run_memorable(args: MemorableArgs) -> Result<(), CliError> {
    if args.min_word_length > args.max_word_length {
        return Err(CliError::InvalidArgs(
            "min word length must be <= max word length".to_string(),
        ));
    }

    let options = MemorableOptions {
        num_words: args.words,
        separator: args.separator,
        add_numbers: !args.no_numbers,
        capitalize: !args.no_capitalize,
        word_min_length: args.min_word_length,
        word_max_length: args.max_word_length,
    };

    let mut rng = rand::rng();
    let passwords: Vec<String> = (0..args.count)
        .map(|_| generate_memorable(&options, &mut rng))
        .collect();

    print_passwords(&passwords);
    persist(args.out.as_deref(), &passwords)
}

fn run_complex(args: ComplexArgs) -> Result<(), CliError> {
    let options = ComplexOptions {
        num_words: args.words,
        add_special_chars: !args.no_special,
        add_numbers: !args.no_numbers,
        transform_words: !args.no_transform,
        min_length: args.min_length,
    };

    let mut rng = rand::rng();
    let passwords: Vec<String> = (0..args.count)
        .map(|_| generate_complex(&options, &mut rng))
        .collect();

    print_passwords(&passwords);
    persist(args.out.as_deref(), &passwords)
}

fn run_level(args: LevelArgs) -> Result<(), CliError> {
    if args.list {
        for level in 1..=10 {
            println!("{level:>2}. {}", level_description(level)?);
        }
        return Ok(());
    }

    println!("Level {}: {}", args.level, level_description(args.level)?);
    let request = level_params(args.level)?;

    let mut rng = rand::rng();
    let mut passwords = Vec::with_capacity(args.count);
    for _ in 0..args.count {
        passwords.push(generate_password(&request, &mut rng)?);
    }

    print_passwords(&passwords);
    persist(args.out.as_deref(), &passwords)
}

fn run_build(args: BuildArgs) -> Result<(), CliError> {
    let components: Vec<Component> = match args.spec {
        Some(path) => serde_json::from_str(&std::fs::read_to_string(path)?)?,
        None => interactive::collect_components()?,
    };
    if components.is_empty() {
        return Err(CliError::InvalidArgs("no components given".to_string()));
    }

    let mut rng = rand::rng();
    let mut passwords = Vec::with_capacity(args.count);
    for _ in 0..args.count {
        passwords.push(build_components(&components, &mut rng)?);
    }

    print_passwords(&passwords);
    persist(args.out.as_deref(), &passwords)
}

fn run_check(args: CheckArgs) -> Result<(), CliError> {
    let report = analyze(&args.password);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", render_report(&report));
    }
    Ok(())
}

fn class_rule(enabled: bool, minimum: usize) -> ClassRule {
    if enabled {
        ClassRule {
            enabled: true,
            minimum,
        }
    } else {
        ClassRule::off()
    }
}

/// Echo passwords with their strength summary, numbered when several.
pub(crate) fn print_passwords(passwords: &[String]) {
    if passwords.len() == 1 {
        let report = analyze(&passwords[0]);
        println!("{}", passwords[0]);
        println!(
            "Strength: {} (score {}/{})",
            report.label, report.score, NOMINAL_MAX_SCORE
        );
        return;
    }
    for (index, password) in passwords.iter().enumerate() {
        let report = analyze(password);
        println!(
            "{:>2}. {password} | {} ({} points)",
            index + 1,
            report.label,
            report.score
        );
    }
}

/// Save to the flat text format when an output path was given.
pub(crate) fn persist(path: Option<&Path>, passwords: &[String]) -> Result<(), CliError> {
    let Some(path) = path else {
        return Ok(());
    };
    if passwords.len() == 1 {
        output::save_password(path, &passwords[0])?;
    } else {
        output::save_passwords(path, passwords)?;
    }
    info!(count = passwords.len(), path = %path.display(), "saved passwords");
    println!("Saved {} password(s) to {}", passwords.len(), path.display());
    Ok(())
}
