//! Menu-driven front end over the generation and analysis crates.

use std::path::PathBuf;

use passforge_analyze::{analyze, render_report};
use passforge_generate::{
    build_components, generate_complex, generate_memorable, generate_password, level_description,
    level_params, ClassRule, ComplexOptions, Component, GenerationRequest, MemorableOptions,
    NumberConfig, RandomCharsConfig, WordCase, WordConfig,
};

use crate::prompt::{ask_number, ask_string, ask_yes_no};
use crate::{print_passwords, CliError};

pub(crate) fn run() -> Result<(), CliError> {
    let mut rng = rand::rng();
    loop {
        println!();
        println!("===== PassForge =====");
        println!("1. Generate password");
        println!("2. Generate memorable passphrase");
        println!("3. Generate complex passphrase");
        println!("4. Build password from components");
        println!("5. Generate multiple passwords");
        println!("6. Check password strength");
        println!("7. Quick password (defaults)");
        println!("8. Generate by complexity level");
        println!("0. Exit");

        let outcome = match ask_number("Choose an option", 0, 8, None)? {
            0 => return Ok(()),
            1 => standard_password(&mut rng),
            2 => memorable_passphrase(&mut rng),
            3 => complex_passphrase(&mut rng),
            4 => component_builder(&mut rng),
            5 => multiple_passwords(&mut rng),
            6 => check_strength(),
            7 => quick_password(&mut rng),
            8 => by_complexity_level(&mut rng),
            _ => unreachable!("ask_number enforces the range"),
        };
        recover(outcome)?;
    }
}

/// Recoverable errors are printed and the menu keeps running; only I/O
/// failures end the session.
fn recover(result: Result<(), CliError>) -> Result<(), CliError> {
    match result {
        Err(CliError::Io(err)) => Err(CliError::Io(err)),
        Err(err) => {
            println!("Error: {err}");
            Ok(())
        }
        Ok(()) => Ok(()),
    }
}

fn standard_password(rng: &mut impl rand::Rng) -> Result<(), CliError> {
    let request = ask_request()?;
    let password = generate_password(&request, rng)?;
    show_and_offer_save(&[password])
}

fn memorable_passphrase(rng: &mut impl rand::Rng) -> Result<(), CliError> {
    let options = MemorableOptions {
        num_words: ask_number("Number of words", 1, 12, Some(4))? as usize,
        separator: ask_string("Separator", "-")?,
        add_numbers: ask_yes_no("Append a numeric suffix?", true)?,
        capitalize: ask_yes_no("Capitalize words?", true)?,
        ..MemorableOptions::default()
    };
    let password = generate_memorable(&options, rng);
    show_and_offer_save(&[password])
}

fn complex_passphrase(rng: &mut impl rand::Rng) -> Result<(), CliError> {
    let options = ComplexOptions {
        num_words: ask_number("Number of words", 1, 8, Some(3))? as usize,
        add_special_chars: ask_yes_no("Use special characters?", true)?,
        add_numbers: ask_yes_no("Insert a random number?", true)?,
        transform_words: ask_yes_no("Transform words?", true)?,
        min_length: ask_number("Minimum length", 4, 64, Some(16))? as usize,
    };
    let count = ask_number("How many candidates", 1, 20, Some(3))? as usize;
    let passwords: Vec<String> = (0..count).map(|_| generate_complex(&options, rng)).collect();
    show_and_offer_save(&passwords)
}

fn component_builder(rng: &mut impl rand::Rng) -> Result<(), CliError> {
    let components = collect_components()?;
    if components.is_empty() {
        println!("No components given, nothing to build");
        return Ok(());
    }
    let count = ask_number("How many passwords", 1, 20, Some(3))? as usize;
    let mut passwords = Vec::with_capacity(count);
    for _ in 0..count {
        passwords.push(build_components(&components, rng)?);
    }
    show_and_offer_save(&passwords)
}

fn multiple_passwords(rng: &mut impl rand::Rng) -> Result<(), CliError> {
    let request = ask_request()?;
    let count = ask_number("How many passwords", 1, 100, Some(5))? as usize;
    let mut passwords = Vec::with_capacity(count);
    for _ in 0..count {
        passwords.push(generate_password(&request, rng)?);
    }
    show_and_offer_save(&passwords)
}

fn check_strength() -> Result<(), CliError> {
    let password = ask_string("Password to check", "")?;
    println!("{}", render_report(&analyze(&password)));
    Ok(())
}

fn quick_password(rng: &mut impl rand::Rng) -> Result<(), CliError> {
    let password = generate_password(&GenerationRequest::default(), rng)?;
    show_and_offer_save(&[password])
}

fn by_complexity_level(rng: &mut impl rand::Rng) -> Result<(), CliError> {
    println!("Complexity levels:");
    for level in 1..=10u8 {
        println!("{level:>2}. {}", level_description(level)?);
    }
    let level = ask_number("Level", 1, 10, Some(5))? as u8;
    let request = level_params(level)?;
    let count = ask_number("How many passwords", 1, 20, Some(3))? as usize;
    let mut passwords = Vec::with_capacity(count);
    for _ in 0..count {
        passwords.push(generate_password(&request, rng)?);
    }
    show_and_offer_save(&passwords)
}

fn ask_request() -> Result<GenerationRequest, CliError> {
    let length = ask_number("Password length", 4, 128, Some(12))? as usize;
    let lowercase = ask_class("lowercase letters", true)?;
    let uppercase = ask_class("uppercase letters", true)?;
    let digits = ask_class("digits", true)?;
    let special = ask_class("special characters", true)?;
    let exclude_ambiguous = ask_yes_no("Exclude ambiguous characters (i, l, 1, O, 0)?", false)?;
    Ok(GenerationRequest {
        length,
        lowercase,
        uppercase,
        digits,
        special,
        exclude_ambiguous,
    })
}

fn ask_class(name: &str, default: bool) -> Result<ClassRule, CliError> {
    if !ask_yes_no(&format!("Include {name}?"), default)? {
        return Ok(ClassRule::off());
    }
    let minimum = ask_number(&format!("Minimum {name}"), 0, 32, Some(1))? as usize;
    Ok(ClassRule {
        enabled: true,
        minimum,
    })
}

/// Prompt for components one at a time until the user is done.
pub(crate) fn collect_components() -> Result<Vec<Component>, CliError> {
    let mut components = Vec::new();
    loop {
        println!();
        println!("Component types:");
        println!("1. Fixed text");
        println!("2. Random word");
        println!("3. Random characters");
        println!("4. Random number");
        println!("5. Separator");
        println!("0. Done");

        match ask_number("Add component", 0, 5, None)? {
            0 => break,
            1 => {
                let value = ask_string("Text value", "")?;
                components.push(Component::Text { value });
            }
            2 => {
                let min_length = ask_number("Minimum word length", 1, 16, Some(3))? as usize;
                let max_length =
                    ask_number("Maximum word length", min_length as i64, 16, Some(10))? as usize;
                let capitalize = ask_yes_no("Capitalize?", false)?;
                let uppercase = ask_yes_no("All uppercase?", false)?;
                let lowercase = ask_yes_no("All lowercase?", false)?;
                let random_case = ask_yes_no("Random case per letter?", false)?;
                let replacements = ask_yes_no("Apply character replacements?", false)?;
                components.push(Component::Word {
                    config: WordConfig {
                        min_length,
                        max_length,
                        case: WordCase::from_flags(capitalize, uppercase, lowercase, random_case),
                        replacements,
                    },
                });
            }
            3 => {
                let length = ask_number("Number of characters", 1, 64, Some(4))? as usize;
                let classes = ask_string(
                    "Character classes (comma separated: lowercase, uppercase, digits, special)",
                    "lowercase, uppercase, digits",
                )?;
                let config = RandomCharsConfig::from_list(length, &classes)?;
                components.push(Component::RandomChars { config });
            }
            4 => {
                let min = ask_number("Minimum value", 0, 999_999, Some(0))?;
                let max = ask_number("Maximum value", min, 999_999, Some(9999))?;
                let padding = ask_number("Zero padding width", 0, 10, Some(0))? as usize;
                let config = NumberConfig::new(min, max, padding)?;
                components.push(Component::Number { config });
            }
            5 => {
                let raw = ask_string("Separator options (comma separated, blank for defaults)", "")?;
                let options: Vec<String> = raw
                    .split(',')
                    .map(|part| part.trim().to_string())
                    .filter(|part| !part.is_empty())
                    .collect();
                components.push(Component::Separator { options });
            }
            _ => unreachable!("ask_number enforces the range"),
        }
        println!("Components so far: {}", components.len());
    }
    Ok(components)
}

fn show_and_offer_save(passwords: &[String]) -> Result<(), CliError> {
    print_passwords(passwords);
    if ask_yes_no("Save to file?", false)? {
        let path = ask_string("File name", "passwords.txt")?;
        crate::persist(Some(&PathBuf::from(path)), passwords)?;
    }
    Ok(())
}
