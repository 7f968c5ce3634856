use rand::seq::IndexedRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use passforge_core::CharClass;

use crate::errors::GenerationError;
use crate::words::{capitalize_first, random_word};

/// Unconditional letter-to-digit map applied by `Word` components when
/// replacements are requested. Unlike the passphrase substitution, every
/// occurrence of every mapped letter is replaced.
const WORD_REPLACEMENTS: &[(char, char)] = &[
    ('a', '4'),
    ('e', '3'),
    ('i', '1'),
    ('o', '0'),
    ('s', '5'),
];

/// Candidate list used by `Separator` components with no explicit options.
const DEFAULT_SEPARATORS: &[&str] = &["-", "_", ".", "!", "@", "#"];

/// Case handling for `Word` components.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WordCase {
    #[default]
    Keep,
    Capitalize,
    Uppercase,
    Lowercase,
    /// Each letter's case is randomized independently with probability 1/2.
    Random,
}

impl WordCase {
    /// Resolve the flag form: capitalize > uppercase > lowercase > random.
    pub fn from_flags(capitalize: bool, uppercase: bool, lowercase: bool, random_case: bool) -> Self {
        if capitalize {
            WordCase::Capitalize
        } else if uppercase {
            WordCase::Uppercase
        } else if lowercase {
            WordCase::Lowercase
        } else if random_case {
            WordCase::Random
        } else {
            WordCase::Keep
        }
    }
}

/// Configuration for `Word` components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WordConfig {
    pub min_length: usize,
    pub max_length: usize,
    pub case: WordCase,
    pub replacements: bool,
}

impl Default for WordConfig {
    fn default() -> Self {
        Self {
            min_length: 3,
            max_length: 10,
            case: WordCase::Keep,
            replacements: false,
        }
    }
}

/// Configuration for `RandomChars` components.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RandomCharsConfig {
    pub length: usize,
    pub types: Vec<CharClass>,
}

impl Default for RandomCharsConfig {
    fn default() -> Self {
        Self {
            length: 4,
            types: vec![CharClass::Lowercase, CharClass::Uppercase, CharClass::Digits],
        }
    }
}

impl RandomCharsConfig {
    /// Parse a comma-separated type list such as `"lowercase,digits"`.
    pub fn from_list(length: usize, types: &str) -> Result<Self, GenerationError> {
        let mut parsed = Vec::new();
        for name in types.split(',').map(str::trim).filter(|name| !name.is_empty()) {
            let class = CharClass::from_name(name).ok_or_else(|| {
                GenerationError::Parse(format!("unknown character type: {name}"))
            })?;
            parsed.push(class);
        }
        Ok(Self {
            length,
            types: parsed,
        })
    }
}

/// Configuration for `Number` components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NumberConfig {
    pub min: i64,
    pub max: i64,
    /// Zero-pad the rendered number to this many digits; 0 disables padding.
    pub padding: usize,
}

impl Default for NumberConfig {
    fn default() -> Self {
        Self {
            min: 0,
            max: 9999,
            padding: 0,
        }
    }
}

impl NumberConfig {
    /// Build a validated config; `min` must not exceed `max`.
    pub fn new(min: i64, max: i64, padding: usize) -> Result<Self, GenerationError> {
        if min > max {
            return Err(GenerationError::InvalidRequest(
                "number component min must be <= max".to_string(),
            ));
        }
        Ok(Self { min, max, padding })
    }

    /// Parse the stringly-typed form collected by interactive configuration.
    pub fn from_strings(min: &str, max: &str, padding: &str) -> Result<Self, GenerationError> {
        let padding = parse_int(padding)?;
        if padding < 0 {
            return Err(GenerationError::Parse(format!(
                "invalid padding: {padding}"
            )));
        }
        Self::new(parse_int(min)?, parse_int(max)?, padding as usize)
    }
}

fn parse_int(value: &str) -> Result<i64, GenerationError> {
    value
        .trim()
        .parse()
        .map_err(|_| GenerationError::Parse(format!("invalid number: {value}")))
}

/// One typed step in an ordered password-assembly pipeline.
///
/// A sequence of components is executed strictly in order; repeated calls
/// over the same sequence produce independent outputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Component {
    /// Fixed literal appended verbatim.
    Text { value: String },
    /// Random corpus word with case and replacement transforms.
    Word {
        #[serde(default)]
        config: WordConfig,
    },
    /// Characters drawn independently from the union of the listed classes.
    RandomChars {
        #[serde(default)]
        config: RandomCharsConfig,
    },
    /// Uniform integer in `[min, max]`, optionally zero-padded.
    Number {
        #[serde(default)]
        config: NumberConfig,
    },
    /// One separator drawn uniformly from the candidate list.
    Separator {
        #[serde(default)]
        options: Vec<String>,
    },
}

/// Execute a component sequence into a single string. An empty sequence
/// yields an empty string.
pub fn build_components(
    components: &[Component],
    rng: &mut impl Rng,
) -> Result<String, GenerationError> {
    let mut password = String::new();
    for component in components {
        match component {
            Component::Text { value } => password.push_str(value),
            Component::Word { config } => password.push_str(&generate_word(config, rng)),
            Component::RandomChars { config } => append_random_chars(config, &mut password, rng),
            Component::Number { config } => password.push_str(&generate_number(config, rng)?),
            Component::Separator { options } => append_separator(options, &mut password, rng),
        }
    }
    Ok(password)
}

fn generate_word(config: &WordConfig, rng: &mut impl Rng) -> String {
    let word = random_word(config.min_length, config.max_length, rng);
    let mut word = match config.case {
        WordCase::Keep => word.to_string(),
        WordCase::Capitalize => capitalize_first(word),
        WordCase::Uppercase => word.to_ascii_uppercase(),
        WordCase::Lowercase => word.to_ascii_lowercase(),
        WordCase::Random => word
            .chars()
            .map(|c| {
                if rng.random_bool(0.5) {
                    c.to_ascii_uppercase()
                } else {
                    c.to_ascii_lowercase()
                }
            })
            .collect(),
    };
    if config.replacements {
        word = word.chars().map(replacement_for).collect();
    }
    word
}

fn replacement_for(c: char) -> char {
    WORD_REPLACEMENTS
        .iter()
        .find(|(letter, _)| *letter == c)
        .map(|(_, digit)| *digit)
        .unwrap_or(c)
}

fn append_random_chars(config: &RandomCharsConfig, out: &mut String, rng: &mut impl Rng) {
    let mut pool: Vec<char> = Vec::new();
    for class in &config.types {
        pool.extend(class.chars().chars());
    }
    // An empty resolved pool appends nothing.
    if pool.is_empty() {
        return;
    }
    for _ in 0..config.length {
        out.push(pool[rng.random_range(0..pool.len())]);
    }
}

fn generate_number(config: &NumberConfig, rng: &mut impl Rng) -> Result<String, GenerationError> {
    if config.min > config.max {
        return Err(GenerationError::InvalidRequest(
            "number component min must be <= max".to_string(),
        ));
    }
    let value = rng.random_range(config.min..=config.max);
    Ok(if config.padding > 0 {
        format!("{value:0width$}", width = config.padding)
    } else {
        value.to_string()
    })
}

fn append_separator(options: &[String], out: &mut String, rng: &mut impl Rng) {
    if options.is_empty() {
        if let Some(sep) = DEFAULT_SEPARATORS.choose(rng) {
            out.push_str(sep);
        }
    } else if let Some(sep) = options.choose(rng) {
        out.push_str(sep);
    }
}
