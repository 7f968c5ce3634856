use crate::error::{Error, Result};

/// Candidate dictionary words for passphrase generation.
pub const WORDS: &[&str] = &[
    "apple",
    "mountain",
    "river",
    "sunset",
    "forest",
    "ocean",
    "thunder",
    "crystal",
    "dragon",
    "phoenix",
    "wizard",
    "castle",
    "garden",
    "rainbow",
    "butterfly",
    "diamond",
    "golden",
    "silver",
    "storm",
    "cloud",
    "moon",
    "star",
    "fire",
    "water",
    "earth",
    "wind",
    "light",
    "shadow",
    "dream",
    "magic",
    "knight",
    "sword",
    "shield",
    "crown",
    "tower",
    "bridge",
    "flower",
    "tiger",
    "eagle",
    "wolf",
    "bear",
    "lion",
    "shark",
    "falcon",
    "panther",
    "ruby",
    "emerald",
    "sapphire",
    "topaz",
    "pearl",
    "jade",
    "amber",
    "coral",
    "hammer",
    "blade",
    "arrow",
    "spear",
    "axe",
    "bow",
    "staff",
    "wand",
    "winter",
    "summer",
    "spring",
    "autumn",
    "frost",
    "blaze",
    "mist",
    "dawn",
];

/// Words whose length falls within the inclusive window, falling back to
/// the whole corpus when the window matches nothing.
pub fn words_in_range(min_length: usize, max_length: usize) -> Vec<&'static str> {
    let filtered: Vec<&'static str> = WORDS
        .iter()
        .copied()
        .filter(|word| word.len() >= min_length && word.len() <= max_length)
        .collect();
    if filtered.is_empty() {
        WORDS.to_vec()
    } else {
        filtered
    }
}

pub(crate) fn validate() -> Result<()> {
    if WORDS.is_empty() {
        return Err(Error::InvalidTable("word corpus is empty".to_string()));
    }
    if WORDS.iter().any(|word| word.is_empty()) {
        return Err(Error::InvalidTable(
            "word corpus contains an empty word".to_string(),
        ));
    }
    Ok(())
}
