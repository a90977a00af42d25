//! Character, word and vowel counts.

/// Latin and Cyrillic vowels, lowercase.
pub const VOWELS: &str = "aeiouаеёиоуыэюя";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextStats {
    pub characters: usize,
    pub words: usize,
    pub vowels: usize,
}

pub fn text_stats(text: &str) -> TextStats {
    TextStats {
        characters: text.chars().count(),
        words: text.split_whitespace().count(),
        vowels: text
            .chars()
            .flat_map(char::to_lowercase)
            .filter(|c| VOWELS.contains(*c))
            .count(),
    }
}
