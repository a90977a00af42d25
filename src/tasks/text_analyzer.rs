//! Sentence-level text analysis.

use regex::Regex;
use std::sync::LazyLock;

static SENTENCE_END: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]+").expect("valid sentence pattern"));

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextAnalysis {
    pub characters: usize,
    pub words: usize,
    pub sentences: usize,
    /// First sentence of maximal length, empty if there are no sentences.
    pub longest: String,
    /// First sentence of minimal length, empty if there are no sentences.
    pub shortest: String,
}

pub fn analyze_text(text: &str) -> TextAnalysis {
    let text = text.trim();
    let sentences: Vec<&str> = SENTENCE_END
        .split(text)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();

    let len = |s: &&str| s.chars().count();
    // `max_by_key` keeps the last maximum, so search from the back
    let longest = sentences.iter().copied().rev().max_by_key(len).unwrap_or("");
    let shortest = sentences.iter().copied().min_by_key(len).unwrap_or("");

    TextAnalysis {
        characters: text.chars().count(),
        words: text.split_whitespace().count(),
        sentences: sentences.len(),
        longest: longest.to_string(),
        shortest: shortest.to_string(),
    }
}
