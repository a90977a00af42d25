//! Caesar cipher over the Latin alphabet.
//!
//! Only `A-Z` and `a-z` are rotated. Everything else, including letters of other
//! scripts such as Cyrillic, is copied unchanged.

const ALPHABET_LEN: i64 = 26;

/// Rotate every Latin letter of `text` by `key` positions.
///
/// Any key is accepted: negative keys rotate backwards and keys outside `0..26`
/// are reduced modulo 26.
pub fn encode(text: &str, key: i64) -> String {
    let shift = key.rem_euclid(ALPHABET_LEN) as u8;
    text.chars().map(|c| shift_char(c, shift)).collect()
}

/// Undo [`encode`] with the same key.
pub fn decode(text: &str, key: i64) -> String {
    // reduce first so that `i64::MIN` has an inverse
    encode(text, -key.rem_euclid(ALPHABET_LEN))
}

fn shift_char(c: char, shift: u8) -> char {
    match c {
        'A'..='Z' => rotate(c, b'A', shift),
        'a'..='z' => rotate(c, b'a', shift),
        _ => c,
    }
}

fn rotate(c: char, base: u8, shift: u8) -> char {
    let offset = c as u8 - base;
    (base + (offset + shift) % ALPHABET_LEN as u8) as char
}
