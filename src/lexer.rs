//! Whitespace tokenization of a raw command line.

/// Split a line into whitespace-delimited words.
///
/// The returned iterator is lazy and yields no empty words for runs of
/// adjacent, leading or trailing whitespace. No quoting or escaping is
/// recognized, so a literal space cannot appear inside a word. An empty (or
/// all-whitespace) line yields nothing, which callers treat as "re-prompt".
pub fn words(line: &str) -> impl Iterator<Item = &str> + Clone {
    line.split_whitespace()
}
