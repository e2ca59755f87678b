// crates/engine/src/tokenizer.rs
use unicode_properties::{GeneralCategoryGroup, UnicodeGeneralCategory};

/// Minimum number of characters a word needs before it is counted.
pub const DEFAULT_MIN_CHARS: usize = 2;

/// True for characters in one of the Unicode letter categories (L*).
pub fn is_letter(c: char) -> bool {
    c.general_category_group() == GeneralCategoryGroup::Letter
}

/// Split a line into maximal runs of letters.
///
/// Digits, letter-numbers, marks, punctuation, whitespace and symbols all act
/// as separators. The iterator is lazy and borrows from `line`.
pub fn words(line: &str) -> impl Iterator<Item = &str> {
    line.split(|c: char| !is_letter(c))
        .filter(|run| !run.is_empty())
}

/// Length filter applied to a folded word, measured in characters rather than bytes.
pub fn is_countable(word: &str, min_chars: usize) -> bool {
    word.chars().nth(min_chars.saturating_sub(1)).is_some()
}

/// Case-fold a word before it is stored.
pub fn fold(word: &str) -> String {
    word.to_lowercase()
}
