//! Head and tail resolution for a single word.

use crate::error::{ChainError, InvalidWordReason};
use crate::kana::{normalize, LONG_VOWEL_MARK};

/// The character the next word in a chain has to start with.
///
/// A trailing ー has no sound of its own, so the kana before it is used
/// instead ("とー" hands over と). The result is always normalized.
pub fn resolve_tail(word: &str) -> Result<char, ChainError> {
    let mut rev = word.chars().rev();
    let last = rev
        .next()
        .ok_or_else(|| ChainError::invalid_word(word, InvalidWordReason::Empty))?;
    if last != LONG_VOWEL_MARK {
        return Ok(normalize(last));
    }
    rev.next()
        .map(normalize)
        .ok_or_else(|| ChainError::invalid_word(word, InvalidWordReason::LoneLongVowelMark))
}

/// Normalized first character, i.e. the vocabulary key a word is filed under.
pub fn head_char(word: &str) -> Result<char, ChainError> {
    word.chars()
        .next()
        .map(normalize)
        .ok_or_else(|| ChainError::invalid_word(word, InvalidWordReason::Empty))
}
