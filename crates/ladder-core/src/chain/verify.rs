use crate::error::ChainError;
use crate::kana::ends_with_forbidden_tail;
use crate::tail::{head_char, resolve_tail};

/// First rule a word sequence breaks, as reported by [`verify_chain`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChainViolation {
    #[error("ladder has no words")]
    Empty,

    #[error(transparent)]
    Word(#[from] ChainError),

    /// `position` is the index of the word whose head does not match.
    #[error("word {position} should start with {expected}, found {found}")]
    BrokenLink {
        position: usize,
        expected: char,
        found: char,
    },

    #[error("word {position} ({word}) ends with ん")]
    ForbiddenTail { position: usize, word: String },

    #[error("last word should end with {expected}, found {found}")]
    WrongEnding { expected: char, found: char },
}

/// Check a word sequence against the same rules `build_chain` follows.
pub fn verify_chain<S: AsRef<str>>(
    start: &str,
    end: &str,
    words: &[S],
) -> Result<(), ChainViolation> {
    let tail_target = head_char(end)?;
    let mut expected = resolve_tail(start)?;
    let mut last = None;

    for (position, word) in words.iter().enumerate() {
        let word = word.as_ref();
        let found = head_char(word)?;
        if found != expected {
            return Err(ChainViolation::BrokenLink {
                position,
                expected,
                found,
            });
        }
        if ends_with_forbidden_tail(word) {
            return Err(ChainViolation::ForbiddenTail {
                position,
                word: word.to_string(),
            });
        }
        if position + 1 < words.len() {
            expected = resolve_tail(word)?;
        }
        last = word.chars().last();
    }

    match last {
        None => Err(ChainViolation::Empty),
        Some(found) if found != tail_target => Err(ChainViolation::WrongEnding {
            expected: tail_target,
            found,
        }),
        Some(_) => Ok(()),
    }
}
