use std::fmt;

/// Why a word was refused before any lookup happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidWordReason {
    Empty,
    /// The word is just `ー`, so there is no sound to look back to.
    LoneLongVowelMark,
    NotHiragana,
    ForbiddenTail,
}

impl fmt::Display for InvalidWordReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Self::Empty => "word is empty",
            Self::LoneLongVowelMark => "long-vowel mark has no preceding kana",
            Self::NotHiragana => "word must be hiragana",
            Self::ForbiddenTail => "word ends with ん",
        };
        f.write_str(msg)
    }
}

/// Failure of a single ladder attempt. Nothing is partially returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChainError {
    #[error("invalid word {word:?}: {reason}")]
    InvalidWord {
        word: String,
        reason: InvalidWordReason,
    },

    #[error("no candidate at position {position} for head {head}{}", tail_suffix(.tail))]
    NoCandidate {
        position: usize,
        head: char,
        tail: Option<char>,
    },

    #[error("chain length {length} out of range (1..={max})")]
    InvalidLength { length: usize, max: usize },
}

fn tail_suffix(tail: &Option<char>) -> String {
    tail.map(|c| format!(" ending with {c}")).unwrap_or_default()
}

impl ChainError {
    pub(crate) fn invalid_word(word: &str, reason: InvalidWordReason) -> Self {
        Self::InvalidWord {
            word: word.to_string(),
            reason,
        }
    }

    /// `true` when another attempt with a fresh draw might succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::NoCandidate { .. })
    }
}
