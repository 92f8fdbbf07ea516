//! Vocabulary providers: where chain candidates come from.
//!
//! The chain builder only needs "all words whose canonical head is X". The
//! scraping pipeline that originally filled this lives outside the crate;
//! here a vocabulary is loaded from a word list, a JSON map, or a compiled
//! `LXLV` file.

mod io;
mod memory;

#[cfg(test)]
mod tests;

use std::collections::BTreeMap;
use std::fmt;

pub use io::{open_any, parse_word_list};
pub use memory::MemoryVocabulary;

use crate::kana::{ends_with_forbidden_tail, is_hiragana_reading};
use crate::settings::settings;
use crate::tail::resolve_tail;

/// Error type for vocabulary file I/O.
#[derive(Debug, thiserror::Error)]
pub enum VocabError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid header (too short)")]
    InvalidHeader,

    #[error("invalid magic bytes (expected LXLV)")]
    InvalidMagic,

    #[error("unsupported version: {0}")]
    UnsupportedVersion(u8),

    #[error("serialization error: {0}")]
    Serialize(bincode::Error),

    #[error("deserialization error: {0}")]
    Deserialize(bincode::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("word {word:?} cannot be filed under head {head:?}")]
    Invariant { head: String, word: String },
}

/// Source of chain candidates, keyed by canonical head character.
pub trait Vocabulary: Send + Sync {
    /// Words whose normalized first character is `head`. Empty if none.
    fn lookup_by_head(&self, head: char) -> &[String];

    /// Heads with at least one word, in code point order.
    fn heads(&self) -> Vec<char>;

    fn word_count(&self) -> usize {
        self.heads()
            .into_iter()
            .map(|h| self.lookup_by_head(h).len())
            .sum()
    }
}

/// Admission rules applied when words enter a vocabulary.
#[derive(Debug, Clone)]
pub struct VocabRules {
    /// Shorter words are dropped (single kana make degenerate links).
    pub min_word_chars: usize,
}

impl VocabRules {
    /// Rules from the global settings.
    pub fn from_settings() -> Self {
        Self {
            min_word_chars: settings().vocabulary.min_word_chars,
        }
    }

    pub fn check(&self, word: &str) -> Result<(), Rejection> {
        if !is_hiragana_reading(word) {
            return Err(Rejection::NotHiragana);
        }
        if word.chars().count() < self.min_word_chars {
            return Err(Rejection::TooShort);
        }
        if resolve_tail(word).is_err() {
            return Err(Rejection::NoTail);
        }
        if ends_with_forbidden_tail(word) {
            return Err(Rejection::ForbiddenTail);
        }
        Ok(())
    }
}

impl Default for VocabRules {
    fn default() -> Self {
        Self { min_word_chars: 2 }
    }
}

/// Why a word was kept out of a vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rejection {
    NotHiragana,
    TooShort,
    /// Nothing but long-vowel marks: no sound to hand to the next word.
    NoTail,
    ForbiddenTail,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::NotHiragana => "not hiragana",
            Self::TooShort => "too short",
            Self::NoTail => "no tail kana",
            Self::ForbiddenTail => "ends with ん",
        })
    }
}

/// Outcome of bulk-loading words into a vocabulary.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LoadReport {
    pub accepted: usize,
    pub duplicates: usize,
    pub rejected: BTreeMap<Rejection, usize>,
}

impl LoadReport {
    pub fn rejected_total(&self) -> usize {
        self.rejected.values().sum()
    }
}
