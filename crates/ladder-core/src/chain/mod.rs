//! Greedy shiritori chain construction.
//!
//! Each position asks the vocabulary for words starting with the current
//! head, picks one, and hands its resolved tail to the next position. There
//! is no backtracking: a dead end fails the whole attempt, and retrying is
//! up to the caller (see [`crate::request::build_with_retries`]).

mod picker;
mod verify;


use std::fmt;

use tracing::{debug, debug_span};

use crate::error::ChainError;
use crate::tail::{head_char, resolve_tail};
use crate::vocab::Vocabulary;
use crate::MAX_CHAIN_LENGTH;

pub use picker::{FirstPicker, Picker, RandomPicker};
pub use verify::{verify_chain, ChainViolation};

/// A complete ladder. Only ever produced at full requested length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chain {
    words: Vec<String>,
}

impl Chain {
    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn first(&self) -> Option<&str> {
        self.words.first().map(String::as_str)
    }

    pub fn last(&self) -> Option<&str> {
        self.words.last().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

impl fmt::Display for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.words.join(" → "))
    }
}

enum BuildState {
    Step { position: usize, head: char },
    Success,
    Failed(ChainError),
}

/// Build a ladder of `length` words leading from `start` to `end`.
///
/// The first word starts with the resolved tail of `start`. The last word
/// must end with the normalized first kana of `end`, compared literally
/// against the word's final character (no folding on the word side, and no
/// long-vowel look-back).
pub fn build_chain(
    vocab: &dyn Vocabulary,
    start: &str,
    end: &str,
    length: usize,
    picker: &mut dyn Picker,
) -> Result<Chain, ChainError> {
    if !(1..=MAX_CHAIN_LENGTH).contains(&length) {
        return Err(ChainError::InvalidLength {
            length,
            max: MAX_CHAIN_LENGTH,
        });
    }
    let first_head = resolve_tail(start)?;
    let tail_target = head_char(end)?;

    let _span = debug_span!("build_chain", start, end, length).entered();

    let mut words: Vec<String> = Vec::with_capacity(length);
    let mut state = BuildState::Step {
        position: 0,
        head: first_head,
    };
    loop {
        state = match state {
            BuildState::Step { position, head } => {
                let is_last = position + 1 == length;
                let tail = is_last.then_some(tail_target);
                match pick_candidate(vocab, head, tail, picker) {
                    Some(word) => {
                        debug!(position, %head, word, "picked");
                        words.push(word.to_string());
                        if is_last {
                            BuildState::Success
                        } else {
                            BuildState::Step {
                                position: position + 1,
                                head: resolve_tail(word)?,
                            }
                        }
                    }
                    None => BuildState::Failed(ChainError::NoCandidate {
                        position,
                        head,
                        tail,
                    }),
                }
            }
            BuildState::Success => return Ok(Chain { words }),
            BuildState::Failed(err) => {
                debug!(error = %err, built = words.len(), "chain abandoned");
                return Err(err);
            }
        };
    }
}

/// Words under `head`, narrowed to those literally ending in `tail` when set.
fn pick_candidate<'v>(
    vocab: &'v dyn Vocabulary,
    head: char,
    tail: Option<char>,
    picker: &mut dyn Picker,
) -> Option<&'v str> {
    let candidates: Vec<&'v str> = vocab
        .lookup_by_head(head)
        .iter()
        .map(String::as_str)
        .filter(|w| tail.map_or(true, |t| w.ends_with(t)))
        .collect();
    debug!(%head, ?tail, count = candidates.len(), "candidates");
    if candidates.is_empty() {
        return None;
    }
    let idx = picker.pick(candidates.len()).min(candidates.len() - 1);
    Some(candidates[idx])
}
