//! Validated ladder requests and the caller-side retry loop.

use tracing::{debug, info};

use crate::chain::{build_chain, Chain, Picker};
use crate::error::{ChainError, InvalidWordReason};
use crate::kana::{ends_with_forbidden_tail, is_hiragana_reading};
use crate::tail::resolve_tail;
use crate::vocab::Vocabulary;
use crate::MAX_CHAIN_LENGTH;

/// Start word, end word and length, checked the way user input is checked
/// before any lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LadderRequest {
    start: String,
    end: String,
    length: usize,
}

impl LadderRequest {
    pub fn new(start: &str, end: &str, length: usize) -> Result<Self, ChainError> {
        let start = start.trim();
        let end = end.trim();
        check_anchor(start)?;
        check_anchor(end)?;
        if ends_with_forbidden_tail(start) {
            return Err(ChainError::invalid_word(
                start,
                InvalidWordReason::ForbiddenTail,
            ));
        }
        resolve_tail(start)?;
        if !(1..=MAX_CHAIN_LENGTH).contains(&length) {
            return Err(ChainError::InvalidLength {
                length,
                max: MAX_CHAIN_LENGTH,
            });
        }
        Ok(Self {
            start: start.to_string(),
            end: end.to_string(),
            length,
        })
    }

    pub fn start(&self) -> &str {
        &self.start
    }

    pub fn end(&self) -> &str {
        &self.end
    }

    pub fn length(&self) -> usize {
        self.length
    }

    /// One attempt.
    pub fn build(
        &self,
        vocab: &dyn Vocabulary,
        picker: &mut dyn Picker,
    ) -> Result<Chain, ChainError> {
        build_chain(vocab, &self.start, &self.end, self.length, picker)
    }
}

fn check_anchor(word: &str) -> Result<(), ChainError> {
    if word.is_empty() {
        return Err(ChainError::invalid_word(word, InvalidWordReason::Empty));
    }
    if !is_hiragana_reading(word) {
        return Err(ChainError::invalid_word(
            word,
            InvalidWordReason::NotHiragana,
        ));
    }
    Ok(())
}

/// A successful ladder and how many attempts it took.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attempted {
    pub chain: Chain,
    pub attempts: usize,
}

/// Re-run `request` until it succeeds or `max_attempts` dead ends were hit.
///
/// Only `NoCandidate` is retried; a different draw cannot fix a bad word
/// or length. The last `NoCandidate` is returned when attempts run out.
pub fn build_with_retries(
    request: &LadderRequest,
    vocab: &dyn Vocabulary,
    picker: &mut dyn Picker,
    max_attempts: usize,
) -> Result<Attempted, ChainError> {
    let mut attempt = 0;
    loop {
        attempt += 1;
        match request.build(vocab, picker) {
            Ok(chain) => {
                info!(attempts = attempt, "ladder built");
                return Ok(Attempted {
                    chain,
                    attempts: attempt,
                });
            }
            Err(err) if err.is_retryable() && attempt < max_attempts => {
                debug!(attempt, error = %err, "retrying");
            }
            Err(err) => return Err(err),
        }
    }
}
