use std::collections::BTreeMap;

use tracing::debug;

use super::{LoadReport, Rejection, VocabError, VocabRules, Vocabulary};
use crate::kana::{ends_with_forbidden_tail, is_hiragana_reading};
use crate::tail::{head_char, resolve_tail};

/// In-memory vocabulary, one bucket per canonical head.
///
/// Buckets keep insertion order, so a seeded picker sees the same candidate
/// list on every run.
#[derive(Debug, Clone, Default)]
pub struct MemoryVocabulary {
    buckets: BTreeMap<char, Vec<String>>,
}

impl MemoryVocabulary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a word under its canonical head.
    ///
    /// Returns `Ok(true)` if newly added, `Ok(false)` if already present.
    pub fn insert(&mut self, word: &str, rules: &VocabRules) -> Result<bool, Rejection> {
        rules.check(word)?;
        let head = head_char(word).map_err(|_| Rejection::NotHiragana)?;
        let bucket = self.buckets.entry(head).or_default();
        if bucket.iter().any(|w| w == word) {
            return Ok(false);
        }
        bucket.push(word.to_string());
        Ok(true)
    }

    /// Remove a word. Returns `true` if it was present.
    pub fn remove(&mut self, word: &str) -> bool {
        let Ok(head) = head_char(word) else {
            return false;
        };
        let Some(bucket) = self.buckets.get_mut(&head) else {
            return false;
        };
        let before = bucket.len();
        bucket.retain(|w| w != word);
        let removed = bucket.len() < before;
        if bucket.is_empty() {
            self.buckets.remove(&head);
        }
        removed
    }

    pub fn contains(&self, word: &str) -> bool {
        head_char(word)
            .map(|h| self.lookup_by_head(h).iter().any(|w| w == word))
            .unwrap_or(false)
    }

    /// Build from loose words, counting what was kept and why the rest was not.
    pub fn from_words<I, S>(words: I, rules: &VocabRules) -> (Self, LoadReport)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut vocab = Self::new();
        let mut report = LoadReport::default();
        for word in words {
            match vocab.insert(word.as_ref(), rules) {
                Ok(true) => report.accepted += 1,
                Ok(false) => report.duplicates += 1,
                Err(reason) => *report.rejected.entry(reason).or_default() += 1,
            }
        }
        debug!(
            accepted = report.accepted,
            duplicates = report.duplicates,
            rejected = report.rejected_total(),
            "vocabulary loaded"
        );
        (vocab, report)
    }

    /// Build from pre-bucketed words, checking that each word belongs to its
    /// bucket. Used by the JSON and binary loaders.
    pub(super) fn from_buckets<I>(buckets: I) -> Result<Self, VocabError>
    where
        I: IntoIterator<Item = (char, Vec<String>)>,
    {
        let mut vocab = Self::new();
        for (head, words) in buckets {
            for word in words {
                let filed_ok = is_hiragana_reading(&word)
                    && !ends_with_forbidden_tail(&word)
                    && resolve_tail(&word).is_ok()
                    && head_char(&word).is_ok_and(|h| h == head);
                if !filed_ok {
                    return Err(VocabError::Invariant {
                        head: head.to_string(),
                        word,
                    });
                }
                let bucket = vocab.buckets.entry(head).or_default();
                if !bucket.contains(&word) {
                    bucket.push(word);
                }
            }
        }
        Ok(vocab)
    }

    pub(super) fn buckets(&self) -> &BTreeMap<char, Vec<String>> {
        &self.buckets
    }
}

impl Vocabulary for MemoryVocabulary {
    fn lookup_by_head(&self, head: char) -> &[String] {
        self.buckets.get(&head).map(Vec::as_slice).unwrap_or(&[])
    }

    fn heads(&self) -> Vec<char> {
        self.buckets.keys().copied().collect()
    }

    fn word_count(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }
}
