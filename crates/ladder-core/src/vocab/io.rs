//! On-disk vocabulary formats.
//!
//! - plain text: one word per line, `#` comments and blank lines ignored
//! - JSON: `{ "か": ["かめ", ...], ... }`
//! - LXLV: magic + version byte + bincode body

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::{MemoryVocabulary, VocabError, VocabRules};

const MAGIC: &[u8; 4] = b"LXLV";
const VERSION: u8 = 1;
const HEADER_LEN: usize = 5;

/// One bucket as persisted in the binary format.
#[derive(Serialize, Deserialize)]
struct HeadRecord {
    head: char,
    words: Vec<String>,
}

/// Split a word list into trimmed words.
pub fn parse_word_list(text: &str) -> Vec<&str> {
    text.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty() && !l.starts_with('#'))
        .collect()
}

impl MemoryVocabulary {
    /// Serialize to bytes (LXLV format).
    pub fn to_bytes(&self) -> Result<Vec<u8>, VocabError> {
        let records: Vec<HeadRecord> = self
            .buckets()
            .iter()
            .map(|(&head, words)| HeadRecord {
                head,
                words: words.clone(),
            })
            .collect();
        let body = bincode::serialize(&records).map_err(VocabError::Serialize)?;
        let mut buf = Vec::with_capacity(HEADER_LEN + body.len());
        buf.extend_from_slice(MAGIC);
        buf.push(VERSION);
        buf.extend_from_slice(&body);
        Ok(buf)
    }

    /// Deserialize from bytes (LXLV format).
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, VocabError> {
        if bytes.len() < HEADER_LEN {
            return Err(VocabError::InvalidHeader);
        }
        if &bytes[0..4] != MAGIC {
            return Err(VocabError::InvalidMagic);
        }
        if bytes[4] != VERSION {
            return Err(VocabError::UnsupportedVersion(bytes[4]));
        }
        let records: Vec<HeadRecord> =
            bincode::deserialize(&bytes[HEADER_LEN..]).map_err(VocabError::Deserialize)?;
        Self::from_buckets(records.into_iter().map(|r| (r.head, r.words)))
    }

    /// Parse the JSON bucket map. Every word must belong to its key.
    pub fn from_json_str(json: &str) -> Result<Self, VocabError> {
        let raw: BTreeMap<String, Vec<String>> = serde_json::from_str(json)?;
        let mut buckets = Vec::with_capacity(raw.len());
        for (key, words) in raw {
            let mut chars = key.chars();
            let (Some(head), None) = (chars.next(), chars.next()) else {
                warn!(key = %key, "vocabulary key is not a single kana");
                let word = words.into_iter().next().unwrap_or_default();
                return Err(VocabError::Invariant { head: key, word });
            };
            buckets.push((head, words));
        }
        Self::from_buckets(buckets)
            .inspect_err(|e| warn!(error = %e, "rejected vocabulary JSON"))
    }

    pub fn to_json_string(&self) -> Result<String, VocabError> {
        let raw: BTreeMap<String, &Vec<String>> = self
            .buckets()
            .iter()
            .map(|(head, words)| (head.to_string(), words))
            .collect();
        Ok(serde_json::to_string_pretty(&raw)?)
    }

    /// Atomic write: write to .tmp then rename. `.json` paths get JSON,
    /// everything else the binary format.
    pub fn save(&self, path: &Path) -> Result<(), VocabError> {
        let bytes = if is_json(path) {
            self.to_json_string()?.into_bytes()
        } else {
            self.to_bytes()?
        };
        let tmp = path.with_extension("tmp");
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&tmp, &bytes)?;
        fs::rename(&tmp, path)?;
        Ok(())
    }

    /// Open a compiled LXLV file.
    pub fn open(path: &Path) -> Result<Self, VocabError> {
        let bytes = fs::read(path)?;
        Self::from_bytes(&bytes)
    }
}

fn is_json(path: &Path) -> bool {
    path.extension().is_some_and(|e| e == "json")
}

/// Load a vocabulary, choosing the format from the file extension:
/// `.json`, `.lxlv`, or a plain word list otherwise.
pub fn open_any(path: &Path, rules: &VocabRules) -> Result<MemoryVocabulary, VocabError> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("json") => MemoryVocabulary::from_json_str(&fs::read_to_string(path)?),
        Some("lxlv") => MemoryVocabulary::open(path),
        _ => {
            let text = fs::read_to_string(path)?;
            let (vocab, report) = MemoryVocabulary::from_words(parse_word_list(&text), rules);
            if report.accepted == 0 {
                return Err(VocabError::Io(io::Error::new(
                    io::ErrorKind::InvalidData,
                    "word list contains no usable words",
                )));
            }
            Ok(vocab)
        }
    }
}
