//! Shiritori word-ladder construction over hiragana vocabularies.

pub mod chain;
mod error;
pub mod kana;
pub mod request;
pub mod settings;
pub mod tail;
pub mod vocab;

pub use chain::{
    build_chain, verify_chain, Chain, ChainViolation, FirstPicker, Picker, RandomPicker,
};
pub use error::{ChainError, InvalidWordReason};
pub use request::LadderRequest;
pub use vocab::{MemoryVocabulary, Vocabulary};

/// Longest ladder a single request may ask for.
pub const MAX_CHAIN_LENGTH: usize = 10;
