use std::fs;
use std::io;
use std::path::Path;

use ladder_core::vocab::{
    open_any, parse_word_list, LoadReport, MemoryVocabulary, Rejection, VocabError, VocabRules,
};
use ladder_core::Vocabulary;

#[derive(Debug, thiserror::Error)]
pub enum VocabOpError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Vocab(#[from] VocabError),

    #[error("{0} must be a .lxlv or .json vocabulary")]
    NotEditable(String),

    #[error("rejected {word}: {reason}")]
    Rejected { word: String, reason: Rejection },
}

/// What `vocab add` / `vocab remove` did to the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    Added,
    AlreadyExists,
    Removed,
    NotFound,
}

impl EditOutcome {
    pub fn label(self) -> &'static str {
        match self {
            Self::Added => "Added",
            Self::AlreadyExists => "Already exists",
            Self::Removed => "Removed",
            Self::NotFound => "Not found",
        }
    }
}

/// Load `input` and save it compiled to `output`.
///
/// Word lists go through `rules` and come back with their load report; JSON
/// vocabularies are already bucketed and have none.
pub fn compile_file(
    input: &Path,
    output: &Path,
    rules: &VocabRules,
) -> Result<(MemoryVocabulary, Option<LoadReport>), VocabOpError> {
    let (vocab, report) = if input.extension().is_some_and(|e| e == "json") {
        (open_any(input, rules)?, None)
    } else {
        let text = fs::read_to_string(input)?;
        let (vocab, report) = MemoryVocabulary::from_words(parse_word_list(&text), rules);
        (vocab, Some(report))
    };
    vocab.save(output)?;
    Ok((vocab, report))
}

/// Read a word list (or JSON vocabulary) and write it out compiled.
pub fn compile(input_file: &str, output_file: &str) {
    let (vocab, report) = die!(
        compile_file(
            Path::new(input_file),
            Path::new(output_file),
            &VocabRules::from_settings()
        ),
        "Error compiling {input_file}: {}"
    );
    if let Some(report) = report {
        eprint!("{}", format_report(&report));
    }
    eprintln!(
        "Wrote {output_file} ({} words under {} heads)",
        vocab.word_count(),
        vocab.heads().len()
    );
}

pub fn format_report(report: &LoadReport) -> String {
    let mut out = format!(
        "accepted: {}\nduplicates: {}\n",
        report.accepted, report.duplicates
    );
    for (reason, count) in &report.rejected {
        out.push_str(&format!("rejected ({reason}): {count}\n"));
    }
    out
}

pub fn stats(vocab_file: &str) {
    let vocab = die!(
        open_any(Path::new(vocab_file), &VocabRules::from_settings()),
        "Error loading {vocab_file}: {}"
    );
    for head in vocab.heads() {
        println!("{head}\t{}", vocab.lookup_by_head(head).len());
    }
    println!("---");
    println!("{} words", vocab.word_count());
}

/// Add or remove one word in a `.lxlv` or `.json` vocabulary, saving only
/// when it changed. A missing file starts out empty.
pub fn edit_file(
    path: &Path,
    word: &str,
    add: bool,
    rules: &VocabRules,
) -> Result<EditOutcome, VocabOpError> {
    if !matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("lxlv" | "json")
    ) {
        return Err(VocabOpError::NotEditable(path.display().to_string()));
    }
    let mut vocab = if path.exists() {
        open_any(path, rules)?
    } else {
        MemoryVocabulary::new()
    };

    let outcome = if add {
        match vocab.insert(word, rules) {
            Ok(true) => EditOutcome::Added,
            Ok(false) => EditOutcome::AlreadyExists,
            Err(reason) => {
                return Err(VocabOpError::Rejected {
                    word: word.to_string(),
                    reason,
                })
            }
        }
    } else if vocab.remove(word) {
        EditOutcome::Removed
    } else {
        EditOutcome::NotFound
    };

    if matches!(outcome, EditOutcome::Added | EditOutcome::Removed) {
        vocab.save(path)?;
    }
    Ok(outcome)
}

pub fn edit(vocab_file: &str, word: &str, add: bool) {
    let outcome = die!(
        edit_file(Path::new(vocab_file), word, add, &VocabRules::from_settings()),
        "Error: {}"
    );
    println!("{}: {word}", outcome.label());
}
