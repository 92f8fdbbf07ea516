use std::path::Path;

use serde::Serialize;

use ladder_core::request::{build_with_retries, Attempted};
use ladder_core::settings::settings;
use ladder_core::tail::head_char;
use ladder_core::vocab::{open_any, VocabRules};
use ladder_core::{verify_chain, ChainError, LadderRequest, RandomPicker};

pub struct BuildOptions {
    pub length: Option<usize>,
    pub seed: Option<u64>,
    pub attempts: Option<usize>,
    pub json: bool,
}

/// JSON form of a finished ladder.
#[derive(Debug, Serialize)]
pub struct LadderReport<'a> {
    pub start: &'a str,
    pub end: &'a str,
    pub attempts: usize,
    pub seed: Option<u64>,
    pub steps: Vec<LadderStep<'a>>,
}

#[derive(Debug, Serialize)]
pub struct LadderStep<'a> {
    pub head: char,
    pub word: &'a str,
}

impl<'a> LadderReport<'a> {
    pub fn new(request: &'a LadderRequest, done: &'a Attempted, seed: Option<u64>) -> Self {
        let steps = done
            .chain
            .iter()
            .map(|word| LadderStep {
                // Chain words always have a head.
                head: head_char(word).unwrap_or_default(),
                word,
            })
            .collect();
        Self {
            start: request.start(),
            end: request.end(),
            attempts: done.attempts,
            seed,
            steps,
        }
    }

    pub fn render_text(&self) -> String {
        let mut out = format!("スタート： {}\n", self.start);
        for step in &self.steps {
            out.push_str(&format!("{} {}\n", step.head, step.word));
        }
        out.push_str(&format!("ゴール： {}\n", self.end));
        out
    }
}

/// User-facing message for a failed request.
pub fn failure_message(err: &ChainError) -> String {
    match err {
        ChainError::NoCandidate { .. } => {
            format!("No ladder found with this vocabulary ({err}). Try other words.")
        }
        _ => format!("Invalid input: {err}"),
    }
}

pub fn build(vocab_file: &str, start: &str, end: &str, opts: &BuildOptions) {
    let length = opts.length.unwrap_or(settings().ladder.default_length);
    let request = LadderRequest::new(start, end, length).unwrap_or_else(|e| {
        eprintln!("{}", failure_message(&e));
        std::process::exit(1);
    });
    let vocab = die!(
        open_any(Path::new(vocab_file), &VocabRules::from_settings()),
        "Error loading vocabulary {vocab_file}: {}"
    );

    let mut picker = match opts.seed {
        Some(seed) => RandomPicker::seeded(seed),
        None => RandomPicker::from_entropy(),
    };
    let max_attempts = opts.attempts.unwrap_or(settings().ladder.max_attempts);
    let done = build_with_retries(&request, &vocab, &mut picker, max_attempts.max(1))
        .unwrap_or_else(|e| {
            eprintln!("{}", failure_message(&e));
            std::process::exit(1);
        });

    let report = LadderReport::new(&request, &done, opts.seed);
    if opts.json {
        let json = die!(serde_json::to_string_pretty(&report), "Error: {}");
        println!("{json}");
    } else {
        print!("{}", report.render_text());
    }
}

pub fn check(start: &str, end: &str, words: &[String]) {
    match verify_chain(start, end, words) {
        Ok(()) => println!("OK: {} words", words.len()),
        Err(e) => {
            eprintln!("Broken ladder: {e}");
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ladder_core::vocab::MemoryVocabulary;
    use ladder_core::FirstPicker;

    fn built() -> (LadderRequest, Attempted) {
        let (vocab, _) =
            MemoryVocabulary::from_words(["かめ", "めだか"], &VocabRules::default());
        let request = LadderRequest::new("すいか", "かい", 2).unwrap();
        let done = build_with_retries(&request, &vocab, &mut FirstPicker, 1).unwrap();
        (request, done)
    }

    #[test]
    fn render_text_lists_heads_and_words() {
        let (request, done) = built();
        let report = LadderReport::new(&request, &done, None);
        assert_eq!(
            report.render_text(),
            "スタート： すいか\nか かめ\nめ めだか\nゴール： かい\n"
        );
    }

    #[test]
    fn report_serializes_to_json() {
        let (request, done) = built();
        let report = LadderReport::new(&request, &done, Some(3));
        let json: serde_json::Value = serde_json::to_value(&report).unwrap();
        assert_eq!(json["attempts"], 1);
        assert_eq!(json["seed"], 3);
        assert_eq!(json["steps"][1]["word"], "めだか");
        assert_eq!(json["steps"][1]["head"], "め");
    }

    #[test]
    fn failure_messages() {
        let err = ChainError::NoCandidate {
            position: 1,
            head: 'め',
            tail: Some('か'),
        };
        assert!(failure_message(&err).starts_with("No ladder found"));
        assert!(failure_message(&err).contains("ending with か"));
        let err = ChainError::InvalidLength { length: 0, max: 10 };
        assert!(failure_message(&err).starts_with("Invalid input"));
    }
}
