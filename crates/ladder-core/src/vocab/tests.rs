use super::*;

fn rules() -> VocabRules {
    VocabRules::default()
}

#[test]
fn insert_files_under_canonical_head() {
    let mut vocab = MemoryVocabulary::new();
    assert_eq!(vocab.insert("がっこう", &rules()), Ok(true));
    assert_eq!(vocab.insert("かめ", &rules()), Ok(true));
    assert_eq!(vocab.lookup_by_head('か'), ["がっこう", "かめ"]);
    assert!(vocab.lookup_by_head('が').is_empty());
}

#[test]
fn insert_duplicate() {
    let mut vocab = MemoryVocabulary::new();
    assert_eq!(vocab.insert("かめ", &rules()), Ok(true));
    assert_eq!(vocab.insert("かめ", &rules()), Ok(false));
    assert_eq!(vocab.word_count(), 1);
}

#[test]
fn insert_rejections() {
    let mut vocab = MemoryVocabulary::new();
    assert_eq!(vocab.insert("みかん", &rules()), Err(Rejection::ForbiddenTail));
    assert_eq!(vocab.insert("め", &rules()), Err(Rejection::TooShort));
    assert_eq!(vocab.insert("カメ", &rules()), Err(Rejection::NotHiragana));
    assert_eq!(vocab.insert("", &rules()), Err(Rejection::NotHiragana));
    assert_eq!(vocab.word_count(), 0);
}

#[test]
fn single_char_words_allowed_when_rules_relaxed() {
    let mut vocab = MemoryVocabulary::new();
    let relaxed = VocabRules { min_word_chars: 1 };
    assert_eq!(vocab.insert("め", &relaxed), Ok(true));
    assert_eq!(vocab.lookup_by_head('め'), ["め"]);
}

#[test]
fn lone_long_vowel_mark_rejected_when_rules_relaxed() {
    let relaxed = VocabRules { min_word_chars: 1 };
    let (vocab, report) = MemoryVocabulary::from_words(["とーー", "ー", "ーか"], &relaxed);
    assert_eq!(report.accepted, 2);
    assert_eq!(report.rejected[&Rejection::NoTail], 1);
    assert!(!vocab.contains("ー"));
    assert_eq!(vocab.lookup_by_head('ー'), ["ーか"]);
}

#[test]
fn iteration_and_voicing_marks_rejected() {
    let mut vocab = MemoryVocabulary::new();
    for word in ["かゝ", "か\u{3040}", "か゛", "ゞか"] {
        assert_eq!(vocab.insert(word, &rules()), Err(Rejection::NotHiragana), "{word}");
    }
    assert_eq!(vocab.word_count(), 0);
}

#[test]
fn rejection_display() {
    assert_eq!(Rejection::NotHiragana.to_string(), "not hiragana");
    assert_eq!(Rejection::TooShort.to_string(), "too short");
    assert_eq!(Rejection::NoTail.to_string(), "no tail kana");
    assert_eq!(Rejection::ForbiddenTail.to_string(), "ends with ん");
}

#[test]
fn remove_last_word_drops_head() {
    let mut vocab = MemoryVocabulary::new();
    vocab.insert("かめ", &rules()).unwrap();
    assert!(vocab.contains("かめ"));
    assert!(vocab.remove("かめ"));
    assert!(!vocab.remove("かめ"));
    assert!(vocab.heads().is_empty());
    assert!(!vocab.contains("かめ"));
}

#[test]
fn from_words_reports_counts() {
    let words = ["かめ", "めだか", "かめ", "みかん", "め", "ラーメン"];
    let (vocab, report) = MemoryVocabulary::from_words(words, &rules());
    assert_eq!(report.accepted, 2);
    assert_eq!(report.duplicates, 1);
    assert_eq!(report.rejected_total(), 3);
    assert_eq!(report.rejected[&Rejection::ForbiddenTail], 1);
    assert_eq!(report.rejected[&Rejection::TooShort], 1);
    assert_eq!(report.rejected[&Rejection::NotHiragana], 1);
    assert_eq!(vocab.heads(), vec!['か', 'め']);
}

#[test]
fn parse_word_list_skips_comments_and_blanks() {
    let text = "# nouns\nかめ\n\n  めだか  \n# end\n";
    assert_eq!(parse_word_list(text), vec!["かめ", "めだか"]);
}

#[test]
fn json_roundtrip_preserves_bucket_order() {
    let (vocab, _) = MemoryVocabulary::from_words(["かめ", "がっこう", "めだか"], &rules());
    let json = vocab.to_json_string().unwrap();
    let loaded = MemoryVocabulary::from_json_str(&json).unwrap();
    assert_eq!(loaded.lookup_by_head('か'), ["かめ", "がっこう"]);
    assert_eq!(loaded.lookup_by_head('め'), ["めだか"]);
}

#[test]
fn json_rejects_misfiled_word() {
    let err = MemoryVocabulary::from_json_str(r#"{"か": ["めだか"]}"#).unwrap_err();
    assert!(matches!(err, VocabError::Invariant { .. }));
    assert!(err.to_string().contains("めだか"));
}

#[test]
fn json_rejects_forbidden_tail() {
    let err = MemoryVocabulary::from_json_str(r#"{"み": ["みかん"]}"#).unwrap_err();
    assert!(matches!(err, VocabError::Invariant { .. }));
}

#[test]
fn json_rejects_lone_long_vowel_mark() {
    let err = MemoryVocabulary::from_json_str(r#"{"ー": ["ー"]}"#).unwrap_err();
    assert!(matches!(err, VocabError::Invariant { ref word, .. } if word == "ー"));
}

#[test]
fn json_rejects_iteration_mark() {
    let err = MemoryVocabulary::from_json_str(r#"{"か": ["かゝ"]}"#).unwrap_err();
    assert!(matches!(err, VocabError::Invariant { .. }));
}

#[test]
fn json_rejects_multi_char_key() {
    let err = MemoryVocabulary::from_json_str(r#"{"かめ": ["かめ"]}"#).unwrap_err();
    assert!(matches!(err, VocabError::Invariant { .. }));
}

#[test]
fn json_rejects_malformed_text() {
    let err = MemoryVocabulary::from_json_str("[1, 2").unwrap_err();
    assert!(matches!(err, VocabError::Json(_)));
}

#[test]
fn binary_roundtrip() {
    let (vocab, _) = MemoryVocabulary::from_words(["かめ", "がっこう", "めだか"], &rules());
    let bytes = vocab.to_bytes().unwrap();
    assert_eq!(&bytes[0..4], b"LXLV");
    let loaded = MemoryVocabulary::from_bytes(&bytes).unwrap();
    assert_eq!(loaded.lookup_by_head('か'), ["かめ", "がっこう"]);
    assert_eq!(loaded.word_count(), 3);
}

#[test]
fn binary_header_errors() {
    assert!(matches!(
        MemoryVocabulary::from_bytes(b"LX"),
        Err(VocabError::InvalidHeader)
    ));
    assert!(matches!(
        MemoryVocabulary::from_bytes(b"XXXX\x01"),
        Err(VocabError::InvalidMagic)
    ));
    assert!(matches!(
        MemoryVocabulary::from_bytes(b"LXLV\x09"),
        Err(VocabError::UnsupportedVersion(9))
    ));
}

#[test]
fn save_and_open_any() {
    let dir = tempfile::tempdir().unwrap();
    let (vocab, _) = MemoryVocabulary::from_words(["かめ", "めだか"], &rules());

    let bin = dir.path().join("nouns.lxlv");
    vocab.save(&bin).unwrap();
    assert!(!dir.path().join("nouns.tmp").exists());
    let loaded = open_any(&bin, &rules()).unwrap();
    assert_eq!(loaded.word_count(), 2);

    let json = dir.path().join("nouns.json");
    vocab.save(&json).unwrap();
    let loaded = open_any(&json, &rules()).unwrap();
    assert_eq!(loaded.lookup_by_head('め'), ["めだか"]);

    let txt = dir.path().join("nouns.txt");
    std::fs::write(&txt, "かめ\nめだか\nみかん\n").unwrap();
    let loaded = open_any(&txt, &rules()).unwrap();
    assert_eq!(loaded.word_count(), 2);
}

#[test]
fn open_any_rejects_empty_word_list() {
    let dir = tempfile::tempdir().unwrap();
    let txt = dir.path().join("empty.txt");
    std::fs::write(&txt, "# nothing\nみかん\n").unwrap();
    assert!(matches!(open_any(&txt, &rules()), Err(VocabError::Io(_))));
}
