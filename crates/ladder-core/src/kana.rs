//! Hiragana classification and head/tail folding for shiritori matching.
//!
//! Casual play ignores size and voicing when matching sounds: a word starting
//! with が continues a chain ending in か, and a word ending in ゃ hands over や.
//! [`normalize`] collapses those variants onto one base kana.

/// Prolonged sound mark (U+30FC). Technically katakana, but common in
/// hiragana readings like "らーめん".
pub const LONG_VOWEL_MARK: char = 'ー';

/// A word ending on this kana loses the game, so it never enters a chain.
pub const FORBIDDEN_TAIL: char = 'ん';

/// Small kana and their full-size forms.
const SMALL_FOLDS: &[(char, char)] = &[
    ('ぁ', 'あ'),
    ('ぃ', 'い'),
    ('ぅ', 'う'),
    ('ぇ', 'え'),
    ('ぉ', 'お'),
    ('っ', 'つ'),
    ('ゃ', 'や'),
    ('ゅ', 'ゆ'),
    ('ょ', 'よ'),
    ('ゎ', 'わ'),
    ('ゕ', 'か'),
    ('ゖ', 'け'),
];

/// Dakuten and handakuten kana and their unvoiced base.
const VOICED_FOLDS: &[(char, char)] = &[
    ('が', 'か'),
    ('ぎ', 'き'),
    ('ぐ', 'く'),
    ('げ', 'け'),
    ('ご', 'こ'),
    ('ざ', 'さ'),
    ('じ', 'し'),
    ('ず', 'す'),
    ('ぜ', 'せ'),
    ('ぞ', 'そ'),
    ('だ', 'た'),
    ('ぢ', 'ち'),
    ('づ', 'つ'),
    ('で', 'て'),
    ('ど', 'と'),
    ('ば', 'は'),
    ('び', 'ひ'),
    ('ぶ', 'ふ'),
    ('べ', 'へ'),
    ('ぼ', 'ほ'),
    ('ぱ', 'は'),
    ('ぴ', 'ひ'),
    ('ぷ', 'ふ'),
    ('ぺ', 'へ'),
    ('ぽ', 'ほ'),
    ('ゔ', 'う'),
];

/// Fold a kana onto the form used for head/tail matching.
///
/// Small kana become full-size, voiced and semi-voiced kana become unvoiced.
/// Anything outside both tables comes back unchanged, so the function is
/// total and idempotent.
pub fn normalize(c: char) -> char {
    SMALL_FOLDS
        .iter()
        .chain(VOICED_FOLDS)
        .find_map(|&(from, to)| (from == c).then_some(to))
        .unwrap_or(c)
}

/// Every kana [`normalize`] rewrites. Mostly useful for tests and tooling.
pub fn folded_chars() -> impl Iterator<Item = char> {
    SMALL_FOLDS.iter().chain(VOICED_FOLDS).map(|&(from, _)| from)
}

/// Check for an assigned hiragana syllable (U+3041..U+3096).
///
/// The rest of the block (U+3040, the combining and spacing voicing marks,
/// the iteration marks ゝゞ and the ligature ゟ) carries no sound of its own
/// and cannot start or end a word.
pub fn is_hiragana(c: char) -> bool {
    ('\u{3041}'..='\u{3096}').contains(&c)
}

/// Check if a string is a valid hiragana reading.
///
/// Accepts hiragana and the prolonged sound mark ー.
pub fn is_hiragana_reading(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| is_hiragana(c) || c == LONG_VOWEL_MARK)
}

pub fn ends_with_forbidden_tail(word: &str) -> bool {
    word.ends_with(FORBIDDEN_TAIL)
}
