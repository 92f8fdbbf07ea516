use std::fs;

use ladder_core::settings;

pub fn settings_export() {
    print!("{}", settings::default_toml());
}

pub fn settings_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let s = die!(settings::parse_settings_toml(&content), "Error: {}");
    println!(
        "OK: ladder.default_length={}, ladder.max_attempts={}, vocabulary.min_word_chars={}",
        s.ladder.default_length, s.ladder.max_attempts, s.vocabulary.min_word_chars
    );
}

/// Install a custom settings file before anything reads `settings()`.
pub fn load_custom(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    die!(settings::init_custom(content), "Error in {file}: {}");
}
