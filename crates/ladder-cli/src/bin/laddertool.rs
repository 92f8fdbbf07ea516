use clap::{Parser, Subcommand};

use ladder_cli::commands::ladder_ops::BuildOptions;
use ladder_cli::commands::{config_ops, ladder_ops, vocab_ops};
use ladder_cli::trace_init::init_tracing;

#[derive(Parser)]
#[command(name = "laddertool", about = "Shiritori word-ladder generator")]
struct Cli {
    /// Log chain construction to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
    /// Custom settings TOML (see `settings-export`)
    #[arg(long, global = true)]
    settings: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Build a ladder from START to END
    Build {
        /// Vocabulary file (.lxlv, .json, or a word list)
        vocab_file: String,
        /// First word (hiragana, must not end with ん)
        start: String,
        /// Last word (hiragana)
        end: String,
        /// Number of words between START and END (1..=10)
        length: Option<usize>,
        /// Seed for reproducible ladders
        #[arg(long)]
        seed: Option<u64>,
        /// Attempts before giving up (default: ladder.max_attempts)
        #[arg(long)]
        attempts: Option<usize>,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Check a hand-written ladder
    Check {
        start: String,
        end: String,
        /// Ladder words in order
        #[arg(required = true)]
        words: Vec<String>,
    },
    /// Manage vocabulary files
    Vocab {
        #[command(subcommand)]
        action: VocabAction,
    },
    /// Export default settings as TOML
    SettingsExport,
    /// Validate a custom settings TOML file
    SettingsValidate {
        /// Path to the TOML file
        file: String,
    },
}

#[derive(Subcommand)]
enum VocabAction {
    /// Compile a word list into .lxlv (or .json)
    Compile {
        /// Word list, one word per line, or a JSON vocabulary
        input_file: String,
        /// Output file
        output_file: String,
    },
    /// Show word counts per head
    Stats { vocab_file: String },
    /// Add a word
    Add { vocab_file: String, word: String },
    /// Remove a word
    Remove { vocab_file: String, word: String },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    if let Some(file) = &cli.settings {
        config_ops::load_custom(file);
    }

    match cli.command {
        Command::Build {
            vocab_file,
            start,
            end,
            length,
            seed,
            attempts,
            json,
        } => {
            let opts = BuildOptions {
                length,
                seed,
                attempts,
                json,
            };
            ladder_ops::build(&vocab_file, &start, &end, &opts);
        }
        Command::Check { start, end, words } => ladder_ops::check(&start, &end, &words),
        Command::Vocab { action } => match action {
            VocabAction::Compile {
                input_file,
                output_file,
            } => vocab_ops::compile(&input_file, &output_file),
            VocabAction::Stats { vocab_file } => vocab_ops::stats(&vocab_file),
            VocabAction::Add { vocab_file, word } => vocab_ops::edit(&vocab_file, &word, true),
            VocabAction::Remove { vocab_file, word } => {
                vocab_ops::edit(&vocab_file, &word, false)
            }
        },
        Command::SettingsExport => config_ops::settings_export(),
        Command::SettingsValidate { file } => config_ops::settings_validate(&file),
    }
}
