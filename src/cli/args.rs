//! Command line argument parsing for the Durak CLI using clap.

use clap::{Parser, Subcommand};

/// Durak - Turkish lexical normalization and lemmatization toolkit
#[derive(Parser, Debug, Clone)]
#[command(name = "durak")]
#[command(about = "Durak - Turkish NLP Toolkit CLI")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct DurakArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl DurakArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1,
                n => n + 1,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Tokenize Turkish text, keeping clitics, numbers, URLs and emoticons whole
    Tokenize(TokenizeArgs),

    /// Normalize Turkish text (İ → i, I → ı, then lowercase)
    Normalize(NormalizeArgs),

    /// Reduce each word of the text to its lemma
    Lemmatize(LemmatizeArgs),

    /// Split each word of the text into syllables
    Syllabify(SyllabifyArgs),

    /// Show version and build information
    Version,
}

/// Arguments for tokenization
#[derive(Parser, Debug, Clone)]
pub struct TokenizeArgs {
    /// Text to tokenize (omit to read from stdin)
    #[arg(value_name = "TEXT")]
    pub text: Option<String>,

    /// Include character offsets in output
    #[arg(short, long)]
    pub offsets: bool,

    /// Fold token text with the Turkish normalizer (offsets still index the input)
    #[arg(short, long)]
    pub normalized: bool,
}

/// Arguments for normalization
#[derive(Parser, Debug, Clone)]
pub struct NormalizeArgs {
    /// Text to normalize (omit to read from stdin)
    #[arg(value_name = "TEXT")]
    pub text: Option<String>,

    /// Only apply the dotted/dotless I mapping, keep all other casing
    #[arg(long)]
    pub keep_case: bool,

    /// Use generic lowercasing for I
    #[arg(long)]
    pub no_turkish_i: bool,
}

/// Arguments for lemmatization
#[derive(Parser, Debug, Clone)]
pub struct LemmatizeArgs {
    /// Text to lemmatize (omit to read from stdin)
    #[arg(value_name = "TEXT")]
    pub text: Option<String>,

    /// Strategy: lookup, heuristic or hybrid
    #[arg(short, long, default_value = "hybrid")]
    pub strategy: String,

    /// Shortest root the suffix stripper may leave
    #[arg(long, default_value = "2")]
    pub min_root_length: usize,

    /// Only accept stripped roots found in the dictionary
    #[arg(long)]
    pub strict: bool,

    /// Skip the vowel harmony check while stripping
    #[arg(long)]
    pub no_harmony: bool,

    /// Print lemmatizer metrics to stderr when done
    #[arg(long)]
    pub metrics: bool,
}

/// Arguments for syllabification
#[derive(Parser, Debug, Clone)]
pub struct SyllabifyArgs {
    /// Text to syllabify (omit to read from stdin)
    #[arg(value_name = "TEXT")]
    pub text: Option<String>,
}
