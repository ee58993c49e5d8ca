//! Command implementations for the Durak CLI.

use std::io::{self, IsTerminal, Read};

use anyhow::Context;

use crate::analysis::lemma::engine::{LemmaEngine, LemmaEngineConfig, LemmaStrategy};
use crate::analysis::morphology::stripper::StripperConfig;
use crate::analysis::morphology::syllable::Syllabifier;
use crate::analysis::normalizer::normalize;
use crate::analysis::token::TokenType;
use crate::analysis::tokenizer::TurkishTokenizer;
use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::{DurakError, Result};

/// Execute a CLI command.
pub fn execute_command(args: DurakArgs) -> Result<()> {
    match &args.command {
        Command::Tokenize(tokenize_args) => tokenize_text(tokenize_args.clone(), &args),
        Command::Normalize(normalize_args) => normalize_text(normalize_args.clone(), &args),
        Command::Lemmatize(lemmatize_args) => lemmatize_text(lemmatize_args.clone(), &args),
        Command::Syllabify(syllabify_args) => syllabify_text(syllabify_args.clone(), &args),
        Command::Version => output_result(&VersionInfo::current(), &args),
    }
}

/// Tokenize text.
fn tokenize_text(args: TokenizeArgs, cli_args: &DurakArgs) -> Result<()> {
    let input = get_text(args.text)?;
    let tokenizer = TurkishTokenizer::new()?;
    let tokens = if args.normalized {
        tokenizer.tokenize_normalized(&input)
    } else {
        tokenizer.tokenize_with_offsets(&input)
    };
    log::info!("Tokenized {} characters into {} tokens", input.chars().count(), tokens.len());

    if args.offsets {
        let result = OffsetTokenList {
            tokens: tokens
                .into_iter()
                .map(|token| OffsetToken {
                    text: token.text,
                    start: token.start_offset,
                    end: token.end_offset,
                })
                .collect(),
        };
        output_result(&result, cli_args)
    } else {
        let result = TokenList {
            tokens: tokens.into_iter().map(|token| token.text).collect(),
        };
        output_result(&result, cli_args)
    }
}

/// Normalize text.
fn normalize_text(args: NormalizeArgs, cli_args: &DurakArgs) -> Result<()> {
    let input = get_text(args.text)?;
    let normalized = normalize(&input, !args.keep_case, !args.no_turkish_i);
    output_result(
        &NormalizationResult {
            original: input,
            normalized,
        },
        cli_args,
    )
}

/// Lemmatize every word of the text.
fn lemmatize_text(args: LemmatizeArgs, cli_args: &DurakArgs) -> Result<()> {
    let strategy: LemmaStrategy = args.strategy.parse()?;
    let config = LemmaEngineConfig {
        strategy,
        stripper: StripperConfig {
            strict: args.strict,
            min_root_length: args.min_root_length,
            check_harmony: !args.no_harmony,
        },
        collect_metrics: args.metrics,
    };
    let engine = LemmaEngine::turkish(config)?;

    let input = get_text(args.text)?;
    let words = words_of(&input)?;
    let lemmas = engine.lemmatize_batch(&words);

    let result = LemmaResults {
        strategy: engine.strategy().to_string(),
        lemmas: words
            .into_iter()
            .zip(lemmas)
            .map(|(word, lemma)| LemmaEntry { word, lemma })
            .collect(),
    };
    output_result(&result, cli_args)?;

    if args.metrics {
        eprintln!("{}", engine.metrics()?);
    }
    Ok(())
}

/// Syllabify every word of the text.
fn syllabify_text(args: SyllabifyArgs, cli_args: &DurakArgs) -> Result<()> {
    let input = get_text(args.text)?;
    let syllabifier = Syllabifier::new();
    let result = SyllableResults {
        words: words_of(&input)?
            .into_iter()
            .map(|word| SyllableEntry {
                info: syllabifier.analyze(&word),
                word,
            })
            .collect(),
    };
    output_result(&result, cli_args)
}

/// Word and compound tokens of `input`, in order.
fn words_of(input: &str) -> Result<Vec<String>> {
    let tokenizer = TurkishTokenizer::new()?;
    Ok(tokenizer
        .tokenize_with_offsets(input)
        .into_iter()
        .filter(|token| matches!(token.token_type, TokenType::Word | TokenType::Compound))
        .map(|token| token.text)
        .collect())
}

/// Get text from the argument or from piped stdin.
fn get_text(text: Option<String>) -> Result<String> {
    match text {
        Some(text) => Ok(text),
        None => read_stdin(),
    }
}

fn read_stdin() -> Result<String> {
    let stdin = io::stdin();
    if stdin.is_terminal() {
        return Err(DurakError::other(
            "No text provided. Provide text as argument or pipe via stdin.",
        ));
    }

    let mut buffer = String::new();
    stdin
        .lock()
        .read_to_string(&mut buffer)
        .context("Failed to read stdin")?;
    Ok(buffer.trim_end().to_string())
}
