//! Output formatting for CLI commands.
//!
//! Every command produces a serializable result. JSON mode pretty-prints it;
//! plain mode prints one record per line, tab-separated where a record has
//! several fields.

use std::io::{self, Write};

use serde::Serialize;

use crate::analysis::morphology::syllable::SyllableInfo;
use crate::cli::args::DurakArgs;
use crate::error::Result;

/// Plain-text rendering of a command result.
pub trait PlainOutput {
    fn write_plain(&self, out: &mut dyn Write) -> io::Result<()>;
}

/// Result structure for tokenization without offsets.
#[derive(Debug, Serialize)]
pub struct TokenList {
    pub tokens: Vec<String>,
}

/// A token with its character span.
#[derive(Debug, Serialize)]
pub struct OffsetToken {
    pub text: String,
    pub start: usize,
    pub end: usize,
}

/// Result structure for tokenization with offsets.
#[derive(Debug, Serialize)]
pub struct OffsetTokenList {
    pub tokens: Vec<OffsetToken>,
}

/// Result structure for normalization.
#[derive(Debug, Serialize)]
pub struct NormalizationResult {
    pub original: String,
    pub normalized: String,
}

#[derive(Debug, Serialize)]
pub struct LemmaEntry {
    pub word: String,
    pub lemma: String,
}

/// Result structure for lemmatization.
#[derive(Debug, Serialize)]
pub struct LemmaResults {
    pub strategy: String,
    pub lemmas: Vec<LemmaEntry>,
}

#[derive(Debug, Serialize)]
pub struct SyllableEntry {
    pub word: String,
    #[serde(flatten)]
    pub info: SyllableInfo,
}

/// Result structure for syllabification.
#[derive(Debug, Serialize)]
pub struct SyllableResults {
    pub words: Vec<SyllableEntry>,
}

/// Version and build information.
#[derive(Debug, Serialize)]
pub struct VersionInfo {
    pub durak_version: String,
    pub package_name: String,
    pub rustc_version: String,
}

impl VersionInfo {
    /// Information about this build.
    pub fn current() -> Self {
        VersionInfo {
            durak_version: env!("CARGO_PKG_VERSION").to_string(),
            package_name: env!("CARGO_PKG_NAME").to_string(),
            rustc_version: env!("DURAK_RUSTC_VERSION").to_string(),
        }
    }
}

impl PlainOutput for TokenList {
    fn write_plain(&self, out: &mut dyn Write) -> io::Result<()> {
        for token in &self.tokens {
            writeln!(out, "{token}")?;
        }
        Ok(())
    }
}

impl PlainOutput for OffsetTokenList {
    fn write_plain(&self, out: &mut dyn Write) -> io::Result<()> {
        for token in &self.tokens {
            writeln!(out, "{}\t{}\t{}", token.text, token.start, token.end)?;
        }
        Ok(())
    }
}

impl PlainOutput for NormalizationResult {
    fn write_plain(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "{}", self.normalized)
    }
}

impl PlainOutput for LemmaResults {
    fn write_plain(&self, out: &mut dyn Write) -> io::Result<()> {
        for entry in &self.lemmas {
            writeln!(out, "{}\t{}", entry.word, entry.lemma)?;
        }
        Ok(())
    }
}

impl PlainOutput for SyllableResults {
    fn write_plain(&self, out: &mut dyn Write) -> io::Result<()> {
        for entry in &self.words {
            writeln!(out, "{}\t{}", entry.word, entry.info.syllables.join("-"))?;
        }
        Ok(())
    }
}

impl PlainOutput for VersionInfo {
    fn write_plain(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Durak v{}", self.durak_version)?;
        writeln!(out, "Package: {}", self.package_name)?;
        writeln!(out, "Rustc: {}", self.rustc_version)
    }
}

/// Write `result` to stdout in the format selected by `args`.
pub fn output_result<T: Serialize + PlainOutput>(result: &T, args: &DurakArgs) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_result(result, args.json, &mut out)
}

/// Write `result` as pretty JSON or plain text.
pub fn write_result<T: Serialize + PlainOutput>(
    result: &T,
    json: bool,
    out: &mut dyn Write,
) -> Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut *out, result)?;
        writeln!(out)?;
    } else {
        result.write_plain(out)?;
    }
    out.flush()?;
    Ok(())
}
