//! Output formatting for CLI commands.

use std::collections::BTreeMap;
use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::cli::args::{LexisArgs, OutputFormat};
use crate::corpus::Corpus;
use crate::error::Result;
use crate::word::WordRecord;

/// Corpus statistics.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CorpusStats {
    pub total_words: usize,
    pub skipped_entries: usize,
    pub untyped_words: usize,
    pub without_supplemental: usize,
    pub categories: BTreeMap<String, usize>,
}

impl CorpusStats {
    pub fn from_corpus(corpus: &Corpus) -> Self {
        let mut categories = BTreeMap::new();
        let mut untyped_words = 0;

        for word in corpus {
            match word.word_type() {
                Some(word_type) => {
                    *categories
                        .entry(word_type.category().to_string())
                        .or_insert(0) += 1
                }
                None => untyped_words += 1,
            }
        }

        CorpusStats {
            total_words: corpus.len(),
            skipped_entries: corpus.skipped(),
            untyped_words,
            without_supplemental: corpus
                .iter()
                .filter(|word| word.supplemental().is_none())
                .count(),
            categories,
        }
    }
}

/// Output a list of words in the specified format.
pub fn output_words<W: Write>(words: &[&WordRecord], args: &LexisArgs, out: &mut W) -> Result<()> {
    match args.output_format {
        OutputFormat::Json => output_json(words, args, out),
        OutputFormat::Human => {
            for word in words {
                writeln!(out, "{}", format_word(word))?;
            }
            if args.verbosity() > 0 {
                writeln!(out)?;
                writeln!(out, "{} words", words.len())?;
            }
            Ok(())
        }
    }
}

/// Output a single word in the specified format.
pub fn output_word<W: Write>(word: &WordRecord, args: &LexisArgs, out: &mut W) -> Result<()> {
    match args.output_format {
        OutputFormat::Json => output_json(word, args, out),
        OutputFormat::Human => {
            writeln!(out, "{}", format_word(word))?;
            Ok(())
        }
    }
}

/// Output corpus statistics in the specified format.
pub fn output_stats<W: Write>(stats: &CorpusStats, args: &LexisArgs, out: &mut W) -> Result<()> {
    match args.output_format {
        OutputFormat::Json => output_json(stats, args, out),
        OutputFormat::Human => {
            writeln!(out, "Corpus Statistics:")?;
            writeln!(out, "══════════════════")?;
            writeln!(out, "Total words: {}", stats.total_words)?;
            writeln!(out, "Skipped entries: {}", stats.skipped_entries)?;
            writeln!(out, "Words without a word type: {}", stats.untyped_words)?;
            writeln!(
                out,
                "Words without supplemental information: {}",
                stats.without_supplemental
            )?;

            if !stats.categories.is_empty() {
                writeln!(out)?;
                writeln!(out, "Categories:")?;
                writeln!(out, "───────────")?;
                for (category, count) in &stats.categories {
                    writeln!(out, "  {category}: {count}")?;
                }
            }
            Ok(())
        }
    }
}

/// Output in JSON format.
fn output_json<T: Serialize + ?Sized, W: Write>(
    result: &T,
    args: &LexisArgs,
    out: &mut W,
) -> Result<()> {
    if args.pretty {
        serde_json::to_writer_pretty(&mut *out, result)?;
    } else {
        serde_json::to_writer(&mut *out, result)?;
    }
    writeln!(out)?;
    Ok(())
}

/// One line per word: forms, category, then definitions.
fn format_word(word: &WordRecord) -> String {
    let forms = word.forms().join(", ");
    let word_type = word
        .word_type()
        .map(|word_type| word_type.to_string())
        .unwrap_or_else(|| "-".to_string());
    let definitions = word
        .definitions()
        .iter()
        .map(|definition| definition.terms().join(", "))
        .collect::<Vec<_>>()
        .join("; ");

    format!("{forms} [{word_type}]: {definitions}")
}
