//! Command implementations for the Lexis CLI.

use std::io::{self, Write};
use std::sync::Arc;

use log::info;

use crate::cli::args::*;
use crate::cli::output::*;
use crate::corpus::Corpus;
use crate::error::Result;
use crate::search::SearchEngine;
use crate::word::WordRecord;

/// Execute a CLI command, writing to standard output.
pub fn execute_command(args: LexisArgs) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_command(&args, &mut out)
}

/// Load the corpus named by `args`, run its command and write the result to
/// `out`.
pub fn run_command<W: Write>(args: &LexisArgs, out: &mut W) -> Result<()> {
    let engine = open_engine(args)?;

    match &args.command {
        Command::List => output_words(&list_words(&engine), args, out),
        Command::StartingWith(term_args) => {
            let words = engine.search_by_form_prefix(term_args.term())?;
            output_words(&words, args, out)
        }
        Command::Containing(term_args) => {
            let words = engine.search_by_form_contains(term_args.term())?;
            output_words(&words, args, out)
        }
        Command::ContainingInDefinition(term_args) => {
            let words = engine.search_by_definition_contains(term_args.term())?;
            output_words(&words, args, out)
        }
        Command::Random => output_word(engine.pick_random()?, args, out),
        Command::Stats => output_stats(&CorpusStats::from_corpus(engine.corpus()), args, out),
    }
}

/// Every word, with all encodings computed up front on the worker pool.
fn list_words(engine: &SearchEngine) -> Vec<&WordRecord> {
    engine.warm_cache();
    engine.list_all().iter().collect()
}

fn open_engine(args: &LexisArgs) -> Result<SearchEngine> {
    let config = args.search_config()?;
    let corpus = Corpus::open(&args.corpus)?;
    info!(
        "Loaded {} words from {}",
        corpus.len(),
        args.corpus.display()
    );

    SearchEngine::new(Arc::new(corpus), config)
}
