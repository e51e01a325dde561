//! Command line argument parsing for the Lexis CLI using clap.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};

use crate::error::Result;
use crate::search::SearchConfig;

/// Lexis - lexical lookups over a Latin dictionary
#[derive(Parser, Debug, Clone)]
#[command(name = "lexis")]
#[command(about = "Search a Latin dictionary corpus by form or definition")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct LexisArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to the corpus JSON file
    #[arg(
        short,
        long,
        value_name = "CORPUS_FILE",
        env = "LEXIS_CORPUS",
        default_value = "LexisWords.pretty.json"
    )]
    pub corpus: PathBuf,

    /// Search configuration file (JSON)
    #[arg(long, value_name = "CONFIG_FILE", env = "LEXIS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Number of search threads
    #[arg(short, long)]
    pub threads: Option<usize>,

    /// Scan on the calling thread only
    #[arg(long)]
    pub sequential: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "json")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl LexisArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }

    /// The search configuration: the config file if given, otherwise the
    /// defaults, with command line flags applied on top.
    pub fn search_config(&self) -> Result<SearchConfig> {
        let mut config = match &self.config {
            Some(path) => SearchConfig::from_file(path)
                .with_context(|| format!("Failed to load config from {}", path.display()))?,
            None => SearchConfig::default(),
        };

        if let Some(threads) = self.threads {
            config = config.with_thread_pool_size(threads);
        }
        if self.sequential {
            config = config.with_parallel(false);
        }

        config.validate()?;
        Ok(config)
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// List every word in the corpus
    List,

    /// Words with a form starting with the term
    #[command(name = "starting-with")]
    StartingWith(TermArgs),

    /// Words with a form containing the term
    Containing(TermArgs),

    /// Words with a definition containing the term
    #[command(name = "containing-in-definition")]
    ContainingInDefinition(TermArgs),

    /// A random word
    Random,

    /// Show corpus statistics
    Stats,
}

/// Arguments for term searches
#[derive(Parser, Debug, Clone)]
pub struct TermArgs {
    /// Search term (case-sensitive)
    #[arg(value_name = "TERM")]
    pub term: Option<String>,
}

impl TermArgs {
    /// The term, with a missing term treated as empty.
    pub fn term(&self) -> &str {
        self.term.as_deref().unwrap_or_default()
    }
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LexisError;

    #[test]
    fn test_parse_term_search() {
        let args = LexisArgs::parse_from([
            "lexis",
            "--corpus",
            "words.json",
            "starting-with",
            "am",
        ]);

        assert_eq!(args.corpus, PathBuf::from("words.json"));
        match &args.command {
            Command::StartingWith(term_args) => assert_eq!(term_args.term(), "am"),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_missing_term_is_empty() {
        let args = LexisArgs::parse_from(["lexis", "-c", "words.json", "containing"]);
        match &args.command {
            Command::Containing(term_args) => assert_eq!(term_args.term(), ""),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_verbosity() {
        let args = LexisArgs::parse_from(["lexis", "-c", "w.json", "list"]);
        assert_eq!(args.verbosity(), 1);

        let args = LexisArgs::parse_from(["lexis", "-c", "w.json", "-vvv", "list"]);
        assert_eq!(args.verbosity(), 3);

        let args = LexisArgs::parse_from(["lexis", "-c", "w.json", "-vv", "-q", "list"]);
        assert_eq!(args.verbosity(), 0);
    }

    #[test]
    fn test_search_config_overrides() {
        let args = LexisArgs::parse_from([
            "lexis",
            "-c",
            "w.json",
            "--threads",
            "2",
            "--sequential",
            "random",
        ]);
        let config = args.search_config().unwrap();

        assert_eq!(config.thread_pool_size, Some(2));
        assert!(!config.parallel);
    }

    #[test]
    fn test_config_file_error_names_the_file() {
        let args = LexisArgs::parse_from([
            "lexis",
            "-c",
            "w.json",
            "--config",
            "/nonexistent/lexis.json",
            "list",
        ]);

        match args.search_config() {
            Err(LexisError::Anyhow(e)) => {
                assert!(e.to_string().contains("/nonexistent/lexis.json"));
                assert!(matches!(
                    e.downcast_ref::<LexisError>(),
                    Some(LexisError::Io(_))
                ));
            }
            other => panic!("unexpected result {other:?}"),
        }
    }

    #[test]
    fn test_search_config_rejects_zero_threads() {
        let args = LexisArgs::parse_from(["lexis", "-c", "w.json", "-t", "0", "list"]);
        assert!(args.search_config().is_err());
    }
}
