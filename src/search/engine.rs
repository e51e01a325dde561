//! The search engine: read-only queries over a loaded corpus.

use std::sync::Arc;
use std::time::Instant;

use log::{debug, info, warn};
use rand::Rng;
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};

use crate::corpus::Corpus;
use crate::error::{LexisError, Result};
use crate::search::config::SearchConfig;
use crate::search::query::WordQuery;
use crate::word::WordRecord;

/// Executes lookups over an immutable [`Corpus`].
///
/// Scans over large corpora are partitioned across a dedicated rayon pool.
/// Results always come back in corpus order, however the work was split.
pub struct SearchEngine {
    /// The corpus being searched.
    corpus: Arc<Corpus>,

    /// Configuration for the engine.
    config: SearchConfig,

    /// Thread pool for parallel scans.
    thread_pool: Arc<ThreadPool>,
}

impl SearchEngine {
    /// Create a new search engine over `corpus`.
    pub fn new(corpus: Arc<Corpus>, config: SearchConfig) -> Result<Self> {
        config.validate()?;

        let thread_pool = ThreadPoolBuilder::new()
            .num_threads(config.threads())
            .thread_name(|i| format!("lexis-search-{i}"))
            .build()
            .map_err(|e| LexisError::internal(format!("Failed to create thread pool: {e}")))?;

        debug!(
            "Search engine ready over {} words with {} threads",
            corpus.len(),
            thread_pool.current_num_threads()
        );

        Ok(Self {
            corpus,
            config,
            thread_pool: Arc::new(thread_pool),
        })
    }

    /// Create an engine with the default configuration.
    pub fn with_corpus(corpus: Corpus) -> Result<Self> {
        Self::new(Arc::new(corpus), SearchConfig::default())
    }

    pub fn corpus(&self) -> &Arc<Corpus> {
        &self.corpus
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Every word, in corpus order.
    pub fn list_all(&self) -> &[WordRecord] {
        info!("Listing all {} words", self.corpus.len());
        self.corpus.words()
    }

    /// Words with a form starting with `term`.
    pub fn search_by_form_prefix(&self, term: &str) -> Result<Vec<&WordRecord>> {
        self.search(&WordQuery::form_prefix(term))
    }

    /// Words with a form containing `term`.
    pub fn search_by_form_contains(&self, term: &str) -> Result<Vec<&WordRecord>> {
        self.search(&WordQuery::form_contains(term))
    }

    /// Words with a definition term containing `term`.
    pub fn search_by_definition_contains(&self, term: &str) -> Result<Vec<&WordRecord>> {
        self.search(&WordQuery::definition_contains(term))
    }

    /// Run a term query. Empty terms are rejected before any scan.
    pub fn search(&self, query: &WordQuery) -> Result<Vec<&WordRecord>> {
        if let Err(e) = query.validate() {
            warn!("Rejected search {query:?}: {e}");
            return Err(e);
        }

        let start = Instant::now();
        let matches = self.scan(|word| query.matches(word));

        info!(
            "Found {} words {} in {}ms",
            matches.len(),
            query,
            start.elapsed().as_millis()
        );

        Ok(matches)
    }

    /// A word chosen uniformly at random.
    pub fn pick_random(&self) -> Result<&WordRecord> {
        self.pick_random_with(&mut rand::rng())
    }

    /// A word chosen uniformly at random using `rng`.
    pub fn pick_random_with<R: Rng>(&self, rng: &mut R) -> Result<&WordRecord> {
        let words = self.corpus.words();
        if words.is_empty() {
            warn!("Random word requested from an empty corpus");
            return Err(LexisError::EmptyCorpus);
        }

        let index = rng.random_range(0..words.len());
        debug!("Picked word #{index} of {}", words.len());
        Ok(&words[index])
    }

    /// Compute and cache the JSON form of every word up front.
    pub fn warm_cache(&self) {
        let start = Instant::now();
        let words = self.corpus.words();

        if self.is_parallel() {
            self.thread_pool.install(|| {
                words.par_iter().for_each(|word| {
                    word.to_json();
                })
            });
        } else {
            words.iter().for_each(|word| {
                word.to_json();
            });
        }

        info!(
            "Encoded {} words in {}ms",
            words.len(),
            start.elapsed().as_millis()
        );
    }

    /// Whether scans over this corpus run on the worker pool.
    pub fn is_parallel(&self) -> bool {
        self.config.parallel
            && self.thread_pool.current_num_threads() > 1
            && self.corpus.len() >= self.config.parallel_threshold
    }

    fn scan<F>(&self, predicate: F) -> Vec<&WordRecord>
    where
        F: Fn(&WordRecord) -> bool + Sync,
    {
        let words = self.corpus.words();

        if self.is_parallel() {
            self.thread_pool
                .install(|| words.par_iter().filter(|word| predicate(word)).collect())
        } else {
            words.iter().filter(|word| predicate(word)).collect()
        }
    }
}

impl std::fmt::Debug for SearchEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchEngine")
            .field("words", &self.corpus.len())
            .field("config", &self.config)
            .field("threads", &self.thread_pool.current_num_threads())
            .finish()
    }
}
