//! Configuration for the search engine.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{LexisError, Result};

/// Configuration for [`SearchEngine`](crate::search::SearchEngine).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Whether scans may be split across the worker pool.
    pub parallel: bool,

    /// Corpora smaller than this are scanned on the calling thread even when
    /// `parallel` is set.
    pub parallel_threshold: usize,

    /// Worker pool size.
    /// If None, uses the number of CPU cores.
    pub thread_pool_size: Option<usize>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            parallel: true,
            parallel_threshold: 4096,
            thread_pool_size: None,
        }
    }
}

impl SearchConfig {
    /// A configuration that never leaves the calling thread.
    pub fn sequential() -> Self {
        Self {
            parallel: false,
            thread_pool_size: Some(1),
            ..Default::default()
        }
    }

    /// Read a configuration from a JSON file. Missing fields take their
    /// default values.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        let config: SearchConfig = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    /// Enable or disable parallel scans.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Set the corpus size at which scans go parallel.
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// Set the worker pool size.
    pub fn with_thread_pool_size(mut self, size: usize) -> Self {
        self.thread_pool_size = Some(size);
        self
    }

    /// Effective number of worker threads.
    pub fn threads(&self) -> usize {
        self.thread_pool_size.unwrap_or_else(num_cpus::get)
    }

    pub fn validate(&self) -> Result<()> {
        if self.thread_pool_size == Some(0) {
            return Err(LexisError::invalid_config(
                "thread_pool_size must be greater than zero",
            ));
        }
        Ok(())
    }
}
