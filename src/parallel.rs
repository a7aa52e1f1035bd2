//! Parallel processing configuration
//!
//! The pixel scan runs on Rayon's global thread pool; this module holds the
//! small configuration layer the CLI uses to size it.

use crate::errors::{IceSeasonError, Result};
use rayon::ThreadPoolBuilder;

/// Thread count configuration for the scan
#[derive(Debug, Clone, Default)]
pub struct ParallelConfig {
    pub num_threads: Option<usize>,
}

impl ParallelConfig {
    /// Use Rayon's default thread pool sizing.
    #[must_use]
    pub fn new_default() -> Self {
        Self { num_threads: None }
    }

    /// Use a specific number of threads.
    #[must_use]
    pub fn with_threads(num_threads: usize) -> Self {
        Self {
            num_threads: Some(num_threads),
        }
    }

    /// Use every available CPU core.
    #[must_use]
    pub fn all_cores() -> Self {
        Self {
            num_threads: Some(num_cpus::get()),
        }
    }

    /// Set up the global Rayon thread pool with this configuration.
    ///
    /// # Errors
    ///
    /// Returns `ThreadPoolError` if the global pool was already initialized
    /// with a different configuration.
    pub fn setup_global_pool(&self) -> Result<()> {
        if let Some(num_threads) = self.num_threads {
            ThreadPoolBuilder::new()
                .num_threads(num_threads)
                .build_global()
                .map_err(|e| {
                    IceSeasonError::ThreadPoolError(format!(
                        "Failed to initialize thread pool with {} threads: {}",
                        num_threads, e
                    ))
                })?;
        }
        Ok(())
    }

    /// Number of threads Rayon is currently using.
    #[must_use]
    pub fn current_threads(&self) -> usize {
        rayon::current_num_threads()
    }
}
