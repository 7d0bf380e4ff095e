// Knobs for a single draw: how many workers the caller asks for, and the
// ceiling that stands in for "hardware concurrency".

use std::num::NonZeroUsize;
use std::thread;

use crate::error::{Error, Result};

/// Environment variable that pins the worker ceiling (a positive integer).
pub const MAX_WORKERS_ENV: &str = "NOSYNC_FRAME_MAX_WORKERS";

/// Upper bound on the effective worker count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WorkerLimit {
    /// Whatever the platform reports as available parallelism (at least 1).
    #[default]
    Hardware,
    /// A fixed ceiling, e.g. to exercise multi-worker draws on a small machine.
    Fixed(NonZeroUsize),
}

impl WorkerLimit {
    pub fn resolve(self) -> usize {
        match self {
            WorkerLimit::Hardware => hardware_concurrency(),
            WorkerLimit::Fixed(n) => n.get(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawOptions {
    /// Requested worker count, calling thread included. 0 is treated as 1.
    pub workers: usize,
    pub max_workers: WorkerLimit,
}

impl Default for DrawOptions {
    fn default() -> Self {
        Self { workers: 1, max_workers: WorkerLimit::Hardware }
    }
}

impl DrawOptions {
    pub fn with_workers(workers: usize) -> Self {
        Self { workers, ..Self::default() }
    }

    pub fn max_workers(mut self, limit: WorkerLimit) -> Self {
        self.max_workers = limit;
        self
    }

    /// Options for `workers`, with the ceiling taken from
    /// [`MAX_WORKERS_ENV`] when it is set.
    pub fn from_env(workers: usize) -> Result<Self> {
        Self::from_lookup(workers, |key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(workers: usize, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let max_workers = match lookup(MAX_WORKERS_ENV) {
            None => WorkerLimit::Hardware,
            Some(raw) => raw
                .trim()
                .parse::<NonZeroUsize>()
                .map(WorkerLimit::Fixed)
                .map_err(|e| {
                    Error::InvalidConfig(format!("{MAX_WORKERS_ENV}={raw:?}: {e}"))
                })?,
        };
        Ok(Self { workers, max_workers })
    }
}

/// Logical cores the runtime believes are available; 1 if unknown.
pub fn hardware_concurrency() -> usize {
    thread::available_parallelism().map(NonZeroUsize::get).unwrap_or(1)
}
