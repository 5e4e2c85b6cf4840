use super::Runner;
use super::builder::{RunnerBuilder, RunnerConfig};
use super::collect::{Deadline, collect};
use super::dispatch::dispatch;
use crate::error::AggregatedError;
use crate::task::Task;

use std::sync::Arc;
use std::time::Duration;

use crossbeam::channel;
use tracing::debug;

/// Runs tasks concurrently, one thread per task.
///
/// A `ConcurrentRunner` holds only its configuration. It can be cloned,
/// shared, and reused for any number of runs; runs never interfere with
/// each other.
///
/// # Examples
///
/// ```rust,ignore
/// let runner = ConcurrentRunner::new().with_timeout(Duration::from_secs(2));
///
/// runner.run([fetch_users, fetch_orders])?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConcurrentRunner {
    config: RunnerConfig,
}

impl ConcurrentRunner {
    /// Creates a runner without a deadline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a builder for a runner with non-default settings.
    pub fn builder() -> RunnerBuilder {
        RunnerBuilder::new()
    }

    pub(crate) fn from_config(config: RunnerConfig) -> Self {
        Self { config }
    }

    /// Returns a copy of this runner that stops waiting after `timeout`.
    ///
    /// `self` is left untouched.
    pub fn with_timeout(&self, timeout: Duration) -> Self {
        let mut config = self.config.clone();
        config.timeout = Some(timeout);

        Self { config }
    }

    /// The configured deadline, if any.
    pub fn timeout(&self) -> Option<Duration> {
        self.config.timeout
    }

    pub fn config(&self) -> &RunnerConfig {
        &self.config
    }

    /// Runs every task concurrently and blocks until all of them have
    /// finished or the deadline has elapsed.
    ///
    /// One task failing does not stop the others. Every failure (returned
    /// error or panic) ends up in the returned [`AggregatedError`]; if the
    /// deadline elapses, the error also records the timeout.
    ///
    /// A task that appears several times is executed once per appearance.
    ///
    /// # Timeouts
    ///
    /// The deadline only bounds the waiting. Tasks that are still running
    /// when it elapses keep running on their own threads after `run` has
    /// returned, and their outcomes are discarded.
    pub fn run<I, T>(&self, tasks: I) -> Result<(), AggregatedError>
    where
        I: IntoIterator<Item = Arc<T>>,
        T: Task + ?Sized + 'static,
    {
        let tasks: Vec<Arc<T>> = tasks.into_iter().collect();
        let dispatched = tasks.len();

        if dispatched == 0 {
            return Ok(());
        }

        debug!(tasks = dispatched, timeout = ?self.config.timeout, "dispatching tasks");

        let deadline = Deadline::arm(self.config.timeout);

        // One slot per task, so reporting an outcome never blocks.
        let (sender, receiver) = channel::bounded(dispatched);

        for task in tasks {
            dispatch(task, &self.config, &sender);
        }

        // Only the task threads may hold senders while collecting.
        drop(sender);

        let aggregate = collect(&receiver, &deadline, dispatched);

        debug!(failures = aggregate.len(), "run finished");

        aggregate.into_result()
    }
}

impl Runner for ConcurrentRunner {
    fn run<I, T>(&self, tasks: I) -> Result<(), AggregatedError>
    where
        I: IntoIterator<Item = Arc<T>>,
        T: Task + ?Sized + 'static,
    {
        ConcurrentRunner::run(self, tasks)
    }
}
