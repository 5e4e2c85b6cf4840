//! Runners.
//!
//! This module contains the machinery that executes a batch of tasks:
//! - dispatching each task onto its own thread,
//! - turning panics into errors at the thread boundary,
//! - collecting exactly one outcome per task, bounded by an optional deadline,
//! - merging the failures into a single [`AggregatedError`].

mod builder;
mod collect;
mod concurrent;
mod dispatch;
mod outcome;

pub use builder::{RunnerBuilder, RunnerConfig};
pub use concurrent::ConcurrentRunner;

use crate::error::AggregatedError;
use crate::task::Task;

use std::sync::Arc;

/// Anything capable of running a batch of tasks.
pub trait Runner {
    /// Runs `tasks`, returning every failure as one error.
    fn run<I, T>(&self, tasks: I) -> Result<(), AggregatedError>
    where
        I: IntoIterator<Item = Arc<T>>,
        T: Task + ?Sized + 'static;
}

/// Creates a [`ConcurrentRunner`] without a deadline.
pub fn concurrent() -> ConcurrentRunner {
    ConcurrentRunner::new()
}
