//! Errors reported by a run.
//!
//! Every failure observed while running a batch becomes one [`TaskError`].
//! The runner returns them together as an [`AggregatedError`], in the order
//! they arrived.

use crate::task::BoxError;

use std::any::Any;
use std::fmt;
use std::io;
use std::slice;
use std::time::Duration;

use thiserror::Error;

/// A single failure observed during a run.
#[derive(Debug, Error)]
pub enum TaskError {
    /// The task returned an error.
    #[error(transparent)]
    Failed(BoxError),

    /// The task panicked. The payload has been converted into an error.
    #[error("task panicked: {0}")]
    Panicked(#[source] BoxError),

    /// The deadline elapsed before every task reported back.
    #[error("timed out waiting for task(s) to complete")]
    TimedOut { timeout: Duration },

    /// The thread for a task could not be spawned, so the task never ran.
    #[error("failed to spawn task thread: {0}")]
    Spawn(#[source] io::Error),

    /// Every reporter went away while outcomes were still outstanding.
    ///
    /// Task threads report from inside a `catch_unwind` boundary, so this
    /// only shows up if a thread dies outside of it.
    #[error("lost track of {pending} task(s) before they reported")]
    Lost { pending: usize },
}

impl TaskError {
    /// Converts a panic payload caught with `catch_unwind` into an error.
    ///
    /// A payload that already is an error is kept as-is, string payloads
    /// (the output of `panic!` with a message) become an error with that
    /// text, and anything else gets a generic message.
    pub(crate) fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        let payload = match payload.downcast::<BoxError>() {
            Ok(err) => return Self::Panicked(*err),
            Err(payload) => payload,
        };

        let payload = match payload.downcast::<String>() {
            Ok(message) => return Self::Panicked((*message).into()),
            Err(payload) => payload,
        };

        match payload.downcast::<&'static str>() {
            Ok(message) => Self::Panicked((*message).into()),
            Err(_) => Self::Panicked("opaque panic payload".into()),
        }
    }

    /// Returns `true` if this entry records the run deadline elapsing.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::TimedOut { .. })
    }

    /// Returns `true` if this entry records a panicking task.
    pub fn is_panic(&self) -> bool {
        matches!(self, Self::Panicked(_))
    }
}

/// Every failure collected during one run.
///
/// The list is in arrival order, which follows the completion order of the
/// tasks and is not stable between runs. A runner never returns an empty
/// `AggregatedError`: a run without failures returns `Ok(())`.
#[derive(Debug, Default, Error)]
#[error("errors occurred during task execution: {}", Joined(.errors))]
pub struct AggregatedError {
    errors: Vec<TaskError>,
}

impl AggregatedError {
    pub(crate) fn new() -> Self {
        Self { errors: Vec::new() }
    }

    pub(crate) fn push(&mut self, err: TaskError) {
        self.errors.push(err);
    }

    /// `Ok(())` when nothing was collected, the aggregate otherwise.
    pub(crate) fn into_result(self) -> Result<(), Self> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }

    /// The collected failures, in arrival order.
    pub fn errors(&self) -> &[TaskError] {
        &self.errors
    }

    /// Consumes the aggregate, returning the collected failures.
    pub fn into_errors(self) -> Vec<TaskError> {
        self.errors
    }

    /// Number of collected failures.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, TaskError> {
        self.errors.iter()
    }

    /// Returns `true` if the run gave up waiting because of its deadline.
    pub fn timed_out(&self) -> bool {
        self.errors.iter().any(TaskError::is_timeout)
    }
}

impl IntoIterator for AggregatedError {
    type Item = TaskError;
    type IntoIter = std::vec::IntoIter<TaskError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a> IntoIterator for &'a AggregatedError {
    type Item = &'a TaskError;
    type IntoIter = slice::Iter<'a, TaskError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

/// Renders a list of errors separated by `", "`.
struct Joined<'a>(&'a [TaskError]);

impl fmt::Display for Joined<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, err) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{err}")?;
        }
        Ok(())
    }
}
