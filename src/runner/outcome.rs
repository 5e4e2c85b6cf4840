use crate::error::TaskError;
use crate::task::BoxError;

use std::io;

/// The result of one dispatched task, as seen by the collection loop.
///
/// Every dispatched task produces exactly one `Outcome`.
#[derive(Debug)]
pub(crate) enum Outcome {
    /// `exec` returned `Ok(())`.
    Success,

    /// `exec` returned an error.
    Failure(BoxError),

    /// `exec` panicked; the payload is already converted.
    Panicked(TaskError),

    /// The task's thread could not be started.
    SpawnFailed(io::Error),
}

impl Outcome {
    /// Converts the outcome into the error it contributes to the aggregate.
    pub(crate) fn into_error(self) -> Option<TaskError> {
        match self {
            Outcome::Success => None,
            Outcome::Failure(err) => Some(TaskError::Failed(err)),
            Outcome::Panicked(err) => Some(err),
            Outcome::SpawnFailed(err) => Some(TaskError::Spawn(err)),
        }
    }
}
