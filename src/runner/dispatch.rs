use super::builder::RunnerConfig;
use super::outcome::Outcome;
use crate::error::TaskError;
use crate::task::Task;

use std::io;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::thread;

use crossbeam::channel::Sender;
use tracing::{debug, error};

/// Starts `task` on a dedicated thread.
///
/// The thread reports exactly one [`Outcome`] through `sender` and then
/// exits. The thread is detached: nothing joins it, so a run that stops
/// waiting early leaves it to finish on its own.
///
/// If the thread cannot be spawned, the failure is reported from the
/// calling thread instead, so the task still accounts for one outcome.
pub(crate) fn dispatch<T>(task: Arc<T>, config: &RunnerConfig, sender: &Sender<Outcome>)
where
    T: Task + ?Sized + 'static,
{
    let mut builder = thread::Builder::new();

    if let Some(name) = &config.thread_name {
        // `Builder::spawn` panics on such a name instead of returning an error.
        if name.contains('\0') {
            error!(name = ?name, "thread name contains a NUL byte");

            let err = io::Error::new(
                io::ErrorKind::InvalidInput,
                "thread name must not contain NUL bytes",
            );
            let _ = sender.send(Outcome::SpawnFailed(err));
            return;
        }

        builder = builder.name(name.clone());
    }

    if let Some(size) = config.stack_size {
        builder = builder.stack_size(size);
    }

    let reporter = sender.clone();
    let spawned = builder.spawn(move || {
        let outcome = execute(&*task);

        // The receiver is gone once the run has returned (e.g. after a timeout).
        if reporter.send(outcome).is_err() {
            debug!("run already returned, discarding late task outcome");
        }
    });

    if let Err(err) = spawned {
        error!(error = %err, "failed to spawn task thread");

        // The closure never ran, so its slot in the channel is still free.
        let _ = sender.send(Outcome::SpawnFailed(err));
    }
}

/// Runs `exec`, turning a panic into an outcome instead of unwinding further.
fn execute<T>(task: &T) -> Outcome
where
    T: Task + ?Sized,
{
    match panic::catch_unwind(AssertUnwindSafe(|| task.exec())) {
        Ok(Ok(())) => Outcome::Success,
        Ok(Err(err)) => Outcome::Failure(err),
        Err(payload) => Outcome::Panicked(TaskError::from_panic(payload)),
    }
}
