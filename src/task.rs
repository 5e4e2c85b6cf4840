//! The unit of work executed by a runner.
//!
//! A task exposes a single synchronous operation, [`Task::exec`], which runs
//! to completion and either succeeds or returns an error. The runner knows
//! nothing else about it.
//!
//! Tasks are shared with the runner as `Arc<T>`: each dispatched execution
//! gets its own clone of the handle, so any state a task produces stays
//! reachable by the caller once the run is over.
//!
//! ```rust,ignore
//! use concur::{BoxError, Task};
//! use std::sync::Mutex;
//!
//! struct Fetch {
//!     body: Mutex<Option<String>>,
//! }
//!
//! impl Task for Fetch {
//!     fn exec(&self) -> Result<(), BoxError> {
//!         *self.body.lock().unwrap() = Some("hello".to_string());
//!         Ok(())
//!     }
//! }
//! ```

/// Boxed error returned by a task.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Anything that can be executed by a runner.
///
/// `exec` is called once per time the task appears in the batch handed to
/// the runner, possibly from several threads at the same time when the same
/// `Arc` appears more than once. Implementations that mutate state must use
/// interior mutability that is safe under concurrent access.
pub trait Task: Send + Sync {
    /// Runs the task to completion on the calling thread.
    fn exec(&self) -> Result<(), BoxError>;
}

impl<F> Task for F
where
    F: Fn() -> Result<(), BoxError> + Send + Sync,
{
    fn exec(&self) -> Result<(), BoxError> {
        self()
    }
}
