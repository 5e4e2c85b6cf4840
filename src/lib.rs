//! # concur
//!
//! **concur** runs a batch of independent tasks in parallel and reports the
//! result of the whole batch as a single value.
//!
//! It is meant for call sites that need to "do N independent things at once
//! and know if any failed" without managing threads by hand:
//!
//! - **One thread per task**: every task runs in true parallel, with no cap on
//!   how many run at once
//! - **Every failure is kept**: returned errors and panics are collected into
//!   one [`AggregatedError`]
//! - **Optional deadline**: a run can stop waiting after a timeout, without
//!   blocking on tasks that are still running
//! - **No shared configuration**: runners are immutable values, configured
//!   through [`ConcurrentRunner::with_timeout`] or a [`RunnerBuilder`]
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use concur::{BoxError, Task};
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicU64, Ordering};
//! use std::time::Duration;
//!
//! #[derive(Default)]
//! struct Count {
//!     value: AtomicU64,
//! }
//!
//! impl Task for Count {
//!     fn exec(&self) -> Result<(), BoxError> {
//!         self.value.store(42, Ordering::SeqCst);
//!         Ok(())
//!     }
//! }
//!
//! let a = Arc::new(Count::default());
//! let b = Arc::new(Count::default());
//!
//! concur::concurrent()
//!     .with_timeout(Duration::from_secs(1))
//!     .run([a.clone(), b.clone()])?;
//!
//! assert_eq!(a.value.load(Ordering::SeqCst), 42);
//! ```
//!
//! ## Modules
//!
//! - [`runner`] — Runners, their configuration and builder
//! - [`error`] — Per-task failures and the aggregated error
//! - [`task`] — The [`Task`] trait
//!
//! ## Logging
//!
//! Runs emit [`tracing`] events (`debug` for run boundaries, `trace` per
//! task outcome, `warn` on timeouts). No subscriber is installed by this
//! crate.

mod macros;

pub mod error;
pub mod runner;
pub mod task;

pub use error::{AggregatedError, TaskError};
pub use runner::{ConcurrentRunner, Runner, RunnerBuilder, RunnerConfig, concurrent};
pub use task::{BoxError, Task};
