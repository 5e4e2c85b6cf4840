use super::ConcurrentRunner;

use std::time::Duration;

/// Settings applied to every run of a [`ConcurrentRunner`].
///
/// A config is a plain value: the runner keeps its own copy, so changing a
/// config after building a runner never affects that runner.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RunnerConfig {
    /// How long a run waits for its tasks. `None` waits forever.
    pub timeout: Option<Duration>,

    /// Name given to every task thread.
    pub thread_name: Option<String>,

    /// Stack size, in bytes, of every task thread. `None` uses the
    /// platform default.
    pub stack_size: Option<usize>,
}

/// Builder for configuring and creating a runner.
///
/// # Examples
///
/// ```rust,ignore
/// let runner = RunnerBuilder::new()
///     .timeout(Duration::from_secs(5))
///     .thread_name("fetch")
///     .build();
/// ```
#[derive(Debug, Clone, Default)]
pub struct RunnerBuilder {
    config: RunnerConfig,
}

impl RunnerBuilder {
    /// Creates a builder with no deadline and default thread settings.
    pub fn new() -> Self {
        Self {
            config: RunnerConfig::default(),
        }
    }

    /// Starts from an existing config.
    pub fn from_config(config: RunnerConfig) -> Self {
        Self { config }
    }

    /// Sets how long a run waits for its tasks before giving up.
    ///
    /// Tasks still running when the deadline elapses are not interrupted;
    /// the run simply stops waiting for them.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = Some(timeout);
        self
    }

    /// Names the threads tasks run on.
    ///
    /// # Panics
    ///
    /// Panics if `name` contains a NUL byte.
    pub fn thread_name(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        assert!(!name.contains('\0'), "thread_name must not contain NUL bytes");

        self.config.thread_name = Some(name);
        self
    }

    /// Sets the stack size of the threads tasks run on.
    ///
    /// # Panics
    ///
    /// Panics if `size == 0`.
    pub fn stack_size(mut self, size: usize) -> Self {
        assert!(size > 0, "stack_size must be > 0");

        self.config.stack_size = Some(size);
        self
    }

    /// Builds the runner with the configured options.
    pub fn build(self) -> ConcurrentRunner {
        ConcurrentRunner::from_config(self.config)
    }
}
