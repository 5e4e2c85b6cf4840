use super::outcome::Outcome;
use crate::error::{AggregatedError, TaskError};

use std::time::{Duration, Instant};

use crossbeam::channel::{self, Receiver, select};
use tracing::{error, trace, warn};

/// The point in time after which a run stops waiting.
///
/// Armed when the run starts. Without a timeout the channel never fires.
pub(crate) struct Deadline {
    timeout: Option<Duration>,
    fired: Receiver<Instant>,
}

impl Deadline {
    pub(crate) fn arm(timeout: Option<Duration>) -> Self {
        let fired = match timeout {
            Some(timeout) => channel::after(timeout),
            None => channel::never(),
        };

        Self { timeout, fired }
    }
}

/// What woke the collection loop.
enum Woken {
    Outcome(Outcome),
    Disconnected,
    Deadline,
}

/// Waits for `dispatched` outcomes or for the deadline, whichever comes
/// first, and merges every failure into one aggregate.
///
/// Returning on the deadline does not wait for the outstanding outcomes.
/// Their senders find the channel closed and drop them.
pub(crate) fn collect(
    outcomes: &Receiver<Outcome>,
    deadline: &Deadline,
    dispatched: usize,
) -> AggregatedError {
    let mut aggregate = AggregatedError::new();
    let mut pending = dispatched;

    while pending > 0 {
        let woken = select! {
            recv(outcomes) -> outcome => match outcome {
                Ok(outcome) => Woken::Outcome(outcome),
                Err(_) => Woken::Disconnected,
            },
            recv(deadline.fired) -> _ => Woken::Deadline,
        };

        match woken {
            Woken::Outcome(outcome) => {
                pending -= 1;

                match outcome.into_error() {
                    Some(err) => {
                        trace!(error = %err, pending, "task failed");
                        aggregate.push(err);
                    }
                    None => trace!(pending, "task succeeded"),
                }
            }
            Woken::Disconnected => {
                error!(pending, "outcome channel closed with tasks outstanding");
                aggregate.push(TaskError::Lost { pending });
                break;
            }
            Woken::Deadline => {
                let timeout = deadline.timeout.unwrap_or_default();

                warn!(pending, ?timeout, "deadline elapsed, no longer waiting for tasks");
                aggregate.push(TaskError::TimedOut { timeout });
                break;
            }
        }
    }

    aggregate
}
