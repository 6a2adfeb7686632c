//! Deadline helpers for remote operations.
//!
//! `with_timeout` bounds how long a caller waits for a pending operation;
//! `with_min_loading_time` keeps fast operations from finishing so quickly
//! that loading indicators flicker.

use std::{future::Future, time::Duration};

use thiserror::Error;

/// Deadline applied when [`TimeoutOptions`] does not override it.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const DEFAULT_TIMEOUT_MESSAGE: &str = "Operation timed out";

/// The distinguished failure produced when the deadline fires before the
/// wrapped operation settles.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct TimeoutError {
    pub message: String,
}

pub struct TimeoutOptions {
    pub timeout: Duration,
    pub timeout_message: String,
    /// Side-effect hook (logging, metrics) invoked once when the deadline
    /// fires; never invoked when the operation settles in time.
    pub on_timeout: Option<Box<dyn FnOnce() + Send>>,
}

impl Default for TimeoutOptions {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            timeout_message: DEFAULT_TIMEOUT_MESSAGE.to_string(),
            on_timeout: None,
        }
    }
}

impl TimeoutOptions {
    pub fn after(timeout: Duration) -> Self {
        Self {
            timeout,
            ..Default::default()
        }
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.timeout_message = message.into();
        self
    }

    pub fn on_timeout(mut self, hook: impl FnOnce() + Send + 'static) -> Self {
        self.on_timeout = Some(Box::new(hook));
        self
    }
}

/// Races `operation` against a timer.
///
/// If the operation settles first its outcome is propagated unchanged; the
/// only failure this function introduces is the timeout failure. When the
/// timer wins the losing branch is dropped, which also aborts an in-flight
/// reqwest request rather than leaving it running to completion.
pub async fn with_timeout<F, T, E>(operation: F, options: TimeoutOptions) -> Result<T, E>
where
    F: Future<Output = Result<T, E>>,
    E: From<TimeoutError>,
{
    let TimeoutOptions {
        timeout,
        timeout_message,
        on_timeout,
    } = options;

    tokio::select! {
        // The operation wins a simultaneous wake-up.
        biased;
        outcome = operation => outcome,
        _ = tokio::time::sleep(timeout) => {
            if let Some(hook) = on_timeout {
                hook();
            }
            Err(TimeoutError {
                message: timeout_message,
            }
            .into())
        }
    }
}

/// Returns the operation's output, but never before `min` has elapsed.
/// Success/failure content is untouched; only the earliest settle time moves.
pub async fn with_min_loading_time<F: Future>(operation: F, min: Duration) -> F::Output {
    let (outcome, ()) = tokio::join!(operation, tokio::time::sleep(min));
    outcome
}

#[cfg(test)]
#[path = "tests/timeout_tests.rs"]
mod tests;
