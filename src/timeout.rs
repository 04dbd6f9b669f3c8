//! Wall-clock bound around a synchronous computation.
//!
//! The guarded job runs on its own worker thread while the caller waits on a
//! channel with a deadline. Extraction code never yields, so this is the only
//! way to stop waiting for it.
//!
//! A timed-out job is abandoned, not killed: the worker thread keeps running
//! until the job returns, and its result is then dropped. A document that
//! makes a strategy spin forever therefore leaks one thread and whatever
//! memory the job holds.

use std::any::Any;
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::Duration;

use crate::error::{Error, Result};

/// Stack size of worker threads. DOM walks recurse once per nesting level.
pub const WORKER_STACK_SIZE: usize = 16 * 1024 * 1024;

/// Runs jobs on a worker thread, waiting at most `limit` for each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TimeoutGuard {
    limit: Option<Duration>,
}

impl TimeoutGuard {
    /// A guard with the given limit. `None` and zero both mean no limit.
    #[must_use]
    pub fn new(limit: Option<Duration>) -> Self {
        Self {
            limit: limit.filter(|d| !d.is_zero()),
        }
    }

    /// A guard from a limit in seconds. Zero, negative and non-finite values
    /// mean no limit.
    #[must_use]
    pub fn from_secs_f64(secs: f64) -> Self {
        Self::new(Duration::try_from_secs_f64(secs).ok())
    }

    #[must_use]
    pub fn limit(&self) -> Option<Duration> {
        self.limit
    }

    /// Run `job` and return its result, or [`Error::TimeoutError`] once the
    /// limit has passed.
    ///
    /// A panicking job is reported as [`Error::WorkerError`].
    pub fn run<T, F>(&self, job: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce() -> Result<T> + Send + 'static,
    {
        let (tx, rx) = mpsc::sync_channel(1);
        let worker = thread::Builder::new()
            .name("byehtml-extract".to_string())
            .stack_size(WORKER_STACK_SIZE)
            .spawn(move || {
                // Nobody is listening any more if the deadline passed
                let _ = tx.send(job());
            })
            .map_err(|e| Error::WorkerError(format!("cannot spawn worker thread: {e}")))?;

        let received = match self.limit {
            Some(limit) => rx.recv_timeout(limit),
            None => rx.recv().map_err(|_| RecvTimeoutError::Disconnected),
        };

        match received {
            Ok(result) => result,
            Err(RecvTimeoutError::Timeout) => {
                let limit = self.limit.unwrap_or_default();
                tracing::debug!(?limit, "abandoning extraction worker");
                Err(Error::TimeoutError(limit))
            }
            Err(RecvTimeoutError::Disconnected) => {
                let reason = match worker.join() {
                    Err(payload) => panic_message(payload.as_ref()),
                    Ok(()) => "worker exited without a result".to_string(),
                };
                Err(Error::WorkerError(reason))
            }
        }
    }
}

/// Run `job` under a guard of `limit`.
pub fn run_with_timeout<T, F>(job: F, limit: Option<Duration>) -> Result<T>
where
    T: Send + 'static,
    F: FnOnce() -> Result<T> + Send + 'static,
{
    TimeoutGuard::new(limit).run(job)
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        format!("panicked: {s}")
    } else if let Some(s) = payload.downcast_ref::<String>() {
        format!("panicked: {s}")
    } else {
        "panicked".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[test]
    fn fast_job_returns_its_value() {
        let out = run_with_timeout(|| Ok(21 * 2), Some(Duration::from_secs(5))).unwrap();
        assert_eq!(out, 42);
    }

    #[test]
    fn job_errors_pass_through() {
        let err = run_with_timeout::<(), _>(
            || Err(Error::ParseError("bad".to_string())),
            Some(Duration::from_secs(5)),
        )
        .unwrap_err();
        assert_eq!(err.kind(), "parse");
    }

    #[test]
    fn slow_job_times_out_near_the_deadline() {
        let limit = Duration::from_millis(100);
        let started = Instant::now();
        let err = run_with_timeout(
            || {
                thread::sleep(Duration::from_secs(3));
                Ok(())
            },
            Some(limit),
        )
        .unwrap_err();
        assert!(matches!(err, Error::TimeoutError(d) if d == limit));
        assert!(started.elapsed() < Duration::from_secs(2));
    }

    #[test]
    fn busy_loop_is_abandoned() {
        let started = Instant::now();
        let err = run_with_timeout(
            || {
                let mut x: u64 = 0;
                let spin_until = Instant::now() + Duration::from_secs(2);
                while Instant::now() < spin_until {
                    x = x.wrapping_add(1);
                }
                Ok(x)
            },
            Some(Duration::from_millis(50)),
        )
        .unwrap_err();
        assert_eq!(err.kind(), "timeout");
        assert!(started.elapsed() < Duration::from_millis(1500));
    }

    #[test]
    fn panic_becomes_worker_error() {
        let err = run_with_timeout::<(), _>(|| panic!("boom"), Some(Duration::from_secs(5)))
            .unwrap_err();
        assert!(matches!(&err, Error::WorkerError(msg) if msg.contains("boom")));
    }

    #[test]
    fn zero_and_negative_limits_disable_the_guard() {
        assert_eq!(TimeoutGuard::new(Some(Duration::ZERO)).limit(), None);
        assert_eq!(TimeoutGuard::from_secs_f64(0.0).limit(), None);
        assert_eq!(TimeoutGuard::from_secs_f64(-1.0).limit(), None);
        assert_eq!(TimeoutGuard::from_secs_f64(f64::NAN).limit(), None);
        assert_eq!(
            TimeoutGuard::from_secs_f64(1.5).limit(),
            Some(Duration::from_millis(1500))
        );
        let out = TimeoutGuard::new(None).run(|| Ok("done")).unwrap();
        assert_eq!(out, "done");
    }
}
