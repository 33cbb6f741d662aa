//! Configuration of the poll loop and the entry points built on it

use crate::{Error, PollOutcome, Result, TDefaultCheck};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::thread;
use std::time::{Duration, Instant};

/// Timeout in milliseconds used when none is configured.
pub const DEFAULT_TIMEOUT: i64 = 10_000;

/// Interval between attempts in milliseconds used when none is configured.
pub const DEFAULT_INTERVAL: i64 = 50;

/// Polls a producer on the calling thread until its value is accepted or `timeout` elapses.
///
/// Both settings are whole milliseconds. The timeout is compared against the elapsed time
/// truncated to whole milliseconds with a strict `>`, so an attempt landing exactly on the
/// timeout gets one more try. A negative timeout gives up right after the first rejected value;
/// a zero or negative interval polls without pausing.
///
/// A `Poller` holds no state besides its configuration, so one value can be shared freely and
/// every call is independent of the others.
///
/// # Examples
///
/// ```
/// use pollwait::prelude::*;
/// use pollwait::Poller;
///
/// let poller = Poller::builder().timeout(1000).interval(10).build().unwrap();
///
/// let mut counter = 0;
/// let value = poller
///     .poll_until(
///         || {
///             counter += 1;
///             counter
///         },
///         |n| *n >= 5,
///     )
///     .unwrap();
///
/// assert_eq!(value, 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Getters, Builder, BuilderDelegate, new)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Poller {
    /// Milliseconds after which an unaccepted poll gives up
    #[builder(default = "DEFAULT_TIMEOUT")]
    #[cfg_attr(feature = "serde", serde(rename = "timeout_ms"))]
    timeout: i64,
    /// Milliseconds to pause between two unaccepted attempts
    #[builder(default = "DEFAULT_INTERVAL")]
    #[cfg_attr(feature = "serde", serde(rename = "interval_ms"))]
    interval: i64,
}

impl Default for Poller {
    fn default() -> Self {
        Self::new(DEFAULT_TIMEOUT, DEFAULT_INTERVAL)
    }
}

impl Poller {
    /// Creates a `Poller` from `Duration`s, saturating at `i64::MAX` milliseconds.
    pub fn from_durations(timeout: Duration, interval: Duration) -> Self {
        Self::new(duration_millis(timeout), duration_millis(interval))
    }

    /// Returns `true` once `elapsed`, in whole milliseconds, is past the timeout.
    pub fn is_timed_out(&self, elapsed: Duration) -> bool {
        self.timeout < 0 || elapsed.as_millis() > self.timeout as u128
    }

    /// Runs the poll loop with a fallible producer.
    ///
    /// The producer is called at least once. An `Err` from the producer ends the loop
    /// immediately and is returned unchanged; it is never retried.
    pub fn try_run<T, E, F, P>(
        &self,
        mut producer: F,
        mut predicate: P,
    ) -> std::result::Result<PollOutcome<T>, E>
    where
        F: FnMut() -> std::result::Result<T, E>,
        P: FnMut(&T) -> bool,
    {
        let start = Instant::now();
        let mut attempts: u64 = 0;

        loop {
            let value = producer()?;
            attempts += 1;

            // acceptance is checked before the timeout so a first-try success always wins
            if predicate(&value) {
                let elapsed = start.elapsed();
                debug!("poll accepted after {attempts} attempt(s) in {elapsed:?}");
                return Ok(PollOutcome::new(value, true, attempts, elapsed));
            }

            let elapsed = start.elapsed();
            if self.is_timed_out(elapsed) {
                debug!(
                    "poll timed out after {attempts} attempt(s) in {elapsed:?} (timeout: {}ms)",
                    self.timeout
                );
                return Ok(PollOutcome::new(value, false, attempts, elapsed));
            }

            trace!("attempt {attempts} rejected, retrying in {}ms", self.interval);

            if self.interval > 0 {
                thread::sleep(Duration::from_millis(self.interval as u64));
            }
        }
    }

    /// Runs the poll loop and returns the last produced value along with whether it was
    /// accepted.
    pub fn run<T, F, P>(&self, mut producer: F, predicate: P) -> PollOutcome<T>
    where
        F: FnMut() -> T,
        P: FnMut(&T) -> bool,
    {
        match self.try_run(|| Ok::<T, Infallible>(producer()), predicate) {
            Ok(outcome) => outcome,
            Err(never) => match never {},
        }
    }

    /// Polls until `producer` returns a value that is not the absent value of `T`.
    ///
    /// Returns [`Error::Timeout`] if no such value is produced before the timeout.
    ///
    /// [`Error::Timeout`]: error/enum.Error.html#variant.Timeout
    pub fn poll<T, F>(&self, producer: F) -> Result<T>
    where
        T: TDefaultCheck,
        F: FnMut() -> T,
    {
        let check = T::default_check();
        self.poll_until(producer, |value| check.accepts(value))
    }

    /// Polls until `predicate` accepts a value returned by `producer`.
    ///
    /// Returns [`Error::Timeout`] if no value is accepted before the timeout.
    ///
    /// [`Error::Timeout`]: error/enum.Error.html#variant.Timeout
    pub fn poll_until<T, F, P>(&self, producer: F, predicate: P) -> Result<T>
    where
        F: FnMut() -> T,
        P: FnMut(&T) -> bool,
    {
        self.run(producer, predicate).into_result()
    }

    /// Polls until `producer` returns a value that is not the absent value of `T`. On timeout
    /// the last produced value is returned instead of an error.
    pub fn poll_safe<T, F>(&self, producer: F) -> T
    where
        T: TDefaultCheck,
        F: FnMut() -> T,
    {
        let check = T::default_check();
        self.poll_safe_until(producer, |value| check.accepts(value))
    }

    /// Polls until `predicate` accepts a value returned by `producer`. On timeout the last
    /// produced value is returned instead of an error.
    pub fn poll_safe_until<T, F, P>(&self, producer: F, predicate: P) -> T
    where
        F: FnMut() -> T,
        P: FnMut(&T) -> bool,
    {
        self.run(producer, predicate).into_value()
    }

    /// Fallible form of [`poll`](#method.poll).
    pub fn try_poll<T, E, F>(&self, producer: F) -> std::result::Result<T, E>
    where
        T: TDefaultCheck,
        E: From<Error>,
        F: FnMut() -> std::result::Result<T, E>,
    {
        let check = T::default_check();
        self.try_poll_until(producer, |value| check.accepts(value))
    }

    /// Fallible form of [`poll_until`](#method.poll_until). A timeout is converted into `E`.
    pub fn try_poll_until<T, E, F, P>(&self, producer: F, predicate: P) -> std::result::Result<T, E>
    where
        E: From<Error>,
        F: FnMut() -> std::result::Result<T, E>,
        P: FnMut(&T) -> bool,
    {
        Ok(self.try_run(producer, predicate)?.into_result()?)
    }

    /// Fallible form of [`poll_safe`](#method.poll_safe).
    pub fn try_poll_safe<T, E, F>(&self, producer: F) -> std::result::Result<T, E>
    where
        T: TDefaultCheck,
        F: FnMut() -> std::result::Result<T, E>,
    {
        let check = T::default_check();
        self.try_poll_safe_until(producer, |value| check.accepts(value))
    }

    /// Fallible form of [`poll_safe_until`](#method.poll_safe_until).
    pub fn try_poll_safe_until<T, E, F, P>(
        &self,
        producer: F,
        predicate: P,
    ) -> std::result::Result<T, E>
    where
        F: FnMut() -> std::result::Result<T, E>,
        P: FnMut(&T) -> bool,
    {
        Ok(self.try_run(producer, predicate)?.into_value())
    }
}

fn duration_millis(duration: Duration) -> i64 {
    i64::try_from(duration.as_millis()).unwrap_or(i64::MAX)
}

/// Polls `producer` with the default [`Poller`] until it returns a non-absent value.
///
/// [`Poller`]: struct.Poller.html
pub fn poll<T, F>(producer: F) -> Result<T>
where
    T: TDefaultCheck,
    F: FnMut() -> T,
{
    Poller::default().poll(producer)
}

/// Polls `producer` with the default [`Poller`] until `predicate` accepts its value.
///
/// [`Poller`]: struct.Poller.html
pub fn poll_until<T, F, P>(producer: F, predicate: P) -> Result<T>
where
    F: FnMut() -> T,
    P: FnMut(&T) -> bool,
{
    Poller::default().poll_until(producer, predicate)
}

/// Polls `producer` with the default [`Poller`], returning the last value on timeout.
///
/// [`Poller`]: struct.Poller.html
pub fn poll_safe<T, F>(producer: F) -> T
where
    T: TDefaultCheck,
    F: FnMut() -> T,
{
    Poller::default().poll_safe(producer)
}

/// Polls `producer` with the default [`Poller`] until `predicate` accepts its value, returning
/// the last value on timeout.
///
/// [`Poller`]: struct.Poller.html
pub fn poll_safe_until<T, F, P>(producer: F, predicate: P) -> T
where
    F: FnMut() -> T,
    P: FnMut(&T) -> bool,
{
    Poller::default().poll_safe_until(producer, predicate)
}
