//! Result of a single run of the poll loop

use crate::{Error, Result};
use std::time::Duration;

/// The last value produced by a poll together with whether the predicate accepted it.
///
/// `accepted()` is `false` when the loop ended because the timeout elapsed.
#[derive(Debug, Clone, PartialEq, Eq, Getters, new)]
pub struct PollOutcome<T> {
    value: T,
    accepted: bool,
    attempts: u64,
    elapsed: Duration,
}

impl<T> PollOutcome<T> {
    /// Strict completion: the value if it was accepted, [`Error::Timeout`] otherwise.
    ///
    /// [`Error::Timeout`]: error/enum.Error.html#variant.Timeout
    pub fn into_result(self) -> Result<T> {
        if self.accepted {
            Ok(self.value)
        } else {
            Err(Error::Timeout)
        }
    }

    /// Safe completion: the last produced value whether or not it was accepted.
    pub fn into_value(self) -> T {
        self.value
    }

    /// Splits the outcome into the last produced value and the accepted flag.
    pub fn into_parts(self) -> (T, bool) {
        (self.value, self.accepted)
    }
}
