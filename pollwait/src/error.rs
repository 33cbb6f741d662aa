//! Utilities regarding error handling

use thiserror::Error;

/// Error type for the pollwait crate
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A strict poll ended without the predicate ever accepting a value
    #[error("The polling operation has timed out.")]
    Timeout,
}

/// Result type for the pollwait crate
pub type Result<T> = std::result::Result<T, Error>;
