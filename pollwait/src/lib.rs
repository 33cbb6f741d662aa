//! `pollwait` repeatedly calls a producer on the current thread until the value it returns is
//! accepted or a timeout elapses.
//!
//! Two policies are offered on top of the same loop:
//!
//! * **strict** ([`poll`], [`poll_until`]) returns [`Error::Timeout`] when no value was accepted;
//! * **safe** ([`poll_safe`], [`poll_safe_until`]) returns the last produced value instead.
//!
//! When no predicate is given, a value is accepted if it is not the "absent" value of its type:
//! `None` or a null pointer for nullable types, the zero value (`0`, `false`, `""`, ...) for value
//! types. See [`TDefaultCheck`].
//!
//! The free functions use the default timeout of 10 seconds and interval of 50 milliseconds. Use
//! a [`Poller`] to configure either, in whole milliseconds.
//!
//! # Examples
//!
//! ## Wait for a value to show up
//!
//! ```
//! use std::sync::{Arc, Mutex};
//! use std::thread;
//! use std::time::Duration;
//!
//! let slot: Arc<Mutex<Option<String>>> = Arc::default();
//!
//! let writer = {
//!     let slot = slot.clone();
//!     thread::spawn(move || {
//!         thread::sleep(Duration::from_millis(100));
//!         *slot.lock().unwrap() = Some("ready".to_string());
//!     })
//! };
//!
//! let value = pollwait::poll(|| slot.lock().unwrap().clone()).unwrap();
//! assert_eq!(value.as_deref(), Some("ready"));
//!
//! writer.join().unwrap();
//! ```
//!
//! ## Strict and safe timeouts
//!
//! ```
//! use pollwait::{Error, Poller};
//!
//! let poller = Poller::new(100, 10);
//!
//! assert_eq!(poller.poll(|| None::<u32>), Err(Error::Timeout));
//! assert_eq!(poller.poll_safe(|| None::<u32>), None);
//! ```
//!
//! [`poll`]: fn.poll.html
//! [`poll_until`]: fn.poll_until.html
//! [`poll_safe`]: fn.poll_safe.html
//! [`poll_safe_until`]: fn.poll_safe_until.html
//! [`Error::Timeout`]: error/enum.Error.html#variant.Timeout
//! [`TDefaultCheck`]: trait.TDefaultCheck.html
//! [`Poller`]: struct.Poller.html

#[macro_use]
extern crate derive_builder;
#[macro_use]
extern crate pollwait_macros;
#[macro_use]
extern crate derive_getters;
#[macro_use]
extern crate log;
#[macro_use]
extern crate derive_new;

extern crate self as pollwait;

#[macro_use]
mod macros;
mod default_check;
mod outcome;
mod poller;

pub mod error;
pub mod prelude;

pub use default_check::*;
pub use error::{Error, Result};
pub use outcome::*;
pub use poller::*;
pub use pollwait_macros::DefaultCheck;

#[cfg(test)]
mod tests;
