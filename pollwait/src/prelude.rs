//! Crate prelude

pub use crate::default_check::{TDefaultCheck, TNullable};

/// Gives a type deriving `Builder` a `builder()` constructor, e.g. `Poller::builder()`.
pub trait BuilderDelegate<B: Default> {
    /// Starts a builder with every field unset, so `build()` falls back to field defaults.
    fn builder() -> B {
        B::default()
    }
}
