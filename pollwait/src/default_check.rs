//! The acceptance predicate used when the caller does not supply one.
//!
//! A value is accepted when it is not the "absent" representation of its type. What absent means
//! depends on the kind of the type, which is decided once per type by [`TDefaultCheck`]:
//!
//! * nullable types ([`TNullable`], e.g. `Option<T>` or raw pointers) are absent when null;
//! * value types (numbers, `bool`, `String`, user types deriving `DefaultCheck`, ...) are absent
//!   when structurally equal to their zero value.
//!
//! [`TDefaultCheck`]: trait.TDefaultCheck.html
//! [`TNullable`]: trait.TNullable.html

use std::fmt;

/// The strategy a [`DefaultCheck`] uses to recognize an absent value.
///
/// [`DefaultCheck`]: struct.DefaultCheck.html
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DefaultKind {
    /// Reference-like type, absent when null
    Null,
    /// Value-like type, absent when equal to the zero value
    Zero,
}

/// Reference-like types that have a null representation.
pub trait TNullable {
    /// Returns `true` if this value is the null representation of its type.
    fn is_null(&self) -> bool;
}

/// Types that can be polled without an explicit acceptance predicate.
///
/// Implementations pick the comparison strategy for the type: [`DefaultCheck::nullable`] for
/// reference-like types and [`DefaultCheck::zeroed`] for value-like types. User types that are
/// `Default + PartialEq` can `#[derive(DefaultCheck)]` to get the value-like strategy.
///
/// [`DefaultCheck::nullable`]: struct.DefaultCheck.html#method.nullable
/// [`DefaultCheck::zeroed`]: struct.DefaultCheck.html#method.zeroed
pub trait TDefaultCheck: Sized {
    /// Derives the default acceptance predicate for this type.
    fn default_check() -> DefaultCheck<Self>;
}

/// Default acceptance predicate for `T`, bound to a single comparison strategy.
#[derive(Clone)]
pub struct DefaultCheck<T> {
    strategy: Strategy<T>,
}

#[derive(Clone)]
enum Strategy<T> {
    Null(fn(&T) -> bool),
    Zero { zero: T, eq: fn(&T, &T) -> bool },
}

impl<T: TNullable> DefaultCheck<T> {
    /// Accepts any value that is not null.
    pub fn nullable() -> Self {
        Self {
            strategy: Strategy::Null(<T as TNullable>::is_null),
        }
    }
}

impl<T: PartialEq> DefaultCheck<T> {
    /// Accepts any value that is not equal to `zero`.
    pub fn zeroed(zero: T) -> Self {
        Self {
            strategy: Strategy::Zero {
                zero,
                eq: <T as PartialEq>::eq,
            },
        }
    }
}

impl<T> DefaultCheck<T> {
    /// Returns the strategy this check was bound to.
    pub fn kind(&self) -> DefaultKind {
        match self.strategy {
            Strategy::Null(_) => DefaultKind::Null,
            Strategy::Zero { .. } => DefaultKind::Zero,
        }
    }

    /// Returns the zero value compared against, if this is a value-like check.
    pub fn zero(&self) -> Option<&T> {
        match &self.strategy {
            Strategy::Null(_) => None,
            Strategy::Zero { zero, .. } => Some(zero),
        }
    }

    /// Returns `true` if `value` is not the absent representation of `T`.
    pub fn accepts(&self, value: &T) -> bool {
        match &self.strategy {
            Strategy::Null(is_null) => !is_null(value),
            Strategy::Zero { zero, eq } => !eq(zero, value),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for DefaultCheck<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DefaultCheck")
            .field("kind", &self.kind())
            .field("zero", &self.zero())
            .finish()
    }
}

/// Derives the default acceptance predicate for `T`.
pub fn default_check<T: TDefaultCheck>() -> DefaultCheck<T> {
    T::default_check()
}

impl<T> TNullable for Option<T> {
    fn is_null(&self) -> bool {
        self.is_none()
    }
}

impl<T> TNullable for *const T {
    fn is_null(&self) -> bool {
        (*self).is_null()
    }
}

impl<T> TNullable for *mut T {
    fn is_null(&self) -> bool {
        (*self).is_null()
    }
}

nullable_default_check!(Option<T>, *const T, *mut T);

zeroed_default_check!(
    u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64, bool, char, (),
    String, std::time::Duration,
);

impl<T: PartialEq> TDefaultCheck for Vec<T> {
    fn default_check() -> DefaultCheck<Self> {
        DefaultCheck::zeroed(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ptr;

    #[test]
    fn option_binds_null_strategy() {
        let check = default_check::<Option<String>>();
        assert_eq!(check.kind(), DefaultKind::Null);
        assert!(check.zero().is_none());
        assert!(!check.accepts(&None));
        assert!(check.accepts(&Some(String::new())));
    }

    #[test]
    fn raw_pointer_binds_null_strategy() {
        let value = 42;
        let check = default_check::<*const i32>();
        assert_eq!(check.kind(), DefaultKind::Null);
        assert!(!check.accepts(&ptr::null()));
        assert!(check.accepts(&(&value as *const i32)));
    }

    #[test]
    fn integer_rejects_only_zero() {
        let check = default_check::<i32>();
        assert_eq!(check.kind(), DefaultKind::Zero);
        assert_eq!(check.zero(), Some(&0));
        assert!(!check.accepts(&0));
        assert!(check.accepts(&1));
        assert!(check.accepts(&-1));
        assert!(check.accepts(&i32::MAX));
    }

    #[test]
    fn bool_rejects_false() {
        let check = default_check::<bool>();
        assert!(!check.accepts(&false));
        assert!(check.accepts(&true));
    }

    #[test]
    fn string_rejects_empty() {
        let check = default_check::<String>();
        assert_eq!(check.kind(), DefaultKind::Zero);
        assert!(!check.accepts(&String::new()));
        assert!(check.accepts(&"ready".to_string()));
    }

    #[test]
    fn vec_rejects_empty() {
        let check = default_check::<Vec<u8>>();
        assert!(!check.accepts(&vec![]));
        assert!(check.accepts(&vec![0]));
    }

    #[test]
    fn float_negative_zero_is_zero() {
        let check = default_check::<f64>();
        assert!(!check.accepts(&0.0));
        assert!(!check.accepts(&-0.0));
        assert!(check.accepts(&0.5));
    }

    #[test]
    fn option_of_zero_value_is_accepted() {
        let check = default_check::<Option<i32>>();
        assert!(check.accepts(&Some(0)));
    }

    #[test]
    fn zeroed_with_custom_zero() {
        let check = DefaultCheck::zeroed(-1);
        assert!(!check.accepts(&-1));
        assert!(check.accepts(&0));
    }

    #[test]
    fn debug_shows_kind() {
        let check = default_check::<u8>();
        assert_eq!(
            format!("{:?}", check),
            "DefaultCheck { kind: Zero, zero: Some(0) }"
        );
    }
}
