/**
 * @file lib.rs
 * @author Krisna Pranav
 * @brief opt
 * @version 1.0
 * @date 2024-11-25
 *
 * @copyright Copyright (c) 2024 Doodle Developers, Krisna Pranav
 *
 */

mod error;

pub use error::{Error, Result};

use std::any::Any;

/// A value that is either `Present` or `Absent`.
///
/// Combinators take `self` by value and hand back a new `Opt`, an existing
/// value is never changed in place.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    serde::Serialize,
    serde::Deserialize,
    bincode::Encode,
    bincode::Decode,
)]
pub enum Opt<T> {
    Absent,
    Present(T),
} // pub enum Opt<T>

pub use self::Opt::{Absent, Present};

impl<T> Default for Opt<T> {
    fn default() -> Self {
        Absent
    }
}

impl<T> Opt<T> {
    #[inline]
    pub const fn some(value: T) -> Self {
        Present(value)
    }

    #[inline]
    pub const fn none() -> Self {
        Absent
    }

    #[inline]
    pub const fn is_some(&self) -> bool {
        matches!(self, Present(_))
    }

    #[inline]
    pub const fn is_none(&self) -> bool {
        matches!(self, Absent)
    }

    /// Returns the payload without checking the tag.
    ///
    /// # Safety
    ///
    /// `self` must be `Present`. Calling this on `Absent` is undefined behaviour.
    #[inline]
    pub unsafe fn get_some_unchecked(self) -> T {
        match self {
            Present(value) => value,
            // SAFETY: the caller guarantees the value is `Present`.
            Absent => unsafe { std::hint::unreachable_unchecked() },
        }
    }

    /// Returns the payload, panicking if the value is `Absent`.
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self {
            Present(value) => value,
            Absent => {
                let err = Error::UnwrapAbsent {
                    operation: "Opt::unwrap",
                };
                tracing::error!(%err);
                panic!("{err}")
            }
        }
    }

    /// Returns the payload, panicking with `payload` if the value is `Absent`.
    ///
    /// The payload is handed to [`std::panic::panic_any`] unchanged, so a
    /// caller catching the unwind can downcast it back to `P`.
    #[track_caller]
    pub fn expect<P>(self, payload: P) -> T
    where
        P: Any + Send + 'static,
    {
        match self {
            Present(value) => value,
            Absent => {
                tracing::error!("called `Opt::expect()` on an `Absent` value");
                std::panic::panic_any(payload)
            }
        }
    }

    pub fn try_unwrap(self) -> Result<T> {
        self.ok_or(Error::UnwrapAbsent {
            operation: "Opt::try_unwrap",
        })
    }

    pub fn ok_or<E>(self, err: E) -> std::result::Result<T, E> {
        match self {
            Present(value) => Ok(value),
            Absent => Err(err),
        }
    }

    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Present(value) => value,
            Absent => default,
        }
    }

    pub fn unwrap_or_else<F>(self, f: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Present(value) => value,
            Absent => f(),
        }
    }

    pub fn map<U, F>(self, f: F) -> Opt<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Present(value) => Present(f(value)),
            Absent => Absent,
        }
    }

    pub fn map_or<U, F>(self, default: U, f: F) -> U
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Present(value) => f(value),
            Absent => default,
        }
    }

    pub fn map_or_else<U, D, F>(self, default: D, f: F) -> U
    where
        D: FnOnce() -> U,
        F: FnOnce(T) -> U,
    {
        match self {
            Present(value) => f(value),
            Absent => default(),
        }
    }

    pub fn and_then<U, F>(self, f: F) -> Opt<U>
    where
        F: FnOnce(T) -> Opt<U>,
    {
        match self {
            Present(value) => f(value),
            Absent => Absent,
        }
    }

    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Present(value) if predicate(&value) => Present(value),
            _ => Absent,
        }
    }

    /// `Present((a, b))` only when both sides are present.
    pub fn zip<U>(self, other: Opt<U>) -> Opt<(T, U)> {
        match (self, other) {
            (Present(a), Present(b)) => Present((a, b)),
            _ => Absent,
        }
    }

    /// The first present value wins.
    pub fn or(self, other: Self) -> Self {
        match self {
            Present(_) => self,
            Absent => other,
        }
    }

    pub fn or_else<F>(self, f: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            Present(_) => self,
            Absent => f(),
        }
    }

    /// `Absent` short-circuits, otherwise `other` is returned.
    pub fn and<U>(self, other: Opt<U>) -> Opt<U> {
        match self {
            Present(_) => other,
            Absent => Absent,
        }
    }

    /// Runs `f` on a present payload and passes the value through.
    pub fn inspect<F>(self, f: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Present(value) = &self {
            f(value);
        }

        self
    }

    pub const fn as_ref(&self) -> Opt<&T> {
        match self {
            Present(value) => Present(value),
            Absent => Absent,
        }
    }

    pub fn into_option(self) -> Option<T> {
        self.into()
    }
}

impl<T> Opt<Opt<T>> {
    pub fn flatten(self) -> Opt<T> {
        match self {
            Present(inner) => inner,
            Absent => Absent,
        }
    }
}

impl<T> From<Option<T>> for Opt<T> {
    fn from(option: Option<T>) -> Self {
        match option {
            Some(value) => Present(value),
            None => Absent,
        }
    }
}

impl<T> From<Opt<T>> for Option<T> {
    fn from(opt: Opt<T>) -> Self {
        match opt {
            Present(value) => Some(value),
            Absent => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::cell::Cell;

    #[test]
    fn tags() {
        assert!(Opt::some(1).is_some());
        assert!(!Opt::some(1).is_none());
        assert!(Opt::<i32>::none().is_none());
        assert_eq!(Opt::<i32>::default(), Absent);
    }

    #[test]
    fn unchecked_unwrap_of_present() {
        let value = unsafe { Opt::some("x").get_some_unchecked() };
        assert_eq!(value, "x");
    }

    #[test]
    #[should_panic(expected = "called `Opt::unwrap()` on an `Absent` value")]
    fn unwrap_absent_panics() {
        Opt::<u8>::none().unwrap();
    }

    #[test]
    fn expect_reports_the_calling_line() {
        struct Marker;

        let seen = std::sync::Arc::new(std::sync::Mutex::new(None));
        let sink = std::sync::Arc::clone(&seen);
        let previous = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            if info.payload().is::<Marker>() {
                *sink.lock().unwrap() = info.location().map(|location| location.line());
            }
        }));

        let expected_line = line!() + 1;
        let result = std::panic::catch_unwind(|| Opt::<u8>::none().expect(Marker));
        std::panic::set_hook(previous);

        assert!(result.is_err());
        assert_eq!(*seen.lock().unwrap(), Some(expected_line));
    }

    #[test]
    fn expect_panics_with_the_supplied_payload() {
        #[derive(Debug, PartialEq)]
        struct Missing(&'static str);

        let payload = std::panic::catch_unwind(|| Opt::<u8>::none().expect(Missing("key")))
            .unwrap_err();

        assert_eq!(payload.downcast_ref::<Missing>(), Some(&Missing("key")));
        assert_eq!(Opt::some(3).expect(Missing("unused")), 3);
    }

    #[test]
    fn try_unwrap_reports_operation() {
        assert_eq!(Opt::some(1).try_unwrap(), Ok(1));
        assert_eq!(
            Opt::<i32>::none().try_unwrap(),
            Err(Error::UnwrapAbsent {
                operation: "Opt::try_unwrap"
            })
        );
    }

    #[test]
    fn fallbacks() {
        assert_eq!(Opt::some(1).unwrap_or(2), 1);
        assert_eq!(Opt::none().unwrap_or(2), 2);
        assert_eq!(Opt::none().unwrap_or_else(|| 7), 7);

        let called = Cell::new(false);
        assert_eq!(
            Opt::some(1).unwrap_or_else(|| {
                called.set(true);
                0
            }),
            1
        );
        assert!(!called.get());
    }

    #[test]
    fn zip_needs_both() {
        assert_eq!(Opt::some(1).zip(Opt::some('a')), Present((1, 'a')));
        assert_eq!(Opt::some(1).zip(Opt::<char>::none()), Absent);
        assert_eq!(Opt::<i32>::none().zip(Opt::some('a')), Absent);
    }

    #[test]
    fn or_and() {
        assert_eq!(Opt::some(1).or(Opt::some(2)), Present(1));
        assert_eq!(Opt::none().or(Opt::some(2)), Present(2));
        assert_eq!(Opt::<i32>::none().or(Opt::none()), Absent);

        assert_eq!(Opt::some(1).and(Opt::some("b")), Present("b"));
        assert_eq!(Opt::<i32>::none().and(Opt::some("b")), Absent);
        assert_eq!(Opt::some(1).and(Opt::<&str>::none()), Absent);
    }

    #[test]
    fn flatten_one_level() {
        assert_eq!(Opt::some(Opt::some(5)).flatten(), Present(5));
        assert_eq!(Opt::some(Opt::<i32>::none()).flatten(), Absent);
        assert_eq!(Opt::<Opt<i32>>::none().flatten(), Absent);
    }

    #[test]
    fn inspect_only_sees_present() {
        let seen = Cell::new(0);
        let value = Opt::some(4).inspect(|x| seen.set(*x));
        assert_eq!(value, Present(4));
        assert_eq!(seen.get(), 4);

        Opt::<i32>::none().inspect(|_| seen.set(-1));
        assert_eq!(seen.get(), 4);
    }

    #[test]
    fn bincode_encoding() {
        let config = bincode::config::standard();
        let bytes = bincode::encode_to_vec(Opt::some(42u32), config).unwrap();
        let (decoded, _): (Opt<u32>, _) = bincode::decode_from_slice(&bytes, config).unwrap();
        assert_eq!(decoded, Present(42));
    }

    proptest! {
        #[test]
        fn map_matches_option(x in proptest::option::of(any::<i32>())) {
            let f = |v: i32| v.wrapping_mul(3);
            prop_assert_eq!(Opt::from(x).map(f).into_option(), x.map(f));
        }

        #[test]
        fn and_then_matches_option(x in proptest::option::of(any::<i16>())) {
            let f = |v: i16| if v % 2 == 0 { Some(v / 2) } else { None };
            prop_assert_eq!(
                Opt::from(x).and_then(|v| Opt::from(f(v))).into_option(),
                x.and_then(f)
            );
        }

        #[test]
        fn map_or_else_picks_branch(x in proptest::option::of(any::<u8>())) {
            let got = Opt::from(x).map_or_else(|| -1, i32::from);
            prop_assert_eq!(got, x.map_or(-1, i32::from));
            prop_assert_eq!(Opt::from(x).map_or(-1, i32::from), got);
        }
    }
}
