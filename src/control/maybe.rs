//! Maybe type - the optional-value container.
//!
//! `Maybe<A>` is either `Just(A)` (a value is present) or `Nothing` (it is
//! absent). Every container operation short-circuits on `Nothing`, so a
//! pipeline that loses its value part-way through simply ends in `Nothing`
//! without any branching at the call site.
//!
//! A step that may produce no value returns an `Option`; [`Maybe::map_nullable`]
//! and [`Maybe::from_nullable`] collapse a `None` into `Nothing`. There is no
//! way back from `Nothing` to `Just` through `map`.
//!
//! # Examples
//!
//! ```rust
//! use fantasia::control::Maybe;
//! use fantasia::typeclass::Functor;
//!
//! let numbers = Maybe::just(vec![1, 2, 3, 4, 5]);
//!
//! let successful = numbers.clone().map_nullable(|xs| xs.get(2).copied()).map(|x| x + 10);
//! assert_eq!(successful.to_string(), "Just(13)");
//!
//! let failed = numbers.map_nullable(|xs| xs.get(5).copied()).map(|x| x + 10);
//! assert_eq!(failed.to_string(), "Nothing");
//! ```

use std::fmt;

use super::either::Either;
use super::error::NothingError;
use crate::typeclass::{Applicative, Apply, Functor, Monad, TypeConstructor};

/// An optional value: `Just(A)` or `Nothing`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Maybe<A> {
    /// A present value.
    Just(A),
    /// No value.
    Nothing,
}

impl<A> Maybe<A> {
    /// Wraps a present value.
    #[inline]
    pub const fn just(value: A) -> Self {
        Self::Just(value)
    }

    /// The absent value.
    #[inline]
    pub const fn nothing() -> Self {
        Self::Nothing
    }

    /// Builds a `Maybe` from a value that may be missing.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fantasia::control::Maybe;
    ///
    /// assert_eq!(Maybe::from_nullable(Some(1)), Maybe::just(1));
    /// assert_eq!(Maybe::<i32>::from_nullable(None), Maybe::nothing());
    /// ```
    #[inline]
    pub fn from_nullable(value: Option<A>) -> Self {
        value.map_or(Self::Nothing, Self::Just)
    }

    /// Returns `true` if a value is present.
    #[inline]
    pub const fn is_just(&self) -> bool {
        matches!(self, Self::Just(_))
    }

    /// Returns `true` if no value is present.
    #[inline]
    pub const fn is_nothing(&self) -> bool {
        matches!(self, Self::Nothing)
    }

    /// Maps with a function that may produce no value.
    ///
    /// `Just(x)` becomes `Just(y)` when `function(x)` is `Some(y)` and
    /// `Nothing` when it is `None`; `Nothing` stays `Nothing` and the
    /// function is not called.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fantasia::control::Maybe;
    ///
    /// assert_eq!(Maybe::just(5_i32).map_nullable(|x| x.checked_sub(2)), Maybe::just(3));
    /// assert_eq!(Maybe::just(5).map_nullable(|_| None::<i32>), Maybe::nothing());
    /// ```
    #[inline]
    pub fn map_nullable<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> Option<B>,
    {
        match self {
            Self::Just(value) => Maybe::from_nullable(function(value)),
            Self::Nothing => Maybe::Nothing,
        }
    }

    /// Borrows the held value.
    #[inline]
    pub const fn as_ref(&self) -> Maybe<&A> {
        match self {
            Self::Just(value) => Maybe::Just(value),
            Self::Nothing => Maybe::Nothing,
        }
    }

    /// Converts into the standard library's `Option`.
    #[inline]
    pub fn into_option(self) -> Option<A> {
        match self {
            Self::Just(value) => Some(value),
            Self::Nothing => None,
        }
    }

    /// Returns the held value or `default`.
    #[inline]
    pub fn unwrap_or(self, default: A) -> A {
        match self {
            Self::Just(value) => value,
            Self::Nothing => default,
        }
    }

    /// Returns the held value or computes one.
    #[inline]
    pub fn unwrap_or_else<F>(self, function: F) -> A
    where
        F: FnOnce() -> A,
    {
        match self {
            Self::Just(value) => value,
            Self::Nothing => function(),
        }
    }

    /// Takes the held value out, failing with [`NothingError`] when absent.
    ///
    /// # Errors
    ///
    /// Returns [`NothingError`] if `self` is `Nothing`.
    #[inline]
    pub fn try_into_inner(self) -> Result<A, NothingError> {
        match self {
            Self::Just(value) => Ok(value),
            Self::Nothing => Err(NothingError),
        }
    }

    /// Converts into an `Either`, using `error` as the `Left` payload when
    /// no value is present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fantasia::control::{Either, Maybe};
    ///
    /// assert_eq!(Maybe::just(1).ok_or("missing"), Either::Right(1));
    /// assert_eq!(Maybe::<i32>::nothing().ok_or("missing"), Either::Left("missing"));
    /// ```
    #[inline]
    pub fn ok_or<E>(self, error: E) -> Either<E, A> {
        match self {
            Self::Just(value) => Either::Right(value),
            Self::Nothing => Either::Left(error),
        }
    }
}

impl<A> Default for Maybe<A> {
    #[inline]
    fn default() -> Self {
        Self::Nothing
    }
}

impl<A> From<Option<A>> for Maybe<A> {
    #[inline]
    fn from(value: Option<A>) -> Self {
        Self::from_nullable(value)
    }
}

impl<A> From<Maybe<A>> for Option<A> {
    #[inline]
    fn from(value: Maybe<A>) -> Self {
        value.into_option()
    }
}

impl<A: fmt::Display> fmt::Display for Maybe<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Just(value) => write!(formatter, "Just({value})"),
            Self::Nothing => formatter.write_str("Nothing"),
        }
    }
}

// =============================================================================
// Type class implementations
// =============================================================================

impl<A> TypeConstructor for Maybe<A> {
    type Inner = A;
    type WithType<B> = Maybe<B>;
}

impl<A> Functor for Maybe<A> {
    #[inline]
    fn map<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> B,
    {
        match self {
            Self::Just(value) => Maybe::Just(function(value)),
            Self::Nothing => Maybe::Nothing,
        }
    }
}

impl<A> Apply for Maybe<A> {
    #[inline]
    fn ap<B, Output>(self, other: Maybe<B>) -> Maybe<Output>
    where
        A: FnOnce(B) -> Output,
    {
        match self {
            Self::Just(function) => other.map(function),
            Self::Nothing => Maybe::Nothing,
        }
    }

    #[inline]
    fn map2<B, C, F>(self, other: Maybe<B>, function: F) -> Maybe<C>
    where
        F: FnOnce(A, B) -> C,
    {
        self.map(|a| move |b| function(a, b)).ap(other)
    }

    #[inline]
    fn map3<B, C, D, F>(self, second: Maybe<B>, third: Maybe<C>, function: F) -> Maybe<D>
    where
        F: FnOnce(A, B, C) -> D,
    {
        self.map(|a| move |b| move |c| function(a, b, c))
            .ap(second)
            .ap(third)
    }
}

impl<A> Applicative for Maybe<A> {
    #[inline]
    fn of(value: A) -> Self {
        Self::Just(value)
    }
}

impl<A> Monad for Maybe<A> {
    #[inline]
    fn chain<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> Maybe<B>,
    {
        match self {
            Self::Just(value) => function(value),
            Self::Nothing => Maybe::Nothing,
        }
    }
}
