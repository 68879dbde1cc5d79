//! Either type - a value that is one of two alternatives.
//!
//! `Either<L, R>` is `Left(L)` or `Right(R)`. By convention `Right` carries
//! the successful value and `Left` carries the failure, so the container
//! type classes act on `Right` and pass `Left` through untouched. Unlike
//! [`Maybe`](super::Maybe), a failed pipeline keeps the reason it failed.
//!
//! # Examples
//!
//! ```rust
//! use fantasia::control::Either;
//! use fantasia::typeclass::{Functor, Monad};
//!
//! fn parse(input: &str) -> Either<String, i32> {
//!     input.parse::<i32>().map_err(|_| format!("not a number: {input}")).into()
//! }
//!
//! let ok = parse("20").map(|n| n + 1).chain(|n| Either::Right(n * 2));
//! assert_eq!(ok, Either::Right(42));
//!
//! let failed = parse("x").map(|n| n + 1);
//! assert_eq!(failed.to_string(), "Left(not a number: x)");
//! ```

use std::fmt;

use crate::typeclass::{Applicative, Apply, Functor, Monad, TypeConstructor};

/// A value that is either `Left(L)` or `Right(R)`.
///
/// # Type Parameters
///
/// * `L` - The failure (left) type
/// * `R` - The success (right) type
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Either<L, R> {
    /// The failure alternative.
    Left(L),
    /// The success alternative.
    Right(R),
}

impl<L, R> Either<L, R> {
    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is a `Left` value.
    #[inline]
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Returns `true` if this is a `Right` value.
    #[inline]
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    // =========================================================================
    // Value Extraction
    // =========================================================================

    /// Returns the left value, if any.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fantasia::control::Either;
    ///
    /// let left: Either<i32, &str> = Either::Left(42);
    /// assert_eq!(left.left(), Some(42));
    /// assert_eq!(Either::<i32, &str>::Right("x").left(), None);
    /// ```
    #[inline]
    pub fn left(self) -> Option<L> {
        match self {
            Self::Left(value) => Some(value),
            Self::Right(_) => None,
        }
    }

    /// Returns the right value, if any.
    #[inline]
    pub fn right(self) -> Option<R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    /// Borrows both alternatives.
    #[inline]
    pub const fn as_ref(&self) -> Either<&L, &R> {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(value),
        }
    }

    // =========================================================================
    // Transformation
    // =========================================================================

    /// Maps the left value, leaving a right value untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fantasia::control::Either;
    ///
    /// let failed: Either<&str, i32> = Either::Left("boom");
    /// assert_eq!(failed.map_left(str::len), Either::Left(4));
    /// ```
    #[inline]
    pub fn map_left<T, F>(self, function: F) -> Either<T, R>
    where
        F: FnOnce(L) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(function(value)),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Collapses both alternatives into a single value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fantasia::control::Either;
    ///
    /// let right: Either<i32, String> = Either::Right("hello".to_string());
    /// let described = right.fold(|n| format!("Number: {n}"), |s| format!("String: {s}"));
    /// assert_eq!(described, "String: hello");
    /// ```
    #[inline]
    pub fn fold<T, F, G>(self, on_left: F, on_right: G) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => on_left(value),
            Self::Right(value) => on_right(value),
        }
    }

    /// Exchanges the alternatives.
    #[inline]
    pub fn swap(self) -> Either<R, L> {
        match self {
            Self::Left(value) => Either::Right(value),
            Self::Right(value) => Either::Left(value),
        }
    }

    /// Converts into a `Result`, with `Right` as `Ok`.
    ///
    /// # Errors
    ///
    /// Returns `Err` holding the left value if `self` is `Left`.
    #[inline]
    pub fn into_result(self) -> Result<R, L> {
        match self {
            Self::Left(value) => Err(value),
            Self::Right(value) => Ok(value),
        }
    }
}

impl<L, R> From<Result<R, L>> for Either<L, R> {
    #[inline]
    fn from(result: Result<R, L>) -> Self {
        match result {
            Ok(value) => Self::Right(value),
            Err(error) => Self::Left(error),
        }
    }
}

impl<L, R> From<Either<L, R>> for Result<R, L> {
    #[inline]
    fn from(either: Either<L, R>) -> Self {
        either.into_result()
    }
}

impl<L: fmt::Display, R: fmt::Display> fmt::Display for Either<L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(value) => write!(formatter, "Left({value})"),
            Self::Right(value) => write!(formatter, "Right({value})"),
        }
    }
}

// =============================================================================
// Type class implementations (right-biased)
// =============================================================================

impl<L, R> TypeConstructor for Either<L, R> {
    type Inner = R;
    type WithType<B> = Either<L, B>;
}

impl<L, R> Functor for Either<L, R> {
    #[inline]
    fn map<B, F>(self, function: F) -> Either<L, B>
    where
        F: FnOnce(R) -> B,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(function(value)),
        }
    }
}

impl<L, R> Apply for Either<L, R> {
    /// The first `Left` encountered wins; `self` is inspected before `other`.
    #[inline]
    fn ap<B, Output>(self, other: Either<L, B>) -> Either<L, Output>
    where
        R: FnOnce(B) -> Output,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(function) => other.map(function),
        }
    }

    #[inline]
    fn map2<B, C, F>(self, other: Either<L, B>, function: F) -> Either<L, C>
    where
        F: FnOnce(R, B) -> C,
    {
        self.map(|a| move |b| function(a, b)).ap(other)
    }

    #[inline]
    fn map3<B, C, D, F>(self, second: Either<L, B>, third: Either<L, C>, function: F) -> Either<L, D>
    where
        F: FnOnce(R, B, C) -> D,
    {
        self.map(|a| move |b| move |c| function(a, b, c))
            .ap(second)
            .ap(third)
    }
}

impl<L, R> Applicative for Either<L, R> {
    #[inline]
    fn of(value: R) -> Self {
        Self::Right(value)
    }
}

impl<L, R> Monad for Either<L, R> {
    #[inline]
    fn chain<B, F>(self, function: F) -> Either<L, B>
    where
        F: FnOnce(R) -> Either<L, B>,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => function(value),
        }
    }
}
