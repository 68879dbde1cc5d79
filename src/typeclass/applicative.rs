//! Applicative type class - lifting bare values into a container.
//!
//! An `Applicative` is an `Apply` that can also build a container from a
//! plain value with `of`, without looking at any existing instance. `of`
//! always produces the minimal shape: `Identity(x)`, `Just(x)`, `Right(x)`.
//!
//! # Examples
//!
//! ```rust
//! use fantasia::control::Maybe;
//! use fantasia::typeclass::{Applicative, Apply};
//!
//! let lifted = Maybe::of(5);
//! assert_eq!(lifted, Maybe::just(5));
//!
//! // Homomorphism: of(f).ap(of(x)) == of(f(x))
//! let double = |x: i32| x * 2;
//! assert_eq!(Maybe::of(double).ap(Maybe::of(21)), Maybe::of(double(21)));
//! ```

use super::apply::Apply;
use super::identity::Identity;

/// A type class for `Apply` containers that can lift a bare value.
pub trait Applicative: Apply {
    /// Lifts a value into the container's minimal shape.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fantasia::control::Either;
    /// use fantasia::typeclass::{Applicative, Identity};
    ///
    /// assert_eq!(Identity::of(5), Identity::new(5));
    ///
    /// let right: Either<String, i32> = Either::of(5);
    /// assert_eq!(right, Either::Right(5));
    /// ```
    fn of(value: Self::Inner) -> Self
    where
        Self: Sized;
}

// =============================================================================
// Identity<A> Implementation
// =============================================================================

impl<A> Applicative for Identity<A> {
    #[inline]
    fn of(value: A) -> Self {
        Self(value)
    }
}
