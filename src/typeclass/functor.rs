//! Functor type class - mapping over container values.
//!
//! A `Functor` transforms the value it holds with an ordinary function while
//! keeping its shape: a `Just` stays a `Just`, a `Left` stays a `Left`.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! fa.map(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.map(f).map(g) == fa.map(|x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use fantasia::control::Maybe;
//! use fantasia::typeclass::Functor;
//!
//! let numbers = Maybe::just(vec![1, 2, 3, 4, 5]);
//! let found = numbers.clone().map_nullable(|xs| xs.get(2).copied()).map(|x| x + 10);
//! assert_eq!(found, Maybe::just(13));
//!
//! let missing = numbers.map_nullable(|xs| xs.get(5).copied()).map(|x| x + 10);
//! assert_eq!(missing, Maybe::nothing());
//! ```

use super::higher::TypeConstructor;
use super::identity::Identity;

/// A type class for types that can have a function mapped over their contents.
///
/// `map` consumes the container and returns a new one of the same variant;
/// the original is never modified in place.
///
/// # Examples
///
/// ```rust
/// use fantasia::typeclass::{Functor, Identity};
///
/// let x = Identity::new(5);
/// let y: Identity<String> = x.map(|n| n.to_string());
/// assert_eq!(y, Identity::new("5".to_string()));
/// ```
pub trait Functor: TypeConstructor {
    /// Applies a function to the value inside the functor.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fantasia::control::Maybe;
    /// use fantasia::typeclass::Functor;
    ///
    /// assert_eq!(Maybe::just(5).map(|n| n * 2), Maybe::just(10));
    /// assert_eq!(Maybe::<i32>::nothing().map(|n| n * 2), Maybe::nothing());
    /// ```
    fn map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B;

    /// Replaces the value inside the functor with a constant value.
    ///
    /// This is equivalent to `map(|_| value)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fantasia::control::Maybe;
    /// use fantasia::typeclass::Functor;
    ///
    /// assert_eq!(Maybe::just(5).replace("replaced"), Maybe::just("replaced"));
    /// assert_eq!(Maybe::<i32>::nothing().replace("replaced"), Maybe::nothing());
    /// ```
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.map(|_| value)
    }

    /// Discards the value inside the functor, replacing it with `()`.
    #[inline]
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.replace(())
    }
}

// =============================================================================
// Identity<A> Implementation
// =============================================================================

impl<A> Functor for Identity<A> {
    #[inline]
    fn map<B, F>(self, function: F) -> Identity<B>
    where
        F: FnOnce(A) -> B,
    {
        Identity(function(self.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::convert::identity;
    use rstest::rstest;

    #[rstest]
    fn identity_map_changes_type() {
        let explained = Identity::new(3).map(|a| format!("This is a {a}"));
        let words = explained.map(|text| text.split(' ').map(str::to_owned).collect::<Vec<_>>());
        assert_eq!(words.into_inner(), vec!["This", "is", "a", "3"]);
    }

    #[rstest]
    #[case(0)]
    #[case(42)]
    #[case(-9)]
    fn identity_map_identity_law(#[case] value: i32) {
        assert_eq!(Identity::new(value).map(identity), Identity::new(value));
    }

    #[rstest]
    fn identity_map_composition_law() {
        let add_two = |x: i32| x + 2;
        let double = |x: i32| x * 2;

        let double_map = Identity::new(5).map(add_two).map(double);
        let single_map = Identity::new(5).map(|x| double(add_two(x)));

        assert_eq!(double_map, Identity::new(14));
        assert_eq!(double_map, single_map);
    }

    #[rstest]
    fn identity_replace_and_void() {
        assert_eq!(Identity::new(1).replace('x'), Identity::new('x'));
        assert_eq!(Identity::new(1).void(), Identity::new(()));
    }
}
