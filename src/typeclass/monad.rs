//! Monad type class - flattening and sequencing containers.
//!
//! `Monad` adds two operations to `Applicative`:
//!
//! - `join` removes exactly one level of nesting, turning `M<M<A>>` into `M<A>`;
//! - `chain` maps with a container-returning function and joins the result.
//!
//! Mapping a container-returning function with plain `map` nests containers
//! (`Just(Just(x))`); `chain` keeps the result flat.
//!
//! # Laws
//!
//! ## Left Identity Law
//!
//! ```text
//! of(a).chain(f) == f(a)
//! ```
//!
//! ## Right Identity Law
//!
//! ```text
//! m.chain(of) == m
//! ```
//!
//! ## Associativity Law
//!
//! ```text
//! m.chain(f).chain(g) == m.chain(|x| f(x).chain(g))
//! ```
//!
//! ## Chain/Join Consistency
//!
//! ```text
//! m.chain(f) == m.map(f).join()
//! ```
//!
//! # Examples
//!
//! ```rust
//! use std::collections::HashMap;
//!
//! use fantasia::control::Maybe;
//! use fantasia::typeclass::{Functor, Monad};
//!
//! #[derive(Clone)]
//! enum Node {
//!     Leaf(i32),
//!     Branch(HashMap<&'static str, Node>),
//! }
//!
//! fn prop(key: &'static str) -> impl Fn(Node) -> Maybe<Node> {
//!     move |node| match node {
//!         Node::Branch(mut children) => children.remove(key).into(),
//!         Node::Leaf(_) => Maybe::nothing(),
//!     }
//! }
//!
//! let data = Node::Branch(HashMap::from([(
//!     "a",
//!     Node::Branch(HashMap::from([("b", Node::Branch(HashMap::from([("c", Node::Leaf(2))])))])),
//! )]));
//!
//! let with_chain = prop("a")(data.clone()).chain(prop("b")).chain(prop("c"));
//! let with_join = prop("a")(data).map(prop("b")).join().map(prop("c")).join();
//!
//! let leaf = |node: Node| match node {
//!     Node::Leaf(value) => Maybe::just(value),
//!     Node::Branch(_) => Maybe::nothing(),
//! };
//! assert_eq!(with_chain.chain(leaf), Maybe::just(2));
//! assert_eq!(with_join.chain(leaf), Maybe::just(2));
//! ```

use super::applicative::Applicative;
use super::higher::SameAs;
use super::identity::Identity;

/// A type class for containers that can be flattened and sequenced.
///
/// `join` is only callable when the held value is itself a container of
/// the same variant; any other shape is rejected at compile time.
pub trait Monad: Applicative {
    /// Maps with a container-returning function and flattens the result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fantasia::control::Maybe;
    /// use fantasia::typeclass::Monad;
    ///
    /// let halve = |n: i32| if n % 2 == 0 { Maybe::just(n / 2) } else { Maybe::nothing() };
    /// assert_eq!(Maybe::just(10).chain(halve), Maybe::just(5));
    /// assert_eq!(Maybe::just(5).chain(halve), Maybe::nothing());
    /// ```
    fn chain<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;

    /// Removes one level of nesting.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fantasia::control::Maybe;
    /// use fantasia::typeclass::Monad;
    ///
    /// assert_eq!(Maybe::just(Maybe::just(2)).join(), Maybe::just(2));
    /// assert_eq!(Maybe::just(Maybe::<i32>::nothing()).join(), Maybe::nothing());
    /// ```
    ///
    /// A container that holds a plain value has nothing to flatten:
    ///
    /// ```compile_fail
    /// use fantasia::control::Maybe;
    /// use fantasia::typeclass::Monad;
    ///
    /// let flat: Maybe<i32> = Maybe::just(5);
    /// let _: Maybe<i32> = flat.join();
    /// ```
    ///
    /// Nor can two different containers be merged:
    ///
    /// ```compile_fail
    /// use fantasia::control::{Either, Maybe};
    /// use fantasia::typeclass::Monad;
    ///
    /// let mixed: Maybe<Either<String, i32>> = Maybe::just(Either::Right(1));
    /// let _: Maybe<i32> = mixed.join();
    /// ```
    #[inline]
    fn join<B>(self) -> Self::WithType<B>
    where
        Self: Sized,
        Self::Inner: SameAs<Self::WithType<B>>,
    {
        self.chain(<Self::Inner as SameAs<Self::WithType<B>>>::same)
    }

    /// Sequences two containers, discarding the value of the first.
    ///
    /// A failure in `self` (`Nothing`, `Left`) still propagates.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fantasia::control::Maybe;
    /// use fantasia::typeclass::Monad;
    ///
    /// assert_eq!(Maybe::just(5).then(Maybe::just("next")), Maybe::just("next"));
    /// assert_eq!(Maybe::<i32>::nothing().then(Maybe::just("next")), Maybe::nothing());
    /// ```
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.chain(|_| next)
    }
}

// =============================================================================
// Identity<A> Implementation
// =============================================================================

impl<A> Monad for Identity<A> {
    #[inline]
    fn chain<B, F>(self, function: F) -> Identity<B>
    where
        F: FnOnce(A) -> Identity<B>,
    {
        function(self.0)
    }
}
