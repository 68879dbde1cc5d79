//! Apply type class - applying a wrapped function to a wrapped value.
//!
//! `Apply` extends `Functor` with `ap`. The receiver holds a function and
//! `ap` hands that function to `other.map`, so two independent containers
//! can be combined:
//!
//! ```text
//! lift_a2(f, a, b) == a.map(f).ap(b)
//! ```
//!
//! # Laws
//!
//! The laws are written in the receiver-holds-function orientation used
//! throughout this crate, with `of` coming from `Applicative`:
//!
//! ## Identity Law
//!
//! ```text
//! of(|x| x).ap(v) == v
//! ```
//!
//! ## Homomorphism Law
//!
//! ```text
//! of(f).ap(of(x)) == of(f(x))
//! ```
//!
//! ## Interchange Law
//!
//! ```text
//! u.ap(of(y)) == of(|f| f(y)).ap(u)
//! ```
//!
//! ## Consistency with Functor
//!
//! ```text
//! of(f).ap(x) == x.map(f)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use fantasia::control::Maybe;
//! use fantasia::typeclass::{Apply, lift_a2};
//!
//! let tell = Maybe::just(|x: i32| format!("{x} is the number in the Applicative"));
//! assert_eq!(tell.ap(Maybe::just(5)), Maybe::just("5 is the number in the Applicative".to_string()));
//!
//! let sum = lift_a2(|x: i32| move |y: i32| x + y, Maybe::just(3), Maybe::just(4));
//! assert_eq!(sum, Maybe::just(7));
//! ```

use super::functor::Functor;
use super::identity::Identity;

/// A type class for functors that can apply a function held in one container
/// to the value held in another container of the same variant.
pub trait Apply: Functor {
    /// Applies the function held by `self` to the value held by `other`.
    ///
    /// Equivalent to `other.map(function_inside_self)`; if either side is
    /// empty (for containers that can be), the result is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fantasia::control::Maybe;
    /// use fantasia::typeclass::Apply;
    ///
    /// let increment = |x: i32| x + 1;
    /// assert_eq!(Maybe::just(increment).ap(Maybe::just(5)), Maybe::just(6));
    /// assert_eq!(Maybe::just(increment).ap(Maybe::nothing()), Maybe::nothing());
    /// ```
    fn ap<B, Output>(self, other: Self::WithType<B>) -> Self::WithType<Output>
    where
        Self: Sized,
        Self::Inner: FnOnce(B) -> Output;

    /// Combines two containers with a binary function.
    ///
    /// Every implementation equals `self.map(curried).ap(other)`.
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        F: FnOnce(Self::Inner, B) -> C;

    /// Combines three containers with a ternary function.
    ///
    /// Every implementation equals `self.map(curried).ap(second).ap(third)`.
    fn map3<B, C, D, F>(
        self,
        second: Self::WithType<B>,
        third: Self::WithType<C>,
        function: F,
    ) -> Self::WithType<D>
    where
        F: FnOnce(Self::Inner, B, C) -> D;

    /// Combines two containers into a container of a tuple.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fantasia::control::Maybe;
    /// use fantasia::typeclass::Apply;
    ///
    /// assert_eq!(Maybe::just(1).product(Maybe::just("a")), Maybe::just((1, "a")));
    /// ```
    #[inline]
    fn product<B>(self, other: Self::WithType<B>) -> Self::WithType<(Self::Inner, B)>
    where
        Self: Sized,
    {
        self.map2(other, |a, b| (a, b))
    }
}

/// Lifts a curried binary function into an `Apply` context.
///
/// `lift_a2(f, a, b)` is `a.map(f).ap(b)`. The two operands have no data
/// dependency on each other.
///
/// # Examples
///
/// ```rust
/// use fantasia::typeclass::{Identity, lift_a2};
///
/// let tell = |x: i32| move |y: i32| format!("{} is the number in the Applicative", x + y);
/// let told = lift_a2(tell, Identity::new(5), Identity::new(5));
/// assert_eq!(told.into_inner(), "10 is the number in the Applicative");
/// ```
#[inline]
pub fn lift_a2<FA, B, C, P, F>(function: F, first: FA, second: FA::WithType<B>) -> FA::WithType<C>
where
    FA: Apply,
    F: FnOnce(FA::Inner) -> P,
    P: FnOnce(B) -> C,
{
    first.map2(second, move |a, b| function(a)(b))
}

/// Lifts a curried ternary function into an `Apply` context.
///
/// `lift_a3(f, a, b, c)` is `a.map(f).ap(b).ap(c)`.
///
/// # Examples
///
/// ```rust
/// use fantasia::control::Maybe;
/// use fantasia::typeclass::lift_a3;
///
/// let volume = |w: u32| move |h: u32| move |d: u32| w * h * d;
/// assert_eq!(lift_a3(volume, Maybe::just(2), Maybe::just(3), Maybe::just(4)), Maybe::just(24));
/// assert_eq!(lift_a3(volume, Maybe::just(2), Maybe::nothing(), Maybe::just(4)), Maybe::nothing());
/// ```
#[inline]
pub fn lift_a3<FA, B, C, D, P, Q, F>(
    function: F,
    first: FA,
    second: FA::WithType<B>,
    third: FA::WithType<C>,
) -> FA::WithType<D>
where
    FA: Apply,
    F: FnOnce(FA::Inner) -> P,
    P: FnOnce(B) -> Q,
    Q: FnOnce(C) -> D,
{
    first.map3(second, third, move |a, b, c| function(a)(b)(c))
}

/// Lifts a curried function of any arity into an `Apply` context.
///
/// `lift_a!(f, a1, a2, ..., aN)` expands to `a1.map(f).ap(a2)...ap(aN)`, so
/// `f` must take as many curried arguments as there are operands. With a
/// single operand it is plain `map`.
///
/// # Examples
///
/// ```rust
/// use fantasia::control::Maybe;
/// use fantasia::lift_a;
///
/// let sum4 = |a: i32| move |b: i32| move |c: i32| move |d: i32| a + b + c + d;
///
/// let total = lift_a!(sum4, Maybe::just(1), Maybe::just(2), Maybe::just(3), Maybe::just(4));
/// assert_eq!(total, Maybe::just(10));
///
/// let missing = lift_a!(sum4, Maybe::just(1), Maybe::nothing(), Maybe::just(3), Maybe::just(4));
/// assert_eq!(missing, Maybe::nothing());
/// ```
#[macro_export]
macro_rules! lift_a {
    ($function:expr, $first:expr $(, $rest:expr)* $(,)?) => {{
        let lifted = $crate::typeclass::Functor::map($first, $function);
        $(
            let lifted = $crate::typeclass::Apply::ap(lifted, $rest);
        )*
        lifted
    }};
}

// =============================================================================
// Identity<A> Implementation
// =============================================================================

impl<A> Apply for Identity<A> {
    #[inline]
    fn ap<B, Output>(self, other: Identity<B>) -> Identity<Output>
    where
        A: FnOnce(B) -> Output,
    {
        other.map(self.0)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Identity<B>, function: F) -> Identity<C>
    where
        F: FnOnce(A, B) -> C,
    {
        self.map(|a| move |b| function(a, b)).ap(other)
    }

    #[inline]
    fn map3<B, C, D, F>(self, second: Identity<B>, third: Identity<C>, function: F) -> Identity<D>
    where
        F: FnOnce(A, B, C) -> D,
    {
        self.map(|a| move |b| move |c| function(a, b, c))
            .ap(second)
            .ap(third)
    }
}
