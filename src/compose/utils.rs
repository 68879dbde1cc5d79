//! Small combinators that show up as building blocks in compositions.

/// Returns its argument unchanged.
///
/// The unit of composition: `compose!(identity, f)` and `compose!(f, identity)`
/// behave like `f`, and `c.map(identity)` holds the same value as `c`.
///
/// # Examples
///
/// ```
/// use fantasia::compose;
/// use fantasia::compose::identity;
///
/// let double = |x: i32| x * 2;
/// assert_eq!(compose!(identity, double)(5), double(5));
/// ```
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}

/// Returns a function that ignores its input and yields a clone of `value`.
///
/// # Examples
///
/// ```
/// use fantasia::compose::constant;
///
/// let zeros: Vec<i32> = vec![1, 2, 3].into_iter().map(constant(0)).collect();
/// assert_eq!(zeros, vec![0, 0, 0]);
/// ```
#[inline]
pub fn constant<T: Clone, U>(value: T) -> impl Fn(U) -> T {
    move |_| value.clone()
}

/// Swaps the two arguments of a binary function.
///
/// `flip(f)(b, a) == f(a, b)` and `flip(flip(f))` behaves like `f`.
///
/// # Examples
///
/// ```
/// use fantasia::compose::flip;
///
/// let subtract = |minuend: i32, subtrahend: i32| minuend - subtrahend;
/// let subtract_from = flip(subtract);
/// assert_eq!(subtract_from(3, 10), 7);
/// ```
#[inline]
pub fn flip<A, B, C, F>(function: F) -> impl Fn(B, A) -> C
where
    F: Fn(A, B) -> C,
{
    move |second, first| function(first, second)
}
