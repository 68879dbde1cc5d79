//! The `compose!` macro: right-to-left function composition.

/// Composes unary functions from right to left.
///
/// `compose!(f, g, h)` returns a function `x -> f(g(h(x)))`; the rightmost
/// function is applied first. A single function is returned unchanged.
///
/// Every function must take exactly one argument and its output type must
/// match the input of the function to its left. Mismatches are compile
/// errors. The result implements `Fn` whenever every part does, so it can be
/// called repeatedly, stored, or handed to [`Functor::map`](crate::typeclass::Functor::map).
///
/// # Laws
///
/// - **Associativity**: `compose!(f, compose!(g, h)) == compose!(compose!(f, g), h)`
/// - **Identity**: `compose!(identity, f) == f == compose!(f, identity)`
///
/// # Examples
///
/// ```
/// use fantasia::compose;
///
/// let add_ten = |x: i32| x + 10;
/// let double = |x: i32| x * 2;
///
/// // add_ten runs first: (5 + 10) * 2
/// assert_eq!(compose!(double, add_ten)(5), 30);
/// ```
///
/// Types flow through the chain:
///
/// ```
/// use fantasia::compose;
///
/// fn digits(value: u64) -> String { value.to_string() }
/// fn count(text: String) -> usize { text.len() }
///
/// let width = compose!(count, digits);
/// assert_eq!(width(12345), 5);
/// ```
///
/// Mapping a composed function over a container:
///
/// ```
/// use fantasia::compose;
/// use fantasia::control::Maybe;
/// use fantasia::typeclass::Functor;
///
/// let square = |x: i32| x * x;
/// let add_one = |x: i32| x + 1;
/// assert_eq!(Maybe::just(3).map(compose!(square, add_one)), Maybe::just(16));
/// ```
///
/// Adjacent functions whose types do not line up are rejected:
///
/// ```compile_fail
/// use fantasia::compose;
///
/// fn length(text: String) -> usize { text.len() }
/// fn negate(value: i32) -> i32 { -value }
///
/// let composed = compose!(negate, length);
/// let _ = composed(String::from("moin"));
/// ```
#[macro_export]
macro_rules! compose {
    ($function:expr $(,)?) => {
        $function
    };

    ($outer:expr, $($rest:expr),+ $(,)?) => {{
        let outer = $outer;
        let rest = $crate::compose!($($rest),+);
        move |input| outer(rest(input))
    }};
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    fn add_one(x: i32) -> i32 {
        x + 1
    }

    fn square(x: i32) -> i32 {
        x * x
    }

    #[rstest]
    fn single_function_is_returned_unchanged() {
        assert_eq!(compose!(square)(7), 49);
    }

    #[rstest]
    #[case(3, 16)]
    #[case(0, 1)]
    #[case(-2, 1)]
    fn rightmost_runs_first(#[case] input: i32, #[case] expected: i32) {
        assert_eq!(compose!(square, add_one)(input), expected);
    }

    #[rstest]
    fn composed_function_is_reusable() {
        let shout = compose!(|s: String| s + "!", |s: &str| s.to_uppercase());
        assert_eq!(shout("hi"), "HI!");
        assert_eq!(shout("moin"), "MOIN!");
    }

    #[rstest]
    fn associativity_holds() {
        let negate = |x: i32| -x;
        let left = compose!(negate, compose!(square, add_one));
        let right = compose!(compose!(negate, square), add_one);
        for x in -3..=3 {
            assert_eq!(left(x), right(x));
        }
    }
}
