//! Left-to-right composition: `pipe!` builds a function, `pipe_value!`
//! pushes a value through immediately.

/// Composes unary functions from left to right.
///
/// `pipe!(f, g, h)` returns a function `x -> h(g(f(x)))`; the leftmost
/// function is applied first. It is `compose!` with the arguments reversed.
///
/// # Examples
///
/// ```
/// use fantasia::pipe;
///
/// let add_ten = |x: i32| x + 10;
/// let double = |x: i32| x * 2;
///
/// let calculate = pipe!(add_ten, double);
/// assert_eq!(calculate(5), 30);
/// ```
///
/// The same pipeline reads in the opposite order with `compose!`:
///
/// ```
/// use fantasia::{compose, pipe};
///
/// fn f(x: i32) -> i32 { x + 1 }
/// fn g(x: i32) -> i32 { x * 2 }
/// fn h(x: i32) -> i32 { x - 3 }
///
/// assert_eq!(pipe!(f, g, h)(10), compose!(h, g, f)(10));
/// ```
#[macro_export]
macro_rules! pipe {
    ($function:expr $(,)?) => {
        $function
    };

    ($first:expr, $($rest:expr),+ $(,)?) => {{
        let first = $first;
        let rest = $crate::pipe!($($rest),+);
        move |input| rest(first(input))
    }};
}

/// Pushes a value through a series of functions, left to right.
///
/// `pipe_value!(x, f, g)` is `g(f(x))`, evaluated immediately. Each function
/// is called exactly once, so `FnOnce` closures that consume their captures
/// are accepted.
///
/// # Examples
///
/// ```
/// use fantasia::pipe_value;
///
/// fn keep_large(values: Vec<i32>) -> Vec<i32> {
///     values.into_iter().filter(|x| *x > 5).collect()
/// }
///
/// let doubled = |values: Vec<i32>| values.into_iter().map(|x| x * 2).collect::<Vec<_>>();
/// assert_eq!(pipe_value!(vec![1, 2, 3, 4, 5], doubled, keep_large), vec![6, 8, 10]);
/// ```
#[macro_export]
macro_rules! pipe_value {
    ($value:expr $(,)?) => {
        $value
    };

    ($value:expr, $function:expr $(, $rest:expr)* $(,)?) => {
        $crate::pipe_value!(($function)($value) $(, $rest)*)
    };
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
    fn pipe_single_function_is_returned_unchanged() {
        assert_eq!(pipe!(square)(6), 36);
    }

    #[rstest]
    #[case(3, 10)]
    #[case(0, 1)]
    fn pipe_leftmost_runs_first(#[case] input: i32, #[case] expected: i32) {
        assert_eq!(pipe!(square, add_one)(input), expected);
    }

    #[rstest]
    fn pipe_is_reversed_compose() {
        let halve = |x: i32| x / 2;
        let piped = pipe!(add_one, square, halve);
        let composed = crate::compose!(halve, square, add_one);
        for x in 0..10 {
            assert_eq!(piped(x), composed(x));
        }
    }

    #[rstest]
    fn pipe_value_without_functions_returns_value() {
        assert_eq!(pipe_value!("unchanged"), "unchanged");
    }

    #[rstest]
    fn pipe_value_accepts_consuming_closures() {
        let suffix = String::from(" Bond");
        let append = move |name: String| name + &suffix;
        assert_eq!(pipe_value!(String::from("James"), append), "James Bond");
    }

    #[rstest]
    fn pipe_value_applies_in_order() {
        assert_eq!(pipe_value!(3, square, add_one, square), 100);
    }
}
