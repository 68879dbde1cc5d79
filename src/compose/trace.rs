//! Pass-through logging for composition chains.

use std::fmt::Debug;

/// Event target used by [`trace`].
pub const TRACE_TARGET: &str = "fantasia::trace";

/// Returns an identity function that logs each value passing through it.
///
/// Every call emits a `DEBUG` event on the `fantasia::trace` target whose
/// message is `label` and whose `value` field is the `Debug` rendering of
/// the input, then returns the input unchanged. Nothing is printed unless
/// the application installs a `tracing` subscriber.
///
/// # Examples
///
/// ```
/// use fantasia::compose::trace;
/// use fantasia::pipe;
///
/// let double = |x: i32| x * 2;
/// let add_one = |x: i32| x + 1;
///
/// let calculate = pipe!(double, trace("after double"), add_one);
/// assert_eq!(calculate(5), 11);
/// ```
pub fn trace<T: Debug>(label: &'static str) -> impl Fn(T) -> T {
    move |value: T| {
        tracing::debug!(target: TRACE_TARGET, value = ?value, "{label}");
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn trace_returns_input_without_subscriber() {
        let traced = trace::<Vec<u8>>("bytes");
        assert_eq!(traced(vec![1, 2]), vec![1, 2]);
    }

    #[rstest]
    fn trace_is_an_identity_inside_compose() {
        let square = |x: i32| x * x;
        let pipeline = crate::compose!(square, trace("before square"));
        assert_eq!(pipeline(4), 16);
    }
}
