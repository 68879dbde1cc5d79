//! Property-based tests for the Functor laws.
//!
//! - **Identity Law**: `fa.map(|x| x) == fa`
//! - **Composition Law**: `fa.map(f).map(g) == fa.map(|x| g(f(x)))`
//!
//! Checked for every container.

use fantasia::compose;
use fantasia::compose::identity;
use fantasia::control::{Either, Maybe};
use fantasia::typeclass::{Functor, Identity};
use proptest::prelude::*;

fn maybe_strategy() -> impl Strategy<Value = Maybe<i32>> {
    any::<Option<i32>>().prop_map(Maybe::from)
}

fn either_strategy() -> impl Strategy<Value = Either<String, i32>> {
    prop::result::maybe_ok(any::<i32>(), any::<String>()).prop_map(Either::from)
}

// =============================================================================
// Identity<A>
// =============================================================================

proptest! {
    #[test]
    fn prop_identity_identity_law(value in any::<i32>()) {
        prop_assert_eq!(Identity::new(value).map(identity), Identity::new(value));
    }

    #[test]
    fn prop_identity_composition_law(value in any::<i32>()) {
        let function1 = |n: i32| n.wrapping_add(1);
        let function2 = |n: i32| n.wrapping_mul(2);

        let left = Identity::new(value).map(function1).map(function2);
        let right = Identity::new(value).map(compose!(function2, function1));

        prop_assert_eq!(left, right);
    }
}

// =============================================================================
// Maybe<A>
// =============================================================================

proptest! {
    #[test]
    fn prop_maybe_identity_law(value in maybe_strategy()) {
        prop_assert_eq!(value.map(identity), value);
    }

    #[test]
    fn prop_maybe_composition_law(value in maybe_strategy()) {
        let function1 = |n: i32| n.to_string();
        let function2 = |s: String| s.len();

        let left = value.map(function1).map(function2);
        let right = value.map(|x| function2(function1(x)));

        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_maybe_map_preserves_variant(value in maybe_strategy()) {
        prop_assert_eq!(value.map(|n| n.wrapping_neg()).is_just(), value.is_just());
    }

    #[test]
    fn prop_maybe_map_nullable_none_is_nothing(value in maybe_strategy()) {
        prop_assert!(value.map_nullable(|_| None::<i32>).is_nothing());
    }
}

// =============================================================================
// Either<L, R>
// =============================================================================

proptest! {
    #[test]
    fn prop_either_identity_law(value in either_strategy()) {
        prop_assert_eq!(value.clone().map(identity), value);
    }

    #[test]
    fn prop_either_composition_law(value in either_strategy()) {
        let function1 = |n: i32| n.wrapping_sub(7);
        let function2 = |n: i32| n.wrapping_mul(3);

        let left = value.clone().map(function1).map(function2);
        let right = value.map(compose!(function2, function1));

        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_either_map_leaves_left_untouched(message in any::<String>()) {
        let left: Either<String, i32> = Either::Left(message.clone());
        prop_assert_eq!(left.map(|n| n + 1), Either::Left(message));
    }
}
