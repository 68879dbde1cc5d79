#![cfg(feature = "compose")]
//! Property-based tests for the composition laws.
//!
//! - **Associativity**: `compose!(f, compose!(g, h)) == compose!(compose!(f, g), h)`
//! - **Identity**: `compose!(identity, f) == f == compose!(f, identity)`
//! - **Pipe/Compose**: `pipe!(f, g, h) == compose!(h, g, f)`
//! - **Flip**: `flip(flip(f)) == f`, `flip(f)(a, b) == f(b, a)`
//! - **Curry**: `curry!(f, 2)(a)(b) == f(a, b)`
//! - **Lift**: `lift2(f, g1, g2)(x) == f(g1(x))(g2(x))`

use fantasia::compose::{flip, identity, lift2};
use fantasia::{compose, curry, pipe, pipe_value};
use proptest::prelude::*;

fn subtract(a: i64, b: i64) -> i64 {
    a.wrapping_sub(b)
}

proptest! {
    #[test]
    fn prop_compose_left_identity(x in any::<i32>()) {
        let function = |n: i32| n.wrapping_mul(2);
        prop_assert_eq!(compose!(identity, function)(x), function(x));
    }

    #[test]
    fn prop_compose_right_identity(x in any::<i32>()) {
        let function = |n: i32| n.wrapping_mul(2);
        prop_assert_eq!(compose!(function, identity)(x), function(x));
    }

    #[test]
    fn prop_compose_associativity(x in any::<i32>()) {
        let function1 = |n: i32| n.wrapping_add(1);
        let function2 = |n: i32| n.wrapping_mul(3);
        let function3 = |n: i32| n.wrapping_sub(7);

        let left = compose!(function1, compose!(function2, function3));
        let right = compose!(compose!(function1, function2), function3);

        prop_assert_eq!(left(x), right(x));
    }

    #[test]
    fn prop_pipe_is_reversed_compose(x in any::<i32>()) {
        let function1 = |n: i32| n.wrapping_add(1);
        let function2 = |n: i32| n.wrapping_mul(3);
        let function3 = |n: i32| n.wrapping_sub(7);

        prop_assert_eq!(
            pipe!(function1, function2, function3)(x),
            compose!(function3, function2, function1)(x)
        );
    }

    #[test]
    fn prop_pipe_value_matches_pipe(x in any::<i32>()) {
        let function1 = |n: i32| n.wrapping_neg();
        let function2 = |n: i32| i64::from(n) * 2;
        prop_assert_eq!(pipe_value!(x, function1, function2), pipe!(function1, function2)(x));
    }

    #[test]
    fn prop_flip_definition(a in any::<i64>(), b in any::<i64>()) {
        prop_assert_eq!(flip(subtract)(b, a), subtract(a, b));
    }

    #[test]
    fn prop_double_flip_is_identity(a in any::<i64>(), b in any::<i64>()) {
        prop_assert_eq!(flip(flip(subtract))(a, b), subtract(a, b));
    }

    #[test]
    fn prop_curry_equivalence(a in any::<i64>(), b in any::<i64>()) {
        let curried = curry!(subtract, 2);
        prop_assert_eq!(curried(a)(b), subtract(a, b));
    }

    #[test]
    fn prop_lift2_definition(x in any::<(i32, i32)>()) {
        let add = |a: i32| move |b: i32| a.wrapping_add(b);
        let first = |pair: &(i32, i32)| pair.0;
        let second = |pair: &(i32, i32)| pair.1;
        prop_assert_eq!(lift2(add, first, second)(&x), add(first(&x))(second(&x)));
    }
}
