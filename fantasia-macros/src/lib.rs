//! Procedural macros for fantasia function composition.
//!
//! # Available Function-like Macros
//!
//! - [`curry!`]: Converts multi-argument closures into curried form
//! - [`lift!`]: Lifts a curried n-ary function over n accessor functions
//!
//! # Example: Currying
//!
//! ```rust,ignore
//! use fantasia::curry;
//!
//! let add = curry!(|a: i32, b: i32| a + b);
//! assert_eq!(add(5)(3), 8);
//!
//! let add_five = add(5);
//! assert_eq!(add_five(10), 15);
//! assert_eq!(add_five(20), 25);
//! ```
//!
//! # Example: Lifting
//!
//! ```rust,ignore
//! use fantasia::{curry, lift};
//!
//! struct Agent { first_name: String, last_name: String }
//!
//! let greet = curry!(|first: String, last: String| format!("Moin Moin, {first} {last}"));
//! let greet_agent = lift!(
//!     greet,
//!     |agent: &Agent| agent.first_name.clone(),
//!     |agent: &Agent| agent.last_name.clone(),
//! );
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod curry;
mod lift;

use proc_macro::TokenStream;

/// Converts a multi-argument closure into curried form.
///
/// # Usage
///
/// ```rust,ignore
/// use fantasia::curry;
///
/// let curried = curry!(|a: i32, b: i32| a + b);
/// assert_eq!(curried(5)(3), 8);
///
/// // An existing function needs its arity spelled out
/// fn add(a: i32, b: i32) -> i32 { a + b }
/// let curried = curry!(add, 2);
/// assert_eq!(curried(5)(3), 8);
/// ```
///
/// # Type constraints
///
/// - **The wrapped function**: must implement `Clone` (closures without
///   non-`Clone` captures and function items do)
/// - **Arguments (except the last)**: must implement `Clone`
/// - **Last argument**: no special constraints
///
/// Every level keeps its own clone of the function and of the arguments
/// supplied so far, so a partial application can be called more than once.
///
/// ```rust,ignore
/// struct NonClone(i32);
///
/// // OK: NonClone as last argument
/// let curried = curry!(|a: i32, b: NonClone| a + b.0);
///
/// // Error: NonClone as non-last argument (Clone required)
/// // let curried = curry!(|a: NonClone, b: i32| a.0 + b);
/// ```
///
/// The generated closures are `Send` and `Sync` whenever the function and the
/// captured arguments are.
#[proc_macro]
pub fn curry(input: TokenStream) -> TokenStream {
    curry::expand(input.into()).into()
}

/// Lifts a curried n-ary function over n unary accessor functions.
///
/// `lift!(f, g1, g2, ..., gn)` returns a closure taking `&x` and computing
/// `f(g1(&x))(g2(&x))...(gn(&x))`. Every accessor receives a shared
/// reference to the same input.
///
/// # Usage
///
/// ```rust,ignore
/// use fantasia::{curry, lift};
///
/// let add = curry!(|a: i32, b: i32| a + b);
/// let sum_of_pair = lift!(add, |pair: &(i32, i32)| pair.0, |pair: &(i32, i32)| pair.1);
/// assert_eq!(sum_of_pair(&(3, 4)), 7);
/// ```
///
/// At least one accessor is required; `lift!(f)` is a compile error.
#[proc_macro]
pub fn lift(input: TokenStream) -> TokenStream {
    lift::expand(input.into()).into()
}
