//! Function composition utilities.
//!
//! Everything here works on plain functions and closures; no container is
//! involved until a composed function is handed to `map` or `chain`.
//!
//! - [`compose!`](crate::compose!): right-to-left composition
//! - [`pipe!`](crate::pipe!): left-to-right composition
//! - [`pipe_value!`](crate::pipe_value!): push a value through a pipeline now
//! - [`lift2`], [`lift3`], [`lift!`]: feed several accessors of one input into
//!   a curried function
//! - [`curry!`]: turn a closure or function of arity two or more into nested
//!   unary closures
//! - [`identity`], [`constant`], [`flip`]: combinators
//! - [`trace`]: log a value mid-pipeline (`trace` feature)
//!
//! # Examples
//!
//! ```
//! use fantasia::{compose, curry, pipe};
//!
//! let add_ten = |x: i32| x + 10;
//! let double = |x: i32| x * 2;
//!
//! assert_eq!(compose!(double, add_ten)(5), 30);
//! assert_eq!(pipe!(add_ten, double)(5), 30);
//!
//! let add = curry!(|a: i32, b: i32| a + b);
//! let add_five = add(5);
//! assert_eq!(pipe!(add_five, double)(1), 12);
//! ```
//!
//! # Laws
//!
//! ```text
//! compose!(f, compose!(g, h)) == compose!(compose!(f, g), h)
//! compose!(identity, f) == f == compose!(f, identity)
//! pipe!(f, g, h) == compose!(h, g, f)
//! flip(flip(f)) == f
//! ```

mod compose_macro;
mod lift;
mod pipe_macro;
#[cfg(feature = "trace")]
mod trace;
mod utils;

pub use lift::{lift2, lift3};
#[cfg(feature = "trace")]
pub use trace::{TRACE_TARGET, trace};
pub use utils::{constant, flip, identity};

pub use fantasia_macros::{curry, lift};

// Declarative macros live at the crate root via #[macro_export].
pub use crate::compose;
pub use crate::pipe;
pub use crate::pipe_value;
