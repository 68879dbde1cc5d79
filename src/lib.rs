//! # fantasia
//!
//! Function composition and algebraic containers, the way they appear in
//! introductory functional programming material.
//!
//! ## Overview
//!
//! - **Composition**: `compose!`, `pipe!`, `pipe_value!`, accessor lifting
//!   (`lift2`, `lift3`, `lift!`), `curry!`, small combinators, `trace`
//! - **Type classes**: `Functor`, `Apply`, `Applicative`, `Monad`, with the
//!   applicative lifts `lift_a2`, `lift_a3` and `lift_a!`
//! - **Containers**: `Identity` (always present), `Maybe` (`Just` /
//!   `Nothing`) and `Either` (`Right` / `Left`)
//!
//! ## Feature Flags
//!
//! - `typeclass`: the container traits and `Identity`
//! - `compose`: composition macros and helpers
//! - `control`: `Maybe` and `Either`
//! - `trace`: the `trace` helper, backed by `tracing`
//! - `serde`: `Serialize`/`Deserialize` for the containers
//! - `full`: everything
//!
//! ## Example
//!
//! ```rust
//! use fantasia::prelude::*;
//!
//! let add_ten = |x: i32| x + 10;
//! let double = |x: i32| x * 2;
//!
//! let result = Maybe::just(5).map(pipe!(add_ten, double));
//! assert_eq!(result.to_string(), "Just(30)");
//!
//! let missing = Maybe::just(vec![1, 2, 3]).map_nullable(|xs| xs.get(7).copied());
//! assert_eq!(missing.map(double), Maybe::nothing());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// ```rust
/// use fantasia::prelude::*;
/// ```
pub mod prelude {
    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "compose")]
    pub use crate::compose::*;

    #[cfg(feature = "control")]
    pub use crate::control::*;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "compose")]
pub mod compose;

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "compose")]
pub use fantasia_macros::{curry, lift};
