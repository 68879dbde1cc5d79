//! Container type classes.
//!
//! The capability levels form a chain of supertraits:
//!
//! - [`Functor`]: `map`
//! - [`Apply`]: `Functor` + `ap` (plus `map2`, `map3`, `product`, and the
//!   [`lift_a2`], [`lift_a3`] and [`lift_a!`] lifts)
//! - [`Applicative`]: `Apply` + `of`
//! - [`Monad`]: `Applicative` + `chain` and `join`
//!
//! Each level is an explicit trait and each concrete container implements
//! the levels it supports. [`Identity`] lives here because it is the
//! reference implementation of every level; the optional and either-style
//! containers live in [`crate::control`].
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust does not have native support for higher-kinded types. The traits
//! are written against [`TypeConstructor`], whose generic associated type
//! `WithType<B>` names "the same container holding a `B`".
//!
//! # Examples
//!
//! ```rust
//! use fantasia::control::Maybe;
//! use fantasia::typeclass::{Applicative, Functor, Monad, lift_a2};
//!
//! let total = lift_a2(|x: i32| move |y: i32| x + y, Maybe::of(3), Maybe::of(4));
//! assert_eq!(total, Maybe::just(7));
//!
//! let described = total.map(|n| format!("total: {n}"));
//! assert_eq!(described, Maybe::just("total: 7".to_string()));
//!
//! let flat = Maybe::just(7).chain(|n| if n > 5 { Maybe::just(n) } else { Maybe::nothing() });
//! assert_eq!(flat, Maybe::just(7));
//! ```

mod applicative;
mod apply;
mod functor;
mod higher;
mod identity;
mod monad;

pub use applicative::Applicative;
pub use apply::{Apply, lift_a2, lift_a3};
pub use functor::Functor;
pub use higher::{SameAs, TypeConstructor};
pub use identity::Identity;
pub use monad::Monad;

pub use crate::lift_a;
