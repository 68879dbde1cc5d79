//! Concrete containers with short-circuiting semantics.
//!
//! - [`Maybe`]: a value that may be absent (`Just` / `Nothing`)
//! - [`Either`]: a success or a described failure (`Right` / `Left`)
//!
//! Both implement every level of the [`crate::typeclass`] hierarchy. The
//! always-present container, [`Identity`](crate::typeclass::Identity),
//! lives next to the traits.
//!
//! # Examples
//!
//! ```rust
//! use fantasia::control::{Either, Maybe};
//! use fantasia::typeclass::{Functor, Monad};
//!
//! let price = Maybe::just(12).map(|p| p * 3);
//! assert_eq!(price.to_string(), "Just(36)");
//!
//! let checked = price.ok_or("no price").chain(|p| {
//!     if p < 100 { Either::Right(p) } else { Either::Left("too expensive") }
//! });
//! assert_eq!(checked, Either::Right(36));
//! ```

mod either;
mod error;
mod maybe;

pub use either::Either;
pub use error::NothingError;
pub use maybe::Maybe;
