//! Errors raised when a value is taken out of a container.
//!
//! Inside the container world absence is a value (`Nothing`, `Left`), not an
//! error. These types only appear at the boundary where a caller asks for a
//! plain value and the container cannot provide one.

use thiserror::Error;

/// Returned by [`Maybe::try_into_inner`](super::Maybe::try_into_inner) when
/// the container is `Nothing`.
///
/// # Examples
///
/// ```rust
/// use fantasia::control::{Maybe, NothingError};
///
/// let missing: Maybe<i32> = Maybe::nothing();
/// assert_eq!(missing.try_into_inner(), Err(NothingError));
/// assert_eq!(NothingError.to_string(), "expected Just but found Nothing");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[error("expected Just but found Nothing")]
pub struct NothingError;
