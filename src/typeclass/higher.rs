//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust cannot abstract over a type constructor such as `Maybe<_>` directly,
//! so every container names itself applied to another type through the
//! `WithType<B>` associated type. The container traits (`Functor`, `Apply`,
//! `Applicative`, `Monad`) are all written against this trait.
//!
//! # Example
//!
//! ```rust
//! use fantasia::control::Maybe;
//! use fantasia::typeclass::TypeConstructor;
//!
//! fn retarget<T: TypeConstructor>(_value: T) -> T::WithType<String>
//! where
//!     T::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let nothing: Maybe<String> = retarget(Maybe::just(42));
//! assert!(nothing.is_nothing());
//! ```

/// A trait representing a type constructor.
///
/// # Associated Types
///
/// - `Inner`: The type parameter that this type constructor is currently applied to.
/// - `WithType<B>`: The same type constructor applied to a different type `B`.
///
/// # Laws
///
/// `<F as TypeConstructor>::WithType<F::Inner>` is the same type as `F`.
pub trait TypeConstructor {
    /// The inner type that this type constructor is applied to.
    ///
    /// For example, for `Maybe<i32>`, this would be `i32`.
    type Inner;

    /// The same type constructor applied to a different type `B`.
    ///
    /// For example, for `Maybe<i32>`, `WithType<String>` would be `Maybe<String>`.
    type WithType<B>: TypeConstructor<Inner = B>;
}

mod sealed {
    pub trait Sealed<T> {}

    impl<T> Sealed<T> for T {}
}

/// Type equality witness: `A: SameAs<B>` holds only when `A` and `B` are the
/// same type.
///
/// `Monad::join` uses this bound to require that the held value is itself a
/// container of the same variant. The trait is sealed, so the reflexive impl
/// is the only one and the compiler can infer `B` from `A`.
pub trait SameAs<T>: sealed::Sealed<T> {
    /// Returns `self` typed as `T`.
    fn same(self) -> T;
}

impl<T> SameAs<T> for T {
    #[inline]
    fn same(self) -> T {
        self
    }
}
