//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust cannot abstract over a type constructor such as `Result<_>` directly.
//! [`TypeConstructor`] records the currently applied type (`Inner`) and how to
//! re-apply the same constructor to another type (`WithType<B>`), which is
//! enough to state `Functor` and `Monad` generically.
//!
//! # Example
//!
//! ```rust
//! use resulting::result::Result;
//! use resulting::typeclass::TypeConstructor;
//!
//! fn retype<T: TypeConstructor>(_value: T) -> Option<T::WithType<String>> {
//!     None
//! }
//!
//! let retyped: Option<Result<String>> = retype(Result::success(42));
//! assert_eq!(retyped, None);
//! ```

use crate::result::Result;

/// A trait representing a type constructor applied to some type.
///
/// # Laws
///
/// **Consistency**: `<F as TypeConstructor>::WithType<F::Inner>` is `F`.
pub trait TypeConstructor {
    /// The type this constructor is currently applied to.
    type Inner;

    /// The same constructor applied to `B`.
    type WithType<B>: TypeConstructor<Inner = B>;
}

impl<T> TypeConstructor for Result<T> {
    type Inner = T;
    type WithType<B> = Result<B>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn result_inner_type_is_correct() {
        fn assert_inner<T: TypeConstructor<Inner = i32>>() {}
        assert_inner::<Result<i32>>();
    }

    #[rstest]
    fn result_with_type_retypes_the_success_side() {
        fn retype<T: TypeConstructor>(_value: &T) -> Vec<T::WithType<bool>> {
            Vec::new()
        }

        let retyped: Vec<Result<bool>> = retype(&Result::success(1u8));
        assert!(retyped.is_empty());
    }
}
