//! Functor type class - mapping over container values.
//!
//! This module provides the `Functor` trait, which represents types that can
//! have a pure function applied to their inner value while preserving the
//! surrounding structure. For [`Result`], the structure is the success/failure
//! state: mapping never turns a `Success` into a `Failure` or the reverse.
//!
//! # Laws
//!
//! All `Functor` implementations must satisfy these laws:
//!
//! ## Identity Law
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use resulting::result::Result;
//! use resulting::typeclass::Functor;
//!
//! let balance: Result<i32> = Result::success(10);
//! assert_eq!(balance.fmap(|n| n + 10), Result::success(20));
//!
//! let missing: Result<i32> = Result::failure("error");
//! assert_eq!(missing.fmap(|n| n + 10), Result::failure("error"));
//! ```

use super::higher::TypeConstructor;
use crate::result::Result;

/// A type class for types that can have a function mapped over their contents.
///
/// # Laws
///
/// ## Identity Law
///
/// ```text
/// fa.fmap(|x| x) == fa
/// ```
///
/// ## Composition Law
///
/// ```text
/// fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
/// ```
pub trait Functor: TypeConstructor {
    /// Applies a function to the value inside the functor.
    ///
    /// # Arguments
    ///
    /// * `function` - A function that transforms the inner value
    ///
    /// # Returns
    ///
    /// A new functor with the transformed value
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B;

    /// Applies a function to a reference of the value inside the functor.
    ///
    /// Leaves `self` available to the caller.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use resulting::result::Result;
    /// use resulting::typeclass::Functor;
    ///
    /// let name: Result<String> = Result::success("wallet".to_string());
    /// assert_eq!(name.fmap_ref(String::len), Result::success(6));
    /// assert!(name.is_success());
    /// ```
    fn fmap_ref<B, F>(&self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(&Self::Inner) -> B;

    /// Replaces the value inside the functor with a constant value.
    ///
    /// This is equivalent to `fmap(|_| value)`.
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.fmap(|_| value)
    }

    /// Discards the value inside the functor, replacing it with `()`.
    #[inline]
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.replace(())
    }
}

// =============================================================================
// Result<T> Implementation
// =============================================================================

impl<T> Functor for Result<T> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Result<B>
    where
        F: FnOnce(T) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Result<B>
    where
        F: FnOnce(&T) -> B,
    {
        self.as_ref().map(function)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[derive(Debug, Clone, PartialEq)]
    struct Wallet {
        balance: i32,
    }

    fn add_ten(wallet: Wallet) -> Wallet {
        Wallet {
            balance: wallet.balance + 10,
        }
    }

    // =========================================================================
    // Result<T> Tests
    // =========================================================================

    #[rstest]
    fn result_fmap_success() {
        let x: Result<i32> = Result::success(5);
        let y: Result<String> = x.fmap(|n| n.to_string());
        assert_eq!(y, Result::success("5".to_string()));
    }

    #[rstest]
    fn result_fmap_failure() {
        let x: Result<i32> = Result::failure("error");
        let y: Result<String> = x.fmap(|n| n.to_string());
        assert_eq!(y, Result::failure("error"));
    }

    #[rstest]
    fn result_fmap_wallet() {
        let wallet = Result::success(Wallet { balance: 10 });
        assert_eq!(wallet.fmap(add_ten), Result::success(Wallet { balance: 20 }));

        let missing: Result<Wallet> = Result::failure("error");
        assert_eq!(missing.fmap(add_ten), Result::failure("error"));
    }

    #[rstest]
    fn result_fmap_ref_failure_keeps_message() {
        let x: Result<String> = Result::failure("error");
        let y: Result<usize> = x.fmap_ref(String::len);
        assert_eq!(y, Result::failure("error"));
        assert_eq!(x, Result::failure("error"));
    }

    #[rstest]
    #[case(Result::success(5), Result::success("replaced"))]
    #[case(Result::failure("error"), Result::failure("error"))]
    fn result_replace(#[case] input: Result<i32>, #[case] expected: Result<&'static str>) {
        assert_eq!(input.replace("replaced"), expected);
    }

    #[rstest]
    #[case(Result::success(5), Result::success(()))]
    #[case(Result::failure("error"), Result::failure("error"))]
    fn result_void(#[case] input: Result<i32>, #[case] expected: Result<()>) {
        assert_eq!(input.void(), expected);
    }

    // =========================================================================
    // Law Tests (Unit Tests)
    // =========================================================================

    /// Identity law: fa.fmap(|x| x) == fa
    #[rstest]
    fn result_identity_law() {
        let success: Result<i32> = Result::success(42);
        assert_eq!(success.clone().fmap(|x| x), success);

        let failure: Result<i32> = Result::failure("error");
        assert_eq!(failure.clone().fmap(|x| x), failure);
    }

    /// Composition law: fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
    #[rstest]
    fn result_composition_law() {
        let success: Result<i32> = Result::success(5);
        let function1 = |n: i32| n + 1;
        let function2 = |n: i32| n * 2;

        let left = success.clone().fmap(function1).fmap(function2);
        let right = success.fmap(move |x| function2(function1(x)));

        assert_eq!(left, right);
        assert_eq!(left, Result::success(12));
    }
}
