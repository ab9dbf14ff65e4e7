//! `MonadError` type class - raising and recovering from failures.
//!
//! `MonadError<E>` extends `Monad` with an error channel of type `E`:
//! `throw_error` enters the failed state and `catch_error` leaves it. For
//! [`Result`], the error channel is the failure message, so `Result<T>`
//! implements `MonadError<String>`.
//!
//! # Laws
//!
//! ## Throw Catch Law
//!
//! ```text
//! catch_error(throw_error(e), handler) == handler(e)
//! ```
//!
//! ## Catch Pure Law
//!
//! ```text
//! catch_error(pure(a), handler) == pure(a)
//! ```
//!
//! ## Throw Short-Circuit Law
//!
//! ```text
//! throw_error(e).flat_map(f) == throw_error(e)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use resulting::result::Result;
//! use resulting::typeclass::MonadError;
//!
//! fn safe_divide(dividend: i32, divisor: i32) -> Result<i32> {
//!     if divisor == 0 {
//!         <Result<i32>>::throw_error("division by zero".to_string())
//!     } else {
//!         Result::success(dividend / divisor)
//!     }
//! }
//!
//! let recovered = <Result<i32>>::catch_error(safe_divide(10, 0), |_| Result::success(0));
//! assert_eq!(recovered, Result::success(0));
//! ```

use super::monad::Monad;
use crate::result::Result;

/// A type class for monads that can fail with an error of type `E`.
pub trait MonadError<E>: Monad {
    /// Enters the failed state with `error`.
    fn throw_error<A>(error: E) -> Self::WithType<A>;

    /// Recovers from a failure by running `handler` on the error.
    ///
    /// A successful computation is returned unchanged.
    fn catch_error<A, F>(computation: Self::WithType<A>, handler: F) -> Self::WithType<A>
    where
        F: FnOnce(E) -> Self::WithType<A>;

    /// Recovers from a failure with a plain value computed from the error.
    #[inline]
    fn handle_error<A, F>(computation: Self::WithType<A>, handler: F) -> Self::WithType<A>
    where
        F: FnOnce(E) -> A,
    {
        Self::catch_error(computation, |error| Self::pure(handler(error)))
    }

    /// Fails with `error()` when the successful value does not satisfy `predicate`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use resulting::result::Result;
    /// use resulting::typeclass::MonadError;
    ///
    /// let checked = <Result<i32>>::ensure(
    ///     Result::success(-5),
    ///     || "balance must not be negative".to_string(),
    ///     |balance| *balance >= 0,
    /// );
    /// assert_eq!(checked, Result::failure("balance must not be negative"));
    /// ```
    fn ensure<A, F, P>(computation: Self::WithType<A>, error: F, predicate: P) -> Self::WithType<A>
    where
        F: FnOnce() -> E,
        P: FnOnce(&A) -> bool;

    /// Handles both outcomes, always producing a success.
    fn redeem<A, B, Recover, Transform>(
        computation: Self::WithType<A>,
        recover: Recover,
        transform: Transform,
    ) -> Self::WithType<B>
    where
        Recover: FnOnce(E) -> B,
        Transform: FnOnce(A) -> B;
}

// =============================================================================
// Result<T> Implementation
// =============================================================================

impl<T> MonadError<String> for Result<T> {
    #[inline]
    fn throw_error<A>(error: String) -> Result<A> {
        Result::Failure(error)
    }

    #[inline]
    fn catch_error<A, F>(computation: Result<A>, handler: F) -> Result<A>
    where
        F: FnOnce(String) -> Result<A>,
    {
        computation.or_else(handler)
    }

    fn ensure<A, F, P>(computation: Result<A>, error: F, predicate: P) -> Result<A>
    where
        F: FnOnce() -> String,
        P: FnOnce(&A) -> bool,
    {
        computation.bind(|value| {
            if predicate(&value) {
                Result::Success(value)
            } else {
                Result::Failure(error())
            }
        })
    }

    #[inline]
    fn redeem<A, B, Recover, Transform>(
        computation: Result<A>,
        recover: Recover,
        transform: Transform,
    ) -> Result<B>
    where
        Recover: FnOnce(String) -> B,
        Transform: FnOnce(A) -> B,
    {
        Result::Success(computation.fold(recover, transform))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    type Checked = Result<i32>;

    #[rstest]
    fn throw_error_creates_failure() {
        let failed: Result<String> = Checked::throw_error("thrown".to_string());
        assert_eq!(failed, Result::failure("thrown"));
    }

    #[rstest]
    fn catch_error_leaves_success_alone() {
        let result = Checked::catch_error(Result::success(3), |_| Result::success(0));
        assert_eq!(result, Result::success(3));
    }

    #[rstest]
    fn handle_error_maps_message_to_value() {
        let failed: Result<usize> = Result::failure("four");
        let result = Checked::handle_error(failed, |message| message.len());
        assert_eq!(result, Result::success(4));
    }

    #[rstest]
    #[case(Result::success(5), Result::success(5))]
    #[case(Result::success(-5), Result::failure("negative"))]
    #[case(Result::failure("earlier"), Result::failure("earlier"))]
    fn ensure_checks_only_successes(#[case] input: Result<i32>, #[case] expected: Result<i32>) {
        let result = Checked::ensure(input, || "negative".to_string(), |n| *n >= 0);
        assert_eq!(result, expected);
    }

    #[rstest]
    fn redeem_always_succeeds() {
        let failed: Result<i32> = Result::failure("broken");
        assert_eq!(
            Checked::redeem(failed, |message| message, |n| n.to_string()),
            Result::success("broken".to_string())
        );
        assert_eq!(
            Checked::redeem(Result::success(9), |message| message, |n| n.to_string()),
            Result::success("9".to_string())
        );
    }
}
