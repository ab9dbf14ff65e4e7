//! Monad type class - sequencing computations within a context.
//!
//! `Monad` extends `Applicative` with `flat_map`, which lets the next step of a
//! computation depend on the value produced by the previous one. For
//! [`Result`], `flat_map` is [`Result::bind`]: a chain of steps runs until the
//! first `Failure`, whose message is then carried unchanged to the end.
//!
//! # Laws
//!
//! ## Left Identity Law
//!
//! ```text
//! Self::pure(a).flat_map(f) == f(a)
//! ```
//!
//! ## Right Identity Law
//!
//! ```text
//! m.flat_map(Self::pure) == m
//! ```
//!
//! ## Associativity Law
//!
//! ```text
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use resulting::result::Result;
//! use resulting::typeclass::Monad;
//!
//! fn withdraw(balance: i32, amount: i32) -> Result<i32> {
//!     if amount <= balance {
//!         Result::success(balance - amount)
//!     } else {
//!         Result::failure("insufficient funds")
//!     }
//! }
//!
//! let remaining = Result::success(100)
//!     .flat_map(|balance| withdraw(balance, 30))
//!     .flat_map(|balance| withdraw(balance, 50));
//! assert_eq!(remaining, Result::success(20));
//!
//! let overdrawn = Result::success(100)
//!     .flat_map(|balance| withdraw(balance, 80))
//!     .flat_map(|balance| withdraw(balance, 50));
//! assert_eq!(overdrawn, Result::failure("insufficient funds"));
//! ```

use super::applicative::Applicative;
use crate::result::Result;

/// A type class for types that support sequencing of computations.
///
/// # Laws
///
/// ## Left Identity Law
///
/// ```text
/// Self::pure(a).flat_map(f) == f(a)
/// ```
///
/// ## Right Identity Law
///
/// ```text
/// m.flat_map(Self::pure) == m
/// ```
///
/// ## Associativity Law
///
/// ```text
/// m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
/// ```
pub trait Monad: Applicative {
    /// Applies a function to the value inside the monad and flattens the result.
    ///
    /// In Haskell, this is `>>=` (bind).
    ///
    /// # Arguments
    ///
    /// * `function` - A function that takes the inner value and returns a new monad
    ///
    /// # Returns
    ///
    /// A new monad with the result of applying the function
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;

    /// Alias for `flat_map` matching `Option::and_then` naming.
    #[inline]
    fn and_then<B, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized,
        F: FnOnce(Self::Inner) -> Self::WithType<B>,
    {
        self.flat_map(function)
    }

    /// Sequences two monadic computations, discarding the first result.
    ///
    /// If `self` is a failure, the failure propagates and `next` is dropped.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use resulting::result::Result;
    /// use resulting::typeclass::Monad;
    ///
    /// assert_eq!(Result::success(1).then(Result::success("next")), Result::success("next"));
    ///
    /// let failed: Result<i32> = Result::failure("first");
    /// assert_eq!(failed.then(Result::success("next")), Result::failure("first"));
    /// ```
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.flat_map(|_| next)
    }
}

// =============================================================================
// Result<T> Implementation
// =============================================================================

impl<T> Monad for Result<T> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Result<B>
    where
        F: FnOnce(T) -> Result<B>,
    {
        self.bind(function)
    }
}
