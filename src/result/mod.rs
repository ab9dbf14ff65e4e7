//! Result type - a computation that either succeeded or failed with a message.
//!
//! This module provides the `Result<T>` type, which represents the outcome of a
//! fallible domain computation: either `Success(T)` holding the produced value,
//! or `Failure(String)` holding a human readable description of what went wrong.
//!
//! Unlike `std::result::Result<T, E>`, the failure side is fixed to a message.
//! Once a computation fails, the value it was working on is discarded and only
//! the message survives.
//!
//! The two fundamental operations are:
//!
//! - [`Result::map`]: lift a pure transformation `T -> U` into `Result<T> -> Result<U>`
//! - [`Result::bind`]: sequence a fallible transformation `T -> Result<U>`,
//!   short-circuiting on the first failure
//!
//! # Laws
//!
//! `map` satisfies the Functor laws:
//!
//! ```text
//! r.map(|x| x) == r
//! r.map(f).map(g) == r.map(|x| g(f(x)))
//! ```
//!
//! `bind` satisfies the Monad laws:
//!
//! ```text
//! Result::success(v).bind(f) == f(v)
//! r.bind(Result::success) == r
//! r.bind(f).bind(g) == r.bind(|x| f(x).bind(g))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use resulting::result::Result;
//!
//! let greeting = Result::success("hello".to_string())
//!     .bind(|text| Result::success(text + " world"));
//! assert_eq!(greeting, Result::success("hello world".to_string()));
//!
//! let broken: Result<String> = Result::failure("it broke");
//! let greeting = broken.bind(|text| Result::success(text + " world"));
//! assert_eq!(greeting, Result::failure("it broke"));
//! ```

mod failure;
#[cfg(feature = "tracing")]
mod traced;

pub use failure::DomainFailure;

use std::fmt;

/// The outcome of a fallible computation.
///
/// A `Result<T>` is always in exactly one of two states: `Success` with a value
/// of type `T`, or `Failure` with a message. Values are immutable; every
/// operation consumes its input and produces a new `Result`.
///
/// Equality is structural: two results are equal when both are `Success` with
/// equal values, or both are `Failure` with equal messages.
///
/// # Examples
///
/// ```rust
/// use resulting::result::Result;
///
/// let ten: Result<i32> = Result::success(10);
/// assert_eq!(ten.map(|n| n + 10), Result::success(20));
///
/// let failed: Result<i32> = Result::failure("error");
/// assert_eq!(failed.map(|n| n + 10), Result::failure("error"));
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[must_use = "a Result may be a Failure, which should be inspected"]
pub enum Result<T> {
    /// The computation produced a value.
    Success(T),
    /// The computation could not produce a value; only the message survives.
    Failure(String),
}

impl<T> Result<T> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Wraps a value in `Success`.
    #[inline]
    pub const fn success(value: T) -> Self {
        Self::Success(value)
    }

    /// Creates a `Failure` carrying the given message.
    ///
    /// Any message is accepted, including the empty string.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use resulting::result::Result;
    ///
    /// let failed: Result<i32> = Result::failure("");
    /// assert_eq!(failed.failure_message(), Some(""));
    /// ```
    #[inline]
    pub fn failure(message: impl Into<String>) -> Self {
        Self::Failure(message.into())
    }

    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is a `Success` value.
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` if this is a `Failure` value.
    #[inline]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    // =========================================================================
    // Functor / Monad Core
    // =========================================================================

    /// Applies a pure function to the success value.
    ///
    /// On `Failure`, the message is carried over to the new type and `function`
    /// is never called. Panics raised by `function` are not caught.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use resulting::result::Result;
    ///
    /// let length: Result<usize> = Result::success("hello").map(str::len);
    /// assert_eq!(length, Result::success(5));
    /// ```
    #[inline]
    pub fn map<U, F>(self, function: F) -> Result<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => Result::Success(function(value)),
            Self::Failure(message) => Result::Failure(message),
        }
    }

    /// Sequences a fallible function after this result.
    ///
    /// On `Success(v)` the result of `function(v)` is returned as is, whether it
    /// succeeded or failed. On `Failure` the message is threaded through and
    /// `function` is never called, so a chain of binds stops at its first failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use resulting::result::Result;
    ///
    /// fn positive(n: i32) -> Result<i32> {
    ///     if n > 0 { Result::success(n) } else { Result::failure("not positive") }
    /// }
    ///
    /// assert_eq!(Result::success(3).bind(positive), Result::success(3));
    /// assert_eq!(Result::success(-3).bind(positive), Result::failure("not positive"));
    /// ```
    #[inline]
    pub fn bind<U, F>(self, function: F) -> Result<U>
    where
        F: FnOnce(T) -> Result<U>,
    {
        match self {
            Self::Success(value) => function(value),
            Self::Failure(message) => Result::Failure(message),
        }
    }

    // =========================================================================
    // Failure Side
    // =========================================================================

    /// Rewrites the failure message, leaving a `Success` untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use resulting::result::Result;
    ///
    /// let failed: Result<i32> = Result::failure("timeout");
    /// let annotated = failed.map_failure(|message| format!("fetch wallet: {message}"));
    /// assert_eq!(annotated, Result::failure("fetch wallet: timeout"));
    /// ```
    #[inline]
    pub fn map_failure<F>(self, function: F) -> Self
    where
        F: FnOnce(String) -> String,
    {
        match self {
            Self::Success(value) => Self::Success(value),
            Self::Failure(message) => Self::Failure(function(message)),
        }
    }

    /// Recovers from a failure by running `function` on the message.
    ///
    /// A `Success` is returned unchanged without calling `function`.
    #[inline]
    pub fn or_else<F>(self, function: F) -> Self
    where
        F: FnOnce(String) -> Self,
    {
        match self {
            Self::Success(value) => Self::Success(value),
            Self::Failure(message) => function(message),
        }
    }

    /// Calls `function` with the failure message, then returns `self` unchanged.
    #[inline]
    pub fn inspect_failure<F>(self, function: F) -> Self
    where
        F: FnOnce(&str),
    {
        if let Self::Failure(message) = &self {
            function(message);
        }
        self
    }

    // =========================================================================
    // Value Extraction
    // =========================================================================

    /// Handles both cases, producing a single value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use resulting::result::Result;
    ///
    /// let describe = |result: Result<i32>| {
    ///     result.fold(|message| format!("failed: {message}"), |n| format!("got {n}"))
    /// };
    /// assert_eq!(describe(Result::success(1)), "got 1");
    /// assert_eq!(describe(Result::failure("nope")), "failed: nope");
    /// ```
    #[inline]
    pub fn fold<B, F, G>(self, on_failure: F, on_success: G) -> B
    where
        F: FnOnce(String) -> B,
        G: FnOnce(T) -> B,
    {
        match self {
            Self::Success(value) => on_success(value),
            Self::Failure(message) => on_failure(message),
        }
    }

    /// Converts into `Option<T>`, discarding any failure message.
    #[inline]
    pub fn into_success(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Converts into the failure message, discarding any success value.
    #[inline]
    pub fn into_failure(self) -> Option<String> {
        match self {
            Self::Success(_) => None,
            Self::Failure(message) => Some(message),
        }
    }

    /// Returns the success value or `default`.
    #[inline]
    pub fn success_or(self, default: T) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => default,
        }
    }

    /// Returns the success value, or computes one from the failure message.
    #[inline]
    pub fn success_or_else<F>(self, function: F) -> T
    where
        F: FnOnce(String) -> T,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(message) => function(message),
        }
    }

    // =========================================================================
    // Reference Access (Non-consuming)
    // =========================================================================

    /// Returns a reference to the success value if present.
    #[inline]
    pub const fn success_ref(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Returns the failure message if present.
    #[inline]
    pub fn failure_message(&self) -> Option<&str> {
        match self {
            Self::Success(_) => None,
            Self::Failure(message) => Some(message),
        }
    }

    /// Borrows the success value, cloning the message on failure.
    #[inline]
    pub fn as_ref(&self) -> Result<&T> {
        match self {
            Self::Success(value) => Result::Success(value),
            Self::Failure(message) => Result::Failure(message.clone()),
        }
    }

    // =========================================================================
    // Boundary Conversion
    // =========================================================================

    /// Converts into a standard library result so callers can use `?`.
    ///
    /// # Errors
    ///
    /// Returns a [`DomainFailure`] holding the message when `self` is `Failure`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use resulting::result::{DomainFailure, Result};
    ///
    /// fn doubled(input: Result<i32>) -> std::result::Result<i32, DomainFailure> {
    ///     let value = input.into_std()?;
    ///     Ok(value * 2)
    /// }
    ///
    /// assert_eq!(doubled(Result::success(4)), Ok(8));
    /// assert_eq!(doubled(Result::failure("bad")).unwrap_err().message(), "bad");
    /// ```
    #[inline]
    pub fn into_std(self) -> std::result::Result<T, DomainFailure> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(message) => Err(DomainFailure::new(message)),
        }
    }

    /// Collects results into a single result of all values.
    ///
    /// Stops consuming `results` at the first failure and returns it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use resulting::result::Result;
    ///
    /// let all = Result::sequence(vec![Result::success(1), Result::success(2)]);
    /// assert_eq!(all, Result::success(vec![1, 2]));
    ///
    /// let first_failure = Result::sequence(vec![
    ///     Result::success(1),
    ///     Result::failure("second"),
    ///     Result::failure("third"),
    /// ]);
    /// assert_eq!(first_failure, Result::failure("second"));
    /// ```
    pub fn sequence<I>(results: I) -> Result<Vec<T>>
    where
        I: IntoIterator<Item = Self>,
    {
        results.into_iter().collect()
    }
}

impl<T> Result<Result<T>> {
    /// Removes one level of nesting.
    #[inline]
    pub fn flatten(self) -> Result<T> {
        self.bind(|inner| inner)
    }
}

// =============================================================================
// Free Functions
// =============================================================================

/// Lifts a pure function over a result. Equivalent to [`Result::map`].
#[inline]
pub fn map<T, U, F>(result: Result<T>, function: F) -> Result<U>
where
    F: FnOnce(T) -> U,
{
    result.map(function)
}

/// Sequences a fallible function over a result. Equivalent to [`Result::bind`].
#[inline]
pub fn bind<T, U, F>(result: Result<T>, function: F) -> Result<U>
where
    F: FnOnce(T) -> Result<U>,
{
    result.bind(function)
}

// =============================================================================
// Trait Implementations
// =============================================================================

impl<T: fmt::Display> fmt::Display for Result<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success(value) => write!(formatter, "Success({value})"),
            Self::Failure(message) => write!(formatter, "Failure({message})"),
        }
    }
}

impl<T> FromIterator<Result<T>> for Result<Vec<T>> {
    fn from_iter<I: IntoIterator<Item = Result<T>>>(iter: I) -> Self {
        let mut values = Vec::new();
        for result in iter {
            match result {
                Result::Success(value) => values.push(value),
                Result::Failure(message) => return Self::Failure(message),
            }
        }
        Self::Success(values)
    }
}

static_assertions::assert_impl_all!(Result<i32>: Send, Sync, Clone, Eq);
static_assertions::assert_impl_all!(Result<String>: Send, Sync);
