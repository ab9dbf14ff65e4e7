//! Conversions between [`Result`] and `std::result::Result`.

use std::fmt;

use thiserror::Error;

use super::Result;

/// The failure message of a [`Result`], as a standard error type.
///
/// Produced when a `Failure` crosses into code that works with
/// `std::result::Result`. Its `Display` output is the message verbatim.
///
/// # Examples
///
/// ```rust
/// use resulting::result::{DomainFailure, Result};
///
/// let failed: Result<i32> = Result::failure("insufficient funds");
/// let error: DomainFailure = failed.into_std().unwrap_err();
/// assert_eq!(error.to_string(), "insufficient funds");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[error("{message}")]
pub struct DomainFailure {
    message: String,
}

impl DomainFailure {
    /// Creates a new failure with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Returns the failure message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Consumes the failure, returning the message.
    pub fn into_message(self) -> String {
        self.message
    }
}

impl<T> From<DomainFailure> for Result<T> {
    fn from(failure: DomainFailure) -> Self {
        Self::Failure(failure.message)
    }
}

impl<T> From<Result<T>> for std::result::Result<T, DomainFailure> {
    fn from(result: Result<T>) -> Self {
        result.into_std()
    }
}

impl<T, E: fmt::Display> From<std::result::Result<T, E>> for Result<T> {
    /// `Ok(v)` becomes `Success(v)`; `Err(e)` becomes `Failure` with `e`'s
    /// display output as the message.
    fn from(result: std::result::Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error.to_string()),
        }
    }
}
