//! Logging of individual steps in a `Result` chain.
//!
//! Enabled by the `tracing` feature. Each call records the outcome of one named
//! step as a `tracing` event and hands the result back unchanged, so it can sit
//! between `map`/`bind` calls without affecting the chain.

use super::Result;

impl<T> Result<T> {
    /// Logs the outcome of a named step, failure or success, then returns `self` unchanged.
    ///
    /// A `Failure` is logged at `WARN` with the `step` name and the failure
    /// message; a `Success` is logged at `TRACE` with the `step` name only.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use resulting::result::Result;
    ///
    /// let checked = Result::success(10)
    ///     .trace_step("load wallet")
    ///     .bind(|balance| {
    ///         if balance >= 20 { Result::success(balance - 20) } else { Result::failure("insufficient funds") }
    ///     })
    ///     .trace_step("withdraw");
    /// assert_eq!(checked, Result::failure("insufficient funds"));
    /// ```
    pub fn trace_step(self, step: &str) -> Self {
        match &self {
            Self::Success(_) => tracing::trace!(step, "step succeeded"),
            Self::Failure(message) => {
                tracing::warn!(step, failure = %message, "step failed");
            }
        }
        self
    }
}
