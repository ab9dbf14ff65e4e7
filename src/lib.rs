//! # resulting
//!
//! A small functional programming library for composing fallible domain
//! logic without effect-handling boilerplate.
//!
//! ## Overview
//!
//! - **Result**: [`result::Result`], a value that is either `Success(T)` or
//!   `Failure(message)`, with `map` and `bind`
//! - **Type Classes**: Functor, Applicative, Monad and `MonadError`, so code can
//!   be written once against the capability rather than a concrete effect
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type class traits and their `Result` instances (default)
//! - `serde`: `Serialize`/`Deserialize` for `Result` and `DomainFailure`
//! - `tracing`: `Result::trace_step` for logging a step's outcome
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use resulting::prelude::*;
//!
//! let chained = Result::success("hello".to_string())
//!     .bind(|text| Result::success(text + "1"))
//!     .bind(|text| Result::success(text + "2"));
//! assert_eq!(chained, Result::success("hello12".to_string()));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports [`Result`](crate::result::Result) along with the type classes.
/// A glob import therefore shadows `std::result::Result` in the importing
/// module.
///
/// # Usage
///
/// ```rust
/// use resulting::prelude::*;
/// ```
pub mod prelude {
    pub use crate::result::{DomainFailure, Result, bind, map};

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;
}

pub mod result;

#[cfg(feature = "typeclass")]
pub mod typeclass;
