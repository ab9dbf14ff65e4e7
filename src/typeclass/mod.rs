//! Type class traits for composing effectful computations.
//!
//! This module provides the type classes (traits) used to write code that is
//! generic over the effect wrapping a value:
//!
//! - [`Functor`]: Mapping a pure function over the wrapped value
//! - [`Applicative`]: Lifting values and combining independent computations
//! - [`Monad`]: Sequencing computations where each step depends on the last
//! - [`MonadError`]: Raising and recovering from failures
//!
//! [`Result`](crate::result::Result) implements all of them. Other effect types
//! can implement the same traits without any change to `Result`.
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust does not have native support for higher-kinded types (HKT).
//! [`TypeConstructor`] uses Generic Associated Types (GAT) to emulate them,
//! which is what lets `Functor` and `Monad` be stated once for every effect.
//!
//! # Examples
//!
//! ```rust
//! use resulting::result::Result;
//! use resulting::typeclass::{Functor, Monad};
//!
//! fn parse_amount(text: &str) -> Result<i64> {
//!     text.parse::<i64>().into()
//! }
//!
//! let doubled = Result::success("21")
//!     .flat_map(parse_amount)
//!     .fmap(|amount| amount * 2);
//! assert_eq!(doubled, Result::success(42));
//! ```

mod applicative;
mod functor;
mod higher;
mod monad;
mod monad_error;

pub use applicative::Applicative;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use monad::Monad;
pub use monad_error::MonadError;
