//! Applicative type class - applying functions within contexts.
//!
//! `Applicative` extends `Functor` with `pure`, which lifts a plain value into
//! the context, and `map2`, which combines two independent values in the
//! context. For [`Result`], combining succeeds only when both sides succeed;
//! otherwise the leftmost failure is returned.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! pure(|x| x).apply(v) == v
//! ```
//!
//! ## Homomorphism Law
//!
//! ```text
//! pure(f).apply(pure(x)) == pure(f(x))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use resulting::result::Result;
//! use resulting::typeclass::Applicative;
//!
//! let lifted: Result<i32> = <Result<()>>::pure(42);
//! assert_eq!(lifted, Result::success(42));
//!
//! let total = Result::success(1).map2(Result::success(2), |a, b| a + b);
//! assert_eq!(total, Result::success(3));
//! ```

use super::functor::Functor;
use crate::result::Result;

/// A type class for applicative functors.
pub trait Applicative: Functor {
    /// Lifts a pure value into the applicative context.
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Combines two applicative values using a binary function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use resulting::result::Result;
    /// use resulting::typeclass::Applicative;
    ///
    /// let first: Result<i32> = Result::failure("first");
    /// let second: Result<i32> = Result::failure("second");
    /// assert_eq!(first.map2(second, |a, b| a + b), Result::failure("first"));
    /// ```
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        F: FnOnce(Self::Inner, B) -> C;

    /// Combines two applicative values into a tuple.
    #[inline]
    fn product<B>(self, other: Self::WithType<B>) -> Self::WithType<(Self::Inner, B)>
    where
        Self: Sized,
    {
        self.map2(other, |a, b| (a, b))
    }

    /// Evaluates both, keeping the left value.
    #[inline]
    fn product_left<B>(self, other: Self::WithType<B>) -> Self::WithType<Self::Inner>
    where
        Self: Sized,
    {
        self.map2(other, |a, _| a)
    }

    /// Evaluates both, keeping the right value.
    #[inline]
    fn product_right<B>(self, other: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.map2(other, |_, b| b)
    }

    /// Applies a function inside the context to a value inside the context.
    fn apply<B, Output>(self, other: Self::WithType<B>) -> Self::WithType<Output>
    where
        Self: Sized,
        Self::Inner: FnOnce(B) -> Output;
}

// =============================================================================
// Result<T> Implementation
// =============================================================================

impl<T> Applicative for Result<T> {
    #[inline]
    fn pure<B>(value: B) -> Result<B> {
        Result::Success(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Result<B>, function: F) -> Result<C>
    where
        F: FnOnce(T, B) -> C,
    {
        match (self, other) {
            (Self::Success(a), Result::Success(b)) => Result::Success(function(a, b)),
            (Self::Failure(message), _) | (_, Result::Failure(message)) => {
                Result::Failure(message)
            }
        }
    }

    #[inline]
    fn apply<B, Output>(self, other: Result<B>) -> Result<Output>
    where
        T: FnOnce(B) -> Output,
    {
        self.map2(other, |function, b| function(b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn result_pure_creates_success() {
        let lifted: Result<String> = <Result<()>>::pure("hello".to_string());
        assert_eq!(lifted, Result::success("hello".to_string()));
    }

    #[rstest]
    #[case(Result::success(1), Result::success(2), Result::success(3))]
    #[case(Result::failure("left"), Result::success(2), Result::failure("left"))]
    #[case(Result::success(1), Result::failure("right"), Result::failure("right"))]
    #[case(Result::failure("left"), Result::failure("right"), Result::failure("left"))]
    fn result_map2(
        #[case] first: Result<i32>,
        #[case] second: Result<i32>,
        #[case] expected: Result<i32>,
    ) {
        assert_eq!(first.map2(second, |a, b| a + b), expected);
    }

    #[rstest]
    fn result_product_variants() {
        assert_eq!(
            Result::success(1).product(Result::success("a")),
            Result::success((1, "a"))
        );
        assert_eq!(
            Result::success(1).product_left(Result::success("a")),
            Result::success(1)
        );
        assert_eq!(
            Result::success(1).product_right(Result::success("a")),
            Result::success("a")
        );
    }

    #[rstest]
    fn result_apply() {
        let function = Result::<fn(i32) -> i32>::success(|x| x + 1);
        assert_eq!(function.apply(Result::success(5)), Result::success(6));

        let missing: Result<fn(i32) -> i32> = Result::failure("no function");
        assert_eq!(missing.apply(Result::success(5)), Result::failure("no function"));
    }

    /// Identity law: pure(|x| x).apply(v) == v
    #[rstest]
    fn result_applicative_identity_law() {
        let identity: Result<fn(i32) -> i32> = <Result<()>>::pure::<fn(i32) -> i32>(|x| x);
        assert_eq!(identity.apply(Result::success(7)), Result::success(7));

        let identity: Result<fn(i32) -> i32> = <Result<()>>::pure::<fn(i32) -> i32>(|x| x);
        assert_eq!(identity.apply(Result::failure("error")), Result::failure("error"));
    }

    /// Homomorphism law: pure(f).apply(pure(x)) == pure(f(x))
    #[rstest]
    fn result_homomorphism_law() {
        let function = |x: i32| x * 3;
        let lifted: Result<fn(i32) -> i32> = <Result<()>>::pure::<fn(i32) -> i32>(function);
        let left = lifted.apply(<Result<()>>::pure(4));
        let right: Result<i32> = <Result<()>>::pure(function(4));
        assert_eq!(left, right);
    }
}
