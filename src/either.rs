//! Two-branch result container.
//!
//! `Either` carries a failure (`Left`) or a success (`Right`) through a
//! single return path. Guess validation produces one and the game consumes
//! it; neither side ever unwinds.

use serde::{Deserialize, Serialize};

/// A value that is exactly one of two things.
///
/// By convention `Left` holds the failure and `Right` the success.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Either<L, R> {
    /// Failure or alternative branch.
    Left(L),
    /// Success branch.
    Right(R),
}

impl<L, R> Either<L, R> {
    /// Constructs the failure branch.
    pub fn left(value: L) -> Self {
        Either::Left(value)
    }

    /// Constructs the success branch.
    pub fn right(value: R) -> Self {
        Either::Right(value)
    }

    /// Returns true if this is the `Left` branch.
    pub fn is_left(&self) -> bool {
        matches!(self, Either::Left(_))
    }

    /// Returns true if this is the `Right` branch.
    pub fn is_right(&self) -> bool {
        matches!(self, Either::Right(_))
    }

    /// Borrows the `Left` payload, if present.
    pub fn left_value(&self) -> Option<&L> {
        match self {
            Either::Left(l) => Some(l),
            Either::Right(_) => None,
        }
    }

    /// Borrows the `Right` payload, if present.
    pub fn right_value(&self) -> Option<&R> {
        match self {
            Either::Left(_) => None,
            Either::Right(r) => Some(r),
        }
    }

    /// Consumes self, keeping only the `Left` payload.
    pub fn into_left(self) -> Option<L> {
        match self {
            Either::Left(l) => Some(l),
            Either::Right(_) => None,
        }
    }

    /// Consumes self, keeping only the `Right` payload.
    pub fn into_right(self) -> Option<R> {
        match self {
            Either::Left(_) => None,
            Either::Right(r) => Some(r),
        }
    }

    /// Transforms the `Left` payload, leaving `Right` untouched.
    pub fn map_left<T, F>(self, f: F) -> Either<T, R>
    where
        F: FnOnce(L) -> T,
    {
        match self {
            Either::Left(l) => Either::Left(f(l)),
            Either::Right(r) => Either::Right(r),
        }
    }

    /// Transforms the `Right` payload, leaving `Left` untouched.
    pub fn map_right<T, F>(self, f: F) -> Either<L, T>
    where
        F: FnOnce(R) -> T,
    {
        match self {
            Either::Left(l) => Either::Left(l),
            Either::Right(r) => Either::Right(f(r)),
        }
    }

    /// Folds both branches into a single value.
    pub fn either<T, FL, FR>(self, on_left: FL, on_right: FR) -> T
    where
        FL: FnOnce(L) -> T,
        FR: FnOnce(R) -> T,
    {
        match self {
            Either::Left(l) => on_left(l),
            Either::Right(r) => on_right(r),
        }
    }

    /// Borrows both branches.
    pub fn as_ref(&self) -> Either<&L, &R> {
        match self {
            Either::Left(l) => Either::Left(l),
            Either::Right(r) => Either::Right(r),
        }
    }
}

impl<L, R> From<Result<R, L>> for Either<L, R> {
    fn from(result: Result<R, L>) -> Self {
        match result {
            Ok(r) => Either::Right(r),
            Err(l) => Either::Left(l),
        }
    }
}

impl<L, R> From<Either<L, R>> for Result<R, L> {
    fn from(either: Either<L, R>) -> Self {
        match either {
            Either::Left(l) => Err(l),
            Either::Right(r) => Ok(r),
        }
    }
}
