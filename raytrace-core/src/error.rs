//! Numeric failure modes of the math layer.
//!
//! Both variants are recoverable from the caller's point of view: the
//! Intersector is the only place that ever sees one, and it folds
//! either into a miss (see [`crate::intersect`]).

/// A vector or matrix operation that has no well-defined result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericError {
    /// `Vec3::normalize` was called on a vector with `is_zero() == true`.
    ZeroLengthVector,
    /// `Matrix3::inverse` was called on a matrix with `|det| < 1e-6`.
    SingularMatrix,
}

impl std::fmt::Display for NumericError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ZeroLengthVector => write!(f, "cannot normalize a zero-length vector"),
            Self::SingularMatrix => write!(f, "cannot invert a singular matrix"),
        }
    }
}

impl std::error::Error for NumericError {}
