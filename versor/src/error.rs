//! Error types for rotation conversions.
//!
//! Every conversion validates its inputs before computing anything and reports
//! at most one [`RotationError`]:
//!
//! | Variant | Raised by | Meaning |
//! |---------|-----------|---------|
//! | [`InvalidInput`](RotationError::InvalidInput) | constructors | scalar outside its domain, or a non-unit axis |
//! | [`InvalidRotation`](RotationError::InvalidRotation) | extractors | matrix is not orthonormal, or not a proper rotation |
//!
//! Nothing is clamped or substituted on failure. Whether an error ends the
//! process is up to the caller.

use std::fmt;

use thiserror::Error;

/// The domain a parameter was required to lie in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Domain {
    /// `[0, 2π)`
    Turn,
    /// `[0, π]`
    HalfTurn,
    /// `[-π/2, π/2]`
    QuarterTurns,
    /// Euclidean norm within the unit tolerance of 1.
    UnitNorm,
    /// `(0, ∞)`
    Positive,
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Domain::Turn => write!(f, "[0, 2π)"),
            Domain::HalfTurn => write!(f, "[0, π]"),
            Domain::QuarterTurns => write!(f, "[-π/2, π/2]"),
            Domain::UnitNorm => write!(f, "unit norm (±{:e})", crate::core::math::EPS),
            Domain::Positive => write!(f, "(0, ∞)"),
        }
    }
}

/// Which rotation-matrix check failed.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum RotationDefect {
    /// `M·Mᵀ` differs from the identity by more than the tolerance.
    #[error("matrix is not orthogonal (max |M·Mᵀ - I| = {deviation:e})")]
    NotOrthogonal { deviation: f64 },

    /// Orthogonal, but the determinant is not 1 (e.g. a reflection).
    #[error("matrix determinant is {determinant}, expected 1")]
    Determinant { determinant: f64 },
}

/// Failure of a rotation conversion.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RotationError {
    /// A constructor received an out-of-domain scalar or a non-unit vector.
    ///
    /// For vectors, `value` carries the norm that was observed.
    #[error("invalid input: {parameter} = {value} must be in {domain}")]
    InvalidInput {
        parameter: &'static str,
        value: f64,
        domain: Domain,
    },

    /// An extractor received a matrix that is not a proper rotation.
    #[error("invalid rotation: {0}")]
    InvalidRotation(#[from] RotationDefect),
}

/// Convenience alias for `Result<T, RotationError>`.
pub type RotationResult<T> = Result<T, RotationError>;

impl RotationError {
    /// Creates an [`InvalidInput`](Self::InvalidInput) error.
    pub fn invalid_input(parameter: &'static str, value: f64, domain: Domain) -> Self {
        tracing::debug!(parameter, value, %domain, "rejected rotation input");
        Self::InvalidInput {
            parameter,
            value,
            domain,
        }
    }

    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput { .. })
    }

    pub fn is_invalid_rotation(&self) -> bool {
        matches!(self, Self::InvalidRotation(_))
    }
}
