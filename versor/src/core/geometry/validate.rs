//! Validity predicates run at the top of every conversion.

use std::f64::consts::{FRAC_PI_2, PI, TAU};

use glam::{DMat3, DVec3};

use crate::core::math::{EPS, max_abs_deviation};
use crate::error::{Domain, RotationDefect, RotationError, RotationResult};

/// Checks that `m` is a proper rotation: `M·Mᵀ ≈ I` element-wise within
/// [`EPS`], then `det(M) ∈ [1 - EPS, 1 + EPS]`.
///
/// Orthogonality is checked first, so a reflection reports
/// [`RotationDefect::Determinant`] and a scaled matrix reports
/// [`RotationDefect::NotOrthogonal`].
pub fn check_rotation(m: &DMat3) -> RotationResult<()> {
    let deviation = max_abs_deviation(&(*m * m.transpose()), &DMat3::IDENTITY);
    if !(deviation <= EPS) {
        return Err(RotationDefect::NotOrthogonal { deviation }.into());
    }

    let determinant = m.determinant();
    if !(determinant >= 1.0 - EPS && determinant <= 1.0 + EPS) {
        return Err(RotationDefect::Determinant { determinant }.into());
    }

    Ok(())
}

pub fn is_rotation(m: &DMat3) -> bool {
    check_rotation(m).is_ok()
}

/// Checks `|‖v‖² - 1| <= EPS`. The error reports the observed norm.
pub fn check_unit(parameter: &'static str, v: DVec3) -> RotationResult<()> {
    if (v.length_squared() - 1.0).abs() <= EPS {
        Ok(())
    } else {
        Err(RotationError::invalid_input(parameter, v.length(), Domain::UnitNorm))
    }
}

/// Checks that a scalar lies in `domain`. NaN is never in range.
pub fn check_range(parameter: &'static str, value: f64, domain: Domain) -> RotationResult<()> {
    let ok = match domain {
        Domain::Turn => (0.0..TAU).contains(&value),
        Domain::HalfTurn => (0.0..=PI).contains(&value),
        Domain::QuarterTurns => (-FRAC_PI_2..=FRAC_PI_2).contains(&value),
        Domain::Positive => value > 0.0 && value.is_finite(),
        Domain::UnitNorm => (value - 1.0).abs() <= EPS,
    };

    if ok {
        Ok(())
    } else {
        Err(RotationError::invalid_input(parameter, value, domain))
    }
}
