//! Axis-angle form: a unit axis `p` and an angle `phi` swept about it
//! following the right-hand rule.

use glam::{DMat3, DVec3};

use crate::core::geometry::{check_range, check_rotation, check_unit};
use crate::core::math::{DEGENERATE_NORM, from_rows, outer, safe_acos, skew};
use crate::error::{Domain, RotationResult};

/// Rodrigues' formula: `R = p·pᵀ + cos(phi)·(I - p·pᵀ) + sin(phi)·[p]ₓ`.
///
/// `axis` must be unit length (within tolerance) and `phi` in `[0, π]`.
pub fn axis_angle_to_matrix(axis: DVec3, phi: f64) -> RotationResult<DMat3> {
    check_unit("axis", axis)?;
    check_range("phi", phi, Domain::HalfTurn)?;

    let ppt = outer(axis, axis);
    let (s, c) = phi.sin_cos();

    Ok(ppt + (DMat3::IDENTITY - ppt) * c + skew(axis) * s)
}

/// Recovers the axis and angle of a rotation matrix. The angle is in `[0, π]`.
///
/// Every row of `A - I` is orthogonal to the rotation axis, so the cross
/// product of two independent rows spans the axis and any nonzero row is a
/// probe vector `u` perpendicular to it. The angle is the one between `u`
/// and `A·u`, and the axis sign is chosen so that `(u, A·u, p)` is
/// right-handed.
///
/// Rows 0 and 1 give the axis and row 2 the probe. When that choice is
/// degenerate (a rotation about x or z zeroes one row), the best-conditioned
/// rows are used instead. The identity has no axis; it yields `(x̂, 0)`.
/// A matrix within tolerance of the identity whose rows of `A - I` span no
/// axis yields `(x̂, phi)` for its tiny angle. Very small angles lose
/// precision since `A - I` is then nearly zero.
pub fn matrix_to_axis_angle(a: &DMat3) -> RotationResult<(DVec3, f64)> {
    check_rotation(a)?;

    let ap = *a - DMat3::IDENTITY;
    let rows = [ap.row(0), ap.row(1), ap.row(2)];

    let Some(u) = probe(&rows) else {
        tracing::debug!("identity rotation, axis defaults to x");
        return Ok((DVec3::X, 0.0));
    };
    let up = *a * u;
    let phi = safe_acos(u.dot(up));

    let direction = axis_direction(&rows);
    if direction.length() <= DEGENERATE_NORM {
        tracing::debug!(phi, "near-identity rotation, axis defaults to x");
        return Ok((DVec3::X, phi));
    }
    let mut p = direction.normalize();

    if from_rows(u, up, p).determinant() < 0.0 {
        p = -p;
    }

    Ok((p, phi))
}

/// Unit vector perpendicular to the axis, or `None` for the identity.
fn probe(rows: &[DVec3; 3]) -> Option<DVec3> {
    if rows[2].length() > DEGENERATE_NORM {
        return Some(rows[2].normalize());
    }
    let longest = rows
        .iter()
        .copied()
        .max_by(|a, b| a.length_squared().total_cmp(&b.length_squared()))?;
    (longest.length() > DEGENERATE_NORM).then(|| longest.normalize())
}

/// Unnormalised vector along the axis.
fn axis_direction(rows: &[DVec3; 3]) -> DVec3 {
    let primary = rows[0].cross(rows[1]);
    if primary.length() > DEGENERATE_NORM {
        return primary;
    }
    [primary, rows[1].cross(rows[2]), rows[2].cross(rows[0])]
        .into_iter()
        .max_by(|a, b| a.length_squared().total_cmp(&b.length_squared()))
        .unwrap_or(primary)
}
