//! Unit quaternions `(w, x, y, z)`. `q` and `-q` are the same rotation.

use glam::{DQuat, DVec3};

use crate::core::geometry::{check_range, check_unit};
use crate::core::math::safe_acos;
use crate::error::{Domain, RotationResult};

/// `w = cos(phi/2)`, vector part `sin(phi/2)·p̂`.
///
/// `axis` must be unit length (within tolerance) and `phi` in `[0, 2π)`.
pub fn axis_angle_to_quaternion(axis: DVec3, phi: f64) -> RotationResult<DQuat> {
    check_unit("axis", axis)?;
    check_range("phi", phi, Domain::Turn)?;

    let (s, c) = (phi / 2.0).sin_cos();
    let v = axis.normalize() * s;

    Ok(DQuat::from_xyzw(v.x, v.y, v.z, c))
}

/// Axis and angle of any nonzero quaternion; it is normalised first.
///
/// A quaternion with `w < 0` is replaced by its negation (the same rotation),
/// so the angle is always in `[0, π]`. Feeding the result of
/// `axis_angle_to_quaternion(p, phi)` with `phi > π` back in therefore gives
/// `(-p, 2π - phi)`.
///
/// With no rotation (`w = ±1`) the axis is undefined and `(1, 0, 0)` is
/// returned. A zero quaternion has no direction and produces NaN.
pub fn quaternion_to_axis_angle(q: DQuat) -> (DVec3, f64) {
    let mut q = q.normalize();
    if q.w < 0.0 {
        q = -q;
    }

    let phi = 2.0 * safe_acos(q.w);
    let im = q.xyz();

    if q.w >= 1.0 || im.length_squared() == 0.0 {
        tracing::debug!(phi, "no rotation, axis defaults to x");
        return (DVec3::X, phi);
    }

    (im.normalize(), phi)
}
