//! Euler angles in the X-Y-Z convention: rotate about X by `phi`, then Y by
//! `theta`, then Z by `psi`, giving `A = Rz(psi)·Ry(theta)·Rx(phi)`.

use std::f64::consts::FRAC_PI_2;

use glam::{DMat3, DVec3};

use crate::core::geometry::{check_range, check_rotation};
use crate::core::math::{element, from_rows};
use crate::error::{Domain, RotationResult};

/// Builds the rotation matrix `Rz(psi)·Ry(theta)·Rx(phi)`.
///
/// `phi` and `psi` must lie in `[0, 2π)` and `theta` in `[-π/2, π/2]`.
pub fn euler_to_matrix(phi: f64, theta: f64, psi: f64) -> RotationResult<DMat3> {
    check_range("phi", phi, Domain::Turn)?;
    check_range("psi", psi, Domain::Turn)?;
    check_range("theta", theta, Domain::QuarterTurns)?;

    let (sx, cx) = phi.sin_cos();
    let (sy, cy) = theta.sin_cos();
    let (sz, cz) = psi.sin_cos();

    let rx = from_rows(
        DVec3::new(1.0, 0.0, 0.0),
        DVec3::new(0.0, cx, -sx),
        DVec3::new(0.0, sx, cx),
    );
    let ry = from_rows(
        DVec3::new(cy, 0.0, sy),
        DVec3::new(0.0, 1.0, 0.0),
        DVec3::new(-sy, 0.0, cy),
    );
    let rz = from_rows(
        DVec3::new(cz, -sz, 0.0),
        DVec3::new(sz, cz, 0.0),
        DVec3::new(0.0, 0.0, 1.0),
    );

    Ok(rz * ry * rx)
}

/// Recovers `(phi, theta, psi)` from a rotation matrix.
///
/// `A[2][0]` is `-sin(theta)`. When it reaches ±1 the rotation is in gimbal
/// lock: only `psi - phi` (theta = π/2) or `psi + phi` (theta = -π/2) is
/// determined, and `phi` is reported as 0.
///
/// Outside gimbal lock `phi` and `psi` come from `atan2` and lie in `(-π, π]`.
pub fn matrix_to_euler(a: &DMat3) -> RotationResult<(f64, f64, f64)> {
    check_rotation(a)?;

    let a20 = element(a, 2, 0);

    let (phi, theta, psi) = if a20 < 1.0 && a20 > -1.0 {
        let psi = element(a, 1, 0).atan2(element(a, 0, 0));
        let theta = (-a20).asin();
        let phi = element(a, 2, 1).atan2(element(a, 2, 2));
        (phi, theta, psi)
    } else {
        let theta = if a20 <= -1.0 { FRAC_PI_2 } else { -FRAC_PI_2 };
        let psi = (-element(a, 0, 1)).atan2(element(a, 1, 1));
        tracing::debug!(theta, psi, "gimbal lock, phi fixed to 0");
        (0.0, theta, psi)
    };

    Ok((phi, theta, psi))
}
