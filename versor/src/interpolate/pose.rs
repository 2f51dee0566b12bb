//! Rigid-body poses and their interpolation.
//!
//! A pose is a translation plus an X-Y-Z Euler orientation. Interpolating two
//! poses moves the translation along a straight line and the orientation
//! along the shorter great-circle arc between the endpoint quaternions:
//!
//! ```text
//! Euler -> matrix -> axis-angle -> quaternion --slerp--> quaternion
//!       -> axis-angle -> matrix -> Euler
//! ```

use std::f64::consts::TAU;

use glam::{DMat3, DQuat, DVec3};

use crate::convert::{
    axis_angle_to_matrix, axis_angle_to_quaternion, euler_to_matrix, matrix_to_axis_angle,
    matrix_to_euler, quaternion_to_axis_angle,
};
use crate::core::geometry::{Euclidean3, Manifold, SO3, check_range};
use crate::error::{Domain, RotationResult};

/// X-Y-Z Euler angles in radians.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EulerAngles {
    pub phi: f64,
    pub theta: f64,
    pub psi: f64,
}

impl EulerAngles {
    pub const fn new(phi: f64, theta: f64, psi: f64) -> Self {
        Self { phi, theta, psi }
    }

    /// Converts from degrees, wrapping `phi` and `psi` into `[0, 2π)`.
    ///
    /// Wrapping keeps the rotation the same, so -30° becomes 330°. `theta` is
    /// converted as is; an out-of-range value is reported by [`to_matrix`](Self::to_matrix).
    pub fn from_degrees(phi: f64, theta: f64, psi: f64) -> Self {
        Self {
            phi: wrap_turn(phi.to_radians()),
            theta: theta.to_radians(),
            psi: wrap_turn(psi.to_radians()),
        }
    }

    pub fn to_degrees(self) -> [f64; 3] {
        [
            self.phi.to_degrees(),
            self.theta.to_degrees(),
            self.psi.to_degrees(),
        ]
    }

    pub fn to_matrix(self) -> RotationResult<DMat3> {
        euler_to_matrix(self.phi, self.theta, self.psi)
    }

    /// Extracts the angles of a rotation matrix, with `phi` and `psi` wrapped
    /// into `[0, 2π)` so the result can be turned back into a matrix.
    pub fn from_matrix(m: &DMat3) -> RotationResult<Self> {
        let (phi, theta, psi) = matrix_to_euler(m)?;
        Ok(Self {
            phi: wrap_turn(phi),
            theta,
            psi: wrap_turn(psi),
        })
    }
}

/// Position and orientation of a rigid body.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Pose {
    pub translation: DVec3,
    pub orientation: EulerAngles,
}

impl Pose {
    pub const fn new(translation: DVec3, orientation: EulerAngles) -> Self {
        Self {
            translation,
            orientation,
        }
    }

    /// Orientation as a unit quaternion, through the axis-angle form.
    pub fn to_quaternion(&self) -> RotationResult<DQuat> {
        let m = self.orientation.to_matrix()?;
        let (axis, phi) = matrix_to_axis_angle(&m)?;
        axis_angle_to_quaternion(axis, phi)
    }
}

/// The pose reached after `t` of a `tm`-long motion from `start` to `end`.
///
/// `tm` must be positive. `t` outside `[0, tm]` extrapolates.
pub fn interpolate_pose(start: &Pose, end: &Pose, tm: f64, t: f64) -> RotationResult<Pose> {
    check_range("tm", tm, Domain::Positive)?;

    let q1 = start.to_quaternion()?;
    let q2 = end.to_quaternion()?;

    let (axis, phi) = quaternion_to_axis_angle(SO3::interpolate(q1, q2, tm, t));
    let orientation = EulerAngles::from_matrix(&axis_angle_to_matrix(axis, phi)?)?;
    let translation = Euclidean3::interpolate(start.translation, end.translation, tm, t);

    Ok(Pose {
        translation,
        orientation,
    })
}

/// Wraps an angle into `[0, 2π)`.
fn wrap_turn(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs
    if wrapped >= TAU { 0.0 } else { wrapped }
}
