//! Rotation representation conversions for rigid bodies.
//!
//! Four representations are supported, all in `f64`:
//!
//! - X-Y-Z Euler angles `(phi, theta, psi)`, composed as `Rz·Ry·Rx`
//! - proper rotation matrices ([`glam::DMat3`])
//! - axis-angle pairs `(p̂, phi)`
//! - unit quaternions ([`glam::DQuat`])
//!
//! plus quaternion slerp and pose interpolation built on top of them.
//! Every function is pure and may be called from any thread.
//!
//! ```
//! use versor::{euler_to_matrix, matrix_to_axis_angle, axis_angle_to_quaternion};
//!
//! let m = euler_to_matrix(0.0, 0.0, std::f64::consts::FRAC_PI_2)?;
//! let (axis, phi) = matrix_to_axis_angle(&m)?;
//! let q = axis_angle_to_quaternion(axis, phi)?;
//! assert!((q.z - std::f64::consts::FRAC_1_SQRT_2).abs() < 1e-12);
//! # Ok::<(), versor::RotationError>(())
//! ```

pub mod core {
    pub mod geometry;
    pub mod math;
}

pub mod convert;
pub mod error;
pub mod interpolate;

pub use convert::{
    axis_angle_to_matrix, axis_angle_to_quaternion, euler_to_matrix, matrix_to_axis_angle,
    matrix_to_euler, quaternion_to_axis_angle,
};
pub use error::{Domain, RotationDefect, RotationError, RotationResult};
pub use interpolate::{EulerAngles, Pose, interpolate_pose, slerp};

pub use glam::{DMat3, DQuat, DVec3};
