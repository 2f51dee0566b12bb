//! Conversions between rotation representations.
//!
//! Constructors (`*_to_matrix`, `axis_angle_to_quaternion`) validate their
//! scalar and vector inputs and fail with
//! [`InvalidInput`](crate::RotationError::InvalidInput). Extractors that read
//! a matrix first check that it is a proper rotation and fail with
//! [`InvalidRotation`](crate::RotationError::InvalidRotation).

pub mod axis_angle;
pub mod euler;
pub mod quaternion;

pub use axis_angle::{axis_angle_to_matrix, matrix_to_axis_angle};
pub use euler::{euler_to_matrix, matrix_to_euler};
pub use quaternion::{axis_angle_to_quaternion, quaternion_to_axis_angle};
