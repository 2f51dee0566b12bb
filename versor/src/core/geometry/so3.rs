use crate::core::geometry::manifold::Manifold;
use crate::interpolate::slerp;
use glam::DQuat;

/// The Special Orthogonal Group SO(3) representing 3D rotations.
/// Points are unit quaternions; `q` and `-q` are the same point.
#[derive(Debug, Clone, Copy, Default)]
pub struct SO3;

impl Manifold for SO3 {
    type Point = DQuat;

    /// Great-circle path along the shorter arc, see [`slerp`].
    fn interpolate(a: Self::Point, b: Self::Point, tm: f64, t: f64) -> Self::Point {
        slerp(a, b, tm, t)
    }
}
