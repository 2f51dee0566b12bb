use super::manifold::Manifold;
use glam::DVec3;

/// Flat 3D space. Paths are straight lines.
#[derive(Debug, Clone, Copy, Default)]
pub struct Euclidean3;

impl Manifold for Euclidean3 {
    type Point = DVec3;

    fn interpolate(a: Self::Point, b: Self::Point, tm: f64, t: f64) -> Self::Point {
        let s = t / tm;
        a * (1.0 - s) + b * s
    }
}
