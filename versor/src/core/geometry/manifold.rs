/// A space whose points can be blended along a constant-speed path.
///
/// The path is parameterised the way an animation clock sees it: a total
/// duration `tm` and an elapsed time `t`, with `t = 0` at `a` and `t = tm`
/// at `b`. Values of `t` outside `[0, tm]` extrapolate.
pub trait Manifold {
    /// A point on the manifold (a position, an orientation quaternion).
    type Point: Clone + Copy + std::fmt::Debug;

    /// The point reached after `t` of a `tm`-long path from `a` to `b`.
    fn interpolate(a: Self::Point, b: Self::Point, tm: f64, t: f64) -> Self::Point;
}
