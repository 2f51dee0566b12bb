pub mod matrix;

pub use matrix::{element, from_rows, max_abs_deviation, outer, skew};

/// Tolerance for orthogonality, determinant and unit-norm checks.
pub const EPS: f64 = 1e-5;

/// Above this `cos` of the half-angle between two quaternions, slerp
/// returns the first endpoint instead of dividing by a vanishing sine.
pub const SLERP_PARALLEL_COS: f64 = 0.95;

/// Rows of `A - I` shorter than this are treated as zero.
pub const DEGENERATE_NORM: f64 = 1e-8;

/// `acos` that tolerates arguments pushed just past ±1 by rounding.
#[inline]
pub fn safe_acos(x: f64) -> f64 {
    x.clamp(-1.0, 1.0).acos()
}
