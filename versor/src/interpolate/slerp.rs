use glam::DQuat;

use crate::core::math::{SLERP_PARALLEL_COS, safe_acos};

/// Spherical linear interpolation from `q1` (at `t = 0`) to `q2` (at `t = tm`).
///
/// Both inputs are normalised. If they lie in opposite hemispheres `q1` is
/// negated so the path takes the shorter arc. When the two are nearly
/// parallel (`cos > 0.95`) the sine ratios are ill-conditioned and the
/// normalised, sign-adjusted `q1` is returned unchanged; the result is
/// therefore piecewise constant in that band.
///
/// `t` is not checked against `[0, tm]`: values outside it extrapolate along
/// the same great circle. `tm` must be positive. The result is renormalised.
pub fn slerp(q1: DQuat, q2: DQuat, tm: f64, t: f64) -> DQuat {
    let mut q1 = q1.normalize();
    let q2 = q2.normalize();

    let mut cos0 = q1.dot(q2);
    if cos0 < 0.0 {
        q1 = -q1;
        cos0 = -cos0;
    }

    if cos0 > SLERP_PARALLEL_COS {
        tracing::debug!(cos0, "near-parallel quaternions, holding first endpoint");
        return q1;
    }

    let phi0 = safe_acos(cos0);
    let sin0 = phi0.sin();
    let s = t / tm;

    let c1 = (phi0 * (1.0 - s)).sin() / sin0;
    let c2 = (phi0 * s).sin() / sin0;

    (q1 * c1 + q2 * c2).normalize()
}
