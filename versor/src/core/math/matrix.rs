//! The handful of 3×3 operations glam does not provide directly.
//!
//! glam stores matrices column-major. Everything here speaks in rows and
//! columns of the mathematical matrix, so `element(m, r, c)` is `A[r][c]`.

use glam::{DMat3, DVec3};

/// Builds a matrix from its rows.
#[inline]
pub fn from_rows(r0: DVec3, r1: DVec3, r2: DVec3) -> DMat3 {
    DMat3::from_cols(r0, r1, r2).transpose()
}

/// Element at row `row`, column `col`.
#[inline]
pub fn element(m: &DMat3, row: usize, col: usize) -> f64 {
    m.col(col)[row]
}

/// Outer product `a·bᵀ`.
#[inline]
pub fn outer(a: DVec3, b: DVec3) -> DMat3 {
    DMat3::from_cols(a * b.x, a * b.y, a * b.z)
}

/// Cross-product matrix `[p]ₓ`, so that `skew(p) * v == p.cross(v)`.
#[inline]
pub fn skew(p: DVec3) -> DMat3 {
    from_rows(
        DVec3::new(0.0, -p.z, p.y),
        DVec3::new(p.z, 0.0, -p.x),
        DVec3::new(-p.y, p.x, 0.0),
    )
}

/// Largest element-wise absolute difference between two matrices.
pub fn max_abs_deviation(a: &DMat3, b: &DMat3) -> f64 {
    let d = *a - *b;
    d.x_axis
        .abs()
        .max_element()
        .max(d.y_axis.abs().max_element())
        .max(d.z_axis.abs().max_element())
}
