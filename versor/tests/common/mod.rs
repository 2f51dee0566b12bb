//! Shared sampling and comparison helpers for the integration tests.

#![allow(dead_code)]

use std::f64::consts::{FRAC_PI_2, TAU};

use glam::{DMat3, DQuat, DVec3};
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

pub const SAMPLES: usize = 1000;

pub fn rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Uniform-ish random unit vector (rejection sampled in the unit ball).
pub fn unit_axis(rng: &mut StdRng) -> DVec3 {
    loop {
        let v = DVec3::new(
            rng.gen_range(-1.0..1.0),
            rng.gen_range(-1.0..1.0),
            rng.gen_range(-1.0..1.0),
        );
        let len = v.length();
        if len > 0.1 && len <= 1.0 {
            return v / len;
        }
    }
}

/// Euler triple inside the construction domain, `margin` away from gimbal lock.
pub fn euler_triple(rng: &mut StdRng, margin: f64) -> (f64, f64, f64) {
    (
        rng.gen_range(0.0..TAU),
        rng.gen_range(-FRAC_PI_2 + margin..=FRAC_PI_2 - margin),
        rng.gen_range(0.0..TAU),
    )
}

/// Smallest absolute difference between two angles, modulo 2π.
pub fn angle_diff(a: f64, b: f64) -> f64 {
    let d = (a - b).rem_euclid(TAU);
    d.min(TAU - d)
}

pub fn max_abs_diff(a: &DMat3, b: &DMat3) -> f64 {
    (0..3)
        .map(|c| (a.col(c) - b.col(c)).abs().max_element())
        .fold(0.0, f64::max)
}

/// `true` if the two quaternions are equal or opposite (same rotation).
pub fn same_rotation(a: DQuat, b: DQuat, tol: f64) -> bool {
    (a.normalize().dot(b.normalize()).abs() - 1.0).abs() < tol
}

pub fn is_orthonormal(m: &DMat3, tol: f64) -> bool {
    max_abs_diff(&(*m * m.transpose()), &DMat3::IDENTITY) < tol && (m.determinant() - 1.0).abs() < tol
}
