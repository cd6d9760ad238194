// ─────────────────────────────────────────────────────────────────────
// SCPN Near-Axis — Cylindrical Grid Solve
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Boundary sampled on planes of constant cylindrical angle.
//!
//! A surface point evaluated at axis angle φ0 lands on the cylindrical plane
//! φ0 + atan2(P_φ, P_R), which differs from φ0 whenever the frame vectors
//! have toroidal components. For each target plane the axis angle is found
//! by a bracketed root solve.

use crate::reconstruct::SurfaceReconstructor;
use nearaxis_math::periodic::uniform_grid;
use nearaxis_math::roots::{brent, RootOptions};
use nearaxis_types::error::{NearAxisError, NearAxisResult};
use nearaxis_types::state::SurfaceSample;
use ndarray::{Array1, Array2};
use std::f64::consts::PI;

/// Axis angle whose surface point at (r, θ) lies on the plane `phi_target`.
pub fn solve_axis_angle(
    reconstructor: &SurfaceReconstructor,
    r: f64,
    theta: f64,
    phi_target: f64,
) -> NearAxisResult<f64> {
    let half_width = 1.0 / reconstructor.nfp() as f64;
    let residual = |phi0: f64| {
        reconstructor
            .evaluate_point(r, phi0, theta)
            .toroidal_angle(phi0)
            - phi_target
    };
    let root = brent(
        residual,
        phi_target - half_width,
        phi_target + half_width,
        Some(phi_target),
        RootOptions::default(),
    )?;
    Ok(root.x)
}

/// Sample the surface at radius `r` on `ntheta` poloidal points of [0, 2π)
/// and `nphi` cylindrical planes of one field period, endpoints excluded.
///
/// This is the grid layout the mode decomposition expects.
pub fn cylindrical_boundary(
    reconstructor: &SurfaceReconstructor,
    r: f64,
    ntheta: usize,
    nphi: usize,
) -> NearAxisResult<SurfaceSample> {
    let theta = Array1::from(uniform_grid(ntheta, 2.0 * PI));
    let phi = Array1::from(uniform_grid(nphi, reconstructor.field_period()));

    let mut r_grid = Array2::zeros((ntheta, nphi));
    let mut z_grid = Array2::zeros((ntheta, nphi));
    let mut b_grid = Array2::zeros((ntheta, nphi));
    let mut phi0_grid = Array2::zeros((ntheta, nphi));
    let mut max_shift: f64 = 0.0;

    for (j_theta, &th) in theta.iter().enumerate() {
        for (j_phi, &target) in phi.iter().enumerate() {
            let phi0 = solve_axis_angle(reconstructor, r, th, target).map_err(|e| {
                NearAxisError::RootSolve {
                    j_theta,
                    j_phi,
                    message: e.to_string(),
                }
            })?;
            let point = reconstructor.evaluate_point(r, phi0, th);
            r_grid[[j_theta, j_phi]] = point.major_radius();
            z_grid[[j_theta, j_phi]] = point.z;
            b_grid[[j_theta, j_phi]] = reconstructor.evaluate_field_magnitude(r, phi0, th);
            phi0_grid[[j_theta, j_phi]] = phi0;
            max_shift = max_shift.max((phi0 - target).abs());
        }
    }
    log::debug!(
        "Cylindrical boundary r={r}: {ntheta}x{nphi}, max |phi0 - phi| = {max_shift:.3e}"
    );

    Ok(SurfaceSample {
        radius: r,
        theta,
        phi,
        r: r_grid,
        z: z_grid,
        b: b_grid,
        axis_phi: Some(phi0_grid),
    })
}
