// ─────────────────────────────────────────────────────────────────────
// SCPN Near-Axis — Surface Reconstructor
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Flux-surface geometry and field strength from a near-axis expansion.
//!
//! A point at radius r, axis angle φ and poloidal angle θ is the axis point
//! plus a displacement in the local frame:
//!
//!   x = r0(φ) + X·n + Y·b + Z·t
//!
//!   X = r (X1c cos θN + X1s sin θN) + r² (X20 + X2c cos 2θN + X2s sin 2θN)
//!   Y = r (Y1c cos θN + Y1s sin θN) + r² (Y20 + Y2c cos 2θN + Y2s sin 2θN)
//!   Z =                               r² (Z20 + Z2c cos 2θN + Z2s sin 2θN)
//!
//! with θN = θ − (ι − ιN)·φ. The r² terms are zero functions for first-order
//! configurations.

use crate::interpolants::SurfaceInterpolants;
use nearaxis_math::fourier::cos_sin_series;
use nearaxis_math::periodic::{linspace_closed, uniform_grid};
use nearaxis_math::spline::PeriodicSpline;
use nearaxis_types::config::NearAxisConfig;
use nearaxis_types::error::NearAxisResult;
use nearaxis_types::state::{AxisCurve, SurfaceSample};
use ndarray::{Array1, Array2};
use std::f64::consts::PI;

/// Displacement from the axis in (normal, binormal, tangent) components.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameDisplacement {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// Surface point in the cylindrical basis of the axis plane φ0.
///
/// `phi_component` is the offset along the toroidal unit vector; it moves
/// the point off the plane φ0 when the frame vectors have φ components.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CylindricalPoint {
    pub r_component: f64,
    pub phi_component: f64,
    pub z: f64,
}

impl CylindricalPoint {
    /// Major radius of the point.
    pub fn major_radius(&self) -> f64 {
        self.r_component.hypot(self.phi_component)
    }

    /// Cylindrical toroidal angle of the point, given its axis angle.
    pub fn toroidal_angle(&self, axis_phi: f64) -> f64 {
        axis_phi + self.phi_component.atan2(self.r_component)
    }
}

/// Toroidal coverage of a sampled grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToroidalExtent {
    /// One field period, endpoint excluded.
    FieldPeriod,
    /// The whole torus, endpoint included so the surface closes.
    FullTorus,
}

/// Closed (R, Z) curve of one toroidal cross-section.
#[derive(Debug, Clone)]
pub struct PoloidalSection {
    pub phi: f64,
    pub axis: (f64, f64),
    pub r: Vec<f64>,
    pub z: Vec<f64>,
}

#[derive(Debug, Clone)]
pub struct SurfaceReconstructor {
    axis: AxisCurve,
    rotation_shift: f64,
    b0: f64,
    etabar: f64,
    b2c: f64,
    b2s: f64,
    second_order: bool,
    interpolants: SurfaceInterpolants,
}

impl SurfaceReconstructor {
    pub fn new(config: &NearAxisConfig) -> NearAxisResult<Self> {
        let interpolants = SurfaceInterpolants::build(config)?;
        Ok(SurfaceReconstructor {
            axis: config.axis.clone(),
            rotation_shift: config.iota - config.iota_n,
            b0: config.b0,
            etabar: config.etabar,
            b2c: config.b2c,
            b2s: config.b2s,
            second_order: config.order.includes_second_order(),
            interpolants,
        })
    }

    pub fn nfp(&self) -> usize {
        self.axis.nfp
    }

    pub fn field_period(&self) -> f64 {
        self.axis.field_period()
    }

    /// Helical poloidal angle θN = θ − (ι − ιN)·φ.
    pub fn helical_angle(&self, phi: f64, theta: f64) -> f64 {
        theta - self.rotation_shift * phi
    }

    /// Axis position (R0, Z0) from the Fourier coefficients.
    pub fn evaluate_axis(&self, phi: f64) -> (f64, f64) {
        let nfp = self.axis.nfp;
        let r0 = cos_sin_series(&self.axis.rc, &self.axis.rs, nfp, phi);
        let z0 = cos_sin_series(&self.axis.zc, &self.axis.zs, nfp, phi);
        (r0, z0)
    }

    pub fn frame_displacement(&self, r: f64, phi: f64, theta: f64) -> FrameDisplacement {
        let theta_n = self.helical_angle(phi, theta);
        let (sin1, cos1) = theta_n.sin_cos();
        let (sin2, cos2) = (2.0 * theta_n).sin_cos();
        let first = &self.interpolants.first;
        let second = &self.interpolants.second;
        let r2 = r * r;

        let harmonic2 = |c0: &PeriodicSpline, cc: &PeriodicSpline, cs: &PeriodicSpline| {
            c0.eval(phi) + cc.eval(phi) * cos2 + cs.eval(phi) * sin2
        };

        let x = r * (first.x1c.eval(phi) * cos1 + first.x1s.eval(phi) * sin1)
            + r2 * harmonic2(&second.x20, &second.x2c, &second.x2s);
        let y = r * (first.y1c.eval(phi) * cos1 + first.y1s.eval(phi) * sin1)
            + r2 * harmonic2(&second.y20, &second.y2c, &second.y2s);
        let z = r2 * harmonic2(&second.z20, &second.z2c, &second.z2s);
        FrameDisplacement { x, y, z }
    }

    /// Surface point projected on all three cylindrical directions of the
    /// axis plane φ.
    pub fn evaluate_point(&self, r: f64, phi: f64, theta: f64) -> CylindricalPoint {
        let (r0, z0) = self.evaluate_axis(phi);
        let d = self.frame_displacement(r, phi, theta);
        let n = self.interpolants.normal.eval(phi);
        let b = self.interpolants.binormal.eval(phi);
        let t = self.interpolants.tangent.eval(phi);
        let component = |k: usize| d.x * n[k] + d.y * b[k] + d.z * t[k];
        CylindricalPoint {
            r_component: r0 + component(0),
            phi_component: component(1),
            z: z0 + component(2),
        }
    }

    /// Cylindrical (R, Z) of the surface point at axis angle φ.
    pub fn evaluate_surface(&self, r: f64, phi: f64, theta: f64) -> (f64, f64) {
        let p = self.evaluate_point(r, phi, theta);
        (p.r_component, p.z)
    }

    /// |B| = B0 (1 + r η̄ cos θN) + r² (B20 + B2c cos 2θN + B2s sin 2θN).
    ///
    /// The B2c/B2s terms are second harmonics of θN, like the X2c/X2s
    /// shape terms. The r² part is added only for orders from r2 up.
    pub fn evaluate_field_magnitude(&self, r: f64, phi: f64, theta: f64) -> f64 {
        let theta_n = self.helical_angle(phi, theta);
        let mut b = self.b0 * (1.0 + r * self.etabar * theta_n.cos());
        if self.second_order {
            let (sin2, cos2) = (2.0 * theta_n).sin_cos();
            b += r * r
                * (self.interpolants.second.b20.eval(phi) + self.b2c * cos2 + self.b2s * sin2);
        }
        b
    }

    /// Dense (θ, φ) evaluation at fixed radius. θ spans [0, 2π] with the
    /// endpoint included.
    pub fn sample_grid(
        &self,
        r: f64,
        ntheta: usize,
        nphi: usize,
        extent: ToroidalExtent,
    ) -> SurfaceSample {
        let theta = Array1::from(linspace_closed(ntheta, 0.0, 2.0 * PI));
        let phi = Array1::from(match extent {
            ToroidalExtent::FieldPeriod => uniform_grid(nphi, self.field_period()),
            ToroidalExtent::FullTorus => linspace_closed(nphi, 0.0, 2.0 * PI),
        });

        let mut r_grid = Array2::zeros((ntheta, nphi));
        let mut z_grid = Array2::zeros((ntheta, nphi));
        let mut b_grid = Array2::zeros((ntheta, nphi));
        for (i, &th) in theta.iter().enumerate() {
            for (j, &ph) in phi.iter().enumerate() {
                let (rr, zz) = self.evaluate_surface(r, ph, th);
                r_grid[[i, j]] = rr;
                z_grid[[i, j]] = zz;
                b_grid[[i, j]] = self.evaluate_field_magnitude(r, ph, th);
            }
        }
        log::debug!("Sampled surface r={r}: {ntheta}x{nphi} ({extent:?})");

        SurfaceSample {
            radius: r,
            theta,
            phi,
            r: r_grid,
            z: z_grid,
            b: b_grid,
            axis_phi: None,
        }
    }

    /// Cross-sections at `nsections` equally spaced planes of one field
    /// period, each a closed curve of `ntheta` points.
    pub fn poloidal_sections(
        &self,
        r: f64,
        ntheta: usize,
        nsections: usize,
    ) -> Vec<PoloidalSection> {
        let theta = linspace_closed(ntheta, 0.0, 2.0 * PI);
        uniform_grid(nsections, self.field_period())
            .into_iter()
            .map(|phi| {
                let (r_curve, z_curve) = theta
                    .iter()
                    .map(|&th| self.evaluate_surface(r, phi, th))
                    .unzip();
                PoloidalSection {
                    phi,
                    axis: self.evaluate_axis(phi),
                    r: r_curve,
                    z: z_curve,
                }
            })
            .collect()
    }
}
