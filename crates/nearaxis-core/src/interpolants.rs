// ─────────────────────────────────────────────────────────────────────
// SCPN Near-Axis — Interpolants
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Continuous periodic functions of the toroidal angle built from the sampled
//! frame and shape arrays.
//!
//! Every interpolant is a periodic cubic spline over one field period, so
//! evaluation at any φ is reduced modulo 2π/nfp first. Quantities that are
//! absent (toroidal frame components, second-order shape of an r1
//! configuration) are the identically zero function.

use nearaxis_math::spline::PeriodicSpline;
use nearaxis_types::config::NearAxisConfig;
use nearaxis_types::error::NearAxisResult;
use nearaxis_types::state::{CylindricalVectorField, FirstOrderShape, SecondOrderShape};

fn spline_or_zero(phi: &[f64], values: &[f64], period: f64) -> NearAxisResult<PeriodicSpline> {
    if values.is_empty() {
        Ok(PeriodicSpline::zero(period))
    } else {
        PeriodicSpline::new(phi, values, period)
    }
}

/// Cylindrical components of one frame vector as functions of φ.
#[derive(Debug, Clone)]
pub struct VectorSplines {
    pub r: PeriodicSpline,
    pub phi: PeriodicSpline,
    pub z: PeriodicSpline,
}

impl VectorSplines {
    fn build(phi: &[f64], field: &CylindricalVectorField, period: f64) -> NearAxisResult<Self> {
        Ok(VectorSplines {
            r: spline_or_zero(phi, &field.r, period)?,
            phi: spline_or_zero(phi, &field.phi, period)?,
            z: spline_or_zero(phi, &field.z, period)?,
        })
    }

    /// (R, φ, Z) components at `phi`.
    pub fn eval(&self, phi: f64) -> [f64; 3] {
        [self.r.eval(phi), self.phi.eval(phi), self.z.eval(phi)]
    }
}

#[derive(Debug, Clone)]
pub struct FirstOrderSplines {
    pub x1c: PeriodicSpline,
    pub x1s: PeriodicSpline,
    pub y1c: PeriodicSpline,
    pub y1s: PeriodicSpline,
}

impl FirstOrderSplines {
    fn build(phi: &[f64], shape: &FirstOrderShape, period: f64) -> NearAxisResult<Self> {
        Ok(FirstOrderSplines {
            x1c: PeriodicSpline::new(phi, &shape.x1c, period)?,
            x1s: PeriodicSpline::new(phi, &shape.x1s, period)?,
            y1c: PeriodicSpline::new(phi, &shape.y1c, period)?,
            y1s: PeriodicSpline::new(phi, &shape.y1s, period)?,
        })
    }
}

#[derive(Debug, Clone)]
pub struct SecondOrderSplines {
    pub x20: PeriodicSpline,
    pub x2c: PeriodicSpline,
    pub x2s: PeriodicSpline,
    pub y20: PeriodicSpline,
    pub y2c: PeriodicSpline,
    pub y2s: PeriodicSpline,
    pub z20: PeriodicSpline,
    pub z2c: PeriodicSpline,
    pub z2s: PeriodicSpline,
    pub b20: PeriodicSpline,
}

impl SecondOrderSplines {
    fn build(phi: &[f64], shape: &SecondOrderShape, period: f64) -> NearAxisResult<Self> {
        let spline = |values: &[f64]| PeriodicSpline::new(phi, values, period);
        Ok(SecondOrderSplines {
            x20: spline(&shape.x20)?,
            x2c: spline(&shape.x2c)?,
            x2s: spline(&shape.x2s)?,
            y20: spline(&shape.y20)?,
            y2c: spline(&shape.y2c)?,
            y2s: spline(&shape.y2s)?,
            z20: spline(&shape.z20)?,
            z2c: spline(&shape.z2c)?,
            z2s: spline(&shape.z2s)?,
            b20: spline(&shape.b20)?,
        })
    }

    /// All second-order terms vanish.
    pub fn zero(period: f64) -> Self {
        let z = PeriodicSpline::zero(period);
        SecondOrderSplines {
            x20: z.clone(),
            x2c: z.clone(),
            x2s: z.clone(),
            y20: z.clone(),
            y2c: z.clone(),
            y2s: z.clone(),
            z20: z.clone(),
            z2c: z.clone(),
            z2s: z.clone(),
            b20: z,
        }
    }
}

/// All spline interpolants of a near-axis configuration.
#[derive(Debug, Clone)]
pub struct SurfaceInterpolants {
    pub period: f64,
    pub tangent: VectorSplines,
    pub normal: VectorSplines,
    pub binormal: VectorSplines,
    pub first: FirstOrderSplines,
    pub second: SecondOrderSplines,
}

impl SurfaceInterpolants {
    /// Build every interpolant once; evaluation afterwards is stateless.
    ///
    /// The second-order set is the zero function unless the expansion order
    /// includes r² terms.
    pub fn build(config: &NearAxisConfig) -> NearAxisResult<Self> {
        let period = config.field_period();
        let phi = config.phi_grid();
        let frame = &config.frame;

        let second = match (&config.shape.second, config.order.includes_second_order()) {
            (Some(shape), true) => SecondOrderSplines::build(&phi, shape, period)?,
            _ => SecondOrderSplines::zero(period),
        };

        log::debug!(
            "Built near-axis interpolants: {} samples, order {}, period {:.6}",
            phi.len(),
            config.order,
            period
        );

        Ok(SurfaceInterpolants {
            period,
            tangent: VectorSplines::build(&phi, &frame.tangent, period)?,
            normal: VectorSplines::build(&phi, &frame.normal, period)?,
            binormal: VectorSplines::build(&phi, &frame.binormal, period)?,
            first: FirstOrderSplines::build(&phi, &config.shape.first, period)?,
            second,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nearaxis_types::state::ExpansionOrder;

    #[test]
    fn test_circular_axis_interpolants_are_constant() {
        let cfg = NearAxisConfig::circular_axis(1.0, 3, 1.0, 8);
        let interp = SurfaceInterpolants::build(&cfg).unwrap();
        for k in 0..13 {
            let phi = -2.0 + 0.37 * k as f64;
            assert!((interp.first.x1c.eval(phi) - 1.0).abs() < 1e-14);
            assert!((interp.first.y1s.eval(phi) - 1.0).abs() < 1e-14);
            assert!(interp.first.x1s.eval(phi).abs() < 1e-14);
            let [nr, nphi, nz] = interp.normal.eval(phi);
            assert!((nr + 1.0).abs() < 1e-14);
            assert!(nphi.abs() < 1e-14 && nz.abs() < 1e-14);
            assert!((interp.tangent.eval(phi)[1] - 1.0).abs() < 1e-14);
        }
        assert_eq!(interp.second.b20.eval(0.4), 0.0);
    }

    #[test]
    fn test_missing_phi_component_is_zero_spline() {
        let mut cfg = NearAxisConfig::circular_axis(1.0, 2, 1.0, 6);
        cfg.frame.normal.phi.clear();
        let interp = SurfaceInterpolants::build(&cfg).unwrap();
        assert_eq!(interp.normal.phi.eval(1.3), 0.0);
        assert_eq!(interp.normal.phi.period(), cfg.field_period());
    }

    #[test]
    fn test_second_order_only_when_order_requires() {
        let mut cfg = NearAxisConfig::circular_axis(1.0, 2, 1.0, 6);
        let mut second = SecondOrderShape::zeros(6);
        second.b20 = vec![0.5; 6];
        cfg.shape.second = Some(second);

        let r1 = SurfaceInterpolants::build(&cfg).unwrap();
        assert_eq!(r1.second.b20.eval(0.2), 0.0);

        cfg.order = ExpansionOrder::Second;
        let r2 = SurfaceInterpolants::build(&cfg).unwrap();
        assert!((r2.second.b20.eval(0.2) - 0.5).abs() < 1e-14);
    }

    #[test]
    fn test_interpolants_follow_sampled_variation() {
        let nphi = 32;
        let mut cfg = NearAxisConfig::circular_axis(1.0, 4, 1.0, nphi);
        let phi = cfg.phi_grid();
        cfg.shape.first.x1c = phi.iter().map(|p| 1.0 + 0.1 * (4.0 * p).cos()).collect();
        let interp = SurfaceInterpolants::build(&cfg).unwrap();
        let q: f64 = 0.123;
        let exact = 1.0 + 0.1 * (4.0 * q).cos();
        assert!((interp.first.x1c.eval(q) - exact).abs() < 1e-5);
        // One field period later
        assert!((interp.first.x1c.eval(q + cfg.field_period()) - exact).abs() < 1e-5);
    }
}
