// ─────────────────────────────────────────────────────────────────────
// SCPN Near-Axis — Cubic Splines
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Interpolating cubic splines (degree 3, no smoothing).
//!
//! Each segment `i` stores `[y_i, b_i, c_i, d_i]` so that on
//! `[x_i, x_{i+1}]` with `t = x - x_i`:
//!
//!   S(x) = y_i + b_i t + c_i t² + d_i t³
//!
//! The second derivatives at the knots come from a cyclic tridiagonal
//! solve: the first knot is repeated one period later and S, S', S'' match
//! across the seam.

use crate::periodic::wrap;
use crate::tridiag::cyclic_thomas_solve;
use nearaxis_types::error::{NearAxisError, NearAxisResult};

/// Fewest knots a periodic spline is defined for.
pub const PERIODIC_MIN_POINTS: usize = 3;

#[derive(Debug, Clone, PartialEq)]
pub struct CubicSpline {
    knots: Vec<f64>,
    coeffs: Vec<[f64; 4]>,
}

fn check_samples(x: &[f64], y: &[f64], min_points: usize) -> NearAxisResult<()> {
    if x.len() != y.len() {
        return Err(NearAxisError::Interpolation(format!(
            "Spline abscissa and ordinate lengths differ: {} vs {}",
            x.len(),
            y.len()
        )));
    }
    if x.len() < min_points {
        return Err(NearAxisError::Interpolation(format!(
            "Spline needs at least {min_points} points, got {}",
            x.len()
        )));
    }
    if x.iter().chain(y).any(|v| !v.is_finite()) {
        return Err(NearAxisError::Interpolation(
            "Spline samples must be finite".to_string(),
        ));
    }
    if x.windows(2).any(|w| w[1] <= w[0]) {
        return Err(NearAxisError::Interpolation(
            "Spline knots must be strictly increasing".to_string(),
        ));
    }
    Ok(())
}

/// Segment coefficients from knot values and second derivatives.
fn segment_coeffs(h: f64, y0: f64, y1: f64, m0: f64, m1: f64) -> [f64; 4] {
    [
        y0,
        (y1 - y0) / h - h * (2.0 * m0 + m1) / 6.0,
        0.5 * m0,
        (m1 - m0) / (6.0 * h),
    ]
}

impl CubicSpline {
    /// Periodic interpolating spline over `[x_0, x_0 + period)`.
    ///
    /// The samples must not repeat the endpoint: `x_{n-1} < x_0 + period`.
    pub fn periodic(x: &[f64], y: &[f64], period: f64) -> NearAxisResult<Self> {
        check_samples(x, y, PERIODIC_MIN_POINTS)?;
        let n = x.len();
        if !(period.is_finite() && x[n - 1] < x[0] + period) {
            return Err(NearAxisError::Interpolation(format!(
                "Periodic spline knots must span less than one period ({period})"
            )));
        }

        let mut knots = x.to_vec();
        knots.push(x[0] + period);
        let h: Vec<f64> = knots.windows(2).map(|w| w[1] - w[0]).collect();
        let y_at = |i: usize| y[i % n];
        let slope: Vec<f64> = (0..n).map(|i| (y_at(i + 1) - y_at(i)) / h[i]).collect();

        let mut a = vec![0.0; n];
        let mut b = vec![0.0; n];
        let mut c = vec![0.0; n];
        let mut d = vec![0.0; n];
        for i in 0..n {
            let prev = (i + n - 1) % n;
            a[i] = h[prev];
            b[i] = 2.0 * (h[prev] + h[i]);
            c[i] = h[i];
            d[i] = 6.0 * (slope[i] - slope[prev]);
        }
        let m = cyclic_thomas_solve(&a, &b, &c, &d)?;

        let coeffs = (0..n)
            .map(|i| segment_coeffs(h[i], y_at(i), y_at(i + 1), m[i], m[(i + 1) % n]))
            .collect();
        Ok(CubicSpline { knots, coeffs })
    }

    /// Segment containing `x`; the end segments extend to ±∞.
    fn segment(&self, x: f64) -> usize {
        let upper = self.knots.partition_point(|&k| k <= x);
        upper.saturating_sub(1).min(self.coeffs.len() - 1)
    }

    pub fn eval(&self, x: f64) -> f64 {
        let i = self.segment(x);
        let [y, b, c, d] = self.coeffs[i];
        let t = x - self.knots[i];
        y + t * (b + t * (c + t * d))
    }
}

/// Periodic cubic spline that accepts any real argument.
///
/// The argument is reduced modulo the period before the spline is queried,
/// since the underlying spline only covers one period.
#[derive(Debug, Clone, PartialEq)]
pub struct PeriodicSpline {
    spline: CubicSpline,
    start: f64,
    period: f64,
}

impl PeriodicSpline {
    pub fn new(x: &[f64], y: &[f64], period: f64) -> NearAxisResult<Self> {
        let spline = CubicSpline::periodic(x, y, period)?;
        Ok(PeriodicSpline {
            spline,
            start: x[0],
            period,
        })
    }

    /// The identically zero function of the given period.
    pub fn zero(period: f64) -> Self {
        PeriodicSpline {
            spline: CubicSpline {
                knots: vec![0.0, period],
                coeffs: vec![[0.0; 4]],
            },
            start: 0.0,
            period,
        }
    }

    pub fn period(&self) -> f64 {
        self.period
    }

    fn reduce(&self, x: f64) -> f64 {
        self.start + wrap(x - self.start, self.period)
    }

    pub fn eval(&self, x: f64) -> f64 {
        self.spline.eval(self.reduce(x))
    }
}
