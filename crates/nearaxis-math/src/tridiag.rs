// ─────────────────────────────────────────────────────────────────────
// SCPN Near-Axis — Tridiag
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Thomas algorithm for tridiagonal and cyclic tridiagonal systems.
//!
//! The periodic cubic spline reduces to a cyclic system, which is solved
//! with two plain Thomas sweeps (Sherman–Morrison).

use nearaxis_types::error::{NearAxisError, NearAxisResult};

/// Solve tridiagonal system Ax = d using the Thomas algorithm.
///
/// - `a`: sub-diagonal \[n\] (a\[0\] unused)
/// - `b`: main diagonal \[n\]
/// - `c`: super-diagonal \[n\] (c\[n-1\] unused)
/// - `d`: right-hand side \[n\]
///
/// Returns: solution vector x \[n\], or an error on a zero pivot.
pub fn thomas_solve(a: &[f64], b: &[f64], c: &[f64], d: &[f64]) -> NearAxisResult<Vec<f64>> {
    let n = d.len();
    if n == 0 || a.len() != n || b.len() != n || c.len() != n {
        return Err(NearAxisError::Interpolation(format!(
            "Tridiagonal system needs equal non-zero lengths, got a={}, b={}, c={}, d={}",
            a.len(),
            b.len(),
            c.len(),
            n
        )));
    }

    let mut c_prime = vec![0.0; n];
    let mut d_prime = vec![0.0; n];

    let mut den = b[0];
    for i in 0..n {
        if i > 0 {
            den = b[i] - a[i] * c_prime[i - 1];
        }
        if den == 0.0 || !den.is_finite() {
            return Err(NearAxisError::Interpolation(format!(
                "Tridiagonal system is singular at row {i}"
            )));
        }
        if i < n - 1 {
            c_prime[i] = c[i] / den;
        }
        let carry = if i > 0 { a[i] * d_prime[i - 1] } else { 0.0 };
        d_prime[i] = (d[i] - carry) / den;
    }

    let mut x = d_prime;
    for i in (0..n - 1).rev() {
        x[i] -= c_prime[i] * x[i + 1];
    }
    Ok(x)
}

/// Solve a cyclic tridiagonal system via Sherman–Morrison.
///
/// Same layout as [`thomas_solve`], except that `a[0]` couples row 0 to
/// x\[n-1\] and `c[n-1]` couples row n-1 to x\[0\]. Requires n >= 3.
pub fn cyclic_thomas_solve(
    a: &[f64],
    b: &[f64],
    c: &[f64],
    d: &[f64],
) -> NearAxisResult<Vec<f64>> {
    let n = d.len();
    if n < 3 {
        return Err(NearAxisError::Interpolation(format!(
            "Cyclic tridiagonal system needs n >= 3, got {n}"
        )));
    }
    let corner_top = a[0];
    let corner_bottom = c[n - 1];
    let gamma = -b[0];

    let mut bb = b.to_vec();
    bb[0] = b[0] - gamma;
    bb[n - 1] = b[n - 1] - corner_bottom * corner_top / gamma;

    let x = thomas_solve(a, &bb, c, d)?;

    let mut u = vec![0.0; n];
    u[0] = gamma;
    u[n - 1] = corner_bottom;
    let z = thomas_solve(a, &bb, c, &u)?;

    let denom = 1.0 + z[0] + corner_top * z[n - 1] / gamma;
    if denom == 0.0 || !denom.is_finite() {
        return Err(NearAxisError::Interpolation(
            "Cyclic tridiagonal system is singular".to_string(),
        ));
    }
    let fact = (x[0] + corner_top * x[n - 1] / gamma) / denom;

    Ok(x.iter().zip(&z).map(|(xi, zi)| xi - fact * zi).collect())
}
