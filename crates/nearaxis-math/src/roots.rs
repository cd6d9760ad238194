//! Bracketed scalar root finding (Brent's method).

use nearaxis_types::error::{NearAxisError, NearAxisResult};

#[derive(Debug, Clone, Copy)]
pub struct RootOptions {
    pub xtol: f64,
    pub max_iter: usize,
}

impl Default for RootOptions {
    fn default() -> Self {
        Self {
            xtol: 1e-13,
            max_iter: 100,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Root {
    pub x: f64,
    pub residual: f64,
    pub iterations: usize,
}

/// Find a root of `f` in `[lower, upper]`.
///
/// `guess`, when given and inside the bracket, is evaluated first: an exact
/// zero returns immediately, otherwise it narrows the bracket to the half
/// with the sign change.
pub fn brent<F>(
    mut f: F,
    lower: f64,
    upper: f64,
    guess: Option<f64>,
    opts: RootOptions,
) -> NearAxisResult<Root>
where
    F: FnMut(f64) -> f64,
{
    let mut a = lower;
    let mut b = upper;
    let mut fa = f(a);
    let mut fb = f(b);
    if !fa.is_finite() || !fb.is_finite() {
        return Err(NearAxisError::RootFinding(format!(
            "Non-finite residual at bracket ends: f({a}) = {fa}, f({b}) = {fb}"
        )));
    }

    if let Some(x0) = guess.filter(|x0| *x0 > a && *x0 < b) {
        let f0 = f(x0);
        if f0 == 0.0 {
            return Ok(Root {
                x: x0,
                residual: 0.0,
                iterations: 0,
            });
        }
        if f0.is_finite() {
            if fa.signum() != f0.signum() {
                b = x0;
                fb = f0;
            } else {
                a = x0;
                fa = f0;
            }
        }
    }

    if fa == 0.0 {
        return Ok(Root {
            x: a,
            residual: 0.0,
            iterations: 0,
        });
    }
    if fb == 0.0 {
        return Ok(Root {
            x: b,
            residual: 0.0,
            iterations: 0,
        });
    }
    if fa.signum() == fb.signum() {
        return Err(NearAxisError::RootFinding(format!(
            "Root not bracketed in [{a}, {b}]: f = {fa}, {fb}"
        )));
    }

    let mut c = b;
    let mut fc = fb;
    let mut d = b - a;
    let mut e = d;

    for iter in 1..=opts.max_iter {
        if fb.signum() == fc.signum() {
            c = a;
            fc = fa;
            d = b - a;
            e = d;
        }
        if fc.abs() < fb.abs() {
            a = b;
            b = c;
            c = a;
            fa = fb;
            fb = fc;
            fc = fa;
        }

        let tol1 = 2.0 * f64::EPSILON * b.abs() + 0.5 * opts.xtol;
        let xm = 0.5 * (c - b);
        if xm.abs() <= tol1 || fb == 0.0 {
            return Ok(Root {
                x: b,
                residual: fb,
                iterations: iter,
            });
        }

        if e.abs() >= tol1 && fa.abs() > fb.abs() {
            // Inverse quadratic interpolation, secant when only two points
            let s = fb / fa;
            let (mut p, mut q) = if a == c {
                (2.0 * xm * s, 1.0 - s)
            } else {
                let qa = fa / fc;
                let r = fb / fc;
                (
                    s * (2.0 * xm * qa * (qa - r) - (b - a) * (r - 1.0)),
                    (qa - 1.0) * (r - 1.0) * (s - 1.0),
                )
            };
            if p > 0.0 {
                q = -q;
            }
            p = p.abs();
            let min1 = 3.0 * xm * q - (tol1 * q).abs();
            let min2 = (e * q).abs();
            if 2.0 * p < min1.min(min2) {
                e = d;
                d = p / q;
            } else {
                d = xm;
                e = d;
            }
        } else {
            d = xm;
            e = d;
        }

        a = b;
        fa = fb;
        b += if d.abs() > tol1 { d } else { tol1.copysign(xm) };
        fb = f(b);
        if !fb.is_finite() {
            return Err(NearAxisError::RootFinding(format!(
                "Non-finite residual f({b}) = {fb}"
            )));
        }
    }

    Err(NearAxisError::RootFinding(format!(
        "Brent iteration did not converge in {} steps (last x = {b}, f = {fb})",
        opts.max_iter
    )))
}
