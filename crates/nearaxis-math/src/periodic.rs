//! Periodic wrap and angle grids.

/// Reduce `x` into `[0, period)`.
///
/// Negative inputs wrap from the top; multiples of the period map to 0.
pub fn wrap(x: f64, period: f64) -> f64 {
    let w = x.rem_euclid(period);
    // rem_euclid can round up to `period` for tiny negative x
    if w >= period {
        0.0
    } else {
        w
    }
}

/// `n` equally spaced points on `[0, period)`, endpoint excluded.
pub fn uniform_grid(n: usize, period: f64) -> Vec<f64> {
    let step = period / n as f64;
    (0..n).map(|j| j as f64 * step).collect()
}

/// `n` equally spaced points on `[a, b]`, both endpoints included.
pub fn linspace_closed(n: usize, a: f64, b: f64) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![a],
        _ => {
            let step = (b - a) / (n - 1) as f64;
            (0..n)
                .map(|j| if j == n - 1 { b } else { a + j as f64 * step })
                .collect()
        }
    }
}
