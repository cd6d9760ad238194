//! Truncated Fourier series and discrete-transform normalization.

/// Evaluate Σ_i cos_i·cos(i·nfp·φ) + sin_i·sin(i·nfp·φ).
///
/// The coefficient slices may have different lengths; missing entries are zero.
pub fn cos_sin_series(cos_coeffs: &[f64], sin_coeffs: &[f64], nfp: usize, phi: f64) -> f64 {
    let nfp = nfp as f64;
    let cos_part: f64 = cos_coeffs
        .iter()
        .enumerate()
        .map(|(i, c)| c * (i as f64 * nfp * phi).cos())
        .sum();
    let sin_part: f64 = sin_coeffs
        .iter()
        .enumerate()
        .map(|(i, s)| s * (i as f64 * nfp * phi).sin())
        .sum();
    cos_part + sin_part
}

/// VMEC angle argument m·θ − n·nfp·φ.
pub fn mode_angle(m: usize, n: i64, nfp: usize, theta: f64, phi: f64) -> f64 {
    m as f64 * theta - n as f64 * nfp as f64 * phi
}

/// Projection weight for mode (m, n) on an `ntheta × nphi` grid.
///
/// Starts from `base` and halves it once when `m` sits on the poloidal
/// Nyquist index (even `ntheta`, m = ntheta/2) and once more, independently,
/// when `|n|` sits on the toroidal Nyquist index (even `nphi`, |n| = nphi/2).
pub fn nyquist_scale(base: f64, ntheta: usize, nphi: usize, m: usize, n: i64) -> f64 {
    let mut scale = base;
    if ntheta % 2 == 0 && m == ntheta / 2 {
        scale /= 2.0;
    }
    if nphi % 2 == 0 && n.unsigned_abs() as usize == nphi / 2 {
        scale /= 2.0;
    }
    scale
}
