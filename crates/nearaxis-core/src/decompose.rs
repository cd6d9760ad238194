// ─────────────────────────────────────────────────────────────────────
// SCPN Near-Axis — Mode Decomposer
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Discrete Fourier decomposition of a boundary into the VMEC spectrum.
//!
//! Input grids are `[ntheta, nphi]` with θ_j = 2π j / ntheta and
//! φ_k = 2π k / (nfp · nphi), both endpoints excluded. Each mode (m, n) is
//! projected by direct summation on cos/sin(m θ − n nfp φ) with weight
//! 2 / (ntheta · nphi), halved on each Nyquist index. The (0, 0) term is the
//! grid mean and is set separately.

use nearaxis_math::fourier::{mode_angle, nyquist_scale};
use nearaxis_math::periodic::uniform_grid;
use nearaxis_types::constants::{VMEC_MPOL_MAX, VMEC_NTOR_MAX};
use nearaxis_types::state::{ModeSpectrum, SpectrumComponent};
use ndarray::Array2;
use std::f64::consts::PI;

/// Highest poloidal and toroidal mode numbers of a decomposition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeResolution {
    pub mpol: usize,
    pub ntor: usize,
}

impl ModeResolution {
    /// Resolution capped at what VMEC accepts; values above the cap are
    /// reduced with a warning.
    pub fn clamped(mpol: usize, ntor: usize) -> Self {
        if mpol > VMEC_MPOL_MAX {
            log::warn!("mpol = {mpol} exceeds the VMEC maximum, using {VMEC_MPOL_MAX}");
        }
        if ntor > VMEC_NTOR_MAX {
            log::warn!("ntor = {ntor} exceeds the VMEC maximum, using {VMEC_NTOR_MAX}");
        }
        ModeResolution {
            mpol: mpol.min(VMEC_MPOL_MAX),
            ntor: ntor.min(VMEC_NTOR_MAX),
        }
    }
}

/// Modes carried by the spectrum, excluding (0, 0).
///
/// For m = 0 only n ≥ 1 is kept since (0, −n) duplicates (0, n).
pub fn admissible_modes(resolution: ModeResolution) -> Vec<(usize, i64)> {
    let ntor = resolution.ntor as i64;
    let m0 = (1..=ntor).map(|n| (0, n));
    let rest = (1..=resolution.mpol).flat_map(move |m| (-ntor..=ntor).map(move |n| (m, n)));
    m0.chain(rest).collect()
}

/// Projection weight of mode (m, n) on an `ntheta × nphi` grid.
pub fn mode_scale(ntheta: usize, nphi: usize, m: usize, n: i64) -> f64 {
    let base = 2.0 / (ntheta * nphi) as f64;
    nyquist_scale(base, ntheta, nphi, m, n)
}

/// Sampling angles of a `[ntheta, nphi]` boundary grid.
pub fn grid_angles(ntheta: usize, nphi: usize, nfp: usize) -> (Vec<f64>, Vec<f64>) {
    (
        uniform_grid(ntheta, 2.0 * PI),
        uniform_grid(nphi, 2.0 * PI / nfp as f64),
    )
}

/// (cos, sin) amplitudes of mode (m, n) in `values`.
pub fn project_mode(
    values: &Array2<f64>,
    theta: &[f64],
    phi: &[f64],
    nfp: usize,
    m: usize,
    n: i64,
    scale: f64,
) -> (f64, f64) {
    let mut cos_amp = 0.0;
    let mut sin_amp = 0.0;
    for ((j_theta, j_phi), &v) in values.indexed_iter() {
        let (s, c) = mode_angle(m, n, nfp, theta[j_theta], phi[j_phi]).sin_cos();
        cos_amp += v * c * scale;
        sin_amp += v * s * scale;
    }
    (cos_amp, sin_amp)
}

/// Set the (0, 0) cosine terms to the grid means of R and Z.
pub fn apply_mean_mode(spectrum: &mut ModeSpectrum, r_grid: &Array2<f64>, z_grid: &Array2<f64>) {
    let r_mean = r_grid.mean().unwrap_or(0.0);
    let z_mean = z_grid.mean().unwrap_or(0.0);
    spectrum.set(SpectrumComponent::Rbc, 0, 0, r_mean);
    spectrum.set(SpectrumComponent::Zbc, 0, 0, z_mean);
}

/// Zero the terms that vanish under stellarator symmetry.
pub fn enforce_stellarator_symmetry(spectrum: &mut ModeSpectrum) {
    spectrum.rbs.fill(0.0);
    spectrum.zbc.fill(0.0);
}

/// Decompose sampled R and Z into the boundary spectrum.
///
/// `r_grid` and `z_grid` share the `[ntheta, nphi]` layout described in the
/// module docs. With `lasym = false` the rbs and zbc arrays are exactly zero.
pub fn decompose(
    r_grid: &Array2<f64>,
    z_grid: &Array2<f64>,
    nfp: usize,
    resolution: ModeResolution,
    lasym: bool,
) -> ModeSpectrum {
    debug_assert_eq!(r_grid.dim(), z_grid.dim());
    let (ntheta, nphi) = r_grid.dim();
    let (theta, phi) = grid_angles(ntheta, nphi, nfp);
    let mut spectrum = ModeSpectrum::zeros(resolution.mpol, resolution.ntor);

    for (m, n) in admissible_modes(resolution) {
        let scale = mode_scale(ntheta, nphi, m, n);
        let (rbc, rbs) = project_mode(r_grid, &theta, &phi, nfp, m, n, scale);
        let (zbc, zbs) = project_mode(z_grid, &theta, &phi, nfp, m, n, scale);
        spectrum.set(SpectrumComponent::Rbc, m, n, rbc);
        spectrum.set(SpectrumComponent::Rbs, m, n, rbs);
        spectrum.set(SpectrumComponent::Zbc, m, n, zbc);
        spectrum.set(SpectrumComponent::Zbs, m, n, zbs);
    }
    apply_mean_mode(&mut spectrum, r_grid, z_grid);
    if !lasym {
        enforce_stellarator_symmetry(&mut spectrum);
    }

    log::debug!(
        "Decomposed {ntheta}x{nphi} boundary into mpol={}, ntor={} (lasym={lasym})",
        resolution.mpol,
        resolution.ntor
    );
    spectrum
}

/// Evaluate (R, Z) of a spectrum at (θ, φ).
pub fn synthesize(spectrum: &ModeSpectrum, nfp: usize, theta: f64, phi: f64) -> (f64, f64) {
    let ntor = spectrum.ntor as i64;
    let mut r = 0.0;
    let mut z = 0.0;
    for m in 0..=spectrum.mpol {
        for n in -ntor..=ntor {
            let Some(row) = spectrum.row(n) else {
                continue;
            };
            let (s, c) = mode_angle(m, n, nfp, theta, phi).sin_cos();
            r += spectrum.rbc[[row, m]] * c + spectrum.rbs[[row, m]] * s;
            z += spectrum.zbc[[row, m]] * c + spectrum.zbs[[row, m]] * s;
        }
    }
    (r, z)
}

/// Evaluate a spectrum on the `[ntheta, nphi]` grid used by [`decompose`].
pub fn synthesize_grid(
    spectrum: &ModeSpectrum,
    nfp: usize,
    ntheta: usize,
    nphi: usize,
) -> (Array2<f64>, Array2<f64>) {
    let (theta, phi) = grid_angles(ntheta, nphi, nfp);
    let mut r_grid = Array2::zeros((ntheta, nphi));
    let mut z_grid = Array2::zeros((ntheta, nphi));
    for (i, &th) in theta.iter().enumerate() {
        for (j, &ph) in phi.iter().enumerate() {
            let (r, z) = synthesize(spectrum, nfp, th, ph);
            r_grid[[i, j]] = r;
            z_grid[[i, j]] = z;
        }
    }
    (r_grid, z_grid)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sampled(
        ntheta: usize,
        nphi: usize,
        nfp: usize,
        f: impl Fn(f64, f64) -> (f64, f64),
    ) -> (Array2<f64>, Array2<f64>) {
        let (theta, phi) = grid_angles(ntheta, nphi, nfp);
        let mut r = Array2::zeros((ntheta, nphi));
        let mut z = Array2::zeros((ntheta, nphi));
        for (i, &th) in theta.iter().enumerate() {
            for (j, &ph) in phi.iter().enumerate() {
                let (rv, zv) = f(th, ph);
                r[[i, j]] = rv;
                z[[i, j]] = zv;
            }
        }
        (r, z)
    }

    fn shaped_boundary(nfp: usize) -> impl Fn(f64, f64) -> (f64, f64) {
        let nf = nfp as f64;
        move |th: f64, ph: f64| {
            let r = 1.0 + 0.1 * th.cos() + 0.05 * (th - nf * ph).cos()
                + 0.02 * (2.0 * th + nf * ph).cos()
                + 0.03 * (nf * ph).cos();
            let z = 0.12 * th.sin() - 0.04 * (th - nf * ph).sin()
                + 0.01 * (2.0 * th + nf * ph).sin()
                + 0.025 * (-nf * ph).sin();
            (r, z)
        }
    }

    #[test]
    fn test_admissible_modes_skip_negative_m0() {
        let modes = admissible_modes(ModeResolution { mpol: 2, ntor: 1 });
        assert_eq!(
            modes,
            vec![(0, 1), (1, -1), (1, 0), (1, 1), (2, -1), (2, 0), (2, 1)]
        );
        assert!(admissible_modes(ModeResolution { mpol: 0, ntor: 0 }).is_empty());
    }

    #[test]
    fn test_recovers_known_amplitudes_even_and_odd() {
        let nfp = 3;
        for (ntheta, nphi) in [(16, 10), (15, 9)] {
            let (r, z) = sampled(ntheta, nphi, nfp, shaped_boundary(nfp));
            let s = decompose(&r, &z, nfp, ModeResolution { mpol: 4, ntor: 3 }, false);
            let check = |c, m, n, expected: f64| {
                let got = s.get(c, m, n);
                assert!(
                    (got - expected).abs() < 1e-13,
                    "{c:?}({m},{n}) = {got}, expected {expected} on {ntheta}x{nphi}"
                );
            };
            check(SpectrumComponent::Rbc, 0, 0, 1.0);
            check(SpectrumComponent::Rbc, 1, 0, 0.1);
            check(SpectrumComponent::Rbc, 1, 1, 0.05);
            check(SpectrumComponent::Rbc, 2, -1, 0.02);
            check(SpectrumComponent::Rbc, 0, 1, 0.03);
            check(SpectrumComponent::Rbc, 3, 2, 0.0);
            check(SpectrumComponent::Zbs, 1, 0, 0.12);
            check(SpectrumComponent::Zbs, 1, 1, -0.04);
            check(SpectrumComponent::Zbs, 2, -1, 0.01);
            check(SpectrumComponent::Zbs, 0, 1, 0.025);
            assert!(s.rbs.iter().all(|&v| v == 0.0));
            assert!(s.zbc.iter().all(|&v| v == 0.0));
        }
    }

    #[test]
    fn test_nyquist_modes_recovered_with_halved_weight() {
        let nfp = 2;
        let (ntheta, nphi) = (8, 6);
        let f = |th: f64, ph: f64| {
            let r = 1.0 + 0.07 * (4.0 * th).cos() + 0.04 * (3.0 * 2.0 * ph).cos();
            (r, 0.0)
        };
        let (r, z) = sampled(ntheta, nphi, nfp, f);
        assert!((mode_scale(ntheta, nphi, 4, 0) - 1.0 / 48.0).abs() < 1e-16);
        let s = decompose(&r, &z, nfp, ModeResolution { mpol: 4, ntor: 3 }, false);
        assert!((s.get(SpectrumComponent::Rbc, 4, 0) - 0.07).abs() < 1e-13);
        assert!((s.get(SpectrumComponent::Rbc, 0, 3) - 0.04).abs() < 1e-13);
        assert!(s.get(SpectrumComponent::Rbc, 4, 3).abs() < 1e-13);
        assert!(s.get(SpectrumComponent::Rbc, 4, -3).abs() < 1e-13);
    }

    #[test]
    fn test_symmetry_policy() {
        let nfp = 2;
        let f = |th: f64, ph: f64| {
            (
                1.0 + 0.1 * th.cos() + 0.03 * (th - 2.0 * ph).sin(),
                0.1 * th.sin() + 0.02 * th.cos() + 0.05,
            )
        };
        let (r, z) = sampled(12, 8, nfp, f);
        let res = ModeResolution { mpol: 3, ntor: 2 };

        let sym = decompose(&r, &z, nfp, res, false);
        assert!(sym.rbs.iter().all(|&v| v == 0.0));
        assert!(sym.zbc.iter().all(|&v| v == 0.0));

        let asym = decompose(&r, &z, nfp, res, true);
        assert!((asym.get(SpectrumComponent::Rbs, 1, 1) - 0.03).abs() < 1e-13);
        assert!((asym.get(SpectrumComponent::Zbc, 1, 0) - 0.02).abs() < 1e-13);
        assert!((asym.get(SpectrumComponent::Zbc, 0, 0) - 0.05).abs() < 1e-13);
    }

    #[test]
    fn test_mean_mode_independent_of_resolution() {
        let nfp = 4;
        let (r, z) = sampled(10, 7, nfp, shaped_boundary(nfp));
        let mean = r.mean().unwrap();
        for (mpol, ntor) in [(0, 0), (1, 0), (3, 2), (5, 3)] {
            let s = decompose(&r, &z, nfp, ModeResolution { mpol, ntor }, false);
            assert_eq!(s.rbc[[ntor, 0]], mean);
        }
    }

    #[test]
    fn test_full_resolution_round_trip_asymmetric() {
        let nfp = 3;
        for (ntheta, nphi) in [(8, 6), (7, 5), (6, 7)] {
            let f = |th: f64, ph: f64| {
                let a = (1.3 * th).sin() * (2.0 * ph).cos();
                (1.0 + 0.2 * a + 0.1 * (th + ph).cos(), 0.3 * (th * ph).sin() - a)
            };
            // Arbitrary values on the grid, not necessarily band-limited
            let (r, z) = sampled(ntheta, nphi, nfp, f);
            let res = ModeResolution {
                mpol: ntheta / 2,
                ntor: nphi / 2,
            };
            let s = decompose(&r, &z, nfp, res, true);
            let (r2, z2) = synthesize_grid(&s, nfp, ntheta, nphi);
            for ((a, b), (c, d)) in r.iter().zip(&r2).zip(z.iter().zip(&z2)) {
                assert!((a - b).abs() < 1e-12, "R {a} vs {b} on {ntheta}x{nphi}");
                assert!((c - d).abs() < 1e-12, "Z {c} vs {d} on {ntheta}x{nphi}");
            }
        }
    }

    #[test]
    fn test_clamped_resolution() {
        assert_eq!(
            ModeResolution::clamped(150, 3),
            ModeResolution { mpol: 100, ntor: 3 }
        );
        assert_eq!(
            ModeResolution::clamped(8, 101),
            ModeResolution { mpol: 8, ntor: 100 }
        );
    }

    #[test]
    fn test_synthesize_single_mode() {
        let mut s = ModeSpectrum::zeros(2, 1);
        s.set(SpectrumComponent::Rbc, 0, 0, 1.5);
        s.set(SpectrumComponent::Rbc, 1, -1, 0.2);
        s.set(SpectrumComponent::Zbs, 1, -1, 0.3);
        let (th, ph) = (0.7, 0.2);
        let (r, z) = synthesize(&s, 5, th, ph);
        assert!((r - (1.5 + 0.2 * (th + 5.0 * ph).cos())).abs() < 1e-15);
        assert!((z - 0.3 * (th + 5.0 * ph).sin()).abs() < 1e-15);
    }
}
