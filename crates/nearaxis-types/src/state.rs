// ─────────────────────────────────────────────────────────────────────
// SCPN Near-Axis — State
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::fmt;

/// Closed magnetic axis as a truncated Fourier series in the toroidal angle.
///
///   R0(φ) = Σ rc_i cos(i·nfp·φ) + rs_i sin(i·nfp·φ)
///   Z0(φ) = Σ zs_i sin(i·nfp·φ) + zc_i cos(i·nfp·φ)
///
/// `rs` and `zc` are empty for a stellarator-symmetric axis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AxisCurve {
    pub nfp: usize,
    pub rc: Vec<f64>,
    pub zs: Vec<f64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rs: Vec<f64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub zc: Vec<f64>,
}

impl AxisCurve {
    /// Toroidal extent of one field period, 2π/nfp.
    pub fn field_period(&self) -> f64 {
        2.0 * PI / self.nfp as f64
    }
}

/// One frame vector sampled on the φ grid, in cylindrical components.
///
/// The toroidal component is optional; an empty `phi` means zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CylindricalVectorField {
    pub r: Vec<f64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub phi: Vec<f64>,
    pub z: Vec<f64>,
}

impl CylindricalVectorField {
    /// Field with the same components at every one of `n` samples.
    pub fn constant(n: usize, r: f64, phi: f64, z: f64) -> Self {
        CylindricalVectorField {
            r: vec![r; n],
            phi: vec![phi; n],
            z: vec![z; n],
        }
    }
}

/// Tangent / normal / binormal frame along the axis.
/// Orthonormality at each sample is the producer's responsibility.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocalFrame {
    pub tangent: CylindricalVectorField,
    pub normal: CylindricalVectorField,
    pub binormal: CylindricalVectorField,
}

/// First-order shape functions X1c, X1s, Y1c, Y1s on the φ grid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FirstOrderShape {
    #[serde(rename = "X1c")]
    pub x1c: Vec<f64>,
    #[serde(rename = "X1s")]
    pub x1s: Vec<f64>,
    #[serde(rename = "Y1c")]
    pub y1c: Vec<f64>,
    #[serde(rename = "Y1s")]
    pub y1s: Vec<f64>,
}

/// Second-order shape functions on the φ grid, plus the B20 field correction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecondOrderShape {
    #[serde(rename = "X20")]
    pub x20: Vec<f64>,
    #[serde(rename = "X2c")]
    pub x2c: Vec<f64>,
    #[serde(rename = "X2s")]
    pub x2s: Vec<f64>,
    #[serde(rename = "Y20")]
    pub y20: Vec<f64>,
    #[serde(rename = "Y2c")]
    pub y2c: Vec<f64>,
    #[serde(rename = "Y2s")]
    pub y2s: Vec<f64>,
    #[serde(rename = "Z20")]
    pub z20: Vec<f64>,
    #[serde(rename = "Z2c")]
    pub z2c: Vec<f64>,
    #[serde(rename = "Z2s")]
    pub z2s: Vec<f64>,
    #[serde(rename = "B20")]
    pub b20: Vec<f64>,
}

impl SecondOrderShape {
    pub fn zeros(n: usize) -> Self {
        SecondOrderShape {
            x20: vec![0.0; n],
            x2c: vec![0.0; n],
            x2s: vec![0.0; n],
            y20: vec![0.0; n],
            y2c: vec![0.0; n],
            y2s: vec![0.0; n],
            z20: vec![0.0; n],
            z2c: vec![0.0; n],
            z2s: vec![0.0; n],
            b20: vec![0.0; n],
        }
    }

    /// All sampled arrays with their names, in a fixed order.
    pub fn named_arrays(&self) -> [(&'static str, &[f64]); 10] {
        [
            ("X20", self.x20.as_slice()),
            ("X2c", self.x2c.as_slice()),
            ("X2s", self.x2s.as_slice()),
            ("Y20", self.y20.as_slice()),
            ("Y2c", self.y2c.as_slice()),
            ("Y2s", self.y2s.as_slice()),
            ("Z20", self.z20.as_slice()),
            ("Z2c", self.z2c.as_slice()),
            ("Z2s", self.z2s.as_slice()),
            ("B20", self.b20.as_slice()),
        ]
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShapeCoefficients {
    pub first: FirstOrderShape,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub second: Option<SecondOrderShape>,
}

/// Order of the near-axis expansion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ExpansionOrder {
    #[default]
    #[serde(rename = "r1")]
    First,
    #[serde(rename = "r2")]
    Second,
    #[serde(rename = "r3")]
    Third,
}

impl ExpansionOrder {
    /// Orders above r1 carry the r² surface and field terms.
    pub fn includes_second_order(self) -> bool {
        !matches!(self, ExpansionOrder::First)
    }
}

impl fmt::Display for ExpansionOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ExpansionOrder::First => "r1",
            ExpansionOrder::Second => "r2",
            ExpansionOrder::Third => "r3",
        };
        f.write_str(label)
    }
}

/// Dense evaluation of a flux surface at fixed near-axis radius.
///
/// Arrays are `[ntheta, nphi]`: rows follow θ, columns follow φ.
#[derive(Debug, Clone)]
pub struct SurfaceSample {
    pub radius: f64,
    pub theta: Array1<f64>,
    pub phi: Array1<f64>,
    pub r: Array2<f64>,
    pub z: Array2<f64>,
    pub b: Array2<f64>,
    /// Axis angle φ0 each point was evaluated at, for cylindrical-plane grids.
    pub axis_phi: Option<Array2<f64>>,
}

impl SurfaceSample {
    /// Cartesian coordinates (X, Y, Z) with X = R cos φ, Y = R sin φ.
    pub fn cartesian(&self) -> (Array2<f64>, Array2<f64>, Array2<f64>) {
        let x = Array2::from_shape_fn(self.r.dim(), |(i, j)| self.r[[i, j]] * self.phi[j].cos());
        let y = Array2::from_shape_fn(self.r.dim(), |(i, j)| self.r[[i, j]] * self.phi[j].sin());
        (x, y, self.z.clone())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpectrumComponent {
    Rbc,
    Rbs,
    Zbc,
    Zbs,
}

/// Boundary Fourier spectrum, VMEC convention
///   R = Σ rbc cos(mθ − n·nfp·φ) + rbs sin(mθ − n·nfp·φ)
///   Z = Σ zbc cos(mθ − n·nfp·φ) + zbs sin(mθ − n·nfp·φ)
///
/// Arrays are `[2·ntor + 1, mpol + 1]`, indexed `[n + ntor, m]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModeSpectrum {
    pub mpol: usize,
    pub ntor: usize,
    pub rbc: Array2<f64>,
    pub rbs: Array2<f64>,
    pub zbc: Array2<f64>,
    pub zbs: Array2<f64>,
}

impl ModeSpectrum {
    pub fn zeros(mpol: usize, ntor: usize) -> Self {
        let shape = (2 * ntor + 1, mpol + 1);
        ModeSpectrum {
            mpol,
            ntor,
            rbc: Array2::zeros(shape),
            rbs: Array2::zeros(shape),
            zbc: Array2::zeros(shape),
            zbs: Array2::zeros(shape),
        }
    }

    /// Row of toroidal mode `n`, or `None` outside [-ntor, ntor].
    pub fn row(&self, n: i64) -> Option<usize> {
        let ntor = self.ntor as i64;
        if n < -ntor || n > ntor {
            None
        } else {
            Some((n + ntor) as usize)
        }
    }

    pub fn component(&self, component: SpectrumComponent) -> &Array2<f64> {
        match component {
            SpectrumComponent::Rbc => &self.rbc,
            SpectrumComponent::Rbs => &self.rbs,
            SpectrumComponent::Zbc => &self.zbc,
            SpectrumComponent::Zbs => &self.zbs,
        }
    }

    pub fn component_mut(&mut self, component: SpectrumComponent) -> &mut Array2<f64> {
        match component {
            SpectrumComponent::Rbc => &mut self.rbc,
            SpectrumComponent::Rbs => &mut self.rbs,
            SpectrumComponent::Zbc => &mut self.zbc,
            SpectrumComponent::Zbs => &mut self.zbs,
        }
    }

    /// Amplitude of mode (m, n); modes outside the stored range are zero.
    pub fn get(&self, component: SpectrumComponent, m: usize, n: i64) -> f64 {
        match self.row(n) {
            Some(row) if m <= self.mpol => self.component(component)[[row, m]],
            _ => 0.0,
        }
    }

    /// Set mode (m, n). Returns false when the mode is outside the stored range.
    pub fn set(&mut self, component: SpectrumComponent, m: usize, n: i64, value: f64) -> bool {
        match self.row(n) {
            Some(row) if m <= self.mpol => {
                self.component_mut(component)[[row, m]] = value;
                true
            }
            _ => false,
        }
    }
}
