// ─────────────────────────────────────────────────────────────────────
// SCPN Near-Axis — Config
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use crate::constants::{DEFAULT_BOUNDARY_RADIUS, DEFAULT_NTHETA, DEFAULT_NTOR_WRITE_MAX};
use crate::error::{NearAxisError, NearAxisResult};
use crate::state::{
    AxisCurve, CylindricalVectorField, ExpansionOrder, FirstOrderShape, LocalFrame,
    ShapeCoefficients,
};
use serde::{Deserialize, Serialize};

/// Minimum number of φ samples a periodic spline can be built from.
pub const MIN_PHI_SAMPLES: usize = 3;

/// Near-axis equilibrium handed over by the expansion solver.
///
/// Every reconstruction reads from this record only; it is never mutated
/// after loading.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NearAxisConfig {
    #[serde(default)]
    pub name: String,
    pub axis: AxisCurve,
    /// Toroidal grid of the sampled arrays. Empty means uniform on
    /// [0, 2π/nfp) with the endpoint excluded.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub phi: Vec<f64>,
    pub iota: f64,
    #[serde(rename = "iotaN")]
    pub iota_n: f64,
    pub frame: LocalFrame,
    pub shape: ShapeCoefficients,
    #[serde(default)]
    pub order: ExpansionOrder,
    #[serde(default)]
    pub lasym: bool,
    #[serde(rename = "B0", default = "default_b0")]
    pub b0: f64,
    pub etabar: f64,
    #[serde(rename = "B2c", default)]
    pub b2c: f64,
    #[serde(rename = "B2s", default)]
    pub b2s: f64,
    #[serde(default)]
    pub sigma0: f64,
    #[serde(rename = "I2", default)]
    pub i2: f64,
    #[serde(default)]
    pub p2: f64,
    /// Sign of the toroidal flux, ±1.
    #[serde(default = "default_spsi")]
    pub spsi: f64,
    /// Reference field; defaults to spsi·B0.
    #[serde(rename = "Bbar", default, skip_serializing_if = "Option::is_none")]
    pub bbar: Option<f64>,
    #[serde(default)]
    pub vmec: VmecRunParams,
}

fn default_b0() -> f64 {
    1.0
}
fn default_spsi() -> f64 {
    1.0
}

/// Run-control and resolution parameters of the exported VMEC input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VmecRunParams {
    /// Near-axis radius of the boundary surface.
    #[serde(default = "default_radius")]
    pub r: f64,
    /// Poloidal resolution of the boundary grid.
    #[serde(default = "default_ntheta")]
    pub ntheta: usize,
    /// Cap on the NTOR value written to the namelist.
    #[serde(default = "default_ntor_max")]
    pub ntor_max: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mpol: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ntor: Option<usize>,
    #[serde(default = "default_delt")]
    pub delt: f64,
    #[serde(default = "default_nstep")]
    pub nstep: usize,
    #[serde(default = "default_tcon0")]
    pub tcon0: f64,
    #[serde(default = "default_ns_array")]
    pub ns_array: Vec<usize>,
    #[serde(default = "default_ftol_array")]
    pub ftol_array: Vec<f64>,
    #[serde(default = "default_niter_array")]
    pub niter_array: Vec<usize>,
}

fn default_radius() -> f64 {
    DEFAULT_BOUNDARY_RADIUS
}
fn default_ntheta() -> usize {
    DEFAULT_NTHETA
}
fn default_ntor_max() -> usize {
    DEFAULT_NTOR_WRITE_MAX
}
fn default_delt() -> f64 {
    0.9
}
fn default_nstep() -> usize {
    200
}
fn default_tcon0() -> f64 {
    2.0
}
fn default_ns_array() -> Vec<usize> {
    vec![16, 49, 101]
}
fn default_ftol_array() -> Vec<f64> {
    vec![1e-13, 1e-12, 1e-11]
}
fn default_niter_array() -> Vec<usize> {
    vec![1000, 1000, 1500]
}

impl Default for VmecRunParams {
    fn default() -> Self {
        VmecRunParams {
            r: default_radius(),
            ntheta: default_ntheta(),
            ntor_max: default_ntor_max(),
            mpol: None,
            ntor: None,
            delt: default_delt(),
            nstep: default_nstep(),
            tcon0: default_tcon0(),
            ns_array: default_ns_array(),
            ftol_array: default_ftol_array(),
            niter_array: default_niter_array(),
        }
    }
}

impl NearAxisConfig {
    /// Load from a JSON file and validate.
    pub fn from_file(path: &str) -> NearAxisResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    pub fn from_json_str(text: &str) -> NearAxisResult<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn nfp(&self) -> usize {
        self.axis.nfp
    }

    /// Number of toroidal samples of the shape and frame arrays.
    pub fn nphi(&self) -> usize {
        self.shape.first.x1c.len()
    }

    pub fn field_period(&self) -> f64 {
        self.axis.field_period()
    }

    pub fn bbar(&self) -> f64 {
        self.bbar.unwrap_or(self.spsi * self.b0)
    }

    /// The φ grid of the sampled arrays.
    pub fn phi_grid(&self) -> Vec<f64> {
        if !self.phi.is_empty() {
            return self.phi.clone();
        }
        let nphi = self.nphi();
        let dphi = self.field_period() / nphi as f64;
        (0..nphi).map(|j| j as f64 * dphi).collect()
    }

    /// Structural checks on the loaded record. The numerical routines assume
    /// these hold and do not repeat them.
    pub fn validate(&self) -> NearAxisResult<()> {
        if self.axis.nfp < 1 {
            return Err(NearAxisError::ConfigError(
                "Near-axis config requires nfp >= 1".to_string(),
            ));
        }
        if self.axis.rc.is_empty() {
            return Err(NearAxisError::ConfigError(
                "Axis requires at least one rc coefficient".to_string(),
            ));
        }
        let mut axis_coeffs = self
            .axis
            .rc
            .iter()
            .chain(&self.axis.zs)
            .chain(&self.axis.rs)
            .chain(&self.axis.zc);
        if axis_coeffs.any(|v| !v.is_finite()) {
            return Err(NearAxisError::ConfigError(
                "Axis contains non-finite coefficients".to_string(),
            ));
        }

        let scalars = [
            ("iota", self.iota),
            ("iotaN", self.iota_n),
            ("B0", self.b0),
            ("etabar", self.etabar),
            ("B2c", self.b2c),
            ("B2s", self.b2s),
            ("sigma0", self.sigma0),
            ("I2", self.i2),
            ("p2", self.p2),
            ("spsi", self.spsi),
            ("Bbar", self.bbar()),
            ("vmec.r", self.vmec.r),
        ];
        for (name, value) in scalars {
            if !value.is_finite() {
                return Err(NearAxisError::ConfigError(format!(
                    "Near-axis scalar '{name}' must be finite, got {value}"
                )));
            }
        }

        let nphi = self.nphi();
        if nphi < MIN_PHI_SAMPLES {
            return Err(NearAxisError::ConfigError(format!(
                "Near-axis config requires at least {MIN_PHI_SAMPLES} phi samples, got {nphi}"
            )));
        }

        let first = &self.shape.first;
        let mut arrays: Vec<(&str, &[f64])> = vec![
            ("X1c", first.x1c.as_slice()),
            ("X1s", first.x1s.as_slice()),
            ("Y1c", first.y1c.as_slice()),
            ("Y1s", first.y1s.as_slice()),
        ];
        for (label, field) in [
            ("tangent", &self.frame.tangent),
            ("normal", &self.frame.normal),
            ("binormal", &self.frame.binormal),
        ] {
            arrays.push((label, field.r.as_slice()));
            arrays.push((label, field.z.as_slice()));
            if !field.phi.is_empty() {
                arrays.push((label, field.phi.as_slice()));
            }
        }
        if let Some(second) = &self.shape.second {
            arrays.extend(second.named_arrays());
        }
        if !self.phi.is_empty() {
            arrays.push(("phi", self.phi.as_slice()));
        }
        for (name, values) in arrays {
            if values.len() != nphi {
                return Err(NearAxisError::ConfigError(format!(
                    "Array '{name}' has {} samples, expected {nphi}",
                    values.len()
                )));
            }
            if values.iter().any(|v| !v.is_finite()) {
                return Err(NearAxisError::ConfigError(format!(
                    "Array '{name}' contains non-finite samples"
                )));
            }
        }

        if !self.phi.is_empty() {
            let period = self.field_period();
            if self.phi[0] < 0.0 || self.phi[nphi - 1] >= period {
                return Err(NearAxisError::ConfigError(
                    "phi grid must lie in [0, 2*pi/nfp)".to_string(),
                ));
            }
            if self.phi.windows(2).any(|w| w[1] <= w[0]) {
                return Err(NearAxisError::ConfigError(
                    "phi grid must be strictly increasing".to_string(),
                ));
            }
        }

        if self.order.includes_second_order() && self.shape.second.is_none() {
            return Err(NearAxisError::ConfigError(format!(
                "Expansion order {} requires second-order shape arrays",
                self.order
            )));
        }
        if self.vmec.ntheta < 1 {
            return Err(NearAxisError::ConfigError(
                "vmec.ntheta must be >= 1".to_string(),
            ));
        }
        Ok(())
    }

    /// First-order configuration around a circular axis of radius `r0`.
    ///
    /// The axis curvature is 1/r0, so X1c = etabar·r0 and Y1s = 1/(etabar·r0).
    /// The frame is constant: tangent along φ, normal towards the machine
    /// centre, binormal along Z.
    pub fn circular_axis(r0: f64, nfp: usize, etabar: f64, nphi: usize) -> Self {
        NearAxisConfig {
            name: "circular-axis".to_string(),
            axis: AxisCurve {
                nfp,
                rc: vec![r0],
                zs: vec![0.0],
                rs: Vec::new(),
                zc: Vec::new(),
            },
            phi: Vec::new(),
            iota: 0.0,
            iota_n: 0.0,
            frame: LocalFrame {
                tangent: CylindricalVectorField::constant(nphi, 0.0, 1.0, 0.0),
                normal: CylindricalVectorField::constant(nphi, -1.0, 0.0, 0.0),
                binormal: CylindricalVectorField::constant(nphi, 0.0, 0.0, 1.0),
            },
            shape: ShapeCoefficients {
                first: FirstOrderShape {
                    x1c: vec![etabar * r0; nphi],
                    x1s: vec![0.0; nphi],
                    y1c: vec![0.0; nphi],
                    y1s: vec![1.0 / (etabar * r0); nphi],
                },
                second: None,
            },
            order: ExpansionOrder::First,
            lasym: false,
            b0: 1.0,
            etabar,
            b2c: 0.0,
            b2s: 0.0,
            sigma0: 0.0,
            i2: 0.0,
            p2: 0.0,
            spsi: 1.0,
            bbar: None,
            vmec: VmecRunParams::default(),
        }
    }
}
