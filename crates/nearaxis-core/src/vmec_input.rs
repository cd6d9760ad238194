// ─────────────────────────────────────────────────────────────────────
// SCPN Near-Axis — VMEC Input Writer
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! `&INDATA` namelist export of a near-axis boundary.
//!
//! This module does not run VMEC. It turns a near-axis configuration into
//! the fixed-boundary input a VMEC run starts from: run control, profile
//! scalars, the magnetic axis guess and the boundary spectrum. Boundary
//! records can be read back for checks and downstream tooling.

use crate::cylindrical::cylindrical_boundary;
use crate::decompose::{decompose, ModeResolution};
use crate::reconstruct::SurfaceReconstructor;
use nearaxis_types::config::{NearAxisConfig, VmecRunParams};
use nearaxis_types::constants::{MU0, VMEC_MPOL_MAX, VMEC_NTOR_MAX};
use nearaxis_types::error::{NearAxisError, NearAxisResult};
use nearaxis_types::state::{ExpansionOrder, ModeSpectrum, SpectrumComponent};
use std::collections::HashSet;
use std::f64::consts::PI;
use std::fmt::Write as _;

/// Mode counts of the export, from explicit overrides or the grid sizes.
///
/// Defaults: mpol = min(ntheta / 2, 100), ntor = min(nphi / 2 + 1, 100).
pub fn resolve_resolution(config: &NearAxisConfig, params: &VmecRunParams) -> ModeResolution {
    let mpol = params
        .mpol
        .unwrap_or_else(|| (params.ntheta / 2).min(VMEC_MPOL_MAX));
    let ntor = params
        .ntor
        .unwrap_or_else(|| (config.nphi() / 2 + 1).min(VMEC_NTOR_MAX));
    ModeResolution::clamped(mpol, ntor)
}

/// Everything written to an `&INDATA` file.
#[derive(Debug, Clone)]
pub struct VmecInput {
    pub name: String,
    pub nfp: usize,
    pub lasym: bool,
    pub radius: f64,
    pub ntheta: usize,
    pub nphi: usize,
    pub resolution: ModeResolution,
    /// NTOR value of the namelist, capped at `params.ntor_max`.
    pub ntor_written: usize,
    pub params: VmecRunParams,
    pub etabar: f64,
    pub order: ExpansionOrder,
    pub sigma0: f64,
    pub i2: f64,
    pub b0: f64,
    pub phiedge: f64,
    pub am: [f64; 2],
    pub curtor: f64,
    pub raxis_cc: Vec<f64>,
    pub raxis_cs: Vec<f64>,
    pub zaxis_cc: Vec<f64>,
    pub zaxis_cs: Vec<f64>,
    pub spectrum: ModeSpectrum,
}

/// Combine a configuration with an already computed boundary spectrum.
///
/// VMEC expands in sin(mθ − nφ), which for m = 0 is −sin(nφ); the sine-type
/// axis coefficients change sign on export.
pub fn assemble_vmec_input(
    config: &NearAxisConfig,
    spectrum: ModeSpectrum,
    resolution: ModeResolution,
) -> VmecInput {
    let params = config.vmec.clone();
    let r = params.r;
    let r2 = r * r;
    let (raxis_cs, zaxis_cc) = if config.lasym {
        (
            config.axis.rs.iter().map(|v| -v).collect(),
            config.axis.zc.clone(),
        )
    } else {
        (Vec::new(), Vec::new())
    };

    VmecInput {
        name: config.name.clone(),
        nfp: config.nfp(),
        lasym: config.lasym,
        radius: r,
        ntheta: params.ntheta,
        nphi: config.nphi(),
        resolution,
        ntor_written: resolution.ntor.min(params.ntor_max),
        etabar: config.etabar,
        order: config.order,
        sigma0: config.sigma0,
        i2: config.i2,
        b0: config.b0,
        phiedge: PI * r2 * config.spsi * config.bbar(),
        am: [-config.p2 * r2, config.p2 * r2],
        curtor: 2.0 * PI / MU0 * config.i2 * r2,
        raxis_cc: config.axis.rc.clone(),
        raxis_cs,
        zaxis_cc,
        zaxis_cs: config.axis.zs.iter().map(|v| -v).collect(),
        spectrum,
        params,
    }
}

/// Full pipeline: interpolants, cylindrical boundary grid, decomposition.
pub fn build_vmec_input(config: &NearAxisConfig) -> NearAxisResult<VmecInput> {
    let params = &config.vmec;
    let resolution = resolve_resolution(config, params);
    let reconstructor = SurfaceReconstructor::new(config)?;
    let boundary = cylindrical_boundary(&reconstructor, params.r, params.ntheta, config.nphi())?;
    let spectrum = decompose(
        &boundary.r,
        &boundary.z,
        config.nfp(),
        resolution,
        config.lasym,
    );
    log::debug!(
        "VMEC input for '{}': r={}, mpol={}, ntor={}",
        config.name,
        params.r,
        resolution.mpol,
        resolution.ntor
    );
    Ok(assemble_vmec_input(config, spectrum, resolution))
}

/// `%+.16e` with an exponent of at least two digits, e.g. `+1.5000000000000000e-01`.
pub fn format_scientific(value: f64) -> String {
    let text = format!("{value:+.16e}");
    match text.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{mantissa}e{sign}{digits:0>2}")
        }
        None => text,
    }
}

fn join_display<T: std::fmt::Display>(values: &[T]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

fn join_scientific(values: &[f64]) -> String {
    values
        .iter()
        .map(|&v| format_scientific(v))
        .collect::<Vec<_>>()
        .join(", ")
}

impl VmecInput {
    /// Render the namelist text.
    pub fn to_indata(&self) -> String {
        let p = &self.params;
        let mut out = String::new();
        // Writing into a String cannot fail
        let _ = writeln!(
            out,
            "! &INDATA namelist generated from near-axis configuration '{}'",
            self.name
        );
        let _ = writeln!(
            out,
            "! Near-axis parameters:  radius r = {}, etabar = {}",
            self.radius, self.etabar
        );
        let _ = writeln!(
            out,
            "! nphi = {}, order = {}, sigma0 = {}, I2 = {}, B0 = {}",
            self.nphi, self.order, self.sigma0, self.i2, self.b0
        );
        let _ = writeln!(
            out,
            "! Resolution parameters: ntheta = {}, mpol = {}, ntor = {}",
            self.ntheta, self.resolution.mpol, self.resolution.ntor
        );
        out.push_str("!----- Runtime Parameters -----\n");
        out.push_str("&INDATA\n");
        let _ = writeln!(out, "  DELT = {}", p.delt);
        let _ = writeln!(out, "  NSTEP = {}", p.nstep);
        let _ = writeln!(out, "  TCON0 = {}", p.tcon0);
        let _ = writeln!(out, "  NS_ARRAY = {}", join_display(&p.ns_array));
        let ftol: Vec<String> = p.ftol_array.iter().map(|v| format!("{v:e}")).collect();
        let _ = writeln!(out, "  FTOL_ARRAY = {}", ftol.join(", "));
        let _ = writeln!(out, "  NITER_ARRAY = {}", join_display(&p.niter_array));

        out.push_str("!----- Grid Parameters -----\n");
        let _ = writeln!(out, "  LASYM = {}", if self.lasym { "T" } else { "F" });
        let _ = writeln!(out, "  NFP = {}", self.nfp);
        let _ = writeln!(out, "  MPOL = {}", self.resolution.mpol);
        let _ = writeln!(out, "  NTOR = {}", self.ntor_written);
        let _ = writeln!(out, "  PHIEDGE = {}", format_scientific(self.phiedge));

        out.push_str("!----- Pressure Parameters -----\n");
        out.push_str("  PRES_SCALE = 1\n");
        out.push_str("  PMASS_TYPE = 'power_series'\n");
        let _ = writeln!(out, "  AM = {}", join_scientific(&self.am));

        out.push_str("!----- Current/Iota Parameters -----\n");
        let _ = writeln!(out, "  CURTOR = {}", format_scientific(self.curtor));
        out.push_str("  NCURR = 1\n");
        out.push_str("  PCURR_TYPE = 'power_series'\n");
        out.push_str("  AC = 1\n");

        out.push_str("!----- Axis Parameters -----\n");
        let _ = writeln!(out, "  RAXIS_CC = {}", join_scientific(&self.raxis_cc));
        if self.lasym {
            let _ = writeln!(out, "  RAXIS_CS = {}", join_scientific(&self.raxis_cs));
            let _ = writeln!(out, "  ZAXIS_CC = {}", join_scientific(&self.zaxis_cc));
        }
        let _ = writeln!(out, "  ZAXIS_CS = {}", join_scientific(&self.zaxis_cs));

        out.push_str("!----- Boundary Parameters -----\n");
        let s = &self.spectrum;
        let ntor = s.ntor as i64;
        for m in 0..=s.mpol {
            for n in -ntor..=ntor {
                let rbc = s.get(SpectrumComponent::Rbc, m, n);
                let zbs = s.get(SpectrumComponent::Zbs, m, n);
                if rbc == 0.0 && zbs == 0.0 {
                    continue;
                }
                let _ = writeln!(
                    out,
                    "  RBC({n:03},{m:03}) = {},    ZBS({n:03},{m:03}) = {}",
                    format_scientific(rbc),
                    format_scientific(zbs)
                );
                if self.lasym {
                    let _ = writeln!(
                        out,
                        "  RBS({n:03},{m:03}) = {},    ZBC({n:03},{m:03}) = {}",
                        format_scientific(s.get(SpectrumComponent::Rbs, m, n)),
                        format_scientific(s.get(SpectrumComponent::Zbc, m, n))
                    );
                }
            }
        }
        out.push_str("/\n");
        out
    }

    pub fn write(&self, path: &str) -> NearAxisResult<()> {
        std::fs::write(path, self.to_indata())?;
        log::debug!("Wrote VMEC input {path}");
        Ok(())
    }
}

/// One `XXX(n,m) = value` boundary entry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundaryRecord {
    pub component: SpectrumComponent,
    pub n: i64,
    pub m: usize,
    pub value: f64,
}

fn component_from_key(key: &str) -> Option<SpectrumComponent> {
    match key {
        "RBC" => Some(SpectrumComponent::Rbc),
        "RBS" => Some(SpectrumComponent::Rbs),
        "ZBC" => Some(SpectrumComponent::Zbc),
        "ZBS" => Some(SpectrumComponent::Zbs),
        _ => None,
    }
}

fn parse_float(key: &str, text: &str) -> NearAxisResult<f64> {
    let val = text.parse::<f64>().map_err(|e| {
        NearAxisError::VmecFormat(format!("Failed to parse '{key}' value as float: {e}"))
    })?;
    if !val.is_finite() {
        return Err(NearAxisError::VmecFormat(format!(
            "Record '{key}' must be finite, got {val}"
        )));
    }
    Ok(val)
}

fn parse_int<T>(key: &str, text: &str) -> NearAxisResult<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    text.trim().parse::<T>().map_err(|e| {
        NearAxisError::VmecFormat(format!("Failed to parse '{key}' index as integer: {e}"))
    })
}

fn parse_record(entry: &str) -> NearAxisResult<BoundaryRecord> {
    let (lhs, rhs) = entry.split_once('=').ok_or_else(|| {
        NearAxisError::VmecFormat(format!("Invalid boundary record (missing '='): {entry}"))
    })?;
    let lhs = lhs.trim();
    let (key, indices) = lhs.split_once('(').ok_or_else(|| {
        NearAxisError::VmecFormat(format!("Boundary record without indices: {lhs}"))
    })?;
    let component = component_from_key(key.trim()).ok_or_else(|| {
        NearAxisError::VmecFormat(format!("Unknown boundary coefficient: {key}"))
    })?;
    let (n_text, m_text) = indices
        .strip_suffix(')')
        .and_then(|inner| inner.split_once(','))
        .ok_or_else(|| {
            NearAxisError::VmecFormat(format!("Boundary record needs (n,m) indices: {lhs}"))
        })?;
    Ok(BoundaryRecord {
        component,
        n: parse_int(lhs, n_text)?,
        m: parse_int(lhs, m_text)?,
        value: parse_float(lhs, rhs.trim())?,
    })
}

/// Split a line on the commas that separate records, not those inside `(n,m)`.
fn split_entries(line: &str) -> Vec<&str> {
    let mut entries = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (i, ch) in line.char_indices() {
        match ch {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                entries.push(&line[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    entries.push(&line[start..]);
    entries
        .into_iter()
        .map(str::trim)
        .filter(|e| !e.is_empty())
        .collect()
}

/// Read the RBC/RBS/ZBC/ZBS records of a namelist; other lines are skipped.
pub fn parse_boundary_records(text: &str) -> NearAxisResult<Vec<BoundaryRecord>> {
    let mut records = Vec::new();
    let mut seen: HashSet<(&'static str, i64, usize)> = HashSet::new();
    for raw_line in text.lines() {
        let line = raw_line.trim();
        let is_boundary = ["RBC(", "RBS(", "ZBC(", "ZBS("]
            .iter()
            .any(|prefix| line.starts_with(prefix));
        if !is_boundary {
            continue;
        }
        for entry in split_entries(line) {
            let record = parse_record(entry)?;
            let key = match record.component {
                SpectrumComponent::Rbc => "RBC",
                SpectrumComponent::Rbs => "RBS",
                SpectrumComponent::Zbc => "ZBC",
                SpectrumComponent::Zbs => "ZBS",
            };
            if !seen.insert((key, record.n, record.m)) {
                return Err(NearAxisError::VmecFormat(format!(
                    "Duplicate boundary record {key}({},{})",
                    record.n, record.m
                )));
            }
            records.push(record);
        }
    }
    Ok(records)
}

/// Collect records into a spectrum just large enough to hold them.
pub fn records_to_spectrum(records: &[BoundaryRecord]) -> ModeSpectrum {
    let mpol = records.iter().map(|r| r.m).max().unwrap_or(0);
    let ntor = records
        .iter()
        .map(|r| r.n.unsigned_abs() as usize)
        .max()
        .unwrap_or(0);
    let mut spectrum = ModeSpectrum::zeros(mpol, ntor);
    for record in records {
        spectrum.set(record.component, record.m, record.n, record.value);
    }
    spectrum
}

#[cfg(test)]
mod tests {
    use super::*;

    fn circular_config() -> NearAxisConfig {
        let mut cfg = NearAxisConfig::circular_axis(1.0, 3, 1.0, 8);
        cfg.name = "circular".to_string();
        cfg.vmec.ntheta = 16;
        cfg
    }

    #[test]
    fn test_resolution_defaults_and_clamping() {
        let cfg = circular_config();
        let res = resolve_resolution(&cfg, &cfg.vmec);
        assert_eq!(res, ModeResolution { mpol: 8, ntor: 5 });

        let big = NearAxisConfig::circular_axis(1.0, 3, 1.0, 301);
        let mut params = VmecRunParams {
            ntheta: 500,
            ..VmecRunParams::default()
        };
        assert_eq!(
            resolve_resolution(&big, &params),
            ModeResolution { mpol: 100, ntor: 100 }
        );

        params.mpol = Some(150);
        params.ntor = Some(7);
        assert_eq!(
            resolve_resolution(&big, &params),
            ModeResolution { mpol: 100, ntor: 7 }
        );
    }

    #[test]
    fn test_format_scientific_two_digit_exponent() {
        assert_eq!(format_scientific(1.0), "+1.0000000000000000e+00");
        assert_eq!(format_scientific(-0.00123), "-1.2300000000000000e-03");
        assert_eq!(format_scientific(0.0), "+0.0000000000000000e+00");
        assert_eq!(format_scientific(2.5e100), "+2.4999999999999999e+100");
        assert_eq!(format_scientific(-7.0e-12), "-7.0000000000000001e-12");
    }

    #[test]
    fn test_derived_scalars_and_axis_signs() {
        let mut cfg = circular_config();
        cfg.axis.rc = vec![1.0, 0.1];
        cfg.axis.zs = vec![0.0, 0.05];
        cfg.axis.rs = vec![0.0, 0.02];
        cfg.axis.zc = vec![0.0, 0.25];
        cfg.spsi = -1.0;
        cfg.b0 = 2.0;
        cfg.p2 = -1.5e5;
        cfg.i2 = 0.4;
        let input = assemble_vmec_input(&cfg, ModeSpectrum::zeros(1, 1), ModeResolution {
            mpol: 1,
            ntor: 1,
        });
        let r2 = 0.01;
        assert!((input.phiedge - PI * r2 * (-1.0) * (-2.0)).abs() < 1e-15);
        assert!((input.am[0] - 1.5e5 * r2).abs() < 1e-9);
        assert!((input.am[1] + 1.5e5 * r2).abs() < 1e-9);
        assert!((input.curtor - 2.0 * PI / MU0 * 0.4 * r2).abs() < 1e-6);
        assert_eq!(input.zaxis_cs, vec![-0.0, -0.05]);
        // Symmetric export carries no asymmetric axis terms
        assert!(input.raxis_cs.is_empty() && input.zaxis_cc.is_empty());

        cfg.lasym = true;
        let input = assemble_vmec_input(&cfg, ModeSpectrum::zeros(1, 1), ModeResolution {
            mpol: 1,
            ntor: 1,
        });
        assert_eq!(input.raxis_cs, vec![-0.0, -0.02]);
        assert_eq!(input.zaxis_cc, vec![0.0, 0.25]);
        let text = input.to_indata();
        assert!(text.contains("  RAXIS_CS = -0.0000000000000000e+00, -2.0000000000000000e-02\n"));
        assert!(text.contains("  ZAXIS_CC = +0.0000000000000000e+00, +2.5000000000000000e-01\n"));
        assert!(text.contains("  LASYM = T\n"));
    }

    #[test]
    fn test_record_filtering_and_lasym_lines() {
        let cfg = circular_config();
        let mut spectrum = ModeSpectrum::zeros(2, 1);
        spectrum.set(SpectrumComponent::Rbc, 0, 0, 1.0);
        spectrum.set(SpectrumComponent::Zbs, 1, -1, 0.0625);
        spectrum.set(SpectrumComponent::Rbs, 2, 1, 0.3);
        let res = ModeResolution { mpol: 2, ntor: 1 };
        let text = assemble_vmec_input(&cfg, spectrum.clone(), res).to_indata();

        let records: Vec<&str> = text.lines().filter(|l| l.contains("RBC(")).collect();
        assert_eq!(records.len(), 2, "{text}");
        assert!(text.contains(
            "  RBC(000,000) = +1.0000000000000000e+00,    ZBS(000,000) = +0.0000000000000000e+00\n"
        ));
        assert!(text.contains(
            "  RBC(-01,001) = +0.0000000000000000e+00,    ZBS(-01,001) = +6.2500000000000000e-02\n"
        ));
        // RBS alone does not make a record
        assert!(!text.contains("RBS("));

        let mut asym_cfg = cfg.clone();
        asym_cfg.lasym = true;
        let text = assemble_vmec_input(&asym_cfg, spectrum, res).to_indata();
        assert_eq!(text.lines().filter(|l| l.contains("RBS(")).count(), 2);
    }

    #[test]
    fn test_namelist_layout() {
        let cfg = circular_config();
        let text = build_vmec_input(&cfg).unwrap().to_indata();
        assert!(text.starts_with("! &INDATA namelist generated from near-axis configuration 'circular'\n"));
        assert!(text.contains("&INDATA\n"));
        assert!(text.contains("  DELT = 0.9\n"));
        assert!(text.contains("  NSTEP = 200\n"));
        assert!(text.contains("  NS_ARRAY = 16, 49, 101\n"));
        assert!(text.contains("  FTOL_ARRAY = 1e-13, 1e-12, 1e-11\n"));
        assert!(text.contains("  NITER_ARRAY = 1000, 1000, 1500\n"));
        assert!(text.contains("  LASYM = F\n"));
        assert!(text.contains("  NFP = 3\n"));
        assert!(text.contains("  MPOL = 8\n"));
        assert!(text.contains("  NTOR = 5\n"));
        assert!(text.contains("  PMASS_TYPE = 'power_series'\n"));
        assert!(text.contains("  RAXIS_CC = +1.0000000000000000e+00\n"));
        assert!(text.contains("  ZAXIS_CS = -0.0000000000000000e+00\n"));
        assert!(text.ends_with("/\n"));
    }

    #[test]
    fn test_ntor_written_is_capped() {
        let mut cfg = NearAxisConfig::circular_axis(1.0, 2, 1.0, 40);
        cfg.vmec.ntor_max = 14;
        let res = resolve_resolution(&cfg, &cfg.vmec);
        assert_eq!(res.ntor, 21);
        let input = assemble_vmec_input(&cfg, ModeSpectrum::zeros(res.mpol, res.ntor), res);
        assert_eq!(input.ntor_written, 14);
        assert_eq!(input.spectrum.ntor, 21);
        assert!(input.to_indata().contains("  NTOR = 14\n"));
    }

    #[test]
    fn test_circular_boundary_records_read_back() {
        let cfg = circular_config();
        let input = build_vmec_input(&cfg).unwrap();
        let records = parse_boundary_records(&input.to_indata()).unwrap();
        let spectrum = records_to_spectrum(&records);
        // R = 1 − r cos θ, Z = r sin θ
        assert!((spectrum.get(SpectrumComponent::Rbc, 0, 0) - 1.0).abs() < 1e-12);
        assert!((spectrum.get(SpectrumComponent::Rbc, 1, 0) + 0.1).abs() < 1e-12);
        assert!((spectrum.get(SpectrumComponent::Zbs, 1, 0) - 0.1).abs() < 1e-12);
        assert!(spectrum.get(SpectrumComponent::Rbc, 2, 1).abs() < 1e-12);
        assert!(records
            .iter()
            .all(|r| matches!(r.component, SpectrumComponent::Rbc | SpectrumComponent::Zbs)));
    }

    #[test]
    fn test_fixture_pipeline() {
        // CARGO_MANIFEST_DIR is crates/nearaxis-core/, fixtures live two levels up
        let path = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("..")
            .join("..")
            .join("configs")
            .join("circular_axis_nfp3.json");
        let cfg = NearAxisConfig::from_file(&path.to_string_lossy()).unwrap();
        let input = build_vmec_input(&cfg).unwrap();
        assert_eq!(input.resolution, ModeResolution { mpol: 8, ntor: 5 });
        assert!((input.phiedge - PI * 0.01).abs() < 1e-15);
        assert_eq!(input.curtor, 0.0);
        assert!((input.spectrum.get(SpectrumComponent::Rbc, 1, 0) + 0.1).abs() < 1e-12);
    }

    #[test]
    fn test_write_file() {
        let cfg = circular_config();
        let input = build_vmec_input(&cfg).unwrap();
        let path = std::env::temp_dir().join("nearaxis_vmec_input_test.circular");
        let path = path.to_string_lossy().to_string();
        input.write(&path).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text, input.to_indata());
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_parse_rejects_malformed_records() {
        let missing_m = "  RBC(001) = +1.0e+00\n";
        let err = parse_boundary_records(missing_m).expect_err("one index must fail");
        match err {
            NearAxisError::VmecFormat(msg) => assert!(msg.contains("(n,m)")),
            other => panic!("Unexpected error: {other:?}"),
        }

        let bad_value = "  RBC(000,001) = abc,    ZBS(000,001) = +1.0e-01\n";
        let err = parse_boundary_records(bad_value).expect_err("bad float must fail");
        match err {
            NearAxisError::VmecFormat(msg) => assert!(msg.contains("float")),
            other => panic!("Unexpected error: {other:?}"),
        }

        let duplicate = "  RBC(000,001) = +1.0e-01\n  RBC(000,001) = +2.0e-01\n";
        let err = parse_boundary_records(duplicate).expect_err("duplicate must fail");
        match err {
            NearAxisError::VmecFormat(msg) => assert!(msg.contains("Duplicate")),
            other => panic!("Unexpected error: {other:?}"),
        }

        let bad_key = "  RBC(000,001) = +1.0e-01,    XBS(000,001) = +1.0e-01\n";
        assert!(matches!(
            parse_boundary_records(bad_key),
            Err(NearAxisError::VmecFormat(_))
        ));
    }

    #[test]
    fn test_parse_skips_other_lines() {
        let text = "&INDATA\n  NFP = 3\n  RBC(-02,003) = -4.5e-03,    ZBS(-02,003) = +1.25e-02\n/\n";
        let records = parse_boundary_records(text).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(
            records[0],
            BoundaryRecord {
                component: SpectrumComponent::Rbc,
                n: -2,
                m: 3,
                value: -4.5e-3,
            }
        );
        assert_eq!(records[1].component, SpectrumComponent::Zbs);
        assert_eq!(records[1].value, 1.25e-2);
    }
}
