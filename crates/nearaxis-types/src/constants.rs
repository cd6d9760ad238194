// ─────────────────────────────────────────────────────────────────────
// SCPN Near-Axis — Constants
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
/// Vacuum permeability (H/m), 4π × 10⁻⁷.
pub const MU0: f64 = 4.0e-7 * std::f64::consts::PI;

/// Largest poloidal mode number the VMEC input arrays accept.
pub const VMEC_MPOL_MAX: usize = 100;

/// Largest toroidal mode number the VMEC input arrays accept.
pub const VMEC_NTOR_MAX: usize = 100;

/// Default cap on the NTOR value written to the namelist.
pub const DEFAULT_NTOR_WRITE_MAX: usize = 14;

/// Default poloidal resolution of the boundary grid.
pub const DEFAULT_NTHETA: usize = 20;

/// Default near-axis radius of the exported boundary.
pub const DEFAULT_BOUNDARY_RADIUS: f64 = 0.1;
