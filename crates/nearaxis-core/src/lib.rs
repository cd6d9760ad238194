//! Near-axis flux-surface reconstruction and VMEC boundary export.
//!
//! Pipeline: interpolants → reconstruction → cylindrical boundary grid →
//! mode decomposition → `&INDATA` namelist.

pub mod cylindrical;
pub mod decompose;
pub mod interpolants;
pub mod reconstruct;
pub mod vmec_input;
