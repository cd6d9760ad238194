//! Numerical primitives for SCPN Near-Axis.

pub mod fourier;
pub mod periodic;
pub mod roots;
pub mod spline;
pub mod tridiag;
