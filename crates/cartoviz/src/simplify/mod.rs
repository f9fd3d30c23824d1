//! Polyline simplification.

pub mod vw;

pub use vw::{simplify, VwSimplifier};
