//! Shared low-level helpers: rotation matrix builders, RMSD, and atom
//! identifier utilities.

pub mod geometry;
pub mod identifiers;
