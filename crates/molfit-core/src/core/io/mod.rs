//! Provides input functionality for fixed-column molecular file formats.
//!
//! This module implements a single-pass, record-dispatching parser for the
//! PDB/MOL2 family of formats. The four supported dialects (plain, PQR, PDBQT,
//! MOL2QT) share one coordinate-column layout and differ only in how the text
//! trailing the coordinates is interpreted, so one state machine handles them
//! all, parameterized by [`dialect::Dialect`].

pub mod dialect;
pub mod pdb;
