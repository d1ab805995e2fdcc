//! # molfit Core Library
//!
//! A library for reading PDB/MOL2-family structure files and rigidly superposing
//! molecules, including the hard case where two files describe the same molecule
//! with different atom ordering and numbering.
//!
//! ## Architectural Philosophy
//!
//! The library is designed with a strict three-layer architecture to ensure a clear
//! separation of concerns, making it modular, testable, and extensible.
//!
//! - **[`core`]: The Foundation.** Contains the columnar molecular data model
//!   (`Frame`, `Structure`), the dialect-aware fixed-column parser, and pure
//!   geometric utilities (rotation builders, RMSD).
//!
//! - **[`engine`]: The Logic Core.** Implements the alignment machinery: the
//!   topology-fingerprint correspondence engine that pairs atoms across two
//!   structures without trusting names or indices, and the Kabsch solver that
//!   computes the optimal superposing rotation.
//!
//! - **[`workflows`]: The Public API.** This is the highest-level, user-facing
//!   layer. It ties the `engine` and `core` together to execute the complete
//!   alignment procedure and report before/after RMSD values. It provides a
//!   simple and powerful entry point for end-users of the library.

pub mod core;
pub mod engine;
pub mod workflows;
