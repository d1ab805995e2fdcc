//! # Core Module
//!
//! This module provides the fundamental building blocks for molecular structure
//! handling in molfit, serving as the foundation the alignment engine and the
//! public workflows are built on.
//!
//! ## Overview
//!
//! The core module implements the data structures and low-level algorithms
//! required to load atomic structures from fixed-column text formats and to
//! manipulate their coordinates as rigid bodies.
//!
//! ## Architecture
//!
//! The module is organized into specialized submodules that handle different
//! aspects of structure handling:
//!
//! - **Molecular Representation** ([`models`]) - Columnar per-atom storage,
//!   frames, and file-level structures with header metadata
//! - **File I/O** ([`io`]) - The dialect-aware fixed-column parser for the
//!   PDB/MOL2 family (plain, PQR, PDBQT, MOL2QT)
//! - **Utilities** ([`utils`]) - Rotation matrix builders, RMSD, and atom
//!   identifier helpers shared across the crate
//!
//! ## Key Capabilities
//!
//! - **Multi-dialect parsing** with dual decimal/hexadecimal index handling and
//!   recovery from drifted coordinate columns
//! - **Multi-frame files** split on `END`/`ENDMDL` model markers
//! - **In-place rigid-body transforms** (translate, center, Euler and
//!   matrix rotation) over a uniform `nalgebra` coordinate representation

pub mod io;
pub mod models;
pub mod utils;
