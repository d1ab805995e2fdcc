//! # Engine Module
//!
//! This module implements the structural alignment engine: it discovers which
//! atoms of two differently ordered frames describe the same chemical
//! positions, and computes the rigid-body rotation that superimposes one
//! frame onto the other.
//!
//! ## Overview
//!
//! Docking and simulation tools routinely renumber and reorder atoms, so two
//! files describing the same molecule rarely agree row for row. The engine
//! recovers a usable pairing from geometry alone and then solves the
//! classical orthogonal superposition problem on the paired subset.
//!
//! ## Architecture
//!
//! - **Atom Correspondence** ([`correspondence`]) - bond-graph topology
//!   fingerprints and the partial target-to-mobile row map derived from them
//! - **Rigid Superposition** ([`kabsch`]) - the closed-form optimal rotation
//!   between two centered, row-corresponded point sets
//! - **Error Handling** ([`error`]) - engine-specific error types

pub mod correspondence;
pub mod error;
pub mod kabsch;
