//! # Core Models Module
//!
//! This module contains the fundamental data structures used to represent parsed
//! molecular structures in molfit, providing the foundation for all geometric and
//! alignment operations.
//!
//! ## Overview
//!
//! The models module defines a columnar representation of atomic data: a
//! [`frame::Frame`] stores one parallel sequence per atom field plus an N×3
//! coordinate matrix, and a [`structure::Structure`] owns the ordered frames
//! parsed from one file together with its header metadata. These models are
//! designed to:
//!
//! - **Freeze atom identity after parsing** - Atom count and identity fields are
//!   fixed at frame finalization; only coordinates remain mutable
//! - **Keep per-atom access cheap** - [`atom::AtomView`] borrows a row of the
//!   owning frame's columns instead of materializing copies
//! - **Enforce construction discipline** - [`builder::FrameBuilder`] is the only
//!   way to assemble a frame, and it is consumed by value on finalization
//!
//! ## Key Components
//!
//! - [`atom`] - Owned atom records for construction and borrowed row views
//! - [`builder`] - Append-then-freeze frame construction
//! - [`frame`] - One conformation: columnar atom table plus coordinate matrix
//! - [`structure`] - A parsed file: frames plus title/author/journal metadata

pub mod atom;
pub mod builder;
pub mod frame;
pub mod structure;
