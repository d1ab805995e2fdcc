//! # Workflows Module
//!
//! This module provides the high-level entry points that orchestrate complete
//! structure-comparison pipelines on top of the engine primitives.
//!
//! ## Overview
//!
//! Workflows are what callers reach for first. They wire the correspondence
//! and superposition engines together, report progress through structured
//! logging, and return a compact result summary, so the caller never touches
//! the intermediate matrices.
//!
//! ## Architecture
//!
//! - **Alignment Workflow** ([`align`]) - Full disordered-atom alignment of
//!   one frame onto another: correspondence discovery, optimal rotation, and
//!   repositioning at the target's original location.

pub mod align;
