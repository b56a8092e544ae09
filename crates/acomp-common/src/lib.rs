//! Common types and utilities for the acomp completion engine.
//!
//! This crate provides foundational types used across all acomp crates:
//! - Centralized scan limits and thresholds
//! - Row/column positions and single-row replacement ranges

// Centralized limits and thresholds
pub mod limits;

// Position/Range types for row/column buffer locations
pub mod position;
pub use position::{LineRange, Position};
