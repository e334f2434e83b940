//! Rendering of engine records.
//!
//! This module turns plain data records into user-facing output:
//! - [`terminal`] - colored terminal rendering
//! - [`json`] - machine-readable JSON rendering

pub mod json;
pub mod terminal;
