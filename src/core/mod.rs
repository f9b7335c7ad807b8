//! Core types for the bindu point analysis library.
//!
//! This module provides the fundamental pieces used throughout the library:
//! - [`Point`] and [`PointSet`]: labeled points on the real line
//! - [`math`]: tolerance-aware coordinate utilities ([`dedup_close`],
//!   [`exists_near`])

pub mod math;
mod point;

pub use math::{dedup_close, exists_near};
pub use point::{Point, PointSet};
