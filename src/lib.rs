#![warn(missing_docs)]

//! # Bindu: 1D Labeled Point Set Analysis
//!
//! A small library for analyzing sets of labeled points on the real line:
//! collapsing near-duplicate points under a minimum-separation rule and
//! detecting regularly spaced subsequences (arithmetic progressions) within
//! a floating-point tolerance.
//!
//! ## Quick Start
//!
//! ```rust
//! use bindu::{PointSet, SpacingConfig};
//! use bindu::{filter_by_min_distance, has_regular_spacing};
//!
//! let points = PointSet::from_coordinates(&[0.05, 1.0, 2.01, 3.0, 3.02, 5.0, 5.01, 7.0, 9.0]);
//!
//! // Collapse points closer than 0.05 to the previous kept point
//! let filtered = filter_by_min_distance(&points, 0.05).unwrap();
//! assert_eq!(filtered.len(), 7);
//!
//! // Is there a run of >= 3 points spaced ~2.0 apart?
//! let config = SpacingConfig::default().with_eps(1e-3);
//! assert!(has_regular_spacing(&filtered, 2.0, &config));
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Fundamental types ([`Point`], [`PointSet`]) and tolerance math
//! - [`filter`]: Minimum-distance filtering
//! - [`spacing`]: Regular-spacing (arithmetic progression) detection
//! - [`io`]: CSV persistence for point sets
//! - [`acquire`]: Scoped multi-resource acquisition helper
//! - [`error`]: Error types
//!
//! ## Semantics
//!
//! All operations borrow their input and return fresh values; a `PointSet`
//! is never mutated by a transformation. Point attributes are opaque string
//! payload: preserved through filtering, ignored by all comparisons.
//!
//! Two tolerance boundaries look inconsistent but are intentional: duplicate
//! elimination keeps a value only when its gap to the last kept value is
//! strictly greater than `eps`, while the progression search accepts a match
//! at exactly `eps`. Both boundaries are part of the contract.

pub mod acquire;
pub mod core;
pub mod error;
pub mod filter;
pub mod io;
pub mod spacing;

pub use crate::acquire::ReleaseStack;
pub use crate::core::{dedup_close, exists_near, Point, PointSet};
pub use crate::error::{Error, Result};
pub use crate::filter::filter_by_min_distance;
pub use crate::io::{load_csv, read_csv, save_csv, write_csv};
pub use crate::spacing::{has_regular_spacing, has_regular_spacing_default, SpacingConfig};
